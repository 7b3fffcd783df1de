//! Segmentation header.

use std::fmt::{Display, Formatter};

use bitflags::bitflags;

use crate::error::Malformed;
use crate::nhm::{CommandId, HEADER_SIZE};

/// Type of an NHM message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum MessageType {
    /// Reserved for future use.
    Rfu = 0,
    /// A request from the host.
    Command = 1,
    /// The modem's answer to a command.
    Response = 2,
    /// An unsolicited message from the modem.
    Notification = 3,
    /// Reserved value 4.
    Reserved4 = 4,
    /// Reserved value 5.
    Reserved5 = 5,
    /// Reserved value 6.
    Reserved6 = 6,
    /// Reserved value 7.
    Reserved7 = 7,
}

impl MessageType {
    /// Creates a message type from the three least significant bits of `n`.
    #[must_use]
    pub const fn from_u8_lossy(n: u8) -> Self {
        match n & 0b111 {
            0 => Self::Rfu,
            1 => Self::Command,
            2 => Self::Response,
            3 => Self::Notification,
            4 => Self::Reserved4,
            5 => Self::Reserved5,
            6 => Self::Reserved6,
            _ => Self::Reserved7,
        }
    }

    /// Returns the three bit wire value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rfu => write!(f, "RFU"),
            Self::Command => write!(f, "COMMAND"),
            Self::Response => write!(f, "RESPONSE"),
            Self::Notification => write!(f, "NOTIFICATION"),
            reserved => write!(f, "RESERVED({})", reserved.as_u8()),
        }
    }
}

/// Marks whether a segment terminates its message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Boundary {
    /// An unsegmented message or the last segment of one.
    CompleteOrLast,
    /// More segments follow.
    NotLast,
}

impl Boundary {
    /// Returns `true` if no further segments follow.
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::CompleteOrLast)
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompleteOrLast => write!(f, "LAST"),
            Self::NotLast => write!(f, "NOT_LAST"),
        }
    }
}

/// First header byte.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct Control(u8);

bitflags! {
    impl Control: u8 {
        /// The message type mask.
        const MESSAGE_TYPE = 0b1110_0000;
        /// The boundary flag, set on segments that are followed by more segments.
        const NOT_LAST = 0b0001_0000;
        /// The mask of the command ID's high nibble.
        const COMMAND_ID_HIGH = 0b0000_1111;
    }
}

impl Control {
    const fn new(message_type: MessageType, boundary: Boundary, command_id: CommandId) -> Self {
        let mut raw = (Self::MESSAGE_TYPE.bits()
            & (message_type.as_u8() << Self::MESSAGE_TYPE.bits().trailing_zeros()))
            | (Self::COMMAND_ID_HIGH.bits() & command_id.high_nibble());

        if !boundary.is_last() {
            raw |= Self::NOT_LAST.bits();
        }

        Self(raw)
    }

    const fn message_type(self) -> MessageType {
        MessageType::from_u8_lossy(
            (self.bits() & Self::MESSAGE_TYPE.bits()) >> Self::MESSAGE_TYPE.bits().trailing_zeros(),
        )
    }

    const fn boundary(self) -> Boundary {
        if self.bits() & Self::NOT_LAST.bits() == 0 {
            Boundary::CompleteOrLast
        } else {
            Boundary::NotLast
        }
    }

    const fn command_id_high(self) -> u8 {
        self.bits() & Self::COMMAND_ID_HIGH.bits()
    }
}

/// The four byte segmentation header.
///
/// `length` is the exact number of payload bytes following the header in its frame.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Header {
    message_type: MessageType,
    boundary: Boundary,
    command_id: CommandId,
    length: u8,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub const fn new(
        message_type: MessageType,
        boundary: Boundary,
        command_id: CommandId,
        length: u8,
    ) -> Self {
        Self {
            message_type,
            boundary,
            command_id,
            length,
        }
    }

    /// Returns the message type.
    #[must_use]
    pub const fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Returns the boundary flag.
    #[must_use]
    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns the command ID.
    #[must_use]
    pub const fn command_id(&self) -> CommandId {
        self.command_id
    }

    /// Returns the payload length.
    #[must_use]
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Encodes the header into its wire representation.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        [
            Control::new(self.message_type, self.boundary, self.command_id).bits(),
            self.command_id.low_byte(),
            0x00,
            self.length,
        ]
    }

    /// Decodes a header from the first four bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed::TooShort`] if fewer than four bytes are supplied.
    pub fn decode(bytes: &[u8]) -> Result<Self, Malformed> {
        let [control, command_id_low, _reserved, length, ..] = bytes else {
            return Err(Malformed::TooShort {
                expected: HEADER_SIZE,
                found: bytes.len(),
            });
        };

        let control = Control::from_bits_retain(*control);

        Ok(Self {
            message_type: control.message_type(),
            boundary: control.boundary(),
            command_id: CommandId::from_parts(control.command_id_high(), *command_id_low),
            length: *length,
        })
    }
}

impl From<Header> for [u8; HEADER_SIZE] {
    fn from(header: Header) -> Self {
        header.to_bytes()
    }
}

impl TryFrom<&[u8]> for Header {
    type Error = Malformed;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(bytes)
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NHM({}, {}, {}, {})",
            self.message_type, self.boundary, self.command_id, self.length
        )
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{Boundary, Control, Header, MessageType};
    use crate::error::Malformed;
    use crate::nhm::CommandId;

    #[test]
    fn test_offset() {
        assert_eq!(Control::MESSAGE_TYPE.bits().trailing_zeros(), 5);
    }

    #[test]
    fn test_get_results_command() {
        let header = Header::new(
            MessageType::Command,
            Boundary::CompleteOrLast,
            CommandId::USP_GET_RESULTS,
            0,
        );
        assert_eq!(header.to_bytes(), [0x21, 0x02, 0x00, 0x00]);
    }

    #[test]
    fn test_intermediate_response() {
        let header = Header::decode(&[0x51, 0x02, 0x00, 0xFB]).unwrap();
        assert_eq!(header.message_type(), MessageType::Response);
        assert_eq!(header.boundary(), Boundary::NotLast);
        assert_eq!(header.command_id(), CommandId::USP_GET_RESULTS);
        assert_eq!(header.length(), 251);
    }

    #[test]
    fn test_reserved_byte_is_ignored() {
        let header = Header::decode(&[0x41, 0x03, 0xAA, 0x06]).unwrap();
        assert_eq!(header.to_bytes(), [0x41, 0x03, 0x00, 0x06]);
    }

    #[test]
    fn test_decode_too_short() {
        let bytes = [0x41, 0x03, 0x00];

        for size in 0..=bytes.len() {
            assert_eq!(
                Header::decode(&bytes[..size]),
                Err(Malformed::TooShort {
                    expected: 4,
                    found: size
                })
            );
        }
    }

    #[test]
    fn test_to_string() {
        let header = Header::new(
            MessageType::Response,
            Boundary::NotLast,
            CommandId::USP_GET_RESULTS,
            251,
        );
        assert_eq!(header.to_string(), "NHM(RESPONSE, NOT_LAST, 0x102, 251)");
    }

    #[test]
    fn test_message_type_is_canonical() {
        for n in 0..=u8::MAX {
            let message_type = MessageType::from_u8_lossy(n);
            assert_eq!(message_type.as_u8(), n & 0b111);
            assert_eq!(MessageType::from_u8_lossy(message_type.as_u8()), message_type);
        }

        assert_eq!(MessageType::from_u8_lossy(0b1010), MessageType::Response);
        assert_eq!(MessageType::Reserved6.to_string(), "RESERVED(6)");
    }

    proptest! {
        #[test]
        fn test_round_trip(
            message_type in 0u8..8,
            not_last in any::<bool>(),
            command_id in 0u16..4096,
            length in any::<u8>(),
        ) {
            let boundary = if not_last { Boundary::NotLast } else { Boundary::CompleteOrLast };
            let header = Header::new(
                MessageType::from_u8_lossy(message_type),
                boundary,
                CommandId::from_u16_lossy(command_id),
                length,
            );
            let decoded = Header::decode(&header.to_bytes()).unwrap();
            prop_assert_eq!(decoded.message_type().as_u8(), message_type);
            prop_assert_eq!(decoded.boundary(), boundary);
            prop_assert_eq!(decoded.command_id().as_u16(), command_id);
            prop_assert_eq!(decoded.length(), length);
        }
    }
}
