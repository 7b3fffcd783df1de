use std::fmt::{Display, Formatter, UpperHex};
use std::iter::{Chain, Copied, Once, once};
use std::slice::Iter;

use crate::error::Malformed;
use crate::frame::{MAX_PAYLOAD_SIZE, Payload};
use crate::nhm::Segment;
use crate::utils::HexSlice;
use crate::Command;

/// A command frame sent to the modem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    command: Command,
    payload: Payload,
}

impl Request {
    /// Creates a new request.
    ///
    /// # Errors
    ///
    /// Returns [`Malformed::PayloadTooLarge`] if the payload exceeds 255 bytes.
    pub fn new(command: Command, payload: &[u8]) -> Result<Self, Malformed> {
        Ok(Self {
            command,
            payload: payload.try_into().map_err(|()| Malformed::PayloadTooLarge {
                max: MAX_PAYLOAD_SIZE,
                size: payload.len(),
            })?,
        })
    }

    /// Creates a request without payload.
    #[must_use]
    pub const fn empty(command: Command) -> Self {
        Self {
            command,
            payload: Payload::new(),
        }
    }

    /// Wraps an NHM segment into an extended command.
    #[must_use]
    pub fn nhm(segment: &Segment<'_>) -> Self {
        Self {
            command: Command::NhmExtended,
            payload: segment.iter().collect(),
        }
    }

    /// Returns the command.
    #[must_use]
    pub const fn command(&self) -> Command {
        self.command
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns an iterator over the encoded frame.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.into_iter()
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({} bytes)", self.command, self.payload.len())
    }
}

impl UpperHex for Request {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request {{ command: ")?;
        UpperHex::fmt(&u8::from(self.command), f)?;
        write!(f, ", payload: ")?;
        UpperHex::fmt(&HexSlice::new(&self.payload), f)?;
        write!(f, " }}")
    }
}

impl<'req> IntoIterator for &'req Request {
    type Item = u8;
    type IntoIter = Chain<Chain<Once<u8>, Once<u8>>, Copied<Iter<'req, u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        let length = self.payload.len() as u8;

        once(self.command.into())
            .chain(once(length))
            .chain(self.payload.iter().copied())
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::Request;
    use crate::error::Malformed;
    use crate::nhm::{CommandId, Segments};
    use crate::Command;

    #[test]
    fn test_rac_open() {
        let request = Request::new(Command::RacOpen, &[0x01]).unwrap();
        assert_eq!(request.iter().collect::<Vec<_>>(), [0xA2, 0x01, 0x01]);
    }

    #[test]
    fn test_get_version() {
        let request = Request::empty(Command::GetVersion);
        assert_eq!(request.iter().collect::<Vec<_>>(), [0x10, 0x00]);
        assert_eq!(request.to_string(), "GET_VERSION(0 bytes)");
    }

    #[test]
    fn test_nhm_get_results() {
        let segment = Segments::command(&[], CommandId::USP_GET_RESULTS)
            .next()
            .unwrap();
        let request = Request::nhm(&segment);
        assert_eq!(
            request.iter().collect::<Vec<_>>(),
            [0xA6, 0x04, 0x21, 0x02, 0x00, 0x00]
        );
    }

    #[test]
    fn test_payload_too_large() {
        assert_eq!(
            Request::new(Command::UspSubmit, &[0; 256]),
            Err(Malformed::PayloadTooLarge {
                max: 255,
                size: 256
            })
        );
    }

    #[test]
    fn test_upper_hex() {
        let request = Request::new(Command::RacClose, &[0x01]).unwrap();
        assert_eq!(
            format!("{request:X}"),
            "Request { command: A3, payload: 01 }"
        );
    }
}
