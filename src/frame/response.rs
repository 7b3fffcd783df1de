use std::fmt::{Display, Formatter, UpperHex};

use crate::error::{Error, Malformed};
use crate::frame::{MAX_PAYLOAD_SIZE, Payload};
use crate::utils::HexSlice;
use crate::ReturnCode;

/// A response frame received from the modem.
///
/// The trailing CRC byte is carried as received; the modem's checksum is not verified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    bridge_header: u16,
    return_code: u8,
    payload: Payload,
    crc: u8,
}

impl Response {
    /// Size of the bridge header, return code and length byte preceding the payload.
    pub const PREFIX_SIZE: usize = 4;

    /// Minimum size of a response: prefix and CRC byte.
    pub const MIN_SIZE: usize = Self::PREFIX_SIZE + 1;

    /// Returns the bridge header.
    #[must_use]
    pub const fn bridge_header(&self) -> u16 {
        self.bridge_header
    }

    /// Returns the raw return code.
    #[must_use]
    pub const fn raw_return_code(&self) -> u8 {
        self.return_code
    }

    /// Returns the return code.
    ///
    /// # Errors
    ///
    /// Returns the raw byte if the code is unknown.
    pub fn return_code(&self) -> Result<ReturnCode, u8> {
        ReturnCode::try_from(self.return_code)
    }

    /// Returns `true` if the modem executed the command.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.return_code == ReturnCode::Ok as u8
    }

    /// Returns the response if the modem executed the command.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rejected`] carrying the return code otherwise.
    pub fn ok(self) -> crate::Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(Error::Rejected(self.return_code))
        }
    }

    /// Returns the payload.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns the received CRC byte.
    #[must_use]
    pub const fn crc(&self) -> u8 {
        self.crc
    }

    /// Consumes the response and returns its payload.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.return_code() {
            Ok(return_code) => write!(f, "RESPONSE({return_code}, {} bytes)", self.payload.len()),
            Err(code) => write!(f, "RESPONSE({code:#04X}, {} bytes)", self.payload.len()),
        }
    }
}

impl UpperHex for Response {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Response {{ bridge_header: ")?;
        UpperHex::fmt(&HexSlice::new(&self.bridge_header.to_be_bytes()), f)?;
        write!(f, ", return_code: ")?;
        UpperHex::fmt(&self.return_code, f)?;
        write!(f, ", payload: ")?;
        UpperHex::fmt(&HexSlice::new(&self.payload), f)?;
        write!(f, ", crc: ")?;
        UpperHex::fmt(&self.crc, f)?;
        write!(f, " }}")
    }
}

impl TryFrom<&[u8]> for Response {
    type Error = Malformed;

    fn try_from(buffer: &[u8]) -> Result<Self, Self::Error> {
        let [bridge0, bridge1, return_code, length, rest @ ..] = buffer else {
            return Err(Malformed::TooShort {
                expected: Self::MIN_SIZE,
                found: buffer.len(),
            });
        };

        let length = usize::from(*length);
        let (Some(payload), Some(crc)) = (rest.get(..length), rest.get(length)) else {
            return Err(Malformed::TooShort {
                expected: Self::MIN_SIZE + length,
                found: buffer.len(),
            });
        };

        Ok(Self {
            bridge_header: u16::from_be_bytes([*bridge0, *bridge1]),
            return_code: *return_code,
            payload: payload
                .try_into()
                .map_err(|()| Malformed::PayloadTooLarge {
                    max: MAX_PAYLOAD_SIZE,
                    size: payload.len(),
                })?,
            crc: *crc,
        })
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::Response;
    use crate::error::{Error, Malformed};
    use crate::ReturnCode;

    #[test]
    fn test_version() {
        let response =
            Response::try_from([0x01, 0x00, 0x00, 0x03, 0x04, 0x02, 0x00, 0x5A].as_slice())
                .unwrap();
        assert_eq!(response.bridge_header(), 0x0100);
        assert_eq!(response.return_code(), Ok(ReturnCode::Ok));
        assert!(response.is_ok());
        assert_eq!(response.payload(), &[0x04, 0x02, 0x00]);
        assert_eq!(response.crc(), 0x5A);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let response =
            Response::try_from([0x01, 0x00, 0x00, 0x01, 0x07, 0x00, 0xFF, 0xFF].as_slice())
                .unwrap();
        assert_eq!(response.payload(), &[0x07]);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            Response::try_from([0x01, 0x00, 0x00, 0x00].as_slice()),
            Err(Malformed::TooShort {
                expected: 5,
                found: 4
            })
        );
        assert_eq!(
            Response::try_from([0x01, 0x00, 0x00, 0x02, 0x01, 0x02].as_slice()),
            Err(Malformed::TooShort {
                expected: 7,
                found: 6
            })
        );
    }

    #[test]
    fn test_rejected() {
        let response = Response::try_from([0x01, 0x00, 0x05, 0x00, 0x00].as_slice()).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.return_code(), Ok(ReturnCode::Busy));
        assert!(matches!(response.ok(), Err(Error::Rejected(0x05))));
    }

    #[test]
    fn test_unknown_return_code() {
        let response = Response::try_from([0x01, 0x00, 0x42, 0x00, 0x00].as_slice()).unwrap();
        assert_eq!(response.return_code(), Err(0x42));
        assert_eq!(response.to_string(), "RESPONSE(0x42, 0 bytes)");
    }
}
