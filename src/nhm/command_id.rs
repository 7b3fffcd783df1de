use std::fmt::{Display, Formatter};

const MASK: u16 = 0x0FFF;

/// A twelve bit NHM command identifier.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct CommandId(u16);

impl CommandId {
    /// Submit a radio transaction.
    pub const USP_SUBMIT: Self = Self(0x100);
    /// Fetch the result of the last transaction.
    pub const USP_GET_RESULTS: Self = Self(0x102);
    /// Fetch the next segment of a segmented response.
    pub const USP_GET_NEXT_SEGMENT: Self = Self(0x103);
    /// The largest representable command ID.
    pub const MAX: Self = Self(MASK);

    /// Creates a command ID from the twelve least significant bits of `n`.
    #[must_use]
    pub const fn from_u16_lossy(n: u16) -> Self {
        Self(n & MASK)
    }

    /// Creates a command ID from its high nibble and low byte.
    ///
    /// The upper four bits of `high` are ignored.
    #[must_use]
    pub const fn from_parts(high: u8, low: u8) -> Self {
        Self::from_u16_lossy(u16::from_be_bytes([high, low]))
    }

    /// Returns the command ID as an u16.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns bits 11..8.
    #[must_use]
    pub const fn high_nibble(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns bits 7..0.
    #[must_use]
    pub const fn low_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl TryFrom<u16> for CommandId {
    type Error = u16;

    fn try_from(n: u16) -> Result<Self, Self::Error> {
        if n > MASK {
            Err(n)
        } else {
            Ok(Self(n))
        }
    }
}

impl Display for CommandId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#05X}", self.0)
    }
}

impl PartialEq<u16> for CommandId {
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::CommandId;

    #[test]
    fn test_from_u16_lossy() {
        assert_eq!(CommandId::from_u16_lossy(0xF102), 0x102);
        assert_eq!(CommandId::from_u16_lossy(0x0FFF), CommandId::MAX);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(CommandId::try_from(0x103), Ok(CommandId::USP_GET_NEXT_SEGMENT));
        assert_eq!(CommandId::try_from(0x1000), Err(0x1000));
    }

    #[test]
    fn test_parts() {
        let command_id = CommandId::USP_GET_RESULTS;
        assert_eq!(command_id.high_nibble(), 0x01);
        assert_eq!(command_id.low_byte(), 0x02);
        assert_eq!(CommandId::from_parts(0xF1, 0x02), command_id);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(CommandId::USP_SUBMIT.to_string(), "0x100");
        assert_eq!(CommandId::from_u16_lossy(0x00A).to_string(), "0x00A");
    }
}
