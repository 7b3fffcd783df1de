use std::fmt::{Display, Formatter};

use crate::ping_pong::Kind;
use crate::utils::HexSlice;

/// Reasons for rejecting a ping-pong payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Invalid {
    /// The payload is shorter than a ping-pong message.
    TooShort(usize),
    /// The separator byte is not zero.
    Separator(u8),
    /// The prefix is neither `PING` nor `PONG`.
    Prefix([u8; 4]),
    /// A well-formed message of the wrong kind.
    Kind { expected: Kind, found: Kind },
    /// A well-formed message echoing the wrong counter.
    Counter { expected: u8, found: u8 },
}

impl Display for Invalid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort(size) => write!(f, "payload too short: {size} < 6"),
            Self::Separator(separator) => {
                write!(f, "invalid separator: expected 0x00, got {separator:#04x}")
            }
            Self::Prefix(prefix) => write!(
                f,
                "unknown prefix: expected PING/PONG, got {}",
                HexSlice::new(prefix)
            ),
            Self::Kind { expected, found } => write!(f, "expected {expected}, got {found}"),
            Self::Counter { expected, found } => {
                write!(f, "expected counter {expected}, got {found}")
            }
        }
    }
}
