use std::fmt::{Display, Formatter};

use crate::nhm::{CommandId, MessageType};

/// A response that does not belong to the exchange in progress.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mismatch {
    /// The response carries another command ID.
    CommandId { expected: CommandId, found: CommandId },
    /// The response is not of the expected message type.
    MessageType {
        expected: MessageType,
        found: MessageType,
    },
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandId { expected, found } => {
                write!(f, "unexpected command ID {found} (expected {expected})")
            }
            Self::MessageType { expected, found } => {
                write!(f, "unexpected message type {found} (expected {expected})")
            }
        }
    }
}
