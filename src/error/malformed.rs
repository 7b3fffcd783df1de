use std::fmt::{Display, Formatter};

/// Details of a malformed header or frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Malformed {
    /// Fewer bytes than the structure requires.
    TooShort { expected: usize, found: usize },
    /// A payload does not fit into its frame.
    PayloadTooLarge { max: usize, size: usize },
    /// The frame source ended before the final segment arrived.
    Incomplete { segments: usize },
    /// The external result decoder could not make sense of a payload.
    Undecodable(String),
}

impl Display for Malformed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { expected, found } => write!(
                f,
                "too few bytes: expected at least {expected} bytes but found {found} bytes"
            ),
            Self::PayloadTooLarge { max, size } => write!(f, "payload too large: {size} > {max}"),
            Self::Incomplete { segments } => {
                write!(f, "frame source ended after {segments} non-final segments")
            }
            Self::Undecodable(reason) => write!(f, "undecodable payload: {reason}"),
        }
    }
}
