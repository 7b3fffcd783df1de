use std::fmt::{Display, Formatter};

/// What timed out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Timeout {
    /// The transaction did not complete within the given number of poll attempts.
    Attempts(usize),
    /// The radio reported that no packet arrived within the reception window.
    Rx,
}

impl Display for Timeout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attempts(attempts) => write!(f, "no result after {attempts} polling attempts"),
            Self::Rx => write!(f, "no packet received within the RX window"),
        }
    }
}
