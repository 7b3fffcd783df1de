use std::fmt::{Display, Formatter};

/// Progress of a radio transaction as reported by the modem.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TransactionStatus {
    /// The transaction finished and its results are final.
    Completed,
    /// Any other, not yet final, status.
    #[default]
    Pending,
    /// A status value this crate does not know.
    Other(u8),
}

impl TransactionStatus {
    const PENDING: u8 = 0;
    const COMPLETED: u8 = 1;
}

impl From<u8> for TransactionStatus {
    fn from(status: u8) -> Self {
        match status {
            Self::PENDING => Self::Pending,
            Self::COMPLETED => Self::Completed,
            other => Self::Other(other),
        }
    }
}

impl From<TransactionStatus> for u8 {
    fn from(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Pending => TransactionStatus::PENDING,
            TransactionStatus::Completed => TransactionStatus::COMPLETED,
            TransactionStatus::Other(other) => other,
        }
    }
}

impl Display for TransactionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "COMPLETED"),
            Self::Pending => write!(f, "PENDING"),
            Self::Other(other) => write!(f, "STATUS({other})"),
        }
    }
}
