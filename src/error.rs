//! Errors of the NHM link, the modem API and the ping-pong protocol.

use std::fmt::{Display, Formatter};

use crate::transaction::RadioStatus;
use crate::ReturnCode;

pub use invalid::Invalid;
pub use limit::Limit;
pub use malformed::Malformed;
pub use mismatch::Mismatch;
pub use timeout::Timeout;

mod invalid;
mod limit;
mod malformed;
mod mismatch;
mod timeout;

/// Result type with [`Error`] as the error variant.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the modem.
#[derive(Debug)]
pub enum Error {
    /// A header or frame is malformed or undersized.
    Format(Malformed),
    /// A response carried an unexpected command ID or message type.
    ProtocolMismatch(Mismatch),
    /// Poll attempts were exhausted or a reception window expired.
    Timeout(Timeout),
    /// Writing to or reading from the link failed.
    Transport(std::io::Error),
    /// A ping-pong payload was rejected.
    Validation(Invalid),
    /// A segmented message exceeded the segment count or size bound.
    LimitExceeded(Limit),
    /// The modem answered with a non-OK return code.
    Rejected(u8),
    /// A transaction completed with a radio status the caller could not use.
    Radio(u8),
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::ProtocolMismatch(_) => ErrorKind::ProtocolMismatch,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Validation(_) => ErrorKind::Validation,
            Self::LimitExceeded(_) => ErrorKind::LimitExceeded,
            Self::Rejected(_) => ErrorKind::Rejected,
            Self::Radio(_) => ErrorKind::Radio,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(malformed) => write!(f, "Format error: {malformed}"),
            Self::ProtocolMismatch(mismatch) => write!(f, "Protocol mismatch: {mismatch}"),
            Self::Timeout(timeout) => write!(f, "Timeout: {timeout}"),
            Self::Transport(error) => write!(f, "Transport error: {error}"),
            Self::Validation(invalid) => write!(f, "Invalid payload: {invalid}"),
            Self::LimitExceeded(limit) => write!(f, "Limit exceeded: {limit}"),
            Self::Rejected(code) => match ReturnCode::try_from(*code) {
                Ok(return_code) => write!(f, "Modem rejected command: {return_code}"),
                Err(code) => write!(f, "Modem rejected command with unknown code: {code:#04X}"),
            },
            Self::Radio(status) => match RadioStatus::try_from(*status) {
                Ok(radio_status) => write!(f, "Unexpected radio status: {radio_status}"),
                Err(status) => write!(f, "Unknown radio status: {status}"),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Transport(error)
    }
}

impl From<Malformed> for Error {
    fn from(malformed: Malformed) -> Self {
        Self::Format(malformed)
    }
}

impl From<Mismatch> for Error {
    fn from(mismatch: Mismatch) -> Self {
        Self::ProtocolMismatch(mismatch)
    }
}

impl From<Invalid> for Error {
    fn from(invalid: Invalid) -> Self {
        Self::Validation(invalid)
    }
}

impl From<Limit> for Error {
    fn from(limit: Limit) -> Self {
        Self::LimitExceeded(limit)
    }
}

/// Fieldless category of an [`Error`], suitable for logging and metrics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// See [`Error::Format`].
    Format,
    /// See [`Error::ProtocolMismatch`].
    ProtocolMismatch,
    /// See [`Error::Timeout`].
    Timeout,
    /// See [`Error::Transport`].
    Transport,
    /// See [`Error::Validation`].
    Validation,
    /// See [`Error::LimitExceeded`].
    LimitExceeded,
    /// See [`Error::Rejected`].
    Rejected,
    /// See [`Error::Radio`].
    Radio,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format => write!(f, "format"),
            Self::ProtocolMismatch => write!(f, "protocol mismatch"),
            Self::Timeout => write!(f, "timeout"),
            Self::Transport => write!(f, "transport"),
            Self::Validation => write!(f, "validation"),
            Self::LimitExceeded => write!(f, "limit exceeded"),
            Self::Rejected => write!(f, "rejected"),
            Self::Radio => write!(f, "radio"),
        }
    }
}
