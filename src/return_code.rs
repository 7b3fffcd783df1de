use std::fmt::{Display, Formatter};

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Return codes of the hardware modem's command interface.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum ReturnCode {
    /// Command executed.
    Ok = 0x00,
    /// Unknown command.
    Unknown = 0x01,
    /// Command not implemented.
    NotImplemented = 0x02,
    /// Modem not initialized.
    NotInit = 0x03,
    /// Invalid command parameters.
    Invalid = 0x04,
    /// Modem busy.
    Busy = 0x05,
    /// Command failed.
    Fail = 0x06,
    /// Command CRC mismatch.
    BadCrc = 0x08,
    /// Command has an invalid size.
    BadSize = 0x0A,
    /// Framing error.
    FrameError = 0x0F,
    /// No time available.
    NoTime = 0x10,
    /// Invalid stack ID.
    InvalidStackId = 0x11,
    /// No pending event.
    NoEvent = 0x12,
}

impl TryFrom<u8> for ReturnCode {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u8(code).ok_or(code)
    }
}

impl Display for ReturnCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::NotImplemented => write!(f, "NOT_IMPLEMENTED"),
            Self::NotInit => write!(f, "NOT_INIT"),
            Self::Invalid => write!(f, "INVALID"),
            Self::Busy => write!(f, "BUSY"),
            Self::Fail => write!(f, "FAIL"),
            Self::BadCrc => write!(f, "BAD_CRC"),
            Self::BadSize => write!(f, "BAD_SIZE"),
            Self::FrameError => write!(f, "FRAME_ERROR"),
            Self::NoTime => write!(f, "NO_TIME"),
            Self::InvalidStackId => write!(f, "INVALID_STACK_ID"),
            Self::NoEvent => write!(f, "NO_EVENT"),
        }
    }
}
