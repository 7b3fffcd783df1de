use std::fmt::{Display, Formatter};

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// One-byte command codes of the hardware modem's serial interface.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Command {
    /// Query the firmware version.
    GetVersion = 0x10,
    /// Submit a radio transaction in a single frame.
    UspSubmit = 0xA0,
    /// Open a radio access session.
    RacOpen = 0xA2,
    /// Close a radio access session.
    RacClose = 0xA3,
    /// Wrapper for NHM segmented commands.
    NhmExtended = 0xA6,
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command as Self
    }
}

impl TryFrom<u8> for Command {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u8(code).ok_or(code)
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetVersion => write!(f, "GET_VERSION"),
            Self::UspSubmit => write!(f, "USP_SUBMIT"),
            Self::RacOpen => write!(f, "RAC_OPEN"),
            Self::RacClose => write!(f, "RAC_CLOSE"),
            Self::NhmExtended => write!(f, "NHM_EXTENDED"),
        }
    }
}
