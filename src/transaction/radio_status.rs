use std::fmt::{Display, Formatter};

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Outcome of the radio operation of a transaction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum RadioStatus {
    /// A packet was received with a CRC error.
    RxCrcError = 0,
    /// Channel activity detected.
    CadPositive = 1,
    /// No channel activity detected.
    CadNegative = 2,
    /// Transmission done.
    TxDone = 3,
    /// A packet was received.
    RxPacket = 4,
    /// No packet was received within the RX window.
    RxTimeout = 5,
    /// Listen-before-talk found the channel free.
    LbtFree = 6,
    /// Listen-before-talk found the channel busy.
    LbtBusy = 7,
    /// Wi-Fi scan done.
    WifiScanDone = 8,
    /// GNSS scan done.
    GnssScanDone = 9,
    /// The task was aborted.
    TaskAborted = 10,
    /// The task is initialized but has not run yet.
    TaskInit = 11,
    /// LR-FHSS hop.
    LrFhssHop = 12,
    /// A ranging request was discarded.
    RttofReqDiscarded = 13,
    /// A ranging response was sent.
    RttofRespDone = 14,
    /// A ranging exchange is valid.
    RttofExchValid = 15,
    /// A ranging exchange timed out.
    RttofTimeout = 16,
}

impl TryFrom<u8> for RadioStatus {
    type Error = u8;

    fn try_from(status: u8) -> Result<Self, Self::Error> {
        Self::from_u8(status).ok_or(status)
    }
}

impl Display for RadioStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RxCrcError => write!(f, "RX_CRC_ERROR"),
            Self::CadPositive => write!(f, "CAD_POSITIVE"),
            Self::CadNegative => write!(f, "CAD_NEGATIVE"),
            Self::TxDone => write!(f, "TX_DONE"),
            Self::RxPacket => write!(f, "RX_PACKET"),
            Self::RxTimeout => write!(f, "RX_TIMEOUT"),
            Self::LbtFree => write!(f, "LBT_FREE"),
            Self::LbtBusy => write!(f, "LBT_BUSY"),
            Self::WifiScanDone => write!(f, "WIFI_SCAN_DONE"),
            Self::GnssScanDone => write!(f, "GNSS_SCAN_DONE"),
            Self::TaskAborted => write!(f, "TASK_ABORTED"),
            Self::TaskInit => write!(f, "TASK_INIT"),
            Self::LrFhssHop => write!(f, "LR_FHSS_HOP"),
            Self::RttofReqDiscarded => write!(f, "RTTOF_REQ_DISCARDED"),
            Self::RttofRespDone => write!(f, "RTTOF_RESP_DONE"),
            Self::RttofExchValid => write!(f, "RTTOF_EXCH_VALID"),
            Self::RttofTimeout => write!(f, "RTTOF_TIMEOUT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RadioStatus;

    #[test]
    fn test_try_from() {
        assert_eq!(RadioStatus::try_from(3), Ok(RadioStatus::TxDone));
        assert_eq!(RadioStatus::try_from(4), Ok(RadioStatus::RxPacket));
        assert_eq!(RadioStatus::try_from(16), Ok(RadioStatus::RttofTimeout));
        assert_eq!(RadioStatus::try_from(17), Err(17));
    }
}
