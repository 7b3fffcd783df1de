//! Radio transactions and their results.
//!
//! The serialized transaction context and the encoded result are opaque to this crate. They are
//! produced and consumed by a [`ContextBuilder`] and a [`ResultDecoder`] supplied by the caller.

use crate::error::Result;

pub use config::{Bandwidth, CodingRate, HeaderType, RadioConfig, SpreadingFactor, SyncWord};
pub use radio_status::RadioStatus;
pub use request::{Direction, Scheduler, TransactionRequest};
pub use status::TransactionStatus;

mod config;
mod radio_status;
mod request;
mod status;

/// The decoded result of a radio transaction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransactionResult {
    /// Progress of the transaction.
    pub status: TransactionStatus,
    /// Return code of the radio access layer.
    pub return_code: u8,
    /// Raw radio status, see [`RadioStatus`].
    pub radio_status: u8,
    /// RSSI of a received packet in dBm.
    pub rssi: i16,
    /// SNR of a received packet in dB.
    pub snr: i16,
    /// Radio timestamp of the transaction's start in milliseconds.
    pub radio_start_ms: u32,
    /// Radio timestamp of the transaction's end in milliseconds.
    pub radio_end_ms: u32,
    /// The transmitted payload.
    pub tx_payload: Box<[u8]>,
    /// The received payload.
    pub rx_payload: Box<[u8]>,
}

impl TransactionResult {
    /// Returns `true` if the transaction completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, TransactionStatus::Completed)
    }

    /// Returns the radio status.
    ///
    /// # Errors
    ///
    /// Returns the raw value if the status is unknown.
    pub fn radio_status(&self) -> std::result::Result<RadioStatus, u8> {
        RadioStatus::try_from(self.radio_status)
    }
}

/// Decodes the reassembled result of a transaction.
pub trait ResultDecoder {
    /// Decodes `bytes` into a [`TransactionResult`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the bytes cannot be decoded.
    fn decode(&self, bytes: &[u8]) -> Result<TransactionResult>;
}

impl<F> ResultDecoder for F
where
    F: Fn(&[u8]) -> Result<TransactionResult>,
{
    fn decode(&self, bytes: &[u8]) -> Result<TransactionResult> {
        self(bytes)
    }
}

/// Serializes a transaction request into the context submitted to the modem.
pub trait ContextBuilder {
    /// Builds the serialized context of `request` for the radio access `radio_access_id`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the request cannot be serialized.
    fn build(&self, radio_access_id: u8, request: &TransactionRequest) -> Result<Vec<u8>>;
}

impl<F> ContextBuilder for F
where
    F: Fn(u8, &TransactionRequest) -> Result<Vec<u8>>,
{
    fn build(&self, radio_access_id: u8, request: &TransactionRequest) -> Result<Vec<u8>> {
        self(radio_access_id, request)
    }
}
