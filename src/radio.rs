//! The radio seam of the ping-pong protocol.

use std::time::Duration;

use crate::error::Result;

/// A half-duplex packet radio.
pub trait Radio {
    /// Transmits `payload` after `start_delay` and waits until the transmission is done.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`](crate::Error) if the transmission could not be submitted or did not
    /// complete with [`RadioStatus::TxDone`](crate::transaction::RadioStatus::TxDone).
    fn transmit(&mut self, payload: &[u8], start_delay: Duration) -> Result<()>;

    /// Receives a single packet within `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`](crate::Error::Timeout) if no packet arrived in time and another
    /// [`Error`](crate::Error) if the reception could not be performed.
    fn receive(&mut self, timeout: Duration) -> Result<Box<[u8]>>;
}

impl<R> Radio for &mut R
where
    R: Radio + ?Sized,
{
    fn transmit(&mut self, payload: &[u8], start_delay: Duration) -> Result<()> {
        (**self).transmit(payload, start_delay)
    }

    fn receive(&mut self, timeout: Duration) -> Result<Box<[u8]>> {
        (**self).receive(timeout)
    }
}
