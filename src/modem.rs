//! Command interface of the hardware modem.

use std::io::{Read, Write};
use std::time::Duration;

use log::{debug, error, info};

use crate::error::{Error, Result, Timeout};
use crate::frame::{Payload, Request};
use crate::link::Link;
use crate::nhm::CommandId;
use crate::radio::Radio;
use crate::retry::RetryPolicy;
use crate::transaction::{
    ContextBuilder, RadioConfig, RadioStatus, ResultDecoder, TransactionRequest, TransactionResult,
};
use crate::Command;

/// Host side of the modem's radio access interface.
#[derive(Debug)]
pub struct Modem<T, B, D> {
    link: Link<T>,
    builder: B,
    decoder: D,
    radio_config: RadioConfig,
    radio_handle: u8,
    tx_results: RetryPolicy,
    rx_results: RetryPolicy,
}

impl<T, B, D> Modem<T, B, D> {
    /// Radio access ID used until a session has been opened.
    pub const DEFAULT_RADIO_HANDLE: u8 = 0x01;

    /// Earliest start of a transmission after its submission.
    pub const MIN_TX_START_DELAY: Duration = Duration::from_millis(10);

    /// Creates a new modem on the given link.
    ///
    /// `builder` serializes transaction requests and `decoder` decodes transaction results.
    #[must_use]
    pub fn new(link: Link<T>, builder: B, decoder: D) -> Self {
        Self {
            link,
            builder,
            decoder,
            radio_config: RadioConfig::default(),
            radio_handle: Self::DEFAULT_RADIO_HANDLE,
            tx_results: RetryPolicy::TX_RESULTS,
            rx_results: RetryPolicy::RX_RESULTS,
        }
    }

    /// Sets the radio parameters used by [`Radio`] transactions.
    #[must_use]
    pub fn with_radio_config(mut self, radio_config: RadioConfig) -> Self {
        self.radio_config = radio_config;
        self
    }

    /// Sets the retry policies used to collect the results of transmissions and receptions.
    #[must_use]
    pub fn with_result_policies(mut self, tx_results: RetryPolicy, rx_results: RetryPolicy) -> Self {
        self.tx_results = tx_results;
        self.rx_results = rx_results;
        self
    }

    /// Returns the radio parameters.
    #[must_use]
    pub const fn radio_config(&self) -> &RadioConfig {
        &self.radio_config
    }

    /// Returns the current radio handle.
    #[must_use]
    pub const fn radio_handle(&self) -> u8 {
        self.radio_handle
    }

    /// Releases the link.
    #[must_use]
    pub fn into_inner(self) -> Link<T> {
        self.link
    }
}

impl<T, B, D> Modem<T, B, D>
where
    T: Read + Write,
    B: ContextBuilder,
    D: ResultDecoder,
{
    /// Returns the firmware version.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the exchange fails or the modem rejects the command.
    pub fn version(&mut self) -> Result<Payload> {
        let response = self
            .link
            .communicate(&Request::empty(Command::GetVersion))?
            .ok()?;
        Ok(response.into_payload())
    }

    /// Opens a radio access session and returns its handle.
    ///
    /// The handle is used as the radio access ID of subsequent submissions.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the exchange fails or the modem rejects the command.
    pub fn open(&mut self, radio_id: u8) -> Result<u8> {
        let response = self
            .link
            .communicate(&Request::new(Command::RacOpen, &[radio_id])?)?
            .ok()?;

        if let Some(&handle) = response.payload().first() {
            info!("Opened radio {radio_id} with handle {handle}.");
            self.radio_handle = handle;
        }

        Ok(self.radio_handle)
    }

    /// Closes the radio access session.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the exchange fails or the modem rejects the command.
    pub fn close(&mut self) -> Result<()> {
        self.link
            .communicate(&Request::new(Command::RacClose, &[self.radio_handle])?)?
            .ok()?;
        info!("Closed radio handle {}.", self.radio_handle);
        Ok(())
    }

    /// Submits a radio transaction.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the context cannot be built, the exchange fails or the modem
    /// rejects the transaction.
    pub fn submit(&mut self, request: &TransactionRequest) -> Result<()> {
        let context = self.builder.build(self.radio_handle, request)?;
        debug!("Submitting {} byte context.", context.len());
        self.link
            .send_segmented(CommandId::USP_SUBMIT, &context)?
            .ok()?;
        Ok(())
    }

    /// Submits a radio transaction in a single legacy frame.
    ///
    /// Unlike [`Self::submit`], the context is not segmented and must fit into one frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the context exceeds one frame, and another [`Error`] if the
    /// context cannot be built, the exchange fails or the modem rejects the transaction.
    pub fn submit_single(&mut self, request: &TransactionRequest) -> Result<()> {
        let context = self.builder.build(self.radio_handle, request)?;
        debug!("Submitting {} byte context in a single frame.", context.len());
        self.link
            .communicate(&Request::new(Command::UspSubmit, &context)?)?
            .ok()?;
        Ok(())
    }

    /// Fetches and decodes the result of the last transaction.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the exchange fails, the result is segmented incorrectly or
    /// cannot be decoded.
    pub fn results(&mut self) -> Result<TransactionResult> {
        let message = self
            .link
            .request_segmented(CommandId::USP_GET_RESULTS, &[])?;
        self.decoder.decode(&message)
    }

    /// Polls for the result of the last transaction until it has completed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the transaction did not complete within the policy's attempts.
    pub fn poll_results(&mut self, policy: RetryPolicy) -> Result<TransactionResult> {
        policy.run(|attempt| {
            let result = self.results()?;

            if result.is_completed() {
                debug!("Transaction completed after {attempt} attempt(s).");
                Ok(Some(result))
            } else {
                debug!("Transaction {}.", result.status);
                Ok(None)
            }
        })
    }
}

impl<T, B, D> Radio for Modem<T, B, D>
where
    T: Read + Write,
    B: ContextBuilder,
    D: ResultDecoder,
{
    fn transmit(&mut self, payload: &[u8], start_delay: Duration) -> Result<()> {
        let request = TransactionRequest::tx(
            self.radio_config,
            payload,
            start_delay.max(Self::MIN_TX_START_DELAY),
        );
        self.submit(&request)?;
        let result = self.poll_results(self.tx_results)?;

        match result.radio_status() {
            Ok(RadioStatus::TxDone) => Ok(()),
            _ => {
                error!("Transmission ended with radio status {}.", result.radio_status);
                Err(Error::Radio(result.radio_status))
            }
        }
    }

    fn receive(&mut self, timeout: Duration) -> Result<Box<[u8]>> {
        let request =
            TransactionRequest::rx(self.radio_config, timeout, self.radio_config.max_rx_size);
        self.submit(&request)?;
        let result = self.poll_results(self.rx_results)?;

        match result.radio_status() {
            Ok(RadioStatus::RxPacket) => {
                debug!(
                    "Received {} bytes (RSSI {} dBm, SNR {} dB).",
                    result.rx_payload.len(),
                    result.rssi,
                    result.snr
                );
                Ok(result.rx_payload)
            }
            Ok(RadioStatus::RxTimeout) => Err(Error::Timeout(Timeout::Rx)),
            _ => {
                error!("Reception ended with radio status {}.", result.radio_status);
                Err(Error::Radio(result.radio_status))
            }
        }
    }
}
