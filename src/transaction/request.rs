use std::time::Duration;

use crate::transaction::RadioConfig;

/// Scheduling of a transaction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Scheduler {
    /// Delay between submission and the start of the radio operation.
    pub start_delay: Duration,
}

impl Scheduler {
    /// Starts the transaction after `start_delay`.
    #[must_use]
    pub const fn after(start_delay: Duration) -> Self {
        Self { start_delay }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::after(Duration::from_secs(1))
    }
}

/// Whether a transaction transmits or receives.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Transmit the given payload.
    Tx(Box<[u8]>),
    /// Receive a packet of up to `max_size` bytes within `timeout`.
    Rx {
        /// Reception window.
        timeout: Duration,
        /// Maximum size of the received packet.
        max_size: u8,
    },
}

/// A radio transaction to submit to the modem.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TransactionRequest {
    /// Radio parameters.
    pub radio: RadioConfig,
    /// Scheduling.
    pub scheduler: Scheduler,
    /// Transmission or reception.
    pub direction: Direction,
}

impl TransactionRequest {
    /// Creates a request transmitting `payload` after `start_delay`.
    #[must_use]
    pub fn tx(radio: RadioConfig, payload: &[u8], start_delay: Duration) -> Self {
        Self {
            radio,
            scheduler: Scheduler::after(start_delay),
            direction: Direction::Tx(payload.into()),
        }
    }

    /// Creates a request receiving immediately within `timeout`.
    #[must_use]
    pub const fn rx(radio: RadioConfig, timeout: Duration, max_size: u8) -> Self {
        Self {
            radio,
            scheduler: Scheduler::after(Duration::ZERO),
            direction: Direction::Rx { timeout, max_size },
        }
    }
}
