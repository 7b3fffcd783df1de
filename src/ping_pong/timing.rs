use std::time::Duration;

/// Delays and reception windows of the ping-pong protocol.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Timing {
    /// Start delay of the manager's ping transmission.
    pub tx_delay: Duration,
    /// Time the subordinate takes before answering, also used as the pong's start delay.
    pub processing: Duration,
    /// Reception window of the manager waiting for a pong.
    pub manager_rx_timeout: Duration,
    /// Reception window of the subordinate waiting for a ping.
    pub subordinate_rx_timeout: Duration,
    /// Pause after a completed cycle.
    pub inter_cycle: Duration,
    /// Pause between the manager's transmission and its reception.
    pub pre_rx: Duration,
    /// Pause after a restart.
    pub restart: Duration,
    /// Pause between consecutive cycles.
    pub loop_pause: Duration,
}

impl Timing {
    /// Timing without any pauses, keeping the reception windows.
    #[must_use]
    pub const fn without_pauses(self) -> Self {
        Self {
            tx_delay: Duration::ZERO,
            processing: Duration::ZERO,
            inter_cycle: Duration::ZERO,
            pre_rx: Duration::ZERO,
            restart: Duration::ZERO,
            loop_pause: Duration::ZERO,
            ..self
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tx_delay: Duration::from_millis(3000),
            processing: Duration::from_millis(100),
            manager_rx_timeout: Duration::from_millis(18_000),
            subordinate_rx_timeout: Duration::from_millis(30_000),
            inter_cycle: Duration::from_millis(1000),
            pre_rx: Duration::from_millis(500),
            restart: Duration::from_secs(1),
            loop_pause: Duration::from_millis(100),
        }
    }
}
