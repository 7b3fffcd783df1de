//! Ping-pong protocol exercising the radio through the modem.
//!
//! A manager transmits `PING` messages and expects each to be echoed by a `PONG` carrying the same
//! counter. A subordinate waits for pings and answers them. Either device demotes itself to a fresh
//! subordinate once the exchange counter or the failure counter crosses its threshold.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::sleep;

use log::{debug, info, warn};

use crate::error::{Error, ErrorKind, Result};
use crate::radio::Radio;

pub use message::{Kind, Message};
pub use state::{Event, RestartReason, Role, State, MAX_EXCHANGE_COUNT, MAX_RETRY_COUNT};
pub use timing::Timing;

mod message;
mod state;
mod timing;

/// Outcome of a single [`PingPong::step`].
#[derive(Debug)]
pub enum Step {
    /// A threshold was crossed and the state was reset to a fresh subordinate.
    Restarted(RestartReason),
    /// The cycle completed an exchange.
    Completed,
    /// The cycle failed and the failure counter was incremented.
    Failed(Error),
}

/// The ping-pong state machine.
#[derive(Debug)]
pub struct PingPong<R> {
    radio: R,
    state: State,
    timing: Timing,
    last_error: Option<ErrorKind>,
}

impl<R> PingPong<R> {
    /// Creates a new state machine starting in `role`.
    #[must_use]
    pub fn new(radio: R, role: Role) -> Self {
        Self {
            radio,
            state: State::new(role),
            timing: Timing::default(),
            last_error: None,
        }
    }

    /// Sets the timing.
    #[must_use]
    pub const fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns the kind of the most recent failure.
    #[must_use]
    pub const fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    /// Releases the radio.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.radio
    }
}

impl<R> PingPong<R>
where
    R: Radio,
{
    /// Runs cycles until `running` is cleared.
    ///
    /// The flag is checked between cycles; a running exchange is never interrupted.
    pub fn run(&mut self, running: &AtomicBool) {
        info!("Starting ping-pong as {}.", self.state.role());

        while running.load(Ordering::Relaxed) {
            if matches!(self.step(), Step::Restarted(_)) {
                continue;
            }

            sleep(self.timing.loop_pause);
        }

        info!("Ping-pong stopped in state {}.", self.state);
    }

    /// Runs a single cycle, or restarts if a threshold has been reached.
    pub fn step(&mut self) -> Step {
        if let Some(reason) = self.state.restart_reason() {
            info!("{reason}, restarting. This device is now subordinate.");
            self.state = self.state.next(Event::Restart);
            sleep(self.timing.restart);
            return Step::Restarted(reason);
        }

        if self.state.consecutive_fails() > 0 {
            warn!(
                "Retrying (fails={}, max={MAX_RETRY_COUNT}).",
                self.state.consecutive_fails()
            );
        }

        let result = match self.state.role() {
            Role::Manager => self.manager_cycle(),
            Role::Subordinate => self.subordinate_cycle(),
        };

        match result {
            Ok(()) => {
                info!("Exchange complete: {}", self.state);
                Step::Completed
            }
            Err(error) => {
                warn!("Cycle failed: {error}");
                self.last_error = Some(error.kind());
                self.state = self.state.next(Event::Failed);
                Step::Failed(error)
            }
        }
    }

    /// Sends a ping and handles the reply.
    ///
    /// The inter-cycle delay follows every received payload, acceptable or not.
    fn manager_cycle(&mut self) -> Result<()> {
        let ping = self.state.outgoing();
        debug!("Sending {ping}.");
        self.radio.transmit(&ping.to_bytes(), self.timing.tx_delay)?;
        sleep(self.timing.pre_rx);
        let payload = self.radio.receive(self.timing.manager_rx_timeout)?;
        let result = self.handle(&payload);
        sleep(self.timing.inter_cycle);
        result
    }

    /// Waits for a ping and answers it.
    ///
    /// The inter-cycle delay follows every attempted pong, successful or not.
    fn subordinate_cycle(&mut self) -> Result<()> {
        let payload = self.radio.receive(self.timing.subordinate_rx_timeout)?;
        self.handle(&payload)?;
        sleep(self.timing.processing);
        let pong = self.state.outgoing();
        debug!("Sending {pong}.");
        let result = self.radio.transmit(&pong.to_bytes(), self.timing.processing);
        sleep(self.timing.inter_cycle);
        result
    }

    /// Applies a received payload to the state if it is acceptable.
    fn handle(&mut self, payload: &[u8]) -> Result<()> {
        let message = Message::try_from(payload)?;
        debug!("Received {message}.");
        let event = self.state.accept(message)?;
        self.state = self.state.next(event);
        Ok(())
    }
}
