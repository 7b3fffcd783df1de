use std::fmt::{Display, Formatter};

use crate::error::Invalid;
use crate::ping_pong::{Kind, Message};

/// Exchanges after which a device restarts as subordinate.
pub const MAX_EXCHANGE_COUNT: u8 = 25;

/// Consecutive failed cycles after which a device restarts as subordinate.
pub const MAX_RETRY_COUNT: u8 = 5;

/// Role of a device in the ping-pong protocol.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Role {
    /// Initiates exchanges by sending pings.
    Manager,
    /// Answers pings with pongs.
    #[default]
    Subordinate,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manager => write!(f, "manager"),
            Self::Subordinate => write!(f, "subordinate"),
        }
    }
}

#[cfg(feature = "clap")]
impl clap::ValueEnum for Role {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Manager, Self::Subordinate]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Manager => clap::builder::PossibleValue::new("manager"),
            Self::Subordinate => clap::builder::PossibleValue::new("subordinate"),
        })
    }
}

/// Why a device restarts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RestartReason {
    /// The exchange counter reached [`MAX_EXCHANGE_COUNT`].
    MaxExchanges,
    /// The failure counter reached [`MAX_RETRY_COUNT`].
    MaxRetries,
}

impl Display for RestartReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MaxExchanges => write!(f, "max exchange count reached"),
            Self::MaxRetries => write!(f, "max retry count reached"),
        }
    }
}

/// Triggers of a state transition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Event {
    /// A valid message carrying the given counter was accepted.
    Accepted(u8),
    /// The cycle failed for any reason.
    Failed,
    /// A restart threshold was crossed.
    Restart,
}

/// The ping-pong protocol state.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct State {
    role: Role,
    counter: u8,
    consecutive_fails: u8,
}

impl State {
    /// Creates a fresh state for the given role.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            role,
            counter: 0,
            consecutive_fails: 0,
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_counters(role: Role, counter: u8, consecutive_fails: u8) -> Self {
        Self {
            role,
            counter,
            consecutive_fails,
        }
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the exchange counter.
    #[must_use]
    pub const fn counter(&self) -> u8 {
        self.counter
    }

    /// Returns the amount of consecutive failed cycles.
    #[must_use]
    pub const fn consecutive_fails(&self) -> u8 {
        self.consecutive_fails
    }

    /// Returns the reason to restart, if any threshold has been reached.
    #[must_use]
    pub const fn restart_reason(&self) -> Option<RestartReason> {
        if self.counter >= MAX_EXCHANGE_COUNT {
            Some(RestartReason::MaxExchanges)
        } else if self.consecutive_fails >= MAX_RETRY_COUNT {
            Some(RestartReason::MaxRetries)
        } else {
            None
        }
    }

    /// Returns the message this device transmits in its current state.
    #[must_use]
    pub const fn outgoing(&self) -> Message {
        match self.role {
            Role::Manager => Message::ping(self.counter),
            Role::Subordinate => Message::pong(self.counter),
        }
    }

    /// Checks a received message against the acceptance rules of the current role.
    ///
    /// A manager accepts only a pong echoing its counter. A subordinate accepts any ping.
    ///
    /// # Errors
    ///
    /// Returns [`Invalid`] if the message is not acceptable.
    pub fn accept(&self, message: Message) -> Result<Event, Invalid> {
        let expected = match self.role {
            Role::Manager => Kind::Pong,
            Role::Subordinate => Kind::Ping,
        };

        if message.kind() != expected {
            return Err(Invalid::Kind {
                expected,
                found: message.kind(),
            });
        }

        if self.role == Role::Manager && message.counter() != self.counter {
            return Err(Invalid::Counter {
                expected: self.counter,
                found: message.counter(),
            });
        }

        Ok(Event::Accepted(message.counter()))
    }

    /// Returns the state following `event`.
    #[must_use]
    pub const fn next(self, event: Event) -> Self {
        match (self.role, event) {
            (_, Event::Restart) => Self::new(Role::Subordinate),
            (Role::Manager, Event::Accepted(counter)) => Self {
                role: Role::Manager,
                counter: counter.wrapping_add(1),
                consecutive_fails: 0,
            },
            (Role::Subordinate, Event::Accepted(counter)) => Self {
                role: Role::Subordinate,
                counter,
                consecutive_fails: 0,
            },
            (role, Event::Failed) => Self {
                role,
                counter: self.counter,
                consecutive_fails: self.consecutive_fails.saturating_add(1),
            },
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (counter={}, fails={})",
            self.role, self.counter, self.consecutive_fails
        )
    }
}
