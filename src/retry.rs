//! Fixed-interval retry policy.

use std::thread::sleep;
use std::time::Duration;

use log::{debug, warn};

use crate::error::{Result, Timeout};
use crate::Error;

/// Retries an attempt at a fixed interval until it yields a value or attempts run out.
///
/// There is no backoff and no jitter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RetryPolicy {
    interval: Duration,
    max_attempts: usize,
}

impl RetryPolicy {
    /// Policy for collecting the result of a transmission.
    pub const TX_RESULTS: Self = Self::new(Duration::from_millis(100), 30);

    /// Policy for collecting the result of a reception.
    pub const RX_RESULTS: Self = Self::new(Duration::from_millis(500), 60);

    /// Creates a new retry policy.
    #[must_use]
    pub const fn new(interval: Duration, max_attempts: usize) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Returns the pause between attempts.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the maximum amount of attempts.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Runs `attempt` until it returns `Ok(Some(_))`.
    ///
    /// The closure receives the one-based attempt number. Both `Ok(None)` and `Err(_)` consume
    /// one attempt. The policy sleeps for its interval between attempts, but not after the last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if no attempt yielded a value.
    pub fn run<T, F>(&self, mut attempt: F) -> Result<T>
    where
        F: FnMut(usize) -> Result<Option<T>>,
    {
        for number in 1..=self.max_attempts {
            match attempt(number) {
                Ok(Some(value)) => {
                    debug!("Attempt {number}/{} succeeded.", self.max_attempts);
                    return Ok(value);
                }
                Ok(None) => debug!("Attempt {number}/{}: pending.", self.max_attempts),
                Err(error) => warn!("Attempt {number}/{} failed: {error}", self.max_attempts),
            }

            if number < self.max_attempts {
                sleep(self.interval);
            }
        }

        Err(Error::Timeout(Timeout::Attempts(self.max_attempts)))
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::io::ErrorKind;
    use std::time::{Duration, Instant};

    use super::RetryPolicy;
    use crate::error::{Error, Timeout};

    const FAST: RetryPolicy = RetryPolicy::new(Duration::ZERO, 5);

    #[test]
    fn test_first_success() {
        let mut calls = Vec::new();
        let value = FAST
            .run(|attempt| {
                calls.push(attempt);
                Ok((attempt == 3).then_some(attempt * 10))
            })
            .unwrap();
        assert_eq!(value, 30);
        assert_eq!(calls, [1, 2, 3]);
    }

    #[test]
    fn test_errors_consume_attempts() {
        let mut calls = 0;
        let value = FAST
            .run(|attempt| {
                calls += 1;
                if attempt < 5 {
                    Err(Error::from(std::io::Error::from(ErrorKind::TimedOut)))
                } else {
                    Ok(Some("done"))
                }
            })
            .unwrap();
        assert_eq!(value, "done");
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_exhausted() {
        let mut calls = 0;
        let result: Result<(), _> = FAST.run(|_| {
            calls += 1;
            Ok(None)
        });
        assert!(matches!(result, Err(Error::Timeout(Timeout::Attempts(5)))));
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_no_sleep_after_last_attempt() {
        let policy = RetryPolicy::new(Duration::from_millis(100), 2);
        let start = Instant::now();
        let _ = policy.run::<(), _>(|_| Ok(None));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(190));
    }

    #[test]
    fn test_presets() {
        assert_eq!(RetryPolicy::TX_RESULTS.max_attempts(), 30);
        assert_eq!(RetryPolicy::TX_RESULTS.interval(), Duration::from_millis(100));
        assert_eq!(RetryPolicy::RX_RESULTS.max_attempts(), 60);
        assert_eq!(RetryPolicy::RX_RESULTS.interval(), Duration::from_millis(500));
    }
}
