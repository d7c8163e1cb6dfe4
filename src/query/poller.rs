use std::thread;
use std::time::{Duration, Instant};

use crate::error::{TodoMvcError, TodoMvcResult};

/// Default time to keep retrying a wait.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(3);
/// Default delay between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Timeout and poll interval for a single bounded wait.
///
/// # Example:
/// ```rust
/// use std::time::Duration;
/// use todomvc_sync::query::WaitConfig;
///
/// let config = WaitConfig::new(Duration::from_secs(3), Duration::from_millis(500)).unwrap();
/// assert_eq!(config, WaitConfig::default());
///
/// // The poll interval may not exceed the timeout.
/// assert!(WaitConfig::new(Duration::from_millis(100), Duration::from_secs(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    timeout: Duration,
    poll_interval: Duration,
}

impl WaitConfig {
    pub fn new(timeout: Duration, poll_interval: Duration) -> TodoMvcResult<Self> {
        if timeout.is_zero() {
            return Err(TodoMvcError::InvalidWaitConfig("timeout must be positive".to_string()));
        }
        if poll_interval.is_zero() {
            return Err(TodoMvcError::InvalidWaitConfig(
                "poll interval must be positive".to_string(),
            ));
        }
        if poll_interval > timeout {
            return Err(TodoMvcError::InvalidWaitConfig(format!(
                "poll interval {:?} exceeds timeout {:?}",
                poll_interval, timeout
            )));
        }

        Ok(Self {
            timeout,
            poll_interval,
        })
    }

    /// Evaluate the condition exactly once, without waiting.
    pub fn nowait() -> Self {
        Self {
            timeout: Duration::ZERO,
            poll_interval: Duration::ZERO,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Paces the polls of one wait and decides when it has run out of time.
#[derive(Debug)]
pub struct PollerTicker {
    timeout: Duration,
    interval: Duration,
    start: Instant,
    cur_tries: u32,
}

impl PollerTicker {
    pub fn new(config: WaitConfig) -> Self {
        Self {
            timeout: config.timeout,
            interval: config.poll_interval,
            start: Instant::now(),
            cur_tries: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn tries(&self) -> u32 {
        self.cur_tries
    }

    /// Call after each unsuccessful poll. Sleeps until the next poll is due and
    /// returns true, or returns false once the deadline has passed.
    pub fn tick(&mut self) -> bool {
        self.cur_tries += 1;

        let actual_elapsed = self.start.elapsed();
        if actual_elapsed >= self.timeout {
            return false;
        }

        // Polls are due at fixed multiples of the interval, and the last one at the deadline.
        let minimum_elapsed = self
            .interval
            .checked_mul(self.cur_tries)
            .map_or(self.timeout, |due| due.min(self.timeout));

        if actual_elapsed < minimum_elapsed {
            thread::sleep(minimum_elapsed - actual_elapsed);
        }

        true
    }
}
