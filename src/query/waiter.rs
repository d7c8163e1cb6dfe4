use log::{debug, trace, warn};

use crate::error::{TodoMvcError, TodoMvcResult};
use crate::query::{PollerTicker, WaitConfig};

/// Evaluate `predicate` until it produces a value or the wait times out.
///
/// The predicate is checked immediately, then once per poll interval.
/// `Ok(None)` means "not yet"; an `Err` is returned straight away without
/// further polling. On success the value from the first satisfying poll is
/// returned as-is.
///
/// # Example:
/// ```rust
/// use std::cell::Cell;
/// use std::time::Duration;
/// use todomvc_sync::query::{poll_until, WaitConfig};
///
/// let calls = Cell::new(0);
/// let config = WaitConfig::new(Duration::from_millis(200), Duration::from_millis(10)).unwrap();
/// let value = poll_until(&config, "third call", || {
///     calls.set(calls.get() + 1);
///     Ok(if calls.get() == 3 { Some("done") } else { None })
/// })
/// .unwrap();
/// assert_eq!(value, "done");
/// assert_eq!(calls.get(), 3);
/// ```
pub fn poll_until<T, F>(
    config: &WaitConfig,
    description: &str,
    mut predicate: F,
) -> TodoMvcResult<T>
where
    F: FnMut() -> TodoMvcResult<Option<T>>,
{
    debug!(
        "waiting up to {:?} (every {:?}) for {}",
        config.timeout(),
        config.poll_interval(),
        description
    );
    let mut ticker = PollerTicker::new(*config);
    loop {
        if let Some(value) = predicate()? {
            debug!("{} satisfied after {:?}", description, ticker.elapsed());
            return Ok(value);
        }

        trace!("{} not satisfied on poll {}", description, ticker.tries() + 1);
        if !ticker.tick() {
            let elapsed = ticker.elapsed();
            warn!("timed out after {:?} waiting for {}", elapsed, description);
            return Err(TodoMvcError::Timeout {
                description: description.to_string(),
                elapsed,
            });
        }
    }
}

/// Boolean form of [`poll_until`].
pub fn poll_until_true<F>(
    config: &WaitConfig,
    description: &str,
    mut predicate: F,
) -> TodoMvcResult<()>
where
    F: FnMut() -> TodoMvcResult<bool>,
{
    poll_until(config, description, || Ok(predicate()?.then_some(())))
}
