//! Bounded polling waits.
//!
//! Everything here funnels into [`poll_until`], which retries a predicate on a
//! fixed interval until it succeeds or the [`WaitConfig`] timeout elapses.

pub mod conditions;
mod element_query;
mod element_waiter;
mod poller;
mod waiter;

pub use conditions::ElementPredicate;
pub use element_query::{ElementQuery, ElementQueryable};
pub use element_waiter::{ElementWaitable, ElementWaiter};
pub use poller::{PollerTicker, WaitConfig, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
pub use waiter::{poll_until, poll_until_true};
