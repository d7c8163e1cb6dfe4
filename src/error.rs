use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thiserror::Error;

pub type TodoMvcResult<T> = Result<T, TodoMvcError>;

#[derive(Debug, Error)]
pub enum TodoMvcError {
    /// An expectation about element count or state did not hold.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),
    /// A bounded wait never observed its condition.
    #[error("timed out after {elapsed:?} waiting for {description}")]
    Timeout {
        description: String,
        elapsed: Duration,
    },
    #[error("invalid wait configuration: {0}")]
    InvalidWaitConfig(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),
}

impl TodoMvcError {
    /// True for errors meaning "the element is not there (any more)".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TodoMvcError::WebDriver(
                WebDriverError::NoSuchElement(_) | WebDriverError::StaleElementReference(_)
            )
        )
    }
}
