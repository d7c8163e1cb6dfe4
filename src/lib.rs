//! Synchronous helpers for automating the TodoMVC web application over WebDriver.
//!
//! The crate is built around one mechanism: the **bounded polling wait**. A
//! predicate that inspects the page is evaluated immediately, then once per
//! poll interval, until it succeeds or the timeout elapses. Locating an
//! element, waiting for it to disappear, or waiting for it to become visible
//! are all instances of that wait (see [`query`]).
//!
//! ## Features
//!
//! - Bounded waits with a fixed poll schedule and a hard deadline
//! - Element queries: present, absent, visible, or exactly one
//! - Element waits: displayed, class and attribute conditions, custom predicates
//! - A [`Driver`] trait so the waits work against any browser backend
//! - A blocking W3C WebDriver client implementing [`Driver`]
//! - A [`TodoMvcService`](todomvc::TodoMvcService) reporting each test step to a [`Reporter`]
//!
//! ## Example
//!
//! The following example assumes you have chromedriver running on port 4444.
//!
//! ```no_run
//! use serde_json::json;
//! use todomvc_sync::prelude::*;
//!
//! fn main() -> TodoMvcResult<()> {
//!     let caps = json!({ "browserName": "chrome" });
//!     let driver = WebDriver::new("http://localhost:4444", &caps)?;
//!     driver.get("http://todomvc.com/examples/vanillajs/")?;
//!
//!     let todos = TodoMvcService::new(&driver, LogReporter);
//!     let name = todos.create_unique_todo("Buy milk", new_todo_locator())?;
//!     todos.verify_added_todo(&name)?;
//!     todos.remove_todo(&name)?;
//!     todos.verify_removed_todo(&name)?;
//!
//!     driver.quit()?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

/// Re-export the WebDriver protocol types this crate is built on.
pub use thirtyfour::common::types::ElementId;
pub use thirtyfour::{By, Keys, SessionId, TypingData};

pub use config::{TodoMvcConfig, WebDriverConfig};
pub use driver::Driver;
pub use error::{TodoMvcError, TodoMvcResult};
pub use locator::Locator;
pub use reporter::{LogReporter, RecordingReporter, ReportEvent, Reporter, TestResult};
pub use session::WebDriverSession;
pub use webdriver::{GenericWebDriver, WebDriver};
pub use webelement::WebElement;

pub mod prelude {
    pub use crate::driver::Driver;
    pub use crate::error::{TodoMvcError, TodoMvcResult};
    pub use crate::query::{ElementQueryable, ElementWaitable, WaitConfig};
    pub use crate::reporter::{LogReporter, Reporter, TestResult};
    pub use crate::todomvc::{new_todo_locator, todo_locator, TodoMvcService};
    pub use crate::webdriver::WebDriver;
    pub use crate::Locator;
    pub use thirtyfour::{Keys, TypingData};
}

pub mod config;
mod driver;
pub mod error;
pub mod http {
    pub mod connection_sync;
    pub mod reqwest_sync;
}
pub mod locator;
pub mod query;
pub mod reporter;
mod session;
pub mod todomvc;
mod webdriver;
mod webelement;
