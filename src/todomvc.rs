//! Helpers for driving the TodoMVC application.
//!
//! Each operation reports a step and then performs at most one interaction,
//! using the bounded waits in [`crate::query`] to find elements and confirm
//! the resulting state.

use log::debug;
use thirtyfour::{Keys, TypingData};
use uuid::Uuid;

use crate::driver::Driver;
use crate::error::TodoMvcResult;
use crate::locator::escape_string;
use crate::query::{ElementQueryable, ElementWaitable, WaitConfig};
use crate::reporter::Reporter;
use crate::Locator;

/// Locator for the label `div` of the todo with the given name.
///
/// ```rust
/// use todomvc_sync::todomvc::todo_locator;
/// use todomvc_sync::Locator;
///
/// assert_eq!(
///     todo_locator("milk"),
///     Locator::XPath(r#"//div[./label[text()[normalize-space(.)="milk"]]]"#.to_string())
/// );
/// ```
pub fn todo_locator(name: &str) -> Locator {
    Locator::XPath(format!("//div[./label[text()[normalize-space(.)={}]]]", escape_string(name)))
}

/// The input used to type a new todo.
pub fn new_todo_locator() -> Locator {
    Locator::ClassName("new-todo".to_string())
}

fn filter_locator(href: &str) -> Locator {
    Locator::XPath(format!("//a[@href='{}']", href))
}

pub struct TodoMvcService<'a, D, R> {
    driver: &'a D,
    reporter: R,
    wait: WaitConfig,
}

impl<'a, D, R> TodoMvcService<'a, D, R>
where
    D: Driver + 'static,
    R: Reporter,
{
    /// Uses the driver's default wait.
    pub fn new(driver: &'a D, reporter: R) -> Self {
        let wait = driver.wait_config();
        Self {
            driver,
            reporter,
            wait,
        }
    }

    pub fn with_wait(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Add a todo named `prefix` plus a random suffix, committing it with Enter.
    /// Returns the generated name.
    pub fn create_unique_todo(&self, prefix: &str, new_todo: Locator) -> TodoMvcResult<String> {
        let todo_name = format!("{} {}", prefix, Uuid::new_v4());
        self.reporter.test_step(&format!(
            "Add new unique todo and commit with Enter key. Generated todo name is {}",
            todo_name
        ));
        let input =
            self.driver.query(new_todo).with_config(self.wait).desc("new todo input").first()?;
        self.driver.send_keys(&input, TypingData::from(todo_name.as_str()) + Keys::Enter)?;
        debug!("created todo {:?}", todo_name);
        Ok(todo_name)
    }

    /// Check that exactly one todo with this name is listed.
    pub fn verify_added_todo(&self, todo_name: &str) -> TodoMvcResult<()> {
        self.reporter.test_step("Validate new todo exists in todo list");
        self.driver.query(todo_locator(todo_name)).desc("todo").single()?;
        Ok(())
    }

    /// Remove the todo with this name by hovering it and clicking its X.
    pub fn remove_todo(&self, todo_name: &str) -> TodoMvcResult<()> {
        self.reporter.test_step("Hover over new todo");
        let todo = self.driver.query(todo_locator(todo_name)).desc("todo").single()?;
        self.driver.hover(&todo)?;

        self.reporter.test_step("Remove todo by clicking on X");
        let destroy = self
            .driver
            .query_from(&todo, Locator::ClassName("destroy".to_string()))
            .with_config(self.wait)
            .desc("remove button")
            .first()?;
        self.driver.wait_until(&destroy).with_config(self.wait).displayed()?;
        self.driver.hover_and_click(&destroy)
    }

    /// Wait for the todo with this name to leave the list.
    pub fn verify_removed_todo(&self, todo_name: &str) -> TodoMvcResult<()> {
        self.reporter.test_step("Validate new todo removed from list");
        self.driver
            .query(todo_locator(todo_name))
            .with_config(self.wait)
            .desc("todo")
            .not_exists()
    }

    /// Tick the checkbox of the todo with this name.
    pub fn complete_todo(&self, todo_name: &str) -> TodoMvcResult<()> {
        let todo = self.driver.query(todo_locator(todo_name)).desc("todo").single()?;
        self.reporter.test_step(&format!("Mark todo {} as completed", todo_name));
        let checkbox = self
            .driver
            .query_from(&todo, Locator::Tag("input".to_string()))
            .with_config(self.wait)
            .desc("todo checkbox")
            .first()?;
        self.driver.click(&checkbox)
    }

    /// Wait for the list item of the todo with this name to be marked completed.
    pub fn verify_completed_todo(&self, todo_name: &str) -> TodoMvcResult<()> {
        let todo = self.driver.query(todo_locator(todo_name)).desc("todo").single()?;
        self.reporter.test_step(&format!("Verify todo {} is marked as completed", todo_name));
        let li = self
            .driver
            .query_from(&todo, Locator::XPath("..".to_string()))
            .desc("todo item")
            .single()?;
        self.driver
            .wait_until(&li)
            .with_config(self.wait)
            .error(&format!("todo {} to be marked completed", todo_name))
            .has_class("completed")
    }

    /// Show only completed todos.
    pub fn filter_completed(&self) -> TodoMvcResult<()> {
        self.reporter.test_step("Filter by completed");
        self.click_filter("#/completed")
    }

    /// Show only active todos.
    pub fn filter_active(&self) -> TodoMvcResult<()> {
        self.reporter.test_step("Filter by active");
        self.click_filter("#/active")
    }

    /// Show all todos.
    pub fn filter_all(&self) -> TodoMvcResult<()> {
        self.reporter.test_step("Show all todos");
        self.click_filter("#/")
    }

    fn click_filter(&self, href: &str) -> TodoMvcResult<()> {
        let link = self
            .driver
            .query(filter_locator(href))
            .with_config(self.wait)
            .desc("filter link")
            .first()?;
        self.driver.click(&link)
    }
}
