use log::debug;

use crate::driver::Driver;
use crate::error::{TodoMvcError, TodoMvcResult};
use crate::query::{conditions::handle_errors, poll_until, poll_until_true, WaitConfig};
use crate::Locator;

/// High-level interface for locating elements with a bounded wait.
///
/// # Example:
/// ```ignore
/// // Wait for the input to appear, then type into it.
/// let input = driver.query(Locator::class_name("new-todo")).desc("new todo input").first()?;
/// driver.send_keys(&input, TypingData::from("milk"))?;
///
/// // Wait for an element to disappear.
/// driver.query(todo_locator).not_exists()?;
/// ```
#[derive(Debug)]
pub struct ElementQuery<'a, D: Driver> {
    driver: &'a D,
    parent: Option<&'a D::Element>,
    locator: Locator,
    config: WaitConfig,
    description: Option<String>,
}

impl<'a, D> ElementQuery<'a, D>
where
    D: Driver,
{
    fn new(driver: &'a D, parent: Option<&'a D::Element>, locator: Locator) -> Self {
        let config = driver.wait_config();
        Self {
            driver,
            parent,
            locator,
            config,
            description: None,
        }
    }

    /// Name the element(s) to make timeout messages more readable.
    pub fn desc(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Use the specified WaitConfig for this query only.
    pub fn with_config(mut self, config: WaitConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the query once, without waiting.
    pub fn nowait(self) -> Self {
        self.with_config(WaitConfig::nowait())
    }

    fn describe(&self, what: &str) -> String {
        format!("{} {}", self.describe_target(), what)
    }

    fn fetch(&self) -> TodoMvcResult<Vec<D::Element>> {
        match self.parent {
            Some(parent) => self.driver.find_elements_from(parent, &self.locator),
            None => self.driver.find_elements(&self.locator),
        }
    }

    /// Wait until at least one element matches, and return the first.
    pub fn first(self) -> TodoMvcResult<D::Element> {
        let description = self.describe("to be present");
        poll_until(&self.config, &description, || Ok(self.fetch()?.into_iter().next()))
    }

    /// Wait until no element matches.
    pub fn not_exists(self) -> TodoMvcResult<()> {
        let description = self.describe("to be absent");
        poll_until_true(&self.config, &description, || Ok(self.fetch()?.is_empty()))
    }

    /// Like `first()`, but report whether anything matched instead of timing out.
    pub fn exists(self) -> TodoMvcResult<bool> {
        match self.first() {
            Ok(_) => Ok(true),
            Err(TodoMvcError::Timeout {
                ..
            }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Wait until a matching element is displayed, and return it.
    pub fn visible(self) -> TodoMvcResult<D::Element> {
        let description = self.describe("to be visible");
        poll_until(&self.config, &description, || {
            for element in self.fetch()? {
                if handle_errors(self.driver.is_displayed(&element))? {
                    return Ok(Some(element));
                }
            }
            Ok(None)
        })
    }

    /// Return the one element matching right now. Fails immediately, without waiting,
    /// unless exactly one element matches.
    pub fn single(self) -> TodoMvcResult<D::Element> {
        let mut elements = self.fetch()?;
        if elements.len() != 1 {
            debug!("{} matched {} elements", self.locator, elements.len());
            return Err(TodoMvcError::AssertionFailed(format!(
                "expected exactly one element for {}, found {}",
                self.describe_target(),
                elements.len()
            )));
        }
        Ok(elements.remove(0))
    }

    fn describe_target(&self) -> String {
        match &self.description {
            Some(d) => format!("{} ({})", d, self.locator),
            None => self.locator.to_string(),
        }
    }
}

/// Trait for enabling the ElementQuery interface.
pub trait ElementQueryable: Driver + Sized {
    /// Query the whole page.
    fn query(&self, locator: Locator) -> ElementQuery<'_, Self>;

    /// Query the descendants of `parent`.
    fn query_from<'a>(
        &'a self,
        parent: &'a Self::Element,
        locator: Locator,
    ) -> ElementQuery<'a, Self>;
}

impl<D> ElementQueryable for D
where
    D: Driver,
{
    fn query(&self, locator: Locator) -> ElementQuery<'_, Self> {
        ElementQuery::new(self, None, locator)
    }

    fn query_from<'a>(
        &'a self,
        parent: &'a Self::Element,
        locator: Locator,
    ) -> ElementQuery<'a, Self> {
        ElementQuery::new(self, Some(parent), locator)
    }
}
