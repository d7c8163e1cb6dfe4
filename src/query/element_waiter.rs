use stringmatch::Needle;

use crate::driver::Driver;
use crate::error::TodoMvcResult;
use crate::query::{conditions, poll_until_true, ElementPredicate, WaitConfig};

/// High-level interface for performing explicit waits on one element using the builder pattern.
///
/// # Example:
/// ```ignore
/// // Wait until the element is displayed.
/// driver.wait_until(&elem).displayed()?;
/// // Wait until it gains a class, with a custom timeout message.
/// driver.wait_until(&elem).error("todo was never completed").has_class("completed")?;
/// ```
#[derive(Debug)]
pub struct ElementWaiter<'a, D: Driver> {
    driver: &'a D,
    element: &'a D::Element,
    config: WaitConfig,
    message: String,
}

impl<'a, D> ElementWaiter<'a, D>
where
    D: Driver + 'static,
{
    fn new(driver: &'a D, element: &'a D::Element, config: WaitConfig) -> Self {
        Self {
            driver,
            element,
            config,
            message: String::new(),
        }
    }

    /// Use the specified WaitConfig for this ElementWaiter.
    /// This will not affect the default WaitConfig used for other waits.
    pub fn with_config(mut self, config: WaitConfig) -> Self {
        self.config = config;
        self
    }

    /// Check the condition once instead of polling.
    pub fn nowait(self) -> Self {
        self.with_config(WaitConfig::nowait())
    }

    /// Provide a human-readable error message to be returned in the case of timeout.
    pub fn error(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    fn description(&self, what: &str) -> String {
        if self.message.is_empty() {
            format!("element {:?} {}", self.element, what)
        } else {
            self.message.clone()
        }
    }

    fn run(&self, what: &str, conditions: &[ElementPredicate<D>]) -> TodoMvcResult<()> {
        let description = self.description(what);
        poll_until_true(&self.config, &description, || {
            for f in conditions {
                if !f(self.driver, self.element)? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    pub fn condition(self, f: ElementPredicate<D>) -> TodoMvcResult<()> {
        self.run("to satisfy condition", &[f])
    }

    pub fn conditions(self, conditions: Vec<ElementPredicate<D>>) -> TodoMvcResult<()> {
        self.run("to satisfy conditions", &conditions)
    }

    pub fn displayed(self) -> TodoMvcResult<()> {
        self.run("to be displayed", &[conditions::element_is_displayed()])
    }

    pub fn not_displayed(self) -> TodoMvcResult<()> {
        self.run("to not be displayed", &[conditions::element_is_not_displayed()])
    }

    pub fn has_class<N>(self, class_name: N) -> TodoMvcResult<()>
    where
        N: Needle + 'static,
    {
        self.run("to have class", &[conditions::element_has_class(class_name)])
    }

    pub fn lacks_class<N>(self, class_name: N) -> TodoMvcResult<()>
    where
        N: Needle + 'static,
    {
        self.run("to lack class", &[conditions::element_lacks_class(class_name)])
    }

    pub fn has_attribute<S, N>(self, attribute_name: S, value: N) -> TodoMvcResult<()>
    where
        S: Into<String>,
        N: Needle + 'static,
    {
        self.run("to have attribute", &[conditions::element_has_attribute(attribute_name, value)])
    }

    pub fn lacks_attribute<S, N>(self, attribute_name: S, value: N) -> TodoMvcResult<()>
    where
        S: Into<String>,
        N: Needle + 'static,
    {
        self.run("to lack attribute", &[conditions::element_lacks_attribute(attribute_name, value)])
    }
}

/// Trait for enabling the ElementWaiter interface.
pub trait ElementWaitable: Driver + Sized + 'static {
    /// Return an ElementWaiter for explicit waits on `element`,
    /// using the driver's default WaitConfig.
    fn wait_until<'a>(&'a self, element: &'a Self::Element) -> ElementWaiter<'a, Self>;
}

impl<D> ElementWaitable for D
where
    D: Driver + 'static,
{
    fn wait_until<'a>(&'a self, element: &'a Self::Element) -> ElementWaiter<'a, Self> {
        ElementWaiter::new(self, element, self.wait_config())
    }
}
