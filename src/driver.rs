use std::fmt::Debug;

use thirtyfour::TypingData;

use crate::error::TodoMvcResult;
use crate::query::WaitConfig;
use crate::Locator;

/// The browser capabilities the waits and the TodoMVC helpers rely on.
///
/// Element handles are opaque. Queries that match nothing return an empty
/// vec rather than an error; per-element commands on an element that has
/// gone away should fail with the `NoSuchElement` or `StaleElementReference`
/// variant of [`thirtyfour::error::WebDriverError`].
pub trait Driver {
    type Element: Clone + Debug;

    fn find_elements(&self, locator: &Locator) -> TodoMvcResult<Vec<Self::Element>>;

    fn find_elements_from(
        &self,
        element: &Self::Element,
        locator: &Locator,
    ) -> TodoMvcResult<Vec<Self::Element>>;

    fn send_keys(&self, element: &Self::Element, keys: TypingData) -> TodoMvcResult<()>;

    fn click(&self, element: &Self::Element) -> TodoMvcResult<()>;

    fn get_attribute(&self, element: &Self::Element, name: &str) -> TodoMvcResult<Option<String>>;

    fn is_displayed(&self, element: &Self::Element) -> TodoMvcResult<bool>;

    /// Move the pointer over the element.
    fn hover(&self, element: &Self::Element) -> TodoMvcResult<()>;

    /// Move the pointer over the element and click it, as one action sequence.
    fn hover_and_click(&self, element: &Self::Element) -> TodoMvcResult<()>;

    /// The wait used by queries that don't specify their own.
    fn wait_config(&self) -> WaitConfig {
        WaitConfig::default()
    }
}
