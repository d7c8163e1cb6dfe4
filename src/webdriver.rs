use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error};
use serde::Serialize;
use serde_json::Value;
use thirtyfour::common::command::{Command, FormatRequestData};
use thirtyfour::common::connection_common::convert_json;
use thirtyfour::common::types::ElementId;
use thirtyfour::error::WebDriverError;
use thirtyfour::{SessionId, TypingData};

use crate::config::WebDriverConfig;
use crate::driver::Driver;
use crate::error::{TodoMvcError, TodoMvcResult};
use crate::http::connection_sync::{HttpClientCreateParams, WebDriverHttpClientSync};
use crate::http::reqwest_sync::ReqwestDriverSync;
use crate::query::WaitConfig;
use crate::webelement::{convert_element_ids, WebElement};
use crate::{Locator, WebDriverSession};

/// The WebDriver struct represents a browser session over the blocking `reqwest` client.
pub type WebDriver = GenericWebDriver<ReqwestDriverSync>;

/// Start a new session and return its id and the capabilities the server settled on.
fn start_session<C>(
    conn: &dyn WebDriverHttpClientSync,
    capabilities: C,
) -> TodoMvcResult<(SessionId, Value)>
where
    C: Serialize,
{
    let caps = serde_json::to_value(capabilities).map_err(WebDriverError::from)?;
    let request = Command::NewSession(caps).format_request(&SessionId::from(String::new()));
    let v = conn.execute(request)?;

    let session_id = match v["value"]["sessionId"].as_str() {
        Some(id) => SessionId::from(id.to_string()),
        None => {
            return Err(TodoMvcError::UnexpectedResponse(format!(
                "new session response has no sessionId: {}",
                v
            )))
        }
    };
    Ok((session_id, v["value"]["capabilities"].clone()))
}

/// A synchronous WebDriver browser session, generic over its HTTP transport.
///
/// # Example:
/// ```no_run
/// use serde_json::json;
/// use todomvc_sync::prelude::*;
///
/// fn main() -> TodoMvcResult<()> {
///     let caps = json!({ "browserName": "chrome" });
///     let driver = WebDriver::new("http://localhost:4444", &caps)?;
///     driver.get("http://todomvc.com/examples/vanillajs/")?;
///     driver.quit()?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct GenericWebDriver<T: WebDriverHttpClientSync> {
    pub session: WebDriverSession,
    capabilities: Value,
    quit_on_drop: bool,
    phantom: PhantomData<T>,
}

impl<T: 'static> GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    pub fn new<C>(server_url: &str, capabilities: C) -> TodoMvcResult<Self>
    where
        C: Serialize,
    {
        Self::new_with_timeout(server_url, capabilities, None)
    }

    /// Creates a new GenericWebDriver just like the `new` function. Allows a
    /// configurable timeout for all HTTP requests including the session creation.
    pub fn new_with_timeout<C>(
        server_url: &str,
        capabilities: C,
        timeout: Option<Duration>,
    ) -> TodoMvcResult<Self>
    where
        C: Serialize,
    {
        let params = HttpClientCreateParams {
            server_url: server_url.to_string(),
            timeout,
        };
        Self::new_with_client(T::create(params)?, capabilities)
    }

    /// Start a session over an already constructed transport.
    pub fn new_with_client<C>(conn: T, capabilities: C) -> TodoMvcResult<Self>
    where
        C: Serialize,
    {
        let (session_id, session_capabilities) = start_session(&conn, capabilities)?;
        debug!("started session {}", session_id);

        Ok(GenericWebDriver {
            session: WebDriverSession::new(session_id, Arc::new(conn)),
            capabilities: session_capabilities,
            quit_on_drop: false,
            phantom: PhantomData,
        })
    }

    /// Return a clone of the capabilities as returned by the server.
    pub fn capabilities(&self) -> Value {
        self.capabilities.clone()
    }

    pub fn session_id(&self) -> &SessionId {
        self.session.session_id()
    }

    pub fn config(&self) -> &WebDriverConfig {
        self.session.config()
    }

    pub fn config_mut(&mut self) -> &mut WebDriverConfig {
        self.session.config_mut()
    }

    /// Set the default wait used by queries and element waits on this session.
    pub fn set_wait_config(&mut self, config: WaitConfig) {
        self.config_mut().wait = config;
    }

    /// Close the session when this struct is dropped without calling `quit()`.
    pub fn set_quit_on_drop(&mut self, quit_on_drop: bool) {
        self.quit_on_drop = quit_on_drop;
    }

    /// Navigate to the specified URL.
    pub fn get(&self, url: &str) -> TodoMvcResult<()> {
        self.session.cmd(Command::NavigateTo(url.to_owned()))?;
        Ok(())
    }

    pub fn title(&self) -> TodoMvcResult<String> {
        let v = self.session.cmd(Command::GetTitle)?;
        Ok(convert_json(&v["value"])?)
    }

    /// End the webdriver session.
    pub fn quit(mut self) -> TodoMvcResult<()> {
        self.session.cmd(Command::DeleteSession)?;
        self.quit_on_drop = false;
        Ok(())
    }

    fn element(&self, element_id: &ElementId) -> WebElement<'_> {
        WebElement::new(&self.session, element_id.clone())
    }
}

impl<T> Driver for GenericWebDriver<T>
where
    T: WebDriverHttpClientSync + 'static,
{
    type Element = ElementId;

    fn find_elements(&self, locator: &Locator) -> TodoMvcResult<Vec<ElementId>> {
        let v = locator.with_by(|by| {
            self.session.cmd(Command::FindElements(by.get_w3c_selector()))
        })?;
        Ok(convert_element_ids(&v["value"])?)
    }

    fn find_elements_from(
        &self,
        element: &ElementId,
        locator: &Locator,
    ) -> TodoMvcResult<Vec<ElementId>> {
        let children = self.element(element).find_elements(locator)?;
        Ok(children.into_iter().map(|e| e.element_id).collect())
    }

    fn send_keys(&self, element: &ElementId, keys: TypingData) -> TodoMvcResult<()> {
        Ok(self.element(element).send_keys(keys)?)
    }

    fn click(&self, element: &ElementId) -> TodoMvcResult<()> {
        Ok(self.element(element).click()?)
    }

    fn get_attribute(&self, element: &ElementId, name: &str) -> TodoMvcResult<Option<String>> {
        Ok(self.element(element).get_attribute(name)?)
    }

    fn is_displayed(&self, element: &ElementId) -> TodoMvcResult<bool> {
        Ok(self.element(element).is_displayed()?)
    }

    fn hover(&self, element: &ElementId) -> TodoMvcResult<()> {
        Ok(self.element(element).hover(false)?)
    }

    fn hover_and_click(&self, element: &ElementId) -> TodoMvcResult<()> {
        Ok(self.element(element).hover(true)?)
    }

    fn wait_config(&self) -> WaitConfig {
        self.config().wait
    }
}

impl<T> Drop for GenericWebDriver<T>
where
    T: WebDriverHttpClientSync,
{
    /// Close the current session when the WebDriver struct goes out of scope.
    fn drop(&mut self) {
        if self.quit_on_drop {
            if let Err(e) = self.session.cmd(Command::DeleteSession) {
                error!("Failed to close session: {:?}", e);
            }
        }
    }
}
