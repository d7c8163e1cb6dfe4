use serde_json::{json, Value};
use thirtyfour::common::command::{Command, MAGIC_ELEMENTID};
use thirtyfour::common::connection_common::convert_json;
use thirtyfour::common::types::{ElementId, ElementRef};
use thirtyfour::error::WebDriverResult;
use thirtyfour::{RequestData, RequestMethod, TypingData};

use crate::{Locator, WebDriverSession};

/// Unwrap the raw JSON into a Vec of element ids.
pub fn convert_element_ids(value: &Value) -> WebDriverResult<Vec<ElementId>> {
    let values: Vec<ElementRef> = serde_json::from_value(value.clone())?;
    Ok(values.into_iter().map(|x| ElementId::from(x.id)).collect())
}

/// Pointer action sequence moving to the centre of an element, optionally clicking it.
pub fn pointer_actions(element_id: &ElementId, click: bool) -> Value {
    let mut actions = vec![json!({
        "type": "pointerMove",
        "duration": 0,
        "origin": { MAGIC_ELEMENTID: element_id.to_string() },
        "x": 0,
        "y": 0,
    })];
    if click {
        actions.push(json!({ "type": "pointerDown", "button": 0 }));
        actions.push(json!({ "type": "pointerUp", "button": 0 }));
    }

    json!({
        "actions": [{
            "type": "pointer",
            "id": "mouse",
            "parameters": { "pointerType": "mouse" },
            "actions": actions,
        }]
    })
}

/// The WebElement struct encapsulates a single element on a page.
///
/// WebElement structs are generally not constructed manually. The
/// [`Driver`](crate::Driver) implementation for `GenericWebDriver` hands out
/// `ElementId`s and wraps them in a WebElement for each command.
#[derive(Debug, Clone)]
pub struct WebElement<'a> {
    pub element_id: ElementId,
    session: &'a WebDriverSession,
}

impl<'a> WebElement<'a> {
    pub fn new(session: &'a WebDriverSession, element_id: ElementId) -> Self {
        WebElement {
            element_id,
            session,
        }
    }

    /// Convenience wrapper for executing a WebDriver command.
    fn cmd(&self, command: Command) -> WebDriverResult<Value> {
        self.session.cmd(command)
    }

    /// Click the WebElement.
    pub fn click(&self) -> WebDriverResult<()> {
        self.cmd(Command::ElementClick(self.element_id.clone()))?;
        Ok(())
    }

    /// Get the specified attribute value for this WebElement, if it has one.
    pub fn get_attribute(&self, name: &str) -> WebDriverResult<Option<String>> {
        let v = self.cmd(Command::GetElementAttribute(self.element_id.clone(), name.to_owned()))?;
        if !v["value"].is_string() {
            Ok(None)
        } else {
            convert_json(&v["value"])
        }
    }

    /// Return true if the WebElement is currently displayed, otherwise false.
    pub fn is_displayed(&self) -> WebDriverResult<bool> {
        let v = self.cmd(Command::IsElementDisplayed(self.element_id.clone()))?;
        convert_json(&v["value"])
    }

    /// Find all descendants of this WebElement matching the locator.
    pub fn find_elements(&self, locator: &Locator) -> WebDriverResult<Vec<WebElement<'a>>> {
        let v = locator.with_by(|by| {
            self.cmd(Command::FindElementsFromElement(
                self.element_id.clone(),
                by.get_w3c_selector(),
            ))
        })?;
        let ids = convert_element_ids(&v["value"])?;
        Ok(ids.into_iter().map(|id| WebElement::new(self.session, id)).collect())
    }

    /// Send the specified input, e.g. `TypingData::from("milk") + Keys::Enter`.
    pub fn send_keys(&self, keys: TypingData) -> WebDriverResult<()> {
        self.cmd(Command::ElementSendKeys(self.element_id.clone(), keys))?;
        Ok(())
    }

    /// Move the mouse over this WebElement, optionally clicking it in the same action sequence.
    pub fn hover(&self, click: bool) -> WebDriverResult<()> {
        let actions_url = format!("/session/{}/actions", self.session.session_id());
        self.session.execute(RequestData {
            method: RequestMethod::Post,
            url: actions_url.clone(),
            body: Some(pointer_actions(&self.element_id, click)),
        })?;
        self.session.execute(RequestData {
            method: RequestMethod::Delete,
            url: actions_url,
            body: None,
        })?;
        Ok(())
    }
}
