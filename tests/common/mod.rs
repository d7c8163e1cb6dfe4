#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::json;
use thirtyfour::error::WebDriverError;
use todomvc_sync::query::WaitConfig;
use todomvc_sync::todomvc::{new_todo_locator, todo_locator};
use todomvc_sync::{Driver, Locator, TodoMvcError, TodoMvcResult, TypingData};

const ENTER: char = '\u{e007}';

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub fn wait(timeout_ms: u64, interval_ms: u64) -> WaitConfig {
    WaitConfig::new(ms(timeout_ms), ms(interval_ms)).unwrap()
}

/// An error response as a W3C WebDriver server would send it.
pub fn w3c_error(status: u16, error: &str, message: &str) -> TodoMvcError {
    let body = json!({ "value": { "error": error, "message": message, "stacktrace": "" } });
    WebDriverError::parse(status, body.to_string()).into()
}

#[derive(Debug, Clone, PartialEq)]
enum Behavior {
    Plain,
    NewTodoInput,
    TodoLabel { li: usize, destroy: usize, checkbox: usize },
    Checkbox { li: usize },
    Destroy { label: usize },
    FilterLink(String),
}

#[derive(Debug, Clone)]
struct Node {
    displayed: bool,
    attributes: HashMap<String, String>,
    behavior: Behavior,
}

enum Change {
    Add(Locator, usize),
    Remove(usize),
}

/// An in-memory page implementing `Driver`, with just enough TodoMVC behavior
/// to exercise the service: typing a name plus Enter adds a todo, hovering a
/// todo reveals its remove button, and ticking the checkbox completes it.
pub struct FakeDriver {
    start: Instant,
    wait: WaitConfig,
    next_id: Cell<usize>,
    nodes: RefCell<HashMap<usize, Node>>,
    page: RefCell<HashMap<Locator, Vec<usize>>>,
    children: RefCell<HashMap<(usize, Locator), Vec<usize>>>,
    scheduled: RefCell<Vec<(Duration, Change)>>,
    find_calls: Cell<usize>,
    filter: RefCell<Option<String>>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            wait: wait(1000, 50),
            next_id: Cell::new(1),
            nodes: RefCell::new(HashMap::new()),
            page: RefCell::new(HashMap::new()),
            children: RefCell::new(HashMap::new()),
            scheduled: RefCell::new(Vec::new()),
            find_calls: Cell::new(0),
            filter: RefCell::new(None),
        }
    }

    /// A TodoMVC page with the new-todo input and the three filter links.
    pub fn todo_app() -> Self {
        let driver = Self::new();
        driver.add_with(new_todo_locator(), Behavior::NewTodoInput, true);
        for href in ["#/", "#/active", "#/completed"] {
            let locator = Locator::XPath(format!("//a[@href='{}']", href));
            driver.add_with(locator, Behavior::FilterLink(href.to_string()), true);
        }
        driver
    }

    pub fn with_wait(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    fn new_node(&self, behavior: Behavior, displayed: bool) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.nodes.borrow_mut().insert(
            id,
            Node {
                displayed,
                attributes: HashMap::new(),
                behavior,
            },
        );
        id
    }

    fn add_with(&self, locator: Locator, behavior: Behavior, displayed: bool) -> usize {
        let id = self.new_node(behavior, displayed);
        self.page.borrow_mut().entry(locator).or_default().push(id);
        id
    }

    /// Add a displayed element matching `locator`.
    pub fn add(&self, locator: Locator) -> usize {
        self.add_with(locator, Behavior::Plain, true)
    }

    /// Add a hidden element matching `locator`.
    pub fn add_hidden(&self, locator: Locator) -> usize {
        self.add_with(locator, Behavior::Plain, false)
    }

    /// Make an element matching `locator` appear `after` the driver was created.
    pub fn add_after(&self, locator: Locator, after: Duration) -> usize {
        let id = self.new_node(Behavior::Plain, true);
        self.scheduled.borrow_mut().push((after, Change::Add(locator, id)));
        id
    }

    /// Remove the element `after` the driver was created.
    pub fn remove_after(&self, id: usize, after: Duration) {
        self.scheduled.borrow_mut().push((after, Change::Remove(id)));
    }

    pub fn set_displayed(&self, id: usize, displayed: bool) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(&id) {
            node.displayed = displayed;
        }
    }

    pub fn set_attribute(&self, id: usize, name: &str, value: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(&id) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove(&self, id: usize) {
        self.nodes.borrow_mut().remove(&id);
        for ids in self.page.borrow_mut().values_mut() {
            ids.retain(|x| *x != id);
        }
        for ids in self.children.borrow_mut().values_mut() {
            ids.retain(|x| *x != id);
        }
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.get()
    }

    pub fn filter(&self) -> Option<String> {
        self.filter.borrow().clone()
    }

    pub fn count(&self, locator: &Locator) -> usize {
        self.page.borrow().get(locator).map_or(0, Vec::len)
    }

    fn apply_scheduled(&self) {
        let elapsed = self.start.elapsed();
        let due: Vec<Change> = {
            let mut scheduled = self.scheduled.borrow_mut();
            let (due, pending): (Vec<_>, Vec<_>) =
                scheduled.drain(..).partition(|(at, _)| *at <= elapsed);
            *scheduled = pending;
            due.into_iter().map(|(_, change)| change).collect()
        };
        for change in due {
            match change {
                Change::Add(locator, id) => {
                    self.page.borrow_mut().entry(locator).or_default().push(id)
                }
                Change::Remove(id) => self.remove(id),
            }
        }
    }

    fn node(&self, id: usize) -> TodoMvcResult<Node> {
        self.nodes
            .borrow()
            .get(&id)
            .cloned()
            .ok_or_else(|| w3c_error(404, "stale element reference", &format!("element {}", id)))
    }

    fn create_todo(&self, name: &str) {
        let li = self.new_node(Behavior::Plain, true);
        self.set_attribute(li, "class", "");
        let destroy = self.new_node(Behavior::Plain, false);
        let checkbox = self.new_node(Behavior::Plain, true);
        let label = self.add_with(
            todo_locator(name),
            Behavior::TodoLabel {
                li,
                destroy,
                checkbox,
            },
            true,
        );
        if let Some(node) = self.nodes.borrow_mut().get_mut(&destroy) {
            node.behavior = Behavior::Destroy {
                label,
            };
        }
        if let Some(node) = self.nodes.borrow_mut().get_mut(&checkbox) {
            node.behavior = Behavior::Checkbox {
                li,
            };
        }
        let mut children = self.children.borrow_mut();
        children.insert((label, Locator::XPath("..".to_string())), vec![li]);
        children.insert((label, Locator::ClassName("destroy".to_string())), vec![destroy]);
        children.insert((label, Locator::Tag("input".to_string())), vec![checkbox]);
    }

    fn remove_todo(&self, label: usize) {
        if let Ok(Node {
            behavior: Behavior::TodoLabel {
                li,
                destroy,
                checkbox,
            },
            ..
        }) = self.node(label)
        {
            for id in [label, li, destroy, checkbox] {
                self.remove(id);
            }
            self.children.borrow_mut().retain(|(parent, _), _| *parent != label);
        }
    }
}

impl Driver for FakeDriver {
    type Element = usize;

    fn find_elements(&self, locator: &Locator) -> TodoMvcResult<Vec<usize>> {
        self.find_calls.set(self.find_calls.get() + 1);
        self.apply_scheduled();
        Ok(self.page.borrow().get(locator).cloned().unwrap_or_default())
    }

    fn find_elements_from(
        &self,
        element: &usize,
        locator: &Locator,
    ) -> TodoMvcResult<Vec<usize>> {
        self.find_calls.set(self.find_calls.get() + 1);
        self.apply_scheduled();
        self.node(*element)?;
        let key = (*element, locator.clone());
        Ok(self.children.borrow().get(&key).cloned().unwrap_or_default())
    }

    fn send_keys(&self, element: &usize, keys: TypingData) -> TodoMvcResult<()> {
        let node = self.node(*element)?;
        let text = keys.to_string();
        if node.behavior == Behavior::NewTodoInput && text.ends_with(ENTER) {
            self.create_todo(text.trim_end_matches(ENTER).trim());
        }
        Ok(())
    }

    fn click(&self, element: &usize) -> TodoMvcResult<()> {
        match self.node(*element)?.behavior {
            Behavior::Checkbox {
                li,
            } => self.set_attribute(li, "class", "completed"),
            Behavior::FilterLink(href) => *self.filter.borrow_mut() = Some(href),
            _ => {}
        }
        Ok(())
    }

    fn get_attribute(&self, element: &usize, name: &str) -> TodoMvcResult<Option<String>> {
        Ok(self.node(*element)?.attributes.get(name).cloned())
    }

    fn is_displayed(&self, element: &usize) -> TodoMvcResult<bool> {
        Ok(self.node(*element)?.displayed)
    }

    fn hover(&self, element: &usize) -> TodoMvcResult<()> {
        if let Behavior::TodoLabel {
            destroy,
            ..
        } = self.node(*element)?.behavior
        {
            self.set_displayed(destroy, true);
        }
        Ok(())
    }

    fn hover_and_click(&self, element: &usize) -> TodoMvcResult<()> {
        let node = self.node(*element)?;
        if !node.displayed {
            let message = format!("element {} is hidden", element);
            return Err(w3c_error(400, "element not interactable", &message));
        }
        match node.behavior {
            Behavior::Destroy {
                label,
            } => self.remove_todo(label),
            _ => self.click(element)?,
        }
        Ok(())
    }

    fn wait_config(&self) -> WaitConfig {
        self.wait
    }
}
