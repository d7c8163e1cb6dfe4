use std::fmt;

use thirtyfour::By;

/// Selector for zero or more elements on a page.
///
/// Locators are owned and immutable, and compare structurally, so the same
/// locator built twice is equal to itself:
///
/// ```rust
/// use todomvc_sync::Locator;
///
/// assert_eq!(Locator::ClassName("destroy".into()), Locator::ClassName("destroy".into()));
/// assert_ne!(Locator::ClassName("destroy".into()), Locator::Css(".destroy".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    Id(String),
    Name(String),
    ClassName(String),
    Tag(String),
    Css(String),
    XPath(String),
    LinkText(String),
    PartialLinkText(String),
}

impl Locator {
    pub fn id<S: Into<String>>(id: S) -> Self {
        Locator::Id(id.into())
    }

    pub fn class_name<S: Into<String>>(name: S) -> Self {
        Locator::ClassName(name.into())
    }

    pub fn tag<S: Into<String>>(tag: S) -> Self {
        Locator::Tag(tag.into())
    }

    pub fn css<S: Into<String>>(selector: S) -> Self {
        Locator::Css(selector.into())
    }

    pub fn xpath<S: Into<String>>(xpath: S) -> Self {
        Locator::XPath(xpath.into())
    }

    /// Run `f` with the `By` selector for this locator.
    ///
    /// Id, name and class locators are sent as escaped CSS selectors, since
    /// W3C WebDriver has no strategies of its own for them.
    pub fn with_by<T, F>(&self, f: F) -> T
    where
        F: FnOnce(By) -> T,
    {
        match self {
            Locator::Id(x) => f(By::Css(&format!("[id={}]", css_string(x)))),
            Locator::Name(x) => f(By::Css(&format!("[name={}]", css_string(x)))),
            Locator::ClassName(x) => f(By::Css(&format!(".{}", css_identifier(x)))),
            Locator::Tag(x) => f(By::Tag(x)),
            Locator::Css(x) => f(By::Css(x)),
            Locator::XPath(x) => f(By::XPath(x)),
            Locator::LinkText(x) => f(By::LinkText(x)),
            Locator::PartialLinkText(x) => f(By::PartialLinkText(x)),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Locator::Id(x) => write!(f, "Id({})", x),
            Locator::Name(x) => write!(f, "Name({})", x),
            Locator::ClassName(x) => write!(f, "ClassName({})", x),
            Locator::Tag(x) => write!(f, "Tag({})", x),
            Locator::Css(x) => write!(f, "Css({})", x),
            Locator::XPath(x) => write!(f, "XPath({})", x),
            Locator::LinkText(x) => write!(f, "LinkText({})", x),
            Locator::PartialLinkText(x) => write!(f, "PartialLinkText({})", x),
        }
    }
}

/// Escape `value` for use as a CSS identifier, e.g. a class name.
pub fn css_identifier(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '0'..='9' if i == 0 => out.push_str(&format!("\\{:x} ", c as u32)),
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => out.push(c),
            c if !c.is_ascii() => out.push(c),
            c if c.is_ascii_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}

/// Quote `value` as a double-quoted CSS string.
pub fn css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Quote the specified string as an XPath string literal.
///
/// XPath 1.0 has no escape sequences, so a value containing both kinds of
/// quote is assembled with `concat()`.
pub fn escape_string(value: &str) -> String {
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }
    if !value.contains('\'') {
        return format!("'{}'", value);
    }

    let parts: Vec<String> = value.split('"').map(|s| format!("\"{}\"", s)).collect();
    format!("concat({})", parts.join(", '\"', "))
}
