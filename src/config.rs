use std::env;
use std::time::Duration;

use log::debug;

use crate::error::{TodoMvcError, TodoMvcResult};
use crate::query::WaitConfig;

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const DEFAULT_TODOMVC_URL: &str = "http://todomvc.com/examples/vanillajs/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Per-session settings.
#[derive(Debug, Clone, Default)]
pub struct WebDriverConfig {
    /// The wait used by queries unless they override it.
    pub wait: WaitConfig,
}

/// Settings for a TodoMVC test run.
///
/// Every field can be overridden from the environment, see [`TodoMvcConfig::from_env`].
#[derive(Debug, Clone, PartialEq)]
pub struct TodoMvcConfig {
    pub webdriver_url: String,
    pub app_url: String,
    pub wait: WaitConfig,
    pub request_timeout: Duration,
}

impl Default for TodoMvcConfig {
    fn default() -> Self {
        Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            app_url: DEFAULT_TODOMVC_URL.to_string(),
            wait: WaitConfig::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

fn parse_u64(name: &str, value: &str) -> TodoMvcResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| TodoMvcError::Config(format!("{}={:?}: {}", name, value, e)))
}

impl TodoMvcConfig {
    /// Read overrides from `WEBDRIVER_URL`, `TODOMVC_URL`, `TODOMVC_WAIT_TIMEOUT_MS`,
    /// `TODOMVC_POLL_INTERVAL_MS` and `WEBDRIVER_REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> TodoMvcResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> TodoMvcResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("WEBDRIVER_URL") {
            config.webdriver_url = url;
        }
        if let Some(url) = lookup("TODOMVC_URL") {
            config.app_url = url;
        }

        let timeout = match lookup("TODOMVC_WAIT_TIMEOUT_MS") {
            Some(v) => Duration::from_millis(parse_u64("TODOMVC_WAIT_TIMEOUT_MS", &v)?),
            None => config.wait.timeout(),
        };
        let poll_interval = match lookup("TODOMVC_POLL_INTERVAL_MS") {
            Some(v) => Duration::from_millis(parse_u64("TODOMVC_POLL_INTERVAL_MS", &v)?),
            None => config.wait.poll_interval(),
        };
        config.wait = WaitConfig::new(timeout, poll_interval)?;

        if let Some(v) = lookup("WEBDRIVER_REQUEST_TIMEOUT_SECS") {
            config.request_timeout =
                Duration::from_secs(parse_u64("WEBDRIVER_REQUEST_TIMEOUT_SECS", &v)?);
        }

        debug!("loaded config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = TodoMvcConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TodoMvcConfig::default());
        assert_eq!(config.wait.timeout(), Duration::from_secs(3));
        assert_eq!(config.wait.poll_interval(), Duration::from_millis(500));
    }

    #[test]
    fn overrides_are_applied() {
        let config = TodoMvcConfig::from_lookup(lookup(&[
            ("WEBDRIVER_URL", "http://grid:4444/wd/hub"),
            ("TODOMVC_WAIT_TIMEOUT_MS", "10000"),
            ("TODOMVC_POLL_INTERVAL_MS", "250"),
            ("WEBDRIVER_REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.webdriver_url, "http://grid:4444/wd/hub");
        assert_eq!(config.app_url, DEFAULT_TODOMVC_URL);
        assert_eq!(config.wait.timeout(), Duration::from_secs(10));
        assert_eq!(config.wait.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = TodoMvcConfig::from_lookup(lookup(&[("TODOMVC_WAIT_TIMEOUT_MS", "soon")]));
        assert!(matches!(err, Err(TodoMvcError::Config(_))));

        let err = TodoMvcConfig::from_lookup(lookup(&[("TODOMVC_POLL_INTERVAL_MS", "5000")]));
        assert!(matches!(err, Err(TodoMvcError::InvalidWaitConfig(_))));
    }
}
