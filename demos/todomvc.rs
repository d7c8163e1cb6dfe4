//! Requires chromedriver running on port 4444:
//!
//!     chromedriver --port=4444
//!
//! Run as follows:
//!
//!     RUST_LOG=info cargo run --example todomvc
//!
//! Set WEBDRIVER_URL or TODOMVC_URL to point somewhere else.

use serde_json::json;
use todomvc_sync::prelude::*;
use todomvc_sync::TodoMvcConfig;

fn run(driver: &WebDriver, config: &TodoMvcConfig, reporter: &LogReporter) -> TodoMvcResult<()> {
    driver.get(&config.app_url)?;
    let todos = TodoMvcService::new(driver, reporter);

    let name = todos.create_unique_todo("Write tests", new_todo_locator())?;
    todos.verify_added_todo(&name)?;

    todos.complete_todo(&name)?;
    todos.verify_completed_todo(&name)?;
    todos.filter_completed()?;
    todos.filter_all()?;

    todos.remove_todo(&name)?;
    todos.verify_removed_todo(&name)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let config = TodoMvcConfig::from_env()?;
    let caps = json!({ "browserName": "chrome" });
    let mut driver =
        WebDriver::new_with_timeout(&config.webdriver_url, &caps, Some(config.request_timeout))?;
    driver.set_wait_config(config.wait);

    let reporter = LogReporter;
    reporter.test_start("todomvc: add, complete and remove a todo");
    let result = run(&driver, &config, &reporter);
    match &result {
        Ok(()) => reporter.test_stop(&TestResult::Success),
        Err(e) => reporter.test_stop(&TestResult::failure(e.to_string())),
    }

    driver.quit()?;
    result?;
    Ok(())
}
