use std::fmt::Debug;
use std::time::Duration;

use thirtyfour::error::WebDriverResult;
use thirtyfour::RequestData;

#[derive(Debug, Clone)]
pub struct HttpClientCreateParams {
    pub server_url: String,
    /// Defaults to [`DEFAULT_REQUEST_TIMEOUT`](crate::config::DEFAULT_REQUEST_TIMEOUT).
    pub timeout: Option<Duration>,
}

/// Trait for executing HTTP requests to selenium/webdriver.
/// As long as you have some struct that implements WebDriverHttpClientSync,
/// you can turn it into a WebDriver like this:
///
/// ```ignore
/// // Assuming MyHttpClient implements WebDriverHttpClientSync.
/// pub type MyWebDriver = GenericWebDriver<MyHttpClient>;
/// ```
pub trait WebDriverHttpClientSync: Debug + Send + Sync {
    fn create(params: HttpClientCreateParams) -> WebDriverResult<Self>
    where
        Self: Sized;

    /// Execute the request and return the full JSON response body.
    fn execute(&self, request_data: RequestData) -> WebDriverResult<serde_json::Value>;
}
