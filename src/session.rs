use std::sync::Arc;

use log::trace;
use thirtyfour::common::command::{Command, FormatRequestData};
use thirtyfour::error::WebDriverResult;
use thirtyfour::{RequestData, SessionId};

use crate::config::WebDriverConfig;
use crate::http::connection_sync::WebDriverHttpClientSync;

#[derive(Debug)]
pub struct WebDriverSession {
    session_id: SessionId,
    conn: Arc<dyn WebDriverHttpClientSync>,
    config: WebDriverConfig,
}

impl WebDriverSession {
    pub fn new(session_id: SessionId, conn: Arc<dyn WebDriverHttpClientSync>) -> Self {
        Self {
            session_id,
            conn,
            config: WebDriverConfig::default(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn config(&self) -> &WebDriverConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WebDriverConfig {
        &mut self.config
    }

    /// Send one command and return the full response body.
    pub fn cmd(&self, command: Command) -> WebDriverResult<serde_json::Value> {
        self.execute(command.format_request(&self.session_id))
    }

    /// Send a request that has no `Command` of its own, such as the W3C actions endpoint.
    pub fn execute(&self, request: RequestData) -> WebDriverResult<serde_json::Value> {
        trace!("session {}: {}", self.session_id, request.url);
        self.conn.execute(request)
    }
}
