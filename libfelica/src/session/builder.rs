// libfelica/src/session/builder.rs

use std::time::Duration;

use crate::protocol::BlockCountMode;
use crate::session::{Session, SessionConfig};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Session with optional configuration.
#[derive(Debug)]
pub struct SessionBuilder<T> {
    transport: Option<T>,
    config: SessionConfig,
}

impl<T> Default for SessionBuilder<T> {
    fn default() -> Self {
        Self {
            transport: None,
            config: SessionConfig::default(),
        }
    }
}

impl<T: Transport> SessionBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    pub fn block_count_mode(mut self, mode: BlockCountMode) -> Self {
        self.config = self.config.with_block_count_mode(mode);
        self
    }

    pub fn check_response_code(mut self, check: bool) -> Self {
        self.config = self.config.with_check_response_code(check);
        self
    }

    /// Consume the builder and return an idle Session.
    /// Requires a transport to be provided; otherwise returns TransportMissing.
    pub fn build(self) -> Result<Session<T>> {
        match self.transport {
            Some(t) => Ok(Session::with_config(t, self.config)),
            None => Err(Error::TransportMissing),
        }
    }
}
