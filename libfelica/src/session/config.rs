// libfelica/src/session/config.rs

use std::time::Duration;

use crate::protocol::BlockCountMode;
use crate::utils::{self, DEFAULT_TRANSCEIVE_TIMEOUT_MS};

/// Per-session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Timeout handed to the transport on every transceive.
    pub timeout_ms: u64,
    /// Value sent in the block count field of Write Without Encryption.
    pub block_count_mode: BlockCountMode,
    /// Reject replies whose response code is not `command + 1`.
    pub check_response_code: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TRANSCEIVE_TIMEOUT_MS,
            block_count_mode: BlockCountMode::default(),
            check_response_code: true,
        }
    }
}

impl SessionConfig {
    pub fn timeout(&self) -> Duration {
        utils::ms(self.timeout_ms)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = utils::as_ms(timeout);
        self
    }

    pub fn with_block_count_mode(mut self, mode: BlockCountMode) -> Self {
        self.block_count_mode = mode;
        self
    }

    pub fn with_check_response_code(mut self, check: bool) -> Self {
        self.check_response_code = check;
        self
    }
}
