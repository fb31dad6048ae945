//! Transceive timeout helpers.

use std::time::Duration;

/// Default per-transceive timeout in milliseconds handed to the transport
/// when the session configuration does not override it.
pub const DEFAULT_TRANSCEIVE_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convert a Duration to whole milliseconds, saturating at `u64::MAX`.
pub fn as_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
