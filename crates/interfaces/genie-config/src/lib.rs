//! Central configuration constants for runtime limits and defaults.

use std::time::Duration;

/// Default base address of the generation service, including the versioned prefix.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Delay between the final progress update and the completion side effects. 1.5 s.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_500;

/// Per-request timeout for the idea and full-asset calls.
///
/// The service itself allows its model calls up to 400 s and the full-asset
/// call also fetches imagery, so the console waits somewhat longer than that.
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 480;

/// Per-request timeout for listing the history.
pub const DEFAULT_HISTORY_TIMEOUT_SECS: u64 = 15;

/// Minimum accepted generation timeout.
pub const MIN_GENERATION_TIMEOUT_SECS: u64 = 5;

/// Maximum accepted generation timeout. 30 minutes.
pub const MAX_GENERATION_TIMEOUT_SECS: u64 = 30 * 60;

/// Confidence shown for assets the service returned without a score.
pub const DEFAULT_CONFIDENCE_SCORE: u8 = 92;

/// Capacity of the kernel's event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Convenience function to clamp a timeout value into the allowed range.
pub fn clamp_generation_timeout(secs: u64) -> Duration {
    Duration::from_secs(secs.clamp(MIN_GENERATION_TIMEOUT_SECS, MAX_GENERATION_TIMEOUT_SECS))
}
