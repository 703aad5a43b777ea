//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, Local, TimeZone};

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        get_timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Get current Unix timestamp (milliseconds)
pub fn get_timestamp_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Format a Unix timestamp (milliseconds) as local `HH:MM:SS`.
///
/// Returns `--:--:--` for timestamps chrono cannot represent.
pub fn format_time_of_day(timestamp_millis: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_millis).single() {
        Some(dt) => format_local(dt),
        None => "--:--:--".to_string(),
    }
}

fn format_local(dt: DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Elapsed whole seconds between two millisecond timestamps, never negative.
pub fn elapsed_secs(from_millis: i64, to_millis: i64) -> i64 {
    (to_millis - from_millis).max(0) / 1000
}
