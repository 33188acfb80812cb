//! Menu inactivity timeout.

/// Tracks the time of the last user action.
///
/// Times are milliseconds from the platform [`Clock`](crate::platform::Clock)
/// and may wrap; elapsed time is computed with wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InactivityTimer {
    timeout_ms: u32,
    last_action: u32,
}

impl InactivityTimer {
    /// A timer expiring after `timeout_ms`, `0` to disable.
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            last_action: 0,
        }
    }

    /// Change the timeout, `0` to disable.
    pub fn set_timeout(&mut self, timeout_ms: u32) {
        self.timeout_ms = timeout_ms;
    }

    /// The configured timeout.
    pub fn timeout(&self) -> u32 {
        self.timeout_ms
    }

    /// Record user activity at `now`.
    pub fn restart(&mut self, now: u32) {
        self.last_action = now;
    }

    /// Whether the timeout is enabled and has run out at `now`.
    pub fn expired(&self, now: u32) -> bool {
        self.timeout_ms != 0 && now.wrapping_sub(self.last_action) >= self.timeout_ms
    }
}
