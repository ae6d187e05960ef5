//! Edge debouncing
//!
//! A mechanical button bounces for a few milliseconds after each press.
//! The debouncer accepts the first falling edge and ignores any further
//! edge until the window has elapsed.

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Time-window debouncer for one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_ms: u32,
    last_accepted_ms: Option<u32>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Report an edge at `now_ms`; returns true if it counts as a press
    ///
    /// Timestamps may wrap around `u32::MAX`.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    /// Forget the last accepted edge
    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
