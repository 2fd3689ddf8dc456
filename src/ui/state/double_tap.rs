// SPDX-License-Identifier: MPL-2.0
//! Double-tap detection
//!
//! Pairs two taps that land within the configured window. Purely temporal:
//! the tap positions are not compared.

use crate::domain::ui::DoubleTapWindow;
use std::time::Instant;

/// Remembers the previous unpaired tap.
#[derive(Debug, Clone, Default)]
pub struct DoubleTapDetector {
    window: DoubleTapWindow,
    last_tap: Option<Instant>,
}

impl DoubleTapDetector {
    #[must_use]
    pub fn new(window: DoubleTapWindow) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Registers a tap at `now`; returns true if it completes a double-tap.
    ///
    /// A completed pair clears the record so a third rapid tap starts a new pair.
    pub fn register_tap(&mut self, now: Instant) -> bool {
        let paired = self
            .last_tap
            .is_some_and(|t| now.saturating_duration_since(t) < self.window.as_duration());

        if paired {
            self.last_tap = None;
        } else {
            self.last_tap = Some(now);
        }
        paired
    }

    /// Forgets any pending tap.
    pub fn reset(&mut self) {
        self.last_tap = None;
    }

    /// Returns true if a tap is waiting for its pair.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.last_tap.is_some()
    }
}
