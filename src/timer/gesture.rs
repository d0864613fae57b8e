//! Button gesture classification
//!
//! Turns debounced press/release edges into `Gesture`s. Single and Double are
//! decided on the press edge itself; LongStart fires later from `on_tick` for
//! the same hold, so one physical hold can yield both a Single and a
//! LongStart.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Second press within this window of the first counts as a double press
pub const DOUBLE_PRESS_WINDOW_MS: u64 = 500;
/// Continuous hold needed for a long press
pub const LONG_PRESS_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Single,
    Double,
    LongStart,
    /// Button lifted before the long-press threshold was reached
    LongCancel,
}

/// Gesture buffer plus the timing windows used to classify presses
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    last_press_ms: Option<u64>,
    long_press_anchor_ms: Option<u64>,
    double_window_ms: u64,
    long_press_ms: u64,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::with_windows(DOUBLE_PRESS_WINDOW_MS, LONG_PRESS_MS)
    }

    pub fn with_windows(double_window_ms: u64, long_press_ms: u64) -> Self {
        Self {
            last_press_ms: None,
            long_press_anchor_ms: None,
            double_window_ms,
            long_press_ms,
        }
    }

    /// Handle a falling edge. Returns `Double` when it completes a double
    /// press, otherwise `Single`.
    pub fn on_press(&mut self, now_ms: u64) -> Gesture {
        // every press may turn into a long press, the second half of a double included
        self.long_press_anchor_ms = Some(now_ms);

        match self.last_press_ms {
            Some(first) if now_ms.saturating_sub(first) < self.double_window_ms => {
                debug!("Double press ({} ms apart)", now_ms.saturating_sub(first));
                self.last_press_ms = None;
                Gesture::Double
            }
            _ => {
                self.last_press_ms = Some(now_ms);
                Gesture::Single
            }
        }
    }

    /// Handle a rising edge. A hold that had not yet become a long press is
    /// reported as `LongCancel`.
    pub fn on_release(&mut self, _now_ms: u64) -> Option<Gesture> {
        self.long_press_anchor_ms.take().map(|_| Gesture::LongCancel)
    }

    /// Poll for a long press. Fires `LongStart` at most once per hold.
    pub fn on_tick(&mut self, now_ms: u64) -> Option<Gesture> {
        let anchor = self.long_press_anchor_ms?;
        if now_ms.saturating_sub(anchor) >= self.long_press_ms {
            self.long_press_anchor_ms = None;
            debug!("Long press after {} ms", now_ms.saturating_sub(anchor));
            Some(Gesture::LongStart)
        } else {
            None
        }
    }

    /// Whether a press is in flight that could still become a long press
    pub fn long_press_pending(&self) -> bool {
        self.long_press_anchor_ms.is_some()
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}
