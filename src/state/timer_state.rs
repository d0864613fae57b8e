//! Published timer snapshot

use serde::{Deserialize, Serialize};

use crate::timer::{Mode, Phase, TimerConfig, IDLE_GLYPH};

/// Point-in-time view of the timer, as published by the control loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub phase: Phase,
    pub target_minutes: u32,
    pub target_seconds: u32,
    pub elapsed_ms: u64,
    pub remaining_ms: u64,
    /// Text currently on the display
    pub screen: String,
}

impl TimerSnapshot {
    /// Snapshot of a freshly booted timer
    pub fn boot(work: TimerConfig) -> Self {
        Self {
            mode: Mode::Work,
            phase: Phase::Idle,
            target_minutes: work.default_minutes,
            target_seconds: work.default_seconds,
            elapsed_ms: 0,
            remaining_ms: (work.default_minutes as u64 * 60 + work.default_seconds as u64) * 1_000,
            screen: IDLE_GLYPH.to_string(),
        }
    }

    /// Check if the countdown is moving
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Remaining whole seconds while an interval is live
    pub fn remaining_seconds(&self) -> Option<u64> {
        match self.phase {
            Phase::Running | Phase::Paused => Some(self.remaining_ms.div_ceil(1_000)),
            Phase::Idle | Phase::Finished => None,
        }
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::boot(TimerConfig::work())
    }
}
