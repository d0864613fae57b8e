//! Finished-interval notification: flashing messages and auto-expiry

use tracing::debug;

/// Time between message flips
pub const FLASH_INTERVAL_MS: u64 = 1_000;
/// How long the notification lasts before the timer drops back to idle
pub const FINISHED_DURATION_MS: u64 = 30_000;

/// Messages alternated while the notification is showing
pub const FINISHED_MESSAGES: [&str; 2] = ["Finish", ""];

/// What the notifier wants done after a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierAction {
    /// Nothing changed
    Hold,
    /// Show the next message and sound a long pulse
    Flash(&'static str),
    /// The notification window is over
    Expired,
}

#[derive(Debug, Clone)]
pub struct FinishedNotifier {
    finished_at_ms: u64,
    last_flash_ms: u64,
    flash_index: usize,
    flash_interval_ms: u64,
    duration_ms: u64,
}

impl FinishedNotifier {
    pub fn new() -> Self {
        Self::with_timing(FLASH_INTERVAL_MS, FINISHED_DURATION_MS)
    }

    pub fn with_timing(flash_interval_ms: u64, duration_ms: u64) -> Self {
        Self {
            finished_at_ms: 0,
            last_flash_ms: 0,
            flash_index: 0,
            flash_interval_ms,
            duration_ms,
        }
    }

    /// Arm the notifier at the moment the interval finished
    pub fn begin(&mut self, now_ms: u64) {
        self.finished_at_ms = now_ms;
        self.last_flash_ms = now_ms;
        self.flash_index = 0;
    }

    /// Restart the expiry window without touching the flash cadence
    pub fn rearm(&mut self, now_ms: u64) {
        self.finished_at_ms = now_ms;
    }

    pub fn message(&self) -> &'static str {
        FINISHED_MESSAGES[self.flash_index]
    }

    pub fn tick(&mut self, now_ms: u64) -> NotifierAction {
        if now_ms.saturating_sub(self.finished_at_ms) >= self.duration_ms {
            debug!("Finished notification expired");
            return NotifierAction::Expired;
        }

        if now_ms.saturating_sub(self.last_flash_ms) > self.flash_interval_ms {
            self.flash_index = (self.flash_index + 1) % FINISHED_MESSAGES.len();
            self.last_flash_ms = now_ms;
            return NotifierAction::Flash(self.message());
        }

        NotifierAction::Hold
    }
}

impl Default for FinishedNotifier {
    fn default() -> Self {
        Self::new()
    }
}
