//! Work/break timer state machine
//!
//! Owns the timer phase, mode and interval target. Every mutation of the
//! timer goes through the operations here; none of them can fail and calls
//! that make no sense for the current phase are ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    gesture::Gesture,
    notifier::{FinishedNotifier, NotifierAction},
    stopwatch::Stopwatch,
};
use crate::{hardware::Buzzer, remote::RemoteCommand, state::TimerSnapshot};

/// Shown while nothing is counting down
pub const IDLE_GLYPH: &str = "(^_^)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Work,
    Break,
}

impl Mode {
    pub fn other(self) -> Self {
        match self {
            Mode::Work => Mode::Break,
            Mode::Break => Mode::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::Break => "Break",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Carry whole minutes out of `seconds` so that seconds ends up in 0..=59
pub fn normalize_duration(minutes: u32, seconds: u32) -> (u32, u32) {
    (minutes.saturating_add(seconds / 60), seconds % 60)
}

/// Default interval length for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub default_minutes: u32,
    pub default_seconds: u32,
}

impl TimerConfig {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        let (default_minutes, default_seconds) = normalize_duration(minutes, seconds);
        Self { default_minutes, default_seconds }
    }

    pub fn work() -> Self {
        Self::new(25, 0)
    }

    pub fn rest() -> Self {
        Self::new(5, 0)
    }
}

fn duration_ms(minutes: u32, seconds: u32) -> u64 {
    (minutes as u64 * 60 + seconds as u64) * 1_000
}

/// Format a remaining time as `MM:SS`, counting partial seconds as whole
pub fn format_countdown(remaining_ms: u64) -> String {
    let total_secs = remaining_ms.div_ceil(1_000);
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

pub struct TimerMachine<B: Buzzer> {
    work: TimerConfig,
    rest: TimerConfig,
    mode: Mode,
    phase: Phase,
    target_minutes: u32,
    target_seconds: u32,
    stopwatch: Stopwatch,
    paused_at_ms: Option<u64>,
    finished_at_ms: Option<u64>,
    /// Mode label shown after a toggle until the interval runs again
    banner: Option<Mode>,
    notifier: FinishedNotifier,
    buzzer: B,
}

impl<B: Buzzer> TimerMachine<B> {
    /// Boots idle in work mode with the work defaults as target
    pub fn new(work: TimerConfig, rest: TimerConfig, buzzer: B) -> Self {
        Self {
            work,
            rest,
            mode: Mode::Work,
            phase: Phase::Idle,
            target_minutes: work.default_minutes,
            target_seconds: work.default_seconds,
            stopwatch: Stopwatch::new(),
            paused_at_ms: None,
            finished_at_ms: None,
            banner: None,
            notifier: FinishedNotifier::new(),
            buzzer,
        }
    }

    pub fn with_notifier(mut self, notifier: FinishedNotifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> (u32, u32) {
        (self.target_minutes, self.target_seconds)
    }

    pub fn target_ms(&self) -> u64 {
        duration_ms(self.target_minutes, self.target_seconds)
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.stopwatch.elapsed_ms(now_ms)
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.target_ms().saturating_sub(self.elapsed_ms(now_ms))
    }

    pub fn paused_at_ms(&self) -> Option<u64> {
        self.paused_at_ms
    }

    pub fn finished_at_ms(&self) -> Option<u64> {
        self.finished_at_ms
    }

    pub fn defaults_for(&self, mode: Mode) -> TimerConfig {
        match mode {
            Mode::Work => self.work,
            Mode::Break => self.rest,
        }
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    /// Begin a new interval. Works from every phase.
    pub fn start(&mut self, now_ms: u64, minutes: u32, seconds: u32) {
        info!("Starting timer: {}:{:02}", minutes, seconds);
        self.target_minutes = minutes;
        self.target_seconds = seconds;
        self.stopwatch.start(now_ms);
        self.paused_at_ms = None;
        self.finished_at_ms = None;
        self.banner = None;
        self.phase = Phase::Running;
        self.buzzer.short_pulse();
    }

    /// Returns whether the timer was running and is now paused
    pub fn pause(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Running {
            debug!("Ignoring pause while {:?}", self.phase);
            return false;
        }
        info!("Timer paused");
        self.stopwatch.pause(now_ms);
        self.paused_at_ms = Some(now_ms);
        self.phase = Phase::Paused;
        self.buzzer.short_pulse();
        true
    }

    /// Returns whether the timer was paused and is now running
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Paused {
            debug!("Ignoring resume while {:?}", self.phase);
            return false;
        }
        info!("Timer resumed");
        self.stopwatch.resume(now_ms);
        self.paused_at_ms = None;
        self.banner = None;
        self.phase = Phase::Running;
        self.buzzer.short_pulse();
        true
    }

    /// Restart the current interval from zero with its current target
    pub fn reset(&mut self, now_ms: u64) {
        info!("Timer reset");
        self.start(now_ms, self.target_minutes, self.target_seconds);
    }

    /// Switch work/break and land paused on the new mode's defaults
    pub fn toggle_mode(&mut self, now_ms: u64) {
        let next = self.mode.other();
        let defaults = self.defaults_for(next);
        info!("Switching to {} mode", next.label());

        self.start(now_ms, defaults.default_minutes, defaults.default_seconds);
        self.pause(now_ms);
        self.mode = next;
        self.banner = Some(next);
        self.finished_at_ms = Some(now_ms);
        self.notifier.rearm(now_ms);
    }

    /// Advance time-driven behavior: finishing and the finished notification
    pub fn tick(&mut self, now_ms: u64) {
        match self.phase {
            Phase::Running => {
                if self.stopwatch.elapsed_ms(now_ms) >= self.target_ms() {
                    self.finish(now_ms);
                }
            }
            Phase::Finished => match self.notifier.tick(now_ms) {
                NotifierAction::Flash(_) => self.buzzer.long_pulse(),
                NotifierAction::Expired => self.enter_idle(),
                NotifierAction::Hold => {}
            },
            Phase::Idle | Phase::Paused => {}
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture, now_ms: u64) {
        debug!("Gesture {:?} while {:?}", gesture, self.phase);
        match gesture {
            Gesture::Single => match self.phase {
                Phase::Idle | Phase::Finished => {
                    let work = self.work;
                    self.start(now_ms, work.default_minutes, work.default_seconds);
                }
                Phase::Paused => {
                    self.resume(now_ms);
                }
                Phase::Running => {
                    self.pause(now_ms);
                }
            },
            Gesture::Double => self.reset(now_ms),
            Gesture::LongStart => self.toggle_mode(now_ms),
            Gesture::LongCancel => {}
        }
    }

    pub fn handle_command(&mut self, command: RemoteCommand, now_ms: u64) {
        debug!("Remote command {:?} while {:?}", command, self.phase);
        match command {
            RemoteCommand::Set { minutes, seconds } => {
                let (minutes, seconds) = normalize_duration(minutes, seconds);
                self.start(now_ms, minutes, seconds);
            }
            RemoteCommand::Pause => {
                self.pause(now_ms);
            }
            RemoteCommand::Play => {
                self.resume(now_ms);
            }
        }
    }

    /// The single line the display should show right now
    pub fn screen(&self, now_ms: u64) -> String {
        match (self.phase, self.banner) {
            (Phase::Idle, _) => IDLE_GLYPH.to_string(),
            (Phase::Finished, _) => self.notifier.message().to_string(),
            (Phase::Paused, Some(mode)) => mode.label().to_string(),
            _ => format_countdown(self.remaining_ms(now_ms)),
        }
    }

    pub fn snapshot(&self, now_ms: u64) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            phase: self.phase,
            target_minutes: self.target_minutes,
            target_seconds: self.target_seconds,
            elapsed_ms: self.elapsed_ms(now_ms),
            remaining_ms: self.remaining_ms(now_ms),
            screen: self.screen(now_ms),
        }
    }

    fn finish(&mut self, now_ms: u64) {
        info!("Timer finished");
        self.stopwatch.pause(now_ms);
        self.finished_at_ms = Some(now_ms);
        self.notifier.begin(now_ms);
        self.phase = Phase::Finished;
        self.buzzer.long_pulse();
    }

    fn enter_idle(&mut self) {
        info!("Finished notification over, timer idle");
        self.finished_at_ms = None;
        self.phase = Phase::Idle;
    }
}
