//! Audible alert collaborator

use std::{
    io::Write,
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};
use tracing::{trace, warn};

pub const SHORT_PULSE: Duration = Duration::from_millis(5);
pub const LONG_PULSE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Short,
    Long,
}

impl Pulse {
    pub fn duration(self) -> Duration {
        match self {
            Pulse::Short => SHORT_PULSE,
            Pulse::Long => LONG_PULSE,
        }
    }
}

/// Synchronous buzzer. Each pulse returns only after it has finished.
pub trait Buzzer: Send {
    fn pulse(&mut self, pulse: Pulse);

    fn short_pulse(&mut self) {
        self.pulse(Pulse::Short);
    }

    fn long_pulse(&mut self) {
        self.pulse(Pulse::Long);
    }
}

/// Buzzer for a terminal: rings the bell on long pulses and blocks the
/// calling thread for the pulse duration.
#[derive(Debug, Clone)]
pub struct TerminalBuzzer {
    muted: bool,
}

impl TerminalBuzzer {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }
}

impl Buzzer for TerminalBuzzer {
    fn pulse(&mut self, pulse: Pulse) {
        trace!("Buzzer pulse: {:?}", pulse);
        if pulse == Pulse::Long && !self.muted {
            let mut stdout = std::io::stdout();
            if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                warn!("Failed to ring terminal bell: {}", e);
            }
        }
        thread::sleep(pulse.duration());
    }
}

/// Buzzer that only records pulses. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuzzer {
    pulses: Arc<Mutex<Vec<Pulse>>>,
}

impl RecordingBuzzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> Vec<Pulse> {
        self.pulses.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut pulses) = self.pulses.lock() {
            pulses.clear();
        }
    }
}

impl Buzzer for RecordingBuzzer {
    fn pulse(&mut self, pulse: Pulse) {
        if let Ok(mut pulses) = self.pulses.lock() {
            pulses.push(pulse);
        }
    }
}
