//! End-to-end button and remote flows through the public library API.
//!
//! A manual clock and a recording buzzer stand in for the device; the
//! controller is polled every 10 ms like the real control loop.

use one_button_timer::{
    clock::{Clock, ManualClock},
    hardware::{ButtonInput, Display, Edge, Pulse, RecordingBuzzer},
    remote::{parse_line, ConsoleLine},
    state::ControlInput,
    tasks::Controller,
    timer::{FinishedNotifier, Mode, Phase, TimerConfig, TimerMachine, IDLE_GLYPH},
};

const POLL_MS: u64 = 10;

#[derive(Default)]
struct Screen {
    lines: Vec<String>,
}

impl Display for Screen {
    fn show(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn clear(&mut self) {
        self.lines.push(String::new());
    }
}

struct Rig {
    clock: ManualClock,
    buzzer: RecordingBuzzer,
    controller: Controller<RecordingBuzzer, Screen>,
}

impl Rig {
    fn new(work: TimerConfig, rest: TimerConfig) -> Self {
        let buzzer = RecordingBuzzer::new();
        let machine = TimerMachine::new(work, rest, buzzer.clone());
        Self {
            clock: ManualClock::new(0),
            buzzer,
            controller: Controller::new(machine, ButtonInput::new(5), Screen::default()),
        }
    }

    fn with_notifier(work: TimerConfig, notifier: FinishedNotifier) -> Self {
        let buzzer = RecordingBuzzer::new();
        let machine = TimerMachine::new(work, TimerConfig::rest(), buzzer.clone()).with_notifier(notifier);
        Self {
            clock: ManualClock::new(0),
            buzzer,
            controller: Controller::new(machine, ButtonInput::new(5), Screen::default()),
        }
    }

    fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    fn input(&mut self, input: ControlInput) {
        let now = self.now();
        self.controller.handle_input(input, now);
        self.controller.poll(now);
    }

    fn console(&mut self, line: &str) {
        let input = match parse_line(line) {
            Some(ConsoleLine::Command(command)) => ControlInput::Command(command),
            Some(ConsoleLine::Button(edge)) => ControlInput::Button(edge),
            None => panic!("unparsable console line {:?}", line),
        };
        self.input(input);
    }

    /// Poll in 10 ms steps for `ms` milliseconds
    fn run_for(&mut self, ms: u64) {
        let end = self.now() + ms;
        while self.now() < end {
            let now = self.clock.advance(POLL_MS.min(end - self.now()));
            self.controller.poll(now);
        }
    }

    fn click(&mut self) {
        self.input(ControlInput::Button(Edge::Press));
        self.run_for(50);
        self.input(ControlInput::Button(Edge::Release));
    }

    fn phase(&self) -> Phase {
        self.controller.machine().phase()
    }

    fn screen(&self) -> String {
        self.controller.machine().screen(self.now())
    }
}

#[test]
fn full_work_cycle_returns_to_idle() {
    let mut rig = Rig::new(TimerConfig::new(0, 3), TimerConfig::rest());
    assert_eq!(rig.screen(), IDLE_GLYPH);

    rig.click();
    assert_eq!(rig.phase(), Phase::Running);
    assert_eq!(rig.screen(), "00:03");

    rig.run_for(3_000);
    assert_eq!(rig.phase(), Phase::Finished);

    rig.run_for(29_000);
    assert_eq!(rig.phase(), Phase::Finished);
    rig.run_for(1_000);
    assert_eq!(rig.phase(), Phase::Idle);
    assert_eq!(rig.screen(), IDLE_GLYPH);

    let long_pulses = rig.buzzer.pulses().iter().filter(|p| **p == Pulse::Long).count();
    assert!(long_pulses > 1, "expected finish alert and flash pulses, got {}", long_pulses);
}

#[test]
fn pause_resume_keeps_remaining_time() {
    let mut rig = Rig::new(TimerConfig::work(), TimerConfig::rest());
    rig.console("set 1 0");
    rig.run_for(10_000);
    rig.console("pause");
    assert_eq!(rig.phase(), Phase::Paused);

    rig.run_for(5_000);
    rig.console("play");
    rig.run_for(1_000);
    assert_eq!(rig.screen(), "00:49");
}

#[test]
fn double_click_restarts_custom_interval() {
    let mut rig = Rig::new(TimerConfig::work(), TimerConfig::rest());
    rig.console("set 0 150");
    assert_eq!(rig.controller.machine().target(), (2, 30));
    rig.run_for(20_000);

    rig.click();
    assert_eq!(rig.phase(), Phase::Paused);
    rig.run_for(250);
    rig.click();
    assert_eq!(rig.phase(), Phase::Running);
    assert_eq!(rig.screen(), "02:30");
}

#[test]
fn slow_clicks_are_independent_singles() {
    let mut rig = Rig::new(TimerConfig::work(), TimerConfig::rest());
    rig.click();
    rig.run_for(550);
    rig.click();
    assert_eq!(rig.phase(), Phase::Paused);
}

#[test]
fn long_hold_switches_to_break_paused() {
    let mut rig = Rig::new(TimerConfig::work(), TimerConfig::new(0, 10));
    rig.click();
    rig.run_for(5_000);

    rig.console("down");
    rig.run_for(2_000);
    rig.console("up");

    assert_eq!(rig.controller.machine().mode(), Mode::Break);
    assert_eq!(rig.phase(), Phase::Paused);
    assert_eq!(rig.screen(), "Break");

    rig.run_for(100);
    rig.click();
    assert_eq!(rig.phase(), Phase::Running);
    rig.run_for(10_000);
    assert_eq!(rig.phase(), Phase::Finished);
}

#[test]
fn display_shows_flashing_notification() {
    let notifier = FinishedNotifier::with_timing(100, 1_000);
    let mut rig = Rig::with_notifier(TimerConfig::new(0, 1), notifier);
    rig.click();
    rig.run_for(1_000);
    assert_eq!(rig.phase(), Phase::Finished);

    rig.run_for(1_000);
    assert_eq!(rig.phase(), Phase::Idle);

    let lines = &rig.controller.display().lines;
    let flashes = lines.iter().filter(|l| l.as_str() == "Finish").count();
    let blanks = lines.iter().filter(|l| l.is_empty()).count();
    assert!(flashes >= 2 && blanks >= 2, "display history: {:?}", lines);
    assert_eq!(lines.last().map(String::as_str), Some(IDLE_GLYPH));
}

#[test]
fn remote_commands_ignored_in_wrong_phase() {
    let mut rig = Rig::new(TimerConfig::work(), TimerConfig::rest());
    rig.console("pause");
    rig.console("play");
    assert_eq!(rig.phase(), Phase::Idle);
    assert!(rig.buzzer.pulses().is_empty());
}
