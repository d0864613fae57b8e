//! Timer control loop
//!
//! One task owns the timer machine, gesture classifier, button input and
//! display. Each poll drains queued inputs, checks for long presses,
//! advances the timer and redraws the display when its text changed.

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::mpsc::{self, error::TryRecvError},
    time::MissedTickBehavior,
};
use tracing::info;

use crate::{
    clock::Clock,
    hardware::{Buzzer, ButtonInput, Display, Edge},
    state::{AppState, ControlInput, TimerSnapshot},
    timer::{GestureClassifier, TimerMachine},
};

pub struct Controller<B: Buzzer, D: Display> {
    machine: TimerMachine<B>,
    classifier: GestureClassifier,
    button: ButtonInput,
    display: D,
    last_screen: Option<String>,
}

impl<B: Buzzer, D: Display> Controller<B, D> {
    pub fn new(machine: TimerMachine<B>, button: ButtonInput, display: D) -> Self {
        Self {
            machine,
            classifier: GestureClassifier::new(),
            button,
            display,
            last_screen: None,
        }
    }

    pub fn machine(&self) -> &TimerMachine<B> {
        &self.machine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn handle_input(&mut self, input: ControlInput, now_ms: u64) {
        match input {
            ControlInput::Command(command) => {
                info!("Remote command: {}", command.name());
                self.machine.handle_command(command, now_ms);
            }
            ControlInput::Button(edge) => self.handle_edge(edge, now_ms),
        }
    }

    fn handle_edge(&mut self, edge: Edge, now_ms: u64) {
        if let Some(edge) = self.button.accept(edge, now_ms) {
            self.deliver_edge(edge, now_ms);
        }
    }

    fn deliver_edge(&mut self, edge: Edge, now_ms: u64) {
        let gesture = match edge {
            Edge::Press => Some(self.classifier.on_press(now_ms)),
            Edge::Release => self.classifier.on_release(now_ms),
        };
        if let Some(gesture) = gesture {
            self.machine.handle_gesture(gesture, now_ms);
        }
    }

    /// One pass of the loop after inputs were handled
    pub fn poll(&mut self, now_ms: u64) -> TimerSnapshot {
        if let Some(edge) = self.button.poll(now_ms) {
            self.deliver_edge(edge, now_ms);
        }
        if let Some(gesture) = self.classifier.on_tick(now_ms) {
            self.machine.handle_gesture(gesture, now_ms);
        }
        self.machine.tick(now_ms);
        self.render(now_ms);
        self.machine.snapshot(now_ms)
    }

    fn render(&mut self, now_ms: u64) {
        let screen = self.machine.screen(now_ms);
        if self.last_screen.as_deref() == Some(screen.as_str()) {
            return;
        }
        if screen.is_empty() {
            self.display.clear();
        } else {
            self.display.show(&screen);
        }
        self.last_screen = Some(screen);
    }

    pub fn shutdown(&mut self) {
        self.display.clear();
        self.last_screen = None;
    }
}

/// Drive the controller until the input queue closes
pub async fn control_loop_task<B, D, C>(
    mut controller: Controller<B, D>,
    clock: C,
    mut inputs: mpsc::UnboundedReceiver<ControlInput>,
    state: Arc<AppState>,
    poll_interval: Duration,
) where
    B: Buzzer,
    D: Display,
    C: Clock,
{
    info!("Starting control loop (poll every {:?})", poll_interval);

    let mut interval = tokio::time::interval(poll_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        let now_ms = clock.now_ms();

        loop {
            match inputs.try_recv() {
                Ok(input) => controller.handle_input(input, now_ms),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    info!("Input queue closed, stopping control loop");
                    controller.shutdown();
                    return;
                }
            }
        }

        state.publish_snapshot(controller.poll(now_ms));
    }
}
