//! Main application state management

use std::{sync::Mutex, time::Instant};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::debug;

use super::TimerSnapshot;
use crate::{hardware::Edge, remote::RemoteCommand};

/// Everything the control loop can be asked to do from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    Command(RemoteCommand),
    Button(Edge),
}

impl ControlInput {
    /// Short name used for last-action tracking
    pub fn action_name(&self) -> &'static str {
        match self {
            ControlInput::Command(command) => command.name(),
            ControlInput::Button(Edge::Press) => "button-press",
            ControlInput::Button(Edge::Release) => "button-release",
        }
    }
}

/// Handles shared by the remote surfaces. The timer itself is owned by the
/// control loop; this only holds the channels to it.
#[derive(Debug)]
pub struct AppState {
    /// Queue into the control loop
    pub input_tx: mpsc::UnboundedSender<ControlInput>,
    /// Latest snapshot published by the control loop
    pub snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<TimerSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create the state together with the receiving end of the input queue
    pub fn new(
        port: u16,
        host: String,
        initial: TimerSnapshot,
    ) -> (Self, mpsc::UnboundedReceiver<ControlInput>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);

        let state = Self {
            input_tx,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        };
        (state, input_rx)
    }

    /// Queue an input for the control loop and record it as the last action
    pub fn send_input(&self, input: ControlInput) -> Result<(), String> {
        debug!("Queueing input: {:?}", input);
        self.input_tx
            .send(input)
            .map_err(|e| format!("Control loop is not running: {}", e))?;

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(input.action_name().to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
        Ok(())
    }

    pub fn send_command(&self, command: RemoteCommand) -> Result<(), String> {
        self.send_input(ControlInput::Command(command))
    }

    pub fn send_edge(&self, edge: Edge) -> Result<(), String> {
        self.send_input(ControlInput::Button(edge))
    }

    /// Publish a new snapshot if it differs from the current one
    pub fn publish_snapshot(&self, snapshot: TimerSnapshot) {
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                if current.phase != snapshot.phase {
                    debug!("Timer phase {:?} -> {:?}", current.phase, snapshot.phase);
                }
                *current = snapshot;
                true
            }
        });
    }

    /// Get current timer snapshot
    pub fn get_snapshot(&self) -> TimerSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
