//! Device collaborators module
//!
//! Buzzer, display and button edge source used by the control loop.

pub mod button;
pub mod buzzer;
pub mod display;

// Re-export main types
pub use button::{ButtonInput, Edge};
pub use buzzer::{Buzzer, Pulse, RecordingBuzzer, TerminalBuzzer};
pub use display::{Display, TerminalDisplay};
