//! Timer core module
//!
//! Gesture classification, the work/break state machine and the finished
//! notification, all driven by explicit millisecond timestamps.

pub mod gesture;
pub mod machine;
pub mod notifier;
pub mod stopwatch;

// Re-export main types
pub use gesture::{Gesture, GestureClassifier};
pub use machine::{normalize_duration, Mode, Phase, TimerConfig, TimerMachine, IDLE_GLYPH};
pub use notifier::{FinishedNotifier, NotifierAction};
pub use stopwatch::Stopwatch;
