//! State management module
//!
//! Shared handles between the control loop and the remote surfaces.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, ControlInput};
pub use timer_state::TimerSnapshot;
