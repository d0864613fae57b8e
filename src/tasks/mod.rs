//! Background tasks module
//!
//! The control loop that owns the timer, and the console reader that feeds it.

pub mod console;
pub mod control_loop;

// Re-export main functions
pub use console::console_task;
pub use control_loop::{control_loop_task, Controller};
