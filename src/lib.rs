//! One Button Timer - a work/break interval timer driven by a single button
//!
//! Button edges are classified into gestures (single, double, long press)
//! that drive a work/break countdown. Finished intervals flash a
//! notification for a while before the timer drops back to idle. A console
//! line protocol and an HTTP API can control the timer remotely.

pub mod api;
pub mod clock;
pub mod config;
pub mod hardware;
pub mod remote;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use timer::TimerMachine;
pub use utils::signals::shutdown_signal;
