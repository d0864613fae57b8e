//! Remote control module
//!
//! Line protocol spoken on the console: timer commands plus simulated
//! button edges.

pub mod command;

// Re-export main types
pub use command::{lenient_number, parse_line, ConsoleLine, RemoteCommand};
