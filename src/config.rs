//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::timer::TimerConfig;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "one-button-timer")]
#[command(about = "A one-button work/break interval timer with remote control")]
#[command(version)]
pub struct Config {
    /// Port to bind the HTTP API to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Default work interval, minutes part
    #[arg(long, default_value = "25")]
    pub work_minutes: u32,

    /// Default work interval, seconds part
    #[arg(long, default_value = "0")]
    pub work_seconds: u32,

    /// Default break interval, minutes part
    #[arg(long, default_value = "5")]
    pub break_minutes: u32,

    /// Default break interval, seconds part
    #[arg(long, default_value = "0")]
    pub break_seconds: u32,

    /// Control loop polling interval in milliseconds
    #[arg(long, default_value = "10")]
    pub poll_ms: u64,

    /// Button debounce interval in milliseconds
    #[arg(long, default_value = "5")]
    pub debounce_ms: u64,

    /// Do not read commands from stdin
    #[arg(long)]
    pub no_console: bool,

    /// Silence the terminal bell
    #[arg(long)]
    pub mute: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn work(&self) -> TimerConfig {
        TimerConfig::new(self.work_minutes, self.work_seconds)
    }

    pub fn rest(&self) -> TimerConfig {
        TimerConfig::new(self.break_minutes, self.break_seconds)
    }

    /// Polling interval, never below one millisecond
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms.max(1))
    }
}
