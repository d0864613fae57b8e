//! Console reader task: remote commands and button edges from stdin

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use crate::{
    remote::{parse_line, ConsoleLine},
    state::AppState,
};

/// Read console lines until stdin closes
pub async fn console_task(state: Arc<AppState>) {
    info!("Ready: console accepts set <min> [<sec>], pause, play, down, up");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                handle_console_line(&state, &line);
            }
            Ok(None) => {
                info!("Console closed");
                break;
            }
            Err(e) => {
                error!("Failed to read console: {}", e);
                break;
            }
        }
    }
}

/// Forward one console line to the control loop. Returns whether it was understood.
pub fn handle_console_line(state: &AppState, line: &str) -> bool {
    let result = match parse_line(line) {
        Some(ConsoleLine::Command(command)) => state.send_command(command),
        Some(ConsoleLine::Button(edge)) => state.send_edge(edge),
        None => {
            if !line.trim().is_empty() {
                warn!("Unknown console command: {}", line.trim());
            }
            return false;
        }
    };

    if let Err(e) = result {
        error!("Failed to forward console command: {}", e);
    }
    true
}
