//! One Button Timer - a work/break interval timer driven by a single button
//!
//! This is the main entry point for the one-button-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use one_button_timer::{
    api::create_router,
    clock::SystemClock,
    config::Config,
    hardware::{ButtonInput, Display, TerminalBuzzer, TerminalDisplay},
    state::{AppState, TimerSnapshot},
    tasks::{console_task, control_loop_task, Controller},
    timer::TimerMachine,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they do not collide with the display line
    tracing_subscriber::fmt()
        .with_env_filter(format!("one_button_timer={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let work = config.work();
    let rest = config.rest();
    info!("Starting one-button-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, work={}:{:02}, break={}:{:02}, poll={}ms",
        config.host,
        config.port,
        work.default_minutes,
        work.default_seconds,
        rest.default_minutes,
        rest.default_seconds,
        config.poll_ms
    );

    let (state, inputs) = AppState::new(config.port, config.host.clone(), TimerSnapshot::boot(work));
    let state = Arc::new(state);

    // The control loop is the only owner of the timer
    let machine = TimerMachine::new(work, rest, TerminalBuzzer::new(config.mute));
    let controller = Controller::new(machine, ButtonInput::new(config.debounce_ms), TerminalDisplay::new());
    tokio::spawn(control_loop_task(
        controller,
        SystemClock::new(),
        inputs,
        Arc::clone(&state),
        config.poll_interval(),
    ));

    if !config.no_console {
        tokio::spawn(console_task(Arc::clone(&state)));
    }

    let app = create_router(Arc::clone(&state));
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /set            - Start a timer ({{\"minutes\": m, \"seconds\": s}})");
    info!("  POST /pause          - Pause the running timer");
    info!("  POST /play           - Resume the paused timer");
    info!("  POST /button/press   - Push the button down");
    info!("  POST /button/release - Let the button go");
    info!("  GET  /status         - Current timer status");
    info!("  GET  /health         - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    TerminalDisplay::new().clear();
    println!();
    info!("Shutdown complete");
    Ok(())
}
