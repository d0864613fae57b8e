//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    hardware::Edge,
    remote::RemoteCommand,
    state::{AppState, ControlInput},
    timer::normalize_duration,
};
use super::responses::{ApiResponse, HealthResponse, SetRequest, StatusResponse};

/// Queue an input and answer with the current snapshot
fn forward(state: &AppState, input: ControlInput, message: String) -> Result<Json<ApiResponse>, StatusCode> {
    match state.send_input(input) {
        Ok(()) => {
            info!("{}", message);
            Ok(Json(ApiResponse::accepted(message, state.get_snapshot())))
        }
        Err(e) => {
            error!("Failed to queue {}: {}", input.action_name(), e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Handle POST /set - Start a timer of the given length
pub async fn set_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let (minutes, seconds) = normalize_duration(request.minutes, request.seconds);
    forward(
        &state,
        ControlInput::Command(RemoteCommand::Set { minutes, seconds }),
        format!("Set timer to {}:{:02}", minutes, seconds),
    )
}

/// Handle POST /pause - Pause a running timer
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    forward(&state, ControlInput::Command(RemoteCommand::Pause), "Pause requested".to_string())
}

/// Handle POST /play - Resume a paused timer
pub async fn play_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    forward(&state, ControlInput::Command(RemoteCommand::Play), "Play requested".to_string())
}

/// Handle POST /button/press - Simulate pushing the button down
pub async fn button_press_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    forward(&state, ControlInput::Button(Edge::Press), "Button pressed".to_string())
}

/// Handle POST /button/release - Simulate letting go of the button
pub async fn button_release_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    forward(&state, ControlInput::Button(Edge::Release), "Button released".to_string())
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.get_snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        remaining_seconds: timer.remaining_seconds(),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
