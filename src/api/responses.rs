//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{remote::lenient_number, state::TimerSnapshot};

/// Body of `POST /set`. Missing, negative or non-numeric fields count as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetRequest {
    #[serde(default, deserialize_with = "lenient_field")]
    pub minutes: u32,
    #[serde(default, deserialize_with = "lenient_field")]
    pub seconds: u32,
}

/// Read any JSON value as a count: numbers truncate and saturate, strings
/// take their leading digits, everything else is zero
fn lenient_field<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(whole), _) => whole.min(u32::MAX as u64) as u32,
            (None, Some(real)) if real > 0.0 => real as u32,
            _ => 0,
        },
        Value::String(text) => lenient_number(text.trim()),
        _ => 0,
    })
}

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Timer as last published, before the queued input is applied
    pub timer: TimerSnapshot,
}

impl ApiResponse {
    pub fn new(status: String, message: String, timer: TimerSnapshot) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// Create a response for an input handed to the control loop
    pub fn accepted(message: String, timer: TimerSnapshot) -> Self {
        Self::new("accepted".to_string(), message, timer)
    }
}

/// Status response with timer and server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerSnapshot,
    pub remaining_seconds: Option<u64>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> (u32, u32) {
        let request: SetRequest = serde_json::from_str(body).unwrap();
        (request.minutes, request.seconds)
    }

    #[test]
    fn set_request_is_lenient() {
        assert_eq!(parse(r#"{"minutes": 3, "seconds": 7}"#), (3, 7));
        assert_eq!(parse(r#"{"minutes": "abc", "seconds": 5}"#), (0, 5));
        assert_eq!(parse(r#"{"minutes": -3, "seconds": 10}"#), (0, 10));
        assert_eq!(parse(r#"{"minutes": "12x", "seconds": 2.9}"#), (12, 2));
        assert_eq!(parse(r#"{"minutes": null, "seconds": [1]}"#), (0, 0));
        assert_eq!(parse(r#"{"minutes": 99999999999}"#), (u32::MAX, 0));
    }
}
