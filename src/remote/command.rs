//! Remote command parsing
//!
//! `set <minutes> [<seconds>]`, `pause` and `play` control the timer
//! directly. `down` / `up` feed button edges as if the physical button had
//! been used. Numeric arguments are permissive: anything that does not start
//! with digits counts as zero.

use serde::{Deserialize, Serialize};

use crate::{hardware::Edge, timer::normalize_duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum RemoteCommand {
    Set { minutes: u32, seconds: u32 },
    Pause,
    Play,
}

impl RemoteCommand {
    /// Build a `set` command with seconds carried into minutes
    pub fn set(minutes: u32, seconds: u32) -> Self {
        let (minutes, seconds) = normalize_duration(minutes, seconds);
        RemoteCommand::Set { minutes, seconds }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RemoteCommand::Set { .. } => "set",
            RemoteCommand::Pause => "pause",
            RemoteCommand::Play => "play",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLine {
    Command(RemoteCommand),
    Button(Edge),
}

/// Parse one console line. Blank and unknown lines yield `None`.
pub fn parse_line(line: &str) -> Option<ConsoleLine> {
    let mut words = line.split_whitespace();
    let keyword = words.next()?;

    match keyword {
        "set" => {
            let minutes = words.next().map(lenient_number).unwrap_or(0);
            let seconds = words.next().map(lenient_number).unwrap_or(0);
            Some(ConsoleLine::Command(RemoteCommand::set(minutes, seconds)))
        }
        "pause" => Some(ConsoleLine::Command(RemoteCommand::Pause)),
        "play" => Some(ConsoleLine::Command(RemoteCommand::Play)),
        "down" => Some(ConsoleLine::Button(Edge::Press)),
        "up" => Some(ConsoleLine::Button(Edge::Release)),
        _ => None,
    }
}

/// Leading decimal digits of `word` as a number, saturating, else 0
pub fn lenient_number(word: &str) -> u32 {
    let digits = word.trim_start_matches('+');
    digits
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .fold(0u32, |acc, c| {
            acc.saturating_mul(10).saturating_add(c.to_digit(10).unwrap_or(0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> RemoteCommand {
        match parse_line(line) {
            Some(ConsoleLine::Command(c)) => c,
            other => panic!("expected command for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn set_carries_seconds_into_minutes() {
        assert_eq!(command("set 1 90"), RemoteCommand::Set { minutes: 2, seconds: 30 });
        assert_eq!(command("set 0 3600"), RemoteCommand::Set { minutes: 60, seconds: 0 });
    }

    #[test]
    fn set_missing_arguments_default_to_zero() {
        assert_eq!(command("set"), RemoteCommand::Set { minutes: 0, seconds: 0 });
        assert_eq!(command("set 12"), RemoteCommand::Set { minutes: 12, seconds: 0 });
    }

    #[test]
    fn set_non_numeric_arguments_are_zero() {
        assert_eq!(command("set abc 7"), RemoteCommand::Set { minutes: 0, seconds: 7 });
        assert_eq!(command("set 4x 1y"), RemoteCommand::Set { minutes: 4, seconds: 1 });
        assert_eq!(command("set -3 10"), RemoteCommand::Set { minutes: 0, seconds: 10 });
    }

    #[test]
    fn pause_and_play() {
        assert_eq!(command("pause"), RemoteCommand::Pause);
        assert_eq!(command("  play  "), RemoteCommand::Play);
    }

    #[test]
    fn button_lines() {
        assert_eq!(parse_line("down"), Some(ConsoleLine::Button(Edge::Press)));
        assert_eq!(parse_line("up"), Some(ConsoleLine::Button(Edge::Release)));
    }

    #[test]
    fn unknown_and_blank_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("reboot now"), None);
        assert_eq!(parse_line("SET 1 2"), None);
    }

    #[test]
    fn huge_numbers_saturate() {
        assert_eq!(lenient_number("99999999999999"), u32::MAX);
    }

    #[test]
    fn serializes_with_command_tag() {
        let json = serde_json::to_value(RemoteCommand::set(1, 5)).unwrap();
        assert_eq!(json["command"], "set");
        assert_eq!(json["minutes"], 1);
    }
}
