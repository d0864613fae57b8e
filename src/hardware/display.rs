//! Presentation collaborator: one centered line of text

use std::io::Write;
use tracing::{debug, warn};

/// Character width of the rendered line
pub const LINE_WIDTH: usize = 16;

pub trait Display: Send {
    fn show(&mut self, text: &str);
    fn clear(&mut self);
}

/// Renders the line to stdout, redrawing it in place
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }

    fn write_line(&self, line: &str) {
        let mut stdout = std::io::stdout();
        if let Err(e) = write!(stdout, "\r{}", line).and_then(|_| stdout.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl Display for TerminalDisplay {
    fn show(&mut self, text: &str) {
        debug!("Display: {:?}", text);
        self.write_line(&center(text, LINE_WIDTH));
    }

    fn clear(&mut self) {
        self.write_line(&" ".repeat(LINE_WIDTH));
    }
}

/// Pad `text` on both sides to `width` characters. Longer text is kept whole.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
