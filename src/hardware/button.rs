//! Button edge source
//!
//! Accepts raw edges from the outside world (HTTP, console) and releases
//! only clean, alternating ones to the gesture classifier. Edges arriving
//! inside the debounce interval are not thrown away: the newest level is
//! held and reported from `poll` once the interval has passed.

use serde::{Deserialize, Serialize};
use tracing::trace;

pub const DEFAULT_DEBOUNCE_MS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Falling edge, button pushed down
    Press,
    /// Rising edge, button let go
    Release,
}

impl Edge {
    fn from_pressed(pressed: bool) -> Self {
        if pressed { Edge::Press } else { Edge::Release }
    }
}

#[derive(Debug, Clone)]
pub struct ButtonInput {
    pressed: bool,
    last_edge_ms: Option<u64>,
    /// Level seen inside the debounce interval, still waiting to settle
    pending: Option<bool>,
    debounce_ms: u64,
}

impl ButtonInput {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            pressed: false,
            last_edge_ms: None,
            pending: None,
            debounce_ms,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn settling(&self, now_ms: u64) -> bool {
        self.last_edge_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.debounce_ms)
    }

    fn commit(&mut self, pressed: bool, now_ms: u64) -> Edge {
        self.pressed = pressed;
        self.last_edge_ms = Some(now_ms);
        self.pending = None;
        Edge::from_pressed(pressed)
    }

    /// Returns the edge if it takes effect now. Repeats of the current level
    /// are dropped; edges inside the debounce interval are held for `poll`.
    pub fn accept(&mut self, edge: Edge, now_ms: u64) -> Option<Edge> {
        let wants_pressed = edge == Edge::Press;

        if self.settling(now_ms) {
            // a bounce back to the settled level cancels the held change
            self.pending = (wants_pressed != self.pressed).then_some(wants_pressed);
            trace!("Holding {:?} edge inside debounce interval", edge);
            return None;
        }

        self.pending = None;
        if wants_pressed == self.pressed {
            trace!("Dropping repeated {:?} edge", edge);
            return None;
        }
        Some(self.commit(wants_pressed, now_ms))
    }

    /// Report a held level change once the debounce interval has passed
    pub fn poll(&mut self, now_ms: u64) -> Option<Edge> {
        let wants_pressed = self.pending?;
        if self.settling(now_ms) {
            return None;
        }
        Some(self.commit(wants_pressed, now_ms))
    }
}

impl Default for ButtonInput {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_edges_pass() {
        let mut b = ButtonInput::new(5);
        assert_eq!(b.accept(Edge::Press, 0), Some(Edge::Press));
        assert!(b.is_pressed());
        assert_eq!(b.accept(Edge::Release, 100), Some(Edge::Release));
        assert!(!b.is_pressed());
        assert_eq!(b.poll(200), None);
    }

    #[test]
    fn repeated_level_is_dropped() {
        let mut b = ButtonInput::new(5);
        b.accept(Edge::Press, 0);
        assert_eq!(b.accept(Edge::Press, 50), None);
        assert_eq!(b.accept(Edge::Release, 60), Some(Edge::Release));
        assert_eq!(b.accept(Edge::Release, 70), None);
    }

    #[test]
    fn bounce_settles_released() {
        let mut b = ButtonInput::new(5);
        b.accept(Edge::Press, 100);
        assert_eq!(b.accept(Edge::Release, 103), None);
        assert!(b.is_pressed());
        assert_eq!(b.poll(104), None);
        assert_eq!(b.poll(105), Some(Edge::Release));
        assert!(!b.is_pressed());
        assert_eq!(b.poll(200), None);
    }

    #[test]
    fn release_at_same_instant_is_delivered_later() {
        let mut b = ButtonInput::new(5);
        assert_eq!(b.accept(Edge::Press, 0), Some(Edge::Press));
        assert_eq!(b.accept(Edge::Release, 0), None);
        assert_eq!(b.poll(10), Some(Edge::Release));
        assert!(!b.is_pressed());
        assert_eq!(b.accept(Edge::Press, 20), Some(Edge::Press));
    }

    #[test]
    fn bounce_back_to_settled_level_is_ignored() {
        let mut b = ButtonInput::new(5);
        b.accept(Edge::Press, 0);
        b.accept(Edge::Release, 1);
        b.accept(Edge::Press, 2);
        assert_eq!(b.poll(10), None);
        assert!(b.is_pressed());
    }
}
