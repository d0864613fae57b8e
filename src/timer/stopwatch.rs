//! Pausable elapsed-time accumulator

/// Tracks elapsed milliseconds across run/pause segments.
/// Time spent paused is never counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stopwatch {
    accumulated_ms: u64,
    segment_start_ms: u64,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero and start running from `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.accumulated_ms = 0;
        self.segment_start_ms = now_ms;
        self.running = true;
    }

    pub fn pause(&mut self, now_ms: u64) {
        if !self.running {
            return;
        }
        self.accumulated_ms += now_ms.saturating_sub(self.segment_start_ms);
        self.running = false;
    }

    pub fn resume(&mut self, now_ms: u64) {
        if self.running {
            return;
        }
        self.segment_start_ms = now_ms;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        if self.running {
            self.accumulated_ms + now_ms.saturating_sub(self.segment_start_ms)
        } else {
            self.accumulated_ms
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        assert_eq!(sw.elapsed_ms(1_500), 500);

        sw.pause(2_000);
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_ms(9_000), 1_000);

        sw.resume(9_000);
        assert_eq!(sw.elapsed_ms(9_250), 1_250);
    }

    #[test]
    fn test_start_resets() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.pause(4_000);
        sw.start(10_000);
        assert_eq!(sw.elapsed_ms(10_000), 0);
        assert_eq!(sw.elapsed_ms(10_300), 300);
    }

    #[test]
    fn test_double_pause_and_resume_are_ignored() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.pause(100);
        sw.pause(500);
        assert_eq!(sw.elapsed_ms(800), 100);

        sw.resume(1_000);
        sw.resume(1_400);
        assert_eq!(sw.elapsed_ms(1_500), 600);
    }

    #[test]
    fn test_clock_going_backwards_saturates() {
        let mut sw = Stopwatch::new();
        sw.start(5_000);
        assert_eq!(sw.elapsed_ms(4_000), 0);
    }
}
