//! Game Clock Module
//!
//! Start/end timestamps for the completion timer. Elapsed time is always
//! computed as `now - start` from the captured timestamps, never
//! accumulated per tick, so the timer cannot drift over a long run.
//!
//! Every query takes `now` explicitly so tests can drive the clock with
//! synthetic instants.

use std::time::Instant;

/// Wall-clock run timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameClock {
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameClock {
    /// Create a clock that has not been started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the run start.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.ended_at = None;
    }

    /// Record the run end. The elapsed time freezes at this instant.
    pub fn stop(&mut self, now: Instant) {
        if self.started_at.is_some() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    /// Clear both timestamps (game reset).
    pub fn reset(&mut self) {
        self.started_at = None;
        self.ended_at = None;
    }

    /// Whether the clock is running (started and not yet stopped).
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    /// Seconds since start: live while running, frozen once stopped,
    /// `None` before the first start.
    pub fn elapsed_seconds(&self, now: Instant) -> Option<f32> {
        let start = self.started_at?;
        let end = self.ended_at.unwrap_or(now);
        Some(end.duration_since(start).as_secs_f32())
    }
}
