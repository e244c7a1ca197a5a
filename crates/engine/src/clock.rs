//! Fixed-step accumulator
//!
//! Frames arrive at whatever rate the terminal manages; the simulation moves
//! in whole ticks of `tick_ms`. Elapsed time is clamped per frame so a
//! suspended process does not come back to a burst of catch-up ticks.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedStep {
    tick_ms: u32,
    max_frame_delta_ms: u32,
    accumulator_ms: u32,
    last_frame_ms: Option<u64>,
}

impl FixedStep {
    pub fn new(tick_ms: u32, max_frame_delta_ms: u32) -> Self {
        debug_assert!(tick_ms > 0);
        Self {
            tick_ms,
            max_frame_delta_ms,
            accumulator_ms: 0,
            last_frame_ms: None,
        }
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn max_frame_delta_ms(&self) -> u32 {
        self.max_frame_delta_ms
    }

    /// Unconsumed time carried to the next frame.
    pub fn accumulator_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Forget the previous frame and any carried time.
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
        self.last_frame_ms = None;
    }

    /// Elapsed time since the previous frame timestamp, clamped.
    ///
    /// The first frame after construction or [`FixedStep::reset`] reports 0.
    /// A timestamp earlier than the previous one also reports 0.
    pub fn frame_delta(&mut self, now_ms: u64) -> u32 {
        let last = self.last_frame_ms.replace(now_ms).unwrap_or(now_ms);
        let delta = now_ms.saturating_sub(last);
        delta.min(self.max_frame_delta_ms as u64) as u32
    }

    /// Add elapsed time, clamped to the per-frame maximum.
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        let elapsed = elapsed_ms.min(self.max_frame_delta_ms);
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed);
    }

    /// Consume one tick's worth of time if available.
    pub fn try_consume(&mut self) -> bool {
        if self.accumulator_ms >= self.tick_ms {
            self.accumulator_ms -= self.tick_ms;
            true
        } else {
            false
        }
    }

    /// Run `step` once per whole tick in the accumulator.
    ///
    /// `step` returns whether the simulation is still running; draining stops
    /// as soon as it returns false. Returns the number of steps taken.
    pub fn drain<F: FnMut() -> bool>(&mut self, mut step: F) -> u32 {
        let mut ticks = 0;
        while self.try_consume() {
            ticks += 1;
            if !step() {
                break;
            }
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_delta_is_zero() {
        let mut clock = FixedStep::new(115, 250);
        assert_eq!(clock.frame_delta(10_000), 0);
        assert_eq!(clock.frame_delta(10_016), 16);
    }

    #[test]
    fn test_frame_delta_clamped() {
        let mut clock = FixedStep::new(115, 250);
        clock.frame_delta(0);
        assert_eq!(clock.frame_delta(5_000), 250);
    }

    #[test]
    fn test_backwards_timestamp_reports_zero() {
        let mut clock = FixedStep::new(115, 250);
        clock.frame_delta(1_000);
        assert_eq!(clock.frame_delta(900), 0);
    }

    #[test]
    fn test_accumulate_clamps() {
        let mut clock = FixedStep::new(115, 250);
        clock.accumulate(10_000);
        assert_eq!(clock.accumulator_ms(), 250);
    }

    #[test]
    fn test_drain_340_runs_two_ticks() {
        let mut clock = FixedStep::new(115, 400);
        clock.accumulate(340);
        let ticks = clock.drain(|| true);
        assert_eq!(ticks, 2);
        assert_eq!(clock.accumulator_ms(), 110);
    }

    #[test]
    fn test_drain_carries_residue() {
        let mut clock = FixedStep::new(115, 250);
        clock.accumulate(110);
        assert_eq!(clock.drain(|| true), 0);
        clock.accumulate(10);
        assert_eq!(clock.drain(|| true), 1);
        assert_eq!(clock.accumulator_ms(), 5);
    }

    #[test]
    fn test_drain_stops_when_step_reports_done() {
        let mut clock = FixedStep::new(100, 1_000);
        clock.accumulate(500);
        let mut calls = 0;
        let ticks = clock.drain(|| {
            calls += 1;
            calls < 2
        });
        assert_eq!(ticks, 2);
        assert_eq!(clock.accumulator_ms(), 300);
    }

    #[test]
    fn test_accumulator_stays_below_tick_after_drain() {
        let mut clock = FixedStep::new(115, 250);
        for delta in [16, 33, 250, 7, 999, 115, 114, 1, 250, 250] {
            clock.accumulate(delta);
            clock.drain(|| true);
            assert!(clock.accumulator_ms() < 115);
        }
    }

    #[test]
    fn test_reset_clears_state() {
        let mut clock = FixedStep::new(115, 250);
        clock.frame_delta(0);
        clock.accumulate(100);
        clock.reset();
        assert_eq!(clock.accumulator_ms(), 0);
        assert_eq!(clock.frame_delta(9_999), 0);
    }
}
