//! Fixed-timestep game clock using an accumulator pattern.
//!
//! `draw_web()` calls at ~60fps with variable delta. TickClock converts
//! this into a fixed number of discrete ticks at the owning game's rate,
//! making game logic deterministic and fully testable.
//!
//! Unlike a free-running counter, the clock must be armed with [`start`]
//! before it produces ticks, and [`stop`] guarantees that every later
//! [`advance`] yields zero ticks until the next `start`. Re-arming an
//! already armed clock restarts it from scratch, so a session restart can
//! never leave two accumulators running against the same game.
//!
//! [`start`]: TickClock::start
//! [`stop`]: TickClock::stop
//! [`advance`]: TickClock::advance

pub struct TickClock {
    /// Milliseconds per tick (e.g. 150ms for one snake step).
    interval_ms: f64,
    /// Accumulated milliseconds not yet consumed as ticks.
    accumulator: f64,
    /// Timestamp of the last update (ms), None until the first armed frame.
    last_timestamp: Option<f64>,
    /// Whether the clock is currently producing ticks.
    armed: bool,
}

impl TickClock {
    /// Create a stopped clock with the given fixed tick interval.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            accumulator: 0.0,
            last_timestamp: None,
            armed: false,
        }
    }

    /// Arm the clock. If it is already armed, the previous run is discarded
    /// first: accumulator and timestamp reset, so no stale backlog of ticks
    /// can fire after a restart.
    pub fn start(&mut self) {
        self.accumulator = 0.0;
        self.last_timestamp = None;
        self.armed = true;
    }

    /// Disarm the clock. After this returns, `advance` yields 0 until the
    /// next `start`.
    pub fn stop(&mut self) {
        self.armed = false;
        self.accumulator = 0.0;
        self.last_timestamp = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed a wall-clock timestamp (from `performance.now()` or similar).
    /// Returns the number of whole ticks to process this frame; the
    /// sub-tick remainder carries over to the next frame.
    ///
    /// The delta is clamped to 500ms so a backgrounded tab coming back
    /// cannot produce a tick avalanche.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        if !self.armed {
            return 0;
        }

        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, 500.0),
            None => 0.0, // first armed frame: establish the baseline only
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.interval_ms) as u32;
        self.accumulator -= ticks as f64 * self.interval_ms;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_clock_yields_no_ticks() {
        let mut clock = TickClock::new(100);
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(1000.0), 0);
    }

    #[test]
    fn first_armed_frame_returns_zero_ticks() {
        let mut clock = TickClock::new(100);
        clock.start();
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn one_tick_per_interval() {
        let mut clock = TickClock::new(100);
        clock.start();
        clock.advance(0.0);
        assert_eq!(clock.advance(100.0), 1);
    }

    #[test]
    fn multiple_ticks_accumulated() {
        let mut clock = TickClock::new(100);
        clock.start();
        clock.advance(0.0);
        assert_eq!(clock.advance(350.0), 3); // 350ms = 3 ticks + 50ms remainder
    }

    #[test]
    fn remainder_carried_over() {
        let mut clock = TickClock::new(100);
        clock.start();
        clock.advance(0.0);
        assert_eq!(clock.advance(150.0), 1); // 1 tick, 50ms remainder
        assert_eq!(clock.advance(200.0), 1); // 50ms carry + 50ms delta = 1 tick
    }

    #[test]
    fn clamp_large_delta() {
        let mut clock = TickClock::new(100);
        clock.start();
        clock.advance(0.0);
        // 10 second gap (tab backgrounded) → clamped to 500ms = 5 ticks
        assert_eq!(clock.advance(10_000.0), 5);
    }

    #[test]
    fn stop_halts_ticks_deterministically() {
        let mut clock = TickClock::new(100);
        clock.start();
        clock.advance(0.0);
        assert_eq!(clock.advance(100.0), 1);
        clock.stop();
        assert_eq!(clock.advance(200.0), 0);
        assert_eq!(clock.advance(10_000.0), 0);
    }

    #[test]
    fn restart_discards_backlog() {
        let mut clock = TickClock::new(100);
        clock.start();
        clock.advance(0.0);
        clock.advance(90.0); // 90ms accumulated, no tick yet
        clock.start(); // re-entrant start: implicit stop first
        assert_eq!(clock.advance(1000.0), 0); // new baseline frame
        assert_eq!(clock.advance(1100.0), 1); // ticks only from fresh delta
    }

    #[test]
    fn sub_tick_frames_accumulate() {
        let mut clock = TickClock::new(100);
        clock.start();
        clock.advance(0.0);
        assert_eq!(clock.advance(16.0), 0);
        assert_eq!(clock.advance(32.0), 0);
        assert_eq!(clock.advance(48.0), 0);
        assert_eq!(clock.advance(64.0), 0);
        assert_eq!(clock.advance(80.0), 0);
        assert_eq!(clock.advance(96.0), 0);
        assert_eq!(clock.advance(112.0), 1); // crosses 100ms, 12ms remainder
    }

    #[test]
    fn steady_60fps_at_16ms_interval() {
        let mut clock = TickClock::new(16);
        clock.start();
        clock.advance(0.0);
        let mut total = 0u32;
        for i in 1..=60 {
            total += clock.advance(i as f64 * 16.667);
        }
        // One second of frames at a 16ms interval: ~62 ticks
        assert!((60..=64).contains(&total), "expected ~62 ticks, got {total}");
    }
}
