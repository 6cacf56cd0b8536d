use std::time::{Duration, Instant};

/// Fixed timestep accumulator for hosts that hand us variable frame deltas
/// (the browser's animation frame callback).
///
/// Scenes are time-indexed by tick, so a slow frame must not be made up
/// with extra ticks: at most one step is released per `accumulate`, and
/// leftover time beyond one step is dropped.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run (0 or 1).
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        if self.accumulator < self.dt {
            return 0;
        }
        self.accumulator -= self.dt;
        // No catch-up: a backlog of whole steps is dropped.
        if self.accumulator >= self.dt {
            self.accumulator = 0.0;
        }
        1
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Paces a native loop to a fixed tick rate by sleeping.
///
/// Best effort: if a tick overruns its slot the next deadline is simply
/// pushed back from "now", so late ticks are never followed by a burst.
pub struct FramePacer {
    period: Duration,
    deadline: Instant,
}

impl FramePacer {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current slot if `elapsed` of it has been used.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.period.saturating_sub(elapsed)
    }

    /// Block until the current slot ends, then open the next one.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
            self.deadline += self.period;
        } else {
            self.deadline = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn never_catches_up() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        // A full second stalled still yields a single tick...
        assert_eq!(ts.accumulate(1.0), 1);
        // ...and does not leave a backlog behind.
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn pacer_period_matches_rate() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.period(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn remaining_saturates() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.remaining(Duration::from_millis(5)), Duration::from_millis(15));
        assert_eq!(pacer.remaining(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn overrun_does_not_burst() {
        let mut pacer = FramePacer::new(1000);
        std::thread::sleep(Duration::from_millis(5));
        pacer.wait();
        // After an overrun the next slot starts from now, a full period away.
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_micros(500));
    }
}
