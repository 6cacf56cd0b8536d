// extensions/ramp.rs
//
// Tick-counted progress ramps.
// A ramp moves a fraction from 0 to 1 in fixed per-tick steps of
// 1/duration and never leaves [0, 1]. Ticks are counted as integers so
// the last step lands on exactly 1.0. Walks, jumps and sprite fade-ins
// are all expressed with one of these.
//
// Usage:
//   let mut walk = Ramp::new(300, Easing::Smoothstep);
//   walk.step();
//   let x = lerp(start, target, walk.eased());

use super::easing::Easing;

/// A one-shot progress ramp driven by ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    /// Duration in ticks.
    duration: u32,
    /// Ticks stepped so far, saturating at `duration`.
    elapsed: u32,
    /// Easing applied by `eased()`.
    easing: Easing,
}

impl Ramp {
    pub fn new(duration: u32, easing: Easing) -> Self {
        Self {
            duration,
            elapsed: 0,
            easing,
        }
    }

    /// Advance by one tick. Returns the new raw progress.
    pub fn step(&mut self) -> f32 {
        self.elapsed = (self.elapsed + 1).min(self.duration);
        self.progress()
    }

    /// Raw progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            1.0
        } else {
            self.elapsed as f32 / self.duration as f32
        }
    }

    /// Progress after easing.
    pub fn eased(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Whether the ramp reached 1.0.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Rewind to zero.
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}
