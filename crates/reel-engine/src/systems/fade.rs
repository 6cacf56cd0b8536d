//! Full-screen fade overlay: a fade-in from black at the start of a scene
//! and a fade-out to black at its end, sharing one alpha value.

use crate::extensions::ease_in_out;

/// Default ramp length in ticks for both directions.
pub const DEFAULT_FADE_TICKS: u32 = 60;

#[derive(Debug, Clone)]
pub struct FadeTransition {
    alpha: u8,
    entry_ticks: u32,
    exit_ticks: u32,
    entry_complete: bool,
    exit_started: bool,
}

impl FadeTransition {
    /// Starts fully opaque, ready to fade in.
    pub fn new(entry_ticks: u32, exit_ticks: u32) -> Self {
        Self {
            alpha: u8::MAX,
            entry_ticks,
            exit_ticks,
            entry_complete: false,
            exit_started: false,
        }
    }

    /// Entry ramp for absolute `frame`. No-op once complete.
    pub fn update_entry(&mut self, frame: u32) {
        if self.entry_complete {
            return;
        }
        if frame >= self.entry_ticks {
            self.finish_entry();
            return;
        }
        let progress = frame as f32 / self.entry_ticks as f32;
        self.alpha = to_alpha(1.0 - ease_in_out(progress));
        if frame + 1 >= self.entry_ticks {
            self.finish_entry();
        }
    }

    fn finish_entry(&mut self) {
        self.entry_complete = true;
        if !self.exit_started {
            self.alpha = 0;
        }
    }

    /// Arm the exit ramp. Until this is called `update_exit` does nothing.
    pub fn begin_exit(&mut self) {
        if !self.exit_started {
            self.exit_started = true;
            self.entry_complete = true;
        }
    }

    /// Exit ramp for absolute `frame` of a scene lasting `total_frames`.
    pub fn update_exit(&mut self, frame: u32, total_frames: u32) {
        if !self.exit_started {
            return;
        }
        let window_start = total_frames.saturating_sub(self.exit_ticks) as f32;
        let progress = if self.exit_ticks == 0 {
            1.0
        } else {
            ((frame as f32 - window_start) / self.exit_ticks as f32).clamp(0.0, 1.0)
        };
        self.alpha = to_alpha(ease_in_out(progress));
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Overlay alpha to composite, or None when fully transparent.
    pub fn overlay_alpha(&self) -> Option<u8> {
        (self.alpha > 0).then_some(self.alpha)
    }

    pub fn is_entry_complete(&self) -> bool {
        self.entry_complete
    }

    pub fn is_exit_started(&self) -> bool {
        self.exit_started
    }
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_TICKS, DEFAULT_FADE_TICKS)
    }
}

/// Map [0, 1] to [0, 255], rounding to nearest.
fn to_alpha(level: f32) -> u8 {
    (255.0 * level.clamp(0.0, 1.0)).round() as u8
}
