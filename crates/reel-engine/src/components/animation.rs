//! Frame-timed animation for sprite sequences.
//!
//! Every animated object owns one `FrameAnimator`: the frame index moves
//! forward by one every `delay` ticks, either wrapping (looping sequences)
//! or sticking on the last frame (one-shot sequences).

use crate::api::types::ImageHandle;

/// Definition of a single animation sequence.
#[derive(Debug, Clone)]
pub struct AnimationDef {
    /// Frame images in playback order.
    pub frames: Vec<ImageHandle>,
    /// Ticks per frame.
    pub delay: u32,
    /// Whether to wrap when reaching the end.
    pub looping: bool,
}

impl AnimationDef {
    pub fn looping(frames: Vec<ImageHandle>, delay: u32) -> Self {
        Self {
            frames,
            delay,
            looping: true,
        }
    }

    pub fn once(frames: Vec<ImageHandle>, delay: u32) -> Self {
        Self {
            frames,
            delay,
            looping: false,
        }
    }

    /// Get the number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Ticks until a one-shot sequence settles on its last frame.
    pub fn total_ticks(&self) -> u32 {
        self.delay * self.frames.len().saturating_sub(1) as u32
    }
}

/// Playback state for one `AnimationDef`.
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    def: AnimationDef,
    /// Current frame index.
    frame_index: usize,
    /// Ticks accumulated on the current frame.
    tick_counter: u32,
    /// Set once a one-shot sequence reaches its last frame.
    complete: bool,
}

impl FrameAnimator {
    pub fn new(def: AnimationDef) -> Self {
        Self {
            def,
            frame_index: 0,
            tick_counter: 0,
            complete: false,
        }
    }

    /// Advance by one tick. Returns true if the frame changed.
    pub fn advance(&mut self) -> bool {
        let len = self.def.frames.len();
        if self.complete || len == 0 {
            return false;
        }

        self.tick_counter += 1;
        if self.tick_counter < self.def.delay {
            return false;
        }
        self.tick_counter = 0;
        self.frame_index += 1;

        if self.frame_index >= len {
            if self.def.looping {
                self.frame_index %= len;
            } else {
                self.frame_index = len - 1;
                self.complete = true;
            }
        }
        true
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Image for the current frame, if the sequence has any frames.
    pub fn current_frame(&self) -> Option<ImageHandle> {
        self.def.frames.get(self.frame_index).copied()
    }

    /// Whether a one-shot sequence has finished. Looping sequences never finish.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn def(&self) -> &AnimationDef {
        &self.def
    }

    /// Stop and rewind to frame 0.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.tick_counter = 0;
        self.complete = false;
    }
}
