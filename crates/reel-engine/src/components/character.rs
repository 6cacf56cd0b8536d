use glam::Vec2;

use crate::api::types::{ImageHandle, SoundCue};
use crate::components::animation::{AnimationDef, FrameAnimator};
use crate::components::motion::{JumpState, Motion, MotionParams};
use crate::components::object::SceneObject;
use crate::systems::cues::CueSink;

/// Everything a `Character` needs at construction.
pub struct CharacterConfig {
    pub walk_frames: Vec<ImageHandle>,
    pub jump_frame: ImageHandle,
    /// Ticks per walk frame.
    pub frame_delay: u32,
    pub size: Vec2,
    pub motion: MotionParams,
    /// Requested once, the tick the jump starts.
    pub jump_cue: SoundCue,
    pub cues: Box<dyn CueSink>,
}

/// The walking, jumping lead. Starts hidden and idle.
pub struct Character {
    walk: FrameAnimator,
    jump_frame: ImageHandle,
    size: Vec2,
    motion: Motion,
    jump_cue: SoundCue,
    cues: Box<dyn CueSink>,
    visible: bool,
}

impl Character {
    pub fn new(config: CharacterConfig) -> Self {
        Self {
            walk: FrameAnimator::new(AnimationDef::looping(config.walk_frames, config.frame_delay)),
            jump_frame: config.jump_frame,
            size: config.size,
            motion: Motion::new(config.motion),
            jump_cue: config.jump_cue,
            cues: config.cues,
            visible: false,
        }
    }

    /// Show the character and start the walk.
    pub fn enter(&mut self) {
        self.visible = true;
        self.motion.start_walking();
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn is_jumping(&self) -> bool {
        self.motion.jump_state() == JumpState::InProgress
    }

    pub fn walk_frame_index(&self) -> usize {
        self.walk.frame_index()
    }
}

impl SceneObject for Character {
    fn advance(&mut self) {
        if !self.visible {
            return;
        }
        if self.motion.is_walking() {
            self.walk.advance();
        }
        if self.motion.advance().jump_started {
            log::debug!("jump started at x={:.1}", self.motion.position().x);
            self.cues.request(self.jump_cue);
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn position(&self) -> Vec2 {
        self.motion.position()
    }

    fn current_image(&self) -> Option<ImageHandle> {
        if self.is_jumping() {
            Some(self.jump_frame)
        } else {
            self.walk.current_frame()
        }
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}
