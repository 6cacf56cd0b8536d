use glam::Vec2;

use crate::api::types::ImageHandle;
use crate::components::animation::{AnimationDef, FrameAnimator};
use crate::components::object::SceneObject;
use crate::extensions::{Easing, Ramp};

/// A one-shot frame sequence that fades itself in once shown.
///
/// Starts hidden on frame 0. After `show()` it fades in over `fade_ticks`
/// and plays its frames once, holding the last one.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    pos: Vec2,
    size: Vec2,
    animation: FrameAnimator,
    fade_in: Ramp,
    alpha: u8,
    visible: bool,
}

impl AnimatedSprite {
    pub fn new(
        pos: Vec2,
        size: Vec2,
        frames: Vec<ImageHandle>,
        frame_delay: u32,
        fade_ticks: u32,
    ) -> Self {
        Self {
            pos,
            size,
            animation: FrameAnimator::new(AnimationDef::once(frames, frame_delay)),
            fade_in: Ramp::new(fade_ticks, Easing::Smoothstep),
            alpha: u8::MAX,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn frame_index(&self) -> usize {
        self.animation.frame_index()
    }

    pub fn is_complete(&self) -> bool {
        self.animation.is_complete()
    }
}

impl SceneObject for AnimatedSprite {
    fn advance(&mut self) {
        if !self.visible {
            return;
        }
        if !self.fade_in.is_complete() {
            self.fade_in.step();
            self.alpha = (255.0 * self.fade_in.eased()).round() as u8;
        }
        self.animation.advance();
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn current_image(&self) -> Option<ImageHandle> {
        self.animation.current_frame()
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }
}
