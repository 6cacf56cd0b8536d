use glam::Vec2;

use crate::api::types::ImageHandle;
use crate::components::animation::{AnimationDef, FrameAnimator};
use crate::components::object::SceneObject;

/// Extra drift per parallax layer, as a fraction of base speed.
pub const LAYER_SPEED_FACTOR: f32 = 0.3;

/// A drifting, looping cloud on a parallax band.
///
/// Higher layers drift faster. When the cloud passes the right edge of the
/// world it reappears fully off-screen on the left.
#[derive(Debug, Clone)]
pub struct ParallaxCloud {
    pos: Vec2,
    size: Vec2,
    /// Base drift per tick.
    speed: f32,
    /// Parallax layer, 1 or more.
    layer: u32,
    world_width: f32,
    animation: FrameAnimator,
}

impl ParallaxCloud {
    pub fn new(
        pos: Vec2,
        size: Vec2,
        speed: f32,
        layer: u32,
        world_width: f32,
        frames: Vec<ImageHandle>,
        frame_delay: u32,
    ) -> Self {
        Self {
            pos,
            size,
            speed,
            layer: layer.max(1),
            world_width,
            animation: FrameAnimator::new(AnimationDef::looping(frames, frame_delay)),
        }
    }

    /// Effective drift per tick for this layer.
    pub fn drift(&self) -> f32 {
        self.speed * (1.0 + self.layer as f32 * LAYER_SPEED_FACTOR)
    }

    pub fn layer(&self) -> u32 {
        self.layer
    }

    pub fn frame_index(&self) -> usize {
        self.animation.frame_index()
    }
}

impl SceneObject for ParallaxCloud {
    fn advance(&mut self) {
        self.pos.x += self.drift();
        if self.pos.x > self.world_width {
            self.pos.x = -self.size.x;
        }
        self.animation.advance();
    }

    /// Clouds are on screen for the whole scene.
    fn is_visible(&self) -> bool {
        true
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
}
