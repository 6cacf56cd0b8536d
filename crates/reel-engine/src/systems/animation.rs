//! Per-tick object update, the phase-independent half of a scene tick.

use crate::components::object::SceneObject;

/// Advance every object once. Each object decides for itself whether it
/// is visible enough to move. Returns how many were visible afterwards.
///
/// Call this once per tick, after the script's phase triggers.
pub fn advance_objects(objects: &mut [&mut dyn SceneObject]) -> usize {
    let mut visible = 0;
    for object in objects.iter_mut() {
        object.advance();
        if object.is_visible() {
            visible += 1;
        }
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ImageHandle;
    use crate::components::cloud::ParallaxCloud;
    use crate::components::sprite::AnimatedSprite;
    use glam::Vec2;

    #[test]
    fn advances_visible_objects_only() {
        let mut cloud = ParallaxCloud::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(120.0, 72.0),
            1.0,
            1,
            1280.0,
            vec![ImageHandle(1)],
            15,
        );
        let mut sprite = AnimatedSprite::new(
            Vec2::ZERO,
            Vec2::splat(100.0),
            vec![ImageHandle(2), ImageHandle(3)],
            1,
            30,
        );

        let visible = advance_objects(&mut [&mut cloud as &mut dyn SceneObject, &mut sprite]);
        assert_eq!(visible, 1);

        assert!((cloud.position().x - 1.3).abs() < 1e-6);
        assert_eq!(sprite.frame_index(), 0);
    }
}
