use glam::Vec2;
use crate::api::types::ImageHandle;

/// Shared contract of every animated object in a scene.
///
/// The per-tick update loop and the draw-list builder only see this trait;
/// scripts hold the concrete types for their one-shot phase triggers.
pub trait SceneObject {
    /// Advance one tick. Implementations do nothing while invisible,
    /// unless their variant is documented otherwise.
    fn advance(&mut self);

    /// Invisible objects are neither animated nor drawn.
    fn is_visible(&self) -> bool;

    /// Top-left corner in world space.
    fn position(&self) -> Vec2;

    /// Image for the current frame, if the object has any frames.
    fn current_image(&self) -> Option<ImageHandle>;

    /// Rendered size in world units.
    fn size(&self) -> Vec2;

    /// Opacity in [0, 255].
    fn alpha(&self) -> u8 {
        u8::MAX
    }
}
