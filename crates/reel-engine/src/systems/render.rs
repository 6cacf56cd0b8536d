use glam::Vec2;

use crate::api::types::ImageHandle;
use crate::components::layer::RenderLayer;
use crate::components::object::SceneObject;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Push a full-opacity image covering `size` at the origin.
pub fn push_backdrop(buffer: &mut RenderBuffer, image: ImageHandle, size: Vec2) {
    buffer.push(RenderInstance {
        x: 0.0,
        y: 0.0,
        width: size.x,
        height: size.y,
        image: image.0 as f32,
        alpha: 255.0,
        layer: RenderLayer::Background.as_u8() as f32,
        _pad: 0.0,
    });
}

/// Push one object onto `layer`. Invisible or frameless objects are skipped.
/// Returns whether an instance was written.
pub fn push_object(
    buffer: &mut RenderBuffer,
    object: &dyn SceneObject,
    layer: RenderLayer,
) -> bool {
    if !object.is_visible() {
        return false;
    }
    let Some(image) = object.current_image() else {
        return false;
    };
    let pos = object.position();
    let size = object.size();
    buffer.push(RenderInstance {
        x: pos.x,
        y: pos.y,
        width: size.x,
        height: size.y,
        image: image.0 as f32,
        alpha: object.alpha() as f32,
        layer: layer.as_u8() as f32,
        _pad: 0.0,
    });
    true
}

/// Build the whole draw list: full-screen backdrops, then objects already
/// sorted back-to-front, then the overlay. Clears the buffer first.
pub fn build_render_buffer<'a>(
    backdrops: &[ImageHandle],
    world_size: Vec2,
    objects: impl IntoIterator<Item = (RenderLayer, &'a dyn SceneObject)>,
    overlay_alpha: Option<u8>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    for &image in backdrops {
        push_backdrop(buffer, image, world_size);
    }
    for (layer, object) in objects {
        push_object(buffer, object, layer);
    }
    buffer.set_overlay(overlay_alpha);
}
