use bytemuck::{Pod, Zeroable};

use crate::api::types::ImageHandle;
use crate::components::layer::RenderLayer;

/// Per-instance draw data, also the wire format read by the web host.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge in world space.
    pub x: f32,
    /// Top edge in world space.
    pub y: f32,
    /// Rendered width in world units.
    pub width: f32,
    /// Rendered height in world units.
    pub height: f32,
    /// Image handle index.
    pub image: f32,
    /// Opacity, 0.0 to 255.0.
    pub alpha: f32,
    /// `RenderLayer` as a float.
    pub layer: f32,
    /// Padding to keep the 32-byte stride.
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn image_handle(&self) -> ImageHandle {
        ImageHandle(self.image as u32)
    }

    pub fn render_layer(&self) -> Option<RenderLayer> {
        RenderLayer::from_u8(self.layer as u8)
    }
}

/// The draw list for one tick: instances back-to-front, then an optional
/// full-screen black overlay.
pub struct RenderBuffer {
    /// Instances in draw order.
    pub instances: Vec<RenderInstance>,
    /// Overlay opacity; None means no overlay this tick.
    pub overlay_alpha: Option<u8>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            overlay_alpha: None,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.overlay_alpha = None;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn set_overlay(&mut self, alpha: Option<u8>) {
        self.overlay_alpha = alpha.filter(|&a| a > 0);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances that belong to `layer`, in draw order.
    pub fn layer(&self, layer: RenderLayer) -> impl Iterator<Item = &RenderInstance> {
        self.instances
            .iter()
            .filter(move |i| i.render_layer() == Some(layer))
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 32);
        assert_eq!(RenderInstance::FLOATS, 8);
        assert_eq!(RenderInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }

    #[test]
    fn zero_overlay_is_dropped() {
        let mut buf = RenderBuffer::new();
        buf.set_overlay(Some(0));
        assert_eq!(buf.overlay_alpha, None);
        buf.set_overlay(Some(40));
        assert_eq!(buf.overlay_alpha, Some(40));
    }

    #[test]
    fn filters_by_layer() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance { layer: 0.0, ..Default::default() });
        buf.push(RenderInstance {
            layer: 2.0,
            image: 7.0,
            ..Default::default()
        });
        let objects: Vec<_> = buf.layer(RenderLayer::Objects).collect();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].image_handle(), ImageHandle(7));
    }
}
