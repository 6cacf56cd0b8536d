//! Collaborator traits for native hosts.
//!
//! In the browser the host reads the draw list and sound ids straight out
//! of wasm memory. Native hosts implement these instead and hand them to
//! the `Driver`.

use super::instance::RenderBuffer;
use crate::api::types::SoundCue;

/// Draws one tick's draw list.
pub trait Renderer {
    /// Composite the draw list: instances back-to-front, then the overlay.
    fn draw(&mut self, buffer: &RenderBuffer);

    /// Show the finished frame.
    fn present(&mut self);
}

/// Plays sound cues. Fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Timing information for one drawn frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Instances drawn.
    pub instances: u32,
    /// Whether the fade overlay was composited.
    pub overlay: bool,
}

impl DrawStats {
    pub fn of(buffer: &RenderBuffer) -> Self {
        Self {
            instances: buffer.instance_count(),
            overlay: buffer.overlay_alpha.is_some(),
        }
    }
}

/// Renderer that draws nothing. For headless runs and tests.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u32,
    pub last: DrawStats,
}

impl Renderer for NullRenderer {
    fn draw(&mut self, buffer: &RenderBuffer) {
        self.last = DrawStats::of(buffer);
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::instance::RenderInstance;

    #[test]
    fn null_renderer_counts_frames() {
        let mut renderer = NullRenderer::default();
        let mut buffer = RenderBuffer::new();
        buffer.push(RenderInstance::default());
        buffer.set_overlay(Some(12));

        renderer.draw(&buffer);
        renderer.present();

        assert_eq!(renderer.frames, 1);
        assert_eq!(
            renderer.last,
            DrawStats {
                instances: 1,
                overlay: true,
            }
        );
    }
}
