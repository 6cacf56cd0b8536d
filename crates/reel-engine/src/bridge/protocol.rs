/// What the page reads from the wasm module each frame.
/// Must stay in sync with the page's `protocol.ts`.
///
/// The page reads two independent views per frame:
/// ```text
/// instances: instance_count × RenderInstance::FLOATS f32, at instances_ptr
/// sounds:    sound_events_len × u8 cue ids, at sound_events_ptr
/// ```
/// plus the overlay alpha as a scalar getter. Capacities are fixed at init.

use crate::api::game::StageConfig;

/// Overlay alpha reported when no overlay is drawn.
pub const NO_OVERLAY: f32 = -1.0;

/// Per-frame capacities handed to the page once at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_sounds: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_sounds: usize) -> Self {
        Self {
            max_instances,
            max_sounds,
        }
    }

    pub fn from_config(config: &StageConfig) -> Self {
        Self::new(config.max_instances, config.max_sounds)
    }

    /// Cue ids for one tick, truncated to `max_sounds`.
    pub fn pack_sounds(&self, ids: impl IntoIterator<Item = u32>, out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            ids.into_iter()
                .filter_map(|id| u8::try_from(id).ok())
                .take(self.max_sounds),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stage_capacities() {
        let layout = ProtocolLayout::from_config(&StageConfig::default());
        assert_eq!(layout, ProtocolLayout::new(64, 8));
    }

    #[test]
    fn sounds_are_truncated_to_capacity() {
        let layout = ProtocolLayout::new(4, 2);
        let mut out = vec![9];
        layout.pack_sounds([3, 1, 4], &mut out);
        assert_eq!(out, [3, 1]);
    }

    #[test]
    fn ids_past_a_byte_are_dropped() {
        let layout = ProtocolLayout::new(4, 8);
        let mut out = Vec::new();
        layout.pack_sounds([300, 7], &mut out);
        assert_eq!(out, [7]);
    }
}
