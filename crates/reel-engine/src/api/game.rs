use thiserror::Error;

use crate::api::types::{SoundCue, TickOutcome};
use crate::assets::loader::AssetLoader;
use crate::core::timeline::TimelineError;
use crate::renderer::instance::RenderBuffer;

/// A script that cannot be built. Asset problems never end up here; they
/// are recovered by the loader.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("invalid timeline: {0}")]
    Timeline(#[from] TimelineError),
    #[error("invalid scene config: {0}")]
    Config(String),
}

/// Configuration for the stage, provided by the script.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    /// Logical ticks per second (default: 60).
    pub tick_rate: u32,
    /// World width in pixels.
    pub world_width: f32,
    /// World height in pixels.
    pub world_height: f32,
    /// Draw list capacity (default: 64).
    pub max_instances: usize,
    /// Maximum number of sound cues per tick (default: 8).
    pub max_sounds: usize,
}

impl StageConfig {
    /// Fixed delta time of one tick in seconds.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            world_width: 1280.0,
            world_height: 720.0,
            max_instances: 64,
            max_sounds: 8,
        }
    }
}

/// The contract every scripted scene fulfils.
pub trait Script {
    /// Build the scene, loading every asset it needs up front.
    fn load(assets: &mut AssetLoader) -> Result<Self, SetupError>
    where
        Self: Sized;

    /// Return stage configuration. Called once after `load`.
    fn config(&self) -> StageConfig {
        StageConfig::default()
    }

    /// Advance the scene by exactly one tick.
    fn update(&mut self, ctx: &mut StageContext) -> TickOutcome;

    /// Write this tick's draw list.
    fn render(&self, buffer: &mut RenderBuffer);
}

/// Per-tick output channel from a script to its driver.
pub struct StageContext {
    pub sounds: Vec<SoundCue>,
}

impl StageContext {
    pub fn new() -> Self {
        Self {
            sounds: Vec::with_capacity(8),
        }
    }

    /// Emit a sound cue to be played by the host.
    pub fn emit_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    /// Clear per-tick transient data.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
    }
}

impl Default for StageContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stage_is_720p_at_60() {
        let config = StageConfig::default();
        assert_eq!(config.world_width, 1280.0);
        assert_eq!(config.world_height, 720.0);
        assert!((config.fixed_dt() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn timeline_errors_convert() {
        let err: SetupError = TimelineError::LateStart(3).into();
        assert_eq!(err.to_string(), "invalid timeline: first phase starts at tick 3, not 0");
    }

    #[test]
    fn context_clears_sounds() {
        let mut ctx = StageContext::new();
        ctx.emit_sound(SoundCue::new(1, "start"));
        assert_eq!(ctx.sounds.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
    }
}
