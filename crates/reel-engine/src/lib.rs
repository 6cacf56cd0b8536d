pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Script, SetupError, StageConfig, StageContext};
pub use api::types::{ImageHandle, SoundCue, SoundHandle, TickOutcome};
pub use components::animation::{AnimationDef, FrameAnimator};
pub use components::character::{Character, CharacterConfig};
pub use components::cloud::ParallaxCloud;
pub use components::layer::RenderLayer;
pub use components::motion::{JumpState, Motion, MotionEvents, MotionParams};
pub use components::object::SceneObject;
pub use components::sprite::AnimatedSprite;
pub use core::driver::{Driver, RunSummary, StopReason};
pub use core::time::{FixedTimestep, FramePacer};
pub use core::timeline::{PhaseStep, SceneClock, Timeline, TimelineError};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::traits::{AudioSink, DrawStats, NullRenderer, Renderer};
pub use input::queue::{InputEvent, InputQueue, InputSource, NoInput, KEY_ESCAPE};
pub use assets::loader::{
    AssetError, AssetLoader, AssetSource, EmptySource, ManifestSource, SoundInfo,
};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{ImageInfo, ImageKind, ImageRegistry};
#[cfg(not(target_arch = "wasm32"))]
pub use assets::fs::FsAssetSource;
pub use bridge::protocol::ProtocolLayout;
pub use systems::cues::{CueGate, CueRequester, CueSink};
pub use systems::fade::{FadeTransition, DEFAULT_FADE_TICKS};
pub use systems::animation::advance_objects;
pub use systems::render::build_render_buffer;

pub use extensions::{Easing, Ramp, ease, lerp, lerp_vec2};
