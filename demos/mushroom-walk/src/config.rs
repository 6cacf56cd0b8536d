use serde::{Deserialize, Serialize};

/// Every tunable of the mushroom cutscene. Missing JSON fields keep their
/// defaults, so a `scene.json` only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Tick at which the scene ends.
    pub total_ticks: u32,
    pub phases: PhaseStarts,
    pub fade_in_ticks: u32,
    pub fade_out_ticks: u32,
    pub character: CharacterSettings,
    /// Ticks per frame for the scripted sprites.
    pub sprite_frame_delay: u32,
    /// Ticks a sprite takes to fade in once shown.
    pub sprite_fade_ticks: u32,
    pub mushroom: Placement,
    pub explosion: Placement,
    pub satellite: Placement,
    pub cloud_size: [f32; 2],
    pub cloud_frame_delay: u32,
    pub clouds: Vec<CloudPlacement>,
}

/// First tick of each scripted phase after the opening fade. The fade-out
/// has no entry here: it starts `fade_out_ticks` before `total_ticks`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseStarts {
    pub character_entry: u32,
    pub mushroom_growth: u32,
    pub mushroom_burst: u32,
    pub satellite_activation: u32,
    pub conclusion: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSettings {
    pub start_x: f32,
    /// How far past the right edge the walk ends.
    pub exit_margin: f32,
    pub base_y: f32,
    pub walk_ticks: u32,
    pub jump_ticks: u32,
    pub jump_height: f32,
    /// Jump line as a fraction of the world width.
    pub jump_trigger_fraction: f32,
    pub frame_delay: u32,
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudPlacement {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub layer: u32,
}

impl SceneConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn target_x(&self) -> f32 {
        self.world_width + self.character.exit_margin
    }

    pub fn jump_trigger_x(&self) -> f32 {
        self.world_width * self.character.jump_trigger_fraction
    }

    /// First tick of the exit ramp.
    pub fn fade_out_start(&self) -> u32 {
        self.total_ticks.saturating_sub(self.fade_out_ticks)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_width: 1280.0,
            world_height: 720.0,
            total_ticks: 900,
            phases: PhaseStarts::default(),
            fade_in_ticks: 60,
            fade_out_ticks: 60,
            character: CharacterSettings::default(),
            sprite_frame_delay: 4,
            sprite_fade_ticks: 30,
            mushroom: Placement {
                pos: [600.0, 450.0],
                size: [80.0, 80.0],
            },
            explosion: Placement {
                pos: [600.0, 450.0],
                size: [100.0, 100.0],
            },
            satellite: Placement {
                pos: [1000.0, 200.0],
                size: [120.0, 120.0],
            },
            cloud_size: [120.0, 72.0],
            cloud_frame_delay: 15,
            clouds: vec![
                CloudPlacement {
                    x: 100.0,
                    y: 100.0,
                    speed: 0.3,
                    layer: 1,
                },
                CloudPlacement {
                    x: 400.0,
                    y: 150.0,
                    speed: 0.5,
                    layer: 2,
                },
                CloudPlacement {
                    x: 700.0,
                    y: 80.0,
                    speed: 0.7,
                    layer: 3,
                },
            ],
        }
    }
}

impl Default for PhaseStarts {
    fn default() -> Self {
        Self {
            character_entry: 60,
            mushroom_growth: 360,
            mushroom_burst: 480,
            satellite_activation: 600,
            conclusion: 720,
        }
    }
}

impl Default for CharacterSettings {
    fn default() -> Self {
        Self {
            start_x: -100.0,
            exit_margin: 100.0,
            base_y: 500.0,
            walk_ticks: 300,
            jump_ticks: 60,
            jump_height: 50.0,
            jump_trigger_fraction: 0.6,
            frame_delay: 8,
            size: [60.0, 96.0],
        }
    }
}
