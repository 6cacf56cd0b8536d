use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing every image and sound a scene may ask for.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named images: file name → descriptor.
    #[serde(default)]
    pub images: HashMap<String, ImageDescriptor>,
    /// Named sounds: file name → descriptor.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single image file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Path relative to the image directory (e.g., "dani_walk01.png").
    pub path: String,
    /// Pixel width, if known up front.
    #[serde(default)]
    pub width: Option<u32>,
    /// Pixel height, if known up front.
    #[serde(default)]
    pub height: Option<u32>,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Path relative to the sound directory.
    pub path: String,
    /// Playback volume in [0, 1].
    #[serde(default = "default_volume")]
    pub volume: f32,
}

/// Volume applied to every scene sound unless overridden.
pub const DEFAULT_VOLUME: f32 = 0.3;

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest_with_sounds() {
        let json = r#"{
            "sounds": {
                "jump": { "path": "player_jump_groan01.ogg", "volume": 0.5 },
                "start": { "path": "game_start.ogg" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.sounds.len(), 2);
        assert!(manifest.images.is_empty());

        let jump = &manifest.sounds["jump"];
        assert_eq!(jump.path, "player_jump_groan01.ogg");
        assert_eq!(jump.volume, 0.5);

        let start = &manifest.sounds["start"];
        assert_eq!(start.volume, DEFAULT_VOLUME);
    }

    #[test]
    fn parse_images() {
        let json = r#"{
            "images": {
                "dani_walk01.png": { "path": "dani_walk01.png", "width": 60, "height": 96 },
                "mountain.png": { "path": "bg/mountain.png" }
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images["dani_walk01.png"].width, Some(60));
        assert_eq!(manifest.images["mountain.png"].height, None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AssetManifest::from_json("{ \"images\": 3 }").is_err());
    }
}
