//! Asset loading with a never-fail policy.
//!
//! `AssetLoader` asks an `AssetSource` for each name once. A missing image
//! becomes the placeholder (logged as a warning), an unreadable one too
//! (logged as an error). Sounds degrade to `None` the same way. Nothing
//! here ever returns an error to the scene.

use std::collections::HashMap;

use thiserror::Error;

use crate::api::types::{ImageHandle, SoundHandle};
use crate::assets::manifest::{AssetManifest, DEFAULT_VOLUME};
use crate::assets::registry::{ImageInfo, ImageRegistry};

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("asset {name} is unreadable: {reason}")]
    Malformed { name: String, reason: String },
}

/// Metadata for one loaded sound.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundInfo {
    pub name: String,
    pub path: String,
    pub volume: f32,
}

/// Backend that resolves asset names (filesystem, manifest, tests).
pub trait AssetSource {
    fn load_image(&mut self, name: &str) -> Result<ImageInfo, AssetError>;
    fn load_sound(&mut self, name: &str) -> Result<SoundInfo, AssetError>;
}

/// Caching, failure-absorbing front end over an `AssetSource`.
pub struct AssetLoader {
    source: Box<dyn AssetSource>,
    images: ImageRegistry,
    sounds: Vec<SoundInfo>,
    sound_names: HashMap<String, Option<SoundHandle>>,
}

impl AssetLoader {
    pub fn new(source: impl AssetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            images: ImageRegistry::new(),
            sounds: Vec::new(),
            sound_names: HashMap::new(),
        }
    }

    /// Load `name`, or hand back the placeholder.
    pub fn load_image(&mut self, name: &str) -> ImageHandle {
        if let Some(handle) = self.images.lookup(name) {
            return handle;
        }
        match self.source.load_image(name) {
            Ok(info) => self.images.insert(name, info),
            Err(err) => {
                report(&err);
                self.images.alias_placeholder(name)
            }
        }
    }

    /// Load a list of names in order.
    pub fn load_images<I, N>(&mut self, names: I) -> Vec<ImageHandle>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.load_image(name.as_ref()))
            .collect()
    }

    /// Load `name`, or None if it is missing or broken.
    pub fn load_sound(&mut self, name: &str) -> Option<SoundHandle> {
        if let Some(handle) = self.sound_names.get(name) {
            return *handle;
        }
        let handle = match self.source.load_sound(name) {
            Ok(info) => {
                self.sounds.push(info);
                Some(SoundHandle(self.sounds.len() as u32 - 1))
            }
            Err(err) => {
                report(&err);
                None
            }
        };
        self.sound_names.insert(name.to_string(), handle);
        handle
    }

    pub fn image(&self, handle: ImageHandle) -> Option<&ImageInfo> {
        self.images.get(handle)
    }

    pub fn sound(&self, handle: SoundHandle) -> Option<&SoundInfo> {
        self.sounds.get(handle.0 as usize)
    }

    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }
}

fn report(err: &AssetError) {
    match err {
        AssetError::NotFound(_) => log::warn!("{}", err),
        AssetError::Malformed { .. } => log::error!("{}", err),
    }
}

/// Asset source backed by a parsed `AssetManifest`. Used where the host
/// fetches the files itself (the browser); a name is available if and only
/// if the manifest lists it.
pub struct ManifestSource {
    manifest: AssetManifest,
}

impl ManifestSource {
    pub fn new(manifest: AssetManifest) -> Self {
        Self { manifest }
    }
}

impl AssetSource for ManifestSource {
    fn load_image(&mut self, name: &str) -> Result<ImageInfo, AssetError> {
        let desc = self
            .manifest
            .images
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;
        if desc.path.is_empty() {
            return Err(AssetError::Malformed {
                name: name.to_string(),
                reason: "empty path".into(),
            });
        }
        Ok(ImageInfo::file(
            desc.path.clone(),
            desc.width.unwrap_or(0),
            desc.height.unwrap_or(0),
        ))
    }

    fn load_sound(&mut self, name: &str) -> Result<SoundInfo, AssetError> {
        let desc = self
            .manifest
            .sounds
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;
        Ok(SoundInfo {
            name: name.to_string(),
            path: desc.path.clone(),
            volume: desc.volume,
        })
    }
}

/// Source with nothing in it: every image is a placeholder, every sound None.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptySource;

impl AssetSource for EmptySource {
    fn load_image(&mut self, name: &str) -> Result<ImageInfo, AssetError> {
        Err(AssetError::NotFound(name.to_string()))
    }

    fn load_sound(&mut self, name: &str) -> Result<SoundInfo, AssetError> {
        Err(AssetError::NotFound(name.to_string()))
    }
}

impl SoundInfo {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            volume: DEFAULT_VOLUME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::ImageKind;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts lookups; "broken.png" is malformed, "*.ogg" are sounds.
    struct Counting {
        calls: Rc<Cell<u32>>,
    }

    impl AssetSource for Counting {
        fn load_image(&mut self, name: &str) -> Result<ImageInfo, AssetError> {
            self.calls.set(self.calls.get() + 1);
            match name {
                "broken.png" => Err(AssetError::Malformed {
                    name: name.into(),
                    reason: "bad header".into(),
                }),
                "sky.png" => Ok(ImageInfo::file(name, 1280, 720)),
                _ => Err(AssetError::NotFound(name.into())),
            }
        }

        fn load_sound(&mut self, name: &str) -> Result<SoundInfo, AssetError> {
            self.calls.set(self.calls.get() + 1);
            if name.ends_with(".ogg") {
                Ok(SoundInfo::new(name, name))
            } else {
                Err(AssetError::NotFound(name.into()))
            }
        }
    }

    fn loader() -> (AssetLoader, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let source = Counting {
            calls: calls.clone(),
        };
        (AssetLoader::new(source), calls)
    }

    #[test]
    fn loaded_image_gets_its_own_handle() {
        let (mut loader, _) = loader();
        let h = loader.load_image("sky.png");
        assert!(!h.is_placeholder());
        assert_eq!(loader.image(h).unwrap().kind, ImageKind::File);
    }

    #[test]
    fn missing_and_broken_images_become_placeholders() {
        let (mut loader, _) = loader();
        assert!(loader.load_image("nope.png").is_placeholder());
        assert!(loader.load_image("broken.png").is_placeholder());
        let info = loader.image(ImageHandle::PLACEHOLDER).unwrap();
        assert_eq!(info.width, 50);
        assert_eq!(info.height, 50);
    }

    #[test]
    fn each_name_is_asked_once() {
        let (mut loader, calls) = loader();
        let a = loader.load_image("sky.png");
        let b = loader.load_image("sky.png");
        loader.load_image("nope.png");
        loader.load_image("nope.png");
        loader.load_sound("jump.ogg");
        loader.load_sound("jump.ogg");
        assert_eq!(a, b);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn sounds_degrade_to_none() {
        let (mut loader, _) = loader();
        let jump = loader.load_sound("jump.ogg").unwrap();
        assert_eq!(loader.sound(jump).unwrap().volume, DEFAULT_VOLUME);
        assert_eq!(loader.load_sound("missing.wav"), None);
    }

    #[test]
    fn load_images_keeps_order() {
        let (mut loader, _) = loader();
        let handles = loader.load_images(["nope.png", "sky.png"]);
        assert!(handles[0].is_placeholder());
        assert!(!handles[1].is_placeholder());
    }

    #[test]
    fn manifest_source_resolves_listed_names() {
        let manifest = AssetManifest::from_json(
            r#"{
                "images": { "sky_background.png": { "path": "img/sky.png", "width": 640, "height": 360 } },
                "sounds": { "game_start.ogg": { "path": "snd/start.ogg" } }
            }"#,
        )
        .unwrap();
        let mut loader = AssetLoader::new(ManifestSource::new(manifest));
        let sky = loader.load_image("sky_background.png");
        assert_eq!(loader.image(sky).unwrap().width, 640);
        assert!(loader.load_image("mountain.png").is_placeholder());
        assert!(loader.load_sound("game_start.ogg").is_some());
        assert!(loader.load_sound("player_jump_groan01.ogg").is_none());
    }

    #[test]
    fn empty_source_never_fails_the_caller() {
        let mut loader = AssetLoader::new(EmptySource);
        assert!(loader.load_image("anything.png").is_placeholder());
        assert!(loader.load_sound("anything.ogg").is_none());
    }
}
