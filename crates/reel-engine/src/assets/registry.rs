use std::collections::HashMap;
use crate::api::types::ImageHandle;

/// Solid colour used for images that could not be loaded.
pub const PLACEHOLDER_COLOR: [u8; 3] = [255, 0, 0];
/// Pixel size of the placeholder image.
pub const PLACEHOLDER_SIZE: u32 = 50;

/// Where an image's pixels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageKind {
    /// Decoded from a file the renderer can fetch by name.
    File,
    /// A flat fill, drawn in place of a missing or broken image.
    Placeholder { color: [u8; 3] },
}

/// Metadata for one registered image. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub kind: ImageKind,
}

impl ImageInfo {
    pub fn file(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            kind: ImageKind::File,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            name: "placeholder".into(),
            width: PLACEHOLDER_SIZE,
            height: PLACEHOLDER_SIZE,
            kind: ImageKind::Placeholder {
                color: PLACEHOLDER_COLOR,
            },
        }
    }
}

/// Registry of named images.
/// Handle 0 is always the shared placeholder.
pub struct ImageRegistry {
    images: Vec<ImageInfo>,
    by_name: HashMap<String, ImageHandle>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self {
            images: vec![ImageInfo::placeholder()],
            by_name: HashMap::new(),
        }
    }

    /// Register a loaded image under `name`. Returns its handle.
    pub fn insert(&mut self, name: &str, info: ImageInfo) -> ImageHandle {
        let handle = ImageHandle(self.images.len() as u32);
        self.images.push(info);
        self.by_name.insert(name.to_string(), handle);
        handle
    }

    /// Remember that `name` resolves to the placeholder.
    pub fn alias_placeholder(&mut self, name: &str) -> ImageHandle {
        self.by_name.insert(name.to_string(), ImageHandle::PLACEHOLDER);
        ImageHandle::PLACEHOLDER
    }

    /// Look up an image by name. Returns None if never registered.
    pub fn lookup(&self, name: &str) -> Option<ImageHandle> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, handle: ImageHandle) -> Option<&ImageInfo> {
        self.images.get(handle.0 as usize)
    }

    /// Every registered image in handle order, placeholder first.
    pub fn iter(&self) -> impl Iterator<Item = (ImageHandle, &ImageInfo)> {
        self.images
            .iter()
            .enumerate()
            .map(|(i, info)| (ImageHandle(i as u32), info))
    }

    /// Number of distinct images, counting the placeholder.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Default for ImageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
