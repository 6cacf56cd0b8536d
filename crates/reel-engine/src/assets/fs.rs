//! Filesystem asset source for native players.
//!
//! Layout: `<root>/images/<name>` and `<root>/sounds/<name>`. Images are
//! checked with the `image` crate so a truncated or mislabelled file is
//! reported as malformed rather than discovered later by the renderer.

use std::path::{Path, PathBuf};

use crate::assets::loader::{AssetError, AssetSource, SoundInfo};
use crate::assets::registry::ImageInfo;

pub struct FsAssetSource {
    images_dir: PathBuf,
    sounds_dir: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            images_dir: root.join("images"),
            sounds_dir: root.join("sounds"),
        }
    }

    fn existing(dir: &Path, name: &str) -> Result<PathBuf, AssetError> {
        let path = dir.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::NotFound(path.display().to_string()))
        }
    }
}

impl AssetSource for FsAssetSource {
    fn load_image(&mut self, name: &str) -> Result<ImageInfo, AssetError> {
        let path = Self::existing(&self.images_dir, name)?;
        let (width, height) = image::image_dimensions(&path).map_err(|e| AssetError::Malformed {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(ImageInfo::file(path.display().to_string(), width, height))
    }

    fn load_sound(&mut self, name: &str) -> Result<SoundInfo, AssetError> {
        let path = Self::existing(&self.sounds_dir, name)?;
        let len = std::fs::metadata(&path)
            .map_err(|e| AssetError::Malformed {
                name: name.to_string(),
                reason: e.to_string(),
            })?
            .len();
        if len == 0 {
            return Err(AssetError::Malformed {
                name: name.to_string(),
                reason: "empty file".into(),
            });
        }
        Ok(SoundInfo::new(name, path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::loader::AssetLoader;
    use crate::assets::registry::ImageKind;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("reel-fs-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("images")).unwrap();
        std::fs::create_dir_all(dir.join("sounds")).unwrap();
        dir
    }

    #[test]
    fn decodes_real_png_dimensions() {
        let dir = scratch_dir("png");
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([0, 0, 255, 255]));
        img.save(dir.join("images").join("cloud01_idle.png")).unwrap();

        let mut loader = AssetLoader::new(FsAssetSource::new(&dir));
        let h = loader.load_image("cloud01_idle.png");
        let info = loader.image(h).unwrap();
        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.kind, ImageKind::File);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn garbage_image_is_malformed() {
        let dir = scratch_dir("garbage");
        std::fs::write(dir.join("images").join("mountain.png"), b"not a png").unwrap();

        let mut source = FsAssetSource::new(&dir);
        let err = source.load_image("mountain.png").unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_files_are_not_found() {
        let dir = scratch_dir("missing");
        let mut source = FsAssetSource::new(&dir);
        assert!(matches!(source.load_image("x.png"), Err(AssetError::NotFound(_))));
        assert!(matches!(source.load_sound("x.ogg"), Err(AssetError::NotFound(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn sounds_need_content() {
        let dir = scratch_dir("sounds");
        std::fs::write(dir.join("sounds").join("empty.ogg"), b"").unwrap();
        std::fs::write(dir.join("sounds").join("game_start.ogg"), b"OggS").unwrap();

        let mut source = FsAssetSource::new(&dir);
        assert!(matches!(source.load_sound("empty.ogg"), Err(AssetError::Malformed { .. })));
        let info = source.load_sound("game_start.ogg").unwrap();
        assert_eq!(info.name, "game_start.ogg");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
