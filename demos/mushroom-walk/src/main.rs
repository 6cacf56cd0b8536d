//! Headless native player: plays the cutscene at 60 ticks/s, logging what
//! would be drawn and heard.
//!
//! Usage: `mushroom-walk [ASSET_DIR]` (default `assets`). Images are read
//! from `ASSET_DIR/images`, sounds from `ASSET_DIR/sounds`, and an optional
//! `ASSET_DIR/scene.json` overrides the scene tunables.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::path::Path;

    use mushroom_walk::config::SceneConfig;
    use mushroom_walk::scene::{Cutscene, JUMP, START};
    use reel_engine::*;

    /// Logs a summary of every second's worth of frames.
    #[derive(Default)]
    struct LogRenderer {
        frames: u64,
        last: DrawStats,
    }

    impl Renderer for LogRenderer {
        fn draw(&mut self, buffer: &RenderBuffer) {
            self.last = DrawStats::of(buffer);
        }

        fn present(&mut self) {
            if self.frames % 60 == 0 {
                log::debug!(
                    "frame {}: {} instances, overlay {}",
                    self.frames,
                    self.last.instances,
                    self.last.overlay
                );
            }
            self.frames += 1;
        }
    }

    /// Logs each cue with the file that would play.
    struct LogAudio {
        files: HashMap<u32, (String, f32)>,
    }

    impl LogAudio {
        fn new(scene: &Cutscene, assets: &AssetLoader) -> Self {
            let files = [JUMP, START]
                .into_iter()
                .filter_map(|cue| {
                    let info = assets.sound(scene.sound_for(cue)?)?;
                    Some((cue.id, (info.path.clone(), info.volume)))
                })
                .collect();
            Self { files }
        }
    }

    impl AudioSink for LogAudio {
        fn play(&mut self, cue: SoundCue) {
            match self.files.get(&cue.id) {
                Some((path, volume)) => {
                    log::info!("play '{}': {} at volume {}", cue.name, path, volume)
                }
                None => log::warn!("no sound for cue '{}'", cue.name),
            }
        }
    }

    fn load_config(path: &Path) -> SceneConfig {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SceneConfig::default(),
            Err(e) => {
                log::error!("cannot read {}: {}; using defaults", path.display(), e);
                return SceneConfig::default();
            }
        };
        SceneConfig::from_json(&json).unwrap_or_else(|e| {
            log::error!("bad scene config {}: {}; using defaults", path.display(), e);
            SceneConfig::default()
        })
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let root = std::env::args().nth(1).unwrap_or_else(|| "assets".to_string());
        let config = load_config(&Path::new(&root).join("scene.json"));

        let mut assets = AssetLoader::new(FsAssetSource::new(&root));
        let scene = Cutscene::with_config(&mut assets, config)?;
        log::info!("loaded {} images from {}", assets.images().len(), root);

        let mut audio = LogAudio::new(&scene, &assets);
        let mut renderer = LogRenderer::default();
        let mut driver = Driver::new(scene);
        let summary = driver.run(&mut NoInput, &mut renderer, &mut audio);

        log::info!("{:?} after {} ticks", summary.reason, summary.ticks);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
