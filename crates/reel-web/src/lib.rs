pub mod runner;

pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports (scene_init, scene_tick, input handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use reel_engine::*;
///
/// mod scene;
/// use scene::MyScene;
///
/// reel_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: The scene struct type that implements `reel_engine::Script`
/// - `$scene_name`: A string literal used in log messages
///
/// The page calls `scene_init(manifest_json)` once. An unparsable manifest
/// is logged and treated as empty, so every image becomes the placeholder.
/// Accessors return neutral values until a scene has been set up.
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$scene_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(
            f: impl FnOnce(&mut $crate::SceneRunner<$scene_type>) -> R,
        ) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: called before scene_init", $scene_name);
                    R::default()
                }
            })
        }

        #[wasm_bindgen]
        pub fn scene_init(manifest_json: &str) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let manifest = reel_engine::AssetManifest::from_json(manifest_json).unwrap_or_else(|e| {
                log::error!("{}: bad asset manifest: {}", $scene_name, e);
                reel_engine::AssetManifest::default()
            });
            let assets = reel_engine::AssetLoader::new(reel_engine::ManifestSource::new(manifest));
            match $crate::SceneRunner::<$scene_type>::load(assets) {
                Ok(runner) => {
                    RUNNER.with(|cell| {
                        *cell.borrow_mut() = Some(runner);
                    });
                    log::info!("{}: initialized", $scene_name);
                }
                Err(e) => log::error!("{}: setup failed: {}", $scene_name, e),
            }
        }

        /// Returns whether a scene tick ran.
        #[wasm_bindgen]
        pub fn scene_tick(dt: f32) -> bool {
            with_runner(|r| r.tick(dt))
        }

        #[wasm_bindgen]
        pub fn scene_key_down(key_code: u32) {
            with_runner(|r| r.push_input(reel_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn scene_quit() {
            with_runner(|r| r.push_input(reel_engine::InputEvent::Quit));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.instances_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_overlay_alpha() -> f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(reel_engine::bridge::protocol::NO_OVERLAY, |r| r.overlay_alpha())
            })
        }

        #[wasm_bindgen]
        pub fn get_sound_events_ptr() -> *const u8 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.sound_events_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_sound_events_len() -> u32 {
            with_runner(|r| r.sound_events_len())
        }

        #[wasm_bindgen]
        pub fn get_image_path(handle: u32) -> Option<String> {
            with_runner(|r| r.image_path(handle))
        }

        #[wasm_bindgen]
        pub fn get_finished() -> bool {
            with_runner(|r| r.is_finished())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_tick_rate() -> u32 {
            with_runner(|r| r.tick_rate())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_sounds() -> u32 {
            with_runner(|r| r.max_sounds())
        }
    };
}
