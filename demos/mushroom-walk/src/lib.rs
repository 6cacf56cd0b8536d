use wasm_bindgen::prelude::*;

pub mod config;
pub mod scene;

reel_web::export_scene!(scene::Cutscene, "mushroom-walk");
