pub mod animation;
pub mod cues;
pub mod fade;
pub mod render;
