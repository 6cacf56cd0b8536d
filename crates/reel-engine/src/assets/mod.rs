pub mod loader;
pub mod manifest;
pub mod registry;

#[cfg(not(target_arch = "wasm32"))]
pub mod fs;
