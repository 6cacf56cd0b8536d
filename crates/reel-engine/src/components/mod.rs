pub mod animation;
pub mod character;
pub mod cloud;
pub mod layer;
pub mod motion;
pub mod object;
pub mod sprite;
