// extensions/mod.rs
//
// Timing helpers shared by every animated object.
// Pure state and math: nothing here knows about objects or the timeline.

pub mod easing;
pub mod ramp;

pub use easing::{Easing, ease, ease_in, ease_in_out, ease_out, lerp, lerp_vec2};
pub use ramp::Ramp;
