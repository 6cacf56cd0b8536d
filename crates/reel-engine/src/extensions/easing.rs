// extensions/easing.rs
//
// Pure easing functions for animation interpolation.
// No dependencies on objects or the timeline. Just math.
//
// None of these clamp: callers keep `t` inside [0, 1] themselves.
// Out-of-range input extrapolates the polynomial.

/// Smoothstep: slow start and end, zero slope at both ends.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Fast start, decelerating end.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Slow start, accelerating end.
#[inline]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end (smoothstep).
    Smoothstep,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::QuadIn => ease_in(t),
            Easing::QuadOut => ease_out(t),
            Easing::Smoothstep => ease_in_out(t),
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}
