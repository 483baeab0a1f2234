//! Linear incentive curves over the proportional share.
//!
//! The operation order matches `min + (max - min) * t` exactly; rearranging
//! into `min * (1 - t) + max * t` changes the last bits of the result.

/// `min + (max - min) * t`. Not clamped: `t` outside `[0, 1]` extrapolates.
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}

/// `min + (max - min) * (1 - t)`: equals `max` at `t = 0` and `min` at `t = 1`.
pub fn lerp_descending(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * (1.0 - t)
}
