//! Smoothing Module
//!
//! Frame-rate-independent exponential interpolation used by the camera rig
//! for translation, zoom, and height smoothing. Each step moves the current
//! value toward the target by a fraction of the remaining distance, scaled
//! so convergence speed does not depend on frame rate.

use glam::Vec3;

/// Exponentially interpolate a scalar toward a target.
///
/// The value covers `1 - e^(-rate * dt)` of the remaining distance each call,
/// so chaining two updates of `dt/2` lands on the same result as one update
/// of `dt`. The result never overshoots the target, and `dt = 0` returns
/// `current` unchanged.
///
/// # Arguments
/// * `current` - Current value
/// * `target` - Value being approached
/// * `dt` - Time step in seconds (non-positive steps are a no-op)
/// * `rate` - Convergence rate in 1/seconds (higher = faster)
#[inline]
pub fn exp_interp_to(current: f32, target: f32, dt: f32, rate: f32) -> f32 {
    if dt <= 0.0 || rate <= 0.0 {
        return current;
    }

    let alpha = 1.0 - (-rate * dt).exp();
    current + (target - current) * alpha
}

/// Exponentially interpolate a vector toward a target.
///
/// Component-wise version of [`exp_interp_to`] with the same frame-rate
/// independence and no-overshoot guarantees.
#[inline]
pub fn exp_interp_to_vec3(current: Vec3, target: Vec3, dt: f32, rate: f32) -> Vec3 {
    if dt <= 0.0 || rate <= 0.0 {
        return current;
    }

    let alpha = 1.0 - (-rate * dt).exp();
    current + (target - current) * alpha
}
