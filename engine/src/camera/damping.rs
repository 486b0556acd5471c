//! Frame-Rate-Independent Damping
//!
//! Exponential smoothing used by the camera follow and the orbit rig.
//! A fixed per-frame lerp fraction converges faster at higher frame rates;
//! deriving the blend factor as `1 - e^(-rate * dt)` makes the convergence
//! profile identical regardless of how the elapsed time is sliced into
//! frames.

use glam::Vec3;

/// Upper bound on a single damping step, so a frame hitch cannot snap the
/// smoothed value across most of the remaining distance.
pub const MAX_DAMP_STEP: f32 = 0.1;

/// Blend factor for one damping step of `dt` seconds at the given rate.
#[inline]
pub fn damp_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt.min(MAX_DAMP_STEP)).exp()
}

/// Move `current` toward `target` by one damping step.
#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, damp_factor(rate, dt))
}

/// Scalar variant of [`damp_vec3`].
#[inline]
pub fn damp_f32(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * damp_factor(rate, dt)
}
