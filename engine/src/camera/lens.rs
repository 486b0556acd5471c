//! Camera Lens
//!
//! Projection parameters for the render camera. Kept apart from the mode
//! state machine so a window resize only ever touches the projection.

use glam::Mat4;

use crate::config::CameraTuning;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLens {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
}

impl CameraLens {
    /// Build a lens from camera tuning and an initial aspect ratio.
    pub fn new(tuning: &CameraTuning, aspect: f32) -> Self {
        Self {
            fov_deg: tuning.fov_deg,
            near: tuning.near,
            far: tuning.far,
            aspect,
        }
    }

    /// Update the aspect ratio after a window resize. Non-positive values
    /// are ignored.
    pub fn resize(&mut self, aspect: f32) {
        if aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Right-handed perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }
}
