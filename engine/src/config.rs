//! Tuning Configuration
//!
//! Every live-adjustable gameplay constant lives here as a plain, validated
//! data structure. A tuning panel (or a JSON file on disk) writes into these
//! structs between frames; the controllers read them - live adjustment
//! without structural coupling.
//!
//! Out-of-range values are clamped by [`Tuning::validate`] rather than
//! rejected, so a hand-edited file can never wedge the demo.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

// ============================================================================
// CAMERA
// ============================================================================

/// Camera controller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTuning {
    /// Vertical field of view in degrees. Range: 10 - 120.
    pub fov_deg: f32,
    /// Near clip plane. Range: 0.01 - 10.
    pub near: f32,
    /// Far clip plane. Range: 100 - 10000.
    pub far: f32,
    /// Mode-transition progress per second (0.7 is roughly a 1.4 s blend).
    /// Range: 0.1 - 10.
    pub transition_speed: f32,
    /// Distance along the view direction used to synthesize the look-at
    /// snapshot when a transition starts. Range: 1 - 50.
    pub look_ahead: f32,
    /// Damping rate for the camera position (and orbit pivot) follow.
    /// Range: 0.1 - 20.
    pub follow_lerp_speed: f32,
    /// Damping rate for the look-at follow. Kept faster than
    /// `follow_lerp_speed` so the aim settles before the seat does.
    /// Range: 0.1 - 20.
    pub look_at_lerp_speed: f32,
    /// Third-person rig offset from the character, in character-local
    /// space. Components within +/-10.
    pub tpp_offset: Vec3,
    /// Look-at anchor offset from the character, in character-local space.
    /// Components within +/-5.
    pub look_at_offset: Vec3,
    /// Horizontal distance of the orbit-entry camera position. Range: 1 - 20.
    pub orbit_distance: f32,
    /// Height of the orbit-entry camera position above the character.
    /// Range: 0 - 10.
    pub orbit_height: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            fov_deg: 65.0,
            near: 0.1,
            far: 1000.0,
            transition_speed: 0.7,
            look_ahead: 10.0,
            follow_lerp_speed: 3.5,
            look_at_lerp_speed: 8.0,
            // Behind and above the character's shoulders.
            tpp_offset: Vec3::new(0.0, 1.6, -3.0),
            // Chest height.
            look_at_offset: Vec3::new(0.0, 1.2, 0.0),
            orbit_distance: 3.0,
            orbit_height: 1.6,
        }
    }
}

// ============================================================================
// ORBIT RIG
// ============================================================================

/// Orbit manipulator tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitTuning {
    /// Minimum zoom distance in meters. Range: 0.5 - 10.
    pub min_distance: f32,
    /// Maximum zoom distance in meters. Range: 1 - 20.
    pub max_distance: f32,
    /// Lowest allowed elevation in degrees (negative looks up from below
    /// the horizon). Range: -89 - 0.
    pub min_elevation_deg: f32,
    /// Highest allowed elevation in degrees. Range: 0 - 89.
    pub max_elevation_deg: f32,
    /// Damping rate applied to rotation and zoom input. Range: 0.1 - 20.
    pub smoothing: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            min_distance: 2.0,
            max_distance: 3.0,
            // Polar angle capped at ~112.5 degrees: just below the horizon.
            min_elevation_deg: -22.5,
            max_elevation_deg: 89.0,
            smoothing: 3.0,
        }
    }
}

// ============================================================================
// LOCOMOTION
// ============================================================================

/// Locomotion controller tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionTuning {
    /// Base movement speed in m/s. Range: 0 - 5.
    pub speed: f32,
    /// Sprint speed multiplier. Range: 1 - 5.
    pub sprint_multiplier: f32,
    /// Steering rate in radians per second. Range: 0.1 - 10.
    pub rotation_speed: f32,
    /// Cross-fade window for ordinary state changes, in seconds.
    /// Range: 0 - 1.
    pub fade_duration: f32,
    /// Shorter cross-fade used at jump onset, in seconds. Range: 0 - 1.
    pub jump_fade_duration: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            speed: 1.5,
            sprint_multiplier: 2.0,
            rotation_speed: 1.5,
            fade_duration: 0.2,
            jump_fade_duration: 0.1,
        }
    }
}

// ============================================================================
// TOP LEVEL
// ============================================================================

/// Complete tuning set for one demo session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub camera: CameraTuning,
    pub orbit: OrbitTuning,
    pub locomotion: LocomotionTuning,
}

impl Tuning {
    /// Clamp every field into its documented range. Logs each correction.
    pub fn validate(&mut self) {
        let camera = &mut self.camera;
        clamp_field("camera.fov_deg", &mut camera.fov_deg, 10.0, 120.0);
        clamp_field("camera.near", &mut camera.near, 0.01, 10.0);
        clamp_field("camera.far", &mut camera.far, 100.0, 10000.0);
        clamp_field(
            "camera.transition_speed",
            &mut camera.transition_speed,
            0.1,
            10.0,
        );
        clamp_field("camera.look_ahead", &mut camera.look_ahead, 1.0, 50.0);
        clamp_field(
            "camera.follow_lerp_speed",
            &mut camera.follow_lerp_speed,
            0.1,
            20.0,
        );
        clamp_field(
            "camera.look_at_lerp_speed",
            &mut camera.look_at_lerp_speed,
            0.1,
            20.0,
        );
        clamp_vec3("camera.tpp_offset", &mut camera.tpp_offset, 10.0);
        clamp_vec3("camera.look_at_offset", &mut camera.look_at_offset, 5.0);
        clamp_field(
            "camera.orbit_distance",
            &mut camera.orbit_distance,
            1.0,
            20.0,
        );
        clamp_field("camera.orbit_height", &mut camera.orbit_height, 0.0, 10.0);

        let orbit = &mut self.orbit;
        clamp_field("orbit.min_distance", &mut orbit.min_distance, 0.5, 10.0);
        clamp_field("orbit.max_distance", &mut orbit.max_distance, 1.0, 20.0);
        if orbit.max_distance < orbit.min_distance {
            log::warn!(
                "[Tuning] orbit.max_distance {} below min_distance {}, raising",
                orbit.max_distance,
                orbit.min_distance
            );
            orbit.max_distance = orbit.min_distance;
        }
        clamp_field(
            "orbit.min_elevation_deg",
            &mut orbit.min_elevation_deg,
            -89.0,
            0.0,
        );
        clamp_field(
            "orbit.max_elevation_deg",
            &mut orbit.max_elevation_deg,
            0.0,
            89.0,
        );
        clamp_field("orbit.smoothing", &mut orbit.smoothing, 0.1, 20.0);

        let locomotion = &mut self.locomotion;
        clamp_field("locomotion.speed", &mut locomotion.speed, 0.0, 5.0);
        clamp_field(
            "locomotion.sprint_multiplier",
            &mut locomotion.sprint_multiplier,
            1.0,
            5.0,
        );
        clamp_field(
            "locomotion.rotation_speed",
            &mut locomotion.rotation_speed,
            0.1,
            10.0,
        );
        clamp_field(
            "locomotion.fade_duration",
            &mut locomotion.fade_duration,
            0.0,
            1.0,
        );
        clamp_field(
            "locomotion.jump_fade_duration",
            &mut locomotion.jump_fade_duration,
            0.0,
            1.0,
        );
    }

    /// Load tuning from a JSON file and clamp it into range.
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let data = std::fs::read(path)?;
        let mut tuning: Tuning = serde_json::from_slice(&data)?;
        tuning.validate();
        Ok(tuning)
    }

    /// Write tuning to a JSON file (pretty-printed for hand editing).
    pub fn save(&self, path: &Path) -> Result<(), TuningError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn clamp_field(name: &str, value: &mut f32, min: f32, max: f32) {
    let clamped = value.clamp(min, max);
    if clamped != *value || value.is_nan() {
        if value.is_nan() {
            // NaN clamps to NaN; pin it to the bottom of the range instead.
            *value = min;
        } else {
            *value = clamped;
        }
        log::warn!("[Tuning] {name} out of range, clamped to {}", *value);
    }
}

fn clamp_vec3(name: &str, value: &mut Vec3, limit: f32) {
    for (axis, component) in [("x", &mut value.x), ("y", &mut value.y), ("z", &mut value.z)] {
        let field = format!("{name}.{axis}");
        clamp_field(&field, component, -limit, limit);
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading or saving a tuning file.
#[derive(Debug)]
pub enum TuningError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::IoError(e) => write!(f, "IO error: {e}"),
            TuningError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for TuningError {}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::IoError(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::JsonError(e)
    }
}
