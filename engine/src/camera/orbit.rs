//! Orbit Rig
//!
//! The free-look manipulator the camera controller delegates to while in
//! orbit mode. A spherical-coordinate camera around a mutable pivot point:
//! rotation and zoom input move target angles, and the realized angles chase
//! them with frame-rate-independent damping. The controller enables the rig
//! when orbit mode is active and disables it everywhere else.
//!
//! Controls (wired by the host):
//! - Drag: orbit (azimuth/elevation around the pivot)
//! - Scroll: zoom (distance from the pivot, clamped)

use glam::Vec3;

use crate::camera::damping::{damp_f32, damp_vec3};
use crate::config::OrbitTuning;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default horizontal angle in degrees.
const DEFAULT_AZIMUTH: f32 = 0.0;
/// Default vertical angle in degrees.
const DEFAULT_ELEVATION: f32 = 15.0;
/// Default distance from the pivot.
const DEFAULT_DISTANCE: f32 = 3.0;

/// Scroll zoom factor: how much each scroll tick affects distance.
const SCROLL_FACTOR: f32 = 0.1;

// ============================================================================
// ORBIT RIG
// ============================================================================

/// Damped spherical-coordinate camera around a pivot.
///
/// # Coordinate System
/// - Azimuth: horizontal angle in degrees (unbounded, wraps naturally)
/// - Elevation: vertical angle in degrees, clamped by tuning
/// - Distance: zoom distance from the pivot, clamped by tuning
/// - Y is up
#[derive(Debug, Clone)]
pub struct OrbitRig {
    tuning: OrbitTuning,
    /// Whether the rig currently owns camera placement.
    enabled: bool,
    /// The point the camera orbits around.
    pivot: Vec3,

    // Realized coordinates, chasing the targets below.
    azimuth: f32,
    elevation: f32,
    distance: f32,

    // Input-driven targets.
    target_azimuth: f32,
    target_elevation: f32,
    target_distance: f32,
}

impl OrbitRig {
    /// Create a rig at the default view, disabled until the controller
    /// hands it the camera.
    pub fn new(tuning: OrbitTuning) -> Self {
        let distance = DEFAULT_DISTANCE.clamp(tuning.min_distance, tuning.max_distance);
        Self {
            tuning,
            enabled: false,
            pivot: Vec3::ZERO,
            azimuth: DEFAULT_AZIMUTH,
            elevation: DEFAULT_ELEVATION,
            distance,
            target_azimuth: DEFAULT_AZIMUTH,
            target_elevation: DEFAULT_ELEVATION,
            target_distance: distance,
        }
    }

    /// Whether the rig currently owns camera placement.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Hand camera placement to the rig (or take it away).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The point the camera orbits around.
    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Move the pivot directly (e.g. re-anchoring on the character).
    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
    }

    /// Smoothly pull the pivot toward a point with the shared damping law.
    pub fn damp_pivot_toward(&mut self, target: Vec3, rate: f32, dt: f32) {
        self.pivot = damp_vec3(self.pivot, target, rate, dt);
    }

    /// Current realized distance from the pivot.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply rotation input in degrees. Ignored while disabled.
    pub fn rotate(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        if !self.enabled {
            return;
        }
        self.target_azimuth += delta_azimuth;
        self.target_elevation = (self.target_elevation + delta_elevation)
            .clamp(self.tuning.min_elevation_deg, self.tuning.max_elevation_deg);
    }

    /// Apply scroll-wheel zoom input. Multiplicative, so zooming feels
    /// consistent at every distance. Ignored while disabled.
    pub fn zoom(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.target_distance = (self.target_distance * (1.0 - delta * SCROLL_FACTOR))
            .clamp(self.tuning.min_distance, self.tuning.max_distance);
    }

    /// Adopt an eye position: derive angles and distance from the offset to
    /// the current pivot, so the rig continues seamlessly from wherever the
    /// camera was placed.
    pub fn sync_from_eye(&mut self, eye: Vec3) {
        let offset = eye - self.pivot;
        let distance = offset.length();
        if distance < 1e-4 {
            return;
        }

        self.azimuth = offset.x.atan2(offset.z).to_degrees();
        self.elevation = (offset.y / distance)
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees()
            .clamp(self.tuning.min_elevation_deg, self.tuning.max_elevation_deg);
        self.distance = distance.clamp(self.tuning.min_distance, self.tuning.max_distance);

        self.target_azimuth = self.azimuth;
        self.target_elevation = self.elevation;
        self.target_distance = self.distance;
    }

    /// Advance the damped rotation and zoom by one frame.
    pub fn update(&mut self, dt: f32) {
        if !self.enabled {
            return;
        }
        let rate = self.tuning.smoothing;
        self.azimuth = damp_f32(self.azimuth, self.target_azimuth, rate, dt);
        self.elevation = damp_f32(self.elevation, self.target_elevation, rate, dt);
        self.distance = damp_f32(self.distance, self.target_distance, rate, dt);
    }

    /// Camera position for the current spherical coordinates.
    pub fn eye_position(&self) -> Vec3 {
        let azim_rad = self.azimuth.to_radians();
        let elev_rad = self.elevation.to_radians();

        let cos_elev = elev_rad.cos();
        let offset = Vec3::new(
            self.distance * cos_elev * azim_rad.sin(),
            self.distance * elev_rad.sin(),
            self.distance * cos_elev * azim_rad.cos(),
        );

        self.pivot + offset
    }
}
