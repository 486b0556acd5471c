//! Scene Transform Store
//!
//! Holds the two transforms the gameplay core reads and writes each frame:
//! the character's world transform (written by locomotion, read by the
//! camera) and the camera's render transform (written by the camera,
//! consumed by an external renderer). Nothing here draws anything - this
//! module is the hand-off point between the controllers and whatever
//! scene-graph/renderer hosts them.

use glam::{Mat4, Quat, Vec3};

/// Default camera spawn position, matching the framing of the demo scene
/// before any character exists.
const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.15, 1.25, 3.5);

/// World transform of the player character.
///
/// Orientation is yaw-only by design: the character only ever rotates about
/// the vertical axis, so a single angle is stored and the quaternion is
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTransform {
    /// World position in meters.
    pub position: Vec3,
    /// Heading about +Y in radians.
    pub yaw: f32,
}

impl CharacterTransform {
    /// Create a character transform at the given position and heading.
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Orientation as a quaternion (rotation about +Y).
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// The character's local forward axis (+Z) rotated into world space.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }
}

impl Default for CharacterTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
        }
    }
}

/// Render transform of the camera: a world position and the point it looks
/// at. The view direction and view matrix are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Camera position in world space.
    pub position: Vec3,
    /// World-space point the camera is oriented toward.
    pub look_target: Vec3,
}

impl CameraTransform {
    /// Normalized view direction. Falls back to -Z if the look target
    /// coincides with the position.
    pub fn forward(&self) -> Vec3 {
        let dir = (self.look_target - self.position).normalize_or_zero();
        if dir.length_squared() > 0.0 {
            dir
        } else {
            Vec3::NEG_Z
        }
    }

    /// Right-handed view matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_target, Vec3::Y)
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            position: DEFAULT_CAMERA_POSITION,
            look_target: Vec3::ZERO,
        }
    }
}

/// The slice of scene state the gameplay core owns.
///
/// The character is optional: camera-mode requests can arrive before the
/// character has spawned, and the controllers degrade gracefully in that
/// window.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Player character transform, absent until spawn.
    pub character: Option<CharacterTransform>,
    /// Camera render transform.
    pub camera: CameraTransform,
}

impl Scene {
    /// Create a scene with the default camera pose and no character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the character at a position and heading. Subsequent calls
    /// re-place the existing character rather than creating a second one.
    pub fn spawn_character(&mut self, position: Vec3, yaw: f32) -> &mut CharacterTransform {
        self.character.insert(CharacterTransform::new(position, yaw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_forward_identity() {
        let character = CharacterTransform::default();
        let forward = character.forward();
        assert!((forward - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_character_forward_rotates_with_yaw() {
        let character = CharacterTransform::new(Vec3::ZERO, std::f32::consts::FRAC_PI_2);
        let forward = character.forward();
        // Yaw of +90 degrees swings local +Z onto world +X.
        assert!((forward - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_camera_forward_fallback() {
        let camera = CameraTransform {
            position: Vec3::ONE,
            look_target: Vec3::ONE,
        };
        // Degenerate pose still yields a usable direction.
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_camera_view_matrix_valid() {
        let camera = CameraTransform::default();
        let view = camera.view_matrix();
        let sum: f32 = view.to_cols_array().iter().map(|v| v.abs()).sum();
        assert!(sum > 0.0, "View matrix should not be all zeros");
    }

    #[test]
    fn test_spawn_character() {
        let mut scene = Scene::new();
        assert!(scene.character.is_none());

        scene.spawn_character(Vec3::new(1.0, 0.0, 2.0), 0.5);
        let character = scene.character.expect("spawned");
        assert_eq!(character.position, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(character.yaw, 0.5);
    }
}
