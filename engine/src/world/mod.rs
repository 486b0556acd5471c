//! Demo World
//!
//! Owns the scene, the action source, and both controllers, and drives them
//! in the one order that is correct: locomotion first, camera second, so the
//! camera always tracks the character pose written *this* frame, never a
//! stale one. The external render loop calls [`DemoWorld::frame`] once per
//! tick and reads the resulting transforms out of [`DemoWorld::scene`].
//!
//! Every collaborator is injected or constructed here - there is no global
//! game context. Mode-switch requests can arrive at any time (UI, keyboard)
//! and are applied synchronously at the next camera update.

use glam::Vec3;

use crate::animation::AnimationMixer;
use crate::camera::{CameraController, CameraMode};
use crate::config::Tuning;
use crate::input::{KeyCode, KeyboardActions};
use crate::locomotion::LocomotionController;
use crate::scene::Scene;

/// The wired-up gameplay core for one demo session.
#[derive(Debug)]
pub struct DemoWorld {
    /// Transform store read by the external renderer.
    pub scene: Scene,
    input: KeyboardActions,
    locomotion: LocomotionController,
    camera: CameraController,
}

impl DemoWorld {
    /// Build a world from tuning, the character's clip set, and the initial
    /// viewport aspect ratio. The character itself spawns separately (the
    /// camera degrades gracefully until it does).
    pub fn new(mut tuning: Tuning, mixer: AnimationMixer, aspect: f32) -> Self {
        tuning.validate();

        let scene = Scene::new();
        let camera = CameraController::new(tuning.camera, tuning.orbit, aspect, &scene.camera);
        let locomotion = LocomotionController::new(tuning.locomotion, mixer);

        Self {
            scene,
            input: KeyboardActions::new(),
            locomotion,
            camera,
        }
    }

    /// Place the character in the scene.
    pub fn spawn_character(&mut self, position: Vec3, yaw: f32) {
        self.scene.spawn_character(position, yaw);
        log::info!("[World] Character spawned at {position}");
    }

    /// The action source, for tests and hosts that synthesize input.
    pub fn input_mut(&mut self) -> &mut KeyboardActions {
        &mut self.input
    }

    /// Route a key event. The camera toggle is handled here; everything
    /// else goes to the action source. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if key == KeyCode::C {
            if pressed {
                self.toggle_camera_mode();
            }
            return true;
        }
        self.input.handle_key(key, pressed)
    }

    /// Request a camera mode. Idempotent if `mode` is already targeted.
    pub fn request_camera_mode(&mut self, mode: CameraMode) {
        self.camera
            .request_mode(mode, &self.scene.camera, self.scene.character.as_ref());
    }

    /// Switch to the opposite of the currently targeted camera mode.
    pub fn toggle_camera_mode(&mut self) {
        self.camera
            .toggle_mode(&self.scene.camera, self.scene.character.as_ref());
    }

    /// Update the camera projection after a window resize.
    pub fn resize(&mut self, aspect: f32) {
        self.camera.resize(aspect);
    }

    /// The camera controller (mode, transition state, lens, orbit rig).
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable camera access, for orbit input routing and live tuning.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// The locomotion controller (animation state, mixer).
    pub fn locomotion(&self) -> &LocomotionController {
        &self.locomotion
    }

    /// Mutable locomotion access for live tuning.
    pub fn locomotion_mut(&mut self) -> &mut LocomotionController {
        &mut self.locomotion
    }

    /// Advance the world by one frame.
    ///
    /// `dt` is the frame delta in seconds; callers guarantee it is
    /// non-negative and finite. Order is fixed: locomotion writes the
    /// character transform, the jump handshake settles, then the camera
    /// reads the fresh pose.
    pub fn frame(&mut self, dt: f32) {
        let actions = self.input.actions();

        if let Some(character) = self.scene.character.as_mut() {
            let acknowledge_jump = self.locomotion.update(character, &actions, dt);
            if acknowledge_jump {
                self.input.consume_jump();
            }
        }

        self.camera.update(&mut self.scene, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ClipSpec;
    use crate::locomotion::AnimationState;

    const DT: f32 = 1.0 / 60.0;

    fn demo_clips() -> AnimationMixer {
        AnimationMixer::with_clips([
            (AnimationState::Idle, ClipSpec::looping(2.0)),
            (AnimationState::WalkForward, ClipSpec::looping(1.0)),
            (AnimationState::JumpInPlace, ClipSpec::one_shot(0.5)),
        ])
    }

    fn world() -> DemoWorld {
        let mut world = DemoWorld::new(Tuning::default(), demo_clips(), 16.0 / 9.0);
        world.spawn_character(Vec3::ZERO, 0.0);
        world
    }

    #[test]
    fn test_frame_moves_character_then_camera() {
        let mut world = world();
        world.request_camera_mode(CameraMode::Tpp);
        // Finish the transition first.
        for _ in 0..120 {
            world.frame(DT);
        }

        world.handle_key(KeyCode::W, true);
        world.frame(DT);

        let character = world.scene.character.expect("spawned");
        let moved = character.position.z;
        assert!(moved > 0.0);

        // The camera chased the pose written *this* frame: the remaining
        // gap is exactly one damping step short of the fresh ideal. Had the
        // camera run first, the gap would be the full step `moved`.
        let ideal = world.camera().ideal_tpp_position(&character);
        let gap = (world.scene.camera.position - ideal).length();
        let follow_rate = world.camera().tuning().follow_lerp_speed;
        let expected = moved * (1.0 - crate::camera::damp_factor(follow_rate, DT));
        assert!(
            (gap - expected).abs() < 1e-4,
            "gap {gap} should be one damp step behind ({expected})"
        );
    }

    #[test]
    fn test_camera_toggle_key() {
        let mut world = world();
        assert_eq!(world.camera().mode(), CameraMode::Orbit);

        assert!(world.handle_key(KeyCode::C, true));
        assert_eq!(world.camera().target_mode(), CameraMode::Tpp);
        assert!(world.camera().is_transitioning());

        // Key release does not toggle again.
        world.handle_key(KeyCode::C, false);
        assert_eq!(world.camera().target_mode(), CameraMode::Tpp);
    }

    #[test]
    fn test_jump_handshake_unlatches_source() {
        let mut world = world();
        world.handle_key(KeyCode::Space, true);
        assert!(world.input_mut().actions().jump);

        // Run past the 0.5s jump clip.
        let mut jump_frames = 0;
        for _ in 0..60 {
            world.frame(DT);
            if world.locomotion().is_jumping() {
                jump_frames += 1;
            }
        }

        assert!(jump_frames > 0, "jump should have started");
        assert!(!world.locomotion().is_jumping());
        assert!(
            !world.input_mut().actions().jump,
            "completion should release the latch"
        );
    }

    #[test]
    fn test_held_jump_triggers_once() {
        let mut world = world();
        // Hold space for three seconds of frames; the key never repeats an
        // edge, so exactly one cycle runs.
        world.handle_key(KeyCode::Space, true);
        let mut starts = 0;
        let mut was_jumping = false;
        for _ in 0..180 {
            world.frame(DT);
            let jumping = world.locomotion().is_jumping();
            if jumping && !was_jumping {
                starts += 1;
            }
            was_jumping = jumping;
        }
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_pre_spawn_frames_are_safe() {
        let mut world = DemoWorld::new(Tuning::default(), demo_clips(), 16.0 / 9.0);
        world.handle_key(KeyCode::W, true);
        world.request_camera_mode(CameraMode::Tpp);
        // No character: locomotion skips, camera snapped instantly.
        world.frame(DT);
        assert_eq!(world.camera().mode(), CameraMode::Tpp);
        assert!(world.scene.character.is_none());
    }

    #[test]
    fn test_resize_does_not_disturb_state() {
        let mut world = world();
        world.request_camera_mode(CameraMode::Tpp);
        world.frame(DT);
        let progress = world.camera().transition().progress;

        world.resize(1.0);
        assert_eq!(world.camera().lens().aspect, 1.0);
        assert_eq!(world.camera().transition().progress, progress);
    }
}
