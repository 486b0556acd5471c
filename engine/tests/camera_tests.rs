//! Camera Tests - Mode Transitions and Follow Damping
//!
//! End-to-end coverage of the camera state machine through the public API:
//! transition invariants, damping behavior, and the full orbit-to-TPP
//! scenario.

use glam::Vec3;
use stride_engine::animation::{AnimationMixer, ClipSpec};
use stride_engine::camera::{damp_vec3, ease_in_out_cubic, CameraController, CameraMode};
use stride_engine::config::{CameraTuning, OrbitTuning, Tuning};
use stride_engine::locomotion::AnimationState;
use stride_engine::scene::Scene;
use stride_engine::world::DemoWorld;

const DT: f32 = 1.0 / 60.0;

fn minimal_clips() -> AnimationMixer {
    AnimationMixer::with_clips([(AnimationState::Idle, ClipSpec::looping(2.0))])
}

fn spawned_world() -> DemoWorld {
    let mut world = DemoWorld::new(Tuning::default(), minimal_clips(), 16.0 / 9.0);
    world.spawn_character(Vec3::ZERO, 0.0);
    world
}

// ============================================================================
// Transition invariants
// ============================================================================

#[test]
fn test_progress_monotone_and_mode_invariant() {
    let mut world = spawned_world();
    world.request_camera_mode(CameraMode::Tpp);

    let mut last_progress = 0.0;
    for _ in 0..180 {
        world.frame(DT);
        let camera = world.camera();
        let progress = camera.transition().progress;
        assert!(progress >= last_progress, "progress must never decrease");
        assert!(progress <= 1.0, "progress must clamp at 1");
        assert_eq!(
            camera.mode() == camera.target_mode(),
            !camera.is_transitioning(),
            "mode equals target exactly when idle"
        );
        last_progress = progress;
    }
    assert_eq!(last_progress, 1.0);
    assert_eq!(world.camera().mode(), CameraMode::Tpp);
}

#[test]
fn test_ease_curve_shape() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);

    let mut last = 0.0;
    for i in 1..=1000 {
        let t = ease_in_out_cubic(i as f32 / 1000.0);
        assert!(t >= last, "curve must be monotone");
        assert!(t - last < 0.005, "curve must be continuous");
        last = t;
    }
}

#[test]
fn test_re_request_is_noop_mid_transition() {
    let mut world = spawned_world();
    world.request_camera_mode(CameraMode::Tpp);
    for _ in 0..20 {
        world.frame(DT);
    }

    let progress = world.camera().transition().progress;
    let start = world.camera().transition().start_position;

    world.request_camera_mode(CameraMode::Tpp);
    assert_eq!(world.camera().transition().progress, progress);
    assert_eq!(world.camera().transition().start_position, start);
    assert!(world.camera().is_transitioning());
}

#[test]
fn test_retarget_mid_transition_has_no_jump() {
    let mut world = spawned_world();
    world.request_camera_mode(CameraMode::Tpp);
    for _ in 0..25 {
        world.frame(DT);
    }
    let rendered = world.scene.camera.position;

    world.request_camera_mode(CameraMode::Orbit);
    // The new blend starts exactly where the last frame rendered.
    assert_eq!(world.camera().transition().start_position, rendered);

    world.frame(DT);
    let step = (world.scene.camera.position - rendered).length();
    assert!(step < 0.05, "retarget frame moved {step}, expected continuity");
}

#[test]
fn test_transitions_always_complete() {
    // Irregular frame pacing cannot stall a transition: progress accrual is
    // delta-time scaled.
    let mut world = spawned_world();
    world.request_camera_mode(CameraMode::Tpp);

    let steps = [0.001, 0.05, 0.2, 0.016, 0.3, 0.7, 0.016, 0.4];
    let mut elapsed = 0.0;
    for dt in steps {
        world.frame(dt);
        elapsed += dt;
    }
    // transition_speed 0.7 finishes after 1/0.7 ~= 1.43s of accumulated time.
    assert!(elapsed > 1.43);
    assert!(!world.camera().is_transitioning());
    assert_eq!(world.camera().mode(), CameraMode::Tpp);
}

// ============================================================================
// End-to-end: orbit to TPP
// ============================================================================

#[test]
fn test_orbit_to_tpp_lands_on_ideal_offset() {
    let mut world = spawned_world();
    // Character 5 units along +X of the camera.
    world.scene.camera.position = Vec3::new(-5.0, 1.25, 0.0);
    world.scene.camera.look_target = Vec3::ZERO;

    world.request_camera_mode(CameraMode::Tpp);

    // 1 / transition_speed seconds is the full blend; run slightly past it.
    let speed = world.camera().tuning().transition_speed;
    let frames = ((1.0 / speed) / DT).ceil() as usize + 5;
    for _ in 0..frames {
        world.frame(DT);
    }

    assert_eq!(world.camera().mode(), CameraMode::Tpp);
    assert!(!world.camera().is_transitioning());

    let character = world.scene.character.expect("spawned");
    let ideal = world.camera().ideal_tpp_position(&character);
    let gap = (world.scene.camera.position - ideal).length();
    assert!(gap < 1e-4, "camera should sit on the ideal TPP offset, gap {gap}");
}

#[test]
fn test_tpp_to_orbit_keeps_azimuth_and_snaps_radius() {
    let mut world = spawned_world();
    world.request_camera_mode(CameraMode::Tpp);
    for _ in 0..120 {
        world.frame(DT);
    }

    world.request_camera_mode(CameraMode::Orbit);
    for _ in 0..120 {
        world.frame(DT);
    }

    assert_eq!(world.camera().mode(), CameraMode::Orbit);
    let character = world.scene.character.expect("spawned");
    let tuning = world.camera().tuning();
    let offset = world.scene.camera.position - character.position;
    let horizontal = Vec3::new(offset.x, 0.0, offset.z).length();
    // Distance snapped to the orbit radius, height to the orbit height.
    assert!((horizontal - tuning.orbit_distance).abs() < 0.05);
    assert!((offset.y - tuning.orbit_height).abs() < 0.05);
    // Behind the character, where TPP left the camera (azimuth preserved).
    assert!(offset.z < 0.0);
}

// ============================================================================
// Damping law
// ============================================================================

#[test]
fn test_damping_contracts_and_converges() {
    let target = Vec3::new(7.0, -3.0, 2.0);
    let mut current = Vec3::ZERO;
    let mut last_distance = (target - current).length();

    for _ in 0..600 {
        current = damp_vec3(current, target, 3.5, DT);
        let distance = (target - current).length();
        assert!(distance < last_distance);
        last_distance = distance;
    }
    assert!(last_distance < 1e-3);
}

#[test]
fn test_damping_is_framerate_independent() {
    let target = Vec3::X * 10.0;
    let rate = 8.0;

    // One 90ms step vs three 30ms steps vs nine 10ms steps.
    let one = damp_vec3(Vec3::ZERO, target, rate, 0.09);

    let mut three = Vec3::ZERO;
    for _ in 0..3 {
        three = damp_vec3(three, target, rate, 0.03);
    }

    let mut nine = Vec3::ZERO;
    for _ in 0..9 {
        nine = damp_vec3(nine, target, rate, 0.01);
    }

    assert!((one - three).length() < 1e-4);
    assert!((one - nine).length() < 1e-4);
}

#[test]
fn test_tpp_follow_uses_two_rates() {
    let mut world = spawned_world();
    world.request_camera_mode(CameraMode::Tpp);
    for _ in 0..120 {
        world.frame(DT);
    }

    // Teleport the character sideways; the aim closes its gap faster than
    // the seat does.
    world
        .scene
        .character
        .as_mut()
        .expect("spawned")
        .position = Vec3::new(6.0, 0.0, 0.0);
    let character = *world.scene.character.as_ref().expect("spawned");
    world.frame(DT);

    let camera = world.camera();
    let position_gap =
        (world.scene.camera.position - camera.ideal_tpp_position(&character)).length();
    let look_gap = (world.scene.camera.look_target - camera.look_at_anchor(&character)).length();
    assert!(look_gap < position_gap);
}

// ============================================================================
// Pre-spawn and resize behavior
// ============================================================================

#[test]
fn test_pre_spawn_mode_requests_never_blend() {
    let scene = Scene::new();
    let mut controller = CameraController::new(
        CameraTuning::default(),
        OrbitTuning::default(),
        16.0 / 9.0,
        &scene.camera,
    );

    controller.request_mode(CameraMode::Tpp, &scene.camera, None);
    assert_eq!(controller.mode(), CameraMode::Tpp);
    assert!(!controller.is_transitioning());
    assert!(!controller.rig().is_enabled());

    controller.request_mode(CameraMode::Orbit, &scene.camera, None);
    assert_eq!(controller.mode(), CameraMode::Orbit);
    assert!(!controller.is_transitioning());
    assert!(controller.rig().is_enabled());
}

#[test]
fn test_resize_updates_projection_only() {
    let mut world = spawned_world();
    world.request_camera_mode(CameraMode::Tpp);
    world.frame(DT);

    let progress = world.camera().transition().progress;
    let mode = world.camera().mode();
    let camera_pose = world.scene.camera;

    world.resize(21.0 / 9.0);

    assert_eq!(world.camera().lens().aspect, 21.0 / 9.0);
    assert_eq!(world.camera().transition().progress, progress);
    assert_eq!(world.camera().mode(), mode);
    assert_eq!(world.scene.camera, camera_pose);
}
