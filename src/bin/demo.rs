//! Headless demo session.
//!
//! Stands in for the external render loop: spawns the character, scripts a
//! few seconds of input (walk, steer, sprint, jump, camera toggles) and
//! logs the transforms the renderer would consume. Pass a tuning JSON path
//! as the first argument to run with adjusted values.

use std::time::Duration;

use glam::Vec3;

use stride_engine::animation::{AnimationMixer, ClipSpec};
use stride_engine::config::Tuning;
use stride_engine::input::KeyCode;
use stride_engine::locomotion::AnimationState;
use stride_engine::time::FrameClock;
use stride_engine::world::DemoWorld;

/// Total scripted runtime in seconds.
const RUN_SECONDS: f32 = 9.0;

/// Scripted key events: (time, key, pressed).
const SCRIPT: &[(f32, KeyCode, bool)] = &[
    (0.5, KeyCode::W, true),
    (1.5, KeyCode::C, true), // toggle into TPP
    (1.6, KeyCode::C, false),
    (2.0, KeyCode::A, true),
    (3.0, KeyCode::A, false),
    (3.0, KeyCode::ShiftLeft, true),
    (4.0, KeyCode::ShiftLeft, false),
    (4.2, KeyCode::Space, true),
    (4.4, KeyCode::Space, false),
    (5.5, KeyCode::C, true), // back to orbit
    (5.6, KeyCode::C, false),
    (6.0, KeyCode::W, false),
];

/// Clip set matching the demo character model's animation list.
fn demo_clips() -> AnimationMixer {
    AnimationMixer::with_clips([
        (AnimationState::Idle, ClipSpec::looping(2.4)),
        (AnimationState::JumpInPlace, ClipSpec::one_shot(0.8)),
        (AnimationState::JumpBackward, ClipSpec::one_shot(0.9)),
        (AnimationState::JumpForward, ClipSpec::one_shot(0.9)),
        (AnimationState::RunBackward, ClipSpec::looping(0.7)),
        (AnimationState::RunForward, ClipSpec::looping(0.7)),
        (AnimationState::WalkBackward, ClipSpec::looping(1.1)),
        (AnimationState::WalkForward, ClipSpec::looping(1.1)),
    ])
}

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    match Tuning::load(path.as_ref()) {
        Ok(tuning) => {
            log::info!("[Demo] Loaded tuning from {path}");
            tuning
        }
        Err(e) => {
            log::warn!("[Demo] Could not load tuning from {path}: {e}, using defaults");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tuning = load_tuning();
    let mut world = DemoWorld::new(tuning, demo_clips(), 16.0 / 9.0);
    world.spawn_character(Vec3::ZERO, 0.0);

    let mut clock = FrameClock::new();
    let mut elapsed = 0.0_f32;
    let mut script_cursor = 0;
    let mut next_report = 0.0_f32;

    while elapsed < RUN_SECONDS {
        std::thread::sleep(Duration::from_millis(16));
        let dt = clock.tick();
        elapsed += dt;

        while script_cursor < SCRIPT.len() && SCRIPT[script_cursor].0 <= elapsed {
            let (_, key, pressed) = SCRIPT[script_cursor];
            world.handle_key(key, pressed);
            script_cursor += 1;
        }

        world.frame(dt);

        if elapsed >= next_report {
            next_report += 0.5;
            let camera = world.scene.camera;
            if let Some(character) = world.scene.character {
                log::info!(
                    "[Demo] t={elapsed:4.1}s  {:?}/{:?}  state={:?}  char=({:.2}, {:.2}, {:.2})  cam=({:.2}, {:.2}, {:.2})",
                    world.camera().mode(),
                    world.camera().target_mode(),
                    world.locomotion().state(),
                    character.position.x,
                    character.position.y,
                    character.position.z,
                    camera.position.x,
                    camera.position.y,
                    camera.position.z,
                );
            }
        }
    }

    log::info!("[Demo] Done");
}
