//! Stride Engine
//!
//! The gameplay core of a third-person character demo: a two-mode camera
//! controller with blended mode switches, and a locomotion controller that
//! drives a character and its animation state machine from discrete action
//! flags. Rendering, asset decoding and windowing are external - this crate
//! owns the per-frame state machines and math, nothing else.
//!
//! # Modules
//!
//! - [`camera`] - Two-mode camera controller, orbit manipulator, damping law
//! - [`locomotion`] - Movement integration and the animation state machine
//! - [`animation`] - Blend-weight clip mixer with cross-fades
//! - [`input`] - Windowing-agnostic action source with a latched jump
//! - [`scene`] - Character and camera transform store
//! - [`world`] - The wired-up per-frame orchestrator
//! - [`config`] - Live-tunable, validated configuration
//! - [`time`] - Wall-clock frame delta source
//!
//! # Example
//!
//! ```ignore
//! use stride_engine::animation::{AnimationMixer, ClipSpec};
//! use stride_engine::config::Tuning;
//! use stride_engine::input::KeyCode;
//! use stride_engine::locomotion::AnimationState;
//! use stride_engine::world::DemoWorld;
//! use glam::Vec3;
//!
//! let clips = AnimationMixer::with_clips([
//!     (AnimationState::Idle, ClipSpec::looping(2.0)),
//!     (AnimationState::WalkForward, ClipSpec::looping(1.0)),
//! ]);
//! let mut world = DemoWorld::new(Tuning::default(), clips, 16.0 / 9.0);
//! world.spawn_character(Vec3::ZERO, 0.0);
//!
//! // Each frame:
//! world.handle_key(KeyCode::W, true);
//! world.frame(1.0 / 60.0);
//! let view = world.scene.camera.view_matrix();
//! ```

pub mod animation;
pub mod camera;
pub mod config;
pub mod input;
pub mod locomotion;
pub mod scene;
pub mod time;
pub mod world;

// Re-export the types hosts touch every frame.
pub use animation::{AnimationMixer, ClipSpec};
pub use camera::{CameraController, CameraMode};
pub use config::Tuning;
pub use input::{ActionSet, KeyCode, KeyboardActions};
pub use locomotion::{AnimationState, LocomotionController};
pub use scene::{CameraTransform, CharacterTransform, Scene};
pub use time::FrameClock;
pub use world::DemoWorld;
