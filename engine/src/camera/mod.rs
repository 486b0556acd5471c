//! Camera Module
//!
//! The two-mode demo camera: mode state machine and transition blending in
//! [`controller`], the orbit manipulator in [`orbit`], projection in
//! [`lens`], and the shared damping law in [`damping`]. Window-system
//! agnostic - it only manages camera state and math.

pub mod controller;
pub mod damping;
pub mod lens;
pub mod orbit;

pub use controller::{ease_in_out_cubic, CameraController, CameraMode, CameraTransition};
pub use damping::{damp_f32, damp_factor, damp_vec3, MAX_DAMP_STEP};
pub use lens::CameraLens;
pub use orbit::OrbitRig;
