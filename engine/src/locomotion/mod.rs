//! Locomotion Module
//!
//! Character movement integration and the animation state machine. The
//! controller consumes the per-frame [`ActionSet`](crate::input::ActionSet),
//! writes the character transform, and drives the
//! [`AnimationMixer`](crate::animation::AnimationMixer).

pub mod controller;
pub mod state;

pub use controller::LocomotionController;
pub use state::AnimationState;
