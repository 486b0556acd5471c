//! Locomotion Controller
//!
//! Integrates the per-frame action flags into the character transform and
//! drives the animation state machine.
//!
//! Movement is tank-style by design: left/right input steers (yaw plus a
//! small lateral drift) and only while forward or backward is also held -
//! there is no free strafing. The displacement is computed in the
//! character's local space, rotated into world space by the orientation the
//! character *entered* the frame with, and only then is the yaw delta
//! applied.
//!
//! Jumping is a handshake: a latched jump press starts a one-shot jump clip
//! and is ignored while a jump is in flight; the clip's completion signal
//! clears the in-flight flag, and the frame driver forwards the same signal
//! to the action source to release the latch.

use glam::Vec3;

use crate::animation::AnimationMixer;
use crate::config::LocomotionTuning;
use crate::input::ActionSet;
use crate::locomotion::state::{jump_state_for, resolve_state, AnimationState};
use crate::scene::CharacterTransform;

/// Drives the character transform and animation state from action flags.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    mixer: AnimationMixer,
    state: AnimationState,
    is_jumping: bool,
}

impl LocomotionController {
    /// Create a controller over a pre-registered clip set.
    ///
    /// Starts in the idle state with the idle clip playing (when bound).
    pub fn new(tuning: LocomotionTuning, mut mixer: AnimationMixer) -> Self {
        if mixer.has_clip(AnimationState::Idle) {
            mixer.play(AnimationState::Idle);
        }
        Self {
            tuning,
            mixer,
            state: AnimationState::Idle,
            is_jumping: false,
        }
    }

    /// The active animation state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether a jump is currently in flight.
    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    /// The underlying mixer (playback weights and times).
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    /// Current tuning values.
    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    /// Mutable tuning access for live adjustment between frames.
    pub fn tuning_mut(&mut self) -> &mut LocomotionTuning {
        &mut self.tuning
    }

    /// Advance one frame: integrate movement, update the animation state,
    /// and advance clip playback.
    ///
    /// Returns `true` when the latched jump press should be acknowledged -
    /// either because the jump clip completed this frame or because the
    /// press had to be skipped (no clip bound). The frame driver forwards
    /// that to [`KeyboardActions::consume_jump`](crate::input::KeyboardActions::consume_jump).
    pub fn update(
        &mut self,
        character: &mut CharacterTransform,
        actions: &ActionSet,
        dt: f32,
    ) -> bool {
        let mut displacement = Vec3::ZERO;

        let speed = if actions.sprint {
            self.tuning.speed * self.tuning.sprint_multiplier
        } else {
            self.tuning.speed
        };

        if actions.forward {
            displacement.z += speed * dt;
        }
        if actions.backward {
            displacement.z -= speed * dt;
        }

        // Steering only engages while moving forward or backward.
        let mut yaw_delta = 0.0;
        if actions.left && (actions.forward || actions.backward) {
            yaw_delta = self.tuning.rotation_speed * dt;
            displacement.x -= speed * dt;
        }
        if actions.right && (actions.forward || actions.backward) {
            yaw_delta = -self.tuning.rotation_speed * dt;
            displacement.x += speed * dt;
        }

        let mut acknowledge_jump = false;
        if actions.jump && !self.is_jumping {
            acknowledge_jump |= !self.start_jump(actions);
        }

        let new_state = resolve_state(actions, self.state, self.is_jumping);
        self.change_animation(new_state);

        // Translate with the orientation the frame started with, then turn.
        character.position += character.rotation() * displacement;
        character.yaw += yaw_delta;

        self.mixer.update(dt);

        for finished in self.mixer.take_just_finished() {
            if finished.is_jump() {
                self.is_jumping = false;
                acknowledge_jump = true;
            }
        }

        acknowledge_jump
    }

    /// Begin a jump cycle. Returns `false` when no clip is bound for the
    /// chosen jump state, in which case the jump is skipped outright (a
    /// jump with no clip would never signal completion).
    fn start_jump(&mut self, actions: &ActionSet) -> bool {
        let jump_state = jump_state_for(actions);
        if !self.mixer.has_clip(jump_state) {
            log::warn!("[Locomotion] No clip bound for {jump_state:?}, jump skipped");
            return false;
        }

        self.is_jumping = true;
        self.mixer
            .cross_fade(self.state, jump_state, self.tuning.jump_fade_duration);
        self.state = jump_state;
        true
    }

    /// Cross-fade into a new state. Unbound clips skip the change so the
    /// state machine keeps running over an incomplete clip set.
    fn change_animation(&mut self, new_state: AnimationState) {
        if new_state == self.state {
            return;
        }
        if !self.mixer.has_clip(new_state) {
            return;
        }

        self.mixer
            .cross_fade(self.state, new_state, self.tuning.fade_duration);
        self.state = new_state;
    }
}
