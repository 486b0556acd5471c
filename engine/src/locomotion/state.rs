//! Locomotion Animation States
//!
//! The eight-state machine driven by the action flags, and the priority
//! ladder that resolves which state should be active on a given frame.

use crate::input::ActionSet;

/// Animation states of the character. Exactly one is active at a time.
///
/// The variants map one-to-one onto the character model's clip list; the
/// `Jump*` variants are only entered while a jump is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    WalkForward,
    WalkBackward,
    RunForward,
    RunBackward,
    JumpInPlace,
    JumpForward,
    JumpBackward,
}

impl AnimationState {
    /// Whether this is one of the in-flight jump states.
    pub fn is_jump(&self) -> bool {
        matches!(
            self,
            AnimationState::JumpInPlace
                | AnimationState::JumpForward
                | AnimationState::JumpBackward
        )
    }

    /// Whether this is a ground locomotion cycle (walk or run).
    pub fn is_moving(&self) -> bool {
        matches!(
            self,
            AnimationState::WalkForward
                | AnimationState::WalkBackward
                | AnimationState::RunForward
                | AnimationState::RunBackward
        )
    }
}

/// Pick the jump variant matching the current movement input.
pub fn jump_state_for(actions: &ActionSet) -> AnimationState {
    if actions.forward {
        AnimationState::JumpForward
    } else if actions.backward {
        AnimationState::JumpBackward
    } else {
        AnimationState::JumpInPlace
    }
}

/// Resolve the animation state for this frame.
///
/// Priority order: in-flight jump, then forward, then backward, then
/// lateral-only input (which retains an ongoing walk/run cycle so steering
/// does not interrupt the gait), then idle.
pub fn resolve_state(
    actions: &ActionSet,
    current: AnimationState,
    is_jumping: bool,
) -> AnimationState {
    if is_jumping {
        return jump_state_for(actions);
    }

    if actions.forward {
        return if actions.sprint {
            AnimationState::RunForward
        } else {
            AnimationState::WalkForward
        };
    }

    if actions.backward {
        return if actions.sprint {
            AnimationState::RunBackward
        } else {
            AnimationState::WalkBackward
        };
    }

    if actions.left || actions.right {
        if current.is_moving() {
            return current;
        }
        return AnimationState::Idle;
    }

    AnimationState::Idle
}
