//! Keyboard Action Source
//!
//! Translates key press/release events into the per-frame action flags the
//! locomotion controller consumes. Decoupled from any windowing system -
//! hosts map their native key events onto [`KeyCode`] and feed them in.
//!
//! The jump flag is latched: it is raised on a press edge and stays up
//! until the consumer acknowledges the press via
//! [`KeyboardActions::consume_jump`]. Releasing the key never clears it,
//! and holding the key re-arms only after the acknowledgement plus a fresh
//! press.

use static_assertions::assert_eq_size;

/// Generic key codes for the demo's bindings, independent of the windowing
/// system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,

    // Arrow keys double as movement
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Camera mode toggle (handled by the host, not the action source).
    C,

    /// Catch-all for unhandled keys.
    Unknown,
}

/// The six action flags polled once per frame.
///
/// Five of them mirror the physical key state; `jump` is edge-triggered and
/// cleared only by the consumer (see module docs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    /// W / ArrowUp - move forward.
    pub forward: bool,
    /// S / ArrowDown - move backward.
    pub backward: bool,
    /// A / ArrowLeft - steer left.
    pub left: bool,
    /// D / ArrowRight - steer right.
    pub right: bool,
    /// Shift - sprint.
    pub sprint: bool,
    /// Space - latched jump request.
    pub jump: bool,
}

// Six independent booleans, nothing more.
assert_eq_size!(ActionSet, [u8; 6]);

impl ActionSet {
    /// Check if any directional input is held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Tracks held keys and produces a fresh [`ActionSet`] each frame.
#[derive(Debug, Clone, Default)]
pub struct KeyboardActions {
    set: ActionSet,
    /// Physical state of the jump key, used for edge detection.
    jump_held: bool,
}

impl KeyboardActions {
    /// Create an action source with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update action state from a key press or release.
    ///
    /// Returns `true` if the key was bound to an action; unmapped keys are
    /// ignored and return `false`.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.set.forward = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.set.backward = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.set.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.set.right = pressed;
                true
            }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.set.sprint = pressed;
                true
            }
            KeyCode::Space => {
                // Latch on the press edge only; release leaves the latch up
                // for the consumer to acknowledge.
                if pressed && !self.jump_held {
                    self.set.jump = true;
                }
                self.jump_held = pressed;
                true
            }
            _ => false,
        }
    }

    /// The current action flags.
    pub fn actions(&self) -> ActionSet {
        self.set
    }

    /// Acknowledge the latched jump press. Called by the frame driver when
    /// the locomotion controller reports the jump cycle finished (or was
    /// skipped).
    pub fn consume_jump(&mut self) {
        self.set.jump = false;
    }

    /// Release every key and clear the latch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
