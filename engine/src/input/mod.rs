//! Input Module
//!
//! Platform-agnostic action input for the demo. The module is decoupled
//! from any specific windowing system: hosts translate their own key events
//! into [`KeyCode`] values and poll an [`ActionSet`] once per frame.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_engine::input::{KeyboardActions, KeyCode};
//!
//! let mut input = KeyboardActions::new();
//! input.handle_key(KeyCode::W, true);
//! let actions = input.actions();
//! if actions.forward {
//!     // Advance the character
//! }
//! ```

pub mod keyboard;

pub use keyboard::{ActionSet, KeyCode, KeyboardActions};
