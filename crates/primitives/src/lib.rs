//! Core input types for the command relay: keys, modifiers, and engine modes.

/// Key event types.
pub mod key;
/// Modal engine mode definitions.
pub mod mode;

pub use key::{Key, KeyCode, Modifiers};
pub use mode::Mode;
