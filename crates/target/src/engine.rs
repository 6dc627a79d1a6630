//! Interface of the embedded modal engine, as far as command routing needs it.

use relay_primitives::{Key, Mode};

/// The modal editing engine attached to one surface.
///
/// The command target never interprets keys itself; it asks the engine.
pub trait ModalEngine {
	fn mode(&self) -> Mode;

	/// Returns true if the engine would consume `key` in its current state.
	fn can_process(&self, key: &Key) -> bool;

	/// Feeds `key` to the engine. Returns true if it was handled.
	fn process(&self, key: &Key) -> bool;

	/// Returns true while the engine replays many edits as one unit
	/// (repeat of the last change, macro playback).
	fn in_bulk_operation(&self) -> bool;
}
