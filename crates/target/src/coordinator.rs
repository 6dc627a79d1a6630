//! Discarded-key slot shared between the command target and the modal engine.
//!
//! When the engine decides a key press must not reach the host (it already
//! acted on it through another input path), it records the key here. The next
//! exec carrying that key is swallowed instead of being handled a second time.
//! The slot lives for at most one dispatch: the command target clears it on
//! entry and on every exit.

use std::cell::Cell;

use relay_primitives::Key;

#[derive(Debug, Default)]
pub struct KeyCoordinator {
	discarded: Cell<Option<Key>>,
}

impl KeyCoordinator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks `key` as discarded, replacing any previous key.
	pub fn discard(&self, key: Key) {
		self.discarded.set(Some(key));
	}

	pub fn discarded(&self) -> Option<Key> {
		self.discarded.get()
	}

	pub fn is_discarded(&self, key: &Key) -> bool {
		self.discarded.get().as_ref() == Some(key)
	}

	/// Empties the slot and returns what it held.
	pub fn take(&self) -> Option<Key> {
		self.discarded.take()
	}

	pub fn clear(&self) {
		self.discarded.set(None);
	}

	/// Returns a guard that empties the slot when dropped.
	pub(crate) fn clear_on_drop(&self) -> ClearOnDrop<'_> {
		ClearOnDrop(self)
	}
}

/// Empties a [`KeyCoordinator`] on drop, unwinding included.
pub(crate) struct ClearOnDrop<'a>(&'a KeyCoordinator);

impl Drop for ClearOnDrop<'_> {
	fn drop(&mut self) {
		self.0.clear();
	}
}
