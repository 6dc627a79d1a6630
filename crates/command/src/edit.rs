//! Recognized native commands expressed in the modal engine's vocabulary.

use relay_primitives::Key;

use crate::native::NativeCommand;

/// Non-key host commands the engine has its own semantics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtherCommand {
	Undo,
	Redo,
	Paste,
	Comment,
	Uncomment,
}

/// What a recognized native command means to the modal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditCommandKind {
	/// Plain key input, normalized with the host's modifier state.
	KeyInput(Key),
	/// A command bound natively by the host. These always win over the engine.
	HostCommand,
	/// Navigation to a symbol definition.
	GoToDefinition,
	Other(OtherCommand),
}

/// A native command the relay recognized, plus the descriptor it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditCommand {
	kind: EditCommandKind,
	native: NativeCommand,
}

impl EditCommand {
	pub fn new(kind: EditCommandKind, native: NativeCommand) -> Self {
		Self { kind, native }
	}

	pub fn kind(&self) -> EditCommandKind {
		self.kind
	}

	/// The descriptor this command was decoded from.
	pub fn native(&self) -> &NativeCommand {
		&self.native
	}

	pub fn has_key_input(&self) -> bool {
		matches!(self.kind, EditCommandKind::KeyInput(_))
	}

	pub fn key_input(&self) -> Option<Key> {
		match self.kind {
			EditCommandKind::KeyInput(key) => Some(key),
			_ => None,
		}
	}

	pub fn is_host_command(&self) -> bool {
		matches!(self.kind, EditCommandKind::HostCommand)
	}

	pub fn is_go_to_definition(&self) -> bool {
		matches!(self.kind, EditCommandKind::GoToDefinition)
	}
}

impl std::fmt::Display for EditCommand {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			EditCommandKind::KeyInput(key) => write!(f, "key:{key}"),
			EditCommandKind::HostCommand => write!(f, "host:{}", self.native),
			EditCommandKind::GoToDefinition => f.write_str("goto-definition"),
			EditCommandKind::Other(other) => write!(f, "other:{other:?}"),
		}
	}
}
