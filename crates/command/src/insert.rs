//! Edit intentions the modal engine issues while replaying insert-mode input.

use crate::native::{NativeCommand, std2k};

/// An abstract insert-mode edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InsertCommand {
	Backspace,
	Delete,
	/// Insert a single typed character.
	DirectInsert(char),
	/// Overwrite the character under the caret (replace mode).
	DirectReplace(char),
	InsertTab,
	InsertNewLine,
	/// Insert a run of text in one edit.
	InsertText(String),
	/// Remove all indentation before the caret.
	DeleteAllIndent,
}

impl InsertCommand {
	/// The native command that replays this edit through the host pipeline.
	///
	/// Edits the host has no single command for return `None`.
	pub fn to_native(&self) -> Option<NativeCommand> {
		let native = match self {
			Self::Backspace => NativeCommand::std2k(std2k::BACKSPACE),
			Self::Delete => NativeCommand::std2k(std2k::DELETE),
			Self::DirectInsert(c) => NativeCommand::type_char(*c),
			Self::InsertTab => NativeCommand::std2k(std2k::TAB),
			Self::InsertNewLine => NativeCommand::std2k(std2k::RETURN),
			Self::DirectReplace(_) | Self::InsertText(_) | Self::DeleteAllIndent => return None,
		};
		Some(native)
	}

	pub fn is_new_line(&self) -> bool {
		matches!(self, Self::InsertNewLine)
	}
}
