//! Structural decoding of native descriptors into [`EditCommand`]s.
//!
//! Decoding is pure: it looks only at `(group, id, payload)` and the modifier
//! state handed in. Host-state vetoes (automation, incremental search) live in
//! the classifier on top of this.

use relay_primitives::{Key, KeyCode, Modifiers};

use crate::edit::{EditCommand, EditCommandKind, OtherCommand};
use crate::native::{CommandGroup, NativeCommand, std2k, std97};


/// Decodes `native` using the current keyboard `modifiers`.
///
/// Returns `None` for unknown groups and malformed typing commands. Unknown ids
/// within a known group decode to [`EditCommandKind::HostCommand`].
pub fn decode(native: &NativeCommand, modifiers: Modifiers) -> Option<EditCommand> {
	let kind = if native.group == CommandGroup::STANDARD_2K {
		decode_std2k(native)?
	} else if native.group == CommandGroup::STANDARD_97 {
		decode_std97(native)
	} else {
		return None;
	};

	let kind = match kind {
		EditCommandKind::KeyInput(key) => EditCommandKind::KeyInput(key.with_modifiers(modifiers)),
		other => other,
	};
	Some(EditCommand::new(kind, *native))
}

fn decode_std2k(native: &NativeCommand) -> Option<EditCommandKind> {
	let key = |code: KeyCode| Some(EditCommandKind::KeyInput(Key::new(code)));
	let shifted = |code: KeyCode| Some(EditCommandKind::KeyInput(Key::new(code).shifted()));

	match native.id {
		std2k::TYPECHAR => native.input.map(|c| EditCommandKind::KeyInput(Key::char(c))),
		std2k::BACKSPACE => key(KeyCode::Backspace),
		std2k::RETURN => key(KeyCode::Enter),
		std2k::TAB => key(KeyCode::Tab),
		std2k::BACKTAB => shifted(KeyCode::Tab),
		std2k::DELETE => key(KeyCode::Delete),
		std2k::CANCEL => key(KeyCode::Escape),
		std2k::LEFT => key(KeyCode::Left),
		std2k::LEFT_EXT => shifted(KeyCode::Left),
		std2k::RIGHT => key(KeyCode::Right),
		std2k::RIGHT_EXT => shifted(KeyCode::Right),
		std2k::UP => key(KeyCode::Up),
		std2k::UP_EXT => shifted(KeyCode::Up),
		std2k::DOWN => key(KeyCode::Down),
		std2k::DOWN_EXT => shifted(KeyCode::Down),
		std2k::HOME => key(KeyCode::Home),
		std2k::HOME_EXT => shifted(KeyCode::Home),
		std2k::END => key(KeyCode::End),
		std2k::END_EXT => shifted(KeyCode::End),
		std2k::PAGEUP => key(KeyCode::PageUp),
		std2k::PAGEUP_EXT => shifted(KeyCode::PageUp),
		std2k::PAGEDN => key(KeyCode::PageDown),
		std2k::PAGEDN_EXT => shifted(KeyCode::PageDown),
		std2k::COMMENT_BLOCK => Some(EditCommandKind::Other(OtherCommand::Comment)),
		std2k::UNCOMMENT_BLOCK => Some(EditCommandKind::Other(OtherCommand::Uncomment)),
		_ => Some(EditCommandKind::HostCommand),
	}
}

fn decode_std97(native: &NativeCommand) -> EditCommandKind {
	match native.id {
		std97::UNDO => EditCommandKind::Other(OtherCommand::Undo),
		std97::REDO => EditCommandKind::Other(OtherCommand::Redo),
		std97::PASTE => EditCommandKind::Other(OtherCommand::Paste),
		std97::GOTO_DEFINITION => EditCommandKind::GoToDefinition,
		_ => EditCommandKind::HostCommand,
	}
}
