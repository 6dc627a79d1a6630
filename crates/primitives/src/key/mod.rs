//! Normalized key input consumed by the modal engine.

mod modifiers;

pub use modifiers::Modifiers;

/// Key identity, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A printable character.
	Char(char),
	Backspace,
	Enter,
	Tab,
	Delete,
	Escape,
	Left,
	Right,
	Up,
	Down,
	Home,
	End,
	PageUp,
	PageDown,
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	/// The key that was pressed.
	pub code: KeyCode,
	/// Modifiers held during the press.
	pub modifiers: Modifiers,
}

impl Key {
	/// Creates an unmodified key.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Creates an unmodified character key.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c))
	}

	/// Returns a copy carrying the given modifiers in addition to its own.
	pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self {
			modifiers: self.modifiers.union(modifiers),
			..self
		}
	}

	/// Returns a copy with Shift added.
	pub fn shifted(self) -> Self {
		self.with_modifiers(Modifiers::SHIFT)
	}

	/// Returns the character for [`KeyCode::Char`] keys.
	pub fn as_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) => Some(c),
			_ => None,
		}
	}

	/// Returns true if pressing this key in insert mode would change buffer text.
	///
	/// Ctrl/Alt chords are treated as commands, not text.
	pub fn edits_text(&self) -> bool {
		if self.modifiers.ctrl || self.modifiers.alt {
			return false;
		}
		matches!(
			self.code,
			KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Enter | KeyCode::Tab | KeyCode::Delete
		)
	}

	/// Parses a modifier-free key name as used in configuration (`"enter"`, `"pageup"`, `"x"`).
	pub fn from_name(name: &str) -> Option<Self> {
		let code = match name.to_ascii_lowercase().as_str() {
			"backspace" | "bs" => KeyCode::Backspace,
			"enter" | "return" | "ret" => KeyCode::Enter,
			"tab" => KeyCode::Tab,
			"delete" | "del" => KeyCode::Delete,
			"escape" | "esc" => KeyCode::Escape,
			"left" => KeyCode::Left,
			"right" => KeyCode::Right,
			"up" => KeyCode::Up,
			"down" => KeyCode::Down,
			"home" => KeyCode::Home,
			"end" => KeyCode::End,
			"pageup" | "pgup" => KeyCode::PageUp,
			"pagedown" | "pgdn" => KeyCode::PageDown,
			"space" => KeyCode::Char(' '),
			_ => {
				let mut chars = name.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => KeyCode::Char(c),
					_ => return None,
				}
			}
		};
		Some(Self::new(code))
	}
}

impl std::fmt::Display for KeyCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			KeyCode::Char(' ') => f.write_str("space"),
			KeyCode::Char(c) => write!(f, "{c}"),
			KeyCode::Backspace => f.write_str("backspace"),
			KeyCode::Enter => f.write_str("enter"),
			KeyCode::Tab => f.write_str("tab"),
			KeyCode::Delete => f.write_str("delete"),
			KeyCode::Escape => f.write_str("esc"),
			KeyCode::Left => f.write_str("left"),
			KeyCode::Right => f.write_str("right"),
			KeyCode::Up => f.write_str("up"),
			KeyCode::Down => f.write_str("down"),
			KeyCode::Home => f.write_str("home"),
			KeyCode::End => f.write_str("end"),
			KeyCode::PageUp => f.write_str("pageup"),
			KeyCode::PageDown => f.write_str("pagedown"),
		}
	}
}

impl std::fmt::Display for Key {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}", self.modifiers, self.code)
	}
}
