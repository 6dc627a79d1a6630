//! Key modifier types (Ctrl, Alt, Shift).

/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		ctrl: false,
		alt: true,
		shift: false,
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		ctrl: false,
		alt: false,
		shift: true,
	};

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns the modifiers held in either `self` or `other`.
	pub fn union(self, other: Self) -> Self {
		Self {
			ctrl: self.ctrl || other.ctrl,
			alt: self.alt || other.alt,
			shift: self.shift || other.shift,
		}
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

impl std::fmt::Display for Modifiers {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.ctrl {
			f.write_str("C-")?;
		}
		if self.alt {
			f.write_str("A-")?;
		}
		if self.shift {
			f.write_str("S-")?;
		}
		Ok(())
	}
}
