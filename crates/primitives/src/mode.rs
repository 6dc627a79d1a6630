//! Modal engine modes as seen by the command relay.

/// Coarse mode of the modal engine.
///
/// The relay only needs to know whether typed text is interpreted as
/// commands or inserted, so engine-specific sub-modes collapse here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
	#[default]
	Normal,
	Insert,
	Replace,
	Visual,
	/// Command-line entry (`:`).
	Command,
	/// The engine is switched off for this surface and consumes nothing.
	Disabled,
}

impl Mode {
	/// Returns true for modes where typed characters reach the buffer.
	pub fn is_insert_like(self) -> bool {
		matches!(self, Mode::Insert | Mode::Replace)
	}
}
