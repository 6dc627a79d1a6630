//! Host command descriptors, result codes, and status flags.

use bitflags::bitflags;
use uuid::Uuid;

/// Identifier of a host command group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandGroup(Uuid);

impl CommandGroup {
	/// Text-editor command set (typing, caret movement, editor-local actions).
	pub const STANDARD_2K: Self = Self(Uuid::from_u128(0x1496a755_94de_11d0_8c3f_00c04fc2aae2));
	/// Shell command set (clipboard, undo/redo, navigation).
	pub const STANDARD_97: Self = Self(Uuid::from_u128(0x5efc7975_14bc_11cf_9b2b_00aa00573819));

	pub const fn from_uuid(uuid: Uuid) -> Self {
		Self(uuid)
	}

	/// Short name for well-known groups.
	pub fn known_name(&self) -> Option<&'static str> {
		if *self == Self::STANDARD_2K {
			Some("std2k")
		} else if *self == Self::STANDARD_97 {
			Some("std97")
		} else {
			None
		}
	}
}

impl std::fmt::Display for CommandGroup {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.known_name() {
			Some(name) => f.write_str(name),
			None => write!(f, "{{{}}}", self.0),
		}
	}
}

/// Numeric command id within a [`CommandGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub u32);

/// Command ids of [`CommandGroup::STANDARD_2K`].
pub mod std2k {
	use super::CommandId;

	pub const TYPECHAR: CommandId = CommandId(1);
	pub const BACKSPACE: CommandId = CommandId(2);
	pub const RETURN: CommandId = CommandId(3);
	pub const TAB: CommandId = CommandId(4);
	pub const BACKTAB: CommandId = CommandId(5);
	pub const DELETE: CommandId = CommandId(6);
	pub const LEFT: CommandId = CommandId(7);
	pub const LEFT_EXT: CommandId = CommandId(8);
	pub const RIGHT: CommandId = CommandId(9);
	pub const RIGHT_EXT: CommandId = CommandId(10);
	pub const UP: CommandId = CommandId(11);
	pub const UP_EXT: CommandId = CommandId(12);
	pub const DOWN: CommandId = CommandId(13);
	pub const DOWN_EXT: CommandId = CommandId(14);
	pub const HOME: CommandId = CommandId(15);
	pub const HOME_EXT: CommandId = CommandId(16);
	pub const END: CommandId = CommandId(17);
	pub const END_EXT: CommandId = CommandId(18);
	pub const PAGEUP: CommandId = CommandId(27);
	pub const PAGEUP_EXT: CommandId = CommandId(28);
	pub const PAGEDN: CommandId = CommandId(29);
	pub const PAGEDN_EXT: CommandId = CommandId(30);
	pub const CANCEL: CommandId = CommandId(103);
	pub const COMMENT_BLOCK: CommandId = CommandId(136);
	pub const UNCOMMENT_BLOCK: CommandId = CommandId(137);
}

/// Command ids of [`CommandGroup::STANDARD_97`].
pub mod std97 {
	use super::CommandId;

	pub const COPY: CommandId = CommandId(15);
	pub const CUT: CommandId = CommandId(16);
	pub const DELETE: CommandId = CommandId(17);
	pub const PASTE: CommandId = CommandId(26);
	pub const REDO: CommandId = CommandId(29);
	pub const UNDO: CommandId = CommandId(43);
	pub const GOTO_DEFINITION: CommandId = CommandId(935);
}

/// A native command descriptor: group, id, and optional typed-character payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeCommand {
	pub group: CommandGroup,
	pub id: CommandId,
	/// Character argument, only meaningful for typing commands.
	pub input: Option<char>,
}

impl NativeCommand {
	pub const fn new(group: CommandGroup, id: CommandId) -> Self {
		Self { group, id, input: None }
	}

	/// Shorthand for a [`CommandGroup::STANDARD_2K`] command.
	pub const fn std2k(id: CommandId) -> Self {
		Self::new(CommandGroup::STANDARD_2K, id)
	}

	/// Shorthand for a [`CommandGroup::STANDARD_97`] command.
	pub const fn std97(id: CommandId) -> Self {
		Self::new(CommandGroup::STANDARD_97, id)
	}

	/// The typing command for a single character.
	pub const fn type_char(c: char) -> Self {
		Self::std2k(std2k::TYPECHAR).with_input(c)
	}

	pub const fn with_input(self, input: char) -> Self {
		Self {
			input: Some(input),
			..self
		}
	}
}

impl std::fmt::Display for NativeCommand {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.group, self.id.0)?;
		if let Some(c) = self.input {
			write!(f, "({c:?})")?;
		}
		Ok(())
	}
}

const S_OK: i32 = 0;
const E_NOTSUPPORTED: i32 = 0x8004_0100_u32 as i32;
const E_CANCELED: i32 = 0x8004_0103_u32 as i32;
const E_FAIL: i32 = 0x8000_4005_u32 as i32;

/// Outcome of a native exec or query-status call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
	Ok,
	/// The handler does not know the command.
	NotSupported,
	/// The handler started the command and gave up (user cancel, auxiliary feature failure).
	Aborted,
	/// Any other failure, with the raw host code.
	Failed(i32),
}

impl ResultCode {
	/// Generic failure.
	pub const FAIL: Self = Self::Failed(E_FAIL);

	pub fn is_success(self) -> bool {
		matches!(self, Self::Ok)
	}

	/// Maps a raw host status code.
	///
	/// Every non-negative code counts as success.
	pub fn from_raw(raw: i32) -> Self {
		match raw {
			r if r >= S_OK => Self::Ok,
			E_NOTSUPPORTED => Self::NotSupported,
			E_CANCELED => Self::Aborted,
			r => Self::Failed(r),
		}
	}

	pub fn to_raw(self) -> i32 {
		match self {
			Self::Ok => S_OK,
			Self::NotSupported => E_NOTSUPPORTED,
			Self::Aborted => E_CANCELED,
			Self::Failed(r) => r,
		}
	}
}

bitflags! {
	/// Status flags reported for a queried command.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CommandFlags: u32 {
		const SUPPORTED = 0x1;
		const ENABLED = 0x2;
		const LATCHED = 0x4;
		const INVISIBLE = 0x10;
	}
}

/// Execution hint passed along with an exec call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecOption {
	#[default]
	DoDefault,
	PromptUser,
	DontPromptUser,
	ShowHelp,
}

/// One entry of a query-status batch. Handlers write `flags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandQuery {
	pub id: CommandId,
	pub flags: CommandFlags,
}

impl CommandQuery {
	pub fn new(id: CommandId) -> Self {
		Self {
			id,
			flags: CommandFlags::empty(),
		}
	}
}
