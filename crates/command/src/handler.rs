//! The native two-operation command protocol.

use crate::native::{CommandGroup, CommandQuery, ExecOption, NativeCommand, ResultCode};

/// A link in the host's command-handler chain.
///
/// Both operations take `&self`: the host dispatches on a single thread and
/// a call may re-enter the same handler before returning, so implementors
/// keep their mutable state behind cells and never hold a borrow across a
/// call to another handler.
pub trait CommandHandler {
	/// Executes `command`, returning the host result code.
	fn exec(&self, command: &NativeCommand, option: ExecOption) -> ResultCode;

	/// Fills in [`CommandQuery::flags`] for each query in the batch.
	fn query_status(&self, group: CommandGroup, queries: &mut [CommandQuery]) -> ResultCode;
}
