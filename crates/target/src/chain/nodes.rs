//! Built-in chain nodes.

use relay_command::EditCommand;
use relay_primitives::Key;

use super::{CommandNode, DispatchCx, EditCommandStatus};

/// Swallows a key the engine already discarded, so the host does not type it too.
pub const DISCARDED_INPUT: CommandNode = CommandNode {
	name: "discarded_input",
	execute: discarded_execute,
	query_status: pass_on,
};

/// Hands key input to the modal engine.
///
/// While the engine is inserting and a completion popup is open, the popup's
/// navigation keys are left to the host.
pub const MODAL_INPUT: CommandNode = CommandNode {
	name: "modal_input",
	execute: modal_execute,
	query_status: modal_query_status,
};

/// Status function for nodes with no opinion on any command.
pub fn pass_on(_: &DispatchCx<'_>, _: &EditCommand) -> EditCommandStatus {
	EditCommandStatus::PassOn
}

fn discarded_execute(cx: &DispatchCx<'_>, command: &EditCommand) -> bool {
	match (cx.discarded, command.key_input()) {
		(Some(discarded), Some(key)) => discarded == key,
		_ => false,
	}
}

fn modal_execute(cx: &DispatchCx<'_>, command: &EditCommand) -> bool {
	let Some(key) = command.key_input() else {
		return false;
	};
	if leave_to_completion(cx, &key) {
		return false;
	}
	cx.engine.can_process(&key) && cx.engine.process(&key)
}

fn modal_query_status(cx: &DispatchCx<'_>, command: &EditCommand) -> EditCommandStatus {
	let Some(key) = command.key_input() else {
		return EditCommandStatus::PassOn;
	};
	if leave_to_completion(cx, &key) {
		return EditCommandStatus::PassOn;
	}
	if cx.engine.mode().is_insert_like() && cx.host.is_read_only() && key.edits_text() {
		return EditCommandStatus::Disable;
	}
	if cx.engine.can_process(&key) {
		EditCommandStatus::Enable
	} else {
		EditCommandStatus::PassOn
	}
}

fn leave_to_completion(cx: &DispatchCx<'_>, key: &Key) -> bool {
	cx.engine.mode().is_insert_like() && cx.config.is_completion_key(key) && cx.host.is_completion_active()
}
