//! Replays engine insert commands through the host's own command pipeline.
//!
//! Going through the host keeps its side effects (language-aware newline
//! indentation, brace completion) that the engine cannot reproduce.

use relay_command::{CommandHandler, ExecOption, InsertCommand, OleCommandData};
use tracing::{debug, trace, warn};

use crate::config::TargetConfig;
use crate::engine::ModalEngine;
use crate::host::HostCapabilities;


/// Forwards `command` to `next` as a native command.
///
/// Returns true if the host performed the edit. A failure code from `next` is
/// overridden when the buffer version advanced anyway: some handlers report
/// failure for an auxiliary feature after applying the text change.
pub(crate) fn try_replay(
	host: &dyn HostCapabilities,
	engine: &dyn ModalEngine,
	next: &dyn CommandHandler,
	config: &TargetConfig,
	command: &InsertCommand,
) -> bool {
	let Some(native) = command.to_native() else {
		trace!(?command, "replay: no native equivalent");
		return false;
	};

	// During bulk replay, only newlines go through the host; anything else
	// risks popups and other interactive side effects.
	let bulk = engine.in_bulk_operation();
	if bulk && !command.is_new_line() {
		trace!(?command, "replay: suppressed during bulk operation");
		return false;
	}

	// Declared before the payload so it runs after the payload is released.
	// Only newlines get past the bulk check, and they carry no payload, so an
	// armed guard never sees an allocation failure.
	let _dismissal = CompletionDismissal {
		host,
		armed: bulk && config.dismiss_completion_in_bulk,
	};

	let before = host.version();
	let data = match OleCommandData::acquire(host, native) {
		Ok(data) => data,
		Err(err) => {
			warn!(%err, cmd = %native, "replay: payload allocation failed");
			return false;
		}
	};
	let result = next.exec(data.command(), ExecOption::DoDefault);
	let after = host.version();

	let replayed = result.is_success() || after > before;
	debug!(cmd = %native, ?result, before, after, replayed, "replay");
	replayed
}

/// Closes a completion popup left open by a bulk replay, on every exit path.
struct CompletionDismissal<'a> {
	host: &'a dyn HostCapabilities,
	armed: bool,
}

impl Drop for CompletionDismissal<'_> {
	fn drop(&mut self) {
		if self.armed && self.host.is_completion_active() {
			trace!("replay: dismissing completion");
			self.host.dismiss_completion();
		}
	}
}
