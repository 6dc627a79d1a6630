//! Classification of native commands with host-state vetoes.

use relay_command::{EditCommand, NativeCommand, decode};
use tracing::trace;

use crate::host::HostGuards;

/// Converts `native` into an [`EditCommand`] the modal engine may act on.
///
/// Vetoes, each independent:
/// * host automation is running
/// * host incremental search is active
/// * the descriptor does not decode
/// * it decodes to a natively bound host command, which always wins over the engine
pub fn classify<G: HostGuards + ?Sized>(native: &NativeCommand, guards: &G) -> Option<EditCommand> {
	if guards.is_automation_active() {
		trace!(cmd = %native, "classify: automation active");
		return None;
	}
	if guards.is_incremental_search_active() {
		trace!(cmd = %native, "classify: incremental search active");
		return None;
	}
	let Some(command) = decode(native, guards.modifiers()) else {
		trace!(cmd = %native, "classify: not decodable");
		return None;
	};
	if command.is_host_command() {
		trace!(cmd = %native, "classify: host command");
		return None;
	}
	Some(command)
}
