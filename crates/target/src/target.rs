//! The per-surface command target.

use std::cell::OnceCell;
use std::rc::Rc;

use relay_command::{
	CommandFlags, CommandGroup, CommandHandler, CommandQuery, EditCommand, ExecOption, InsertCommand, NativeCommand, ResultCode,
};
use relay_primitives::Key;
use tracing::{trace, warn};

use crate::chain::{DispatchCx, EditCommandStatus, NodeChain};
use crate::classify::classify;
use crate::config::TargetConfig;
use crate::coordinator::KeyCoordinator;
use crate::engine::ModalEngine;
use crate::host::{HostCapabilities, SurfaceId};
use crate::replay;


/// Command filter installed at the head of one surface's host command chain.
///
/// Commands the modal engine claims stop here; everything else is forwarded
/// unchanged to the handler that was first in the chain before attachment.
pub struct CommandTarget {
	surface: SurfaceId,
	host: Rc<dyn HostCapabilities>,
	engine: Rc<dyn ModalEngine>,
	coordinator: Rc<KeyCoordinator>,
	chain: NodeChain,
	config: TargetConfig,
	next: OnceCell<Rc<dyn CommandHandler>>,
}

impl CommandTarget {
	pub(crate) fn new(
		surface: SurfaceId,
		host: Rc<dyn HostCapabilities>,
		engine: Rc<dyn ModalEngine>,
		coordinator: Rc<KeyCoordinator>,
		chain: NodeChain,
		config: TargetConfig,
	) -> Self {
		Self {
			surface,
			host,
			engine,
			coordinator,
			chain,
			config,
			next: OnceCell::new(),
		}
	}

	/// Records the handler to forward to. Only the first call has an effect.
	pub(crate) fn set_next(&self, next: Rc<dyn CommandHandler>) {
		if self.next.set(next).is_err() {
			warn!(surface = %self.surface, "next handler already set");
		}
	}

	pub fn surface(&self) -> SurfaceId {
		self.surface
	}

	pub fn coordinator(&self) -> &Rc<KeyCoordinator> {
		&self.coordinator
	}

	/// Classifies `native` against the current host state.
	pub fn convert(&self, native: &NativeCommand) -> Option<EditCommand> {
		classify(native, &*self.host)
	}

	/// Replays an engine edit through the rest of the host chain.
	///
	/// Called by the engine while it drives insert-mode edits. Returns false when
	/// the edit cannot or must not go through the host, or the host did not
	/// perform it; the engine then applies the edit itself.
	pub fn try_custom_process(&self, command: &InsertCommand) -> bool {
		let Some(next) = self.next.get() else {
			return false;
		};
		replay::try_replay(&*self.host, &*self.engine, &**next, &self.config, command)
	}

	fn dispatch_cx(&self, discarded: Option<Key>) -> DispatchCx<'_> {
		DispatchCx {
			host: &*self.host,
			engine: &*self.engine,
			config: &self.config,
			discarded,
		}
	}

	fn forward_exec(&self, native: &NativeCommand, option: ExecOption) -> ResultCode {
		match self.next.get() {
			Some(next) => {
				trace!(surface = %self.surface, cmd = %native, "exec: forwarding");
				next.exec(native, option)
			}
			None => ResultCode::NotSupported,
		}
	}

	fn forward_query_status(&self, group: CommandGroup, queries: &mut [CommandQuery]) -> ResultCode {
		match self.next.get() {
			Some(next) => next.query_status(group, queries),
			None => ResultCode::NotSupported,
		}
	}
}

impl CommandHandler for CommandTarget {
	fn exec(&self, native: &NativeCommand, option: ExecOption) -> ResultCode {
		// Taking empties the slot, so a nested dispatch never sees this call's key.
		let discarded = self.coordinator.take();
		let mut exit = ExecExit {
			target: self,
			command: None,
		};

		if let Some(command) = self.convert(native) {
			exit.command = Some(command);
			if self.chain.execute(&self.dispatch_cx(discarded), &command) {
				return ResultCode::Ok;
			}
		}
		self.forward_exec(native, option)
	}

	fn query_status(&self, group: CommandGroup, queries: &mut [CommandQuery]) -> ResultCode {
		self.coordinator.clear();
		let _clear = self.coordinator.clear_on_drop();

		if let [query] = queries {
			let native = NativeCommand::new(group, query.id);
			if let Some(command) = self.convert(&native) {
				match self.chain.query_status(&self.dispatch_cx(None), &command) {
					EditCommandStatus::Enable => {
						query.flags = CommandFlags::SUPPORTED | CommandFlags::ENABLED;
						return ResultCode::Ok;
					}
					EditCommandStatus::Disable => {
						query.flags = CommandFlags::SUPPORTED;
						return ResultCode::Ok;
					}
					EditCommandStatus::PassOn => {}
				}
			}
		}
		self.forward_query_status(group, queries)
	}
}

/// Exit work of [`CommandTarget::exec`], run on every path including unwinding.
struct ExecExit<'a> {
	target: &'a CommandTarget,
	command: Option<EditCommand>,
}

impl Drop for ExecExit<'_> {
	fn drop(&mut self) {
		let target = self.target;
		target.coordinator.clear();

		// A selection left by navigation would read as visual mode to the engine.
		if let Some(command) = &self.command
			&& command.is_go_to_definition()
			&& target.config.clear_selection_after_navigation
			&& !target.host.is_selection_empty()
		{
			trace!(surface = %target.surface, "exec: clearing selection after navigation");
			target.host.clear_selection();
		}
	}
}
