//! Ordered, first-match-wins handler chain for classified commands.
//!
//! The set of nodes is fixed when a surface is attached. Each node is a pair
//! of plain functions; there is no per-call reordering or skipping.

pub mod nodes;

use relay_command::EditCommand;
use relay_primitives::Key;
use tracing::trace;

use crate::config::TargetConfig;
use crate::engine::ModalEngine;
use crate::host::HostCapabilities;

/// Status answer of a node for a queried command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditCommandStatus {
	Enable,
	Disable,
	/// No opinion; ask the next node, then the next handler in the host chain.
	PassOn,
}

/// Everything a node can look at during one dispatch.
pub struct DispatchCx<'a> {
	pub host: &'a dyn HostCapabilities,
	pub engine: &'a dyn ModalEngine,
	pub config: &'a TargetConfig,
	/// Key the engine discarded before this dispatch started.
	pub discarded: Option<Key>,
}

/// One entry of a [`NodeChain`].
#[derive(Clone, Copy)]
pub struct CommandNode {
	/// Name for tracing.
	pub name: &'static str,
	/// Returns true if the node handled the command.
	pub execute: fn(&DispatchCx<'_>, &EditCommand) -> bool,
	pub query_status: fn(&DispatchCx<'_>, &EditCommand) -> EditCommandStatus,
}

impl std::fmt::Debug for CommandNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CommandNode").field("name", &self.name).finish()
	}
}

/// Immutable ordered sequence of [`CommandNode`]s.
#[derive(Debug, Clone)]
pub struct NodeChain {
	nodes: Box<[CommandNode]>,
}

impl Default for NodeChain {
	fn default() -> Self {
		Self::standard()
	}
}

impl NodeChain {
	pub fn new(nodes: impl IntoIterator<Item = CommandNode>) -> Self {
		Self {
			nodes: nodes.into_iter().collect(),
		}
	}

	/// The built-in chain: discarded-input swallowing, then the modal engine.
	pub fn standard() -> Self {
		Self::new([nodes::DISCARDED_INPUT, nodes::MODAL_INPUT])
	}

	pub fn nodes(&self) -> &[CommandNode] {
		&self.nodes
	}

	/// Offers `command` to each node in order. Returns true once a node handles it.
	pub fn execute(&self, cx: &DispatchCx<'_>, command: &EditCommand) -> bool {
		for node in self.nodes.iter() {
			if (node.execute)(cx, command) {
				trace!(node = node.name, cmd = %command, "chain: handled");
				return true;
			}
		}
		trace!(cmd = %command, "chain: unhandled");
		false
	}

	/// Returns the first status that is not [`EditCommandStatus::PassOn`].
	pub fn query_status(&self, cx: &DispatchCx<'_>, command: &EditCommand) -> EditCommandStatus {
		for node in self.nodes.iter() {
			let status = (node.query_status)(cx, command);
			if status != EditCommandStatus::PassOn {
				trace!(node = node.name, cmd = %command, ?status, "chain: status");
				return status;
			}
		}
		EditCommandStatus::PassOn
	}
}
