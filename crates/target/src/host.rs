//! Capability traits the host editor provides to the command target.
//!
//! Each trait covers one narrow concern so tests can stub exactly what a code
//! path reads. [`HostCapabilities`] is implemented automatically for anything
//! providing all of them.
//!
//! All methods take `&self`; hosts keep their own interior mutability.

use std::rc::Rc;

use relay_command::{CommandHandler, PayloadAllocator, ResultCode};
use relay_primitives::Modifiers;

/// Host environment predicates consulted before classifying a command.
pub trait HostGuards {
	/// Returns true while the host runs automation (macro playback, wizards).
	fn is_automation_active(&self) -> bool;
	/// Returns true while the host's incremental search owns keyboard input.
	fn is_incremental_search_active(&self) -> bool;
	/// Current keyboard modifier state.
	fn modifiers(&self) -> Modifiers;
}

/// Completion/IntelliSense popup state.
pub trait CompletionAccess {
	fn is_completion_active(&self) -> bool;
	fn dismiss_completion(&self);
}

/// Text buffer of the surface.
pub trait BufferAccess {
	/// Monotonic counter bumped by every text change.
	fn version(&self) -> u64;

	fn is_read_only(&self) -> bool {
		false
	}
}

/// Selection of the surface.
pub trait SelectionAccess {
	fn is_selection_empty(&self) -> bool;
	/// Collapses the selection to the caret.
	fn clear_selection(&self);
}

/// Everything the command target needs from the host.
pub trait HostCapabilities: HostGuards + CompletionAccess + BufferAccess + SelectionAccess + PayloadAllocator {}

impl<T> HostCapabilities for T where T: HostGuards + CompletionAccess + BufferAccess + SelectionAccess + PayloadAllocator + ?Sized {}

/// Identifier of one host editing surface (an open document view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl std::fmt::Display for SurfaceId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "surface#{}", self.0)
	}
}

/// A host editing surface that accepts command filters.
pub trait TextSurface {
	fn id(&self) -> SurfaceId;

	/// Installs `filter` at the head of the surface's command chain.
	///
	/// Returns the handler that was previously first, which the filter must
	/// forward to, or the host's refusal code.
	fn add_command_filter(&self, filter: Rc<dyn CommandHandler>) -> Result<Rc<dyn CommandHandler>, ResultCode>;

	fn remove_command_filter(&self, filter: &Rc<dyn CommandHandler>);
}
