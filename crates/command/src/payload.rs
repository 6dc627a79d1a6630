//! Scoped ownership of host-allocated command payloads.
//!
//! The host marshals a command's character argument into a resource it owns.
//! [`OleCommandData`] holds that resource for the duration of one forwarded call
//! and releases it in `Drop`, so release happens exactly once on every exit
//! path, unwinding included.

use thiserror::Error;
use tracing::{trace, warn};

use crate::native::NativeCommand;

/// Opaque host handle for a marshalled payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayloadHandle(pub u64);

/// Errors raised by a [`PayloadAllocator`].
#[derive(Debug, Error)]
pub enum PayloadError {
	#[error("failed to allocate payload for {input:?}: {reason}")]
	Allocate { input: char, reason: String },

	#[error("failed to release payload {handle:?}: {reason}")]
	Release { handle: PayloadHandle, reason: String },
}

/// Host-side payload marshalling.
pub trait PayloadAllocator {
	fn allocate(&self, input: char) -> Result<PayloadHandle, PayloadError>;
	fn release(&self, handle: PayloadHandle) -> Result<(), PayloadError>;
}

/// A native command whose payload, if any, is held for the lifetime of this value.
pub struct OleCommandData<'a> {
	command: NativeCommand,
	payload: Option<PayloadHandle>,
	allocator: &'a dyn PayloadAllocator,
}

impl<'a> OleCommandData<'a> {
	/// Marshals the payload of `command`. Commands without input allocate nothing.
	pub fn acquire(allocator: &'a dyn PayloadAllocator, command: NativeCommand) -> Result<Self, PayloadError> {
		let payload = command.input.map(|c| allocator.allocate(c)).transpose()?;
		Ok(Self {
			command,
			payload,
			allocator,
		})
	}

	pub fn command(&self) -> &NativeCommand {
		&self.command
	}

	pub fn payload(&self) -> Option<PayloadHandle> {
		self.payload
	}
}

impl std::fmt::Debug for OleCommandData<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("OleCommandData")
			.field("command", &self.command)
			.field("payload", &self.payload)
			.finish()
	}
}

impl Drop for OleCommandData<'_> {
	fn drop(&mut self) {
		let Some(handle) = self.payload.take() else {
			return;
		};
		// The command's effect is already decided; a failed release is only worth a log line.
		match self.allocator.release(handle) {
			Ok(()) => trace!(?handle, cmd = %self.command, "payload released"),
			Err(err) => warn!(%err, cmd = %self.command, "payload release failed"),
		}
	}
}
