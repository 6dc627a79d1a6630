//! Attachment of command targets to host surfaces.
//!
//! The registry is owned by the host integration and lives on the host's
//! dispatch thread; each surface has at most one target for its whole
//! lifetime.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use relay_command::{CommandHandler, ResultCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::chain::NodeChain;
use crate::config::TargetConfig;
use crate::coordinator::KeyCoordinator;
use crate::engine::ModalEngine;
use crate::host::{HostCapabilities, SurfaceId, TextSurface};
use crate::target::CommandTarget;


/// Errors from [`TargetRegistry::attach`].
#[derive(Debug, Error)]
pub enum AttachError {
	/// The host refused to install the command filter.
	#[error("{surface} refused the command filter ({code:?})")]
	Refused { surface: SurfaceId, code: ResultCode },

	#[error("{0} already has a command target")]
	AlreadyAttached(SurfaceId),
}

/// The editing-session state a command target is built from.
pub struct SurfaceSession {
	pub host: Rc<dyn HostCapabilities>,
	pub engine: Rc<dyn ModalEngine>,
	/// Slot shared with the engine; the engine keeps its own clone.
	pub coordinator: Rc<KeyCoordinator>,
	pub chain: NodeChain,
	pub config: TargetConfig,
}

impl SurfaceSession {
	/// A session using the standard node chain and default configuration.
	pub fn new(host: Rc<dyn HostCapabilities>, engine: Rc<dyn ModalEngine>, coordinator: Rc<KeyCoordinator>) -> Self {
		Self {
			host,
			engine,
			coordinator,
			chain: NodeChain::standard(),
			config: TargetConfig::default(),
		}
	}

	pub fn with_chain(self, chain: NodeChain) -> Self {
		Self { chain, ..self }
	}

	pub fn with_config(self, config: TargetConfig) -> Self {
		Self { config, ..self }
	}
}

struct Attached {
	target: Rc<CommandTarget>,
	surface: Rc<dyn TextSurface>,
}

/// Command targets keyed by the surface they are attached to.
#[derive(Default)]
pub struct TargetRegistry {
	targets: RefCell<HashMap<SurfaceId, Attached>>,
}

impl TargetRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a command target for `surface` and installs it in the surface's command chain.
	///
	/// On failure nothing stays registered or installed.
	pub fn attach(&self, surface: Rc<dyn TextSurface>, session: SurfaceSession) -> Result<Rc<CommandTarget>, AttachError> {
		let id = surface.id();
		if self.targets.borrow().contains_key(&id) {
			return Err(AttachError::AlreadyAttached(id));
		}

		let target = Rc::new(CommandTarget::new(
			id,
			session.host,
			session.engine,
			session.coordinator,
			session.chain,
			session.config,
		));
		let filter: Rc<dyn CommandHandler> = target.clone();

		// No registry borrow is held here: the host may call back into us.
		let next = surface.add_command_filter(filter.clone()).map_err(|code| {
			warn!(surface = %id, ?code, "attach refused");
			AttachError::Refused { surface: id, code }
		})?;
		target.set_next(next);

		let mut targets = self.targets.borrow_mut();
		if targets.contains_key(&id) {
			drop(targets);
			surface.remove_command_filter(&filter);
			return Err(AttachError::AlreadyAttached(id));
		}
		targets.insert(
			id,
			Attached {
				target: target.clone(),
				surface,
			},
		);
		debug!(surface = %id, "command target attached");
		Ok(target)
	}

	pub fn lookup(&self, id: SurfaceId) -> Option<Rc<CommandTarget>> {
		self.targets.borrow().get(&id).map(|attached| attached.target.clone())
	}

	/// Unregisters the target of a closing surface and removes its command filter.
	pub fn detach(&self, id: SurfaceId) -> Option<Rc<CommandTarget>> {
		let attached = self.targets.borrow_mut().remove(&id)?;
		let filter: Rc<dyn CommandHandler> = attached.target.clone();
		attached.surface.remove_command_filter(&filter);
		debug!(surface = %id, "command target detached");
		Some(attached.target)
	}

	pub fn len(&self) -> usize {
		self.targets.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.targets.borrow().is_empty()
	}
}
