//! Per-surface command target sitting between the host's command chain and the modal engine.
//!
//! * [`CommandTarget`]: exec/query-status entry points, engine-facing replay and conversion
//! * [`NodeChain`]: ordered first-match-wins handler table
//! * [`KeyCoordinator`]: discarded-key slot shared with the engine
//! * [`TargetRegistry`]: attach/lookup/detach per host surface
//!
//! # Threading
//!
//! Everything here assumes the host dispatches commands on one thread. Shared
//! state sits behind `Rc` and `Cell`, so none of these types are `Send` or
//! `Sync`. Calls may re-enter (a forwarded command can trigger another
//! dispatch before returning); no borrow is held across a forwarded call.

pub mod chain;
pub mod classify;
pub mod config;
pub mod coordinator;
pub mod engine;
pub mod host;
pub mod registry;
mod replay;
pub mod target;
#[cfg(test)]
mod testing;

pub use chain::{CommandNode, DispatchCx, EditCommandStatus, NodeChain};
pub use classify::classify;
pub use config::{ConfigError, TargetConfig};
pub use coordinator::KeyCoordinator;
pub use engine::ModalEngine;
pub use host::{BufferAccess, CompletionAccess, HostCapabilities, HostGuards, SelectionAccess, SurfaceId, TextSurface};
pub use registry::{AttachError, SurfaceSession, TargetRegistry};
pub use target::CommandTarget;
