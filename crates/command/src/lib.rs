//! Native command protocol and the edit-command vocabulary shared with the modal engine.
//!
//! * [`NativeCommand`]: the host's `(group, id, payload)` descriptor
//! * [`CommandHandler`]: the two-operation exec/query-status protocol
//! * [`EditCommand`]: a recognized native command in engine terms, see [`decode`]
//! * [`InsertCommand`]: engine edit intentions replayable through the host
//! * [`OleCommandData`]: scoped ownership of host-allocated payloads

pub mod decode;
pub mod edit;
pub mod handler;
pub mod insert;
pub mod native;
pub mod payload;

pub use decode::decode;
pub use edit::{EditCommand, EditCommandKind, OtherCommand};
pub use handler::CommandHandler;
pub use insert::InsertCommand;
pub use native::{CommandFlags, CommandGroup, CommandId, CommandQuery, ExecOption, NativeCommand, ResultCode, std2k, std97};
pub use payload::{OleCommandData, PayloadAllocator, PayloadError, PayloadHandle};
