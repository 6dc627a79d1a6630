//! Mock host, engine, and host-chain handlers for unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use relay_command::{
	CommandFlags, CommandGroup, CommandHandler, CommandQuery, ExecOption, NativeCommand, PayloadAllocator, PayloadError, PayloadHandle,
	ResultCode,
};
use relay_primitives::{Key, KeyCode, Mode, Modifiers};

use crate::host::{BufferAccess, CompletionAccess, HostGuards, SelectionAccess, SurfaceId, TextSurface};

#[derive(Default)]
pub(crate) struct MockHost {
	pub automation: Cell<bool>,
	pub incremental_search: Cell<bool>,
	pub modifiers: Cell<Modifiers>,
	pub completion_active: Cell<bool>,
	pub completion_dismissals: Cell<u32>,
	pub version: Cell<u64>,
	pub read_only: Cell<bool>,
	pub selection_empty: Cell<bool>,
	pub fail_allocate: Cell<bool>,
	pub allocated: RefCell<Vec<PayloadHandle>>,
	pub released: RefCell<Vec<PayloadHandle>>,
}

impl MockHost {
	pub fn new() -> Rc<Self> {
		let host = Self::default();
		host.selection_empty.set(true);
		Rc::new(host)
	}

	pub fn bump_version(&self) {
		self.version.set(self.version.get() + 1);
	}
}

impl HostGuards for MockHost {
	fn is_automation_active(&self) -> bool {
		self.automation.get()
	}

	fn is_incremental_search_active(&self) -> bool {
		self.incremental_search.get()
	}

	fn modifiers(&self) -> Modifiers {
		self.modifiers.get()
	}
}

impl CompletionAccess for MockHost {
	fn is_completion_active(&self) -> bool {
		self.completion_active.get()
	}

	fn dismiss_completion(&self) {
		self.completion_active.set(false);
		self.completion_dismissals.set(self.completion_dismissals.get() + 1);
	}
}

impl BufferAccess for MockHost {
	fn version(&self) -> u64 {
		self.version.get()
	}

	fn is_read_only(&self) -> bool {
		self.read_only.get()
	}
}

impl SelectionAccess for MockHost {
	fn is_selection_empty(&self) -> bool {
		self.selection_empty.get()
	}

	fn clear_selection(&self) {
		self.selection_empty.set(true);
	}
}

impl PayloadAllocator for MockHost {
	fn allocate(&self, input: char) -> Result<PayloadHandle, PayloadError> {
		if self.fail_allocate.get() {
			return Err(PayloadError::Allocate {
				input,
				reason: "mock refused".into(),
			});
		}
		let handle = PayloadHandle(self.allocated.borrow().len() as u64 + 1);
		self.allocated.borrow_mut().push(handle);
		Ok(handle)
	}

	fn release(&self, handle: PayloadHandle) -> Result<(), PayloadError> {
		self.released.borrow_mut().push(handle);
		Ok(())
	}
}

type KeyHook = Box<dyn Fn(&Key)>;

/// Engine that consumes a configurable set of keys and records what it processed.
#[derive(Default)]
pub(crate) struct MockEngine {
	pub mode: Cell<Mode>,
	pub bulk: Cell<bool>,
	pub consume_all: Cell<bool>,
	pub consumes: RefCell<Vec<KeyCode>>,
	pub processed: RefCell<Vec<Key>>,
	pub on_process: RefCell<Option<KeyHook>>,
}

impl MockEngine {
	pub fn consuming(codes: impl IntoIterator<Item = KeyCode>) -> Rc<Self> {
		let engine = Self::default();
		engine.consumes.borrow_mut().extend(codes);
		Rc::new(engine)
	}

	pub fn consuming_all() -> Rc<Self> {
		let engine = Self::default();
		engine.consume_all.set(true);
		Rc::new(engine)
	}

	pub fn on_process(&self, hook: impl Fn(&Key) + 'static) {
		*self.on_process.borrow_mut() = Some(Box::new(hook));
	}
}

impl crate::engine::ModalEngine for MockEngine {
	fn mode(&self) -> Mode {
		self.mode.get()
	}

	fn can_process(&self, key: &Key) -> bool {
		self.mode.get() != Mode::Disabled && (self.consume_all.get() || self.consumes.borrow().contains(&key.code))
	}

	fn process(&self, key: &Key) -> bool {
		self.processed.borrow_mut().push(*key);
		if let Some(hook) = self.on_process.borrow().as_ref() {
			hook(key);
		}
		true
	}

	fn in_bulk_operation(&self) -> bool {
		self.bulk.get()
	}
}

type ExecHook = Box<dyn Fn(&NativeCommand)>;
type QueryHook = Box<dyn Fn(CommandGroup, &[CommandQuery])>;

/// The rest of the host chain: records calls and returns canned answers.
pub(crate) struct MockNext {
	pub result: Cell<ResultCode>,
	pub flags: Cell<CommandFlags>,
	pub execs: RefCell<Vec<NativeCommand>>,
	pub queries: RefCell<Vec<(CommandGroup, Vec<CommandQuery>)>>,
	pub on_exec: RefCell<Option<ExecHook>>,
	pub on_query: RefCell<Option<QueryHook>>,
}

impl Default for MockNext {
	fn default() -> Self {
		Self {
			result: Cell::new(ResultCode::Ok),
			flags: Cell::new(CommandFlags::SUPPORTED),
			execs: RefCell::default(),
			queries: RefCell::default(),
			on_exec: RefCell::default(),
			on_query: RefCell::default(),
		}
	}
}

impl MockNext {
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	pub fn returning(result: ResultCode) -> Rc<Self> {
		let next = Self::default();
		next.result.set(result);
		Rc::new(next)
	}

	pub fn on_exec(&self, hook: impl Fn(&NativeCommand) + 'static) {
		*self.on_exec.borrow_mut() = Some(Box::new(hook));
	}

	pub fn on_query(&self, hook: impl Fn(CommandGroup, &[CommandQuery]) + 'static) {
		*self.on_query.borrow_mut() = Some(Box::new(hook));
	}

	pub fn exec_count(&self) -> usize {
		self.execs.borrow().len()
	}
}

impl CommandHandler for MockNext {
	fn exec(&self, command: &NativeCommand, _option: ExecOption) -> ResultCode {
		self.execs.borrow_mut().push(*command);
		if let Some(hook) = self.on_exec.borrow().as_ref() {
			hook(command);
		}
		self.result.get()
	}

	fn query_status(&self, group: CommandGroup, queries: &mut [CommandQuery]) -> ResultCode {
		for query in queries.iter_mut() {
			query.flags = self.flags.get();
		}
		self.queries.borrow_mut().push((group, queries.to_vec()));
		if let Some(hook) = self.on_query.borrow().as_ref() {
			hook(group, queries);
		}
		self.result.get()
	}
}

/// Host surface whose chain starts with a [`MockNext`].
pub(crate) struct MockSurface {
	pub id: SurfaceId,
	pub refuse: Cell<Option<ResultCode>>,
	pub next: Rc<MockNext>,
	pub filters: RefCell<Vec<Rc<dyn CommandHandler>>>,
}

impl MockSurface {
	pub fn new(id: u64, next: Rc<MockNext>) -> Rc<Self> {
		Rc::new(Self {
			id: SurfaceId(id),
			refuse: Cell::new(None),
			next,
			filters: RefCell::default(),
		})
	}

	/// Sends a command in at the head of the chain, as the host would.
	pub fn exec(&self, command: &NativeCommand) -> ResultCode {
		let head = self.filters.borrow().last().cloned();
		match head {
			Some(head) => head.exec(command, ExecOption::DoDefault),
			None => self.next.exec(command, ExecOption::DoDefault),
		}
	}
}

impl TextSurface for MockSurface {
	fn id(&self) -> SurfaceId {
		self.id
	}

	fn add_command_filter(&self, filter: Rc<dyn CommandHandler>) -> Result<Rc<dyn CommandHandler>, ResultCode> {
		if let Some(code) = self.refuse.get() {
			return Err(code);
		}
		let mut filters = self.filters.borrow_mut();
		let previous: Rc<dyn CommandHandler> = match filters.last() {
			Some(head) => head.clone(),
			None => self.next.clone(),
		};
		filters.push(filter);
		Ok(previous)
	}

	fn remove_command_filter(&self, filter: &Rc<dyn CommandHandler>) {
		self.filters.borrow_mut().retain(|f| !Rc::ptr_eq(f, filter));
	}
}

/// A target attached to a [`MockSurface`], with handles to every collaborator.
pub(crate) struct Harness {
	pub host: Rc<MockHost>,
	pub engine: Rc<MockEngine>,
	pub next: Rc<MockNext>,
	pub surface: Rc<MockSurface>,
	pub coordinator: Rc<crate::KeyCoordinator>,
	pub registry: crate::TargetRegistry,
	pub target: Rc<crate::CommandTarget>,
}

impl Harness {
	pub fn new(engine: Rc<MockEngine>) -> Self {
		Self::with_config(engine, crate::TargetConfig::default())
	}

	pub fn with_config(engine: Rc<MockEngine>, config: crate::TargetConfig) -> Self {
		let host = MockHost::new();
		let next = MockNext::new();
		let surface = MockSurface::new(1, next.clone());
		let coordinator = Rc::new(crate::KeyCoordinator::new());
		let registry = crate::TargetRegistry::new();
		let session = crate::SurfaceSession::new(host.clone(), engine.clone(), coordinator.clone()).with_config(config);
		let target = registry.attach(surface.clone(), session).expect("mock surface accepts filters");
		Self {
			host,
			engine,
			next,
			surface,
			coordinator,
			registry,
			target,
		}
	}

	pub fn exec(&self, command: &NativeCommand) -> ResultCode {
		self.target.exec(command, ExecOption::DoDefault)
	}

	/// Queries a single command and returns the result code and resulting flags.
	pub fn query(&self, command: &NativeCommand) -> (ResultCode, CommandFlags) {
		let mut queries = [CommandQuery::new(command.id)];
		let code = self.target.query_status(command.group, &mut queries);
		(code, queries[0].flags)
	}
}
