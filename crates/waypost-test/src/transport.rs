//! Scriptable transport.

use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use waypost_core::{Transport, TransportError, async_trait};

#[derive(Default)]
struct MockState {
	sources: HashMap<String, String>,
	failures: HashMap<String, TransportError>,
	gates: HashMap<String, VecDeque<oneshot::Receiver<()>>>,
	requests: Vec<String>,
}

/// In-memory transport whose responses can fail or be held back.
///
/// Each call to [`MockTransport::gate`] holds the next request for that
/// locator until the returned [`Gate`] is opened, which lets a test decide
/// the order in which overlapping loads complete. The request stays held
/// only while its [`Gate`] is alive: keep the gate to hold it, open or drop
/// it to release.
///
/// Cloning yields another handle to the same transport.
#[derive(Clone, Default)]
pub struct MockTransport {
	state: Rc<RefCell<MockState>>,
}

impl std::fmt::Debug for MockTransport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("MockTransport")
			.field("sources", &state.sources.len())
			.field("requests", &state.requests)
			.finish()
	}
}

impl MockTransport {
	/// Creates a transport with no sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a source, builder style.
	pub fn with_source(self, locator: impl Into<String>, source: impl Into<String>) -> Self {
		self.set_source(locator, source);
		self
	}

	/// Registers or replaces a source.
	pub fn set_source(&self, locator: impl Into<String>, source: impl Into<String>) {
		self.state
			.borrow_mut()
			.sources
			.insert(locator.into(), source.into());
	}

	/// Makes every request for `locator` fail with `error`.
	pub fn fail(&self, locator: impl Into<String>, error: TransportError) {
		self.state
			.borrow_mut()
			.failures
			.insert(locator.into(), error);
	}

	/// Holds the next request for `locator` until the gate is opened.
	pub fn gate(&self, locator: impl Into<String>) -> Gate {
		let (sender, receiver) = oneshot::channel();
		self.state
			.borrow_mut()
			.gates
			.entry(locator.into())
			.or_default()
			.push_back(receiver);
		Gate(sender)
	}

	/// Returns every locator requested so far, in order.
	pub fn requests(&self) -> Vec<String> {
		self.state.borrow().requests.clone()
	}
}

#[async_trait(?Send)]
impl Transport for MockTransport {
	async fn fetch_text(&self, locator: &str) -> Result<String, TransportError> {
		let gate = {
			let mut state = self.state.borrow_mut();
			state.requests.push(locator.to_string());
			state
				.gates
				.get_mut(locator)
				.and_then(VecDeque::pop_front)
		};

		if let Some(gate) = gate {
			// A dropped gate releases the request like an opened one.
			let _ = gate.await;
		}

		let state = self.state.borrow();
		if let Some(error) = state.failures.get(locator) {
			return Err(error.clone());
		}
		state
			.sources
			.get(locator)
			.cloned()
			.ok_or_else(|| TransportError::NotFound(locator.to_string()))
	}
}

/// Releases one held request of a [`MockTransport`].
#[derive(Debug)]
pub struct Gate(oneshot::Sender<()>);

impl Gate {
	/// Lets the held request complete.
	pub fn open(self) {
		let _ = self.0.send(());
	}
}
