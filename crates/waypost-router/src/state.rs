//! Load tracking: idle/loading state and navigation generations.

use std::cell::Cell;
use std::rc::Rc;

/// Whether any view load is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
	/// No load is in flight.
	Idle,
	/// At least one load is fetching or rendering.
	Loading {
		/// Number of loads in flight.
		in_flight: usize,
	},
}

impl RouterState {
	/// Returns true when no load is in flight.
	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}
}

/// How a single view load ended.
///
/// Outcomes are informational: every path except `Superseded` has already
/// written the container when the outcome is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
	/// The matched view was fetched, rendered and placed.
	Rendered,
	/// No route matched; the not-found placeholder was placed.
	NotFound,
	/// A route matched but its view could not be fetched or rendered; the
	/// not-found placeholder was placed.
	ViewUnavailable,
	/// A newer navigation started first and the result was discarded.
	Superseded,
}

#[derive(Debug, Default)]
pub(crate) struct LoadTracker {
	generation: Cell<u64>,
	in_flight: Cell<usize>,
}

impl LoadTracker {
	pub(crate) fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	/// Starts a load belonging to a new navigation generation.
	pub(crate) fn begin(self: &Rc<Self>) -> LoadTicket {
		let generation = self.generation.get() + 1;
		self.generation.set(generation);
		self.in_flight.set(self.in_flight.get() + 1);
		LoadTicket {
			tracker: Rc::clone(self),
			generation,
		}
	}

	pub(crate) fn state(&self) -> RouterState {
		match self.in_flight.get() {
			0 => RouterState::Idle,
			in_flight => RouterState::Loading { in_flight },
		}
	}
}

/// Marks one load in flight until dropped.
#[derive(Debug)]
pub(crate) struct LoadTicket {
	tracker: Rc<LoadTracker>,
	generation: u64,
}

impl LoadTicket {
	/// True when no navigation started after this one.
	pub(crate) fn is_latest(&self) -> bool {
		self.tracker.generation.get() == self.generation
	}
}

impl Drop for LoadTicket {
	fn drop(&mut self) {
		self.tracker
			.in_flight
			.set(self.tracker.in_flight.get().saturating_sub(1));
	}
}
