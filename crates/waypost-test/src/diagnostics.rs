//! Diagnostics recorder.

use std::cell::RefCell;
use std::rc::Rc;
use waypost_core::{Diagnostic, DiagnosticSink};

/// Collects reported diagnostics for assertions.
///
/// Cloning yields another handle to the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
	records: Rc<RefCell<Vec<Diagnostic>>>,
}

impl RecordingSink {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns all diagnostics reported so far.
	pub fn diagnostics(&self) -> Vec<Diagnostic> {
		self.records.borrow().clone()
	}

	/// Returns the pathnames reported as missing a focusable heading.
	pub fn missing_headings(&self) -> Vec<String> {
		self.records
			.borrow()
			.iter()
			.filter_map(|diagnostic| match diagnostic {
				Diagnostic::MissingHeading { pathname, .. } => Some(pathname.clone()),
				_ => None,
			})
			.collect()
	}

	/// Returns the views reported as unavailable.
	pub fn unavailable_views(&self) -> Vec<String> {
		self.records
			.borrow()
			.iter()
			.filter_map(|diagnostic| match diagnostic {
				Diagnostic::ViewUnavailable { view, .. } => Some(view.clone()),
				_ => None,
			})
			.collect()
	}

	/// Forgets everything recorded.
	pub fn clear(&self) {
		self.records.borrow_mut().clear();
	}
}

impl DiagnosticSink for RecordingSink {
	fn report(&self, diagnostic: &Diagnostic) {
		self.records.borrow_mut().push(diagnostic.clone());
	}
}
