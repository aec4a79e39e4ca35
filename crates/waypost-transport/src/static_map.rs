//! In-memory transport.

use std::cell::RefCell;
use std::collections::HashMap;
use tracing::trace;
use waypost_core::{Transport, TransportError, async_trait};

/// Serves view sources from memory, keyed by locator.
///
/// Handy for views bundled into the binary with `include_str!` and for
/// tests.
///
/// # Examples
///
/// ```
/// use waypost_transport::StaticTransport;
///
/// let transport = StaticTransport::new()
///     .with("/views/home.tpl", "<main><h1>{{ title }}</h1></main>");
/// assert!(transport.contains("/views/home.tpl"));
/// ```
#[derive(Debug, Default)]
pub struct StaticTransport {
	sources: RefCell<HashMap<String, String>>,
}

impl StaticTransport {
	/// Creates an empty transport.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a source, builder style.
	pub fn with(self, locator: impl Into<String>, source: impl Into<String>) -> Self {
		self.insert(locator, source);
		self
	}

	/// Adds or replaces a source.
	pub fn insert(&self, locator: impl Into<String>, source: impl Into<String>) {
		self.sources
			.borrow_mut()
			.insert(locator.into(), source.into());
	}

	/// Removes a source, returning it.
	pub fn remove(&self, locator: &str) -> Option<String> {
		self.sources.borrow_mut().remove(locator)
	}

	/// Checks whether a source is registered for `locator`.
	pub fn contains(&self, locator: &str) -> bool {
		self.sources.borrow().contains_key(locator)
	}
}

#[async_trait(?Send)]
impl Transport for StaticTransport {
	async fn fetch_text(&self, locator: &str) -> Result<String, TransportError> {
		trace!(%locator, "serving static view source");
		self.sources
			.borrow()
			.get(locator)
			.cloned()
			.ok_or_else(|| TransportError::NotFound(locator.to_string()))
	}
}
