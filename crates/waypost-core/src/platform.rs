//! Platform abstraction for browser state.
//!
//! The router talks to the browser only through these traits: the history
//! stack ([`NavigationState`]), the document ([`Document`]) and the mount
//! point ([`Container`]). The `web` module binds them to `web-sys` on
//! `wasm32`; the `waypost-test` crate provides a headless implementation for
//! native tests.

use crate::error::{DomError, NavigationError};
use crate::history::HistoryState;
use std::rc::Rc;
use url::Url;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Callback fired when the user moves through existing history entries.
pub type NavigatedListener = Rc<dyn Fn()>;

/// Callback fired for every click delivered to the document body.
pub type ClickListener = Rc<dyn Fn(&dyn ClickEvent)>;

/// The anchor element a click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorTarget {
	/// Fully resolved `href`.
	pub href: String,
	/// Resolved hostname, empty for host-less schemes.
	pub hostname: String,
}

/// Modifier keys and button of a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
	/// Control key held.
	pub ctrl: bool,
	/// Meta (command) key held.
	pub meta: bool,
	/// Shift key held.
	pub shift: bool,
	/// Alt (option) key held.
	pub alt: bool,
	/// Mouse button, `0` for the primary button.
	pub button: i16,
}

impl ClickModifiers {
	/// A primary-button click with no modifier keys.
	pub fn is_plain(&self) -> bool {
		!(self.ctrl || self.meta || self.shift || self.alt) && self.button == 0
	}
}

/// A click event as seen by the delegated body listener.
pub trait ClickEvent {
	/// Returns the anchor when the event target itself is an `<a>` element.
	///
	/// Clicks on descendants of an anchor return `None`.
	fn anchor(&self) -> Option<AnchorTarget>;

	/// Returns modifier keys and button.
	fn modifiers(&self) -> ClickModifiers;

	/// Suppresses the browser's default action.
	fn prevent_default(&self);
}

/// The browser's history stack and current address.
pub trait NavigationState {
	/// Returns the current location.
	fn location(&self) -> Result<Url, NavigationError>;

	/// Adds a new entry and makes `url` the current address.
	fn push_entry(
		&self,
		state: &HistoryState,
		title: &str,
		url: &str,
	) -> Result<(), NavigationError>;

	/// Overwrites the current entry and makes `url` the current address.
	fn replace_entry(
		&self,
		state: &HistoryState,
		title: &str,
		url: &str,
	) -> Result<(), NavigationError>;

	/// Returns the number of entries in the session history.
	fn entry_count(&self) -> usize;

	/// Registers a listener for back/forward traversal.
	fn on_navigated(&self, listener: NavigatedListener) -> Result<(), DomError>;
}

/// The document the router mounts into.
pub trait Document {
	/// Returns the document title.
	fn title(&self) -> String;

	/// Sets the document title.
	fn set_title(&self, title: &str);

	/// Makes the first element matching `selector` focusable and focuses it.
	fn focus_first(&self, selector: &str) -> Result<(), DomError>;

	/// Registers a click listener on the document body.
	fn on_click(&self, listener: ClickListener) -> Result<(), DomError>;
}

/// The element whose content the router owns.
pub trait Container {
	/// Replaces the entire content with `html`.
	fn replace_content(&self, html: &str);

	/// Sets an attribute on the container element.
	fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;
}
