//! Headless browser
//!
//! An in-memory stand-in for the parts of a browser the router touches: the
//! session history stack, the document title, a container element inside a
//! page shell, keyboard focus and click dispatch on the body.
//!
//! Selectors passed to [`Document::focus_first`] are evaluated with
//! `scraper` against the full page (shell plus current container content),
//! so `main > h1` behaves as it would in a real document.

use scraper::{Html, Selector};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use url::Url;
use waypost_core::location;
use waypost_core::{
	AnchorTarget, ClickEvent, ClickListener, ClickModifiers, Container, Document, DomError,
	HistoryState, NavigatedListener, NavigationError, NavigationState,
};

/// Default markup before the container content.
pub const DEFAULT_SHELL_BEFORE: &str = r#"<body><main id="app">"#;
/// Default markup after the container content.
pub const DEFAULT_SHELL_AFTER: &str = "</main></body>";

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// One session history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
	/// Entry URL.
	pub url: Url,
	/// State object, `None` for entries not created by a push/replace.
	pub state: Option<HistoryState>,
	/// Title argument passed with the entry.
	pub title: String,
}

/// The element that currently has keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedElement {
	/// Selector used to find it.
	pub selector: String,
	/// Tag name.
	pub tag: String,
	/// Text content.
	pub text: String,
	/// `tabindex` given to the element before focusing.
	pub tabindex: String,
}

/// Result of a simulated click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
	/// Whether a listener called `prevent_default`.
	pub default_prevented: bool,
}

struct BrowserState {
	entries: Vec<HistoryEntry>,
	index: usize,
	title: String,
	shell_before: String,
	shell_after: String,
	container_html: String,
	container_attributes: BTreeMap<String, String>,
	container_writes: usize,
	focused: Option<FocusedElement>,
	click_listeners: Vec<ClickListener>,
	navigated_listeners: Vec<NavigatedListener>,
}

/// Headless browser implementing [`NavigationState`] and [`Document`].
///
/// Cloning yields another handle to the same browser.
///
/// # Example
///
/// ```
/// use waypost_core::{HistoryState, NavigationState};
/// use waypost_test::HeadlessBrowser;
///
/// let browser = HeadlessBrowser::new("https://example.com/").unwrap();
/// browser
///     .push_entry(&HistoryState::new("/about"), "", "/about")
///     .unwrap();
/// assert_eq!(browser.location().unwrap().path(), "/about");
/// assert_eq!(browser.entry_count(), 2);
/// ```
#[derive(Clone)]
pub struct HeadlessBrowser {
	state: Rc<RefCell<BrowserState>>,
}

impl std::fmt::Debug for HeadlessBrowser {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state.borrow();
		f.debug_struct("HeadlessBrowser")
			.field("location", &state.entries[state.index].url.as_str())
			.field("entries", &state.entries.len())
			.field("title", &state.title)
			.finish()
	}
}

impl HeadlessBrowser {
	/// Opens a browser at `url`.
	pub fn new(url: &str) -> Result<Self, NavigationError> {
		let url = location::parse(url)?;
		Ok(Self {
			state: Rc::new(RefCell::new(BrowserState {
				entries: vec![HistoryEntry {
					url,
					state: None,
					title: String::new(),
				}],
				index: 0,
				title: String::new(),
				shell_before: DEFAULT_SHELL_BEFORE.to_string(),
				shell_after: DEFAULT_SHELL_AFTER.to_string(),
				container_html: String::new(),
				container_attributes: BTreeMap::new(),
				container_writes: 0,
				focused: None,
				click_listeners: Vec::new(),
				navigated_listeners: Vec::new(),
			})),
		})
	}

	/// Replaces the page shell surrounding the container content.
	pub fn with_shell(self, before: impl Into<String>, after: impl Into<String>) -> Self {
		{
			let mut state = self.state.borrow_mut();
			state.shell_before = before.into();
			state.shell_after = after.into();
		}
		self
	}

	/// Returns a handle to the container element.
	pub fn container(&self) -> HeadlessContainer {
		HeadlessContainer {
			state: Rc::clone(&self.state),
		}
	}

	/// Returns the pathname of the current entry.
	pub fn location_path(&self) -> String {
		let state = self.state.borrow();
		state.entries[state.index].url.path().to_string()
	}

	/// Returns the current container content.
	pub fn container_html(&self) -> String {
		self.state.borrow().container_html.clone()
	}

	/// Returns how many times the container content was replaced.
	pub fn container_writes(&self) -> usize {
		self.state.borrow().container_writes
	}

	/// Returns an attribute of the container element.
	pub fn container_attribute(&self, name: &str) -> Option<String> {
		self.state.borrow().container_attributes.get(name).cloned()
	}

	/// Returns the full page markup.
	pub fn page_html(&self) -> String {
		let state = self.state.borrow();
		format!(
			"{}{}{}",
			state.shell_before, state.container_html, state.shell_after
		)
	}

	/// Returns the focused element, if any.
	pub fn focused(&self) -> Option<FocusedElement> {
		self.state.borrow().focused.clone()
	}

	/// Moves focus to an element outside the router's control.
	pub fn set_focus(&self, element: FocusedElement) {
		self.state.borrow_mut().focused = Some(element);
	}

	/// Returns all session history entries.
	pub fn entries(&self) -> Vec<HistoryEntry> {
		self.state.borrow().entries.clone()
	}

	/// Returns the index of the current entry.
	pub fn current_index(&self) -> usize {
		self.state.borrow().index
	}

	/// Goes back one entry. Returns false when already at the first entry.
	pub fn back(&self) -> bool {
		self.go(-1)
	}

	/// Goes forward one entry. Returns false when already at the last entry.
	pub fn forward(&self) -> bool {
		self.go(1)
	}

	/// Moves `delta` entries through history and fires the navigated
	/// listeners, like `history.go(delta)` followed by `popstate`.
	pub fn go(&self, delta: isize) -> bool {
		let listeners = {
			let mut state = self.state.borrow_mut();
			let Some(target) = state.index.checked_add_signed(delta) else {
				return false;
			};
			if delta == 0 || target >= state.entries.len() {
				return false;
			}
			state.index = target;
			state.navigated_listeners.clone()
		};

		for listener in listeners {
			listener();
		}
		true
	}

	/// Clicks an `<a href="...">` element with a plain primary-button click.
	pub fn click_link(&self, href: &str) -> ClickOutcome {
		self.click_link_with(href, ClickModifiers::default())
	}

	/// Clicks an `<a href="...">` element with the given modifiers.
	///
	/// The anchor's `href` and `hostname` are resolved against the current
	/// location the way the DOM resolves them.
	pub fn click_link_with(&self, href: &str, modifiers: ClickModifiers) -> ClickOutcome {
		let anchor = {
			let state = self.state.borrow();
			let base = &state.entries[state.index].url;
			match location::resolve(base, href) {
				Ok(url) => AnchorTarget {
					hostname: location::hostname(&url).to_string(),
					href: url.to_string(),
				},
				Err(_) => AnchorTarget {
					href: href.to_string(),
					hostname: String::new(),
				},
			}
		};
		self.dispatch_click(Some(anchor), modifiers)
	}

	/// Clicks an element that is not an anchor (a button, or a `<span>`
	/// nested inside an anchor).
	pub fn click_non_anchor(&self) -> ClickOutcome {
		self.dispatch_click(None, ClickModifiers::default())
	}

	fn dispatch_click(&self, anchor: Option<AnchorTarget>, modifiers: ClickModifiers) -> ClickOutcome {
		let listeners = self.state.borrow().click_listeners.clone();
		let event = HeadlessClickEvent {
			anchor,
			modifiers,
			prevented: Cell::new(false),
		};

		for listener in listeners {
			listener(&event);
		}

		ClickOutcome {
			default_prevented: event.prevented.get(),
		}
	}

	fn write_entry(
		&self,
		state: &HistoryState,
		title: &str,
		url: &str,
		replace: bool,
	) -> Result<(), NavigationError> {
		let mut browser = self.state.borrow_mut();
		let current = &browser.entries[browser.index].url;
		let url = location::resolve(current, url)?;

		if url.origin() != current.origin() {
			return Err(NavigationError::Rejected(format!(
				"SecurityError: a history entry for {} cannot be created in a document with origin {}",
				url,
				current.origin().ascii_serialization()
			)));
		}

		let entry = HistoryEntry {
			url,
			state: Some(state.clone()),
			title: title.to_string(),
		};

		if replace {
			let index = browser.index;
			browser.entries[index] = entry;
		} else {
			let next = browser.index + 1;
			browser.entries.truncate(next);
			browser.entries.push(entry);
			browser.index = next;
		}
		Ok(())
	}
}

impl NavigationState for HeadlessBrowser {
	fn location(&self) -> Result<Url, NavigationError> {
		let state = self.state.borrow();
		Ok(state.entries[state.index].url.clone())
	}

	fn push_entry(
		&self,
		state: &HistoryState,
		title: &str,
		url: &str,
	) -> Result<(), NavigationError> {
		self.write_entry(state, title, url, false)
	}

	fn replace_entry(
		&self,
		state: &HistoryState,
		title: &str,
		url: &str,
	) -> Result<(), NavigationError> {
		self.write_entry(state, title, url, true)
	}

	fn entry_count(&self) -> usize {
		self.state.borrow().entries.len()
	}

	fn on_navigated(&self, listener: NavigatedListener) -> Result<(), DomError> {
		self.state.borrow_mut().navigated_listeners.push(listener);
		Ok(())
	}
}

impl Document for HeadlessBrowser {
	fn title(&self) -> String {
		self.state.borrow().title.clone()
	}

	fn set_title(&self, title: &str) {
		self.state.borrow_mut().title = title.to_string();
	}

	fn focus_first(&self, selector: &str) -> Result<(), DomError> {
		let parsed = Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
			selector: selector.to_string(),
			reason: e.to_string(),
		})?;

		let page = Html::parse_document(&self.page_html());
		let element = page
			.select(&parsed)
			.next()
			.ok_or_else(|| DomError::NoSuchElement(selector.to_string()))?;

		// Only HTML elements have `focus()`; SVG and MathML nodes do not.
		if &*element.value().name.ns != XHTML_NAMESPACE {
			return Err(DomError::NotFocusable(selector.to_string()));
		}

		let focused = FocusedElement {
			selector: selector.to_string(),
			tag: element.value().name().to_string(),
			text: element.text().collect(),
			tabindex: "-1".to_string(),
		};
		self.state.borrow_mut().focused = Some(focused);
		Ok(())
	}

	fn on_click(&self, listener: ClickListener) -> Result<(), DomError> {
		self.state.borrow_mut().click_listeners.push(listener);
		Ok(())
	}
}

/// The container element of a [`HeadlessBrowser`].
#[derive(Clone)]
pub struct HeadlessContainer {
	state: Rc<RefCell<BrowserState>>,
}

impl std::fmt::Debug for HeadlessContainer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HeadlessContainer")
			.field("html", &self.state.borrow().container_html)
			.finish()
	}
}

impl Container for HeadlessContainer {
	fn replace_content(&self, html: &str) {
		let mut state = self.state.borrow_mut();
		state.container_html = html.to_string();
		state.container_writes += 1;
	}

	fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
		self.state
			.borrow_mut()
			.container_attributes
			.insert(name.to_string(), value.to_string());
		Ok(())
	}
}

struct HeadlessClickEvent {
	anchor: Option<AnchorTarget>,
	modifiers: ClickModifiers,
	prevented: Cell<bool>,
}

impl ClickEvent for HeadlessClickEvent {
	fn anchor(&self) -> Option<AnchorTarget> {
		self.anchor.clone()
	}

	fn modifiers(&self) -> ClickModifiers {
		self.modifiers
	}

	fn prevent_default(&self) {
		self.prevented.set(true);
	}
}
