//! `web-sys` bindings for the platform traits.
//!
//! Listeners registered here are leaked with [`Closure::forget`]: the router
//! keeps them for the lifetime of the page and never deregisters them.

use super::{
	AnchorTarget, ClickEvent, ClickListener, ClickModifiers, Container, Document,
	NavigatedListener, NavigationState,
};
use crate::error::{DomError, NavigationError};
use crate::history::HistoryState;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

fn js_message(value: &JsValue) -> String {
	value
		.as_string()
		.or_else(|| {
			value
				.dyn_ref::<js_sys::Error>()
				.map(|e| String::from(e.message()))
		})
		.unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, DomError> {
	web_sys::window().ok_or(DomError::Unavailable("window"))
}

fn state_to_js(state: &HistoryState) -> Result<JsValue, NavigationError> {
	let json =
		serde_json::to_string(state).map_err(|e| NavigationError::Rejected(e.to_string()))?;
	js_sys::JSON::parse(&json).map_err(|e| NavigationError::Rejected(js_message(&e)))
}

/// The browser's `window.history` and `window.location`.
#[derive(Debug, Clone)]
pub struct WebHistory {
	window: web_sys::Window,
}

impl WebHistory {
	/// Binds to the global window.
	pub fn new() -> Result<Self, DomError> {
		Ok(Self { window: window()? })
	}

	fn history(&self) -> Result<web_sys::History, NavigationError> {
		self.window
			.history()
			.map_err(|e| NavigationError::Rejected(js_message(&e)))
	}
}

impl NavigationState for WebHistory {
	fn location(&self) -> Result<Url, NavigationError> {
		let href = self
			.window
			.location()
			.href()
			.map_err(|e| NavigationError::LocationUnavailable(js_message(&e)))?;
		crate::location::parse(&href)
	}

	fn push_entry(
		&self,
		state: &HistoryState,
		title: &str,
		url: &str,
	) -> Result<(), NavigationError> {
		self.history()?
			.push_state_with_url(&state_to_js(state)?, title, Some(url))
			.map_err(|e| NavigationError::Rejected(js_message(&e)))
	}

	fn replace_entry(
		&self,
		state: &HistoryState,
		title: &str,
		url: &str,
	) -> Result<(), NavigationError> {
		self.history()?
			.replace_state_with_url(&state_to_js(state)?, title, Some(url))
			.map_err(|e| NavigationError::Rejected(js_message(&e)))
	}

	fn entry_count(&self) -> usize {
		self.history()
			.ok()
			.and_then(|history| history.length().ok())
			.unwrap_or(0) as usize
	}

	fn on_navigated(&self, listener: NavigatedListener) -> Result<(), DomError> {
		let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
			listener();
		});
		self.window
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
			.map_err(|e| DomError::Listener {
				event: "popstate".to_string(),
				reason: js_message(&e),
			})?;
		closure.forget();
		Ok(())
	}
}

/// A click event delivered by the browser.
struct WebClickEvent {
	event: web_sys::Event,
}

impl ClickEvent for WebClickEvent {
	fn anchor(&self) -> Option<AnchorTarget> {
		let target = self.event.target()?;
		let anchor = target.dyn_ref::<web_sys::HtmlAnchorElement>()?;
		Some(AnchorTarget {
			href: anchor.href(),
			hostname: anchor.hostname(),
		})
	}

	fn modifiers(&self) -> ClickModifiers {
		match self.event.dyn_ref::<web_sys::MouseEvent>() {
			Some(mouse) => ClickModifiers {
				ctrl: mouse.ctrl_key(),
				meta: mouse.meta_key(),
				shift: mouse.shift_key(),
				alt: mouse.alt_key(),
				button: mouse.button(),
			},
			None => ClickModifiers::default(),
		}
	}

	fn prevent_default(&self) {
		self.event.prevent_default();
	}
}

/// The global `document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
	document: web_sys::Document,
}

impl WebDocument {
	/// Binds to the global document.
	pub fn new() -> Result<Self, DomError> {
		let document = window()?
			.document()
			.ok_or(DomError::Unavailable("document"))?;
		Ok(Self { document })
	}

	/// Looks up the container element by id.
	pub fn container_by_id(&self, id: &str) -> Result<WebContainer, DomError> {
		self.document
			.get_element_by_id(id)
			.map(WebContainer::new)
			.ok_or_else(|| DomError::NoSuchElement(format!("#{}", id)))
	}

	/// Looks up the container element by selector.
	pub fn container(&self, selector: &str) -> Result<WebContainer, DomError> {
		self.query(selector)?
			.map(WebContainer::new)
			.ok_or_else(|| DomError::NoSuchElement(selector.to_string()))
	}

	fn query(&self, selector: &str) -> Result<Option<web_sys::Element>, DomError> {
		self.document
			.query_selector(selector)
			.map_err(|e| DomError::InvalidSelector {
				selector: selector.to_string(),
				reason: js_message(&e),
			})
	}
}

impl Document for WebDocument {
	fn title(&self) -> String {
		self.document.title()
	}

	fn set_title(&self, title: &str) {
		self.document.set_title(title);
	}

	fn focus_first(&self, selector: &str) -> Result<(), DomError> {
		let element = self
			.query(selector)?
			.ok_or_else(|| DomError::NoSuchElement(selector.to_string()))?;

		let element = element
			.dyn_into::<web_sys::HtmlElement>()
			.map_err(|_| DomError::NotFocusable(selector.to_string()))?;

		// Headings are not focusable without a tabindex.
		element
			.set_attribute("tabindex", "-1")
			.map_err(|e| DomError::Attribute {
				name: "tabindex".to_string(),
				reason: js_message(&e),
			})?;

		element.focus().map_err(|e| DomError::Focus {
			selector: selector.to_string(),
			reason: js_message(&e),
		})
	}

	fn on_click(&self, listener: ClickListener) -> Result<(), DomError> {
		let body = self.document.body().ok_or(DomError::Unavailable("body"))?;
		let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
			listener(&WebClickEvent { event });
		});
		body.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
			.map_err(|e| DomError::Listener {
				event: "click".to_string(),
				reason: js_message(&e),
			})?;
		closure.forget();
		Ok(())
	}
}

/// A DOM element used as the router's mount point.
#[derive(Debug, Clone)]
pub struct WebContainer {
	element: web_sys::Element,
}

impl WebContainer {
	/// Wraps an element.
	pub fn new(element: web_sys::Element) -> Self {
		Self { element }
	}
}

impl Container for WebContainer {
	fn replace_content(&self, html: &str) {
		self.element.set_inner_html(html);
	}

	fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
		self.element
			.set_attribute(name, value)
			.map_err(|e| DomError::Attribute {
				name: name.to_string(),
				reason: js_message(&e),
			})
	}
}
