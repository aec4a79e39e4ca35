//! In-page link interception.
//!
//! One listener on the document body inspects every click. A click is taken
//! over only when its target is itself an anchor and the anchor's hostname
//! equals the hostname of the router's current URL; everything else is left
//! to the browser.

use crate::router::{Router, RouterInner};
use std::rc::Rc;
use tracing::{debug, warn};
use waypost_core::location;
use waypost_core::{AnchorTarget, ClickEvent, DomError, RouterSettings};

/// Decides whether a click should become a router navigation.
pub(crate) fn intercepted_anchor(
	event: &dyn ClickEvent,
	current_hostname: &str,
	settings: &RouterSettings,
) -> Option<AnchorTarget> {
	let anchor = event.anchor()?;

	if anchor.hostname != current_hostname {
		return None;
	}
	if settings.respect_modifier_keys && !event.modifiers().is_plain() {
		return None;
	}

	Some(anchor)
}

/// Registers the delegated click listener.
///
/// The listener owns a router handle, so interception continues after the
/// caller drops its own.
pub(crate) fn install(inner: &Rc<RouterInner>) -> Result<(), DomError> {
	let router = Router {
		inner: Rc::clone(inner),
	};
	inner.document.on_click(Rc::new(move |event: &dyn ClickEvent| {
		router.handle_click(event);
	}))
}

impl Router {
	fn handle_click(&self, event: &dyn ClickEvent) {
		let Some(current) = self.current_url() else {
			return;
		};

		let Some(anchor) =
			intercepted_anchor(event, location::hostname(&current), self.settings())
		else {
			return;
		};

		event.prevent_default();
		debug!(href = %anchor.href, "intercepted link click");

		if let Err(err) = self.navigate_to(&anchor.href) {
			warn!(error = %err, href = %anchor.href, "intercepted navigation failed");
		}
	}
}
