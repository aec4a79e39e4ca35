//! Focus management after a view is placed.
//!
//! Screen-reader users rely on focus moving to the new page's main heading,
//! see <https://a11y-guidelines.orange.com/en/articles/single-page-app/>.

use crate::router::RouterInner;
use tracing::{debug, warn};
use waypost_core::{Diagnostic, DomError};

/// Focuses the heading selected by the settings.
///
/// Returns whether focus moved. A missing heading is a page-authoring
/// mistake: it is reported to the diagnostics sink and focus stays put.
pub(crate) fn focus_heading(inner: &RouterInner, pathname: &str) -> bool {
	let selector = inner.settings.heading_selector.as_str();

	match inner.document.focus_first(selector) {
		Ok(()) => {
			debug!(%selector, "focused heading");
			true
		}
		Err(DomError::NoSuchElement(_)) => {
			inner.diagnostics.report(&Diagnostic::MissingHeading {
				pathname: pathname.to_string(),
				selector: selector.to_string(),
			});
			false
		}
		Err(err) => {
			warn!(error = %err, %selector, "failed to focus heading");
			false
		}
	}
}
