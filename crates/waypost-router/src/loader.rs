//! The view load cycle.
//!
//! A load has a synchronous prelude and an asynchronous body. The prelude
//! runs as soon as the load is started: it reads the location, records it
//! as the router's current URL and matches the route, so that a second
//! navigation issued right after cannot change what the first one loads.
//! The body fetches and renders the view, places it, updates the title and
//! moves focus. Every failure ends in the not-found placeholder.

use crate::focus;
use crate::router::RouterInner;
use crate::state::LoadOutcome;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::rc::Rc;
use thiserror::Error;
use tracing::{Instrument, debug, debug_span, warn};
use url::Url;
use waypost_core::{
	Diagnostic, LoadPolicy, NavigationKind, Route, TemplateError, TransportError, ViewContext,
};

/// Why a matched view could not be produced.
#[derive(Debug, Error)]
enum ViewError {
	#[error(transparent)]
	Transport(#[from] TransportError),
	#[error(transparent)]
	Template(#[from] TemplateError),
}

/// Starts a load for the current location.
///
/// The prelude has already run when this returns; the returned future
/// performs the rest.
pub(crate) fn start(
	inner: &Rc<RouterInner>,
	kind: NavigationKind,
) -> LocalBoxFuture<'static, LoadOutcome> {
	let ticket = inner.tracker.begin();

	let url = match inner.history.location() {
		Ok(url) => {
			*inner.current_url.borrow_mut() = Some(url.clone());
			Some(url)
		}
		Err(err) => {
			warn!(error = %err, %kind, "failed to read location");
			None
		}
	};
	let route = url
		.as_ref()
		.and_then(|url| inner.routes.match_path(url.path()))
		.cloned();
	let pathname = url
		.as_ref()
		.map(|url| url.path().to_string())
		.unwrap_or_default();

	let span = debug_span!("view_load", %kind, %pathname);
	let inner = Rc::clone(inner);

	async move {
		let (html, outcome, failure) = match (&route, &url) {
			(Some(route), Some(url)) => match render_view(&inner, route, url).await {
				Ok(html) => (html, LoadOutcome::Rendered, None),
				Err(err) => (
					inner.settings.not_found_html.clone(),
					LoadOutcome::ViewUnavailable,
					Some(Diagnostic::ViewUnavailable {
						pathname: pathname.clone(),
						view: route.view().to_string(),
						reason: err.to_string(),
					}),
				),
			},
			_ => (
				inner.settings.not_found_html.clone(),
				LoadOutcome::NotFound,
				None,
			),
		};

		// A discarded result reports nothing, failures included.
		if inner.settings.load_policy == LoadPolicy::LatestNavigationWins && !ticket.is_latest() {
			debug!("newer navigation started, discarding result");
			return LoadOutcome::Superseded;
		}

		if let Some(diagnostic) = &failure {
			inner.diagnostics.report(diagnostic);
		}

		inner.container.replace_content(&html);

		if let Some(route) = &route {
			inner.document.set_title(route.title());
		}

		focus::focus_heading(&inner, &pathname);

		debug!(?outcome, "view placed");
		drop(ticket);
		outcome
	}
	.instrument(span)
	.boxed_local()
}

async fn render_view(inner: &RouterInner, route: &Route, url: &Url) -> Result<String, ViewError> {
	let source = inner.transport.fetch_text(route.view()).await?;
	let context = ViewContext::for_route(route, url);
	Ok(inner.engine.render(&source, &context).await?)
}
