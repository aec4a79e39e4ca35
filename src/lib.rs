//! # Waypost
//!
//! A minimal client-side navigation engine for single-page applications.
//!
//! Waypost maps exact pathnames to views. A view is a template fetched at
//! navigation time and rendered into one container element. The router
//! keeps the history stack, the document title and keyboard focus in step
//! with what is displayed, and turns clicks on same-host links into
//! in-page navigations.
//!
//! ## Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `waypost-core` | routes, settings, errors, platform and collaborator traits |
//! | `waypost-router` | [`Router`] and the view load cycle |
//! | `waypost-template` | [`TeraEngine`], [`FnEngine`] (feature `templates`) |
//! | `waypost-transport` | [`HttpTransport`] (feature `http`), [`StaticTransport`] |
//! | `waypost-test` | headless browser and mocks (feature `test`) |
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use waypost::prelude::*;
//!
//! let routes = RouteTable::new(vec![
//!     Route::new("/", "/views/home.tpl", "Home"),
//!     Route::new("/about", "/views/about.tpl", "About"),
//! ])?;
//!
//! // In the browser: mounts on <div id="app"> with Tera and HTTP fetches.
//! let router = waypost::mount("app", routes)?;
//! router.navigate_to("/about")?;
//! ```
//!
//! Routes and settings can also come from a manifest:
//!
//! ```toml
//! [[routes]]
//! pathname = "/"
//! view = "/views/home.tpl"
//! title = "Home"
//!
//! [settings]
//! load_policy = "latest_navigation_wins"
//! ```

#![warn(missing_docs)]

pub use waypost_core::{
	ConfigError, Container, Diagnostic, DiagnosticSink, Document, DomError, HistoryState,
	LiveRegion, LoadPolicy, LocalSpawn, NavigationError, NavigationKind, NavigationState, Route,
	RouteError, RouteManifest, RouteTable, RouterError, RouterResult, RouterSettings,
	TemplateEngine, TemplateError, TracingSink, Transport, TransportError, Url, ViewContext,
	async_trait,
};
pub use waypost_router::{LoadOutcome, Router, RouterBuilder, RouterState};
pub use waypost_transport::StaticTransport;

#[cfg(feature = "http")]
pub use waypost_transport::HttpTransport;

#[cfg(feature = "templates")]
pub use waypost_template::{FnEngine, TeraEngine};

/// Testing support, re-exported from `waypost-test`.
#[cfg(feature = "test")]
pub use waypost_test as test;

/// Browser bindings, available on `wasm32`.
#[cfg(target_arch = "wasm32")]
pub use waypost_core::platform::web;

/// Commonly used items.
pub mod prelude {
	pub use crate::{
		LoadOutcome, LoadPolicy, Route, RouteManifest, RouteTable, Router, RouterError,
		RouterResult, RouterSettings, RouterState, StaticTransport,
	};

	#[cfg(feature = "http")]
	pub use crate::HttpTransport;

	#[cfg(feature = "templates")]
	pub use crate::TeraEngine;
}

/// Mounts a router on the element with id `container_id`.
///
/// Views are fetched over HTTP relative to the page URL and rendered with
/// Tera; document, history and spawner are the browser's.
#[cfg(all(target_arch = "wasm32", feature = "templates", feature = "http"))]
pub fn mount(container_id: &str, routes: RouteTable) -> RouterResult<Router> {
	mount_with(container_id, routes, RouterSettings::default())
}

/// Mounts a router from a parsed [`RouteManifest`].
#[cfg(all(target_arch = "wasm32", feature = "templates", feature = "http"))]
pub fn mount_manifest(container_id: &str, manifest: RouteManifest) -> RouterResult<Router> {
	mount_with(container_id, manifest.routes, manifest.settings)
}

/// Like [`mount`], with explicit settings.
#[cfg(all(target_arch = "wasm32", feature = "templates", feature = "http"))]
pub fn mount_with(
	container_id: &str,
	routes: RouteTable,
	settings: RouterSettings,
) -> RouterResult<Router> {
	use crate::web::{WebDocument, WebHistory};

	let document = WebDocument::new()?;
	let container = document.container_by_id(container_id)?;
	let history = WebHistory::new()?;
	let base_url = history.location()?;

	Router::builder(container, routes)
		.document(document)
		.history(history)
		.transport(HttpTransport::with_base_url(base_url))
		.engine(TeraEngine::new())
		.settings(settings)
		.mount()
}
