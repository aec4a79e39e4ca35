//! Core Router Implementation.
//!
//! This module provides the [`Router`] handle and its [`RouterBuilder`].

use crate::anchors;
use crate::loader;
use crate::state::{LoadOutcome, LoadTracker, RouterState};
use futures::FutureExt;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use url::Url;
use waypost_core::location;
use waypost_core::{
	Container, DiagnosticSink, Document, HistoryState, LocalSpawn, NavigationError,
	NavigationKind, NavigationState, Route, RouteTable, RouterError, RouterResult, RouterSettings,
	TemplateEngine, TracingSink, Transport,
};

/// State shared by the router handle, its listeners and in-flight loads.
pub(crate) struct RouterInner {
	pub(crate) container: Rc<dyn Container>,
	pub(crate) document: Rc<dyn Document>,
	pub(crate) history: Rc<dyn NavigationState>,
	pub(crate) transport: Rc<dyn Transport>,
	pub(crate) engine: Rc<dyn TemplateEngine>,
	pub(crate) spawner: Rc<dyn LocalSpawn>,
	pub(crate) diagnostics: Rc<dyn DiagnosticSink>,
	pub(crate) routes: RouteTable,
	pub(crate) settings: RouterSettings,
	pub(crate) current_url: RefCell<Option<Url>>,
	pub(crate) tracker: Rc<LoadTracker>,
}

/// The client-side router.
///
/// A `Router` owns the content of one container element. It matches the
/// current pathname against its routes, fetches and renders the matched
/// view, intercepts same-host link clicks and re-renders on back/forward
/// navigation.
///
/// The handle is cheap to clone; all clones drive the same router. Internal
/// state is only reachable through the read-only accessors.
///
/// # Example
///
/// ```ignore
/// use waypost_router::Router;
/// use waypost_core::{Route, RouteTable};
///
/// let routes = RouteTable::new(vec![
///     Route::new("/", "/views/home.tpl", "Home"),
///     Route::new("/about", "/views/about.tpl", "About"),
/// ])?;
///
/// let router = Router::builder(container, routes)
///     .document(document)
///     .history(history)
///     .transport(transport)
///     .engine(engine)
///     .spawner(spawner)
///     .mount()?;
///
/// router.navigate_to("/about")?;
/// ```
#[derive(Clone)]
pub struct Router {
	pub(crate) inner: Rc<RouterInner>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.inner.routes.len())
			.field("current_url", &self.inner.current_url.borrow())
			.field("state", &self.state())
			.finish()
	}
}

impl Router {
	/// Starts building a router for `container` with `routes`.
	pub fn builder(container: impl Container + 'static, routes: RouteTable) -> RouterBuilder {
		RouterBuilder::new(Rc::new(container), routes)
	}

	/// Pushes a new history entry for `target` and loads its view.
	///
	/// `target` is an absolute path (query and fragment allowed) or a full
	/// same-origin URL. The address is updated before this returns; the
	/// view load continues on the event loop and never fails the call.
	pub fn navigate_to(&self, target: &str) -> RouterResult<()> {
		self.navigate(target, NavigationKind::Push)
	}

	/// Overwrites the current history entry with `target` and loads its view.
	///
	/// Rendering behaves exactly like [`Router::navigate_to`]; only the
	/// history effect differs.
	pub fn replace_with(&self, target: &str) -> RouterResult<()> {
		self.navigate(target, NavigationKind::Replace)
	}

	/// Re-runs the view load for the current location.
	///
	/// The location is read and the route matched when this is called. The
	/// returned future fetches and renders the view and resolves to the
	/// outcome; it must be polled (or spawned) for the load to finish.
	pub fn reload(&self) -> impl Future<Output = LoadOutcome> + 'static {
		loader::start(&self.inner, NavigationKind::Reload)
	}

	/// Returns whether a load is in flight.
	pub fn state(&self) -> RouterState {
		self.inner.tracker.state()
	}

	/// Returns the URL the last load resolved against.
	pub fn current_url(&self) -> Option<Url> {
		self.inner.current_url.borrow().clone()
	}

	/// Returns the route table.
	pub fn routes(&self) -> &RouteTable {
		&self.inner.routes
	}

	/// Returns the settings.
	pub fn settings(&self) -> &RouterSettings {
		&self.inner.settings
	}

	/// Finds the route for `pathname`.
	pub fn match_path(&self, pathname: &str) -> Option<&Route> {
		self.inner.routes.match_path(pathname)
	}

	fn navigate(&self, target: &str, kind: NavigationKind) -> RouterResult<()> {
		let base = self.inner.base_url()?;
		let url = location::resolve(&base, target)?;
		let state = HistoryState::new(url.path()).with_title(
			self.inner
				.routes
				.match_path(url.path())
				.map(Route::title)
				.unwrap_or_default(),
		);

		match kind {
			NavigationKind::Replace => self.inner.history.replace_entry(&state, "", url.as_str()),
			_ => self.inner.history.push_entry(&state, "", url.as_str()),
		}?;

		debug!(%kind, target = %location::path_and_suffix(&url), "history updated");
		self.inner.spawn_load(kind);
		Ok(())
	}
}

impl RouterInner {
	/// The URL relative navigation targets resolve against.
	pub(crate) fn base_url(&self) -> Result<Url, NavigationError> {
		if let Some(url) = self.current_url.borrow().as_ref() {
			return Ok(url.clone());
		}
		self.history.location()
	}

	/// Starts a load and hands its asynchronous part to the spawner.
	pub(crate) fn spawn_load(self: &Rc<Self>, kind: NavigationKind) {
		let load = loader::start(self, kind);
		self.spawner.spawn_local(
			async move {
				load.await;
			}
			.boxed_local(),
		);
	}
}

/// Builder for [`Router`].
///
/// The container and routes are required up front. Document, history,
/// transport, template engine and spawner must be supplied, except that on
/// `wasm32` the document, history and spawner default to the browser's.
/// Natively there is no implicit executor: pass a `LocalPool` spawner or a
/// `TokioLocalSpawner` from inside a `LocalSet`.
pub struct RouterBuilder {
	container: Rc<dyn Container>,
	routes: RouteTable,
	document: Option<Rc<dyn Document>>,
	history: Option<Rc<dyn NavigationState>>,
	transport: Option<Rc<dyn Transport>>,
	engine: Option<Rc<dyn TemplateEngine>>,
	spawner: Option<Rc<dyn LocalSpawn>>,
	diagnostics: Rc<dyn DiagnosticSink>,
	settings: RouterSettings,
}

impl std::fmt::Debug for RouterBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouterBuilder")
			.field("routes_count", &self.routes.len())
			.field("has_document", &self.document.is_some())
			.field("has_history", &self.history.is_some())
			.field("has_transport", &self.transport.is_some())
			.field("has_engine", &self.engine.is_some())
			.field("settings", &self.settings)
			.finish()
	}
}

impl RouterBuilder {
	/// Creates a builder from shared handles.
	pub fn new(container: Rc<dyn Container>, routes: RouteTable) -> Self {
		Self {
			container,
			routes,
			document: None,
			history: None,
			transport: None,
			engine: None,
			spawner: None,
			diagnostics: Rc::new(TracingSink),
			settings: RouterSettings::default(),
		}
	}

	/// Sets the document.
	pub fn document(mut self, document: impl Document + 'static) -> Self {
		self.document = Some(Rc::new(document));
		self
	}

	/// Sets the history backend.
	pub fn history(mut self, history: impl NavigationState + 'static) -> Self {
		self.history = Some(Rc::new(history));
		self
	}

	/// Sets document and history from one platform handle.
	pub fn platform<P>(mut self, platform: Rc<P>) -> Self
	where
		P: Document + NavigationState + 'static,
	{
		self.document = Some(platform.clone());
		self.history = Some(platform);
		self
	}

	/// Sets the view transport.
	pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
		self.transport = Some(Rc::new(transport));
		self
	}

	/// Sets the template engine.
	pub fn engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
		self.engine = Some(Rc::new(engine));
		self
	}

	/// Sets the spawner for view loads.
	pub fn spawner(mut self, spawner: impl LocalSpawn + 'static) -> Self {
		self.spawner = Some(Rc::new(spawner));
		self
	}

	/// Sets the diagnostics sink.
	pub fn diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
		self.diagnostics = Rc::new(sink);
		self
	}

	/// Sets the settings.
	pub fn settings(mut self, settings: RouterSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Mounts the router.
	///
	/// Starts the initial view load for the current location, registers the
	/// back/forward and click listeners, and marks the container as a live
	/// region. Failures of the initial load are handled like any other load
	/// and never returned here.
	pub fn mount(self) -> RouterResult<Router> {
		#[cfg(target_arch = "wasm32")]
		let this = self.with_web_defaults()?;
		#[cfg(not(target_arch = "wasm32"))]
		let this = self;

		let inner = Rc::new(RouterInner {
			container: this.container,
			document: this
				.document
				.ok_or(RouterError::MissingCollaborator("document"))?,
			history: this
				.history
				.ok_or(RouterError::MissingCollaborator("history backend"))?,
			transport: this
				.transport
				.ok_or(RouterError::MissingCollaborator("transport"))?,
			engine: this
				.engine
				.ok_or(RouterError::MissingCollaborator("template engine"))?,
			spawner: this
				.spawner
				.ok_or(RouterError::MissingCollaborator("spawner"))?,
			diagnostics: this.diagnostics,
			routes: this.routes,
			settings: this.settings,
			current_url: RefCell::new(None),
			tracker: LoadTracker::new(),
		});

		inner.spawn_load(NavigationKind::Initial);

		// Listeners keep the router alive for the lifetime of the page, even
		// after every `Router` handle is dropped.
		let listener_inner = Rc::clone(&inner);
		inner.history.on_navigated(Rc::new(move || {
			listener_inner.spawn_load(NavigationKind::Traverse);
		}))?;

		anchors::install(&inner)?;

		let live_region = &inner.settings.live_region;
		inner
			.container
			.set_attribute(&live_region.attribute, &live_region.politeness)?;

		if inner.current_url.borrow().is_none() {
			warn!("initial location could not be read");
		}

		Ok(Router { inner })
	}

	#[cfg(target_arch = "wasm32")]
	fn with_web_defaults(mut self) -> RouterResult<Self> {
		use waypost_core::platform::web::{WebDocument, WebHistory};

		if self.document.is_none() {
			self.document = Some(Rc::new(WebDocument::new()?));
		}
		if self.history.is_none() {
			self.history = Some(Rc::new(WebHistory::new()?));
		}
		if self.spawner.is_none() {
			self.spawner = Some(Rc::new(waypost_core::spawn::WasmSpawner));
		}
		Ok(self)
	}
}
