//! Test harness and rstest fixtures.

use crate::browser::HeadlessBrowser;
use crate::diagnostics::RecordingSink;
use crate::engine::StubEngine;
use crate::transport::MockTransport;
use futures::executor::{LocalPool, LocalSpawner};
use rstest::fixture;
use waypost_core::{Route, RouteTable};

/// Origin the harness browser starts on.
pub const TEST_ORIGIN: &str = "https://app.example.com";

/// A headless browser, scriptable collaborators and a single-threaded
/// executor that runs view loads only when the test asks it to.
///
/// ```
/// use waypost_test::Harness;
///
/// let mut harness = Harness::at("/").with_view("/views/home.tpl", "<h1>{{ title }}</h1>");
/// harness.run_until_stalled();
/// assert_eq!(harness.browser.location_path(), "/");
/// ```
pub struct Harness {
	/// The browser.
	pub browser: HeadlessBrowser,
	/// The view transport.
	pub transport: MockTransport,
	/// The template engine.
	pub engine: StubEngine,
	/// The diagnostics recorder.
	pub diagnostics: RecordingSink,
	pool: LocalPool,
}

impl std::fmt::Debug for Harness {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Harness")
			.field("browser", &self.browser)
			.field("transport", &self.transport)
			.finish()
	}
}

impl Harness {
	/// Opens the browser at `path` on [`TEST_ORIGIN`].
	///
	/// # Panics
	///
	/// Panics if `path` does not form a valid URL.
	pub fn at(path: &str) -> Self {
		let url = format!("{}{}", TEST_ORIGIN, path);
		let browser = match HeadlessBrowser::new(&url) {
			Ok(browser) => browser,
			Err(err) => panic!("invalid harness location {}: {}", url, err),
		};
		Self {
			browser,
			transport: MockTransport::new(),
			engine: StubEngine::new(),
			diagnostics: RecordingSink::new(),
			pool: LocalPool::new(),
		}
	}

	/// Registers a view source with the transport.
	pub fn with_view(self, locator: &str, source: &str) -> Self {
		self.transport.set_source(locator, source);
		self
	}

	/// Returns a spawner feeding this harness's executor.
	pub fn spawner(&self) -> LocalSpawner {
		self.pool.spawner()
	}

	/// Runs spawned loads until none can make progress.
	pub fn run_until_stalled(&mut self) {
		self.pool.run_until_stalled();
	}

	/// Drives `future` to completion, running spawned loads alongside it.
	pub fn run_until<F: Future>(&mut self, future: F) -> F::Output {
		self.pool.run_until(future)
	}
}

/// The two-page site used throughout the router tests.
#[fixture]
pub fn home_about_routes() -> RouteTable {
	match RouteTable::new(vec![
		Route::new("/", "/views/home.tpl", "Home"),
		Route::new("/about", "/views/about.tpl", "About"),
	]) {
		Ok(routes) => routes,
		Err(err) => panic!("fixture routes are invalid: {}", err),
	}
}

/// A harness at `/` serving the home and about views.
#[fixture]
pub fn home_about_harness() -> Harness {
	Harness::at("/")
		.with_view("/views/home.tpl", "<h1>Welcome</h1>")
		.with_view("/views/about.tpl", "<h1>About us</h1>")
}
