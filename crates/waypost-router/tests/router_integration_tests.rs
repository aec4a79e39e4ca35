//! Integration tests for the Router
//!
//! These tests drive a router mounted on a headless browser:
//! 1. Initial load, title and focus
//! 2. History push and replace
//! 3. Not-found and failed views
//! 4. Link click interception
//! 5. Back/forward traversal
//! 6. Builder validation and accessors

mod common;

use common::{mount, mount_with};
use rstest::rstest;
use serial_test::serial;
use std::rc::Rc;
use waypost_core::{
	ClickModifiers, Document, NavigationError, NavigationState, Route, RouteTable, RouterError,
	RouterSettings, TransportError,
};
use waypost_router::{LoadOutcome, Router, RouterState};
use waypost_test::{Harness, StubEngine, capture_logs, home_about_harness, home_about_routes};

fn focused_text(harness: &Harness) -> Option<String> {
	harness.browser.focused().map(|focused| focused.text)
}

#[rstest]
fn test_initial_load_renders_current_location(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);

	// Act
	home_about_harness.run_until_stalled();

	// Assert
	let browser = &home_about_harness.browser;
	assert_eq!(browser.container_html(), "<h1>Welcome</h1>");
	assert_eq!(browser.title(), "Home");
	assert_eq!(focused_text(&home_about_harness).as_deref(), Some("Welcome"));
	assert_eq!(router.current_url().unwrap().path(), "/");
	assert_eq!(router.state(), RouterState::Idle);
}

/// Home/About walkthrough: start at `/`, follow the About link, go back.
#[rstest]
fn test_home_about_scenario(mut home_about_harness: Harness, home_about_routes: RouteTable) {
	// Arrange
	let _router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	let click = home_about_harness.browser.click_link("/about");
	home_about_harness.run_until_stalled();

	// Assert
	let browser = home_about_harness.browser.clone();
	assert!(click.default_prevented);
	assert_eq!(browser.location_path(), "/about");
	assert_eq!(browser.entry_count(), 2);
	assert_eq!(browser.container_html(), "<h1>About us</h1>");
	assert_eq!(browser.title(), "About");
	assert_eq!(focused_text(&home_about_harness).as_deref(), Some("About us"));

	// Act
	assert!(browser.back());
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(browser.location_path(), "/");
	assert_eq!(browser.entry_count(), 2);
	assert_eq!(browser.container_html(), "<h1>Welcome</h1>");
	assert_eq!(browser.title(), "Home");
	assert!(home_about_harness.diagnostics.diagnostics().is_empty());
}

#[rstest]
#[case("/", "Home")]
#[case("/about", "About")]
fn test_navigation_sets_route_title(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
	#[case] pathname: &str,
	#[case] title: &str,
) {
	// Arrange
	home_about_harness.browser.set_title("Untitled");
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	router.navigate_to(pathname).unwrap();
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(home_about_harness.browser.title(), title);
}

#[rstest]
fn test_address_updates_before_load_completes(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();
	let _gate = home_about_harness.transport.gate("/views/about.tpl");

	// Act
	router.navigate_to("/about").unwrap();

	// Assert
	let browser = &home_about_harness.browser;
	assert_eq!(browser.location_path(), "/about");
	assert_eq!(browser.container_html(), "<h1>Welcome</h1>");
	assert_eq!(router.state(), RouterState::Loading { in_flight: 1 });
}

#[rstest]
fn test_state_returns_to_idle_after_load(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();
	let gate = home_about_harness.transport.gate("/views/about.tpl");
	router.navigate_to("/about").unwrap();
	home_about_harness.run_until_stalled();
	assert!(!router.state().is_idle());

	// Act
	gate.open();
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(router.state(), RouterState::Idle);
	assert_eq!(home_about_harness.browser.container_html(), "<h1>About us</h1>");
}

#[rstest]
fn test_two_pushes_add_two_entries(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	router.navigate_to("/about").unwrap();
	router.navigate_to("/").unwrap();
	home_about_harness.run_until_stalled();

	// Assert
	let entries = home_about_harness.browser.entries();
	assert_eq!(entries.len(), 3);
	let state = entries[1].state.clone().unwrap();
	assert_eq!(state.pathname, "/about");
	assert_eq!(state.title, "About");
	assert_eq!(entries[1].title, "");
}

#[rstest]
fn test_replace_overwrites_current_entry(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	router.replace_with("/about").unwrap();
	home_about_harness.run_until_stalled();

	// Assert
	let browser = &home_about_harness.browser;
	assert_eq!(browser.entry_count(), 1);
	assert_eq!(browser.location_path(), "/about");
	assert_eq!(browser.container_html(), "<h1>About us</h1>");
	assert_eq!(browser.title(), "About");
}

#[rstest]
fn test_query_and_fragment_ignored_for_matching(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	router.navigate_to("/about?tab=team#people").unwrap();
	home_about_harness.run_until_stalled();

	// Assert
	let location = home_about_harness.browser.location().unwrap();
	assert_eq!(location.query(), Some("tab=team"));
	assert_eq!(location.fragment(), Some("people"));
	assert_eq!(home_about_harness.browser.container_html(), "<h1>About us</h1>");
}

#[rstest]
fn test_unknown_pathname_renders_placeholder(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	router.navigate_to("/missing").unwrap();
	home_about_harness.run_until_stalled();

	// Assert
	let browser = &home_about_harness.browser;
	assert_eq!(browser.location_path(), "/missing");
	assert_eq!(browser.container_html(), "<h1>404</h1>");
	assert_eq!(browser.title(), "Home");
	assert!(home_about_harness.transport.requests().iter().all(|r| r != "/missing"));
}

#[rstest]
fn test_unknown_initial_location_renders_placeholder(home_about_routes: RouteTable) {
	// Arrange
	let mut harness = Harness::at("/nowhere");
	let _router = mount(&harness, home_about_routes);

	// Act
	harness.run_until_stalled();

	// Assert
	assert_eq!(harness.browser.container_html(), "<h1>404</h1>");
	assert_eq!(harness.browser.title(), "");
	assert!(harness.transport.requests().is_empty());
}

#[rstest]
fn test_transport_failure_renders_placeholder(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	home_about_harness.transport.fail(
		"/views/about.tpl",
		TransportError::Status {
			url: "/views/about.tpl".to_string(),
			status: 500,
		},
	);
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	router.navigate_to("/about").unwrap();
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(home_about_harness.browser.container_html(), "<h1>404</h1>");
	assert_eq!(
		home_about_harness.diagnostics.unavailable_views(),
		vec!["/views/about.tpl"]
	);
}

#[rstest]
fn test_render_failure_renders_placeholder(home_about_routes: RouteTable) {
	// Arrange
	let mut harness = Harness::at("/about")
		.with_view("/views/home.tpl", "<h1>Welcome</h1>")
		.with_view("/views/about.tpl", StubEngine::FAIL_MARKER);
	let router = mount(&harness, home_about_routes);
	harness.run_until_stalled();

	// Act
	let outcome = harness.run_until(router.reload());

	// Assert
	assert_eq!(outcome, LoadOutcome::ViewUnavailable);
	assert_eq!(harness.browser.container_html(), "<h1>404</h1>");
	assert_eq!(harness.diagnostics.unavailable_views().len(), 2);
}

#[rstest]
fn test_reload_reports_outcome(mut home_about_harness: Harness, home_about_routes: RouteTable) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	let rendered = home_about_harness.run_until(router.reload());
	router.navigate_to("/gone").unwrap();
	let not_found = home_about_harness.run_until(router.reload());

	// Assert
	assert_eq!(rendered, LoadOutcome::Rendered);
	assert_eq!(not_found, LoadOutcome::NotFound);
	home_about_harness.run_until_stalled();
	assert_eq!(router.state(), RouterState::Idle);
}

#[rstest]
fn test_custom_placeholder(mut home_about_harness: Harness, home_about_routes: RouteTable) {
	// Arrange
	let settings =
		RouterSettings::default().with_not_found_html("<main><h1>Page not found</h1></main>");
	let router = mount_with(&home_about_harness, home_about_routes, settings);
	home_about_harness.run_until_stalled();

	// Act
	router.navigate_to("/missing").unwrap();
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(
		home_about_harness.browser.container_html(),
		"<main><h1>Page not found</h1></main>"
	);
}

#[rstest]
fn test_missing_heading_reports_diagnostic(home_about_routes: RouteTable) {
	// Arrange
	let mut harness = Harness::at("/")
		.with_view("/views/home.tpl", "<h1>Welcome</h1>")
		.with_view("/views/about.tpl", "<p>No heading here</p>");
	let router = mount(&harness, home_about_routes);
	harness.run_until_stalled();
	let focused_before = harness.browser.focused();

	// Act
	router.navigate_to("/about").unwrap();
	harness.run_until_stalled();

	// Assert
	assert_eq!(harness.browser.container_html(), "<p>No heading here</p>");
	assert_eq!(harness.browser.title(), "About");
	assert_eq!(harness.browser.focused(), focused_before);
	assert_eq!(harness.diagnostics.missing_headings(), vec!["/about"]);
}

#[rstest]
fn test_nested_heading_is_not_focused(home_about_routes: RouteTable) {
	// Arrange
	let mut harness = Harness::at("/")
		.with_view("/views/home.tpl", "<section><h1>Nested</h1></section>")
		.with_view("/views/about.tpl", "<h1>About us</h1>");

	// Act
	let _router = mount(&harness, home_about_routes);
	harness.run_until_stalled();

	// Assert
	assert!(harness.browser.focused().is_none());
	assert_eq!(harness.diagnostics.missing_headings(), vec!["/"]);
}

#[rstest]
fn test_listeners_outlive_dropped_handle(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	drop(mount(&home_about_harness, home_about_routes));
	home_about_harness.run_until_stalled();
	let browser = home_about_harness.browser.clone();

	// Act
	let click = browser.click_link("/about");
	home_about_harness.run_until_stalled();

	// Assert
	assert!(click.default_prevented);
	assert_eq!(browser.entry_count(), 2);
	assert_eq!(browser.container_html(), "<h1>About us</h1>");
	assert_eq!(browser.title(), "About");

	// Act
	assert!(browser.back());
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(browser.location_path(), "/");
	assert_eq!(browser.container_html(), "<h1>Welcome</h1>");
	assert_eq!(browser.title(), "Home");
}

#[rstest]
fn test_unfocusable_heading_match_is_not_missing(home_about_routes: RouteTable) {
	// Arrange
	let mut harness = Harness::at("/")
		.with_view("/views/home.tpl", "<svg><title>Welcome</title></svg>")
		.with_view("/views/about.tpl", "<h1>About us</h1>");
	let settings = RouterSettings::default().with_heading_selector("main > svg");

	// Act
	let _router = mount_with(&harness, home_about_routes, settings);
	harness.run_until_stalled();

	// Assert
	assert_eq!(harness.browser.title(), "Home");
	assert!(harness.browser.focused().is_none());
	assert!(harness.diagnostics.missing_headings().is_empty());
}

#[rstest]
fn test_custom_heading_selector(home_about_routes: RouteTable) {
	// Arrange
	let mut harness = Harness::at("/")
		.with_view("/views/home.tpl", "<h2 class=\"title\">Welcome</h2>")
		.with_view("/views/about.tpl", "<h1>About us</h1>");
	let settings = RouterSettings::default().with_heading_selector("h2.title");

	// Act
	let _router = mount_with(&harness, home_about_routes, settings);
	harness.run_until_stalled();

	// Assert
	let focused = harness.browser.focused().unwrap();
	assert_eq!(focused.tag, "h2");
	assert_eq!(focused.tabindex, "-1");
	assert!(harness.diagnostics.diagnostics().is_empty());
}

#[rstest]
fn test_same_host_absolute_link_intercepted(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let _router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	let click = home_about_harness
		.browser
		.click_link("https://app.example.com/about?ref=nav");
	home_about_harness.run_until_stalled();

	// Assert
	assert!(click.default_prevented);
	assert_eq!(home_about_harness.browser.location_path(), "/about");
	assert_eq!(home_about_harness.browser.container_html(), "<h1>About us</h1>");
}

#[rstest]
#[case("https://elsewhere.example.org/about")]
#[case("//cdn.example.net/about")]
#[case("mailto:team@app.example.com")]
fn test_other_host_link_not_intercepted(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
	#[case] href: &str,
) {
	// Arrange
	let _router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	let click = home_about_harness.browser.click_link(href);
	home_about_harness.run_until_stalled();

	// Assert
	assert!(!click.default_prevented);
	assert_eq!(home_about_harness.browser.entry_count(), 1);
	assert_eq!(home_about_harness.browser.container_html(), "<h1>Welcome</h1>");
}

#[rstest]
fn test_non_anchor_click_not_intercepted(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let _router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	let click = home_about_harness.browser.click_non_anchor();

	// Assert
	assert!(!click.default_prevented);
	assert_eq!(home_about_harness.browser.entry_count(), 1);
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
fn test_modifier_click_interception(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
	#[case] respect_modifier_keys: bool,
	#[case] intercepted: bool,
) {
	// Arrange
	let settings = RouterSettings::default().with_respect_modifier_keys(respect_modifier_keys);
	let _router = mount_with(&home_about_harness, home_about_routes, settings);
	home_about_harness.run_until_stalled();
	let modifiers = ClickModifiers {
		ctrl: true,
		..ClickModifiers::default()
	};

	// Act
	let click = home_about_harness.browser.click_link_with("/about", modifiers);

	// Assert
	assert_eq!(click.default_prevented, intercepted);
	assert_eq!(home_about_harness.browser.entry_count(), if intercepted { 2 } else { 1 });
}

#[rstest]
fn test_forward_traversal_reloads_view(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();
	router.navigate_to("/about").unwrap();
	home_about_harness.run_until_stalled();
	assert!(home_about_harness.browser.back());
	home_about_harness.run_until_stalled();

	// Act
	assert!(home_about_harness.browser.forward());
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(home_about_harness.browser.container_html(), "<h1>About us</h1>");
	assert_eq!(home_about_harness.browser.title(), "About");
	assert_eq!(router.current_url().unwrap().path(), "/about");
}

#[rstest]
fn test_cross_origin_navigation_rejected(
	mut home_about_harness: Harness,
	home_about_routes: RouteTable,
) {
	// Arrange
	let router = mount(&home_about_harness, home_about_routes);
	home_about_harness.run_until_stalled();

	// Act
	let result = router.navigate_to("https://elsewhere.example.org/about");
	home_about_harness.run_until_stalled();

	// Assert
	assert!(matches!(
		result,
		Err(RouterError::Navigation(NavigationError::Rejected(_)))
	));
	assert_eq!(home_about_harness.browser.entry_count(), 1);
	assert_eq!(home_about_harness.browser.container_html(), "<h1>Welcome</h1>");
}

#[rstest]
fn test_live_region_attribute_set(mut home_about_harness: Harness, home_about_routes: RouteTable) {
	// Arrange
	let settings = RouterSettings::default().with_politeness("polite");

	// Act
	let _router = mount_with(&home_about_harness, home_about_routes, settings);
	home_about_harness.run_until_stalled();

	// Assert
	assert_eq!(
		home_about_harness
			.browser
			.container_attribute("aria-live")
			.as_deref(),
		Some("polite")
	);
}

#[rstest]
fn test_default_live_region_is_assertive(home_about_harness: Harness, home_about_routes: RouteTable) {
	let _router = mount(&home_about_harness, home_about_routes);

	assert_eq!(
		home_about_harness
			.browser
			.container_attribute("aria-live")
			.as_deref(),
		Some("assertive")
	);
}

#[rstest]
fn test_accessors(home_about_harness: Harness, home_about_routes: RouteTable) {
	let router = mount(&home_about_harness, home_about_routes);

	assert_eq!(router.routes().len(), 2);
	assert_eq!(router.match_path("/about").map(Route::title), Some("About"));
	assert!(router.match_path("/about/").is_none());
	assert_eq!(router.settings().heading_selector, "main > h1");
	assert_eq!(router.current_url().unwrap().as_str(), "https://app.example.com/");
}

#[rstest]
fn test_missing_transport_rejected(home_about_harness: Harness, home_about_routes: RouteTable) {
	// Act
	let result = Router::builder(home_about_harness.browser.container(), home_about_routes)
		.platform(Rc::new(home_about_harness.browser.clone()))
		.engine(home_about_harness.engine.clone())
		.spawner(home_about_harness.spawner())
		.mount();

	// Assert
	assert!(matches!(
		result,
		Err(RouterError::MissingCollaborator("transport"))
	));
}

#[rstest]
fn test_with_tera_and_static_transport(home_about_routes: RouteTable) {
	use waypost_template::TeraEngine;
	use waypost_transport::StaticTransport;

	// Arrange
	let mut harness = Harness::at("/about?tab=team");
	let transport = StaticTransport::new()
		.with("/views/home.tpl", "<h1>{{ title }}</h1>")
		.with(
			"/views/about.tpl",
			"<h1>{{ title }}</h1>{% if query.tab %}<p>{{ query.tab }}</p>{% endif %}",
		);

	// Act
	let _router = Router::builder(harness.browser.container(), home_about_routes)
		.platform(Rc::new(harness.browser.clone()))
		.transport(transport)
		.engine(TeraEngine::new())
		.spawner(harness.spawner())
		.mount()
		.unwrap();
	harness.run_until_stalled();

	// Assert
	assert_eq!(harness.browser.container_html(), "<h1>About</h1><p>team</p>");
	assert_eq!(harness.browser.title(), "About");
}

#[rstest]
fn test_fn_engine_receives_pathname(home_about_routes: RouteTable) {
	use waypost_template::FnEngine;

	// Arrange
	let mut harness = Harness::at("/about").with_view("/views/about.tpl", "<h1>%path%</h1>");

	// Act
	let _router = Router::builder(harness.browser.container(), home_about_routes)
		.platform(Rc::new(harness.browser.clone()))
		.transport(harness.transport.clone())
		.engine(FnEngine::new(|source: &str, ctx: &waypost_core::ViewContext| {
			Ok(source.replace("%path%", &ctx.pathname))
		}))
		.spawner(harness.spawner())
		.mount()
		.unwrap();
	harness.run_until_stalled();

	// Assert
	assert_eq!(harness.browser.container_html(), "<h1>/about</h1>");
}

#[rstest]
#[serial(router_logs)]
fn test_view_failure_logged_by_default_sink(home_about_routes: RouteTable) {
	// Arrange
	let (logs, _guard) = capture_logs();
	let mut harness = Harness::at("/").with_view("/views/about.tpl", "<h1>About us</h1>");

	// Act
	let _router = Router::builder(harness.browser.container(), home_about_routes)
		.platform(Rc::new(harness.browser.clone()))
		.transport(harness.transport.clone())
		.engine(harness.engine.clone())
		.spawner(harness.spawner())
		.mount()
		.unwrap();
	harness.run_until_stalled();

	// Assert
	assert_eq!(harness.browser.container_html(), "<h1>404</h1>");
	assert!(logs.contains(tracing::Level::WARN, "view /views/home.tpl for / is unavailable"));
}

#[rstest]
#[serial(router_logs)]
fn test_missing_heading_logged_as_error(home_about_routes: RouteTable) {
	// Arrange
	let (logs, _guard) = capture_logs();
	let mut harness = Harness::at("/").with_view("/views/home.tpl", "<p>Welcome</p>");

	// Act
	let _router = Router::builder(harness.browser.container(), home_about_routes)
		.platform(Rc::new(harness.browser.clone()))
		.transport(harness.transport.clone())
		.engine(harness.engine.clone())
		.spawner(harness.spawner())
		.mount()
		.unwrap();
	harness.run_until_stalled();

	// Assert
	assert!(logs.contains(
		tracing::Level::ERROR,
		"for accessibility, the page at / should always contain an element matching 'main > h1'"
	));
}
