//! Shared router test setup.

#![allow(dead_code)]

use std::rc::Rc;
use waypost_core::{RouteTable, RouterSettings};
use waypost_router::Router;
use waypost_test::Harness;

/// Mounts a router wired to every collaborator of `harness`.
pub fn mount(harness: &Harness, routes: RouteTable) -> Router {
	mount_with(harness, routes, RouterSettings::default())
}

/// Mounts a router with custom settings.
pub fn mount_with(harness: &Harness, routes: RouteTable, settings: RouterSettings) -> Router {
	Router::builder(harness.browser.container(), routes)
		.platform(Rc::new(harness.browser.clone()))
		.transport(harness.transport.clone())
		.engine(harness.engine.clone())
		.spawner(harness.spawner())
		.diagnostics(harness.diagnostics.clone())
		.settings(settings)
		.mount()
		.unwrap()
}
