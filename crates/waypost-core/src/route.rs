//! Route definitions and the validated route table.

use crate::error::RouteError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single route definition.
///
/// A route maps one exact pathname to the locator of its view template and
/// the document title applied while it is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
	/// Exact pathname this route matches.
	pathname: String,
	/// Locator (URL or path) of the view template source.
	view: String,
	/// Document title for this route.
	title: String,
}

impl Route {
	/// Creates a new route.
	///
	/// # Example
	///
	/// ```
	/// use waypost_core::Route;
	///
	/// let route = Route::new("/about", "/views/about.tpl", "About");
	/// assert_eq!(route.pathname(), "/about");
	/// ```
	pub fn new(
		pathname: impl Into<String>,
		view: impl Into<String>,
		title: impl Into<String>,
	) -> Self {
		Self {
			pathname: pathname.into(),
			view: view.into(),
			title: title.into(),
		}
	}

	/// Returns the pathname.
	pub fn pathname(&self) -> &str {
		&self.pathname
	}

	/// Returns the view locator.
	pub fn view(&self) -> &str {
		&self.view
	}

	/// Returns the title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Checks whether this route matches `pathname` exactly.
	pub fn matches(&self, pathname: &str) -> bool {
		self.pathname == pathname
	}
}

/// Ordered, validated, immutable list of routes.
///
/// Construction rejects empty tables, pathnames without a leading slash and
/// duplicate pathnames, so at most one route can match any pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
	routes: Vec<Route>,
}

impl RouteTable {
	/// Validates `routes` and builds a table.
	///
	/// # Example
	///
	/// ```
	/// use waypost_core::{Route, RouteTable};
	///
	/// let table = RouteTable::new(vec![
	///     Route::new("/", "home.tpl", "Home"),
	///     Route::new("/about", "about.tpl", "About"),
	/// ])
	/// .unwrap();
	/// assert_eq!(table.len(), 2);
	/// ```
	pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
		if routes.is_empty() {
			return Err(RouteError::Empty);
		}

		let mut seen = HashSet::with_capacity(routes.len());
		for route in &routes {
			if !route.pathname.starts_with('/') {
				return Err(RouteError::MissingLeadingSlash(route.pathname.clone()));
			}
			if !seen.insert(route.pathname.as_str()) {
				return Err(RouteError::Duplicate(route.pathname.clone()));
			}
		}

		Ok(Self { routes })
	}

	/// Finds the route whose pathname equals `pathname`.
	pub fn match_path(&self, pathname: &str) -> Option<&Route> {
		self.routes.iter().find(|route| route.matches(pathname))
	}

	/// Returns the routes in declaration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the number of routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Always false for a constructed table; provided for API symmetry.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	/// Iterates over the routes.
	pub fn iter(&self) -> std::slice::Iter<'_, Route> {
		self.routes.iter()
	}
}

impl TryFrom<Vec<Route>> for RouteTable {
	type Error = RouteError;

	fn try_from(routes: Vec<Route>) -> Result<Self, Self::Error> {
		Self::new(routes)
	}
}

impl<'a> IntoIterator for &'a RouteTable {
	type Item = &'a Route;
	type IntoIter = std::slice::Iter<'a, Route>;

	fn into_iter(self) -> Self::IntoIter {
		self.routes.iter()
	}
}
