//! Data context passed to template engines.

use crate::route::Route;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// Variables available to a view template.
///
/// `title` is always present. `pathname` and `query` describe the location
/// being rendered; for repeated query keys the first value is kept, as
/// `URLSearchParams::get` does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewContext {
	/// Title of the matched route.
	pub title: String,
	/// Pathname being rendered.
	pub pathname: String,
	/// Query parameters of the current location.
	pub query: BTreeMap<String, String>,
}

impl ViewContext {
	/// Builds the context for `route` rendered at `url`.
	pub fn for_route(route: &Route, url: &Url) -> Self {
		let mut query = BTreeMap::new();
		for (key, value) in url.query_pairs() {
			query
				.entry(key.into_owned())
				.or_insert_with(|| value.into_owned());
		}

		Self {
			title: route.title().to_string(),
			pathname: url.path().to_string(),
			query,
		}
	}

	/// Converts the context to a JSON value.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::json!({
			"title": self.title,
			"pathname": self.pathname,
			"query": self.query,
		})
	}
}
