//! History entry state.

use serde::{Deserialize, Serialize};

/// Kind of navigation that triggered a view load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
	/// First load when the router is mounted.
	Initial,
	/// A new history entry was pushed.
	Push,
	/// The current history entry was overwritten.
	Replace,
	/// The user moved through existing entries (back/forward).
	Traverse,
	/// The current location was reloaded explicitly.
	Reload,
}

impl std::fmt::Display for NavigationKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Initial => "initial",
			Self::Push => "push",
			Self::Replace => "replace",
			Self::Traverse => "traverse",
			Self::Reload => "reload",
		};
		f.write_str(name)
	}
}

/// State object stored with each history entry the router creates.
///
/// The router never reads it back (back/forward only re-resolves the
/// location) but it keeps entries self-describing for devtools and for
/// applications that inspect `history.state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// Pathname of the entry.
	pub pathname: String,
	/// Title of the matched route, empty when unmatched.
	#[serde(default)]
	pub title: String,
}

impl HistoryState {
	/// Creates a state for `pathname`.
	pub fn new(pathname: impl Into<String>) -> Self {
		Self {
			pathname: pathname.into(),
			title: String::new(),
		}
	}

	/// Sets the matched route's title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
