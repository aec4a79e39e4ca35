//! Waypost Router
//!
//! A minimal client-side navigation engine. The [`Router`] maps an exact
//! pathname to a view, fetches the view's template through a
//! [`Transport`](waypost_core::Transport), renders it with a
//! [`TemplateEngine`](waypost_core::TemplateEngine) and replaces the content
//! of its container. It keeps the history stack, document title and keyboard
//! focus in step with what is displayed.
//!
//! ## Navigation
//!
//! - [`Router::navigate_to`] pushes a new history entry then loads the view.
//! - [`Router::replace_with`] overwrites the current entry then loads it.
//! - Back/forward traversal reloads the view for the new location.
//! - Clicks on same-host anchors are intercepted and pushed.
//!
//! ## Failure handling
//!
//! A load never fails its caller. Unknown pathnames and views that cannot be
//! fetched or rendered both show the not-found placeholder; a view without a
//! focusable main heading is reported through the diagnostics sink.
//!
//! ## Overlapping loads
//!
//! By default every load writes its result, so the container reflects the
//! load that finished last. [`LoadPolicy::LatestNavigationWins`](waypost_core::LoadPolicy)
//! discards results of loads superseded by a newer navigation.

#![warn(missing_docs)]

mod anchors;
mod focus;
mod loader;
mod router;
mod state;

pub use router::{Router, RouterBuilder};
pub use state::{LoadOutcome, RouterState};
