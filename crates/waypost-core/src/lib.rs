//! Waypost Core
//!
//! Shared building blocks for the waypost client-side router:
//!
//! - [`route`]: route definitions and the validated [`RouteTable`]
//! - [`settings`]: [`RouterSettings`] and JSON/TOML [`RouteManifest`] loading
//! - [`platform`]: traits for history, document and container access, with
//!   `web-sys` bindings on `wasm32`
//! - [`transport`] and [`template`]: the injected collaborator seams
//! - [`spawn`]: running `!Send` view loads on the UI event loop
//! - [`diagnostics`]: developer-facing reports
//! - [`error`]: error types

#![warn(missing_docs)]

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod history;
pub mod location;
pub mod platform;
pub mod route;
pub mod settings;
pub mod spawn;
pub mod template;
pub mod transport;

pub use context::ViewContext;
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{
	ConfigError, DomError, NavigationError, RouteError, RouterError, RouterResult, TemplateError,
	TransportError,
};
pub use history::{HistoryState, NavigationKind};
pub use platform::{
	AnchorTarget, ClickEvent, ClickListener, ClickModifiers, Container, Document,
	NavigatedListener, NavigationState,
};
pub use route::{Route, RouteTable};
pub use settings::{LiveRegion, LoadPolicy, RouteManifest, RouterSettings};
pub use spawn::LocalSpawn;
#[cfg(not(target_arch = "wasm32"))]
pub use spawn::TokioLocalSpawner;
#[cfg(target_arch = "wasm32")]
pub use spawn::WasmSpawner;
pub use template::TemplateEngine;
pub use transport::Transport;

// Re-exported so implementors of the async seams use the same macro version.
pub use async_trait::async_trait;
pub use url::Url;
