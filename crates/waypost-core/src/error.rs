//! Error types shared across waypost crates.
//!
//! Each concern gets its own enum so that collaborators can report failures
//! precisely. [`RouterError`] collects the ones that can reach a caller of
//! the router; the view load cycle itself never returns an error.

use thiserror::Error;

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;

/// Route table validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
	/// The route table has no routes.
	#[error("route table must contain at least one route")]
	Empty,
	/// A route pathname does not start with `/`.
	#[error("route pathname must start with '/': {0}")]
	MissingLeadingSlash(String),
	/// Two routes share the same pathname.
	#[error("duplicate route pathname: {0}")]
	Duplicate(String),
}

/// History and location errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
	/// The target could not be parsed as a URL relative to the current location.
	#[error("invalid navigation target '{target}': {reason}")]
	InvalidUrl {
		/// The rejected target.
		target: String,
		/// Parser message.
		reason: String,
	},
	/// The history backend refused the entry (e.g. a cross-origin push).
	#[error("history entry rejected: {0}")]
	Rejected(String),
	/// The current location could not be read.
	#[error("location unavailable: {0}")]
	LocationUnavailable(String),
}

/// Transport errors raised while fetching a view source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
	/// The request could not be sent or did not complete.
	#[error("request to {url} failed: {reason}")]
	Request {
		/// Requested URL.
		url: String,
		/// Underlying failure.
		reason: String,
	},
	/// The server answered with a non-success status.
	#[error("request to {url} returned status {status}")]
	Status {
		/// Requested URL.
		url: String,
		/// HTTP status code.
		status: u16,
	},
	/// The response body could not be read as text.
	#[error("failed to read body of {url}: {reason}")]
	Body {
		/// Requested URL.
		url: String,
		/// Underlying failure.
		reason: String,
	},
	/// No source is registered for the locator.
	#[error("view source not found: {0}")]
	NotFound(String),
}

/// Template engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
	/// The template source could not be parsed.
	#[error("template parse error: {0}")]
	Parse(String),
	/// Rendering failed (missing variable, filter error, ...).
	#[error("template render error: {0}")]
	Render(String),
	/// The view context could not be converted for the engine.
	#[error("invalid template context: {0}")]
	Context(String),
}

/// DOM access errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// No element matched the selector.
	#[error("no element matches selector '{0}'")]
	NoSuchElement(String),
	/// An element matched but cannot take focus (an SVG or MathML node).
	#[error("element matching '{0}' cannot receive focus")]
	NotFocusable(String),
	/// The matched element rejected focus.
	#[error("failed to focus element matching '{selector}': {reason}")]
	Focus {
		/// Selector of the element.
		selector: String,
		/// Underlying failure.
		reason: String,
	},
	/// The selector itself is invalid.
	#[error("invalid selector '{selector}': {reason}")]
	InvalidSelector {
		/// Offending selector.
		selector: String,
		/// Parser message.
		reason: String,
	},
	/// Setting an attribute failed.
	#[error("failed to set attribute '{name}': {reason}")]
	Attribute {
		/// Attribute name.
		name: String,
		/// Underlying failure.
		reason: String,
	},
	/// Registering an event listener failed.
	#[error("failed to register '{event}' listener: {reason}")]
	Listener {
		/// Event type.
		event: String,
		/// Underlying failure.
		reason: String,
	},
	/// A required global (window, document, body) is unavailable.
	#[error("{0} is not available")]
	Unavailable(&'static str),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// JSON parse failure.
	#[error("failed to parse JSON configuration: {0}")]
	Json(#[from] serde_json::Error),
	/// TOML parse failure.
	#[error("failed to parse TOML configuration: {0}")]
	Toml(#[from] toml::de::Error),
	/// The parsed routes are invalid.
	#[error(transparent)]
	Route(#[from] RouteError),
}

/// Errors that can reach a caller of the router.
#[derive(Debug, Error)]
pub enum RouterError {
	/// Route table validation failed.
	#[error(transparent)]
	Route(#[from] RouteError),
	/// History push/replace failed.
	#[error(transparent)]
	Navigation(#[from] NavigationError),
	/// Mounting failed (container attribute or listener registration).
	#[error(transparent)]
	Dom(#[from] DomError),
	/// Configuration could not be loaded.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// A required collaborator was not supplied to the builder.
	#[error("router builder is missing a {0}")]
	MissingCollaborator(&'static str),
}
