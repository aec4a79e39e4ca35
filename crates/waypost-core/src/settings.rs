//! Router settings and route manifests.
//!
//! Settings are plain serde structs with defaults for every field, so a
//! manifest only needs to spell out what it changes. Manifests can be
//! written in JSON or TOML:
//!
//! ```toml
//! [settings]
//! heading_selector = "main > h1"
//! load_policy = "latest_navigation_wins"
//!
//! [[routes]]
//! pathname = "/"
//! view = "/views/home.tpl"
//! title = "Home"
//! ```

use crate::error::ConfigError;
use crate::route::{Route, RouteTable};
use serde::{Deserialize, Serialize};

/// Default not-found placeholder.
pub const DEFAULT_NOT_FOUND_HTML: &str = "<h1>404</h1>";
/// Default selector for the heading that receives focus after a load.
pub const DEFAULT_HEADING_SELECTOR: &str = "main > h1";
/// Default live-region attribute set on the container.
pub const DEFAULT_LIVE_REGION_ATTRIBUTE: &str = "aria-live";
/// Default live-region politeness.
pub const DEFAULT_LIVE_REGION_POLITENESS: &str = "assertive";

/// How overlapping view loads are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
	/// Every load writes its result; the container shows whichever load
	/// finished last, even if a newer navigation started after it.
	#[default]
	LastWriteWins,
	/// Loads started before the most recent navigation discard their result.
	LatestNavigationWins,
}

/// Live-region marking applied to the container once at mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveRegion {
	/// Attribute name, normally `aria-live`.
	pub attribute: String,
	/// Attribute value (`assertive`, `polite`).
	pub politeness: String,
}

impl Default for LiveRegion {
	fn default() -> Self {
		Self {
			attribute: DEFAULT_LIVE_REGION_ATTRIBUTE.to_string(),
			politeness: DEFAULT_LIVE_REGION_POLITENESS.to_string(),
		}
	}
}

/// Router behaviour settings.
///
/// # Example
///
/// ```
/// use waypost_core::{LoadPolicy, RouterSettings};
///
/// let settings = RouterSettings::default()
///     .with_load_policy(LoadPolicy::LatestNavigationWins)
///     .with_not_found_html("<h1>Page not found</h1>");
/// assert_eq!(settings.heading_selector, "main > h1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
	/// Markup rendered when no route matches or the view is unavailable.
	pub not_found_html: String,
	/// Selector of the heading focused after each load.
	pub heading_selector: String,
	/// Live-region marking for the container.
	pub live_region: LiveRegion,
	/// Reconciliation of overlapping loads.
	pub load_policy: LoadPolicy,
	/// Leave modified clicks (ctrl, meta, shift, alt, non-primary button)
	/// to the browser.
	pub respect_modifier_keys: bool,
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			not_found_html: DEFAULT_NOT_FOUND_HTML.to_string(),
			heading_selector: DEFAULT_HEADING_SELECTOR.to_string(),
			live_region: LiveRegion::default(),
			load_policy: LoadPolicy::default(),
			respect_modifier_keys: false,
		}
	}
}

impl RouterSettings {
	/// Sets the not-found placeholder markup.
	pub fn with_not_found_html(mut self, html: impl Into<String>) -> Self {
		self.not_found_html = html.into();
		self
	}

	/// Sets the focus heading selector.
	pub fn with_heading_selector(mut self, selector: impl Into<String>) -> Self {
		self.heading_selector = selector.into();
		self
	}

	/// Sets the load policy.
	pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
		self.load_policy = policy;
		self
	}

	/// Sets the live-region politeness.
	pub fn with_politeness(mut self, politeness: impl Into<String>) -> Self {
		self.live_region.politeness = politeness.into();
		self
	}

	/// Enables or disables modifier-key click passthrough.
	pub fn with_respect_modifier_keys(mut self, enabled: bool) -> Self {
		self.respect_modifier_keys = enabled;
		self
	}

	/// Parses settings from JSON.
	pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(source)?)
	}

	/// Parses settings from TOML.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}

/// Routes plus optional settings, as loaded from a manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct RawManifest {
	routes: Vec<Route>,
	#[serde(default)]
	settings: RouterSettings,
}

/// A validated route manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteManifest {
	/// Validated routes.
	pub routes: RouteTable,
	/// Settings, defaulted when absent.
	pub settings: RouterSettings,
}

impl RouteManifest {
	/// Parses and validates a JSON manifest.
	///
	/// # Example
	///
	/// ```
	/// use waypost_core::RouteManifest;
	///
	/// let manifest = RouteManifest::from_json_str(r#"{
	///     "routes": [{ "pathname": "/", "view": "home.tpl", "title": "Home" }]
	/// }"#).unwrap();
	/// assert_eq!(manifest.routes.len(), 1);
	/// ```
	pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
		let raw: RawManifest = serde_json::from_str(source)?;
		raw.validate()
	}

	/// Parses and validates a TOML manifest.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let raw: RawManifest = toml::from_str(source)?;
		raw.validate()
	}
}

impl RawManifest {
	fn validate(self) -> Result<RouteManifest, ConfigError> {
		Ok(RouteManifest {
			routes: RouteTable::new(self.routes)?,
			settings: self.settings,
		})
	}
}
