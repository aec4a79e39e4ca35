//! Tera-based view template engine
//!
//! View sources arrive as text at runtime, so they are rendered as one-off
//! templates. Tera's syntax covers the `{{ title }}` style placeholders view
//! authors use:
//!
//! ```text
//! <main>
//!   <h1>{{ title }}</h1>
//!   {% if query.tab %}<p>Tab: {{ query.tab }}</p>{% endif %}
//! </main>
//! ```
//!
//! An engine built with [`TeraEngine::with_tera`] renders through a shared
//! `Tera` instance, so registered filters, functions and base templates
//! (`{% extends "layout.html" %}`) are available to every view.

use std::cell::RefCell;
use tera::{Context, Tera};
use tracing::trace;
use waypost_core::{TemplateEngine, TemplateError, ViewContext, async_trait};

/// Tera-backed [`TemplateEngine`].
///
/// # Examples
///
/// ```
/// use waypost_core::{TemplateEngine, ViewContext};
/// use waypost_template::TeraEngine;
///
/// let engine = TeraEngine::new();
/// let context = ViewContext {
///     title: "About".to_string(),
///     ..Default::default()
/// };
///
/// let html = futures::executor::block_on(engine.render("<h1>{{ title }}</h1>", &context))
///     .unwrap();
/// assert_eq!(html, "<h1>About</h1>");
/// ```
pub struct TeraEngine {
	tera: Option<RefCell<Tera>>,
	autoescape: bool,
}

impl std::fmt::Debug for TeraEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TeraEngine")
			.field("shared_instance", &self.tera.is_some())
			.field("autoescape", &self.autoescape)
			.finish()
	}
}

impl TeraEngine {
	/// Creates an engine that renders each view standalone with
	/// autoescaping of context values.
	pub fn new() -> Self {
		Self {
			tera: None,
			autoescape: true,
		}
	}

	/// Creates an engine rendering through `tera`, using its filters,
	/// functions, registered templates and autoescape configuration.
	pub fn with_tera(tera: Tera) -> Self {
		Self {
			tera: Some(RefCell::new(tera)),
			autoescape: true,
		}
	}

	/// Enables or disables autoescaping for standalone rendering.
	pub fn autoescape(mut self, enabled: bool) -> Self {
		self.autoescape = enabled;
		self
	}

	fn render_sync(&self, source: &str, context: &ViewContext) -> Result<String, TemplateError> {
		let context = Context::from_serialize(context)
			.map_err(|e| TemplateError::Context(describe(&e)))?;

		let rendered = match &self.tera {
			Some(tera) => tera.borrow_mut().render_str(source, &context),
			None => Tera::one_off(source, &context, self.autoescape),
		};

		rendered.map_err(classify)
	}
}

impl Default for TeraEngine {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait(?Send)]
impl TemplateEngine for TeraEngine {
	async fn render(&self, source: &str, context: &ViewContext) -> Result<String, TemplateError> {
		trace!(pathname = %context.pathname, bytes = source.len(), "rendering view with tera");
		self.render_sync(source, context)
	}
}

/// Flattens a Tera error and its causes into one message.
fn describe(err: &tera::Error) -> String {
	let mut message = err.to_string();
	let mut source = std::error::Error::source(err);
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

fn classify(err: tera::Error) -> TemplateError {
	let message = describe(&err);
	if message.starts_with("Failed to parse") {
		TemplateError::Parse(message)
	} else {
		TemplateError::Render(message)
	}
}
