//! Closure-backed template engine.

use waypost_core::{TemplateEngine, TemplateError, ViewContext, async_trait};

/// Adapts a plain function into a [`TemplateEngine`].
///
/// Useful for stubbing the engine in tests or for plugging in an engine
/// without an async API.
///
/// # Examples
///
/// ```
/// use waypost_template::FnEngine;
///
/// let engine = FnEngine::new(|source, ctx| Ok(source.replace("%title%", &ctx.title)));
/// ```
pub struct FnEngine<F> {
	render: F,
}

impl<F> FnEngine<F>
where
	F: Fn(&str, &ViewContext) -> Result<String, TemplateError>,
{
	/// Wraps `render`.
	pub fn new(render: F) -> Self {
		Self { render }
	}
}

impl<F> std::fmt::Debug for FnEngine<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FnEngine").finish_non_exhaustive()
	}
}

#[async_trait(?Send)]
impl<F> TemplateEngine for FnEngine<F>
where
	F: Fn(&str, &ViewContext) -> Result<String, TemplateError>,
{
	async fn render(&self, source: &str, context: &ViewContext) -> Result<String, TemplateError> {
		(self.render)(source, context)
	}
}

/// An engine that returns the source unchanged.
pub fn passthrough() -> FnEngine<fn(&str, &ViewContext) -> Result<String, TemplateError>> {
	FnEngine::new(|source, _| Ok(source.to_string()))
}
