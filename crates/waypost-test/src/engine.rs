//! Placeholder template engine.

use std::cell::Cell;
use std::rc::Rc;
use waypost_core::{TemplateEngine, TemplateError, ViewContext, async_trait};

/// Substitutes `{{ title }}` and `{{ pathname }}` and nothing else.
///
/// A source containing `{% fail %}` produces a render error, which stands
/// in for a broken template without needing a real engine.
#[derive(Debug, Clone, Default)]
pub struct StubEngine {
	renders: Rc<Cell<usize>>,
}

impl StubEngine {
	/// Marker that makes rendering fail.
	pub const FAIL_MARKER: &'static str = "{% fail %}";

	/// Creates the engine.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns how many sources were rendered successfully.
	pub fn renders(&self) -> usize {
		self.renders.get()
	}
}

#[async_trait(?Send)]
impl TemplateEngine for StubEngine {
	async fn render(&self, source: &str, context: &ViewContext) -> Result<String, TemplateError> {
		if source.contains(Self::FAIL_MARKER) {
			return Err(TemplateError::Render(format!(
				"unsupported tag in template for {}",
				context.pathname
			)));
		}

		self.renders.set(self.renders.get() + 1);
		Ok(source
			.replace("{{ title }}", &context.title)
			.replace("{{ pathname }}", &context.pathname))
	}
}
