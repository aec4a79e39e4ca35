//! Template engine seam.

use crate::context::ViewContext;
use crate::error::TemplateError;
use async_trait::async_trait;
use std::rc::Rc;

/// Renders a fetched template source with a [`ViewContext`].
#[async_trait(?Send)]
pub trait TemplateEngine {
	/// Renders `source` and returns the resulting HTML.
	async fn render(&self, source: &str, context: &ViewContext) -> Result<String, TemplateError>;
}

#[async_trait(?Send)]
impl<T: TemplateEngine + ?Sized> TemplateEngine for Rc<T> {
	async fn render(&self, source: &str, context: &ViewContext) -> Result<String, TemplateError> {
		(**self).render(source, context).await
	}
}

#[async_trait(?Send)]
impl<T: TemplateEngine + ?Sized> TemplateEngine for Box<T> {
	async fn render(&self, source: &str, context: &ViewContext) -> Result<String, TemplateError> {
		(**self).render(source, context).await
	}
}
