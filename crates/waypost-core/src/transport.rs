//! View source transport seam.

use crate::error::TransportError;
use async_trait::async_trait;
use std::rc::Rc;

/// Fetches the text of a view template.
///
/// Implementations fail with [`TransportError`] on network errors and on
/// non-success responses; the router treats every failure the same way.
#[async_trait(?Send)]
pub trait Transport {
	/// Fetches `locator` and returns its body as text.
	async fn fetch_text(&self, locator: &str) -> Result<String, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
	async fn fetch_text(&self, locator: &str) -> Result<String, TransportError> {
		(**self).fetch_text(locator).await
	}
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Box<T> {
	async fn fetch_text(&self, locator: &str) -> Result<String, TransportError> {
		(**self).fetch_text(locator).await
	}
}
