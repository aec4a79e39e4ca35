//! HTTP transport backed by `reqwest`.
//!
//! On `wasm32` reqwest issues requests through the browser's `fetch`, so the
//! same transport serves both the browser build and native previews.

use tracing::{debug, warn};
use url::Url;
use waypost_core::{Transport, TransportError, async_trait};

/// Fetches view sources over HTTP.
///
/// Relative locators (`/views/home.tpl`, `home.tpl`) are resolved against
/// the base URL, as the browser resolves them against the document URL.
/// Any non-success status is a [`TransportError::Status`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: reqwest::Client,
	base_url: Option<Url>,
}

impl HttpTransport {
	/// Creates a transport that accepts only absolute locators.
	pub fn new() -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: None,
		}
	}

	/// Creates a transport resolving relative locators against `base_url`.
	pub fn with_base_url(base_url: Url) -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: Some(base_url),
		}
	}

	/// Uses a preconfigured client (timeouts, default headers, ...).
	pub fn client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	/// Resolves `locator` to the URL that will be requested.
	pub fn resolve(&self, locator: &str) -> Result<Url, TransportError> {
		let resolved = match &self.base_url {
			Some(base) => base.join(locator),
			None => Url::parse(locator),
		};
		resolved.map_err(|e| TransportError::Request {
			url: locator.to_string(),
			reason: e.to_string(),
		})
	}
}

impl Default for HttpTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
	async fn fetch_text(&self, locator: &str) -> Result<String, TransportError> {
		let url = self.resolve(locator)?;
		debug!(%url, "fetching view source");

		let response = self
			.client
			.get(url.clone())
			.send()
			.await
			.map_err(|e| TransportError::Request {
				url: url.to_string(),
				reason: e.to_string(),
			})?;

		let status = response.status();
		if !status.is_success() {
			warn!(%url, status = status.as_u16(), "view source request failed");
			return Err(TransportError::Status {
				url: url.to_string(),
				status: status.as_u16(),
			});
		}

		response.text().await.map_err(|e| TransportError::Body {
			url: url.to_string(),
			reason: e.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_resolves_against_base() {
		let transport =
			HttpTransport::with_base_url(Url::parse("https://example.com/app/").unwrap());

		assert_eq!(
			transport.resolve("/views/home.tpl").unwrap().as_str(),
			"https://example.com/views/home.tpl"
		);
		assert_eq!(
			transport.resolve("views/about.tpl").unwrap().as_str(),
			"https://example.com/app/views/about.tpl"
		);
	}

	#[rstest]
	fn test_relative_locator_without_base_fails() {
		let err = HttpTransport::new().resolve("/views/home.tpl").unwrap_err();
		assert!(matches!(err, TransportError::Request { .. }));
	}

	#[cfg(not(target_arch = "wasm32"))]
	mod server {
		use super::*;
		use tokio::io::{AsyncReadExt, AsyncWriteExt};
		use tokio::net::TcpListener;

		/// Serves exactly one request with a canned HTTP/1.1 response.
		async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
			let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
			let addr = listener.local_addr().unwrap();

			tokio::spawn(async move {
				let (mut socket, _) = listener.accept().await.unwrap();
				let mut buf = [0u8; 2048];
				let _ = socket.read(&mut buf).await.unwrap();
				let response = format!(
					"HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
					status_line,
					body.len(),
					body
				);
				socket.write_all(response.as_bytes()).await.unwrap();
				socket.shutdown().await.unwrap();
			});

			Url::parse(&format!("http://{}/", addr)).unwrap()
		}

		#[rstest]
		#[tokio::test]
		async fn test_fetches_body_on_success() {
			let base = serve_once("200 OK", "<h1>{{ title }}</h1>").await;
			let transport = HttpTransport::with_base_url(base);

			let text = transport.fetch_text("/views/home.tpl").await.unwrap();
			assert_eq!(text, "<h1>{{ title }}</h1>");
		}

		#[rstest]
		#[tokio::test]
		async fn test_non_success_status_is_error() {
			let base = serve_once("404 Not Found", "missing").await;
			let transport = HttpTransport::with_base_url(base);

			let err = transport.fetch_text("/views/gone.tpl").await.unwrap_err();
			assert!(
				matches!(err, TransportError::Status { status: 404, .. }),
				"got {:?}",
				err
			);
		}
	}
}
