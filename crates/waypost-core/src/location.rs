//! URL resolution helpers.
//!
//! The router resolves every navigation target against the current location
//! the same way a browser resolves an anchor's `href`, then matches routes on
//! the path component alone.

use crate::error::NavigationError;
use url::Url;

/// Resolves `target` (absolute path, relative path or full URL) against `base`.
///
/// # Example
///
/// ```
/// use url::Url;
/// use waypost_core::location::resolve;
///
/// let base = Url::parse("https://example.com/blog/").unwrap();
/// let url = resolve(&base, "/about?tab=team#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/about?tab=team#top");
/// ```
pub fn resolve(base: &Url, target: &str) -> Result<Url, NavigationError> {
	base.join(target).map_err(|e| NavigationError::InvalidUrl {
		target: target.to_string(),
		reason: e.to_string(),
	})
}

/// Parses an absolute URL.
pub fn parse(url: &str) -> Result<Url, NavigationError> {
	Url::parse(url).map_err(|e| NavigationError::InvalidUrl {
		target: url.to_string(),
		reason: e.to_string(),
	})
}

/// Returns the hostname of `url`, or an empty string for host-less URLs.
///
/// Mirrors `HTMLAnchorElement.hostname`, which is empty for schemes such as
/// `mailto:`.
pub fn hostname(url: &Url) -> &str {
	url.host_str().unwrap_or("")
}

/// Formats the part of `url` shown after the origin: path, query and fragment.
pub fn path_and_suffix(url: &Url) -> String {
	let mut out = url.path().to_string();
	if let Some(query) = url.query() {
		out.push('?');
		out.push_str(query);
	}
	if let Some(fragment) = url.fragment() {
		out.push('#');
		out.push_str(fragment);
	}
	out
}
