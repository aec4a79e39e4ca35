//! Waypost Transports
//!
//! Implementations of [`Transport`](waypost_core::Transport) that fetch view
//! template sources.
//!
//! | Transport | Feature | Source |
//! |-----------|---------|--------|
//! | [`HttpTransport`] | `http` | HTTP via `reqwest` (browser `fetch` on wasm) |
//! | [`StaticTransport`] | none | in-memory map |

#![warn(missing_docs)]

#[cfg(feature = "http")]
pub mod http;
pub mod static_map;

#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use static_map::StaticTransport;
