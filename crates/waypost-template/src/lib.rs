//! # Waypost Templates
//!
//! Template engines that turn a fetched view source and its
//! [`ViewContext`](waypost_core::ViewContext) into HTML.
//!
//! - [`TeraEngine`]: Tera syntax (`{{ title }}`, `{% if %}`, `{% for %}`,
//!   inheritance through a shared instance)
//! - [`FnEngine`]: wraps any function, handy for stubs

#![warn(missing_docs)]

pub mod fn_engine;
pub mod tera_engine;

pub use fn_engine::{FnEngine, passthrough};
pub use tera_engine::TeraEngine;

// Re-exported for building shared instances for `TeraEngine::with_tera`.
pub use tera;
