//! Spawning of view loads on the UI event loop.
//!
//! Loads are `!Send` (they hold `Rc` handles to the router) and must run on
//! the thread that owns the DOM. On `wasm32` that is the browser event loop
//! via `wasm_bindgen_futures::spawn_local`; natively it is a tokio
//! `LocalSet` or a `futures` `LocalPool`.

use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use tracing::error;

/// Spawns `!Send` futures on the current thread.
pub trait LocalSpawn {
	/// Spawns `future`, detaching it.
	fn spawn_local(&self, future: LocalBoxFuture<'static, ()>);
}

impl LocalSpawn for futures::executor::LocalSpawner {
	fn spawn_local(&self, future: LocalBoxFuture<'static, ()>) {
		if let Err(err) = LocalSpawnExt::spawn_local(self, future) {
			error!(error = %err, "local pool rejected view load");
		}
	}
}

/// Spawns on the browser event loop.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WasmSpawner;

#[cfg(target_arch = "wasm32")]
impl LocalSpawn for WasmSpawner {
	fn spawn_local(&self, future: LocalBoxFuture<'static, ()>) {
		wasm_bindgen_futures::spawn_local(future);
	}
}

/// Spawns with `tokio::task::spawn_local`.
///
/// Must be used from inside a `tokio::task::LocalSet`; tokio panics
/// otherwise. Native builds never pick this spawner implicitly.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLocalSpawner;

#[cfg(not(target_arch = "wasm32"))]
impl LocalSpawn for TokioLocalSpawner {
	fn spawn_local(&self, future: LocalBoxFuture<'static, ()>) {
		drop(tokio::task::spawn_local(future));
	}
}
