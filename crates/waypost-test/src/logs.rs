//! Log capture for assertions on `tracing` output.

use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// One captured event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
	/// Event level.
	pub level: tracing::Level,
	/// Formatted `message` field.
	pub message: String,
}

/// Captured events, shared with the capturing layer.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
	events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedLogs {
	/// Returns every captured event.
	pub fn events(&self) -> Vec<CapturedEvent> {
		self.events
			.lock()
			.map(|events| events.clone())
			.unwrap_or_default()
	}

	/// Returns true if an event at `level` contains `needle`.
	pub fn contains(&self, level: tracing::Level, needle: &str) -> bool {
		self.events()
			.iter()
			.any(|event| event.level == level && event.message.contains(needle))
	}
}

struct CaptureLayer {
	logs: CapturedLogs,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
				if field.name() == "message" {
					self.message = value.to_string();
				}
			}

			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		if let Ok(mut events) = self.logs.events.lock() {
			events.push(CapturedEvent {
				level: *event.metadata().level(),
				message: visitor.message,
			});
		}
	}
}

/// Captures `tracing` events on the current thread until the guard drops.
///
/// Tests using this should be `#[serial]` when they also assert on global
/// logging state.
///
/// ```
/// let (logs, _guard) = waypost_test::capture_logs();
/// tracing::warn!("view missing");
/// assert!(logs.contains(tracing::Level::WARN, "view missing"));
/// ```
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
	let logs = CapturedLogs::default();
	let layer = CaptureLayer { logs: logs.clone() };
	let guard = tracing_subscriber::registry().with(layer).set_default();
	(logs, guard)
}
