//! Outbound ports for user-facing side effects.
//!
//! Controllers report outcomes through these traits instead of rendering
//! anything themselves, so a console binary, a test, or a future UI layer
//! can each decide what a notification or an analytics event turns into.

use bridge_types::{AnalyticsEvent, Notification, Severity};

use tracing::{error, info};

/// Receives user-facing notifications emitted around submission outcomes.
pub trait Notifier: Send + Sync {
	fn notify(&self, notification: Notification);
}

/// Receives product analytics events emitted around submission outcomes.
pub trait AnalyticsSink: Send + Sync {
	fn record(&self, event: AnalyticsEvent);
}

/// Default notifier that forwards notifications to the log stream.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
	fn notify(&self, notification: Notification) {
		match notification.severity {
			Severity::Error => error!("{}", notification.message),
			Severity::Info | Severity::Success => info!("{}", notification.message),
		}
	}
}

/// Default analytics sink that forwards events to the log stream.
#[derive(Debug, Default, Clone)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
	fn record(&self, event: AnalyticsEvent) {
		info!(
			"Analytics event: category={} action={} label={}",
			event.category(),
			event.action(),
			event.label()
		);
	}
}
