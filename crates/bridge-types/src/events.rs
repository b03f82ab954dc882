use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
	Info,
	Success,
	Error,
}

/// User-visible notification emitted by a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
	pub severity: Severity,
	pub message: String,
}

impl Notification {
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Info,
			message: message.into(),
		}
	}

	pub fn success(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Success,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			message: message.into(),
		}
	}
}

/// Product analytics event emitted around a submission outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsEvent {
	RouteSubmitSucceeded {
		token_address: String,
		route_count: usize,
	},
	RouteSubmitFailed {
		message: String,
	},
	FeeUpdateSucceeded {
		fee_bps: u16,
	},
	FeeUpdateFailed {
		message: String,
	},
}

impl AnalyticsEvent {
	pub fn category(&self) -> &'static str {
		"pay"
	}

	pub fn action(&self) -> &'static str {
		match self {
			Self::RouteSubmitSucceeded { .. } | Self::RouteSubmitFailed { .. } => {
				"token-discovery-submit"
			}
			Self::FeeUpdateSucceeded { .. } | Self::FeeUpdateFailed { .. } => "fee-config-update",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::RouteSubmitSucceeded { .. } | Self::FeeUpdateSucceeded { .. } => "success",
			Self::RouteSubmitFailed { .. } | Self::FeeUpdateFailed { .. } => "error",
		}
	}
}
