//! Token route discovery submission.

use std::sync::Arc;

use bridge_client::BridgeService;
use bridge_forms::{DiscoveryForm, ViewState};
use bridge_types::{
	AnalyticsEvent, ChainRegistry, Notification, RouteRequest, SubmissionState, TokenMetadata,
};
use tokio::sync::RwLock;
use tracing::{error, info};
use uuid::Uuid;

use crate::ports::{AnalyticsSink, Notifier, TracingAnalytics, TracingNotifier};
use crate::ControllerError;

/// Drives one token route discovery submission from form input to a
/// terminal outcome.
///
/// The lifecycle is single-flight and single-shot: at most one request is
/// in flight at a time, and once a submission succeeds or fails the
/// controller refuses further submissions.
pub struct SubmissionController {
	bridge: Arc<BridgeService>,
	state: Arc<RwLock<SubmissionState<Vec<TokenMetadata>>>>,
	notifier: Arc<dyn Notifier>,
	analytics: Arc<dyn AnalyticsSink>,
}

impl SubmissionController {
	pub fn new(bridge: Arc<BridgeService>) -> Self {
		Self {
			bridge,
			state: Arc::new(RwLock::new(SubmissionState::Idle)),
			notifier: Arc::new(TracingNotifier),
			analytics: Arc::new(TracingAnalytics),
		}
	}

	pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
		self.notifier = notifier;
		self
	}

	pub fn with_analytics(mut self, analytics: Arc<dyn AnalyticsSink>) -> Self {
		self.analytics = analytics;
		self
	}

	/// Current submission state.
	pub async fn state(&self) -> SubmissionState<Vec<TokenMetadata>> {
		self.state.read().await.clone()
	}

	/// Projects the current state and the form's dirty flag into a view.
	pub async fn view(&self, form: &DiscoveryForm) -> ViewState {
		ViewState::of(&*self.state.read().await, form.is_dirty())
	}

	/// Validates the form and submits the resulting request.
	///
	/// Validation failures surface as an error notification and leave the
	/// lifecycle untouched; the bridge is never called for invalid input.
	pub async fn submit_form(
		&self,
		form: &DiscoveryForm,
		chains: &ChainRegistry,
	) -> Result<Vec<TokenMetadata>, ControllerError> {
		let request = match form.validate(chains) {
			Ok(request) => request,
			Err(error) => {
				self.notifier.notify(Notification::error(error.to_string()));
				return Err(error.into());
			}
		};
		self.submit(request).await
	}

	/// Submits a validated request to the bridge.
	pub async fn submit(
		&self,
		request: RouteRequest,
	) -> Result<Vec<TokenMetadata>, ControllerError> {
		{
			let mut state = self.state.write().await;
			match *state {
				SubmissionState::Pending => return Err(ControllerError::AlreadyPending),
				SubmissionState::Succeeded(_) | SubmissionState::Failed(_) => {
					return Err(ControllerError::AlreadySubmitted)
				}
				SubmissionState::Idle => *state = SubmissionState::Pending,
			}
		}

		let submission_id = Uuid::new_v4();
		info!("Starting route discovery submission {}", submission_id);

		// No other task can pass the pending guard until a terminal state
		// lands, so the writes below race with nothing.
		match self.bridge.submit_route(&request).await {
			Ok(tokens) => {
				info!(
					"Submission {} discovered {} token routes",
					submission_id,
					tokens.len()
				);
				*self.state.write().await = SubmissionState::Succeeded(tokens.clone());
				self.notifier
					.notify(Notification::success("Token submitted successfully!"));
				self.analytics.record(AnalyticsEvent::RouteSubmitSucceeded {
					token_address: request.token_address.clone().unwrap_or_default(),
					route_count: tokens.len(),
				});
				Ok(tokens)
			}
			Err(client_error) => {
				let message = client_error.to_string();
				error!("Submission {} failed: {}", submission_id, message);
				*self.state.write().await = SubmissionState::Failed(message.clone());
				self.notifier.notify(Notification::error(message.clone()));
				self.analytics
					.record(AnalyticsEvent::RouteSubmitFailed { message });
				Err(client_error.into())
			}
		}
	}
}
