//! Developer fee configuration workflow.

use std::sync::Arc;

use bridge_client::BridgeService;
use bridge_forms::{FeeForm, ViewState};
use bridge_types::{AnalyticsEvent, Fee, FeeUpdate, Notification, ProjectRef, SubmissionState};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::ports::{AnalyticsSink, Notifier, TracingAnalytics, TracingNotifier};
use crate::ControllerError;

/// Reads and updates the developer fee for one project.
///
/// Updates run through the same single-shot lifecycle as route discovery.
/// Reads are side-effect free and never touch it.
pub struct FeeController {
	bridge: Arc<BridgeService>,
	project: ProjectRef,
	state: Arc<RwLock<SubmissionState<()>>>,
	notifier: Arc<dyn Notifier>,
	analytics: Arc<dyn AnalyticsSink>,
}

impl FeeController {
	pub fn new(bridge: Arc<BridgeService>, project: ProjectRef) -> Self {
		Self {
			bridge,
			project,
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

	/// Current update state.
	pub async fn state(&self) -> SubmissionState<()> {
		self.state.read().await.clone()
	}

	/// Projects the current state and the form's dirty flag into a view.
	pub async fn view(&self, form: &FeeForm) -> ViewState {
		ViewState::of(&*self.state.read().await, form.is_dirty())
	}

	/// Fetches the currently configured fee.
	pub async fn load(&self) -> Result<Fee, ControllerError> {
		let fee = self.bridge.fetch_fees(&self.project).await?;
		Ok(fee)
	}

	/// Validates the form and saves the resulting fee.
	///
	/// Validation failures surface as an error notification and leave the
	/// lifecycle untouched; the bridge is never called for invalid input.
	pub async fn save_form(&self, form: &FeeForm) -> Result<(), ControllerError> {
		let fee = match form.validate() {
			Ok(fee) => fee,
			Err(error) => {
				self.notifier.notify(Notification::error(error.to_string()));
				return Err(error.into());
			}
		};
		self.save(fee).await
	}

	/// Saves a validated fee for the project.
	pub async fn save(&self, fee: Fee) -> Result<(), ControllerError> {
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

		info!(
			"Updating developer fee for project {} to {} bps",
			self.project.client_id, fee.fee_bps
		);

		let update = FeeUpdate::new(&self.project, &fee);
		match self.bridge.update_fees(&update).await {
			Ok(()) => {
				*self.state.write().await = SubmissionState::Succeeded(());
				self.notifier
					.notify(Notification::success("Fees updated successfully!"));
				self.analytics.record(AnalyticsEvent::FeeUpdateSucceeded {
					fee_bps: fee.fee_bps,
				});
				Ok(())
			}
			Err(client_error) => {
				let message = client_error.to_string();
				error!(
					"Fee update for project {} failed: {}",
					self.project.client_id, message
				);
				*self.state.write().await = SubmissionState::Failed(message.clone());
				self.notifier.notify(Notification::error(message.clone()));
				self.analytics
					.record(AnalyticsEvent::FeeUpdateFailed { message });
				Err(client_error.into())
			}
		}
	}
}
