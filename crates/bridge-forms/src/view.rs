//! View-state projection of the submission lifecycle.

use bridge_types::SubmissionState;

/// What a frontend should render for a form at a given point in its
/// submission lifecycle.
///
/// Terminal states replace the form entirely; there is no transition from
/// [`ViewState::Success`] or [`ViewState::Failure`] back to
/// [`ViewState::Form`]. Starting over means mounting a fresh form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
	/// Input fields are visible and editable.
	Form {
		/// A submission is in flight; inputs should be locked.
		busy: bool,
		/// The submit control is actionable.
		submit_enabled: bool,
	},
	/// The submission succeeded; show the confirmation panel.
	Success,
	/// The submission failed; show the failure panel with the captured
	/// message.
	Failure { message: String },
}

impl ViewState {
	/// Projects a submission state and the form's dirty flag into a view.
	///
	/// Submit is enabled only for an idle form with unsaved edits; it is
	/// never enabled while a submission is pending or after one finished.
	pub fn of<T>(state: &SubmissionState<T>, dirty: bool) -> Self {
		match state {
			SubmissionState::Idle => Self::Form {
				busy: false,
				submit_enabled: dirty,
			},
			SubmissionState::Pending => Self::Form {
				busy: true,
				submit_enabled: false,
			},
			SubmissionState::Succeeded(_) => Self::Success,
			SubmissionState::Failed(message) => Self::Failure {
				message: message.clone(),
			},
		}
	}

	/// True when the submit control should respond to activation.
	pub fn submit_enabled(&self) -> bool {
		matches!(
			self,
			Self::Form {
				submit_enabled: true,
				..
			}
		)
	}
}
