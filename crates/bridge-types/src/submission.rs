//! Submission lifecycle state shared by the dashboard's mutation workflows.

/// Lifecycle of a single submission, generic over the success outcome.
///
/// Created `Idle` when a form is mounted, moved to `Pending` when the
/// controller issues the request, and terminated in `Succeeded` or `Failed`.
/// Terminal states are final; retrying takes a fresh controller instance.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState<T> {
	Idle,
	Pending,
	Succeeded(T),
	Failed(String),
}

impl<T> SubmissionState<T> {
	pub fn is_idle(&self) -> bool {
		matches!(self, Self::Idle)
	}

	pub fn is_pending(&self) -> bool {
		matches!(self, Self::Pending)
	}

	pub fn is_terminal(&self) -> bool {
		matches!(self, Self::Succeeded(_) | Self::Failed(_))
	}

	/// Short label for logs and analytics payloads.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Pending => "pending",
			Self::Succeeded(_) => "succeeded",
			Self::Failed(_) => "failed",
		}
	}
}
