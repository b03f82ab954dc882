//! Submission orchestration for the bridge dashboard.
//!
//! Controllers own the submission lifecycle of each write surface. They
//! validate form input, guard the single-flight state machine, call the
//! bridge API through [`bridge_client::BridgeService`], and report the
//! outcome through the [`Notifier`] and [`AnalyticsSink`] ports. State
//! advances from idle through pending into exactly one terminal outcome
//! and never moves again; starting over means constructing a fresh
//! controller alongside a fresh form.

use bridge_client::ClientError;
use bridge_forms::FormError;

use thiserror::Error;

pub mod fees;
pub mod ports;
pub mod submission;

pub use fees::*;
pub use ports::*;
pub use submission::*;

/// Errors surfaced by the submission controllers.
#[derive(Debug, Error)]
pub enum ControllerError {
	/// A submission is in flight; the lifecycle accepts one at a time.
	#[error("A submission is already in flight")]
	AlreadyPending,
	/// The lifecycle already reached a terminal state.
	#[error("This form has already been submitted")]
	AlreadySubmitted,
	/// Form validation failed; the bridge was never called.
	#[error("{0}")]
	Validation(#[from] FormError),
	/// The bridge call itself failed.
	#[error("{0}")]
	Client(#[from] ClientError),
}
