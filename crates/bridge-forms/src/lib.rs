//! Form state for the bridge dashboard.
//!
//! This crate models the two write surfaces of the dashboard as plain state
//! machines: the token route discovery form and the developer fee form. Each
//! form owns its field values plus the defaults it was created with, derives
//! dirtiness by comparing the two, and validates into the payload type the
//! bridge client sends. Rendering concerns are projected through
//! [`ViewState`], which collapses a submission lifecycle and a dirty flag
//! into what a frontend should draw.

use validator::ValidationErrors;

use thiserror::Error;

pub mod discovery;
pub mod fees;
pub mod view;

pub use discovery::*;
pub use fees::*;
pub use view::*;

/// Validation failure covering a whole form.
///
/// Display is the single user-facing line shown in a notification; the
/// per-field messages live in the wrapped [`ValidationErrors`] and are
/// rendered inline next to the inputs.
#[derive(Debug, Error)]
pub enum FormError {
	/// One or more fields failed validation.
	#[error("Please fix the errors in the form")]
	Invalid(ValidationErrors),
}

impl FormError {
	/// Returns the underlying field errors.
	pub fn errors(&self) -> &ValidationErrors {
		match self {
			Self::Invalid(errors) => errors,
		}
	}

	/// Flattens the field errors into `(field, message)` pairs, sorted by
	/// field name so rendering and logs stay stable across runs.
	pub fn field_messages(&self) -> Vec<(String, String)> {
		let errors = self.errors();
		let mut messages: Vec<(String, String)> = errors
			.field_errors()
			.iter()
			.flat_map(|(field, errors)| {
				errors.iter().map(|error| {
					let message = error
						.message
						.as_ref()
						.map(|message| message.to_string())
						.unwrap_or_else(|| error.code.to_string());
					(field.to_string(), message)
				})
			})
			.collect();
		messages.sort();
		messages
	}
}
