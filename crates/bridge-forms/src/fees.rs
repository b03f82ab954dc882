//! Developer fee form.

use bridge_types::{is_hex_address, Fee};

use validator::{Validate, ValidationError, ValidationErrors};

use crate::FormError;

/// Raw field values of the fee form.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct FeeFields {
	/// Address the fee is paid out to, as typed.
	pub fee_recipient: String,
	#[validate(range(
		min = 0,
		max = 10000,
		message = "Fees must be between 0 and 10000 basis points"
	))]
	pub fee_bps: u16,
}

/// Stateful fee form with dirty tracking against the loaded configuration.
#[derive(Debug, Clone)]
pub struct FeeForm {
	fields: FeeFields,
	defaults: FeeFields,
}

impl Default for FeeForm {
	fn default() -> Self {
		Self::new()
	}
}

impl FeeForm {
	/// Creates an empty form for a project with no fee configured yet.
	pub fn new() -> Self {
		let fields = FeeFields {
			fee_recipient: String::new(),
			fee_bps: 0,
		};
		Self {
			defaults: fields.clone(),
			fields,
		}
	}

	/// Creates a form seeded with the currently configured fee.
	///
	/// The loaded values become the defaults, so the form starts clean and
	/// only dirties when the user changes something.
	pub fn with_current(fee: &Fee) -> Self {
		let fields = FeeFields {
			fee_recipient: fee.fee_recipient.clone(),
			fee_bps: fee.fee_bps,
		};
		Self {
			defaults: fields.clone(),
			fields,
		}
	}

	/// Sets the recipient address field.
	pub fn set_recipient(&mut self, value: impl Into<String>) {
		self.fields.fee_recipient = value.into();
	}

	/// Sets the basis points field.
	pub fn set_bps(&mut self, value: u16) {
		self.fields.fee_bps = value;
	}

	/// Current recipient address text.
	pub fn recipient(&self) -> &str {
		&self.fields.fee_recipient
	}

	/// Current basis points value.
	pub fn bps(&self) -> u16 {
		self.fields.fee_bps
	}

	/// True when any field differs from the loaded configuration.
	pub fn is_dirty(&self) -> bool {
		self.fields != self.defaults
	}

	/// Validates the current fields into a [`Fee`].
	pub fn validate(&self) -> Result<Fee, FormError> {
		let mut errors = match self.fields.validate() {
			Ok(()) => ValidationErrors::new(),
			Err(errors) => errors,
		};

		if !is_hex_address(&self.fields.fee_recipient) {
			let mut error = ValidationError::new("invalid_address");
			error.message = Some("Enter a valid recipient address".into());
			errors.add("fee_recipient", error);
		}

		if !errors.is_empty() {
			return Err(FormError::Invalid(errors));
		}

		Ok(Fee {
			fee_recipient: self.fields.fee_recipient.clone(),
			fee_bps: self.fields.fee_bps,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const RECIPIENT: &str = "0x1111111111111111111111111111111111111111";

	#[test]
	fn test_valid_form_produces_fee() {
		let mut form = FeeForm::new();
		form.set_recipient(RECIPIENT);
		form.set_bps(250);

		let fee = form.validate().unwrap();
		assert_eq!(fee.fee_recipient, RECIPIENT);
		assert_eq!(fee.fee_bps, 250);
	}

	#[test]
	fn test_loaded_fee_starts_clean() {
		let fee = Fee {
			fee_recipient: RECIPIENT.to_string(),
			fee_bps: 30,
		};

		let mut form = FeeForm::with_current(&fee);
		assert!(!form.is_dirty());

		form.set_bps(31);
		assert!(form.is_dirty());

		form.set_bps(30);
		assert!(!form.is_dirty());
	}

	#[test]
	fn test_bps_over_ten_thousand_is_rejected() {
		let mut form = FeeForm::new();
		form.set_recipient(RECIPIENT);
		form.set_bps(10001);

		let error = form.validate().unwrap_err();
		let messages = error.field_messages();
		assert_eq!(
			messages,
			vec![(
				"fee_bps".into(),
				"Fees must be between 0 and 10000 basis points".into()
			)]
		);
	}

	#[test]
	fn test_bps_bounds_are_inclusive() {
		let mut form = FeeForm::new();
		form.set_recipient(RECIPIENT);

		form.set_bps(0);
		assert_eq!(form.validate().unwrap().fee_bps, 0);

		form.set_bps(10000);
		assert_eq!(form.validate().unwrap().fee_bps, 10000);
	}

	#[test]
	fn test_malformed_recipient_is_reported() {
		let mut form = FeeForm::new();
		form.set_recipient("treasury");
		form.set_bps(100);

		let error = form.validate().unwrap_err();
		let messages = error.field_messages();
		assert_eq!(
			messages,
			vec![("fee_recipient".into(), "Enter a valid recipient address".into())]
		);
	}
}
