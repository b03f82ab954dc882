//! Token route discovery form.
//!
//! Collects the chain and token address a user wants routes discovered for
//! and validates them into a [`RouteRequest`]. The selected chain lives in
//! exactly one place, the field itself; there is no separate selection state
//! to fall out of sync with the submitted value.

use bridge_types::{is_hex_address, ChainId, ChainRegistry, RouteRequest};

use validator::{Validate, ValidationError, ValidationErrors};

use crate::FormError;

/// Raw field values of the discovery form.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct DiscoveryFields {
	/// Chain the token lives on. `None` until the user picks one.
	#[validate(required(message = "Select a blockchain"))]
	pub chain_id: Option<ChainId>,
	/// Token contract address, as typed.
	pub token_address: String,
}

/// Stateful discovery form with dirty tracking against its defaults.
#[derive(Debug, Clone)]
pub struct DiscoveryForm {
	fields: DiscoveryFields,
	defaults: DiscoveryFields,
}

impl Default for DiscoveryForm {
	fn default() -> Self {
		Self::new()
	}
}

impl DiscoveryForm {
	/// Creates an empty form: no chain selected, empty address.
	pub fn new() -> Self {
		let fields = DiscoveryFields {
			chain_id: None,
			token_address: String::new(),
		};
		Self {
			defaults: fields.clone(),
			fields,
		}
	}

	/// Sets the selected chain.
	pub fn set_chain(&mut self, chain: ChainId) {
		self.fields.chain_id = Some(chain);
	}

	/// Sets the token address field.
	pub fn set_token_address(&mut self, value: impl Into<String>) {
		self.fields.token_address = value.into();
	}

	/// Currently selected chain, if any.
	pub fn chain(&self) -> Option<ChainId> {
		self.fields.chain_id
	}

	/// Current token address text.
	pub fn token_address(&self) -> &str {
		&self.fields.token_address
	}

	/// True when any field differs from the defaults the form started with.
	///
	/// Reverting a field back to its default makes the form clean again.
	pub fn is_dirty(&self) -> bool {
		self.fields != self.defaults
	}

	/// Validates the current fields against the chain registry.
	///
	/// All failures are collected into a single [`FormError`] so every
	/// invalid field can be highlighted at once. On success the fields are
	/// converted into the request payload; the form itself is untouched.
	pub fn validate(&self, chains: &ChainRegistry) -> Result<RouteRequest, FormError> {
		let mut errors = match self.fields.validate() {
			Ok(()) => ValidationErrors::new(),
			Err(errors) => errors,
		};

		if !is_hex_address(&self.fields.token_address) {
			let mut error = ValidationError::new("invalid_address");
			error.message = Some("Enter a valid contract address".into());
			errors.add("token_address", error);
		}

		if let Some(chain) = self.fields.chain_id {
			if !chains.contains(chain) {
				let mut error = ValidationError::new("unknown_chain");
				error.message = Some(format!("Chain {} is not supported", chain).into());
				errors.add("chain_id", error);
			}
		}

		match (self.fields.chain_id, errors.is_empty()) {
			(Some(chain), true) => Ok(RouteRequest::new(
				chain,
				self.fields.token_address.clone(),
			)),
			_ => Err(FormError::Invalid(errors)),
		}
	}
}
