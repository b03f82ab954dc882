//! Wire models for the token route discovery endpoint.
//!
//! These structs serialize to the exact JSON shapes the bridge API exchanges,
//! with camelCase field names and absent optionals omitted from the body.

use crate::chains::ChainId;
use serde::{Deserialize, Serialize};

/// Payload submitted to the route discovery endpoint.
///
/// Both fields are optional at the type level; the call is only meaningful
/// when both are present, which form validation guarantees. Immutable once
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub chain_id: Option<ChainId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token_address: Option<String>,
}

impl RouteRequest {
	pub fn new(chain_id: ChainId, token_address: impl Into<String>) -> Self {
		Self {
			chain_id: Some(chain_id),
			token_address: Some(token_address.into()),
		}
	}
}

/// Token listing produced by the bridge for a successful discovery request.
///
/// Read-only to this system; only the external API creates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
	pub name: String,
	pub symbol: String,
	pub address: String,
	pub decimals: u8,
	pub chain_id: ChainId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon_uri: Option<String>,
}

/// Returns true when the value is a 0x-prefixed 20-byte hex address.
pub fn is_hex_address(value: &str) -> bool {
	let unprefixed = match value.strip_prefix("0x") {
		Some(rest) => rest,
		None => return false,
	};
	unprefixed.len() == 40 && hex::decode(unprefixed).is_ok()
}
