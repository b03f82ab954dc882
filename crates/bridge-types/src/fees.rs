//! Developer fee configuration models.
//!
//! The fee entity is independent of route discovery; it shares the submission
//! machinery but talks to its own endpoint.

use serde::{Deserialize, Serialize};

/// Developer fee configured for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
	/// Address the fee is paid out to.
	pub fee_recipient: String,
	/// Fee in basis points, 0 through 10000.
	pub fee_bps: u16,
}

/// Update payload for the developer fee endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeUpdate {
	pub client_id: String,
	pub team_id: String,
	pub fee_recipient: String,
	pub fee_bps: u16,
}

impl FeeUpdate {
	pub fn new(project: &ProjectRef, fee: &Fee) -> Self {
		Self {
			client_id: project.client_id.clone(),
			team_id: project.team_id.clone(),
			fee_recipient: fee.fee_recipient.clone(),
			fee_bps: fee.fee_bps,
		}
	}
}

/// Project whose fee configuration is being read or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
	pub client_id: String,
	pub team_id: String,
}
