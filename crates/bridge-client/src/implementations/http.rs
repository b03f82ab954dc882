//! HTTP implementation of the bridge client.
//!
//! Obtains a bearer token per call, issues the JSON request, and surfaces
//! non-2xx response bodies verbatim. Single attempt per call; retry and
//! timeout policy belong to the caller, not this layer.

use crate::{BridgeInterface, ClientError};
use async_trait::async_trait;
use bridge_auth::AuthService;
use bridge_types::{Fee, FeeUpdate, ProjectRef, RouteRequest, TokenMetadata};
use reqwest::{header::AUTHORIZATION, Client, Url};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, error};

/// Response envelope for the token route endpoint.
#[derive(Debug, Deserialize)]
struct TokenRouteEnvelope {
	data: Vec<TokenMetadata>,
}

/// Response envelope for the fee query endpoint.
#[derive(Debug, Deserialize)]
struct FeeEnvelope {
	data: Fee,
}

/// Bridge client backed by reqwest.
pub struct HttpBridge {
	base_url: Url,
	client: Client,
	auth: AuthService,
}

impl HttpBridge {
	/// Creates a client against the given base URL.
	///
	/// The URL must be absolute so a misconfigured endpoint surfaces here,
	/// before any submission exists.
	pub fn new(base_url: &str, auth: AuthService) -> Result<Self, ClientError> {
		let parsed = Url::parse(base_url)
			.map_err(|e| ClientError::Endpoint(format!("Invalid base URL '{}': {}", base_url, e)))?;
		if parsed.cannot_be_a_base() {
			return Err(ClientError::Endpoint(format!(
				"Base URL '{}' cannot carry endpoint paths",
				base_url
			)));
		}

		Ok(Self {
			base_url: parsed,
			client: Client::new(),
			auth,
		})
	}

	/// Joins an endpoint path onto the base URL, treating the base as a
	/// directory even when configured without a trailing slash.
	fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
		let mut base = self.base_url.clone();
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}
		base.join(path).map_err(|e| {
			ClientError::Endpoint(format!(
				"Failed to join '{}' to '{}': {}",
				path, self.base_url, e
			))
		})
	}

	async fn bearer(&self) -> Result<String, ClientError> {
		let token = self.auth.token().await?;
		Ok(format!("Bearer {}", token.expose()))
	}
}

impl fmt::Debug for HttpBridge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HttpBridge")
			.field("base_url", &self.base_url)
			.finish_non_exhaustive()
	}
}

#[async_trait]
impl BridgeInterface for HttpBridge {
	async fn submit_route(&self, request: &RouteRequest) -> Result<Vec<TokenMetadata>, ClientError> {
		let url = self.endpoint("v1/tokens")?;
		debug!("Submitting token route request for chain {:?}", request.chain_id);

		let response = self
			.client
			.post(url)
			.header(AUTHORIZATION, self.bearer().await?)
			.json(request)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!("Route discovery request rejected with status {}", status);
			return Err(ClientError::Remote(body));
		}

		let body = response.text().await?;
		let envelope: TokenRouteEnvelope = serde_json::from_str(&body).map_err(|e| {
			ClientError::Transport(format!("Failed to parse route discovery response: {}", e))
		})?;

		debug!("Route discovery returned {} tokens", envelope.data.len());
		Ok(envelope.data)
	}

	async fn fetch_fees(&self, project: &ProjectRef) -> Result<Fee, ClientError> {
		let mut url = self.endpoint("v1/developer/fees")?;
		url.query_pairs_mut()
			.append_pair("clientId", &project.client_id)
			.append_pair("teamId", &project.team_id);

		let response = self
			.client
			.get(url)
			.header(AUTHORIZATION, self.bearer().await?)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!("Fee query rejected with status {}", status);
			return Err(ClientError::Remote(body));
		}

		let body = response.text().await?;
		let envelope: FeeEnvelope = serde_json::from_str(&body)
			.map_err(|e| ClientError::Transport(format!("Failed to parse fee response: {}", e)))?;

		Ok(envelope.data)
	}

	async fn update_fees(&self, update: &FeeUpdate) -> Result<(), ClientError> {
		let url = self.endpoint("v1/developer/fees")?;
		debug!("Updating developer fee to {} bps", update.fee_bps);

		let response = self
			.client
			.put(url)
			.header(AUTHORIZATION, self.bearer().await?)
			.json(update)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!("Fee update rejected with status {}", status);
			return Err(ClientError::Remote(body));
		}

		// Response body not consumed; a 2xx status is the whole contract.
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bridge_auth::implementations::FixedTokenProvider;

	fn test_client(base_url: &str) -> Result<HttpBridge, ClientError> {
		let auth = AuthService::new(Box::new(FixedTokenProvider::new("test-token")));
		HttpBridge::new(base_url, auth)
	}

	#[test]
	fn test_endpoint_joins_with_and_without_trailing_slash() {
		let client = test_client("https://bridge.example.com").unwrap();
		assert_eq!(
			client.endpoint("v1/tokens").unwrap().as_str(),
			"https://bridge.example.com/v1/tokens"
		);

		let client = test_client("https://bridge.example.com/").unwrap();
		assert_eq!(
			client.endpoint("v1/tokens").unwrap().as_str(),
			"https://bridge.example.com/v1/tokens"
		);
	}

	#[test]
	fn test_endpoint_preserves_base_path_segment() {
		let client = test_client("https://gateway.example.com/bridge").unwrap();
		assert_eq!(
			client.endpoint("v1/tokens").unwrap().as_str(),
			"https://gateway.example.com/bridge/v1/tokens"
		);
	}

	#[test]
	fn test_relative_base_url_is_rejected() {
		let err = test_client("bridge.example.com").unwrap_err();
		assert!(matches!(err, ClientError::Endpoint(_)));
	}

	#[test]
	fn test_opaque_base_url_is_rejected() {
		let err = test_client("data:text/plain,nope").unwrap_err();
		assert!(matches!(err, ClientError::Endpoint(_)));
	}
}
