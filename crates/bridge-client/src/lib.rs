use async_trait::async_trait;
use bridge_auth::AuthError;
use bridge_types::{Fee, FeeUpdate, ProjectRef, RouteRequest, TokenMetadata};
use thiserror::Error;

pub mod implementations;

pub use implementations::HttpBridge;

#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Invalid bridge endpoint: {0}")]
	Endpoint(String),
	#[error("{0}")]
	Remote(String),
	#[error("Transport failure: {0}")]
	Transport(String),
	#[error("Auth token lookup failed: {0}")]
	Auth(String),
}

impl From<reqwest::Error> for ClientError {
	fn from(err: reqwest::Error) -> Self {
		Self::Transport(err.to_string())
	}
}

impl From<AuthError> for ClientError {
	fn from(err: AuthError) -> Self {
		Self::Auth(err.to_string())
	}
}

#[async_trait]
pub trait BridgeInterface: Send + Sync {
	async fn submit_route(&self, request: &RouteRequest) -> Result<Vec<TokenMetadata>, ClientError>;
	async fn fetch_fees(&self, project: &ProjectRef) -> Result<Fee, ClientError>;
	async fn update_fees(&self, update: &FeeUpdate) -> Result<(), ClientError>;
}

pub struct BridgeService {
	client: Box<dyn BridgeInterface>,
}

impl BridgeService {
	pub fn new(client: Box<dyn BridgeInterface>) -> Self {
		Self { client }
	}

	pub async fn submit_route(
		&self,
		request: &RouteRequest,
	) -> Result<Vec<TokenMetadata>, ClientError> {
		self.client.submit_route(request).await
	}

	pub async fn fetch_fees(&self, project: &ProjectRef) -> Result<Fee, ClientError> {
		self.client.fetch_fees(project).await
	}

	pub async fn update_fees(&self, update: &FeeUpdate) -> Result<(), ClientError> {
		self.client.update_fees(update).await
	}
}
