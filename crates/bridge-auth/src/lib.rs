use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod implementations;

pub use implementations::{EnvTokenProvider, FixedTokenProvider};

#[derive(Debug, Error)]
pub enum AuthError {
	#[error("Token lookup failed: {0}")]
	Lookup(String),
}

/// Bearer credential for the bridge API.
///
/// The raw value may be empty; it is forwarded verbatim either way. Debug
/// output redacts the value so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
	pub fn new(raw: impl Into<String>) -> Self {
		Self(raw.into())
	}

	pub fn expose(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Debug for AuthToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0.is_empty() {
			write!(f, "AuthToken(empty)")
		} else {
			write!(f, "AuthToken(***)")
		}
	}
}

#[async_trait]
pub trait AuthInterface: Send + Sync {
	async fn token(&self) -> Result<AuthToken, AuthError>;
}

pub struct AuthService {
	provider: Box<dyn AuthInterface>,
}

impl AuthService {
	pub fn new(provider: Box<dyn AuthInterface>) -> Self {
		Self { provider }
	}

	pub async fn token(&self) -> Result<AuthToken, AuthError> {
		self.provider.token().await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_token_debug_is_redacted() {
		let token = AuthToken::new("super-secret-jwt");
		assert_eq!(format!("{:?}", token), "AuthToken(***)");

		let empty = AuthToken::new("");
		assert_eq!(format!("{:?}", empty), "AuthToken(empty)");
		assert!(empty.is_empty());
	}

	#[test]
	fn test_token_exposes_raw_value() {
		let token = AuthToken::new("abc123");
		assert_eq!(token.expose(), "abc123");
	}
}
