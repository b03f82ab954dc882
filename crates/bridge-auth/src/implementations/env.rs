//! Auth provider backed by an environment variable.
//!
//! This is the session stand-in for local and CI use: the dashboard operator
//! exports the bearer token once and every call picks it up. An unset
//! variable yields an empty token, which the upstream contract permits.

use crate::{AuthError, AuthInterface, AuthToken};
use async_trait::async_trait;
use std::env;

/// Reads the bearer token from an environment variable on every call.
pub struct EnvTokenProvider {
	var: String,
}

impl EnvTokenProvider {
	pub fn new(var: impl Into<String>) -> Self {
		Self { var: var.into() }
	}
}

#[async_trait]
impl AuthInterface for EnvTokenProvider {
	async fn token(&self) -> Result<AuthToken, AuthError> {
		match env::var(&self.var) {
			Ok(value) => Ok(AuthToken::new(value)),
			Err(env::VarError::NotPresent) => Ok(AuthToken::new("")),
			Err(env::VarError::NotUnicode(_)) => Err(AuthError::Lookup(format!(
				"Environment variable {} is not valid unicode",
				self.var
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_reads_token_from_environment() {
		env::set_var("BRIDGE_AUTH_TEST_TOKEN_SET", "session-token");
		let provider = EnvTokenProvider::new("BRIDGE_AUTH_TEST_TOKEN_SET");

		let token = provider.token().await.unwrap();
		assert_eq!(token.expose(), "session-token");
	}

	#[tokio::test]
	async fn test_missing_variable_yields_empty_token() {
		let provider = EnvTokenProvider::new("BRIDGE_AUTH_TEST_TOKEN_UNSET");

		let token = provider.token().await.unwrap();
		assert!(token.is_empty());
	}
}
