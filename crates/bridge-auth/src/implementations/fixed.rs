//! Auth provider holding a fixed token, for configuration-supplied
//! credentials and tests.

use crate::{AuthError, AuthInterface, AuthToken};
use async_trait::async_trait;

pub struct FixedTokenProvider {
	token: AuthToken,
}

impl FixedTokenProvider {
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			token: AuthToken::new(token),
		}
	}
}

#[async_trait]
impl AuthInterface for FixedTokenProvider {
	async fn token(&self) -> Result<AuthToken, AuthError> {
		Ok(self.token.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::AuthService;

	#[tokio::test]
	async fn test_service_delegates_to_fixed_provider() {
		let service = AuthService::new(Box::new(FixedTokenProvider::new("fixed-token")));

		let token = service.token().await.unwrap();
		assert_eq!(token.expose(), "fixed-token");
	}
}
