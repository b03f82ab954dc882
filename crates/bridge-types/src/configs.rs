//! # Configuration Types
//!
//! Configuration structures for the bridge dashboard.
//!
//! This module defines the configuration schema the dashboard loads at
//! startup, including the bridge endpoint, optional project credentials,
//! auth token sourcing, and extra chains for the discovery form.

use crate::chains::{ChainRegistry, KnownChain};
use crate::fees::ProjectRef;
use serde::{Deserialize, Serialize};

/// Root configuration object for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
	/// Core dashboard settings like name and logging
	#[serde(default)]
	pub dashboard: DashboardSettings,
	/// Bridge API endpoint settings
	pub bridge: BridgeSettings,
	/// Project credentials for the fee configuration workflow
	#[serde(default)]
	pub project: Option<ProjectSettings>,
	/// Auth token sourcing settings
	#[serde(default)]
	pub auth: AuthSettings,
	/// Extra chains selectable in the discovery form
	#[serde(default)]
	pub chains: Vec<KnownChain>,
}

impl DashboardConfig {
	/// Builds the chain registry: the built-in mainnets plus any configured
	/// extras, with configured entries replacing built-ins that share an id.
	pub fn chain_registry(&self) -> ChainRegistry {
		let mut registry = ChainRegistry::with_defaults();
		for chain in &self.chains {
			registry.register(chain.clone());
		}
		registry
	}
}

/// Core dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
	/// Name for this dashboard instance
	#[serde(default = "default_dashboard_name")]
	pub name: String,
	/// Logging level for the binary
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

impl Default for DashboardSettings {
	fn default() -> Self {
		Self {
			name: default_dashboard_name(),
			log_level: default_log_level(),
		}
	}
}

/// Bridge API endpoint settings.
///
/// The base URL is always explicit; there is no compiled-in host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeSettings {
	/// Base URL of the bridge API, e.g. "https://bridge.example.com"
	pub base_url: String,
}

/// Project credentials used by the fee configuration workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
	/// Client identifier of the project
	pub client_id: String,
	/// Team identifier owning the project
	pub team_id: String,
}

impl ProjectSettings {
	/// Converts the settings into the wire-level project reference.
	pub fn project_ref(&self) -> ProjectRef {
		ProjectRef {
			client_id: self.client_id.clone(),
			team_id: self.team_id.clone(),
		}
	}
}

/// Auth token sourcing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
	/// Token provider kind, "env" or "static"
	#[serde(default = "default_auth_provider")]
	pub provider: String,
	/// Environment variable read by the env provider
	#[serde(default = "default_auth_env_var")]
	pub env_var: String,
	/// Literal token used by the static provider
	#[serde(default)]
	pub token: Option<String>,
}

impl Default for AuthSettings {
	fn default() -> Self {
		Self {
			provider: default_auth_provider(),
			env_var: default_auth_env_var(),
			token: None,
		}
	}
}

/// Default dashboard instance name.
fn default_dashboard_name() -> String {
	"bridge-dashboard".to_string()
}

/// Default logging level.
fn default_log_level() -> String {
	"info".to_string()
}

/// Default auth token provider kind.
fn default_auth_provider() -> String {
	"env".to_string()
}

/// Default environment variable holding the API token.
fn default_auth_env_var() -> String {
	"BRIDGE_AUTH_TOKEN".to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::chains::ChainId;

	#[test]
	fn test_minimal_config_fills_defaults() {
		let json = r#"{ "bridge": { "base_url": "https://bridge.example.com" } }"#;
		let config: DashboardConfig = serde_json::from_str(json).unwrap();

		assert_eq!(config.dashboard.name, "bridge-dashboard");
		assert_eq!(config.dashboard.log_level, "info");
		assert_eq!(config.auth.provider, "env");
		assert_eq!(config.auth.env_var, "BRIDGE_AUTH_TOKEN");
		assert_eq!(config.auth.token, None);
		assert!(config.project.is_none());
		assert!(config.chains.is_empty());
	}

	#[test]
	fn test_chain_registry_merges_configured_chains() {
		let json = r#"{
			"bridge": { "base_url": "https://bridge.example.com" },
			"chains": [
				{ "id": 59144, "slug": "linea", "name": "Linea" },
				{ "id": 137, "slug": "matic", "name": "Polygon PoS" }
			]
		}"#;
		let config: DashboardConfig = serde_json::from_str(json).unwrap();

		let registry = config.chain_registry();
		assert_eq!(registry.resolve("linea"), Some(ChainId(59144)));
		assert_eq!(registry.resolve("matic"), Some(ChainId::POLYGON));
		assert_eq!(registry.resolve("ethereum"), Some(ChainId::ETHEREUM));
		assert_eq!(registry.resolve("polygon"), None);
	}

	#[test]
	fn test_project_settings_convert_to_project_ref() {
		let settings = ProjectSettings {
			client_id: "client-1".to_string(),
			team_id: "team-1".to_string(),
		};

		let project = settings.project_ref();
		assert_eq!(project.client_id, "client-1");
		assert_eq!(project.team_id, "team-1");
	}
}
