//! Configuration loading for the bridge dashboard.
//!
//! Loads a [`DashboardConfig`] from a TOML, JSON, or YAML file, substitutes
//! `${VAR}` references from the environment, applies `BRIDGE_`-prefixed
//! environment overrides, and validates the result before anything else
//! starts up.

use std::env;
use std::path::Path;
use thiserror::Error;

use bridge_types::DashboardConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Configuration loader with environment variable substitution
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "BRIDGE_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<DashboardConfig, ConfigError> {
		// Load base configuration from file
		let mut config = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			return Err(ConfigError::FileNotFound(
				"No configuration file specified".to_string(),
			));
		};

		// Apply environment variable overrides
		self.apply_env_overrides(&mut config);

		// Validate configuration
		self.validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &str) -> Result<DashboardConfig, ConfigError> {
		let content = tokio::fs::read_to_string(file_path).await?;

		// Substitute environment variables
		let substituted_content = self.substitute_env_vars(&content)?;

		self.parse(file_path, &substituted_content)
	}

	/// Parses the content according to the file extension; TOML is the
	/// default for unrecognized extensions.
	fn parse(&self, file_path: &str, content: &str) -> Result<DashboardConfig, ConfigError> {
		let extension = Path::new(file_path)
			.extension()
			.and_then(|ext| ext.to_str())
			.unwrap_or("toml");

		let config = match extension {
			"json" => serde_json::from_str(content)
				.map_err(|e| ConfigError::ParseError(e.to_string()))?,
			"yaml" | "yml" => serde_yaml::from_str(content)
				.map_err(|e| ConfigError::ParseError(e.to_string()))?,
			_ => toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?,
		};

		Ok(config)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut DashboardConfig) {
		// Apply environment variable overrides for common settings
		if let Ok(host) = env::var(format!("{}HOST", self.env_prefix)) {
			config.bridge.base_url = host;
		}

		if let Ok(log_level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
			config.dashboard.log_level = log_level;
		}
	}

	fn validate_config(&self, config: &DashboardConfig) -> Result<(), ConfigError> {
		let base_url = &config.bridge.base_url;
		if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
			return Err(ConfigError::ValidationError(format!(
				"Bridge base URL must start with http:// or https://, got {:?}",
				base_url
			)));
		}

		match config.auth.provider.as_str() {
			"env" => {}
			"static" => {
				if config.auth.token.as_deref().unwrap_or("").is_empty() {
					return Err(ConfigError::ValidationError(
						"Auth provider \"static\" requires a token".to_string(),
					));
				}
			}
			other => {
				return Err(ConfigError::ValidationError(format!(
					"Unknown auth provider {:?}, expected \"env\" or \"static\"",
					other
				)));
			}
		}

		for chain in &config.chains {
			if chain.slug.is_empty() {
				return Err(ConfigError::ValidationError(format!(
					"Chain {} must have a non-empty slug",
					chain.id
				)));
			}
		}

		Ok(())
	}
}
