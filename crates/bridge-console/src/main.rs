use anyhow::{Context, Result};
use bridge_auth::{AuthInterface, AuthService, EnvTokenProvider, FixedTokenProvider};
use bridge_client::{BridgeService, HttpBridge};
use bridge_config::ConfigLoader;
use bridge_core::{ControllerError, FeeController, Notifier, SubmissionController};
use bridge_forms::{DiscoveryForm, FeeForm, FormError};
use bridge_types::{DashboardConfig, Notification, ProjectRef, Severity, TokenMetadata};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bridge-dashboard")]
#[command(about = "Bridge Developer Dashboard", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[arg(short, long, value_name = "FILE", default_value = "config/dashboard.toml")]
	config: PathBuf,

	#[arg(long, env = "BRIDGE_LOG_LEVEL", default_value = "info")]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Submit a token for route discovery
	AddRoute {
		/// Chain id or slug, e.g. "137" or "polygon"
		#[arg(long)]
		chain: String,
		/// Token contract address
		#[arg(long)]
		token: String,
	},
	/// Show the developer fee configured for the project
	ShowFees,
	/// Update the developer fee for the project
	SetFees {
		/// Address the fee is paid out to
		#[arg(long)]
		recipient: String,
		/// Fee in basis points, 0 through 10000
		#[arg(long)]
		bps: u16,
	},
	/// List the chains selectable for route discovery
	Chains,
	/// Validate the configuration file
	Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize tracing
	setup_tracing(&cli.log_level)?;

	// Handle commands
	match cli.command {
		Commands::AddRoute { chain, token } => add_route(&cli.config, chain, token).await,
		Commands::ShowFees => show_fees(&cli.config).await,
		Commands::SetFees { recipient, bps } => set_fees(&cli.config, recipient, bps).await,
		Commands::Chains => list_chains(&cli.config).await,
		Commands::Validate => validate_config(&cli.config).await,
	}
}

async fn add_route(config_path: &Path, chain: String, token: String) -> Result<()> {
	let config = load_config(config_path).await?;
	let chains = config.chain_registry();
	let bridge = build_bridge(&config)?;

	let chain_id = chains.resolve(&chain).with_context(|| {
		format!(
			"Unknown chain {:?}; run the chains command to see what is available",
			chain
		)
	})?;

	let mut form = DiscoveryForm::new();
	form.set_chain(chain_id);
	form.set_token_address(token);

	let controller = SubmissionController::new(bridge).with_notifier(Arc::new(ConsoleNotifier));

	match controller.submit_form(&form, &chains).await {
		Ok(tokens) => {
			render_discovery_success(&tokens);
			Ok(())
		}
		Err(error) => {
			match &error {
				ControllerError::Validation(form_error) => render_field_errors(form_error),
				ControllerError::Client(_) => render_discovery_failure(&error.to_string()),
				_ => {}
			}
			Err(error).context("Route discovery submission failed")
		}
	}
}

async fn show_fees(config_path: &Path) -> Result<()> {
	let config = load_config(config_path).await?;
	let project = project_ref(&config)?;
	let bridge = build_bridge(&config)?;
	let controller = FeeController::new(bridge, project);

	let fee = controller
		.load()
		.await
		.context("Failed to fetch the developer fee")?;

	println!("Fee recipient: {}", fee.fee_recipient);
	println!("Fee: {} bps", fee.fee_bps);
	Ok(())
}

async fn set_fees(config_path: &Path, recipient: String, bps: u16) -> Result<()> {
	let config = load_config(config_path).await?;
	let project = project_ref(&config)?;
	let bridge = build_bridge(&config)?;
	let controller = FeeController::new(bridge, project).with_notifier(Arc::new(ConsoleNotifier));

	// Seed the form with the configured fee when one exists, so an update
	// that changes nothing is recognized as such.
	let mut form = match controller.load().await {
		Ok(current) => FeeForm::with_current(&current),
		Err(_) => FeeForm::new(),
	};
	form.set_recipient(recipient);
	form.set_bps(bps);

	if !form.is_dirty() {
		println!("The configured fee already matches; nothing to update.");
		return Ok(());
	}

	if let Err(error) = controller.save_form(&form).await {
		if let ControllerError::Validation(form_error) = &error {
			render_field_errors(form_error);
		}
		return Err(error).context("Fee update failed");
	}

	println!("Fee recipient: {}", form.recipient());
	println!("Fee: {} bps", form.bps());
	Ok(())
}

async fn list_chains(config_path: &Path) -> Result<()> {
	let config = load_config(config_path).await?;

	println!("{:<10} {:<12} {}", "CHAIN ID", "SLUG", "NAME");
	for chain in config.chain_registry().iter() {
		println!("{:<10} {:<12} {}", chain.id.0, chain.slug, chain.name);
	}
	Ok(())
}

async fn validate_config(config_path: &Path) -> Result<()> {
	info!("Validating configuration file: {:?}", config_path);

	let config = load_config(config_path).await?;

	info!("Configuration is valid");
	info!("Dashboard name: {}", config.dashboard.name);
	info!("Bridge base URL: {}", config.bridge.base_url);
	info!("Auth provider: {}", config.auth.provider);
	info!("Selectable chains: {}", config.chain_registry().len());
	if let Some(project) = &config.project {
		info!("Project client id: {}", project.client_id);
	}
	Ok(())
}

async fn load_config(config_path: &Path) -> Result<DashboardConfig> {
	let config = ConfigLoader::new()
		.with_file(config_path)
		.load()
		.await
		.context("Failed to load configuration")?;
	Ok(config)
}

fn build_bridge(config: &DashboardConfig) -> Result<Arc<BridgeService>> {
	let provider: Box<dyn AuthInterface> = match config.auth.provider.as_str() {
		"static" => Box::new(FixedTokenProvider::new(
			config.auth.token.clone().unwrap_or_default(),
		)),
		_ => Box::new(EnvTokenProvider::new(&config.auth.env_var)),
	};
	let auth = AuthService::new(provider);

	let http = HttpBridge::new(&config.bridge.base_url, auth)
		.context("Failed to construct the bridge client")?;
	Ok(Arc::new(BridgeService::new(Box::new(http))))
}

fn project_ref(config: &DashboardConfig) -> Result<ProjectRef> {
	let project = config
		.project
		.as_ref()
		.context("Fee commands require [project] credentials in the configuration")?;
	Ok(project.project_ref())
}

fn render_discovery_success(tokens: &[TokenMetadata]) {
	println!();
	println!("Thank you for your submission. If you still do not see your token");
	println!("listed after some time, please reach out to our team for support.");

	if !tokens.is_empty() {
		println!();
		println!("Discovered routes:");
		for token in tokens {
			println!(
				"  {} ({}), decimals {}, chain {}, {}",
				token.name, token.symbol, token.decimals, token.chain_id, token.address
			);
		}
	}
}

fn render_discovery_failure(message: &str) {
	println!();
	println!("Your token could not be submitted.");
	println!("Reason: {}", message);
}

fn render_field_errors(error: &FormError) {
	for (field, message) in error.field_messages() {
		println!("  {}: {}", field, message);
	}
}

/// Notifier that prints toasts to standard output.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
	fn notify(&self, notification: Notification) {
		let tag = match notification.severity {
			Severity::Info => "info",
			Severity::Success => "ok",
			Severity::Error => "error",
		};
		println!("[{}] {}", tag, notification.message);
	}
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}
