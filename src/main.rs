//! TenShoku Server: job-matching REST backend
//!
//! Main entry point: loads configuration, initializes logging and starts the
//! HTTP server.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use tenshoku_core::config::AppConfig;
use tenshoku_core::error::AppError;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tenshoku-server", version, about = "TenShoku job-matching API server")]
struct Args {
    /// Path to the TOML configuration file (optional on disk).
    #[arg(short, long, env = "TENSHOKU_CONFIG", default_value = "config/default.toml")]
    config: String,

    /// Override the bind host.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match load_configuration(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!(
        "Starting TenShoku v{} (config: '{}')",
        env!("CARGO_PKG_VERSION"),
        args.config
    );

    if let Err(e) = tenshoku_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment, then apply CLI overrides
fn load_configuration(args: &Args) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load(&args.config)?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
