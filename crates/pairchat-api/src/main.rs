//! pairchat API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p pairchat-api
//! ```
//!
//! Configuration is loaded from environment variables (or a `.env` file).

use pairchat_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing(&TracingConfig::default()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting pairchat API server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.env,
        port = config.http.port,
        "Configuration loaded"
    );

    pairchat_api::run(config).await?;

    Ok(())
}
