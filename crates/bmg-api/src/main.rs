//! BeMyGuest API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p bmg-api
//! ```
//!
//! Configuration is loaded from environment variables (a .env file is honored).

use bmg_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing: JSON logs in production, pretty logs elsewhere
    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting BeMyGuest API server"
    );

    if let Err(e) = bmg_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
