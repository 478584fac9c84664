//! Catalog API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p catalog-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use catalog_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
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

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        error_style = ?config.api.error_style,
        upload_naming = ?config.storage.naming,
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = catalog_api::run(config).await {
        error!(error = %e, code = e.error_code(), "Server stopped");
        std::process::exit(1);
    }
}
