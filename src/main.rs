//! News Query Service
//!
//! A demonstration service exposing an OpenAPI-backed news API with
//! hardcoded, in-memory sample data.
//!
//! ## Overview
//!
//! The service:
//! 1. Loads configuration from a TOML file
//! 2. Builds the in-memory article catalog
//! 3. Serves the news resource endpoints and a health check over HTTP
//!
//! There is no persistence and no shared mutable state: each request is
//! independent and responses are constructed fresh per request.

use anyhow::Result;
use tracing::info;

mod api;
mod catalog;
mod config;

use config::Config;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

/// Main application entry point that initializes and runs the news service.
///
/// This function:
/// 1. Initializes logging and tracing
/// 2. Loads configuration from TOML file
/// 3. Builds the article catalog
/// 4. Starts the API server
/// 5. Runs the service until shutdown
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging for debugging and monitoring
    tracing_subscriber::fmt::init();

    info!("Starting News Service");

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for help flag
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("News Service");
        println!();
        println!("Usage: news-service [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --config <path>   Use custom config file path");
        println!("  --help, -h        Show this help message");
        println!();
        println!("Environment variables:");
        println!("  NEWS_CONFIG_PATH    Path to config file (overrides --config)");
        return Ok(());
    }

    // Check for custom config path
    let mut config_path = None;
    for (i, arg) in args.iter().enumerate() {
        if arg == "--config" && i + 1 < args.len() {
            config_path = Some(args[i + 1].clone());
            break;
        }
    }

    if let Some(path) = config_path {
        std::env::set_var("NEWS_CONFIG_PATH", &path);
        info!("Using custom config: {}", path);
    }

    // Load configuration from config file (or NEWS_CONFIG_PATH env var)
    let config = Config::load()?;
    info!("Configuration loaded successfully");

    // Build the in-memory article catalog
    let article_catalog = catalog::ArticleCatalog::new(&config);

    // Start the REST API server (this blocks until shutdown)
    let api_server = api::ApiServer::new(config, article_catalog);
    api_server.run().await?;

    Ok(())
}
