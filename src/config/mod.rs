//! Configuration Management Module
//!
//! This module handles loading and managing configuration for the news
//! service. Configuration includes API server settings and the sample values
//! used when constructing catalog articles.

use serde::{Deserialize, Serialize};

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Main configuration structure containing all service settings.
///
/// This structure holds configuration for:
/// - API server settings (host, port, CORS)
/// - Catalog sample values (author, content, source URL)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration (host, port, CORS settings)
    pub api: ApiConfig,
    /// Catalog configuration (sample values for constructed articles)
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// API server configuration for external communication.
///
/// Controls how the news service exposes its REST API endpoints
/// and handles cross-origin requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host address to bind the API server to
    pub host: String,
    /// Port number to bind the API server to
    pub port: u16,
    /// Allowed CORS origins for cross-origin requests
    pub cors_origins: Vec<String>,
}

/// Catalog configuration for the sample article values.
///
/// The catalog constructs every article fresh per request; these values fill
/// the fields that are the same across all sample articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Author attributed to every sample article
    #[serde(default = "default_author")]
    pub author: String,
    /// Body text of every sample article
    #[serde(default = "default_content")]
    pub content: String,
    /// Origin URL attributed to every sample article
    #[serde(default = "default_source_url")]
    pub source_url: String,
}

fn default_author() -> String {
    "Author".to_string()
}

fn default_content() -> String {
    "Content".to_string()
}

fn default_source_url() -> String {
    "http://example.com".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            content: default_content(),
            source_url: default_source_url(),
        }
    }
}

// ============================================================================
// CONFIGURATION LOADING AND MANAGEMENT
// ============================================================================

impl Config {
    /// Validates the configuration.
    ///
    /// This function ensures that:
    /// - The API port is non-zero
    /// - At least one CORS origin is configured
    /// - The catalog source URL parses as a URL
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Configuration is valid
    /// - `Err(anyhow::Error)` - Configuration is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.port == 0 {
            return Err(anyhow::anyhow!(
                "Configuration error: api.port must be non-zero"
            ));
        }

        if self.api.cors_origins.is_empty() {
            return Err(anyhow::anyhow!(
                "Configuration error: api.cors_origins must list at least one origin (use \"*\" to allow any)"
            ));
        }

        url::Url::parse(&self.catalog.source_url).map_err(|e| {
            anyhow::anyhow!(
                "Configuration error: catalog.source_url '{}' is not a valid URL: {}",
                self.catalog.source_url,
                e
            )
        })?;

        Ok(())
    }

    /// Loads configuration from the TOML file.
    ///
    /// This function:
    /// 1. Checks if config/news.toml exists (or the NEWS_CONFIG_PATH override)
    /// 2. If it exists, loads and parses the configuration
    /// 3. Validates the configuration
    /// 4. If it doesn't exist, returns an error asking user to copy template
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` - Successfully loaded and validated configuration
    /// - `Err(anyhow::Error)` - Failed to load configuration, file doesn't exist, or validation failed
    pub fn load() -> anyhow::Result<Self> {
        // Check for custom config path via environment variable (for tests)
        let config_path = std::env::var("NEWS_CONFIG_PATH")
            .unwrap_or_else(|_| "config/news.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            // Load existing configuration
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            // Validate configuration
            config.validate()?;
            Ok(config)
        } else {
            // Configuration file doesn't exist - user needs to copy template
            Err(anyhow::anyhow!(
                "Configuration file '{}' not found. Please copy the template:\n\
                cp config/news.template.toml config/news.toml\n\
                Then edit config/news.toml with your actual values.",
                config_path
            ))
        }
    }

    /// Creates a default configuration with local development values.
    ///
    /// This configuration is suitable for local development and testing.
    pub fn default() -> Self {
        Self {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 3333,
                cors_origins: vec!["*".to_string()],
            },
            catalog: CatalogConfig::default(),
        }
    }
}
