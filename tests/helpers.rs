//! Shared test helpers for unit tests
//!
//! This module provides helper functions and constants used by unit tests:
//! - **Configuration Builders**: Functions to create test configurations
//! - **Sample Value Constants**: The shared field values of sample articles

use news_service::config::{ApiConfig, CatalogConfig, Config};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Author attributed to every sample article in the default configuration
#[allow(dead_code)]
pub const SAMPLE_AUTHOR: &str = "Author";

/// Body text of every sample article in the default configuration
#[allow(dead_code)]
pub const SAMPLE_CONTENT: &str = "Content";

/// Origin URL of every sample article in the default configuration
#[allow(dead_code)]
pub const SAMPLE_SOURCE_URL: &str = "http://example.com";

/// Tags attached to every sample article
#[allow(dead_code)]
pub const SAMPLE_TAGS: [&str; 2] = ["Tag1", "Tag2"];

// ============================================================================
// CONFIGURATION BUILDERS
// ============================================================================

/// Builds a minimal test configuration bound to localhost.
pub fn build_test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 3333,
            cors_origins: vec!["*".to_string()],
        },
        catalog: CatalogConfig::default(),
    }
}
