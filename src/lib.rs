//! News Query Service Library
//!
//! This crate provides a demonstration news query service that exposes an
//! OpenAPI-backed HTTP API and serves hardcoded, in-memory sample articles.
//! The service is stateless - every response is constructed fresh per request
//! and nothing is persisted.

pub mod api;
pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::{ArticleCatalog, Category, ListQuery, NewsArticle};
pub use config::{ApiConfig, CatalogConfig, Config};
