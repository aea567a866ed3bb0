//! Generic API structures and server
//!
//! This module contains the shared response envelope, rejection handling,
//! CORS configuration, and the API server itself. The news service API is
//! read-only: every route constructs its response from in-memory sample data.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use warp::{http::{Method, StatusCode}, Filter, Rejection, Reply};

use crate::catalog::ArticleCatalog;
use crate::config::Config;

// ============================================================================
// SHARED RESPONSE STRUCTURES
// ============================================================================

/// Standardized response structure for service-level endpoints and errors.
///
/// The news resource endpoints return the bare contract shapes (a JSON array
/// or object of articles); this envelope is used by the health endpoint and
/// by the rejection handler for error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    pub data: Option<T>,
    /// Error message (if failed)
    pub error: Option<String>,
}

// ============================================================================
// CORS CONFIGURATION
// ============================================================================

/// Creates a CORS filter based on the configured allowed origins.
fn create_cors_filter(allowed_origins: &[String]) -> warp::cors::Builder {
    let methods = vec![Method::GET, Method::OPTIONS];

    if allowed_origins.contains(&"*".to_string()) {
        warp::cors()
            .allow_any_origin()
            .allow_methods(methods.clone())
            .allow_headers(vec!["content-type"])
    } else {
        let origins: Vec<&str> = allowed_origins.iter().map(|s| s.as_str()).collect();
        warp::cors()
            .allow_origins(origins)
            .allow_methods(methods)
            .allow_headers(vec!["content-type"])
    }
}

// ============================================================================
// REJECTION HANDLER
// ============================================================================

/// Global rejection handler for all API routes.
///
/// This function handles all warp rejections and converts them into
/// standardized API responses with appropriate HTTP status codes. Malformed
/// query parameters (unknown category, unparseable date, non-integer
/// limit/offset) surface here as `InvalidQuery` rejections from the
/// framework's type coercion.
///
/// # Arguments
///
/// * `rej` - The warp rejection to handle
///
/// # Returns
///
/// A warp reply with an error response
pub async fn handle_rejection(rej: Rejection) -> Result<impl Reply, std::convert::Infallible> {
    let (status, message) = if let Some(err) = rej.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, format!("Invalid query parameters: {}", err))
    } else if rej.is_not_found() {
        (StatusCode::NOT_FOUND, "Endpoint not found".to_string())
    } else if rej.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        error!("Unhandled rejection: {:?}", rej);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(message),
        }),
        status,
    ))
}

// ============================================================================
// API SERVER IMPLEMENTATION
// ============================================================================

/// REST API server for the news service.
///
/// This server exposes the news resource endpoints and a health check. All
/// state it carries is immutable and shared by `Arc`: concurrent requests
/// are fully independent and require no coordination.
pub struct ApiServer {
    /// Service configuration
    config: Arc<Config>,
    /// Article catalog backing the news endpoints
    catalog: Arc<ArticleCatalog>,
}

impl ApiServer {
    /// Creates a new API server with the given components.
    ///
    /// # Arguments
    ///
    /// * `config` - Service configuration
    /// * `catalog` - Article catalog instance
    ///
    /// # Returns
    ///
    /// A new API server instance
    pub fn new(config: Config, catalog: ArticleCatalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    /// Starts the API server and begins handling HTTP requests.
    ///
    /// This function configures all API routes and starts the HTTP server
    /// on the configured host and port.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Server ran to completion
    /// * `Err(anyhow::Error)` - Failed to start server
    pub async fn run(&self) -> Result<()> {
        info!(
            "Starting API server on {}:{}",
            self.config.api.host, self.config.api.port
        );

        // Create and configure all API routes
        let routes = self.create_routes();

        // Parse host address from config
        let addr: std::net::SocketAddr = format!("{}:{}", self.config.api.host, self.config.api.port)
            .parse()
            .context("Failed to parse API server address")?;

        // Start the HTTP server
        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Creates all API routes for the server.
    ///
    /// This function builds the explicit route-to-handler registration table:
    /// the health check plus the two news resource endpoints, combined with
    /// CORS and the global rejection handler.
    ///
    /// # Returns
    ///
    /// A warp filter containing all API routes
    pub(crate) fn create_routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        use super::news;

        let catalog = self.catalog.clone();

        // Health check endpoint - returns service status
        let health = warp::path("health").and(warp::get()).map(|| {
            warp::reply::json(&ApiResponse::<String> {
                success: true,
                data: Some("News Service is running".to_string()),
                error: None,
            })
        });

        // GET /news - list the sample articles (query parameters accepted
        // and type-coerced, not applied)
        let list_news = warp::path("news")
            .and(warp::path::end()) // Exact match - don't match /news/:id
            .and(warp::get())
            .and(warp::query::<crate::catalog::ListQuery>())
            .and(news::with_catalog(catalog.clone()))
            .and_then(news::list_news_handler);

        // GET /news/:id - get a single article by identifier
        let get_news = warp::path("news")
            .and(warp::path::param())
            .and(warp::path::end())
            .and(warp::get())
            .and(news::with_catalog(catalog))
            .and_then(news::get_news_handler);

        // Combine all routes and apply rejection handler
        health
            .or(list_news)
            .or(get_news)
            .with(create_cors_filter(&self.config.api.cors_origins))
            .recover(handle_rejection)
    }

    /// Public method for testing - exposes routes for integration tests
    #[allow(dead_code)] // Used by tests
    pub fn test_routes(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        self.create_routes()
    }
}
