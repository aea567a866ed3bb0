//! REST API Server Module
//!
//! This module provides the REST API server for the news service, exposing
//! the news resource endpoints and a health check. Handlers are stateless
//! and read-only; shared plumbing (response envelope, rejection handling,
//! CORS) lives in `generic`, the news resource handlers in `news`.

// Generic shared code (server, health, rejection handling, CORS)
mod generic;

// News resource module (list and get-by-id handlers)
mod news;

// Re-export ApiServer for convenience
pub use generic::ApiServer;
// Re-export ApiResponse for testing
#[allow(unused_imports)]
pub use generic::ApiResponse;
