//! News resource handlers
//!
//! Handlers for the news resource endpoints. Both operations are infallible:
//! every request that passes the framework's type coercion yields HTTP 200
//! with freshly constructed sample data.

use std::convert::Infallible;
use std::sync::Arc;
use tracing::debug;
use warp::Filter;

use crate::catalog::{ArticleCatalog, ListQuery};

/// Handler for the list articles endpoint.
///
/// Returns the catalog's fixed sample set as a bare JSON array, matching the
/// published contract. Filter and pagination parameters are accepted but not
/// applied.
///
/// # Arguments
///
/// * `query` - Type-coerced query parameters
/// * `catalog` - The article catalog instance
///
/// # Returns
///
/// * `Ok(warp::Reply)` - JSON array of articles
pub async fn list_news_handler(
    query: ListQuery,
    catalog: Arc<ArticleCatalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    debug!(?query, "GET /news");

    let articles = catalog.list(&query);
    Ok(warp::reply::json(&articles))
}

/// Handler for the get article by id endpoint.
///
/// Returns a synthetic article for any integer identifier as a bare JSON
/// object. There is no not-found case.
///
/// # Arguments
///
/// * `id` - Requested article identifier
/// * `catalog` - The article catalog instance
///
/// # Returns
///
/// * `Ok(warp::Reply)` - JSON article
pub async fn get_news_handler(
    id: i64,
    catalog: Arc<ArticleCatalog>,
) -> Result<impl warp::Reply, warp::Rejection> {
    debug!(id, "GET /news/:id");

    let article = catalog.get(id);
    Ok(warp::reply::json(&article))
}

/// Creates a warp filter that provides access to the article catalog.
///
/// This helper function creates a filter that injects the catalog into
/// request handlers.
///
/// # Arguments
///
/// * `catalog` - The article catalog instance
///
/// # Returns
///
/// A warp filter that provides the catalog to handlers
pub fn with_catalog(
    catalog: Arc<ArticleCatalog>,
) -> impl Filter<Extract = (Arc<ArticleCatalog>,), Error = Infallible> + Clone {
    warp::any().map(move || catalog.clone())
}
