//! Article Catalog Module
//!
//! This module defines the news article model and the in-memory catalog that
//! backs the API handlers. The catalog holds no stored articles: every
//! response is constructed fresh from configured sample values and discarded
//! after serialization.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CatalogConfig, Config};

// ============================================================================
// MODEL TYPES
// ============================================================================

/// Closed set of article categories.
///
/// Wire form is lowercase (e.g. `"politics"`), matching the published API
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Business,
    Technology,
    Sports,
    Science,
    Health,
    Entertainment,
    World,
}

/// A single news article as exposed by the API.
///
/// Field names serialize in camelCase per the API contract. Instances are
/// built per request and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Unique article identifier
    pub id: i64,
    /// Article headline
    pub title: String,
    /// Article body text
    pub content: String,
    /// Publication timestamp with UTC offset
    pub publication_date: DateTime<FixedOffset>,
    /// Author attribution
    pub author: String,
    /// Article category (closed enumeration)
    pub category: Category,
    /// Ordered article tags
    pub tags: Vec<String>,
    /// URL of the article's origin
    pub source_url: String,
}

/// Query parameters accepted by the list operation.
///
/// All parameters are optional and type-coerced by the framework; the catalog
/// accepts them but does not apply them (see [`ArticleCatalog::list`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Category filter
    pub category: Option<Category>,
    /// Publication date filter (ISO 8601 calendar date)
    pub publication_date: Option<NaiveDate>,
    /// Maximum number of articles to return
    pub limit: Option<u32>,
    /// Number of articles to skip
    pub offset: Option<u32>,
}

impl ListQuery {
    /// Returns true when any filter or pagination parameter was supplied.
    fn has_parameters(&self) -> bool {
        self.category.is_some()
            || self.publication_date.is_some()
            || self.limit.is_some()
            || self.offset.is_some()
    }
}

// ============================================================================
// ARTICLE CATALOG
// ============================================================================

/// In-memory catalog backing the news API.
///
/// The catalog is the stateless handler backing store: it synthesizes a fixed
/// sample set on demand from configured values. There is no persistence and
/// no shared mutable state, so a single instance can be shared across
/// concurrent requests without coordination.
#[derive(Debug, Clone)]
pub struct ArticleCatalog {
    /// Sample values shared by every constructed article
    config: CatalogConfig,
}

impl ArticleCatalog {
    /// Creates a new catalog from the service configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.catalog.clone(),
        }
    }

    /// Returns the fixed sample article set.
    ///
    /// Query parameters are accepted and type-coerced upstream but not
    /// applied: the catalog always returns the full two-article sample set
    /// so that every valid parameter combination yields a non-empty result.
    pub fn list(&self, query: &ListQuery) -> Vec<NewsArticle> {
        if query.has_parameters() {
            debug!(
                ?query,
                "List parameters received but not applied; returning full sample set"
            );
        }

        vec![
            self.build_article(1, "Test 1".to_string()),
            self.build_article(2, "Test 2".to_string()),
        ]
    }

    /// Returns a synthetic article for the requested identifier.
    ///
    /// Any identifier yields an article; there is no not-found case. The
    /// returned article's `id` echoes the request and its title embeds the
    /// identifier.
    pub fn get(&self, id: i64) -> NewsArticle {
        self.build_article(id, format!("Test - {}", id))
    }

    /// Constructs a sample article with the configured shared field values.
    fn build_article(&self, id: i64, title: String) -> NewsArticle {
        NewsArticle {
            id,
            title,
            content: self.config.content.clone(),
            publication_date: Utc::now().fixed_offset(),
            author: self.config.author.clone(),
            category: Category::Politics,
            tags: vec!["Tag1".to_string(), "Tag2".to_string()],
            source_url: self.config.source_url.clone(),
        }
    }
}
