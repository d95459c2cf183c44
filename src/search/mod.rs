//! Search Module
//!
//! Provides academic paper search behind the [`PaperSearch`] capability:
//! - arXiv (the only backend) - public Atom API, no key required
//!
//! The query handler only sees the trait; tests plug in `stub::StubSearch`.

pub mod arxiv;

#[cfg(test)]
pub mod stub;

pub use arxiv::ArxivClient;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse search results: {0}")]
    Parse(String),

    #[error("Search service reported an error: {0}")]
    Api(String),
}

/// One paper returned by the search service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Title of the paper
    pub title: String,
    /// Abstract text
    pub summary: String,
    /// Stable locator for the paper (the arXiv abs URL)
    pub id: String,
}

/// Ordering requested from the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    Relevance,
    LastUpdatedDate,
    SubmittedDate,
}

impl SortCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Relevance => "relevance",
            SortCriterion::LastUpdatedDate => "lastUpdatedDate",
            SortCriterion::SubmittedDate => "submittedDate",
        }
    }
}

impl std::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub max_results: usize,
    pub sort_by: SortCriterion,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 5,
            sort_by: SortCriterion::Relevance,
        }
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_sort(mut self, sort_by: SortCriterion) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[async_trait]
pub trait PaperSearch: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchError>;
}
