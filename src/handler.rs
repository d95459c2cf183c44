//! Query Handler
//!
//! Maps a free-text query to the Markdown shown in the results panel. The
//! search itself yields a tagged [`Outcome`]; [`QueryHandler::respond`]
//! collapses that (or any error) into the single string the user sees.

use crate::search::{PaperSearch, SearchError, SearchQuery, SearchResult, SortCriterion};
use std::sync::Arc;
use tracing::{error, info};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a research topic or keywords to search for.";
pub const SEARCH_FAILED_MESSAGE: &str =
    "Sorry, an error occurred while searching arXiv. Please try again later.";
pub const RESULT_SEPARATOR: &str = "\n\n---\n\n";
/// Papers shown per query
pub const MAX_RESULTS: usize = 5;

/// Terminal states of a query that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    EmptyQuery,
    NoResults,
    Papers(Vec<SearchResult>),
}

pub struct QueryHandler {
    search: Arc<dyn PaperSearch>,
}

impl QueryHandler {
    pub fn new(search: Arc<dyn PaperSearch>) -> Self {
        Self { search }
    }

    /// Run the query and classify what came back
    pub async fn search(&self, q: &str) -> Result<Outcome, SearchError> {
        let trimmed = q.trim();
        if trimmed.is_empty() {
            return Ok(Outcome::EmptyQuery);
        }

        let query = SearchQuery::new(trimmed)
            .with_max_results(MAX_RESULTS)
            .with_sort(SortCriterion::Relevance);
        let mut papers = self.search.search(&query).await?;
        papers.truncate(MAX_RESULTS);

        if papers.is_empty() {
            Ok(Outcome::NoResults)
        } else {
            Ok(Outcome::Papers(papers))
        }
    }

    /// Answer a query with display-ready Markdown. Never fails.
    pub async fn respond(&self, q: &str) -> String {
        match self.search(q).await {
            Ok(Outcome::EmptyQuery) => EMPTY_QUERY_MESSAGE.to_string(),
            Ok(Outcome::NoResults) => no_results_message(q),
            Ok(Outcome::Papers(papers)) => {
                info!(query = %q.trim(), count = papers.len(), "Rendering search results");
                format_results(&papers)
            }
            Err(e) => {
                error!(query = %q.trim(), error = %e, "arXiv search failed");
                SEARCH_FAILED_MESSAGE.to_string()
            }
        }
    }
}

pub fn no_results_message(q: &str) -> String {
    format!("No papers found for '{q}'. Please try a different query or broader keywords.")
}

pub fn format_paper(paper: &SearchResult) -> String {
    format!("**{}**\n\n{}\n\n🔗 {}", paper.title, paper.summary, paper.id)
}

pub fn format_results(papers: &[SearchResult]) -> String {
    papers
        .iter()
        .map(format_paper)
        .collect::<Vec<_>>()
        .join(RESULT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::stub::{paper, StubSearch};

    fn handler(stub: &StubSearch) -> QueryHandler {
        QueryHandler::new(Arc::new(stub.clone()))
    }

    #[tokio::test]
    async fn test_blank_queries_skip_search() {
        let stub = StubSearch::returning(vec![paper("A", "a", "id-a")]);
        let handler = handler(&stub);

        for q in ["", "   ", "\t\n", " \r\n "] {
            assert_eq!(handler.respond(q).await, EMPTY_QUERY_MESSAGE);
        }
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_two_results_exact_output() {
        let stub = StubSearch::returning(vec![
            paper("A", "summary-A", "id-A"),
            paper("B", "summary-B", "id-B"),
        ]);
        let output = handler(&stub).respond("quantum computing").await;

        assert_eq!(
            output,
            "**A**\n\nsummary-A\n\n🔗 id-A\n\n---\n\n**B**\n\nsummary-B\n\n🔗 id-B"
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_search_uses_fixed_parameters() {
        let stub = StubSearch::returning(vec![paper("A", "a", "id-a")]);
        handler(&stub).respond("  graph neural networks  ").await;

        let query = stub.last_query().unwrap();
        assert_eq!(query.query, "graph neural networks");
        assert_eq!(query.max_results, 5);
        assert_eq!(query.sort_by, SortCriterion::Relevance);
    }

    #[tokio::test]
    async fn test_block_and_separator_counts() {
        for n in 1..=5 {
            let papers: Vec<_> = (0..n)
                .map(|i| paper(&format!("T{i}"), &format!("S{i}"), &format!("I{i}")))
                .collect();
            let stub = StubSearch::returning(papers);
            let output = handler(&stub).respond("topic").await;

            let blocks: Vec<&str> = output.split(RESULT_SEPARATOR).collect();
            assert_eq!(blocks.len(), n);
            assert_eq!(output.matches(RESULT_SEPARATOR).count(), n - 1);
            for (i, block) in blocks.iter().enumerate() {
                let title = block.find(&format!("**T{i}**")).unwrap();
                let summary = block.find(&format!("S{i}")).unwrap();
                let locator = block.find(&format!("🔗 I{i}")).unwrap();
                assert!(title < summary && summary < locator);
            }
        }
    }

    #[tokio::test]
    async fn test_extra_results_are_dropped() {
        let papers: Vec<_> = (0..8).map(|i| paper(&format!("T{i}"), "s", "i")).collect();
        let stub = StubSearch::returning(papers);

        match handler(&stub).search("topic").await.unwrap() {
            Outcome::Papers(papers) => assert_eq!(papers.len(), 5),
            other => panic!("expected papers, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_results_mentions_query() {
        let stub = StubSearch::returning(vec![]);
        let output = handler(&stub).respond("obscure topic xyz").await;

        assert_eq!(
            output,
            "No papers found for 'obscure topic xyz'. Please try a different query or broader keywords."
        );
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_collapses_to_generic_message() {
        let stub = StubSearch::failing("connection reset by peer");
        let handler = handler(&stub);

        assert!(matches!(handler.search("quantum").await, Err(SearchError::Api(_))));
        let output = handler.respond("quantum").await;
        assert_eq!(output, SEARCH_FAILED_MESSAGE);
        assert!(!output.contains("connection reset"));
    }

    #[test]
    fn test_format_paper() {
        let block = format_paper(&paper("Title", "Body", "http://arxiv.org/abs/1706.03762v7"));
        assert_eq!(block, "**Title**\n\nBody\n\n🔗 http://arxiv.org/abs/1706.03762v7");
    }
}
