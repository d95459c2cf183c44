//! In-memory search backend for tests.

use super::{PaperSearch, SearchError, SearchQuery, SearchResult};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

enum Reply {
    Papers(Vec<SearchResult>),
    Fail(String),
}

/// Answers every query with the same canned reply and counts the calls.
#[derive(Clone)]
pub struct StubSearch {
    reply: Arc<Reply>,
    calls: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<SearchQuery>>>,
}

impl StubSearch {
    pub fn returning(papers: Vec<SearchResult>) -> Self {
        Self::with_reply(Reply::Papers(papers))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_string()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply: Arc::new(reply),
            calls: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<SearchQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaperSearch for StubSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        match self.reply.as_ref() {
            Reply::Papers(papers) => Ok(papers.clone()),
            Reply::Fail(message) => Err(SearchError::Api(message.clone())),
        }
    }
}

pub fn paper(title: &str, summary: &str, id: &str) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        summary: summary.to_string(),
        id: id.to_string(),
    }
}
