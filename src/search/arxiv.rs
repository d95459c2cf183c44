//! arXiv API Client
//!
//! Queries the public arXiv export API and turns its Atom feed into
//! [`SearchResult`]s.
//!
//! ## Request shape
//!
//! `GET {api_url}?search_query=..&start=0&max_results=..&sortBy=..&sortOrder=descending`
//!
//! ## Error reporting
//!
//! arXiv reports bad queries as a feed holding a single entry whose `<id>`
//! points at `arxiv.org/api/errors`, usually alongside HTTP 400. That entry's
//! summary is surfaced as [`SearchError::Api`].

use super::{PaperSearch, SearchError, SearchQuery, SearchResult};
use crate::config::SearchConfig;
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const ERROR_ID_MARKER: &str = "arxiv.org/api/errors";

/// Parsed Atom feed
#[derive(Debug, Default)]
struct ArxivFeed {
    total_results: Option<u64>,
    entries: Vec<ArxivEntry>,
}

#[derive(Debug, Default)]
struct ArxivEntry {
    id: String,
    title: String,
    summary: String,
}

impl ArxivEntry {
    fn is_error(&self) -> bool {
        self.id.contains(ERROR_ID_MARKER)
    }

    fn into_result(self) -> SearchResult {
        SearchResult {
            title: collapse_whitespace(&self.title),
            summary: self.summary.trim().to_string(),
            id: self.id.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Id,
    Title,
    Summary,
    TotalResults,
}

/// arXiv client for paper search
pub struct ArxivClient {
    client: Client,
    api_url: String,
}

impl ArxivClient {
    /// Create a client against `api_url` with the default timeout
    pub fn new(api_url: impl Into<String>) -> Result<Self, SearchError> {
        Self::from_config(&SearchConfig {
            api_url: api_url.into(),
            ..SearchConfig::default()
        })
    }

    /// Configure client from config
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<ArxivFeed, SearchError> {
        let max_results = query.max_results.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("search_query", query.query.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
                ("sortBy", query.sort_by.as_str()),
                ("sortOrder", "descending"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "Raw arXiv response received");

        // Error feeds arrive with a 4xx status, so look for one before
        // falling back to the bare status code.
        match parse_feed(&body) {
            Ok(feed) => {
                if let Some(error) = feed.entries.iter().find(|e| e.is_error()) {
                    return Err(SearchError::Api(error.summary.trim().to_string()));
                }
                if !status.is_success() {
                    return Err(SearchError::Status(status));
                }
                Ok(feed)
            }
            Err(_) if !status.is_success() => Err(SearchError::Status(status)),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl PaperSearch for ArxivClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, SearchError> {
        info!(query = %query.query, sort_by = %query.sort_by, "Searching arXiv");

        let feed = self.fetch(query).await?;
        if let Some(total) = feed.total_results {
            debug!(total, "arXiv reported total matches");
        }

        let results: Vec<SearchResult> = feed
            .entries
            .into_iter()
            .take(query.max_results)
            .map(ArxivEntry::into_result)
            .collect();

        if results.is_empty() {
            warn!(query = %query.query, "arXiv search returned no entries");
        }
        info!(count = results.len(), "arXiv search completed");
        Ok(results)
    }
}

/// Parse an arXiv Atom feed
fn parse_feed(xml: &str) -> Result<ArxivFeed, SearchError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut feed = ArxivFeed::default();
    let mut saw_feed = false;
    let mut entry: Option<ArxivEntry> = None;
    let mut field: Option<Field> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                field = match (name.as_ref(), entry.is_some()) {
                    (b"feed", _) => {
                        saw_feed = true;
                        None
                    }
                    (b"entry", _) => {
                        entry = Some(ArxivEntry::default());
                        None
                    }
                    (b"id", true) => Some(Field::Id),
                    (b"title", true) => Some(Field::Title),
                    (b"summary", true) => Some(Field::Summary),
                    (b"totalResults", false) => Some(Field::TotalResults),
                    _ => None,
                };
                text.clear();
            }
            Ok(Event::Text(t)) if field.is_some() => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| SearchError::Parse(e.to_string()))?;
                text.push_str(&unescaped);
            }
            Ok(Event::CData(c)) if field.is_some() => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"entry" {
                    if let Some(done) = entry.take() {
                        feed.entries.push(done);
                    }
                } else if let Some(current) = field.take() {
                    let value = std::mem::take(&mut text);
                    match (current, entry.as_mut()) {
                        (Field::Id, Some(entry)) => entry.id = value,
                        (Field::Title, Some(entry)) => entry.title = value,
                        (Field::Summary, Some(entry)) => entry.summary = value,
                        (Field::TotalResults, _) => feed.total_results = value.trim().parse().ok(),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(SearchError::Parse(e.to_string())),
        }
    }

    if !saw_feed {
        return Err(SearchError::Parse("response is not an Atom feed".to_string()));
    }
    if entry.is_some() {
        return Err(SearchError::Parse("unterminated <entry> element".to_string()));
    }

    Ok(feed)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
