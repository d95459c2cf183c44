use std::sync::Arc;
use crate::config::Config;
use crate::handler::QueryHandler;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub handler: Arc<QueryHandler>,
}

impl AppState {
    pub fn new(config: Config, handler: QueryHandler) -> Self {
        Self {
            config,
            handler: Arc::new(handler),
        }
    }
}

// Request/response payloads for the HTTP API

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
    pub markdown: String,
    pub html: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// arXiv endpoint queries are forwarded to
    pub upstream: String,
    pub upstream_timeout_secs: u64,
}
