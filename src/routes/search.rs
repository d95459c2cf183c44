use axum::{
    Router,
    routing::get,
    Json,
    extract::{Query, State},
    response::Json as ResponseJson,
};
use crate::models::{AppState, SearchParams, SearchRequest, SearchResponse};
use crate::render::markdown_to_html;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(get_search).post(post_search))
        .with_state(state)
}

async fn get_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ResponseJson<SearchResponse> {
    Json(run_search(&state, &params.q).await)
}

pub async fn post_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ResponseJson<SearchResponse> {
    Json(run_search(&state, &request.query).await)
}

async fn run_search(state: &AppState, query: &str) -> SearchResponse {
    info!(query = %query, "Received search request");

    let markdown = state.handler.respond(query).await;
    let html = markdown_to_html(&markdown);

    SearchResponse { markdown, html }
}
