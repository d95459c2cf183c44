// arXiv Scout - topic search over the arXiv paper index

pub mod config;
pub mod models;
pub mod search;    // Paper search capability (arXiv backend)
pub mod handler;   // Query -> Markdown
pub mod render;
pub mod routes;
pub mod server;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use handler::QueryHandler;
pub use models::AppState;
pub use server::Server;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
