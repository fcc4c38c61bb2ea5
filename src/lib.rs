pub mod appresult;
pub mod health;
pub mod rooms;
pub mod store;

use std::sync::Arc;

use axum::{extract::FromRef, routing::get, Router};
use tower_http::cors::CorsLayer;

pub use appresult::{AppError, AppResult};
use store::ChatState;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub chat: Arc<ChatState>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .merge(rooms::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
}
