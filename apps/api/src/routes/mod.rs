pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::opening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .route("/api/grade", post(handlers::handle_grade))
        .with_state(state)
}
