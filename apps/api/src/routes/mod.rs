pub mod health;
pub mod normalize;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/normalize", post(normalize::handle_normalize))
        .with_state(state)
}
