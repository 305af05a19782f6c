use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/channels", get(handlers::get_channels))
        .route("/api/days", get(handlers::get_days))
        .route("/api/days/:date", get(handlers::get_day))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/toggle", post(handlers::post_toggle))
        .route("/api/reset", post(handlers::post_reset))
        .route("/api/export", get(handlers::get_export))
        .with_state(state)
}
