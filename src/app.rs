use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/scheduler", get(handlers::scheduler_page).post(handlers::scheduler_submit))
        .route("/scheduler/:id/delete", post(handlers::scheduler_delete))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/schedule", get(handlers::list_posts).post(handlers::create_post))
        .route("/api/schedule/:id", delete(handlers::delete_post))
        .with_state(state)
}
