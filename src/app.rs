use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route("/api/todos/:id", delete(handlers::delete_todo))
        .route("/api/todos/:id/toggle", post(handlers::toggle_todo))
        .with_state(state)
}
