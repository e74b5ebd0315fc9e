//! Todo CRUD routes.

use crate::handlers::todos::{create, delete as delete_todo, list, read, stats, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list).post(create))
        .route("/todos/stats/summary", get(stats))
        .route("/todos/:id", get(read).put(update).delete(delete_todo))
        .with_state(state)
}
