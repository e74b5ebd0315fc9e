//! Router builders.

mod common;
mod todos;

pub use common::common_routes;
pub use todos::todo_routes;

use crate::state::AppState;
use axum::Router;

/// Full application router: common routes plus todo CRUD.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(todo_routes(state))
}
