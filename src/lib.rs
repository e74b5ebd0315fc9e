//! Todo API: CRUD REST service over a single SQLite table.

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use error::AppError;
pub use model::{CreateTodo, ListParams, Priority, Todo, TodoStats, UpdateTodo};
pub use routes::{app_router, common_routes, todo_routes};
pub use service::TodoService;
pub use state::AppState;
pub use store::{connect, ensure_schema};
