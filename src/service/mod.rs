//! TodoService: query execution, plus boundary validation of payloads.

mod todos;
mod validation;
pub use todos::TodoService;
pub use validation::{validate_create, validate_update};
