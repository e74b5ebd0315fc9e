//! Todo handlers: list, read, create, update, delete, stats.

use crate::error::AppError;
use crate::model::{CreateTodo, ListParams, Priority, Todo, TodoStats, UpdateTodo};
use crate::service::{validate_create, validate_update, TodoService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let priority: Option<Priority> = params.priority.as_deref().map(str::parse).transpose()?;
    let todos = TodoService::list(
        &state.pool,
        params.completed,
        priority,
        params.skip,
        params.limit,
    )
    .await?;
    Ok(Json(todos))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::get(&state.pool, id).await?;
    Ok(Json(todo))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTodo>,
) -> Result<Json<Todo>, AppError> {
    let new = validate_create(body)?;
    let todo = TodoService::create(&state.pool, new).await?;
    Ok(Json(todo))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    let patch = validate_update(body)?;
    let todo = TodoService::update(&state.pool, id, patch).await?;
    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    TodoService::delete(&state.pool, id).await?;
    Ok(Json(json!({ "message": "todo deleted" })))
}

pub async fn stats(State(state): State<AppState>) -> Result<Json<TodoStats>, AppError> {
    let stats = TodoService::stats(&state.pool).await?;
    Ok(Json(stats))
}
