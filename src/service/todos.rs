//! Todo query and mutation execution against SQLite.
//!
//! Reads run directly against the pool. Every mutation runs inside its own
//! transaction: commit on success, rollback on drop for all error paths.

use crate::error::AppError;
use crate::model::{NewTodo, Priority, Todo, TodoPatch, TodoStats};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const SELECT_COLUMNS: &str =
    "id, title, description, completed, priority, created_at, updated_at";

pub struct TodoService;

impl TodoService {
    const DEFAULT_LIMIT: i64 = 100;
    const MAX_LIMIT: i64 = 1000;

    /// List rows with optional equality filters, newest first,
    /// offset `skip` (default 0), `limit` (default 100, max 1000).
    pub async fn list(
        pool: &SqlitePool,
        completed: Option<bool>,
        priority: Option<Priority>,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Todo>, AppError> {
        let limit = limit.unwrap_or(Self::DEFAULT_LIMIT).clamp(0, Self::MAX_LIMIT);
        let skip = skip.unwrap_or(0).max(0);

        let mut q: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {SELECT_COLUMNS} FROM todos"));
        let mut sep = " WHERE ";
        if let Some(completed) = completed {
            q.push(sep).push("completed = ").push_bind(completed);
            sep = " AND ";
        }
        if let Some(priority) = priority {
            q.push(sep).push("priority = ").push_bind(priority);
        }
        // id breaks created_at ties so same-instant inserts stay newest-first.
        q.push(" ORDER BY created_at DESC, id DESC");
        q.push(" LIMIT ").push_bind(limit);
        q.push(" OFFSET ").push_bind(skip);

        tracing::debug!(sql = %q.sql(), "list todos");
        let rows = q.build_query_as::<Todo>().fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by id.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Todo, AppError> {
        sqlx::query_as::<_, Todo>(&format!(
            "SELECT {SELECT_COLUMNS} FROM todos WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("todo {id}")))
    }

    /// Insert a validated row with store-assigned id and timestamps.
    pub async fn create(pool: &SqlitePool, new: NewTodo) -> Result<Todo, AppError> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;
        tracing::debug!(title = %new.title, "create todo");
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (title, description, completed, priority, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(false)
        .bind(new.priority)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(todo)
    }

    /// Apply a partial update: only `Some` fields change, `updated_at` is
    /// refreshed. Returns the updated row.
    pub async fn update(pool: &SqlitePool, id: i64, patch: TodoPatch) -> Result<Todo, AppError> {
        let mut tx = pool.begin().await?;
        let current = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {SELECT_COLUMNS} FROM todos WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("todo {id}")))?;

        let title = patch.title.unwrap_or(current.title);
        let description = patch.description.unwrap_or(current.description);
        let completed = patch.completed.unwrap_or(current.completed);
        let priority = patch.priority.unwrap_or(current.priority);

        tracing::debug!(id, "update todo");
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos SET title = ?, description = ?, completed = ?, priority = ?, \
             updated_at = ? WHERE id = ? RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&title)
        .bind(&description)
        .bind(completed)
        .bind(priority)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(todo)
    }

    /// Hard delete. Not-found when the id does not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        tracing::debug!(id, "delete todo");
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("todo {id}")));
        }
        tx.commit().await?;
        Ok(())
    }

    /// Aggregate counts over the full table in a single query.
    pub async fn stats(pool: &SqlitePool) -> Result<TodoStats, AppError> {
        let stats = sqlx::query_as::<_, TodoStats>(
            "SELECT COUNT(*) AS total, \
             COALESCE(SUM(completed), 0) AS completed, \
             COUNT(*) - COALESCE(SUM(completed), 0) AS pending, \
             COALESCE(SUM(priority = 'high' AND NOT completed), 0) AS high_priority_pending \
             FROM todos",
        )
        .fetch_one(pool)
        .await?;
        Ok(stats)
    }
}
