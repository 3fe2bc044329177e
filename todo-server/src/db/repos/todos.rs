//! Todo repository
//!
//! The only table with an HTTP surface. Updates are full replaces of
//! `task` and `completed`; `id` is immutable once assigned.

use sqlx::{FromRow, PgConnection, PgPool};

use crate::db::session::with_transaction;

/// Todo record from database
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i32,
    pub task: String,
    pub completed: bool,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found")]
    NotFound { resource: &'static str },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every todo. Row order is whatever the database returns.
    pub async fn list(&self) -> Result<Vec<Todo>, DbError> {
        with_transaction(self.pool, |conn: &mut PgConnection| {
            Box::pin(async move {
                let todos = sqlx::query_as::<_, Todo>("SELECT id, task, completed FROM todo")
                    .fetch_all(&mut *conn)
                    .await?;
                Ok(todos)
            })
        })
        .await
    }

    /// Insert a todo, returning the stored row with its assigned id.
    pub async fn create(&self, task: String, completed: bool) -> Result<Todo, DbError> {
        with_transaction(self.pool, move |conn: &mut PgConnection| {
            Box::pin(async move {
                let todo = sqlx::query_as::<_, Todo>(
                    r#"
                    INSERT INTO todo (task, completed)
                    VALUES ($1, $2)
                    RETURNING id, task, completed
                    "#,
                )
                .bind(task)
                .bind(completed)
                .fetch_one(&mut *conn)
                .await?;
                Ok(todo)
            })
        })
        .await
    }

    /// Replace `task` and `completed` on an existing row.
    pub async fn update(&self, id: i32, task: String, completed: bool) -> Result<Todo, DbError> {
        with_transaction(self.pool, move |conn: &mut PgConnection| {
            Box::pin(async move {
                sqlx::query_as::<_, Todo>(
                    r#"
                    UPDATE todo
                    SET task = $2, completed = $3
                    WHERE id = $1
                    RETURNING id, task, completed
                    "#,
                )
                .bind(id)
                .bind(task)
                .bind(completed)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or(DbError::NotFound { resource: "Todo" })
            })
        })
        .await
    }

    /// Delete a row by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        with_transaction(self.pool, move |conn: &mut PgConnection| {
            Box::pin(async move {
                let deleted = sqlx::query("DELETE FROM todo WHERE id = $1")
                    .bind(id)
                    .execute(&mut *conn)
                    .await?;

                if deleted.rows_affected() == 0 {
                    return Err(DbError::NotFound { resource: "Todo" });
                }
                Ok(())
            })
        })
        .await
    }
}
