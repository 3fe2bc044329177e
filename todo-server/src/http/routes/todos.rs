//! Todo endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Todo, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{TodoId, ValidatedJson};
use crate::http::server::AppState;

/// Create todo request
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

/// Update todo request: a full replace of both fields.
///
/// A client-supplied `id` in the body is ignored; the path id wins.
#[derive(Deserialize)]
pub struct UpdateTodoRequest {
    pub task: String,
    pub completed: bool,
}

/// Todo response
#[derive(Serialize)]
pub struct TodoResponse {
    pub id: i32,
    pub task: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            task: t.task,
            completed: t.completed,
        }
    }
}

/// Create todo response
#[derive(Serialize)]
pub struct CreateTodoResponse {
    pub message: &'static str,
    pub todo: TodoResponse,
}

/// Delete todo response
#[derive(Serialize)]
pub struct DeleteTodoResponse {
    pub message: String,
}

/// GET /todos - list every todo
async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = TodoRepo::new(&state.pool).list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /todos - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateTodoRequest>,
) -> Result<Json<CreateTodoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool)
        .create(req.task, req.completed)
        .await?;

    Ok(Json(CreateTodoResponse {
        message: "Todo created successfully",
        todo: TodoResponse::from(todo),
    }))
}

/// PUT /todos/{id} - full replace of task and completed
async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    ValidatedJson(req): ValidatedJson<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = TodoRepo::new(&state.pool)
        .update(id, req.task, req.completed)
        .await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{id}
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<DeleteTodoResponse>, ApiError> {
    TodoRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeleteTodoResponse {
        message: format!("Todo {} deleted successfully", id),
    }))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::http::server::{build_router, AppState};

    /// Router backed by a pool that never connects; exercises the paths
    /// that must reject before any database access.
    fn offline_router() -> axum::Router {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy("postgres://localhost/unused")
            .expect("lazy pool creation failed");
        build_router(AppState { pool })
    }

    #[tokio::test]
    async fn greeting_route_responds() {
        let app = offline_router();
        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(Body::empty())
            .expect("request build failed");

        let response = app.oneshot(request).await.expect("request failed");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read failed");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("invalid JSON body");
        assert_eq!(body["message"], "Welcome to the To-Do API");
    }

    #[tokio::test]
    async fn create_body_missing_task_is_rejected_before_persistence() {
        let app = offline_router();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/todos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"completed": true}"#))
            .expect("request build failed");

        let response = app.oneshot(request).await.expect("request failed");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_body_requires_both_fields() {
        let app = offline_router();
        let request = Request::builder()
            .method(Method::PUT)
            .uri("/todos/1")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"task": "x"}"#))
            .expect("request build failed");

        let response = app.oneshot(request).await.expect("request failed");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn non_integer_path_id_is_rejected() {
        let app = offline_router();
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/todos/abc")
            .body(Body::empty())
            .expect("request build failed");

        let response = app.oneshot(request).await.expect("request failed");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn wrong_primitive_type_is_rejected() {
        let app = offline_router();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/todos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"task": 42}"#))
            .expect("request build failed");

        let response = app.oneshot(request).await.expect("request failed");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
