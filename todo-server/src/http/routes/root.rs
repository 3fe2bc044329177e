//! Root greeting endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Greeting response
#[derive(Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// GET /
async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Welcome to the To-Do API",
    })
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
