pub mod health;
pub mod posts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts                  list, create
/// /posts/{id}             get, update, delete
/// /posts/{id}/comments    list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/posts", posts::router())
}
