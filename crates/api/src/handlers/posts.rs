//! Handlers for the `/posts` resource.

use axum::extract::{Path, State};
use axum::Json;
use postline_core::content::PostInput;
use postline_core::types::DbId;
use postline_db::models::post::Post;

use crate::error::AppResult;
use crate::response::Reply;
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PostInput>,
) -> AppResult<Reply<Post>> {
    state.posts().create_post(&input).await
}

/// GET /api/posts
pub async fn list(State(state): State<AppState>) -> AppResult<Reply<Vec<Post>>> {
    state.posts().list_posts().await
}

/// GET /api/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Reply<Post>> {
    state.posts().get_post(id).await
}

/// PUT /api/posts/{id}
///
/// Full replace: both `title` and `contents` are required.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PostInput>,
) -> AppResult<Reply<()>> {
    state.posts().update_post(id, &input).await
}

/// DELETE /api/posts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Reply<()>> {
    state.posts().delete_post(id).await
}
