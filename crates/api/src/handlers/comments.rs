//! Handlers for comments nested under `/posts/{id}/comments`.

use axum::extract::{Path, State};
use axum::Json;
use postline_core::content::CommentInput;
use postline_core::types::DbId;
use postline_db::models::comment::Comment;

use crate::error::AppResult;
use crate::response::Reply;
use crate::state::AppState;

/// POST /api/posts/{id}/comments
pub async fn create(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<CommentInput>,
) -> AppResult<Reply<Comment>> {
    state.posts().create_comment(post_id, &input).await
}

/// GET /api/posts/{id}/comments
pub async fn list_by_post(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<Reply<Vec<Comment>>> {
    state.posts().list_comments(post_id).await
}
