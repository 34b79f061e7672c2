//! Route definitions for the `/posts` resource.
//!
//! Also nests the comment routes under `/posts/{id}/comments`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, posts};
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
///
/// GET    /{id}/comments   -> list_by_post
/// POST   /{id}/comments   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route(
            "/{id}",
            get(posts::get_by_id)
                .put(posts::update)
                .delete(posts::delete),
        )
        .route(
            "/{id}/comments",
            get(comments::list_by_post).post(comments::create),
        )
}
