//! Repository for the `comments` table.

use postline_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;

const COLUMNS: &str = "id, post_id, text, created_at, updated_at";

/// Provides insert and per-post listing for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment under `post_id`, returning the created row.
    ///
    /// Fails with a foreign key violation if the post does not exist.
    pub async fn create(pool: &PgPool, post_id: DbId, text: &str) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, text)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(text)
            .fetch_one(pool)
            .await
    }

    /// List the comments of a post, oldest first.
    pub async fn list_by_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE post_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }
}
