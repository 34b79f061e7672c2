//! Repository for the `posts` table.

use postline_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::Post;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, contents, created_at, updated_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(pool: &PgPool, title: &str, contents: &str) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, contents)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(title)
            .bind(contents)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY id ASC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// Replace `title` and `contents` of a post. Returns the number of rows updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        contents: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE posts SET title = $2, contents = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .bind(contents)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a post by ID. Its comments go with it (FK cascade).
    /// Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
