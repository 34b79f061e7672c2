//! PostgreSQL-backed gateway.

use async_trait::async_trait;
use postline_core::types::DbId;

use crate::models::comment::Comment;
use crate::models::post::Post;
use crate::repositories::{CommentRepo, PostRepo};
use crate::DbPool;

use super::{PostGateway, StoreError};

/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Gateway over a shared connection pool. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct PgGateway {
    pool: DbPool,
}

impl PgGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION),
        _ => false,
    }
}

#[async_trait]
impl PostGateway for PgGateway {
    async fn insert_post(&self, title: &str, contents: &str) -> Result<Option<Post>, StoreError> {
        let post = PostRepo::create(&self.pool, title, contents).await?;
        Ok(Some(post))
    }

    async fn find_all_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(PostRepo::list(&self.pool).await?)
    }

    async fn find_post_by_id(&self, id: DbId) -> Result<Option<Post>, StoreError> {
        Ok(PostRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_comments_for_post(&self, post_id: DbId) -> Result<Vec<Comment>, StoreError> {
        Ok(CommentRepo::list_by_post(&self.pool, post_id).await?)
    }

    async fn insert_comment(
        &self,
        post_id: DbId,
        text: &str,
    ) -> Result<Option<Comment>, StoreError> {
        match CommentRepo::create(&self.pool, post_id, text).await {
            Ok(comment) => Ok(Some(comment)),
            Err(err) if is_foreign_key_violation(&err) => {
                tracing::warn!(post_id, "Comment insert referenced a missing post");
                Err(StoreError::MissingPost { post_id })
            }
            Err(err) => Err(StoreError::Database(err)),
        }
    }

    async fn update_post(&self, id: DbId, title: &str, contents: &str) -> Result<u64, StoreError> {
        Ok(PostRepo::update(&self.pool, id, title, contents).await?)
    }

    async fn delete_post(&self, id: DbId) -> Result<u64, StoreError> {
        Ok(PostRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
