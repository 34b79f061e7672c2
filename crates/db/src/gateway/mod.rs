//! Persistence gateway.
//!
//! [`PostGateway`] is the only way the resource service touches storage.
//! Every lookup reports absence as `None`; update and delete report the
//! number of rows they affected, so acting on a missing id yields `0`
//! rather than an error.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use postline_core::types::DbId;

use crate::models::comment::Comment;
use crate::models::post::Post;

pub use memory::MemoryGateway;
pub use postgres::PgGateway;

/// Failure raised by a gateway call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The owning post disappeared before a comment could reference it.
    #[error("Post {post_id} does not exist")]
    MissingPost { post_id: DbId },
}

/// Storage primitives over the `posts` and `comments` collections.
///
/// Implementations must be safe to call concurrently from many requests.
/// Field content is not validated here.
#[async_trait]
pub trait PostGateway: Send + Sync {
    /// Insert a post. `None` means the store accepted the call but produced no row.
    async fn insert_post(&self, title: &str, contents: &str) -> Result<Option<Post>, StoreError>;

    /// All posts, oldest first.
    async fn find_all_posts(&self) -> Result<Vec<Post>, StoreError>;

    async fn find_post_by_id(&self, id: DbId) -> Result<Option<Post>, StoreError>;

    /// Comments belonging to `post_id`, oldest first.
    async fn find_comments_for_post(&self, post_id: DbId) -> Result<Vec<Comment>, StoreError>;

    /// Insert a comment. `None` means the store accepted the call but produced no row.
    async fn insert_comment(&self, post_id: DbId, text: &str)
        -> Result<Option<Comment>, StoreError>;

    /// Replace `title` and `contents`. Returns the number of posts updated (0 or 1).
    async fn update_post(&self, id: DbId, title: &str, contents: &str) -> Result<u64, StoreError>;

    /// Delete a post and its comments. Returns the number of posts deleted (0 or 1).
    async fn delete_post(&self, id: DbId) -> Result<u64, StoreError>;

    /// Cheap liveness probe for `/health`.
    async fn health_check(&self) -> Result<(), StoreError>;
}
