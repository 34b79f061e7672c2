//! In-process gateway used when no database is configured, and by tests.
//!
//! Mirrors the PostgreSQL schema: ids start at 1 and are never reused,
//! deleting a post removes its comments, and a comment cannot be inserted
//! under a post that does not exist.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use postline_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::comment::Comment;
use crate::models::post::Post;

use super::{PostGateway, StoreError};

#[derive(Debug, Default)]
struct Tables {
    posts: BTreeMap<DbId, Post>,
    comments: BTreeMap<DbId, Comment>,
    last_post_id: DbId,
    last_comment_id: DbId,
}

/// Gateway holding both collections behind a single async lock.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    tables: RwLock<Tables>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostGateway for MemoryGateway {
    async fn insert_post(&self, title: &str, contents: &str) -> Result<Option<Post>, StoreError> {
        let mut tables = self.tables.write().await;
        tables.last_post_id += 1;

        let now = Utc::now();
        let post = Post {
            id: tables.last_post_id,
            title: title.to_string(),
            contents: contents.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.posts.insert(post.id, post.clone());
        Ok(Some(post))
    }

    async fn find_all_posts(&self) -> Result<Vec<Post>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.values().cloned().collect())
    }

    async fn find_post_by_id(&self, id: DbId) -> Result<Option<Post>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn find_comments_for_post(&self, post_id: DbId) -> Result<Vec<Comment>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn insert_comment(
        &self,
        post_id: DbId,
        text: &str,
    ) -> Result<Option<Comment>, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&post_id) {
            return Err(StoreError::MissingPost { post_id });
        }
        tables.last_comment_id += 1;

        let now = Utc::now();
        let comment = Comment {
            id: tables.last_comment_id,
            post_id,
            text: text.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(Some(comment))
    }

    async fn update_post(&self, id: DbId, title: &str, contents: &str) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        match tables.posts.get_mut(&id) {
            Some(post) => {
                post.title = title.to_string();
                post.contents = contents.to_string();
                post.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_post(&self, id: DbId) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.posts.remove(&id).is_none() {
            return Ok(0);
        }
        tables.comments.retain(|_, c| c.post_id != id);
        Ok(1)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
