//! Resource service for posts and their comments.
//!
//! Every operation runs validate -> look up -> mutate -> reply. Domain
//! failures surface as 400/404, and anything the gateway does wrong becomes
//! the operation's fixed 500 message.

use std::sync::Arc;

use postline_core::content::{CommentInput, PostInput};
use postline_core::error::CoreError;
use postline_core::types::DbId;
use postline_db::models::comment::Comment;
use postline_db::models::post::Post;
use postline_db::PostGateway;

use crate::error::{AppError, AppResult};
use crate::response::Reply;
use crate::services::Operation;

const POST_CREATED: &str = "Successfully created post";
const COMMENT_CREATED: &str = "Comment added successfully";
const POST_UPDATED: &str = "Post updated successfully";
const POST_DELETED: &str = "Post deleted successfully";

/// Cheaply cloneable handle; all clones share one gateway.
#[derive(Clone)]
pub struct PostService {
    gateway: Arc<dyn PostGateway>,
}

impl PostService {
    pub fn new(gateway: Arc<dyn PostGateway>) -> Self {
        Self { gateway }
    }

    /// Validate, insert, and return the new post with its assigned id (201).
    pub async fn create_post(&self, input: &PostInput) -> AppResult<Reply<Post>> {
        let op = Operation::CreatePost;
        let fields = input.validated()?;

        let post = self
            .gateway
            .insert_post(fields.title, fields.contents)
            .await
            .map_err(AppError::store(op))?
            .ok_or_else(|| unexpected(op, "insert returned no row"))?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(Reply::created(POST_CREATED, post))
    }

    /// Add a comment under an existing post (201).
    ///
    /// Text is checked before the post lookup, so an empty comment is a 400
    /// even when the post is missing.
    pub async fn create_comment(
        &self,
        post_id: DbId,
        input: &CommentInput,
    ) -> AppResult<Reply<Comment>> {
        let op = Operation::CreateComment;
        let text = input.validated()?;
        self.require_post(post_id, op).await?;

        let comment = self
            .gateway
            .insert_comment(post_id, text)
            .await
            .map_err(AppError::store(op))?
            .ok_or_else(|| unexpected(op, "insert returned no row"))?;

        tracing::info!(post_id, comment_id = comment.id, "Comment created");
        Ok(Reply::created(COMMENT_CREATED, comment))
    }

    /// All posts. An empty collection is reported as 404.
    pub async fn list_posts(&self) -> AppResult<Reply<Vec<Post>>> {
        let posts = self
            .gateway
            .find_all_posts()
            .await
            .map_err(AppError::store(Operation::ListPosts))?;

        if posts.is_empty() {
            return Err(not_found("Posts"));
        }
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(Reply::ok(posts))
    }

    pub async fn get_post(&self, id: DbId) -> AppResult<Reply<Post>> {
        let post = self.require_post(id, Operation::GetPost).await?;
        Ok(Reply::ok(post))
    }

    /// Comments of an existing post. An empty collection is reported as 404.
    pub async fn list_comments(&self, post_id: DbId) -> AppResult<Reply<Vec<Comment>>> {
        let op = Operation::ListComments;
        self.require_post(post_id, op).await?;

        let comments = self
            .gateway
            .find_comments_for_post(post_id)
            .await
            .map_err(AppError::store(op))?;

        if comments.is_empty() {
            return Err(not_found("Comments"));
        }
        tracing::debug!(post_id, count = comments.len(), "Listed comments");
        Ok(Reply::ok(comments))
    }

    /// Replace `title` and `contents` of an existing post.
    pub async fn update_post(&self, id: DbId, input: &PostInput) -> AppResult<Reply<()>> {
        let op = Operation::UpdatePost;
        let fields = input.validated()?;
        self.require_post(id, op).await?;

        let updated = self
            .gateway
            .update_post(id, fields.title, fields.contents)
            .await
            .map_err(AppError::store(op))?;

        if updated != 1 {
            return Err(unexpected(op, format!("update affected {updated} rows")));
        }
        tracing::info!(post_id = id, "Post updated");
        Ok(Reply::message(POST_UPDATED))
    }

    /// Delete an existing post together with its comments.
    pub async fn delete_post(&self, id: DbId) -> AppResult<Reply<()>> {
        let op = Operation::DeletePost;
        self.require_post(id, op).await?;

        let deleted = self
            .gateway
            .delete_post(id)
            .await
            .map_err(AppError::store(op))?;

        if deleted != 1 {
            return Err(unexpected(op, format!("delete affected {deleted} rows")));
        }
        tracing::info!(post_id = id, "Post deleted");
        Ok(Reply::message(POST_DELETED))
    }

    /// Fetch a post or fail with 404. Lookup errors count against `op`.
    async fn require_post(&self, id: DbId, op: Operation) -> AppResult<Post> {
        self.gateway
            .find_post_by_id(id)
            .await
            .map_err(AppError::store(op))?
            .ok_or_else(|| not_found("Post"))
    }
}

fn not_found(entity: &'static str) -> AppError {
    AppError::Core(CoreError::NotFound { entity })
}

fn unexpected(operation: Operation, reason: impl Into<String>) -> AppError {
    AppError::Unexpected {
        operation,
        reason: reason.into(),
    }
}
