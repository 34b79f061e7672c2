//! Request payloads for posts and comments, and the rules that gate them.
//!
//! Payload fields are `Option` so a missing JSON key and an empty string are
//! both reported through the same validation path (400) instead of failing
//! body deserialization. Whitespace-only text counts as present.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Returned when a post payload lacks `title` or `contents`.
pub const POST_FIELDS_REQUIRED: &str = "Please provide title and contents for the post.";

/// Returned when a comment payload lacks `text`.
pub const COMMENT_TEXT_REQUIRED: &str = "Text field required";

/// Body of `POST /posts` and `PUT /posts/{id}`. Both fields are required on
/// create and on full update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostInput {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    pub contents: Option<String>,
}

/// Body of `POST /posts/{id}/comments`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentInput {
    #[validate(required, length(min = 1))]
    pub text: Option<String>,
}

/// Borrowed view of a post payload that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostFields<'a> {
    pub title: &'a str,
    pub contents: &'a str,
}

impl PostInput {
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            contents: Some(contents.into()),
        }
    }

    /// Check the payload and hand back its fields.
    pub fn validated(&self) -> Result<PostFields<'_>, CoreError> {
        let rejected = || CoreError::Validation(POST_FIELDS_REQUIRED.to_string());

        self.validate().map_err(|_| rejected())?;
        match (self.title.as_deref(), self.contents.as_deref()) {
            (Some(title), Some(contents)) => Ok(PostFields { title, contents }),
            _ => Err(rejected()),
        }
    }
}

impl CommentInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Check the payload and hand back the comment text.
    pub fn validated(&self) -> Result<&str, CoreError> {
        let rejected = || CoreError::Validation(COMMENT_TEXT_REQUIRED.to_string());

        self.validate().map_err(|_| rejected())?;
        self.text.as_deref().ok_or_else(rejected)
    }
}
