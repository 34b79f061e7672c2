//! Request handlers.
//!
//! Handlers only extract the path and body; the work happens in
//! [`crate::services::PostService`], whose replies and errors are already
//! HTTP responses.

pub mod comments;
pub mod posts;
