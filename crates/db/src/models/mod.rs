//! Row models for the `posts` and `comments` tables.
//!
//! Request payloads live in `postline_core::content`; these types are what
//! the store hands back.

pub mod comment;
pub mod post;
