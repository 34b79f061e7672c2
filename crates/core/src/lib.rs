//! Domain types and rules for posts and comments. No I/O lives here.

pub mod content;
pub mod error;
pub mod types;
