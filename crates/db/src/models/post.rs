//! Post entity model.

use postline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A post row from the `posts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub contents: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    #[serde(skip_serializing)]
    pub updated_at: Timestamp,
}
