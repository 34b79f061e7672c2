//! Every operation turns a misbehaving store into a 500 with its own fixed
//! message, and never leaks the underlying cause.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Response, StatusCode};
use axum::Router;
use chrono::Utc;
use common::{body_json, build_test_app, delete, get, post_json, put_json};
use postline_db::models::comment::Comment;
use postline_db::models::post::Post;
use postline_db::{PostGateway, StoreError};
use serde_json::json;

// ---------------------------------------------------------------------------
// Fault-injecting gateway
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Fault {
    /// Every call errors.
    Down,
    /// Lookups find a post; inserts yield no row and updates/deletes touch nothing.
    Hollow,
    /// Lookups find a post; every write errors.
    BrokenWrites,
}

struct FaultyGateway {
    fault: Fault,
}

fn app_with(fault: Fault) -> Router {
    build_test_app(Arc::new(FaultyGateway { fault }))
}

fn timed_out() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

fn sample_post(id: i64) -> Post {
    let now = Utc::now();
    Post {
        id,
        title: "A".to_string(),
        contents: "B".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl PostGateway for FaultyGateway {
    async fn insert_post(&self, _: &str, _: &str) -> Result<Option<Post>, StoreError> {
        match self.fault {
            Fault::Hollow => Ok(None),
            Fault::Down | Fault::BrokenWrites => Err(timed_out()),
        }
    }

    async fn find_all_posts(&self) -> Result<Vec<Post>, StoreError> {
        match self.fault {
            Fault::Down => Err(timed_out()),
            Fault::Hollow | Fault::BrokenWrites => Ok(vec![sample_post(1)]),
        }
    }

    async fn find_post_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
        match self.fault {
            Fault::Down => Err(timed_out()),
            Fault::Hollow | Fault::BrokenWrites => Ok(Some(sample_post(id))),
        }
    }

    async fn find_comments_for_post(&self, _: i64) -> Result<Vec<Comment>, StoreError> {
        Err(timed_out())
    }

    async fn insert_comment(&self, _: i64, _: &str) -> Result<Option<Comment>, StoreError> {
        match self.fault {
            Fault::Hollow => Ok(None),
            Fault::Down | Fault::BrokenWrites => Err(timed_out()),
        }
    }

    async fn update_post(&self, _: i64, _: &str, _: &str) -> Result<u64, StoreError> {
        match self.fault {
            Fault::Hollow => Ok(0),
            Fault::Down | Fault::BrokenWrites => Err(timed_out()),
        }
    }

    async fn delete_post(&self, _: i64) -> Result<u64, StoreError> {
        match self.fault {
            Fault::Hollow => Ok(0),
            Fault::Down | Fault::BrokenWrites => Err(timed_out()),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        match self.fault {
            Fault::Down => Err(timed_out()),
            Fault::Hollow | Fault::BrokenWrites => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn assert_internal(response: Response<Body>, expected: &str) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], expected);
    assert!(json.get("data").is_none());

    let raw = json.to_string().to_lowercase();
    assert!(!raw.contains("pool"), "store detail leaked: {raw}");
    assert!(!raw.contains("timed out"), "store detail leaked: {raw}");
}

fn post_body() -> serde_json::Value {
    json!({"title": "A", "contents": "B"})
}

// ---------------------------------------------------------------------------
// Store down: each operation reports its own message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_errors_map_to_operation_messages() {
    let app = app_with(Fault::Down);

    assert_internal(
        post_json(app.clone(), "/api/posts", post_body()).await,
        "Error creating post",
    )
    .await;
    assert_internal(
        post_json(app.clone(), "/api/posts/1/comments", json!({"text": "hi"})).await,
        "Error creating comment",
    )
    .await;
    assert_internal(get(app.clone(), "/api/posts").await, "Error getting posts").await;
    assert_internal(get(app.clone(), "/api/posts/1").await, "Error getting post").await;
    assert_internal(
        get(app.clone(), "/api/posts/1/comments").await,
        "Error getting comments",
    )
    .await;
    assert_internal(
        put_json(app.clone(), "/api/posts/1", post_body()).await,
        "Error updating post",
    )
    .await;
    assert_internal(delete(app, "/api/posts/1").await, "Error deleting post").await;
}

#[tokio::test]
async fn validation_still_wins_when_store_is_down() {
    let app = app_with(Fault::Down);

    let response = post_json(app.clone(), "/api/posts", json!({"title": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(app.clone(), "/api/posts/1/comments", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(app, "/api/posts/1", json!({"contents": "B"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Store answers but produces nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_write_results_map_to_500() {
    let app = app_with(Fault::Hollow);

    assert_internal(
        post_json(app.clone(), "/api/posts", post_body()).await,
        "Error creating post",
    )
    .await;
    assert_internal(
        post_json(app.clone(), "/api/posts/1/comments", json!({"text": "hi"})).await,
        "Error creating comment",
    )
    .await;
    assert_internal(
        put_json(app.clone(), "/api/posts/1", post_body()).await,
        "Error updating post",
    )
    .await;
    assert_internal(delete(app, "/api/posts/1").await, "Error deleting post").await;
}

// ---------------------------------------------------------------------------
// Lookup succeeds, write fails
// ---------------------------------------------------------------------------

#[tokio::test]
async fn write_errors_after_successful_lookup_map_to_500() {
    let app = app_with(Fault::BrokenWrites);

    let response = get(app.clone(), "/api/posts/3").await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_internal(
        post_json(app.clone(), "/api/posts/3/comments", json!({"text": "hi"})).await,
        "Error creating comment",
    )
    .await;
    assert_internal(
        put_json(app.clone(), "/api/posts/3", post_body()).await,
        "Error updating post",
    )
    .await;
    assert_internal(delete(app, "/api/posts/3").await, "Error deleting post").await;
}

// ---------------------------------------------------------------------------
// Health reflects the store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_degraded_when_store_is_down() {
    let response = get(app_with(Fault::Down), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}
