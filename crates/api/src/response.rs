//! Shared response envelope types for API handlers.
//!
//! Every response, success or error, is a JSON object of the form
//! `{ "status": "success" | "error", "message"?: string, "data"?: T }`.
//! Absent members are omitted rather than serialized as `null`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Outcome marker carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The uniform `{ status, message?, data? }` body.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope<()> {
    /// Error body. Never carries data.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// A successful operation result: HTTP status plus the envelope contents.
///
/// Returned by [`crate::services::PostService`] and passed straight through
/// by handlers.
#[derive(Debug)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub message: Option<&'static str>,
    pub data: Option<T>,
}

impl<T> Reply<T> {
    /// 200 with data and no message.
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: None,
            data: Some(data),
        }
    }

    /// 201 with a message and the created record.
    pub fn created(message: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl Reply<()> {
    /// 200 with a message only.
    pub fn message(message: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            message: Some(message),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        let body = Envelope {
            status: Status::Success,
            message: self.message.map(str::to_string),
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}
