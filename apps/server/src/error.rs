// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation failure reported by the geometry kernel.
    #[error(transparent)]
    Kernel(#[from] meshkit_kernel::Error),

    /// Body was present but did not match the expected shape (wrong
    /// types, malformed point triples, and so on).
    #[error("Invalid request data: {0}")]
    InvalidPayload(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for the too-few-vertices convexity failure, which the API
/// contract reports under a `message` key rather than `error`.
#[derive(Debug, Serialize)]
struct VerdictErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // All failures are caller input errors; there is no internal
        // fault path in the kernel.
        if let ApiError::Kernel(meshkit_kernel::Error::TooFewVertices) = &self {
            let body = VerdictErrorResponse {
                message: format!("False: {}", self),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidPayload(err.to_string())
    }
}
