// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Greeting and echo endpoints.

use crate::types::{EchoResponse, GreetingResponse};
use axum::{http::StatusCode, Json};
use serde_json::Value;

/// GET / - Greeting endpoint.
pub async fn greet() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "hello world",
    })
}

/// POST / - Echo the posted JSON back.
pub async fn echo(body: Option<Json<Value>>) -> (StatusCode, Json<EchoResponse>) {
    let data = body.map(|Json(value)| value).unwrap_or(Value::Null);
    (StatusCode::CREATED, Json(EchoResponse { data }))
}
