// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Router construction for the MeshKit server.
//!
//! Lives in the library target so integration tests can drive the full
//! application in-process with `tower::ServiceExt::oneshot`.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod types;

pub use config::Config;

/// Build the application router with all endpoints and middleware.
pub fn app(config: &Config) -> Router {
    Router::new()
        // Greeting / echo
        .route("/", get(routes::hello::greet).post(routes::hello::echo))
        // Geometry endpoints
        .route(
            "/smallest_bounding_square",
            post(routes::geometry::bounding_box),
        )
        .route("/rotate_3d_mesh", post(routes::geometry::rotate_mesh))
        .route("/move_3d_mesh", post(routes::geometry::move_mesh))
        .route("/check_polygon", post(routes::geometry::check_polygon))
        // Middleware
        .layer(DefaultBodyLimit::max(config.max_body_size_kb * 1024))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
