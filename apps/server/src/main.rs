// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MeshKit Server - stateless 3D geometry over HTTP.
//!
//! Each endpoint deserializes a JSON payload, runs one pure kernel
//! operation, and serializes the result or a typed validation failure.
//!
//! # Endpoints
//!
//! - `GET /` - Greeting
//! - `POST /` - Echo posted JSON back
//! - `POST /smallest_bounding_square` - Axis-aligned bounding box
//! - `POST /rotate_3d_mesh` - Rotate a mesh about a principal axis
//! - `POST /move_3d_mesh` - Translate a mesh
//! - `POST /check_polygon` - Polygon convexity check

use meshkit_server::{app, Config};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,meshkit_server=debug".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        max_body_size_kb = config.max_body_size_kb,
        request_timeout_secs = config.request_timeout_secs,
        "Starting MeshKit Server"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app(&config))
        .await
        .expect("Server error");
}
