// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use meshkit_kernel::{BoundingBox, Point3};
use serde::Serialize;

/// Bounding-box response: per-axis extremes plus derived extents.
#[derive(Debug, Clone, Serialize)]
pub struct BoundingBoxResponse {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl From<BoundingBox> for BoundingBoxResponse {
    fn from(bbox: BoundingBox) -> Self {
        Self {
            min_x: bbox.min.x,
            min_y: bbox.min.y,
            min_z: bbox.min.z,
            max_x: bbox.max.x,
            max_y: bbox.max.y,
            max_z: bbox.max.z,
            width: bbox.width(),
            height: bbox.height(),
            depth: bbox.depth(),
        }
    }
}

/// Mesh response: point triples in input order.
#[derive(Debug, Clone, Serialize)]
pub struct MeshResponse {
    pub mesh: Vec<[f64; 3]>,
}

impl From<Vec<Point3<f64>>> for MeshResponse {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self {
            mesh: points.into_iter().map(|p| [p.x, p.y, p.z]).collect(),
        }
    }
}

/// Convexity verdict, reported as "True" or "False".
#[derive(Debug, Clone, Serialize)]
pub struct ConvexityResponse {
    pub message: &'static str,
}

impl From<bool> for ConvexityResponse {
    fn from(convex: bool) -> Self {
        Self {
            message: if convex { "True" } else { "False" },
        }
    }
}

/// Greeting response for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// Echo response for `POST /`.
#[derive(Debug, Clone, Serialize)]
pub struct EchoResponse {
    pub data: serde_json::Value,
}
