// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.
//!
//! Fields are `Option<Option<T>>` so that a key that is absent, a key
//! that is explicitly null, and a key with a value stay distinguishable
//! after deserialization; they convert into the kernel's three-state
//! [`Field`] wrapper. Numeric fields accept integers or floats.

use meshkit_kernel::{
    BoundsPayload, ConvexityPayload, Field, Point3, RotatePayload, TranslatePayload,
};
use serde::{Deserialize, Deserializer};

/// Deserialize a value into `Some(...)`, so that `#[serde(default)]`
/// supplies the outer `None` only when the key is absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Convert a raw point-list field into the kernel representation.
fn point_field(raw: Option<Option<Vec<[f64; 3]>>>) -> Field<Vec<Point3<f64>>> {
    match raw {
        None => Field::Missing,
        Some(None) => Field::Null,
        Some(Some(points)) => Field::Value(points.into_iter().map(Point3::from).collect()),
    }
}

/// Body of `POST /smallest_bounding_square`.
#[derive(Debug, Deserialize)]
pub struct BoundingBoxRequest {
    #[serde(default, deserialize_with = "present")]
    pub points: Option<Option<Vec<[f64; 3]>>>,
}

impl From<BoundingBoxRequest> for BoundsPayload {
    fn from(req: BoundingBoxRequest) -> Self {
        BoundsPayload {
            points: point_field(req.points),
        }
    }
}

/// Body of `POST /rotate_3d_mesh`.
#[derive(Debug, Deserialize)]
pub struct RotateMeshRequest {
    #[serde(default, deserialize_with = "present")]
    pub mesh: Option<Option<Vec<[f64; 3]>>>,
    #[serde(default, deserialize_with = "present")]
    pub angle: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub axis: Option<Option<String>>,
}

impl From<RotateMeshRequest> for RotatePayload {
    fn from(req: RotateMeshRequest) -> Self {
        RotatePayload {
            mesh: point_field(req.mesh),
            angle: req.angle.into(),
            axis: req.axis.into(),
        }
    }
}

/// Body of `POST /move_3d_mesh`.
#[derive(Debug, Deserialize)]
pub struct MoveMeshRequest {
    #[serde(default, deserialize_with = "present")]
    pub mesh: Option<Option<Vec<[f64; 3]>>>,
    #[serde(default, deserialize_with = "present")]
    pub x: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub y: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub z: Option<Option<f64>>,
}

impl From<MoveMeshRequest> for TranslatePayload {
    fn from(req: MoveMeshRequest) -> Self {
        TranslatePayload {
            mesh: point_field(req.mesh),
            x: req.x.into(),
            y: req.y.into(),
            z: req.z.into(),
        }
    }
}

/// Body of `POST /check_polygon`.
#[derive(Debug, Deserialize)]
pub struct CheckPolygonRequest {
    #[serde(default, deserialize_with = "present")]
    pub polygon: Option<Option<Vec<[f64; 3]>>>,
}

impl From<CheckPolygonRequest> for ConvexityPayload {
    fn from(req: CheckPolygonRequest) -> Self {
        ConvexityPayload {
            polygon: point_field(req.polygon),
        }
    }
}
