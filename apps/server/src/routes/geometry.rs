// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry endpoints: one handler per kernel operation.
//!
//! Handlers only translate between the wire format and the kernel's
//! payload types; all validation and computation happens in the kernel.

use crate::error::ApiError;
use crate::types::{
    BoundingBoxRequest, BoundingBoxResponse, CheckPolygonRequest, ConvexityResponse,
    MeshResponse, MoveMeshRequest, RotateMeshRequest,
};
use axum::Json;
use meshkit_kernel as kernel;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a request body into an operation payload.
///
/// A missing or unreadable body, a JSON `null`, and an empty object all
/// count as "no payload" (`None`); the kernel turns that into its
/// `MissingPayload` error. Anything else must deserialize into the
/// request type, whose all-optional fields preserve key presence.
fn decode_payload<T: DeserializeOwned>(body: Option<Json<Value>>) -> Result<Option<T>, ApiError> {
    let Some(Json(value)) = body else {
        return Ok(None);
    };
    if value.is_null() || value.as_object().is_some_and(|object| object.is_empty()) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// POST /smallest_bounding_square - Axis-aligned bounding box.
pub async fn bounding_box(body: Option<Json<Value>>) -> Result<Json<BoundingBoxResponse>, ApiError> {
    let request = decode_payload::<BoundingBoxRequest>(body)?;
    let bbox = kernel::bounding_box(request.map(Into::into))?;
    Ok(Json(bbox.into()))
}

/// POST /rotate_3d_mesh - Rotate a mesh about a principal axis.
pub async fn rotate_mesh(body: Option<Json<Value>>) -> Result<Json<MeshResponse>, ApiError> {
    let request = decode_payload::<RotateMeshRequest>(body)?;
    let rotated = kernel::rotate_mesh(request.map(Into::into))?;
    Ok(Json(rotated.into()))
}

/// POST /move_3d_mesh - Translate a mesh.
pub async fn move_mesh(body: Option<Json<Value>>) -> Result<Json<MeshResponse>, ApiError> {
    let request = decode_payload::<MoveMeshRequest>(body)?;
    let moved = kernel::translate_mesh(request.map(Into::into))?;
    Ok(Json(moved.into()))
}

/// POST /check_polygon - Polygon convexity check.
pub async fn check_polygon(body: Option<Json<Value>>) -> Result<Json<ConvexityResponse>, ApiError> {
    let request = decode_payload::<CheckPolygonRequest>(body)?;
    let convex = kernel::check_convexity(request.map(Into::into))?;
    Ok(Json(convex.into()))
}
