// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding box over a point set.

use crate::error::{Error, Result};
use crate::payload::{BoundsPayload, Field};
use nalgebra::Point3;

/// Smallest axis-aligned box containing a set of points.
///
/// Invariant: `min[i] <= max[i]` for every axis, so the extents are
/// never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Extent along X (`max.x - min.x`).
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y (`max.y - min.y`).
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along Z (`max.z - min.z`).
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }
}

/// Compute the axis-aligned bounding box of a point set.
///
/// Single linear scan accumulating the per-axis minima and maxima;
/// O(n) time, O(1) extra space. Min and max are order-independent, so
/// point order does not affect the result.
pub fn bounding_box(payload: Option<BoundsPayload>) -> Result<BoundingBox> {
    let payload = payload.ok_or(Error::MissingPayload)?;
    let points = match &payload.points {
        Field::Value(points) if !points.is_empty() => points,
        _ => return Err(Error::MissingData { field: "points" }),
    };

    let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
    let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

    for point in points {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        min.z = min.z.min(point.z);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
        max.z = max.z.max(point.z);
    }

    Ok(BoundingBox { min, max })
}
