// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon convexity testing.
//!
//! The test walks every cyclic vertex triple and compares the cross
//! product of its edge vectors against the first triple's cross
//! product, component by component. A strictly negative product on any
//! axis means the turning direction reversed, so the polygon is not
//! convex.
//!
//! This per-axis sign check is deliberately weaker than a single
//! dominant-normal or signed-area orientation test: it only reacts to a
//! sign reversal per axis, never to magnitude, which keeps it tolerant
//! of near-planar and slightly non-planar vertex sets. That looseness
//! is part of the contract; callers depend on the verdicts it produces
//! for degenerate inputs, so it must not be swapped for a textbook
//! convexity test.

use crate::error::{Error, Result};
use crate::payload::{ConvexityPayload, Field};
use nalgebra::{Point3, Vector3};

/// Cross product of the edge vectors AB and AC.
fn turn_direction(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Vector3<f64> {
    (b - a).cross(&(c - a))
}

/// Decide whether a closed polygon (cyclic vertex order, last vertex
/// connecting back to the first) is convex.
///
/// Returns `Ok(false)` as soon as any triple's turning direction
/// disagrees in sign with the reference triple on any axis; `Ok(true)`
/// when no triple ever disagrees. Fewer than 3 vertices is a
/// [`Error::TooFewVertices`] failure, not a false verdict.
pub fn check_convexity(payload: Option<ConvexityPayload>) -> Result<bool> {
    let payload = payload.ok_or(Error::MissingPayload)?;
    let polygon = match &payload.polygon {
        Field::Value(polygon) if !polygon.is_empty() => polygon,
        _ => return Err(Error::MissingFields),
    };

    let n = polygon.len();
    if n < 3 {
        return Err(Error::TooFewVertices);
    }

    let mut reference: Option<Vector3<f64>> = None;
    for i in 0..n {
        let cross = turn_direction(&polygon[i], &polygon[(i + 1) % n], &polygon[(i + 2) % n]);
        match &reference {
            None => reference = Some(cross),
            Some(reference) => {
                if cross.x * reference.x < 0.0
                    || cross.y * reference.y < 0.0
                    || cross.z * reference.z < 0.0
                {
                    return Ok(false);
                }
            }
        }
    }

    Ok(true)
}
