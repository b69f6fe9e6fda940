// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh rotation about a principal axis.

use crate::error::{Error, Result};
use crate::payload::{Field, RotatePayload};
use nalgebra::{Matrix3, Point3};

/// Principal rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parse an axis name. Matching is case-sensitive and exact: only
    /// "X", "Y", and "Z" are accepted.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(Error::InvalidAxis),
        }
    }
}

/// Build the 3x3 right-handed rotation matrix for `angle_deg` degrees
/// about `axis`. Rotation about an axis leaves that coordinate fixed
/// and rotates the other two; signs follow the right-hand rule.
pub fn rotation_matrix(axis: Axis, angle_deg: f64) -> Matrix3<f64> {
    let rad = angle_deg.to_radians();
    let (s, c) = rad.sin_cos();

    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, c, -s, //
            0.0, s, c,
        ),
        Axis::Y => Matrix3::new(
            c, 0.0, s, //
            0.0, 1.0, 0.0, //
            -s, 0.0, c,
        ),
        Axis::Z => Matrix3::new(
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        ),
    }
}

/// Apply a rotation to one point with the row-vector convention
/// (`p · R`, equivalently `R^T * p`).
///
/// Each component accumulates as one multiply followed by two fused
/// multiply-adds. `mul_add` rounds once per operation on every
/// platform, which keeps results bit-identical to the reference
/// vectors the API contract is tested against.
fn apply(rotation: &Matrix3<f64>, p: &Point3<f64>) -> Point3<f64> {
    let component = |j: usize| {
        p.z.mul_add(
            rotation[(2, j)],
            p.y.mul_add(rotation[(1, j)], p.x * rotation[(0, j)]),
        )
    };
    Point3::new(component(0), component(1), component(2))
}

/// Rotate every point of a mesh about the origin.
///
/// Returns a new mesh of the same length and order. Points are applied
/// with the row-vector convention (`p · R`). Results carry full
/// IEEE-754 double precision; no rounding or clamping is applied.
pub fn rotate_mesh(payload: Option<RotatePayload>) -> Result<Vec<Point3<f64>>> {
    let payload = payload.ok_or(Error::MissingPayload)?;

    if payload.mesh.is_missing() || payload.angle.is_missing() || payload.axis.is_missing() {
        return Err(Error::MissingFields);
    }

    let mesh = match &payload.mesh {
        Field::Value(mesh) if !mesh.is_empty() => mesh,
        _ => return Err(Error::MissingData { field: "mesh" }),
    };
    let angle = match payload.angle {
        Field::Value(angle) => angle,
        _ => return Err(Error::MissingData { field: "angle" }),
    };
    let axis = match &payload.axis {
        Field::Value(axis) if !axis.is_empty() => axis,
        _ => return Err(Error::MissingData { field: "axis" }),
    };

    let rotation = rotation_matrix(Axis::parse(axis)?, angle);

    Ok(mesh.iter().map(|p| apply(&rotation, p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn payload(mesh: &[[f64; 3]], angle: f64, axis: &str) -> RotatePayload {
        RotatePayload {
            mesh: Field::Value(mesh.iter().copied().map(Point3::from).collect()),
            angle: Field::Value(angle),
            axis: Field::Value(axis.to_string()),
        }
    }

    #[test]
    fn test_rotate_30_degrees_about_y() {
        let rotated = rotate_mesh(Some(payload(
            &[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]],
            30.0,
            "Y",
        )))
        .unwrap();

        // Exact doubles, matching the reference vectors bit for bit.
        assert_eq!(
            rotated,
            vec![
                Point3::new(-0.6339745962155612, 2.0, 3.098076211353316),
                Point3::new(0.46410161513775516, 5.0, 7.196152422706632),
                Point3::new(1.5621778264910717, 8.0, 11.294228634059948),
            ]
        );
    }

    #[test]
    fn test_rotate_30_degrees_about_x() {
        let rotated = rotate_mesh(Some(payload(
            &[[1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0]],
            30.0,
            "X",
        )))
        .unwrap();

        assert_eq!(
            rotated,
            vec![
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.49999999999999994, 0.8660254037844387),
                Point3::new(0.0, 1.3660254037844386, 0.36602540378443876),
            ]
        );
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let mesh = [[1.0, 2.0, 3.0], [-4.0, 5.5, 0.0]];
        for axis in ["X", "Y", "Z"] {
            let rotated = rotate_mesh(Some(payload(&mesh, 0.0, axis))).unwrap();
            for (point, original) in rotated.iter().zip(&mesh) {
                assert_relative_eq!(point.x, original[0]);
                assert_relative_eq!(point.y, original[1]);
                assert_relative_eq!(point.z, original[2]);
            }
        }
    }

    #[test]
    fn test_axis_coordinate_is_unchanged() {
        let mesh = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

        let about_x = rotate_mesh(Some(payload(&mesh, 73.5, "X"))).unwrap();
        assert_eq!((about_x[0].x, about_x[1].x), (1.0, 4.0));

        let about_y = rotate_mesh(Some(payload(&mesh, -214.0, "Y"))).unwrap();
        assert_eq!((about_y[0].y, about_y[1].y), (2.0, 5.0));

        let about_z = rotate_mesh(Some(payload(&mesh, 400.0, "Z"))).unwrap();
        assert_eq!((about_z[0].z, about_z[1].z), (3.0, 6.0));
    }

    #[test]
    fn test_row_vector_convention_about_z() {
        // With p · R and the standard Z matrix, +90 degrees carries +X
        // toward -Y.
        let rotated = rotate_mesh(Some(payload(&[[1.0, 0.0, 0.0]], 90.0, "Z"))).unwrap();
        assert_relative_eq!(rotated[0].x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(rotated[0].y, -1.0);
        assert_relative_eq!(rotated[0].z, 0.0);
    }

    #[test]
    fn test_invalid_axis() {
        let result = rotate_mesh(Some(payload(&[[1.0, 2.0, 3.0]], 30.0, "K")));
        assert_eq!(result, Err(Error::InvalidAxis));

        // Matching is case-sensitive.
        let result = rotate_mesh(Some(payload(&[[1.0, 2.0, 3.0]], 30.0, "x")));
        assert_eq!(result, Err(Error::InvalidAxis));
    }

    #[test]
    fn test_missing_payload() {
        assert_eq!(rotate_mesh(None), Err(Error::MissingPayload));
    }

    #[test]
    fn test_absent_fields() {
        let mut partial = payload(&[[1.0, 2.0, 3.0]], 30.0, "Y");
        partial.angle = Field::Missing;
        partial.axis = Field::Missing;
        assert_eq!(rotate_mesh(Some(partial)), Err(Error::MissingFields));
    }

    #[test]
    fn test_empty_and_null_field_values() {
        let mut empty_mesh = payload(&[], 30.0, "Y");
        empty_mesh.mesh = Field::Value(vec![]);
        assert_eq!(
            rotate_mesh(Some(empty_mesh)),
            Err(Error::MissingData { field: "mesh" })
        );

        let mut null_angle = payload(&[[1.0, 2.0, 3.0]], 0.0, "Y");
        null_angle.angle = Field::Null;
        assert_eq!(
            rotate_mesh(Some(null_angle)),
            Err(Error::MissingData { field: "angle" })
        );

        let mut empty_axis = payload(&[[1.0, 2.0, 3.0]], 30.0, "");
        empty_axis.axis = Field::Value(String::new());
        assert_eq!(
            rotate_mesh(Some(empty_axis)),
            Err(Error::MissingData { field: "axis" })
        );
    }
}
