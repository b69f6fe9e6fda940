// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh translation.

use crate::error::{Error, Result};
use crate::payload::{Field, TranslatePayload};
use nalgebra::{Point3, Vector3};

/// Shift every point of a mesh by (dx, dy, dz).
///
/// Returns a new mesh of identical length and order. Each offset
/// component must be present in the payload; zero is a valid present
/// value. A mesh that is present as an empty list translates to an
/// empty list.
pub fn translate_mesh(payload: Option<TranslatePayload>) -> Result<Vec<Point3<f64>>> {
    let payload = payload.ok_or(Error::MissingPayload)?;

    // Null offsets are treated the same as absent keys: there is no
    // usable value either way.
    let (mesh, x, y, z) = match (&payload.mesh, payload.x, payload.y, payload.z) {
        (Field::Value(mesh), Field::Value(x), Field::Value(y), Field::Value(z)) => {
            (mesh, x, y, z)
        }
        _ => return Err(Error::MissingFields),
    };

    let offset = Vector3::new(x, y, z);
    Ok(mesh.iter().map(|p| p + offset).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(mesh: &[[f64; 3]], x: f64, y: f64, z: f64) -> TranslatePayload {
        TranslatePayload {
            mesh: Field::Value(mesh.iter().copied().map(Point3::from).collect()),
            x: Field::Value(x),
            y: Field::Value(y),
            z: Field::Value(z),
        }
    }

    const MESH: [[f64; 3]; 3] = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];

    #[test]
    fn test_translate() {
        let moved = translate_mesh(Some(payload(&MESH, 10.0, 20.0, 30.0))).unwrap();
        assert_eq!(
            moved,
            vec![
                Point3::new(11.0, 22.0, 33.0),
                Point3::new(14.0, 25.0, 36.0),
                Point3::new(17.0, 28.0, 39.0),
            ]
        );
    }

    #[test]
    fn test_translate_negative_offsets() {
        let moved = translate_mesh(Some(payload(&MESH, -10.0, -20.0, -30.0))).unwrap();
        assert_eq!(
            moved,
            vec![
                Point3::new(-9.0, -18.0, -27.0),
                Point3::new(-6.0, -15.0, -24.0),
                Point3::new(-3.0, -12.0, -21.0),
            ]
        );
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let moved = translate_mesh(Some(payload(&MESH, 0.0, 0.0, 0.0))).unwrap();
        let original: Vec<_> = MESH.iter().copied().map(Point3::from).collect();
        assert_eq!(moved, original);
    }

    #[test]
    fn test_empty_mesh_translates_to_empty() {
        let moved = translate_mesh(Some(payload(&[], 1.0, 2.0, 3.0))).unwrap();
        assert!(moved.is_empty());
    }

    #[test]
    fn test_missing_payload() {
        assert_eq!(translate_mesh(None), Err(Error::MissingPayload));
    }

    #[test]
    fn test_absent_offset_component() {
        let mut partial = payload(&MESH, -10.0, -20.0, 0.0);
        partial.z = Field::Missing;
        assert_eq!(translate_mesh(Some(partial)), Err(Error::MissingFields));
    }

    #[test]
    fn test_absent_mesh() {
        let mut partial = payload(&[], -10.0, -20.0, -30.0);
        partial.mesh = Field::Missing;
        assert_eq!(translate_mesh(Some(partial)), Err(Error::MissingFields));
    }

    #[test]
    fn test_null_offset_component() {
        let mut partial = payload(&MESH, 1.0, 2.0, 0.0);
        partial.y = Field::Null;
        assert_eq!(translate_mesh(Some(partial)), Err(Error::MissingFields));
    }

    #[test]
    fn test_null_mesh() {
        let mut partial = payload(&[], 1.0, 2.0, 3.0);
        partial.mesh = Field::Null;
        assert_eq!(translate_mesh(Some(partial)), Err(Error::MissingFields));
    }
}
