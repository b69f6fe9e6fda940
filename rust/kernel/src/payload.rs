// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation payloads with explicit field-presence tracking.
//!
//! The API contract distinguishes a key that is absent from a key that
//! is present with a null value, and both from a present-but-empty
//! value. A plain `Option` collapses the first two, so payload fields
//! use the three-state [`Field`] wrapper instead. A zero is a present,
//! valid value everywhere a number is expected.

use nalgebra::Point3;

/// Presence state of a named payload field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Key absent from the payload.
    Missing,
    /// Key present with an explicit null value.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Field<T> {
    /// True when the key was absent from the payload.
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    /// The contained value, if the field carries one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Bridge from the double-`Option` idiom deserializers use: the outer
/// `Option` is key presence, the inner one nullability.
impl<T> From<Option<Option<T>>> for Field<T> {
    fn from(raw: Option<Option<T>>) -> Self {
        match raw {
            None => Field::Missing,
            Some(None) => Field::Null,
            Some(Some(value)) => Field::Value(value),
        }
    }
}

/// Input to [`crate::bounding_box`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsPayload {
    pub points: Field<Vec<Point3<f64>>>,
}

/// Input to [`crate::rotate_mesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct RotatePayload {
    pub mesh: Field<Vec<Point3<f64>>>,
    /// Angle in degrees; any finite value is valid, including 0,
    /// negatives, and values beyond 360.
    pub angle: Field<f64>,
    /// Axis name; validated against {X, Y, Z} case-sensitively.
    pub axis: Field<String>,
}

/// Input to [`crate::translate_mesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatePayload {
    pub mesh: Field<Vec<Point3<f64>>>,
    pub x: Field<f64>,
    pub y: Field<f64>,
    pub z: Field<f64>,
}

/// Input to [`crate::check_convexity`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexityPayload {
    pub polygon: Field<Vec<Point3<f64>>>,
}
