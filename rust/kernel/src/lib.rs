//! MeshKit Geometry Kernel
//!
//! Stateless 3D-geometry computations over ordered point sequences:
//! axis-aligned bounding boxes, mesh rotation about a principal axis,
//! mesh translation, and planar-polygon convexity testing.
//!
//! Every operation is a pure function over the payload it is given.
//! Payloads model field presence explicitly (see [`Field`]) so that a
//! missing key, an explicit null, and an empty value can produce the
//! distinct validation errors the API contract requires. The kernel has
//! no dependency on any web or serialization framework; transport
//! adapters convert wire formats to and from these types.

pub mod bounds;
pub mod convexity;
pub mod error;
pub mod payload;
pub mod rotation;
pub mod translation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};

pub use bounds::{bounding_box, BoundingBox};
pub use convexity::check_convexity;
pub use error::{Error, Result};
pub use payload::{BoundsPayload, ConvexityPayload, Field, RotatePayload, TranslatePayload};
pub use rotation::{rotate_mesh, rotation_matrix, Axis};
pub use translation::translate_mesh;
