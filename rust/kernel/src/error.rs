use thiserror::Error;

/// Result type for kernel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors reported by the kernel.
///
/// Every variant is a caller input error detected before computation
/// begins; the kernel has no internal fault path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No input data at all (absent, null, or empty payload).
    #[error("Missing required JSON data")]
    MissingPayload,

    /// A required key is absent from an otherwise-present payload.
    #[error("Missing required fields in JSON data")]
    MissingFields,

    /// A required key is present but its value is null or empty.
    #[error("No {field} provided")]
    MissingData { field: &'static str },

    /// Rotation axis outside {X, Y, Z} (case-sensitive exact match).
    #[error("Invalid axis. Please specify 'X', 'Y', or 'Z'")]
    InvalidAxis,

    /// Polygon with fewer than 3 vertices; distinct from a false
    /// convexity verdict.
    #[error("polygon must have at least 3 vertices to be considered convex")]
    TooFewVertices,
}
