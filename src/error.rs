use std::fmt;

use thiserror::Error;

/// Top-level error type for profile modeling and boolean operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Intersection(#[from] IntersectionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("unsupported geometry: {0}")]
    Unsupported(String),
}

/// Errors related to the loop structure of a profile.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("a blueprint needs at least one curve")]
    EmptyLoop,

    #[error("loop is not closed: curve {index} ends at ({x}, {y}) away from the next start")]
    LoopNotClosed { index: usize, x: f64, y: f64 },
}

/// Machine-readable failure codes of the curve intersection primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionErrorCode {
    /// A zero-length line or a non-positive radius arc took part in the query.
    DegenerateCurve,
    /// A curve carries NaN or infinite coordinates.
    NonFinite,
}

impl IntersectionErrorCode {
    /// Stable string form of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DegenerateCurve => "DEGENERATE_CURVE",
            Self::NonFinite => "NON_FINITE",
        }
    }
}

impl fmt::Display for IntersectionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of the curve-curve intersection computation.
#[derive(Debug, Error)]
#[error("intersection failed [{code}]: {message}")]
pub struct IntersectionError {
    pub code: IntersectionErrorCode,
    pub message: String,
}

impl IntersectionError {
    /// Creates a new intersection error.
    #[must_use]
    pub fn new(code: IntersectionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Errors related to profile operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ProfileError`].
pub type Result<T> = std::result::Result<T, ProfileError>;
