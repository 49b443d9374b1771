pub mod arc_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix for the XY plane.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Point identity tolerance used by the boolean engine.
pub const TOLERANCE: f64 = 1e-9;

/// Number of decimal digits used to bucket points in hash lookups.
pub const HASH_DIGITS: i32 = 6;

/// Precision settings shared by intersection, segmentation and assembly.
///
/// `hash_digits` controls the spatial hash cell (`10^-hash_digits`). The cell
/// is never smaller than `tolerance`, so a tolerance-equal pair of points
/// always lands in the same or an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    pub tolerance: f64,
    pub hash_digits: i32,
}

impl Precision {
    /// Creates a precision setting, clamping `hash_digits` so that the hash
    /// cell is at least as large as `tolerance`.
    #[must_use]
    pub fn new(tolerance: f64, hash_digits: i32) -> Self {
        let tolerance = tolerance.abs().max(f64::EPSILON);
        #[allow(clippy::cast_possible_truncation)]
        let max_digits = (-tolerance.log10()).floor() as i32;
        Self {
            tolerance,
            hash_digits: hash_digits.min(max_digits),
        }
    }

    /// Returns a copy with a different tolerance, keeping the hash digits
    /// consistent with it.
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self::new(tolerance, self.hash_digits)
    }

    /// Size of one hash cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        10f64.powi(-self.hash_digits)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(TOLERANCE, HASH_DIGITS)
    }
}

/// Tolerance-based point equality. Points have no other notion of identity.
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
