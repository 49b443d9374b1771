use crate::error::{GeometryError, OperationError, Result};
use crate::math::{Matrix3, Point2, Vector2};

use super::general::{GeneralTransform, Transformable};

/// Scales a profile along one direction only.
///
/// Points on the line through `origin` perpendicular to `direction` stay
/// fixed; distances along `direction` are multiplied by `ratio`. Circular
/// arcs do not survive a ratio other than one.
pub struct Stretch {
    ratio: f64,
    direction: Vector2,
    origin: Point2,
}

impl Stretch {
    /// Creates a new `Stretch` operation.
    #[must_use]
    pub fn new(ratio: f64, direction: Vector2, origin: Point2) -> Self {
        Self {
            ratio,
            direction,
            origin,
        }
    }

    /// The homogeneous matrix of the stretch.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive ratio or a zero direction.
    pub fn matrix(&self) -> Result<Matrix3> {
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "stretch ratio must be positive, got {}",
                self.ratio
            ))
            .into());
        }
        let n = self.direction.norm();
        if n < f64::EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        let d = self.direction / n;
        let k = self.ratio - 1.0;
        #[rustfmt::skip]
        let linear = Matrix3::new(
            1.0 + k * d.x * d.x, k * d.x * d.y, 0.0,
            k * d.x * d.y, 1.0 + k * d.y * d.y, 0.0,
            0.0, 0.0, 1.0,
        );
        let c = self.origin.coords;
        Ok(Matrix3::new_translation(&c) * linear * Matrix3::new_translation(&(-c)))
    }

    /// Executes the stretch, returning a stretched copy.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Unsupported` if the target holds arcs and the
    /// ratio is not one.
    pub fn execute<T: Transformable>(&self, target: &T) -> Result<T> {
        GeneralTransform::new(self.matrix()?).execute(target)
    }
}
