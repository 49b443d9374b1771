use crate::error::{OperationError, Result};
use crate::math::{Matrix3, Point2};

use super::general::{GeneralTransform, Transformable};

/// Scales a profile uniformly about a center point.
pub struct Scale {
    factor: f64,
    center: Point2,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(factor: f64, center: Point2) -> Self {
        Self { factor, center }
    }

    /// The homogeneous matrix of the scaling.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is zero or not finite.
    pub fn matrix(&self) -> Result<Matrix3> {
        if !self.factor.is_finite() || self.factor.abs() < f64::EPSILON {
            return Err(OperationError::InvalidInput(format!(
                "scale factor must be finite and non-zero, got {}",
                self.factor
            ))
            .into());
        }
        let c = self.center.coords;
        let t_neg = Matrix3::new_translation(&(-c));
        let s = Matrix3::new_scaling(self.factor);
        let t_pos = Matrix3::new_translation(&c);
        Ok(t_pos * s * t_neg)
    }

    /// Executes the scaling, returning a scaled copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor is invalid.
    pub fn execute<T: Transformable>(&self, target: &T) -> Result<T> {
        GeneralTransform::new(self.matrix()?).execute(target)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Blueprint, CompoundBlueprint};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn doubling_quadruples_area() {
        let circle = Blueprint::circle(Point2::new(1.0, 0.0), 1.0).unwrap();
        let big = Scale::new(2.0, Point2::origin()).execute(&circle).unwrap();
        assert_abs_diff_eq!(big.area(), 4.0 * PI, epsilon = 1e-9);
        assert!(big.contains_point(&Point2::new(2.0, 0.0)));
    }

    #[test]
    fn compound_keeps_its_hole() {
        let outer = Blueprint::rectangle(10.0, 10.0).unwrap();
        let hole = Blueprint::circle(Point2::origin(), 2.0).unwrap();
        let plate = CompoundBlueprint::new(vec![outer, hole]).unwrap();
        let half = plate.scale(0.5, Point2::origin()).unwrap();
        assert_eq!(half.holes().len(), 1);
        assert_abs_diff_eq!(half.area(), 25.0 - PI, epsilon = 1e-9);
    }

    #[test]
    fn zero_factor_is_rejected() {
        let rect = Blueprint::rectangle(1.0, 1.0).unwrap();
        assert!(rect.scale(0.0, Point2::origin()).is_err());
    }
}
