use crate::error::{GeometryError, Result};
use crate::math::{Matrix3, Point2, Vector2};

use super::general::{GeneralTransform, Transformable};

/// What a profile is reflected through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MirrorMode {
    /// Point reflection, equivalent to a half turn about the point.
    Point(Point2),
    /// Reflection across the line through `origin` along `direction`.
    Line { origin: Point2, direction: Vector2 },
}

/// Mirrors a profile through a point or across a line.
pub struct Mirror {
    mode: MirrorMode,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(mode: MirrorMode) -> Self {
        Self { mode }
    }

    /// The homogeneous matrix of the reflection.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` for a zero line direction.
    pub fn matrix(&self) -> Result<Matrix3> {
        let (origin, linear) = match self.mode {
            MirrorMode::Point(p) => (p, Matrix3::new_scaling(-1.0)),
            MirrorMode::Line { origin, direction } => {
                let n = direction.norm();
                if n < f64::EPSILON {
                    return Err(GeometryError::ZeroVector.into());
                }
                let d = direction / n;
                let (xx, xy, yy) = (d.x * d.x, d.x * d.y, d.y * d.y);
                #[rustfmt::skip]
                let linear = Matrix3::new(
                    2.0 * xx - 1.0, 2.0 * xy, 0.0,
                    2.0 * xy, 2.0 * yy - 1.0, 0.0,
                    0.0, 0.0, 1.0,
                );
                (origin, linear)
            }
        };
        let c = origin.coords;
        Ok(Matrix3::new_translation(&c) * linear * Matrix3::new_translation(&(-c)))
    }

    /// Executes the reflection, returning a mirrored copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror line is degenerate.
    pub fn execute<T: Transformable>(&self, target: &T) -> Result<T> {
        GeneralTransform::new(self.matrix()?).execute(target)
    }
}
