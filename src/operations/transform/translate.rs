use crate::error::Result;
use crate::math::{Matrix3, Vector2};

use super::general::{GeneralTransform, Transformable};

/// Translates a profile by a displacement vector.
pub struct Translate {
    dx: f64,
    dy: f64,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// The homogeneous matrix of the translation.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        Matrix3::new_translation(&Vector2::new(self.dx, self.dy))
    }

    /// Executes the translation, returning a moved copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be transformed.
    pub fn execute<T: Transformable>(&self, target: &T) -> Result<T> {
        GeneralTransform::new(self.matrix()).execute(target)
    }
}
