use crate::error::{GeometryError, Result};
use crate::geometry::blueprint::Blueprint;
use crate::geometry::blueprints::{Blueprints, Profile};
use crate::geometry::compound::CompoundBlueprint;
use crate::geometry::curve::{Arc2D, Curve2D};
use crate::geometry::shape::Shape2D;
use crate::math::{Matrix3, Point2, Vector2};

use super::{Mirror, MirrorMode, Rotate, Scale, Stretch, Translate};

/// A profile value that can be mapped by a planar affine transform.
///
/// Every method returns a new value; the receiver is left untouched.
pub trait Transformable: Sized {
    /// Applies a 3x3 homogeneous matrix.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Unsupported` when the matrix would turn a
    /// circular arc into an elliptical one.
    fn transformed(&self, matrix: &Matrix3) -> Result<Self>;

    /// Moves by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Never fails for finite input; see [`Transformable::transformed`].
    fn translate(&self, dx: f64, dy: f64) -> Result<Self> {
        Translate::new(dx, dy).execute(self)
    }

    /// Rotates counter-clockwise by `angle_deg` degrees about `center`.
    ///
    /// # Errors
    ///
    /// Never fails for finite input; see [`Transformable::transformed`].
    fn rotate(&self, angle_deg: f64, center: Point2) -> Result<Self> {
        Rotate::new(angle_deg, center).execute(self)
    }

    /// Scales uniformly by `factor` about `center`.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero factor.
    fn scale(&self, factor: f64, center: Point2) -> Result<Self> {
        Scale::new(factor, center).execute(self)
    }

    /// Reflects through a point or across a line.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero line direction.
    fn mirror(&self, mode: MirrorMode) -> Result<Self> {
        Mirror::new(mode).execute(self)
    }

    /// Scales by `ratio` along `direction`, keeping the line through `origin`
    /// perpendicular to it fixed.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive ratio or zero direction, and
    /// `GeometryError::Unsupported` for arcs when `ratio != 1`.
    fn stretch(&self, ratio: f64, direction: Vector2, origin: Point2) -> Result<Self> {
        Stretch::new(ratio, direction, origin).execute(self)
    }
}

/// Applies an arbitrary 3x3 transformation matrix to a profile.
pub struct GeneralTransform {
    matrix: Matrix3,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Executes the transformation, returning a transformed copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix cannot be applied to an arc exactly.
    pub fn execute<T: Transformable>(&self, target: &T) -> Result<T> {
        target.transformed(&self.matrix)
    }
}

/// Transforms a point by a 3x3 homogeneous matrix.
pub(crate) fn transform_point(matrix: &Matrix3, p: &Point2) -> Point2 {
    matrix.transform_point(p)
}

/// Transforms a direction vector by a 3x3 matrix (ignoring translation).
pub(crate) fn transform_vector(matrix: &Matrix3, v: &Vector2) -> Vector2 {
    matrix.transform_vector(v)
}

/// Uniform scale of the linear part and whether it reflects, or `None` if
/// the matrix is not a similarity.
fn similarity(matrix: &Matrix3) -> Option<(f64, bool)> {
    let col_x = transform_vector(matrix, &Vector2::x());
    let col_y = transform_vector(matrix, &Vector2::y());
    let (lx, ly) = (col_x.norm(), col_y.norm());
    let scale = lx.max(ly);
    if scale < f64::EPSILON {
        return None;
    }
    let orthogonal = col_x.dot(&col_y).abs() <= 1e-9 * scale * scale;
    let uniform = (lx - ly).abs() <= 1e-9 * scale;
    (orthogonal && uniform).then(|| (scale, crate::math::cross_2d(&col_x, &col_y) < 0.0))
}

impl Transformable for Curve2D {
    fn transformed(&self, matrix: &Matrix3) -> Result<Self> {
        match self {
            Self::Line(line) => Ok(Self::line(
                transform_point(matrix, line.start()),
                transform_point(matrix, line.end()),
            )),
            Self::Arc(arc) => {
                let Some((scale, reflects)) = similarity(matrix) else {
                    return Err(GeometryError::Unsupported(
                        "non-uniform transform of a circular arc".into(),
                    )
                    .into());
                };
                let start_dir = Vector2::new(arc.start_angle().cos(), arc.start_angle().sin());
                let mapped = transform_vector(matrix, &start_dir);
                let sweep = if reflects { -arc.sweep() } else { arc.sweep() };
                Ok(Arc2D::new(
                    transform_point(matrix, arc.center()),
                    arc.radius() * scale,
                    mapped.y.atan2(mapped.x),
                    sweep,
                )
                .into())
            }
        }
    }
}

impl Transformable for Blueprint {
    fn transformed(&self, matrix: &Matrix3) -> Result<Self> {
        let curves = self
            .curves()
            .iter()
            .map(|c| c.transformed(matrix))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_closed_curves(curves))
    }
}

impl Transformable for CompoundBlueprint {
    fn transformed(&self, matrix: &Matrix3) -> Result<Self> {
        let loops = self
            .blueprints()
            .iter()
            .map(|b| b.transformed(matrix))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_loops(loops))
    }
}

impl Transformable for Profile {
    fn transformed(&self, matrix: &Matrix3) -> Result<Self> {
        Ok(match self {
            Self::Simple(b) => Self::Simple(b.transformed(matrix)?),
            Self::Compound(c) => Self::Compound(c.transformed(matrix)?),
        })
    }
}

impl Transformable for Blueprints {
    fn transformed(&self, matrix: &Matrix3) -> Result<Self> {
        let profiles = self
            .iter()
            .map(|p| p.transformed(matrix))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(profiles))
    }
}

impl Transformable for Shape2D {
    fn transformed(&self, matrix: &Matrix3) -> Result<Self> {
        Ok(match self {
            Self::Empty => Self::Empty,
            Self::Single(b) => Self::Single(b.transformed(matrix)?),
            Self::WithHoles(c) => Self::WithHoles(c.transformed(matrix)?),
            Self::Disjoint(bs) => Self::Disjoint(bs.transformed(matrix)?),
        })
    }
}
