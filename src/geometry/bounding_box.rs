use crate::math::Point2;

/// An axis-aligned bounding box in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl BoundingBox2D {
    /// Creates a box from its corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// An empty box that absorbs anything merged into it.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing all `points`.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        points.iter().fold(Self::empty(), |bb, p| bb.including(p))
    }

    /// Returns `true` when nothing has been merged into the box.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Box grown to include `p`.
    #[must_use]
    pub fn including(self, p: &Point2) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Union of two boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Returns `true` when the boxes are separated by more than `tolerance`
    /// along some axis. This is the cheap exclusion test run before any curve
    /// intersection.
    #[must_use]
    pub fn is_out(&self, other: &Self, tolerance: f64) -> bool {
        self.min.x > other.max.x + tolerance
            || self.max.x < other.min.x - tolerance
            || self.min.y > other.max.y + tolerance
            || self.max.y < other.min.y - tolerance
    }

    /// Whether `p` lies inside the box inflated by `tolerance`.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, tolerance: f64) -> bool {
        p.x >= self.min.x - tolerance
            && p.x <= self.max.x + tolerance
            && p.y >= self.min.y - tolerance
            && p.y <= self.max.y + tolerance
    }

    /// Whether `other` fits inside this box inflated by `tolerance`.
    #[must_use]
    pub fn contains_box(&self, other: &Self, tolerance: f64) -> bool {
        self.contains_point(&other.min, tolerance) && self.contains_point(&other.max, tolerance)
    }

    /// Width along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    /// Tolerance-based equality of both corners.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        crate::math::points_equal(&self.min, &other.min, tolerance)
            && crate::math::points_equal(&self.max, &other.max, tolerance)
    }
}
