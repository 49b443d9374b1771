use crate::error::Result;
use crate::math::{Matrix3, Point2};

use super::general::{GeneralTransform, Transformable};

/// Rotates a profile counter-clockwise about a center point.
pub struct Rotate {
    angle_deg: f64,
    center: Point2,
}

impl Rotate {
    /// Creates a new `Rotate` operation. The angle is in degrees.
    #[must_use]
    pub fn new(angle_deg: f64, center: Point2) -> Self {
        Self { angle_deg, center }
    }

    /// The homogeneous matrix of the rotation.
    #[must_use]
    pub fn matrix(&self) -> Matrix3 {
        let c = self.center.coords;
        let t_neg = Matrix3::new_translation(&(-c));
        let rot = Matrix3::new_rotation(self.angle_deg.to_radians());
        let t_pos = Matrix3::new_translation(&c);
        t_pos * rot * t_neg
    }

    /// Executes the rotation, returning a rotated copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be transformed.
    pub fn execute<T: Transformable>(&self, target: &T) -> Result<T> {
        GeneralTransform::new(self.matrix()).execute(target)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Blueprint, Curve, Orientation};
    use crate::math::points_equal;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quarter_turn_about_origin() {
        let rect = Blueprint::rectangle(4.0, 2.0).unwrap();
        let turned = Rotate::new(90.0, Point2::origin()).execute(&rect).unwrap();
        let bb = turned.bounding_box();
        assert_abs_diff_eq!(bb.width(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.height(), 4.0, epsilon = 1e-12);
        assert_eq!(turned.orientation(), rect.orientation());
    }

    #[test]
    fn rotation_about_center_keeps_the_center_fixed() {
        let center = Point2::new(1.0, 1.0);
        let circle = Blueprint::circle(Point2::new(3.0, 1.0), 1.0).unwrap();
        let turned = circle.rotate(180.0, center).unwrap();
        let bb = turned.bounding_box();
        assert!(points_equal(&bb.center(), &Point2::new(-1.0, 1.0), 1e-9));
        assert_eq!(turned.orientation(), Orientation::CounterClockwise);
    }

    #[test]
    fn rotated_arc_endpoints_follow_the_loop() {
        let pline = crate::geometry::Pline {
            vertices: vec![
                crate::geometry::PlineVertex::line(0.0, 0.0),
                crate::geometry::PlineVertex::new(2.0, 0.0, 1.0),
                crate::geometry::PlineVertex::line(2.0, 2.0),
            ],
        };
        let d = pline.to_blueprint().unwrap();
        let turned = d.rotate(45.0, Point2::new(1.0, 1.0)).unwrap();
        let curves = turned.curves();
        for i in 0..curves.len() {
            let next = &curves[(i + 1) % curves.len()];
            assert!(points_equal(&curves[i].last_point(), &next.first_point(), 1e-9));
        }
        assert_abs_diff_eq!(turned.area(), d.area(), epsilon = 1e-9);
    }
}
