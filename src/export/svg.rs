use std::f64::consts::PI;
use std::fmt::Write;

use crate::geometry::blueprint::Blueprint;
use crate::geometry::blueprints::{Blueprints, Profile};
use crate::geometry::compound::CompoundBlueprint;
use crate::geometry::curve::{Curve, Curve2D};
use crate::geometry::shape::Shape2D;
use crate::math::Point2;

const HALF_TURN: f64 = PI + 1e-12;

/// Serialises a profile as the `d` attribute of an SVG `<path>`.
///
/// Each loop is written as `M` followed by `L` and `A` commands and closed
/// with `Z`. Loops of compound and disjoint profiles are concatenated, so
/// the `evenodd` fill rule renders holes correctly.
pub trait ToSvgPath {
    fn to_svg_path_d(&self) -> String;
}

impl ToSvgPath for Blueprint {
    fn to_svg_path_d(&self) -> String {
        let mut d = String::new();
        let start = self.first_point();
        let _ = write!(d, "M {} {}", num(start.x), num(start.y));
        for curve in self.curves() {
            match curve {
                Curve2D::Line(line) => {
                    let _ = write!(d, " L {} {}", num(line.end().x), num(line.end().y));
                }
                Curve2D::Arc(arc) => {
                    // SVG arcs are written at most half a turn long.
                    let pieces = if arc.sweep().abs() > HALF_TURN {
                        arc.split_at(&[0.5])
                    } else {
                        vec![arc.clone()]
                    };
                    for piece in &pieces {
                        arc_command(&mut d, piece.radius(), piece.sweep(), &piece.last_point());
                    }
                }
            }
        }
        d.push_str(" Z");
        d
    }
}

fn arc_command(d: &mut String, radius: f64, sweep: f64, end: &Point2) {
    let large = u8::from(sweep.abs() > HALF_TURN);
    let positive = u8::from(sweep > 0.0);
    let r = num(radius);
    let _ = write!(d, " A {r} {r} 0 {large} {positive} {} {}", num(end.x), num(end.y));
}

impl ToSvgPath for CompoundBlueprint {
    fn to_svg_path_d(&self) -> String {
        join(self.blueprints().iter().map(ToSvgPath::to_svg_path_d))
    }
}

impl ToSvgPath for Profile {
    fn to_svg_path_d(&self) -> String {
        match self {
            Self::Simple(b) => b.to_svg_path_d(),
            Self::Compound(c) => c.to_svg_path_d(),
        }
    }
}

impl ToSvgPath for Blueprints {
    fn to_svg_path_d(&self) -> String {
        join(self.iter().map(ToSvgPath::to_svg_path_d))
    }
}

impl ToSvgPath for Shape2D {
    fn to_svg_path_d(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Single(b) => b.to_svg_path_d(),
            Self::WithHoles(c) => c.to_svg_path_d(),
            Self::Disjoint(bs) => bs.to_svg_path_d(),
        }
    }
}

/// Wraps a shape in a standalone `<svg>` document.
///
/// The `viewBox` is the shape's bounding box grown by `margin` on every
/// side. The path is flipped vertically so that the y axis points up.
#[must_use]
pub fn to_svg(shape: &Shape2D, margin: f64) -> String {
    let bb = shape.bounding_box();
    let (x, y, w, h) = if bb.is_empty() {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        (
            bb.min.x - margin,
            -bb.max.y - margin,
            bb.width() + 2.0 * margin,
            bb.height() + 2.0 * margin,
        )
    };
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        num(x),
        num(y),
        num(w),
        num(h)
    );
    if !shape.is_empty() {
        let _ = writeln!(
            out,
            r#"  <path d="{}" transform="scale(1,-1)" fill="none" stroke="black" fill-rule="evenodd"/>"#,
            shape.to_svg_path_d()
        );
    }
    out.push_str("</svg>\n");
    out
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

/// Shortest decimal form, rounded to 1e-9 to hide floating point noise.
fn num(v: f64) -> String {
    let rounded = (v * 1e9).round() / 1e9;
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded}")
    }
}
