//! Shapes are ordered, directed polylines. The signed distance field is negative on
//! the right-hand side of travel (in a y-up frame) and positive on the left. The
//! packer fills the positive side, so a boundary outline in page space (y down)
//! runs clockwise as seen on screen, the way SVG editors usually draw it.
use geo::BoundingRect;
use geo_types::{coord, Coord, Line, LineString, MultiLineString, Rect};
use nalgebra::Affine2;

use crate::errors::{GeometryError, ParseError};
use crate::geo_types::matrix::{scale_matrix, translate_matrix, TransformSegment};
use crate::path;

/// Signed distance from a point to a [`Shape`].
pub mod distance;

pub use distance::distance_to_shape;

/// A directed segment. `start -> end` decides which side is inside.
pub type LineSegment = Line<f64>;

/// `(min, max)` corners of a shape's endpoints.
pub type BoundingBox = Rect<f64>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    segments: Vec<LineSegment>,
}

impl Shape {
    pub fn new(segments: Vec<LineSegment>) -> Self {
        Shape { segments }
    }

    /// Ring through `points`, with a final segment from the last point back to the first.
    pub fn from_points(points: &[Coord<f64>]) -> Self {
        let n = points.len();
        if n < 2 {
            return Shape::default();
        }
        Shape::new(
            (0..n)
                .map(|i| Line::new(points[i], points[(i + 1) % n]))
                .collect(),
        )
    }

    /// Ring where the last point already repeats the first one.
    pub fn from_closed_points(points: &[Coord<f64>]) -> Self {
        Shape::new(points.windows(2).map(|w| Line::new(w[0], w[1])).collect())
    }

    /// Rectangle outline, wound so its interior measures positive.
    pub fn rectangle(rect: &Rect<f64>) -> Self {
        let (min, max) = (rect.min(), rect.max());
        Shape::from_points(&[
            min,
            coord! {x: max.x, y: min.y},
            max,
            coord! {x: min.x, y: max.y},
        ])
    }

    /// Parse a path mini-language string (the contents of an SVG `d` attribute).
    pub fn from_svg_path(data: &str) -> Result<Self, ParseError> {
        path::parse_path(data)
    }

    /// Find the one `<path>` in an SVG document and parse it.
    pub fn from_svg_document(document: &str) -> Result<Self, ParseError> {
        let data = path::extract_path_data(document)?;
        path::parse_path(&data)
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn bounding_box(&self) -> Result<BoundingBox, GeometryError> {
        self.to_multi_line_string()
            .bounding_rect()
            .ok_or(GeometryError::EmptyShape)
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Shape {
        self.transformed(&translate_matrix(dx, dy))
    }

    pub fn scale(&self, sx: f64, sy: f64) -> Shape {
        self.transformed(&scale_matrix(sx, sy))
    }

    /// Scale uniformly (never stretching) so the shape is as large as possible while
    /// still fitting `target`, and center it there.
    ///
    /// The shape is moved to the origin before scaling and moved out again after,
    /// so scaling never happens about an off-center point. If one axis of the bounds
    /// has zero extent the other axis alone decides the scale.
    pub fn center_fit(&self, target: &Rect<f64>) -> Result<Shape, GeometryError> {
        let bbox = self.bounding_box()?;
        let (bw, bh) = (bbox.width(), bbox.height());
        let sx = target.width() / bw;
        let sy = target.height() / bh;
        let s = match (bw > 0.0, bh > 0.0) {
            (true, true) => sx.min(sy),
            (true, false) => sx,
            (false, true) => sy,
            (false, false) => return Err(GeometryError::DegenerateBounds),
        };
        let from = bbox.center();
        let to = target.center();
        Ok(self
            .translate(-from.x, -from.y)
            .scale(s, s)
            .translate(to.x, to.y))
    }

    /// Same outline, opposite winding. Flips the sign of the distance field, which
    /// fixes outlines that were drawn (or mirrored) the other way round.
    pub fn reversed(&self) -> Shape {
        Shape::new(
            self.segments
                .iter()
                .rev()
                .map(|seg| Line::new(seg.end, seg.start))
                .collect(),
        )
    }

    /// Even-odd containment: cast a ray toward +x and count crossings.
    /// Ignores winding entirely, so it also works on shapes of unknown orientation.
    pub fn contains(&self, point: &Coord<f64>) -> bool {
        let mut inside = false;
        for seg in &self.segments {
            let (p1, p2) = (seg.start, seg.end);
            if (p1.y < point.y && point.y <= p2.y) || (p2.y < point.y && point.y <= p1.y) {
                let d = p2 - p1;
                let t = d.x * (point.y - p1.y) / d.y - (point.x - p1.x);
                if t > 0.0 {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// One two-point linestring per segment, ready for [`geo`] algorithms or SVG output.
    pub fn to_multi_line_string(&self) -> MultiLineString<f64> {
        MultiLineString::new(
            self.segments
                .iter()
                .map(|seg| LineString::new(vec![seg.start, seg.end]))
                .collect(),
        )
    }

    fn transformed(&self, affine: &Affine2<f64>) -> Shape {
        Shape::new(
            self.segments
                .iter()
                .map(|seg| seg.transformed(affine))
                .collect(),
        )
    }
}

impl From<Vec<LineSegment>> for Shape {
    fn from(segments: Vec<LineSegment>) -> Self {
        Shape::new(segments)
    }
}

impl FromIterator<LineSegment> for Shape {
    fn from_iter<I: IntoIterator<Item = LineSegment>>(iter: I) -> Self {
        Shape::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_rect(w: f64, h: f64) -> Rect<f64> {
        Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: w, y: h})
    }

    #[test]
    fn test_bounding_box() {
        let shape = Shape::from_points(&[
            coord! {x: 3.0, y: -1.0},
            coord! {x: 7.0, y: 4.0},
            coord! {x: -2.0, y: 2.0},
        ]);
        let bbox = shape.bounding_box().unwrap();
        assert_eq!(bbox.min(), coord! {x: -2.0, y: -1.0});
        assert_eq!(bbox.max(), coord! {x: 7.0, y: 4.0});
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(
            Shape::default().bounding_box(),
            Err(GeometryError::EmptyShape)
        );
        assert_eq!(
            Shape::default().center_fit(&unit_rect(10.0, 10.0)),
            Err(GeometryError::EmptyShape)
        );
    }

    #[test]
    fn test_translate_and_scale_are_pure() {
        let shape = Shape::rectangle(&unit_rect(10.0, 5.0));
        let moved = shape.translate(5.0, -5.0).scale(2.0, 3.0);
        assert_eq!(shape.bounding_box().unwrap(), unit_rect(10.0, 5.0));
        let bbox = moved.bounding_box().unwrap();
        assert_eq!(bbox.min(), coord! {x: 10.0, y: -15.0});
        assert_eq!(bbox.max(), coord! {x: 30.0, y: 0.0});
    }

    #[test]
    fn test_center_fit_preserves_aspect() {
        let shape = Shape::rectangle(&unit_rect(20.0, 10.0)).translate(-7.0, 3.0);
        let target = Rect::new(coord! {x: 100.0, y: 100.0}, coord! {x: 300.0, y: 150.0});
        let fitted = shape.center_fit(&target).unwrap();
        let bbox = fitted.bounding_box().unwrap();
        // min(200/20, 50/10) = 5
        assert_relative_eq!(bbox.width(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.height(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.center().x, 200.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.center().y, 125.0, epsilon = 1e-9);
    }

    #[test]
    fn test_center_fit_flat_shape() {
        let line = Shape::new(vec![Line::new(
            coord! {x: 0.0, y: 5.0},
            coord! {x: 10.0, y: 5.0},
        )]);
        let fitted = line.center_fit(&unit_rect(40.0, 40.0)).unwrap();
        let bbox = fitted.bounding_box().unwrap();
        assert_relative_eq!(bbox.width(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(bbox.center().y, 20.0, epsilon = 1e-9);

        let dot = Shape::new(vec![Line::new(
            coord! {x: 1.0, y: 1.0},
            coord! {x: 1.0, y: 1.0},
        )]);
        assert_eq!(
            dot.center_fit(&unit_rect(40.0, 40.0)),
            Err(GeometryError::DegenerateBounds)
        );
    }

    #[test]
    fn test_reversed() {
        let shape = Shape::from_points(&[
            coord! {x: 0.0, y: 0.0},
            coord! {x: 0.0, y: 1.0},
            coord! {x: 1.0, y: 0.0},
        ]);
        let rev = shape.reversed();
        assert_eq!(rev.len(), 3);
        assert_eq!(rev.segments()[0].start, coord! {x: 0.0, y: 0.0});
        assert_eq!(rev.segments()[0].end, coord! {x: 1.0, y: 0.0});
        assert_eq!(rev.reversed(), shape);
    }

    #[test]
    fn test_closed_points() {
        let shape = Shape::from_closed_points(&[
            coord! {x: 0.0, y: 0.0},
            coord! {x: 0.0, y: 4.0},
            coord! {x: 4.0, y: 4.0},
            coord! {x: 0.0, y: 0.0},
        ]);
        assert_eq!(shape.len(), 3);
        assert!(Shape::from_points(&[coord! {x: 1.0, y: 1.0}]).is_empty());
    }

    #[test]
    fn test_contains_even_odd() {
        let outer = Shape::rectangle(&unit_rect(100.0, 100.0));
        let hole = Shape::rectangle(&Rect::new(
            coord! {x: 40.0, y: 40.0},
            coord! {x: 60.0, y: 60.0},
        ));
        let donut: Shape = outer
            .segments()
            .iter()
            .chain(hole.segments())
            .cloned()
            .collect();
        assert!(donut.contains(&coord! {x: 10.0, y: 10.0}));
        assert!(!donut.contains(&coord! {x: 50.0, y: 50.0}));
        assert!(!donut.contains(&coord! {x: 150.0, y: 50.0}));
    }
}
