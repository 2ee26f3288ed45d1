use geo_types::{coord, Coord};

use super::{LineSegment, Shape};
use crate::geo_types::{lerp_coord, PointDistance};

/// Signed distance from `point` to the closest point on `segment`.
///
/// The magnitude is the point-to-segment distance. The sign is that of the offset
/// from the segment's infinite line along its left normal: negative on the right of
/// travel, positive on the left. Points exactly on the line count as positive.
/// Returns `None` for a zero-length segment.
pub fn segment_signed_distance(segment: &LineSegment, point: &Coord<f64>) -> Option<f64> {
    let (p1, p2) = (segment.start, segment.end);
    let delta = p2 - p1;

    let normal = coord! {x: p1.y - p2.y, y: p2.x - p1.x};
    let length = normal.length();
    if length <= 0.0 {
        return None;
    }
    let normal = normal / length;

    let offset = normal.x * (point.x - p1.x) + normal.y * (point.y - p1.y);
    let foot = *point - normal * offset;

    // Measure along whichever axis has the larger span. When both spans are tiny
    // this still divides by a very small number; the clamp keeps t usable.
    let t = if delta.x.abs() > delta.y.abs() {
        (foot.x - p1.x) / delta.x
    } else {
        (foot.y - p1.y) / delta.y
    };
    let t = t.clamp(0.0, 1.0);

    let closest = lerp_coord(p1, p2, t);
    Some(point.distance(&closest).copysign(offset))
}

impl Shape {
    /// Signed distance to the nearest segment: negative on the right of travel,
    /// positive on the left.
    /// `None` for a shape with no (non-degenerate) segments.
    pub fn signed_distance(&self, point: &Coord<f64>) -> Option<f64> {
        self.segments
            .iter()
            .filter_map(|seg| segment_signed_distance(seg, point))
            .fold(None, |closest: Option<f64>, dist| match closest {
                Some(best) if best.abs() <= dist.abs() => Some(best),
                _ => Some(dist),
            })
    }
}

/// Free-function form of [`Shape::signed_distance`].
pub fn distance_to_shape(point: &Coord<f64>, shape: &Shape) -> Option<f64> {
    shape.signed_distance(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo_types::{Line, Rect};

    /// Clockwise in a y-up frame.
    fn square() -> Shape {
        Shape::from_svg_path("M 0 0 V 100 H 100 V 0 Z").unwrap()
    }

    #[test]
    fn test_square_sign_convention() {
        let shape = square();
        let inside = distance_to_shape(&coord! {x: 50.0, y: 50.0}, &shape).unwrap();
        assert_relative_eq!(inside, -50.0, epsilon = 1e-9);
        let outside = distance_to_shape(&coord! {x: 150.0, y: 50.0}, &shape).unwrap();
        assert_relative_eq!(outside, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rectangle_interior_is_positive() {
        let rect = Shape::rectangle(&Rect::new(
            coord! {x: 0.0, y: 0.0},
            coord! {x: 100.0, y: 100.0},
        ));
        for p in [
            coord! {x: 10.0, y: 30.0},
            coord! {x: -20.0, y: 50.0},
            coord! {x: 99.0, y: 1.0},
        ] {
            assert_relative_eq!(
                rect.signed_distance(&p).unwrap(),
                -square().signed_distance(&p).unwrap(),
                epsilon = 1e-9
            );
        }
        assert!(rect.signed_distance(&coord! {x: 50.0, y: 50.0}).unwrap() > 0.0);
    }

    #[test]
    fn test_reversed_flips_sign() {
        let p = coord! {x: 20.0, y: 70.0};
        let d = square().signed_distance(&p).unwrap();
        let r = square().reversed().signed_distance(&p).unwrap();
        assert_relative_eq!(d, -r, epsilon = 1e-9);
    }

    #[test]
    fn test_clamps_to_segment_ends() {
        // Past the end of the segment the closest point is the endpoint,
        // not the foot on the infinite line.
        let seg = Line::new(coord! {x: 0.0, y: 0.0}, coord! {x: 10.0, y: 0.0});
        let d = segment_signed_distance(&seg, &coord! {x: 13.0, y: 4.0}).unwrap();
        assert_relative_eq!(d, 5.0, epsilon = 1e-9);
        let d = segment_signed_distance(&seg, &coord! {x: -3.0, y: -4.0}).unwrap();
        assert_relative_eq!(d, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_diagonal_segment() {
        let seg = Line::new(coord! {x: 0.0, y: 0.0}, coord! {x: 10.0, y: 10.0});
        let d = segment_signed_distance(&seg, &coord! {x: 10.0, y: 0.0}).unwrap();
        assert_relative_eq!(d, -(50.0f64).sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_empty_and_degenerate() {
        assert_eq!(Shape::default().signed_distance(&coord! {x: 0.0, y: 0.0}), None);
        let dot = Shape::new(vec![Line::new(
            coord! {x: 1.0, y: 1.0},
            coord! {x: 1.0, y: 1.0},
        )]);
        assert_eq!(dot.signed_distance(&coord! {x: 0.0, y: 0.0}), None);
    }

    #[test]
    fn test_near_degenerate_segment() {
        // Both spans are far below any plotting resolution. The result is still
        // finite and equals the distance to the (practically coincident) endpoints,
        // while the sign keeps following the segment's normal.
        let seg = Line::new(coord! {x: 0.0, y: 0.0}, coord! {x: 1e-12, y: 1e-12});
        let d = segment_signed_distance(&seg, &coord! {x: 5.0, y: 0.0}).unwrap();
        assert!(d.is_finite());
        assert_relative_eq!(d, -5.0, epsilon = 1e-9);
        let d = segment_signed_distance(&seg, &coord! {x: 0.0, y: 5.0}).unwrap();
        assert_relative_eq!(d, 5.0, epsilon = 1e-9);

        // Spans of comparable, small size on both axes.
        let seg = Line::new(coord! {x: 0.0, y: 0.0}, coord! {x: 3e-9, y: -2e-9});
        let d = segment_signed_distance(&seg, &coord! {x: 0.0, y: 2.0}).unwrap();
        assert!(d.is_finite());
        assert_relative_eq!(d.abs(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_open_polyline_near_itself() {
        let shape = Shape::from_svg_path("M 0 0 l 10 0").unwrap();
        let d = shape.signed_distance(&coord! {x: 5.0, y: -1.0}).unwrap();
        assert_relative_eq!(d, -1.0, epsilon = 1e-9);
    }
}
