use geo_types::{Coord, Line};

use crate::geo_types::lerp_coord;
use crate::shape::LineSegment;

/// Chords per curve. Fixed, not curvature-aware: tight curves will show facets,
/// which is fine at plotter resolution.
pub const BEZIER_SUBDIVISIONS: usize = 10;

/// Point on a cubic at `t`, by repeated linear interpolation (De Casteljau).
pub fn cubic_point(
    p1: Coord<f64>,
    p2: Coord<f64>,
    p3: Coord<f64>,
    p4: Coord<f64>,
    t: f64,
) -> Coord<f64> {
    let p12 = lerp_coord(p1, p2, t);
    let p23 = lerp_coord(p2, p3, t);
    let p34 = lerp_coord(p3, p4, t);

    let p123 = lerp_coord(p12, p23, t);
    let p234 = lerp_coord(p23, p34, t);

    lerp_coord(p123, p234, t)
}

/// Flatten a cubic into [`BEZIER_SUBDIVISIONS`] chords running from `p1` to `p4`.
pub fn flatten_cubic(
    p1: Coord<f64>,
    p2: Coord<f64>,
    p3: Coord<f64>,
    p4: Coord<f64>,
) -> Vec<LineSegment> {
    let points: Vec<Coord<f64>> = (0..=BEZIER_SUBDIVISIONS)
        .map(|i| match i {
            0 => p1,
            BEZIER_SUBDIVISIONS => p4,
            _ => cubic_point(p1, p2, p3, p4, i as f64 / BEZIER_SUBDIVISIONS as f64),
        })
        .collect();
    points.windows(2).map(|w| Line::new(w[0], w[1])).collect()
}

/// Quadratics are degree-elevated to the equivalent cubic and flattened the same way.
pub fn flatten_quadratic(p1: Coord<f64>, ctrl: Coord<f64>, p2: Coord<f64>) -> Vec<LineSegment> {
    let c1 = p1 + (ctrl - p1) * (2.0 / 3.0);
    let c2 = p2 + (ctrl - p2) * (2.0 / 3.0);
    flatten_cubic(p1, c1, c2, p2)
}
