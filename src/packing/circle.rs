use geo_types::Coord;
use serde::{Deserialize, Serialize};

use crate::geo_types::PointDistance;

/// A placed circle. Packing never produces a radius of zero or less.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Coord<f64>, radius: f64) -> Self {
        Circle { center, radius }
    }

    /// Center-to-center distance minus both radii. Negative when they overlap,
    /// zero when tangent.
    pub fn gap(&self, other: &Circle) -> f64 {
        self.center.distance(&other.center) - self.radius - other.radius
    }

    /// True if the circles overlap by more than `tolerance`. Tangent circles,
    /// which packing produces all the time, don't count.
    pub fn overlaps(&self, other: &Circle, tolerance: f64) -> bool {
        self.gap(other) < -tolerance
    }

    /// Distance from `point` to the rim, negative inside.
    pub fn clearance(&self, point: &Coord<f64>) -> f64 {
        self.center.distance(point) - self.radius
    }

    /// Inclusive: a point exactly on the rim is inside.
    pub fn contains_point(&self, point: &Coord<f64>) -> bool {
        self.clearance(point) <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_gap_and_overlap() {
        let a = Circle::new(coord! {x: 0.0, y: 0.0}, 3.0);
        let b = Circle::new(coord! {x: 5.0, y: 0.0}, 2.0);
        assert_eq!(a.gap(&b), 0.0);
        assert!(!a.overlaps(&b, 1e-9));
        let c = Circle::new(coord! {x: 4.0, y: 0.0}, 2.0);
        assert!(a.overlaps(&c, 1e-9));
    }

    #[test]
    fn test_contains_point() {
        let a = Circle::new(coord! {x: 1.0, y: 1.0}, 2.0);
        assert!(a.contains_point(&coord! {x: 3.0, y: 1.0}));
        assert!(!a.contains_point(&coord! {x: 3.5, y: 1.0}));
        assert_eq!(a.clearance(&coord! {x: 1.0, y: 5.0}), 2.0);
    }
}
