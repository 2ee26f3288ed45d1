use geo_types::{coord, Coord, CoordNum, Rect};
use num_traits::real::Real;
use rand::Rng;

/// Affine helpers (translate/scale) built on nalgebra, used by the shape transforms.
pub mod matrix;

/// Trait that implements a distance function between two [`geo_types::Coord`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Coord`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Coord`]s.
    fn distance(&self, other: &Coord<T>) -> T;

    /// Treat a [`geo_types::Coord`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

impl<T> PointDistance<T> for Coord<T>
where
    T: CoordNum,
    T: Real,
{
    fn distance(&self, other: &Coord<T>) -> T {
        (*self - *other).length()
    }

    fn length(&self) -> T {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

/// Linear interpolation, `t=0` gives `a`, `t=1` gives `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise [`lerp`] between two coords.
pub fn lerp_coord(a: Coord<f64>, b: Coord<f64>, t: f64) -> Coord<f64> {
    coord! {x: lerp(a.x, b.x, t), y: lerp(a.y, b.y, t)}
}

/// A few things [`geo_types::Rect`] doesn't do for us, mostly for sampling domains.
pub trait RectExt {
    /// Shrink by a constant distance on all four sides. A margin larger than
    /// half the rect collapses that axis onto the center line.
    fn inset_by(&self, margin: f64) -> Rect<f64>;

    /// Uniform random point. X is drawn before Y, which packing determinism relies on.
    fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord<f64>;

    /// Distance from `point` to the nearest of the four edges. Negative outside.
    fn edge_clearance(&self, point: &Coord<f64>) -> f64;
}

impl RectExt for Rect<f64> {
    fn inset_by(&self, margin: f64) -> Rect<f64> {
        let center = self.center();
        let (x0, x1) = if self.width() > 2.0 * margin {
            (self.min().x + margin, self.max().x - margin)
        } else {
            (center.x, center.x)
        };
        let (y0, y1) = if self.height() > 2.0 * margin {
            (self.min().y + margin, self.max().y - margin)
        } else {
            (center.y, center.y)
        };
        Rect::new(coord! {x: x0, y: y0}, coord! {x: x1, y: y1})
    }

    fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord<f64> {
        let x = lerp(self.min().x, self.max().x, rng.gen::<f64>());
        let y = lerp(self.min().y, self.max().y, rng.gen::<f64>());
        coord! {x: x, y: y}
    }

    fn edge_clearance(&self, point: &Coord<f64>) -> f64 {
        (point.x - self.min().x)
            .min(self.max().x - point.x)
            .min(point.y - self.min().y)
            .min(self.max().y - point.y)
    }
}
