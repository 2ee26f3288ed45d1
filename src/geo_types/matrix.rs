use geo::map_coords::MapCoords;
use geo_types::{coord, Coord, Line};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};

/// Helper to create a scaling matrix
pub fn scale_matrix(sx: f64, sy: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(
        sx, 0.0, 0.0, //
        0.0, sy, 0.0, //
        0.0, 0.0, 1.0,
    ))
}

/// Helper to create a translation matrix
pub fn translate_matrix(tx: f64, ty: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(
        1.0, 0.0, tx, //
        0.0, 1.0, ty, //
        0.0, 0.0, 1.0,
    ))
}

pub trait TransformSegment {
    fn xform_coord(xy: &Coord<f64>, affine: &Affine2<f64>) -> Coord<f64> {
        let out = affine * NPoint2::new(xy.x, xy.y);
        coord!(x: out.x, y: out.y)
    }

    fn transformed(&self, affine: &Affine2<f64>) -> Self;
}

impl TransformSegment for Line<f64> {
    fn transformed(&self, affine: &Affine2<f64>) -> Line<f64> {
        self.map_coords(|xy| Self::xform_coord(&xy, affine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_types::PointDistance;

    #[test]
    fn test_translate() {
        let tx = translate_matrix(10., 5.);
        let source = Line::new(coord! {x: 25., y: 25.}, coord! {x: 0., y: 0.});
        let out = source.transformed(&tx);
        assert!(out.start.distance(&coord! {x: 35., y: 30.}) < 1e-8);
        assert!(out.end.distance(&coord! {x: 10., y: 5.}) < 1e-8);
    }

    #[test]
    fn test_scale_keeps_direction() {
        let sx = scale_matrix(2., -1.);
        let out = Line::new(coord! {x: 1., y: 1.}, coord! {x: 3., y: 2.}).transformed(&sx);
        assert!(out.start.distance(&coord! {x: 2., y: -1.}) < 1e-8);
        assert!(out.end.distance(&coord! {x: 6., y: -2.}) < 1e-8);
    }
}
