//! Letterforms as packing boundaries.
//!
//! The packer doesn't care where a boundary came from, so glyphs sit behind the
//! [`GlyphSource`] trait. [`PathGlyphs`] holds outlines supplied as path data (handy
//! for hand-drawn letters and tests); with the `fonts` feature, [`FontGlyphSource`]
//! pulls real outlines out of a font file via font-kit.
use std::collections::HashMap;

use crate::errors::{GlyphError, ParseError};
use crate::shape::Shape;

pub trait GlyphSource {
    /// Outline for `ch` in page space, wound so the inside measures positive.
    fn glyph(&self, ch: char) -> Result<Shape, GlyphError>;
}

/// Glyphs given directly as outlines.
#[derive(Clone, Debug, Default)]
pub struct PathGlyphs {
    glyphs: HashMap<char, Shape>,
}

impl PathGlyphs {
    pub fn new() -> Self {
        PathGlyphs::default()
    }

    pub fn insert(&mut self, ch: char, shape: Shape) -> &mut Self {
        self.glyphs.insert(ch, shape);
        self
    }

    /// Parse `data` as path mini-language and register it for `ch`.
    pub fn insert_path(&mut self, ch: char, data: &str) -> Result<&mut Self, ParseError> {
        let shape = Shape::from_svg_path(data)?;
        Ok(self.insert(ch, shape))
    }
}

impl GlyphSource for PathGlyphs {
    fn glyph(&self, ch: char) -> Result<Shape, GlyphError> {
        let shape = self.glyphs.get(&ch).ok_or(GlyphError::GlyphNotFound(ch))?;
        if shape.is_empty() {
            return Err(GlyphError::EmptyOutline(ch));
        }
        Ok(shape.clone())
    }
}

#[cfg(feature = "fonts")]
pub use font::FontGlyphSource;

#[cfg(feature = "fonts")]
mod font {
    use std::path::Path;
    use std::sync::Arc;

    use font_kit::font::Font;
    use font_kit::hinting::HintingOptions;
    use font_kit::outline::OutlineSink;
    use geo_types::{coord, Coord, Line};
    use pathfinder_geometry::line_segment::LineSegment2F;
    use pathfinder_geometry::vector::Vector2F;

    use super::GlyphSource;
    use crate::errors::GlyphError;
    use crate::path::{flatten_cubic, flatten_quadratic};
    use crate::shape::{LineSegment, Shape};

    fn to_coord(v: Vector2F) -> Coord<f64> {
        coord! {x: f64::from(v.x()), y: f64::from(v.y())}
    }

    /// Collects a font-kit outline as flattened segments, in font units (y up).
    #[derive(Default)]
    struct SegmentSink {
        segments: Vec<LineSegment>,
        pen: Coord<f64>,
        contour_start: Coord<f64>,
    }

    impl OutlineSink for SegmentSink {
        fn move_to(&mut self, to: Vector2F) {
            self.pen = to_coord(to);
            self.contour_start = self.pen;
        }

        fn line_to(&mut self, to: Vector2F) {
            let to = to_coord(to);
            self.segments.push(Line::new(self.pen, to));
            self.pen = to;
        }

        fn quadratic_curve_to(&mut self, ctrl: Vector2F, to: Vector2F) {
            let to = to_coord(to);
            self.segments
                .extend(flatten_quadratic(self.pen, to_coord(ctrl), to));
            self.pen = to;
        }

        fn cubic_curve_to(&mut self, ctrl: LineSegment2F, to: Vector2F) {
            let to = to_coord(to);
            self.segments.extend(flatten_cubic(
                self.pen,
                to_coord(ctrl.from()),
                to_coord(ctrl.to()),
                to,
            ));
            self.pen = to;
        }

        fn close(&mut self) {
            if self.pen != self.contour_start {
                self.segments.push(Line::new(self.pen, self.contour_start));
            }
            self.pen = self.contour_start;
        }
    }

    /// Glyph outlines from a TrueType/OpenType font.
    ///
    /// TrueType outer contours run clockwise with y up. Mirroring them into page
    /// space turns that into the winding the packer fills.
    /// Fonts that wind the other way (most CFF/PostScript outlines) need
    /// [`FontGlyphSource::reverse_winding`].
    #[derive(Clone)]
    pub struct FontGlyphSource {
        font: Font,
        hinting: HintingOptions,
        reverse: bool,
    }

    impl FontGlyphSource {
        pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GlyphError> {
            let font = Font::from_path(path.as_ref(), 0)
                .map_err(|e| GlyphError::FontError(e.to_string()))?;
            Ok(Self::from_font(font))
        }

        pub fn from_bytes(data: Vec<u8>) -> Result<Self, GlyphError> {
            let font = Font::from_bytes(Arc::new(data), 0)
                .map_err(|e| GlyphError::FontError(e.to_string()))?;
            Ok(Self::from_font(font))
        }

        pub fn from_font(font: Font) -> Self {
            FontGlyphSource {
                font,
                hinting: HintingOptions::None,
                reverse: false,
            }
        }

        pub fn reverse_winding(&mut self, reverse: bool) -> &mut Self {
            self.reverse = reverse;
            self
        }

        pub fn hint(&mut self, hinting: HintingOptions) -> &mut Self {
            self.hinting = hinting;
            self
        }
    }

    impl GlyphSource for FontGlyphSource {
        fn glyph(&self, ch: char) -> Result<Shape, GlyphError> {
            let id = self
                .font
                .glyph_for_char(ch)
                .ok_or(GlyphError::GlyphNotFound(ch))?;
            let mut sink = SegmentSink::default();
            self.font
                .outline(id, self.hinting, &mut sink)
                .map_err(|e| GlyphError::FontError(e.to_string()))?;
            if sink.segments.is_empty() {
                return Err(GlyphError::EmptyOutline(ch));
            }
            let shape = Shape::new(sink.segments).scale(1.0, -1.0);
            Ok(if self.reverse { shape.reversed() } else { shape })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_path_glyphs() {
        let mut glyphs = PathGlyphs::new();
        glyphs
            .insert_path('L', "M 0 0 H 20 V 80 H 60 V 100 H 0 Z")
            .unwrap()
            .insert('.', Shape::default());
        let l = glyphs.glyph('L').unwrap();
        assert_eq!(l.len(), 6);
        assert!(l.signed_distance(&coord! {x: 10.0, y: 50.0}).unwrap() > 0.0);
        assert!(l.signed_distance(&coord! {x: 40.0, y: 40.0}).unwrap() < 0.0);
        assert!(matches!(glyphs.glyph('.'), Err(GlyphError::EmptyOutline('.'))));
        assert!(matches!(glyphs.glyph('K'), Err(GlyphError::GlyphNotFound('K'))));
    }

    #[test]
    fn test_bad_path_glyph() {
        let mut glyphs = PathGlyphs::new();
        assert_eq!(
            glyphs.insert_path('x', "M 0 0 q 1 1 2 2").err(),
            Some(ParseError::UnknownCommand('q'))
        );
    }
}
