//! Shape-constrained circle packing for pen-plotter art.
//!
//! Fill a page margin, a polygon, or a handful of letterforms with as many
//! non-overlapping circles as will fit. The pipeline is small:
//!
//! 1. [`path`] turns SVG path data (or a whole single-path SVG file) into a [`shape::Shape`],
//!    flattening curves into straight chords as it goes.
//! 2. [`shape`] moves/scales/fits those outlines, and answers "how far is this point
//!    from the outline, and which side is it on?"
//! 3. [`packing`] throws random darts at the region and grows a circle wherever one
//!    lands in open space.
//! 4. [`svg`] writes the result out as plain strokes for the plotter.
//!
//! Randomness is always handed in by the caller, so a seeded RNG gives the same
//! drawing every time.
//!
//! ```rust
//! use aoer_circle_pack::prelude::*;
//! use geo_types::{coord, Rect};
//! use rand::prelude::*;
//!
//! let letter = Shape::from_svg_path("M 0 0 H 20 V 80 H 60 V 100 H 0 Z").unwrap();
//! let page = PageConfig::letter();
//! let letter = letter.center_fit(&page.domain()).unwrap();
//!
//! let config = PackerConfig::new(page.page(), 100, 36.0, 1000);
//! let packer = CirclePacker::new(config, Boundary::Contained(vec![letter.clone()])).unwrap();
//! let packing = packer.pack(&mut SmallRng::seed_from_u64(12345));
//!
//! let mut doc = PlotDocument::new(page.size().0, page.size().1);
//! doc.draw_shape(&letter).draw_circles(&packing.circles);
//! ```

/// Error types for every stage of the pipeline.
pub mod errors;

/// Extensions/Traits for geo_types geometry, plus the affine helpers.
pub mod geo_types;

/// Path mini-language parsing and curve flattening.
pub mod path;

/// Directed polylines, their transforms, and the signed distance field.
pub mod shape;

/// The rejection-sampling circle packer.
pub mod packing;

/// Page size and margins.
pub mod config;

/// Glyph outlines as packing boundaries.
pub mod glyph;

/// SVG output for the plotter.
pub mod svg;

/// One stop shopping for the common types.
pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::errors::{ConfigurationError, GeometryError, GlyphError, ParseError};
    pub use crate::geo_types::{PointDistance, RectExt};
    pub use crate::glyph::{GlyphSource, PathGlyphs};
    pub use crate::packing::{Boundary, Circle, CirclePacker, PackerConfig, Packing, PackingState, Placement};
    pub use crate::shape::{distance_to_shape, BoundingBox, LineSegment, Shape};
    pub use crate::svg::PlotDocument;
}
