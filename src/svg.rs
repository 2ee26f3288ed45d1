//! Plotter-ready SVG output: plain strokes, no fills, one element per mark.
use std::fmt;
use std::path::Path as FilePath;

use geo_types::Rect;
use svg::node::element::path::Data;
use svg::node::element::{Circle as SvgCircle, Line as SvgLine, Path, Rectangle};
use svg::node::Node;
use svg::Document;

use crate::packing::Circle;
use crate::shape::Shape;

#[derive(Clone, Debug)]
pub struct PlotDocument {
    document: Document,
    stroke: String,
    pen_width: f64,
}

impl PlotDocument {
    /// Empty page of `width` x `height` points, with a matching viewBox.
    pub fn new(width: f64, height: f64) -> Self {
        PlotDocument {
            document: Document::new()
                .set("width", width)
                .set("height", height)
                .set("viewBox", (0.0, 0.0, width, height)),
            stroke: "black".to_string(),
            pen_width: 1.0,
        }
    }

    pub fn stroke(&mut self, color: &str) -> &mut Self {
        self.stroke = color.to_string();
        self
    }

    pub fn pen(&mut self, width: f64) -> &mut Self {
        self.pen_width = width;
        self
    }

    fn push<N: Into<Box<dyn Node>>>(&mut self, node: N) -> &mut Self {
        self.document.append(node);
        self
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        let line = SvgLine::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
            .set("stroke", self.stroke.as_str())
            .set("stroke-width", self.pen_width);
        self.push(line)
    }

    pub fn draw_rect(&mut self, rect: &Rect<f64>) -> &mut Self {
        let rectangle = Rectangle::new()
            .set("x", rect.min().x)
            .set("y", rect.min().y)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", "none")
            .set("stroke", self.stroke.as_str())
            .set("stroke-width", self.pen_width);
        self.push(rectangle)
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, r: f64) -> &mut Self {
        let circle = SvgCircle::new()
            .set("cx", x)
            .set("cy", y)
            .set("r", r)
            .set("fill", "none")
            .set("stroke", self.stroke.as_str())
            .set("stroke-width", self.pen_width);
        self.push(circle)
    }

    pub fn draw_circles(&mut self, circles: &[Circle]) -> &mut Self {
        for c in circles {
            self.draw_circle(c.center.x, c.center.y, c.radius);
        }
        self
    }

    /// A shape as a single path. Consecutive segments that share an endpoint are
    /// drawn without lifting the pen.
    pub fn draw_shape(&mut self, shape: &Shape) -> &mut Self {
        if shape.is_empty() {
            return self;
        }
        let mut data = Data::new();
        let mut pen = None;
        for seg in shape.segments() {
            if pen != Some(seg.start) {
                data = data.move_to((seg.start.x, seg.start.y));
            }
            data = data.line_to((seg.end.x, seg.end.y));
            pen = Some(seg.end);
        }
        let path = Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", self.stroke.as_str())
            .set("stroke-width", self.pen_width)
            .set("stroke-linejoin", "round")
            .set("stroke-linecap", "round");
        self.push(path)
    }

    pub fn to_document(&self) -> Document {
        self.document.clone()
    }

    pub fn save<P: AsRef<FilePath>>(&self, path: P) -> std::io::Result<()> {
        svg::save(path, &self.document)
    }
}

impl fmt::Display for PlotDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document)
    }
}
