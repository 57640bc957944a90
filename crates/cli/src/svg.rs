//! SVG scene renderer.
//!
//! Draws the shape list, the blocker segments, the visibility regions and
//! the blast markers into one document. Inactive shapes are skipped: a
//! destroyed or converted shape leaves no trace in the render.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sightline::geom::{Polygon, Rect, Segment};
use sightline::scene::{Shape, ShapeKind};

pub struct SvgDoc {
    body: String,
}

impl SvgDoc {
    /// Open a document over the given viewBox, with a white background.
    pub fn new(bounds: &Rect, margin: f64) -> Self {
        let min_x = bounds.min_x - margin;
        let min_y = bounds.min_y - margin;
        let width = bounds.width() + 2.0 * margin;
        let height = bounds.height() + 2.0 * margin;

        let mut body = String::new();
        let _ = writeln!(
            body,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{min_x:.2} {min_y:.2} {width:.2} {height:.2}\">"
        );
        let _ = writeln!(
            body,
            "  <rect x=\"{min_x:.2}\" y=\"{min_y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"white\" stroke=\"none\"/>"
        );
        Self { body }
    }

    pub fn comment(&mut self, text: &str) {
        let _ = writeln!(self.body, "  <!-- {text} -->");
    }

    pub fn shapes(&mut self, shapes: &[Shape]) {
        for shape in shapes {
            if shape.active {
                self.shape(shape);
            }
        }
    }

    pub fn shape(&mut self, shape: &Shape) {
        match &shape.kind {
            ShapeKind::Circle { cx, cy, r, stroke, fill } => {
                let _ = writeln!(
                    self.body,
                    "  <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" stroke=\"{stroke}\" fill=\"{fill}\"/>"
                );
            }
            ShapeKind::Rect { x, y, w, h, stroke, fill } => {
                let _ = writeln!(
                    self.body,
                    "  <rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" stroke=\"{stroke}\" fill=\"{fill}\"/>"
                );
            }
            ShapeKind::Line { x1, y1, x2, y2, color } => {
                let _ = writeln!(
                    self.body,
                    "  <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\"/>"
                );
            }
            ShapeKind::Text { x, y, stroke, fill, anchor, content, style } => {
                let _ = writeln!(
                    self.body,
                    "  <text x=\"{x:.2}\" y=\"{y:.2}\" stroke=\"{stroke}\" fill=\"{fill}\" \
                     text-anchor=\"{}\" font-family=\"{}\" font-weight=\"{}\" font-size=\"{}\">{}</text>",
                    anchor.svg_name(),
                    style.family,
                    svg_font_weight(&style.weight),
                    style.size,
                    escape(content),
                );
            }
        }
    }

    /// Blocker segments, dashed so they read as barriers rather than lines.
    pub fn blockers(&mut self, segments: &[Segment]) {
        for s in segments {
            let _ = writeln!(
                self.body,
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-dasharray=\"4 2\"/>",
                s.p1.x, s.p1.y, s.p2.x, s.p2.y, s.color
            );
        }
    }

    /// Translucent visibility region.
    pub fn region(&mut self, polygon: &Polygon) {
        if polygon.len() < 3 {
            return;
        }
        let mut points = String::new();
        for i in 0..polygon.len() {
            let v = polygon.vertex(i);
            let _ = write!(points, "{:.2},{:.2} ", v.x, v.y);
        }
        let _ = writeln!(
            self.body,
            "  <polygon points=\"{}\" stroke=\"none\" fill=\"#FFFF00\" fill-opacity=\"0.3\"/>",
            points.trim_end()
        );
    }

    /// Blast marker: red dot with a cross.
    pub fn bomb(&mut self, x: f64, y: f64) {
        let r = 5.0;
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{r:.2}\" stroke=\"none\" fill=\"#FF0000\"/>"
        );
        let _ = writeln!(
            self.body,
            "  <line x1=\"{:.2}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\" stroke=\"white\"/>",
            x - r, x + r
        );
        let _ = writeln!(
            self.body,
            "  <line x1=\"{x:.2}\" y1=\"{:.2}\" x2=\"{x:.2}\" y2=\"{:.2}\" stroke=\"white\"/>",
            y - r, y + r
        );
    }

    pub fn write_to(mut self, path: &Path) -> Result<()> {
        self.body.push_str("</svg>\n");
        fs::write(path, &self.body)
            .with_context(|| format!("writing svg {}", path.display()))?;
        Ok(())
    }

    #[cfg(test)]
    fn body(&self) -> &str {
        &self.body
    }
}

fn svg_font_weight(weight: &str) -> &str {
    match weight {
        "b" => "bold",
        "b+" => "bolder",
        "l" => "lighter",
        "n" => "normal",
        other => other,
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
