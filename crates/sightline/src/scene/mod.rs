//! Scene shapes.
//!
//! A scene is an ordered list of tagged shapes (circles, rectangles, lines,
//! anchored texts), each with an id, color tags, and an `active` flag. An
//! inactive shape is invisible to containment queries and to blocker
//! conversion; the flag is cleared when the shape is destroyed or converted
//! and never set again within one query stream.

use nalgebra::Vector2;

use crate::geom::Rect;

mod convert;
pub mod sample;

pub use convert::{to_blockers, ChordAxis};

#[cfg(test)]
mod tests;

/// Text anchor mode: where the anchor point sits on the rendered run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// One-letter scene-format code (`i`, `m`, `f`).
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::Start),
            'm' => Some(Self::Middle),
            'f' => Some(Self::End),
            _ => None,
        }
    }

    pub fn svg_name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Font styling captured at parse time. A value, threaded through the scene
/// parser; there is no process-wide default.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub weight: String,
    pub size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            weight: "normal".to_string(),
            size: 12.0,
        }
    }
}

/// Per-variant geometry and paint.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        stroke: String,
        fill: String,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        stroke: String,
        fill: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
    },
    Text {
        x: f64,
        y: f64,
        stroke: String,
        fill: String,
        anchor: Anchor,
        content: String,
        style: TextStyle,
    },
}

/// A scene shape: variant data plus id and liveness.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub id: i32,
    pub kind: ShapeKind,
    pub active: bool,
}

impl Shape {
    pub fn new(id: i32, kind: ShapeKind) -> Self {
        Self {
            id,
            kind,
            active: true,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Rect { .. } => "rectangle",
            ShapeKind::Line { .. } => "line",
            ShapeKind::Text { .. } => "text",
        }
    }

    /// The shape's reference point: circle center, rectangle corner, line
    /// first endpoint, text anchor.
    pub fn anchor(&self) -> Vector2<f64> {
        match &self.kind {
            ShapeKind::Circle { cx, cy, .. } => Vector2::new(*cx, *cy),
            ShapeKind::Rect { x, y, .. } => Vector2::new(*x, *y),
            ShapeKind::Line { x1, y1, .. } => Vector2::new(*x1, *y1),
            ShapeKind::Text { x, y, .. } => Vector2::new(*x, *y),
        }
    }

    /// Axis-aligned bounds. Text spans only its anchor point; its rendered
    /// extent depends on font metrics the engine does not consult.
    pub fn bounds(&self) -> Rect {
        match &self.kind {
            ShapeKind::Circle { cx, cy, r, .. } => Rect::new(cx - r, cy - r, cx + r, cy + r),
            ShapeKind::Rect { x, y, w, h, .. } => Rect::new(*x, *y, x + w, y + h),
            ShapeKind::Line { x1, y1, x2, y2, .. } => {
                Rect::new(x1.min(*x2), y1.min(*y2), x1.max(*x2), y1.max(*y2))
            }
            ShapeKind::Text { x, y, .. } => Rect::new(*x, *y, *x, *y),
        }
    }

    /// Move the whole shape by (dx, dy).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match &mut self.kind {
            ShapeKind::Circle { cx, cy, .. } => {
                *cx += dx;
                *cy += dy;
            }
            ShapeKind::Rect { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
            ShapeKind::Line { x1, y1, x2, y2, .. } => {
                *x1 += dx;
                *y1 += dy;
                *x2 += dx;
                *y2 += dy;
            }
            ShapeKind::Text { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
        }
    }

    /// An active clone under a fresh id, displaced by (dx, dy).
    pub fn clone_offset(&self, new_id: i32, dx: f64, dy: f64) -> Shape {
        let mut clone = Shape::new(new_id, self.kind.clone());
        clone.translate(dx, dy);
        clone
    }

    /// Repaint border and fill. Lines keep their color: a line has no fill,
    /// and its stroke is deliberately left alone.
    pub fn paint(&mut self, color: &str) {
        match &mut self.kind {
            ShapeKind::Circle { stroke, fill, .. } | ShapeKind::Rect { stroke, fill, .. } => {
                *stroke = color.to_string();
                *fill = color.to_string();
            }
            ShapeKind::Line { .. } => {}
            ShapeKind::Text { stroke, fill, .. } => {
                *stroke = color.to_string();
                *fill = color.to_string();
            }
        }
    }
}
