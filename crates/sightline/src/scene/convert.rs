//! Shape → blocker conversion.
//!
//! Rectangles contribute their four edges; circles one diametral chord
//! (axis chosen by the query); lines themselves; texts one horizontal run of
//! a fixed per-character width. Curved and glyph geometry is deliberately
//! linearized; the engine never consults a font system.

use crate::geom::Segment;

use super::{Anchor, Shape, ShapeKind};

/// Chord axis for circle conversion (`h` default, `v`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChordAxis {
    #[default]
    Horizontal,
    Vertical,
}

impl ChordAxis {
    pub fn from_code(c: char) -> Self {
        if c == 'v' {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// Width contributed by one character of blocker text.
const TEXT_CHAR_WIDTH: f64 = 10.0;

/// Convert one shape into its blocker segments. Fresh segment ids come from
/// `next_id`; every segment's `shape_id` is the source shape's id and its
/// color the shape's border color.
pub fn to_blockers(shape: &Shape, axis: ChordAxis, next_id: &mut impl FnMut() -> i32) -> Vec<Segment> {
    let id = shape.id;
    match &shape.kind {
        ShapeKind::Rect { x, y, w, h, stroke, .. } => vec![
            Segment::new(next_id(), id, *x, *y, x + w, *y, stroke),
            Segment::new(next_id(), id, x + w, *y, x + w, y + h, stroke),
            Segment::new(next_id(), id, x + w, y + h, *x, y + h, stroke),
            Segment::new(next_id(), id, *x, y + h, *x, *y, stroke),
        ],
        ShapeKind::Circle { cx, cy, r, stroke, .. } => {
            let seg = match axis {
                ChordAxis::Vertical => Segment::new(next_id(), id, *cx, cy - r, *cx, cy + r, stroke),
                ChordAxis::Horizontal => {
                    Segment::new(next_id(), id, cx - r, *cy, cx + r, *cy, stroke)
                }
            };
            vec![seg]
        }
        ShapeKind::Line { x1, y1, x2, y2, color } => {
            vec![Segment::new(next_id(), id, *x1, *y1, *x2, *y2, color)]
        }
        ShapeKind::Text {
            x,
            y,
            stroke,
            anchor,
            content,
            ..
        } => {
            let len = TEXT_CHAR_WIDTH * content.chars().count() as f64;
            let (x1, x2) = match anchor {
                Anchor::Start => (*x, x + len),
                Anchor::End => (x - len, *x),
                Anchor::Middle => (x - len / 2.0, x + len / 2.0),
            };
            vec![Segment::new(next_id(), id, x1, *y, x2, *y, stroke)]
        }
    }
}
