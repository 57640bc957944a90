//! Basic types and tolerances shared across the sweep.
//!
//! - `GeomCfg`: centralizes the predicate epsilon and the bounding-box margin.
//! - `Segment`: a blocker segment with identity and provenance ids.
//! - `Rect`: axis-aligned scene bounds.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Tolerance for orientation, intersection, and distance ties.
    pub eps: f64,
    /// Margin added around the caller's bounding box before sweeping.
    pub bbox_margin: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps: 1e-9,
            bbox_margin: 5.0,
        }
    }
}

/// Turn direction of the triple (p1, p2, p3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// A blocker segment.
///
/// Identity is `id`, not geometry: two coincident segments are distinct
/// blockers. `shape_id` names the shape the segment was derived from;
/// `-1` marks artificial segments (bounding-box edges), which are never
/// reported as visible blockers.
#[derive(Clone, Debug)]
pub struct Segment {
    pub id: i32,
    pub shape_id: i32,
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
    pub color: String,
}

impl Segment {
    pub fn new(id: i32, shape_id: i32, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> Self {
        Self {
            id,
            shape_id,
            p1: Vector2::new(x1, y1),
            p2: Vector2::new(x2, y2),
            color: color.to_string(),
        }
    }

    #[inline]
    pub fn is_artificial(&self) -> bool {
        self.shape_id == -1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// Split at an interior point; both halves keep the ids and color.
    pub fn split_at(&self, p: Vector2<f64>) -> (Self, Self) {
        let mut a = self.clone();
        let mut b = self.clone();
        a.p2 = p;
        b.p1 = p;
        (a, b)
    }
}

/// Axis-aligned bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Grow just enough to contain `p`.
    pub fn expand_to(&mut self, p: Vector2<f64>) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Merge with another rectangle.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn with_margin(&self, m: f64) -> Rect {
        Rect {
            min_x: self.min_x - m,
            min_y: self.min_y - m,
            max_x: self.max_x + m,
            max_y: self.max_y + m,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
