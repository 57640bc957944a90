//! Query executor.
//!
//! Purpose
//! - Own the live scene state (shapes, blockers, bounds, id counter) for the
//!   duration of a query stream and apply the four query kinds: shield
//!   conversion, destroy, paint, clone.
//!
//! Why this shape
//! - The sweep borrows the blocker list read-only and every mutation happens
//!   after it returns, so a query never observes its own edits.
//! - Each run returns a structured `QueryOutcome` record; serializing or
//!   pretty-printing it is the caller's business.
//!
//! Code cross-refs: `sweep::{visibility_polygon, visibility_polygon_tracked}`,
//! `query::contains`, `scene::to_blockers`.

use nalgebra::Vector2;

use crate::geom::{Polygon, Rect, Segment};
use crate::scene::{to_blockers, ChordAxis, Shape};
use crate::sweep::{visibility_polygon, visibility_polygon_tracked, SweepOpts};

mod contains;

pub use contains::shape_in_polygon;


/// Monotone id source for clones and blocker segments.
#[derive(Clone, Copy, Debug)]
pub struct IdGen {
    next: i32,
}

impl IdGen {
    pub fn new(start: i32) -> Self {
        Self { next: start }
    }

    #[inline]
    pub fn fresh(&mut self) -> i32 {
        let id = self.next;
        self.next += 1;
        id
    }

    #[inline]
    pub fn peek(&self) -> i32 {
        self.next
    }
}

/// One query record.
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    /// Convert every active shape with id in `[first, last]` into blockers.
    Shield {
        first: i32,
        last: i32,
        axis: ChordAxis,
    },
    /// Deactivate every shape the blast sees; remove seen blockers.
    Destroy { at: Vector2<f64>, tag: String },
    /// Repaint every shape the blast sees.
    Paint {
        at: Vector2<f64>,
        color: String,
        tag: String,
    },
    /// Clone every shape the blast sees, displaced by `offset`.
    Clone {
        at: Vector2<f64>,
        offset: Vector2<f64>,
        tag: String,
    },
}

/// Structured result of one query.
#[derive(Clone, Debug, Default)]
pub struct QueryOutcome {
    /// Shapes converted / destroyed / painted / cloned by this query.
    pub affected: usize,
    /// Shield: source shape id → ids of the segments derived from it.
    pub conversions: Vec<(i32, Vec<i32>)>,
    /// Destroy: (shape id, kind name).
    pub destroyed_shapes: Vec<(i32, &'static str)>,
    /// Destroy: (segment id, owning shape id).
    pub destroyed_blockers: Vec<(i32, i32)>,
    /// Paint: (shape id, kind name).
    pub painted: Vec<(i32, &'static str)>,
    pub paint_color: Option<String>,
    /// Clone: (clone id, kind name).
    pub cloned: Vec<(i32, &'static str)>,
    /// Blast point, for bomb queries.
    pub origin: Option<Vector2<f64>>,
    /// The region, when the query owns its own render pass (tag != "-").
    pub polygon: Option<Polygon>,
}

/// Live state of one query stream.
#[derive(Debug)]
pub struct World {
    pub shapes: Vec<Shape>,
    pub blockers: Vec<Segment>,
    pub bbox: Rect,
    pub ids: IdGen,
    /// (blast point, region) pairs accumulated for a composite render.
    pub overlays: Vec<(Vector2<f64>, Polygon)>,
}

/// First id handed to clones and blocker segments.
const FIRST_FRESH_ID: i32 = 10_000;

impl World {
    pub fn new(shapes: Vec<Shape>, bbox: Rect) -> Self {
        Self {
            shapes,
            blockers: Vec::new(),
            bbox,
            ids: IdGen::new(FIRST_FRESH_ID),
            overlays: Vec::new(),
        }
    }

    /// Execute one query against the live state.
    pub fn run(&mut self, query: &Query, opts: &SweepOpts) -> QueryOutcome {
        match query {
            Query::Shield { first, last, axis } => self.run_shield(*first, *last, *axis),
            Query::Destroy { at, tag } => self.run_destroy(*at, tag, opts),
            Query::Paint { at, color, tag } => self.run_paint(*at, color, tag, opts),
            Query::Clone { at, offset, tag } => self.run_clone(*at, *offset, tag, opts),
        }
    }

    fn run_shield(&mut self, first: i32, last: i32, axis: ChordAxis) -> QueryOutcome {
        let mut outcome = QueryOutcome::default();
        let World {
            shapes,
            blockers,
            ids,
            ..
        } = self;
        for shape in shapes.iter_mut() {
            if !shape.active || shape.id < first || shape.id > last {
                continue;
            }
            let segs = to_blockers(shape, axis, &mut || ids.fresh());
            outcome
                .conversions
                .push((shape.id, segs.iter().map(|s| s.id).collect()));
            blockers.extend(segs);
            shape.active = false;
            outcome.affected += 1;
        }
        outcome
    }

    fn run_destroy(&mut self, at: Vector2<f64>, tag: &str, opts: &SweepOpts) -> QueryOutcome {
        let mut outcome = QueryOutcome::default();
        let (polygon, visible) = visibility_polygon_tracked(at, &self.blockers, self.bbox, opts);

        for shape in self.shapes.iter_mut() {
            if shape.active && shape_in_polygon(shape, &polygon, opts.cfg) {
                shape.active = false;
                outcome.destroyed_shapes.push((shape.id, shape.kind_name()));
            }
        }
        self.blockers.retain(|s| {
            if visible.contains(&s.id) {
                outcome.destroyed_blockers.push((s.id, s.shape_id));
                false
            } else {
                true
            }
        });

        outcome.affected = outcome.destroyed_shapes.len();
        self.finish(at, tag, polygon, &mut outcome);
        outcome
    }

    fn run_paint(
        &mut self,
        at: Vector2<f64>,
        color: &str,
        tag: &str,
        opts: &SweepOpts,
    ) -> QueryOutcome {
        let mut outcome = QueryOutcome::default();
        let polygon = visibility_polygon(at, &self.blockers, self.bbox, opts);

        for shape in self.shapes.iter_mut() {
            if shape.active && shape_in_polygon(shape, &polygon, opts.cfg) {
                shape.paint(color);
                outcome.painted.push((shape.id, shape.kind_name()));
            }
        }

        outcome.affected = outcome.painted.len();
        outcome.paint_color = Some(color.to_string());
        self.finish(at, tag, polygon, &mut outcome);
        outcome
    }

    fn run_clone(
        &mut self,
        at: Vector2<f64>,
        offset: Vector2<f64>,
        tag: &str,
        opts: &SweepOpts,
    ) -> QueryOutcome {
        let mut outcome = QueryOutcome::default();
        let polygon = visibility_polygon(at, &self.blockers, self.bbox, opts);

        // Select first: the shape list must not grow while we scan it.
        let selected: Vec<usize> = (0..self.shapes.len())
            .filter(|&i| {
                self.shapes[i].active && shape_in_polygon(&self.shapes[i], &polygon, opts.cfg)
            })
            .collect();
        for i in selected {
            let clone = self.shapes[i].clone_offset(self.ids.fresh(), offset.x, offset.y);
            outcome.cloned.push((clone.id, clone.kind_name()));
            self.shapes.push(clone);
        }

        outcome.affected = outcome.cloned.len();
        self.finish(at, tag, polygon, &mut outcome);
        outcome
    }

    /// Tag "-" accumulates the region for one composite render at
    /// end-of-stream; any other tag hands it back for a per-query render.
    fn finish(&mut self, at: Vector2<f64>, tag: &str, polygon: Polygon, outcome: &mut QueryOutcome) {
        outcome.origin = Some(at);
        if tag == "-" {
            self.overlays.push((at, polygon));
        } else {
            outcome.polygon = Some(polygon);
        }
    }
}
