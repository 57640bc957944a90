//! Angular plane sweep for visibility regions.
//!
//! Purpose
//! - Given an origin, a blocker list, and a scene bounding box, produce the
//!   polygon of points visible from the origin, vertices in increasing sweep
//!   angle. A tracked variant also collects the ids of every non-artificial
//!   segment that was ever the front blocker.
//!
//! Why this shape
//! - The sweep rotates a ray from angle 0 through 2π. Segment endpoints are
//!   the only places the front blocker can change, so they become Start/End
//!   events; between events the front blocker is constant and contributes a
//!   straight polygon edge.
//! - Segments crossing the 0-angle ray would emit their End before their
//!   Start and corrupt the front-blocker bookkeeping, so every sweep first
//!   splits them at the seam. The split depends on the origin and is redone
//!   per call, never cached.
//!
//! Code cross-refs: `sweep::active::ActiveSegments`, `sweep::events`,
//! `geom::{ray_segment_intersection, ray_distance}`.

use nalgebra::Vector2;

use crate::geom::{
    distance, ray_distance, ray_segment_intersection, GeomCfg, Polygon, Rect, Segment,
};

mod active;
mod events;

pub use active::ActiveSegments;
pub use events::{extract_events, sort_events, Event, EventKind, SortAlgo};

#[cfg(test)]
mod tests;

/// Sweep options: tolerances plus the event-sort selector.
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepOpts {
    pub cfg: GeomCfg,
    pub sort: SortAlgo,
}

/// Visibility polygon of `origin` against `blockers` inside `bbox`.
///
/// The caller's list is borrowed read-only; the box is extended to contain
/// the origin and padded by `cfg.bbox_margin` before the four artificial
/// edges are added. With no blockers the result is the padded box itself.
pub fn visibility_polygon(
    origin: Vector2<f64>,
    blockers: &[Segment],
    bbox: Rect,
    opts: &SweepOpts,
) -> Polygon {
    sweep(origin, blockers, bbox, opts, None)
}

/// Like [`visibility_polygon`], additionally filling `visible` with the ids
/// of every non-artificial blocker that served as the front blocker, in
/// first-seen order and without duplicates.
pub fn visibility_polygon_tracked(
    origin: Vector2<f64>,
    blockers: &[Segment],
    bbox: Rect,
    opts: &SweepOpts,
) -> (Polygon, Vec<i32>) {
    let mut visible = Vec::new();
    let polygon = sweep(origin, blockers, bbox, opts, Some(&mut visible));
    (polygon, visible)
}

fn sweep(
    origin: Vector2<f64>,
    blockers: &[Segment],
    bbox: Rect,
    opts: &SweepOpts,
    mut visible: Option<&mut Vec<i32>>,
) -> Polygon {
    let cfg = opts.cfg;

    // Working copy. Segments collapsed onto the origin generate no events.
    let mut working: Vec<Segment> = blockers
        .iter()
        .filter(|s| distance(origin, s.p1) > cfg.eps || distance(origin, s.p2) > cfg.eps)
        .cloned()
        .collect();

    let mut ext = bbox;
    ext.expand_to(origin);
    let ext = ext.with_margin(cfg.bbox_margin);
    push_box_edges(&mut working, &ext);

    split_on_seam(&mut working, origin, cfg);

    let mut events = extract_events(&working, origin, cfg);
    sort_events(&mut events, opts.sort);

    // Seed with everything the angle-0 ray already hits.
    let mut active = ActiveSegments::new(&working, origin, cfg);
    for i in 0..working.len() {
        if ray_distance(origin, 0.0, &working[i], cfg).is_finite() {
            active.insert(i);
        }
    }

    let mut polygon = Polygon::with_capacity(events.len());
    let mut last: Option<Vector2<f64>> = None;

    let east = origin + Vector2::new(1.0, 0.0);
    let mut front = active.min();
    if let Some(b) = front {
        if let Some(p) = ray_segment_intersection(origin, east, &working[b], cfg) {
            push_vertex(&mut polygon, &mut last, p, cfg.eps);
        }
        note_visible(&mut visible, &working, b);
    }

    for ev in &events {
        active.set_angle(ev.angle);
        match ev.kind {
            EventKind::Start => {
                active.insert(ev.seg);
                let new_front = active.min();
                if new_front == Some(ev.seg) && front != Some(ev.seg) {
                    // The newcomer occludes the old front: close the old
                    // blocker's edge at this direction, then open the new one.
                    if let Some(old) = front {
                        if let Some(p) =
                            ray_segment_intersection(origin, ev.point, &working[old], cfg)
                        {
                            push_vertex(&mut polygon, &mut last, p, cfg.eps);
                        }
                    }
                    push_vertex(&mut polygon, &mut last, ev.point, cfg.eps);
                    note_visible(&mut visible, &working, ev.seg);
                    front = new_front;
                }
            }
            EventKind::End => {
                if front == Some(ev.seg) {
                    push_vertex(&mut polygon, &mut last, ev.point, cfg.eps);
                    active.remove(ev.seg);
                    // Electing a successor only matters while sweep angles
                    // remain; seam-remapped ends sit at exactly 2π.
                    if ev.angle < std::f64::consts::TAU - cfg.eps {
                        let new_front = active.min();
                        if let Some(nb) = new_front {
                            if let Some(p) =
                                ray_segment_intersection(origin, ev.point, &working[nb], cfg)
                            {
                                push_vertex(&mut polygon, &mut last, p, cfg.eps);
                            }
                            note_visible(&mut visible, &working, nb);
                        }
                        front = new_front;
                    } else {
                        front = None;
                    }
                } else {
                    active.remove(ev.seg);
                }
            }
        }
    }

    polygon
}

/// Four artificial edges in CCW order (bottom, right, top, left),
/// ids −1..−4, owner −1.
fn push_box_edges(working: &mut Vec<Segment>, b: &Rect) {
    working.push(Segment::new(-1, -1, b.min_x, b.min_y, b.max_x, b.min_y, "none"));
    working.push(Segment::new(-2, -1, b.max_x, b.min_y, b.max_x, b.max_y, "none"));
    working.push(Segment::new(-3, -1, b.max_x, b.max_y, b.min_x, b.max_y, "none"));
    working.push(Segment::new(-4, -1, b.min_x, b.max_y, b.min_x, b.min_y, "none"));
}

/// Split every segment whose interior crosses the angle-0 ray, so no event
/// pair straddles the 0/2π seam. Halves keep the original ids. Replaced
/// halves end exactly on the seam and are not split again.
fn split_on_seam(working: &mut Vec<Segment>, origin: Vector2<f64>, cfg: GeomCfg) {
    let east = origin + Vector2::new(1.0, 0.0);
    let mut i = 0;
    while i < working.len() {
        if let Some(p) = ray_segment_intersection(origin, east, &working[i], cfg) {
            if distance(p, working[i].p1) > cfg.eps && distance(p, working[i].p2) > cfg.eps {
                let (head, tail) = working[i].split_at(p);
                working[i] = head;
                working.push(tail);
            }
        }
        i += 1;
    }
}

/// Append unless within eps of the previous vertex, or of the first vertex.
/// The consumer closes the ring itself, so a final vertex back on the seam
/// would duplicate the start.
fn push_vertex(polygon: &mut Polygon, last: &mut Option<Vector2<f64>>, p: Vector2<f64>, eps: f64) {
    if let Some(q) = *last {
        if (p.x - q.x).abs() <= eps && (p.y - q.y).abs() <= eps {
            return;
        }
    }
    if !polygon.is_empty() {
        let first = polygon.vertex(0);
        if (p.x - first.x).abs() <= eps && (p.y - first.y).abs() <= eps {
            return;
        }
    }
    polygon.push(p.x, p.y);
    *last = Some(p);
}

fn note_visible(visible: &mut Option<&mut Vec<i32>>, working: &[Segment], i: usize) {
    if let Some(out) = visible.as_deref_mut() {
        let s = &working[i];
        if !s.is_artificial() && !out.contains(&s.id) {
            out.push(s.id);
        }
    }
}
