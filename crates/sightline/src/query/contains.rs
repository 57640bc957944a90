//! Shape-in-region containment.
//!
//! The predicate is conservative: a shape counts as contained when it merely
//! overlaps the region. Queries want "was this shape touched by the blast",
//! not strict inclusion.

use nalgebra::Vector2;

use crate::geom::{point_segment_dist_sq, segments_intersect, GeomCfg, Polygon};
use crate::scene::{Shape, ShapeKind};

fn edges(polygon: &Polygon) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon.vertex(i), polygon.vertex((i + 1) % n)))
}

/// Does the region cover (any part of) the shape? Regions with fewer than
/// 3 vertices cover nothing.
pub fn shape_in_polygon(shape: &Shape, polygon: &Polygon, cfg: GeomCfg) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    match &shape.kind {
        ShapeKind::Circle { cx, cy, r, .. } => {
            let c = Vector2::new(*cx, *cy);
            let r_sq = r * r;
            polygon.contains_point(*cx, *cy)
                || (0..polygon.len()).any(|i| (polygon.vertex(i) - c).norm_squared() <= r_sq)
                || edges(polygon).any(|(a, b)| point_segment_dist_sq(c, a, b) <= r_sq)
        }
        ShapeKind::Rect { x, y, w, h, .. } => {
            let corners = [
                Vector2::new(*x, *y),
                Vector2::new(x + w, *y),
                Vector2::new(x + w, y + h),
                Vector2::new(*x, y + h),
            ];
            if corners.iter().any(|c| polygon.contains_point(c.x, c.y)) {
                return true;
            }
            let inside_rect = |p: Vector2<f64>| {
                p.x >= *x && p.x <= x + w && p.y >= *y && p.y <= y + h
            };
            if (0..polygon.len()).any(|i| inside_rect(polygon.vertex(i))) {
                return true;
            }
            edges(polygon).any(|(a, b)| {
                (0..4).any(|k| {
                    segments_intersect(corners[k], corners[(k + 1) % 4], a, b, cfg)
                })
            })
        }
        ShapeKind::Line { x1, y1, x2, y2, .. } => {
            let p = Vector2::new(*x1, *y1);
            let q = Vector2::new(*x2, *y2);
            polygon.contains_point(p.x, p.y)
                || polygon.contains_point(q.x, q.y)
                || edges(polygon).any(|(a, b)| segments_intersect(p, q, a, b, cfg))
        }
        // The anchor decides; the blocker-segment form is not expanded here.
        ShapeKind::Text { x, y, .. } => polygon.contains_point(*x, *y),
    }
}
