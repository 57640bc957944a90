use nalgebra::Vector2;

use super::types::{GeomCfg, Orientation, Segment};

/// Signed cross product `(p2 - p1) × (p3 - p1)` (twice the triangle area).
#[inline]
pub fn cross(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p2.y - p1.y) * (p3.x - p1.x)
}

/// Turn direction of p1 → p2 → p3; |cross| below `cfg.eps` collapses to collinear.
#[inline]
pub fn orientation(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>, cfg: GeomCfg) -> Orientation {
    let c = cross(p1, p2, p3);
    if c.abs() < cfg.eps {
        Orientation::Collinear
    } else if c > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b - a).norm()
}

/// Polar angle of `p` around `origin`, normalized to [0, 2π).
/// Coincident points answer 0.
pub fn polar_angle(origin: Vector2<f64>, p: Vector2<f64>) -> f64 {
    let d = p - origin;
    if d.x == 0.0 && d.y == 0.0 {
        return 0.0;
    }
    let a = d.y.atan2(d.x);
    if a < 0.0 {
        a + std::f64::consts::TAU
    } else {
        a
    }
}

/// Intersection of the ray `origin + t·(toward - origin)`, `t ≥ 0`, with a
/// segment. Parallel (degenerate denominator) means no intersection; both
/// parameters carry an eps slack so endpoint grazes still count.
pub fn ray_segment_intersection(
    origin: Vector2<f64>,
    toward: Vector2<f64>,
    seg: &Segment,
    cfg: GeomCfg,
) -> Option<Vector2<f64>> {
    let d = toward - origin;
    let e = seg.p2 - seg.p1;

    let denom = d.x * e.y - d.y * e.x;
    if denom.abs() < cfg.eps {
        return None;
    }

    let w = seg.p1 - origin;
    let t = (w.x * e.y - w.y * e.x) / denom;
    let u = (w.x * d.y - w.y * d.x) / denom;

    if t >= -cfg.eps && u >= -cfg.eps && u <= 1.0 + cfg.eps {
        Some(origin + d * t)
    } else {
        None
    }
}

/// Distance from `origin` to `seg` along the unit ray at `angle`, or
/// `f64::INFINITY` when the ray misses. This is the active-set comparator key.
pub fn ray_distance(origin: Vector2<f64>, angle: f64, seg: &Segment, cfg: GeomCfg) -> f64 {
    let d = Vector2::new(angle.cos(), angle.sin());
    let e = seg.p2 - seg.p1;

    let denom = d.x * e.y - d.y * e.x;
    if denom.abs() < cfg.eps {
        return f64::INFINITY;
    }

    let w = seg.p1 - origin;
    let t = (w.x * e.y - w.y * e.x) / denom;
    let u = (w.x * d.y - w.y * d.x) / denom;

    if t >= -cfg.eps && u >= -cfg.eps && u <= 1.0 + cfg.eps {
        t
    } else {
        f64::INFINITY
    }
}

/// Proper or touching intersection of segments (a1,a2) and (b1,b2):
/// orientation cases plus the collinear on-segment fallback.
pub fn segments_intersect(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let o1 = orientation(a1, a2, b1, cfg);
    let o2 = orientation(a1, a2, b2, cfg);
    let o3 = orientation(b1, b2, a1, cfg);
    let o4 = orientation(b1, b2, a2, cfg);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(a1, b1, a2))
        || (o2 == Orientation::Collinear && on_segment(a1, b2, a2))
        || (o3 == Orientation::Collinear && on_segment(b1, a1, b2))
        || (o4 == Orientation::Collinear && on_segment(b1, a2, b2))
}

/// Collinear `q` lies within the box spanned by `p` and `r`.
#[inline]
fn on_segment(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Squared distance from `p` to the closed segment (a, b).
pub fn point_segment_dist_sq(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm_squared();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm_squared()
}
