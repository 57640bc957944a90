//! Active-segment structure for the rotating ray.
//!
//! Ordered multiset of working-list indices keyed by the distance from the
//! origin to each segment along the ray at the current sweep angle. The
//! comparator depends on mutable external state (the angle), so ordering is
//! rebuilt lazily: `set_angle` marks the order stale and the next `min`
//! re-sorts. Membership is by index identity, never by geometry: two
//! coincident segments stay distinct entries.
//!
//! Distance ties are broken by looking a hair past the current angle: at an
//! event angle two segments often meet at the very point the ray passes
//! through, and the one that stays nearer just after the event is the one
//! that occludes from here on.

use nalgebra::Vector2;

use crate::geom::{ray_distance, GeomCfg, Segment};

/// Angle advance used to break exact distance ties.
const TIE_LOOKAHEAD: f64 = 1e-7;

fn cmp_at(
    segs: &[Segment],
    origin: Vector2<f64>,
    angle: f64,
    cfg: GeomCfg,
    a: usize,
    b: usize,
) -> std::cmp::Ordering {
    let da = ray_distance(origin, angle, &segs[a], cfg);
    let db = ray_distance(origin, angle, &segs[b], cfg);
    if (da - db).abs() > cfg.eps {
        return da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal);
    }
    let ahead = angle + TIE_LOOKAHEAD;
    let fa = ray_distance(origin, ahead, &segs[a], cfg);
    let fb = ray_distance(origin, ahead, &segs[b], cfg);
    fa.partial_cmp(&fb)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then(a.cmp(&b))
}

/// Active segments at the current sweep angle, borrowing the working list.
#[derive(Debug)]
pub struct ActiveSegments<'a> {
    segs: &'a [Segment],
    origin: Vector2<f64>,
    cfg: GeomCfg,
    angle: f64,
    items: Vec<usize>,
    dirty: bool,
}

impl<'a> ActiveSegments<'a> {
    pub fn new(segs: &'a [Segment], origin: Vector2<f64>, cfg: GeomCfg) -> Self {
        Self {
            segs,
            origin,
            cfg,
            angle: 0.0,
            items: Vec::new(),
            dirty: false,
        }
    }

    /// Point the comparator at a new ray; ordering is rebuilt on demand.
    pub fn set_angle(&mut self, angle: f64) {
        if angle != self.angle {
            self.angle = angle;
            self.dirty = true;
        }
    }

    /// Insert by identity; re-inserting a present index is a no-op.
    pub fn insert(&mut self, i: usize) {
        if self.items.contains(&i) {
            return;
        }
        if self.dirty {
            self.items.push(i);
            return;
        }
        // binary search by the current key keeps the order valid
        let (segs, origin, angle, cfg) = (self.segs, self.origin, self.angle, self.cfg);
        let pos = self
            .items
            .partition_point(|&j| cmp_at(segs, origin, angle, cfg, j, i).is_lt());
        self.items.insert(pos, i);
    }

    /// Remove by identity; absent indices are a no-op.
    pub fn remove(&mut self, i: usize) {
        if let Some(pos) = self.items.iter().position(|&j| j == i) {
            self.items.remove(pos);
        }
    }

    /// The front blocker: the member closest to the origin along the current
    /// ray, or `None` when empty. Members the ray misses sort last.
    pub fn min(&mut self) -> Option<usize> {
        if self.dirty {
            let (segs, origin, angle, cfg) = (self.segs, self.origin, self.angle, self.cfg);
            self.items.sort_by(|&a, &b| cmp_at(segs, origin, angle, cfg, a, b));
            self.dirty = false;
        }
        self.items.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
