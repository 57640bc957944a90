//! Random blocker scenes (deterministic, replayable).
//!
//! Purpose
//! - Provide a small, deterministic sampler of segment scenes for property
//!   tests and benches. Draws are parameterized by a config and a replay
//!   token `(seed, index)` mixed into a single RNG, so any case can be
//!   reproduced from its token alone.
//!
//! Model
//! - Segment midpoints are uniform in the box, directions uniform in angle,
//!   lengths uniform in a range. Segments passing within `keepout` of the
//!   origin are re-drawn so the viewpoint never sits on a blocker.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{point_segment_dist_sq, Rect, Segment};

/// Scene sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub segments: usize,
    /// Half-extent of the box segments are drawn in, centered on the origin.
    pub extent: f64,
    pub min_len: f64,
    pub max_len: f64,
    /// Minimum distance between any segment and the origin.
    pub keepout: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            segments: 20,
            extent: 100.0,
            min_len: 5.0,
            max_len: 40.0,
            keepout: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a blocker scene around the origin. Segment ids are 1-based and
/// owners equal ids, as if each came from a one-segment shape.
pub fn draw_segments(cfg: SceneCfg, tok: ReplayToken) -> Vec<Segment> {
    let mut rng = tok.to_std_rng();
    let origin = Vector2::new(0.0, 0.0);
    let keepout_sq = cfg.keepout * cfg.keepout;

    let mut out = Vec::with_capacity(cfg.segments);
    let mut id = 0;
    while out.len() < cfg.segments {
        let mid = Vector2::new(
            rng.gen_range(-cfg.extent..cfg.extent),
            rng.gen_range(-cfg.extent..cfg.extent),
        );
        let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let half = rng.gen_range(cfg.min_len..cfg.max_len) / 2.0;
        let dir = Vector2::new(theta.cos(), theta.sin());
        let p1 = mid - dir * half;
        let p2 = mid + dir * half;

        if point_segment_dist_sq(origin, p1, p2) < keepout_sq {
            continue;
        }
        id += 1;
        out.push(Segment::new(id, id, p1.x, p1.y, p2.x, p2.y, "black"));
    }
    out
}

/// The box the sampler draws in, for use as the sweep's scene bounds.
pub fn sample_bounds(cfg: SceneCfg) -> Rect {
    Rect::new(-cfg.extent, -cfg.extent, cfg.extent, cfg.extent)
}
