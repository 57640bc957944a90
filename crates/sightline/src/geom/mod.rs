//! Geometric primitives for the angular sweep.
//!
//! Purpose
//! - Provide the small, eps-aware predicate set the sweep and the containment
//!   queries consume: orientation, ray/segment intersection, polar angles,
//!   and distances, all over `Vector2<f64>`.
//! - Keep tolerances centralized in `GeomCfg` instead of scattering literals.
//!
//! Code cross-refs: `sweep::active` (ray-distance comparator),
//! `query::contains` (orientation + segment intersection), `geom::polygon`.

mod polygon;
mod primitives;
mod types;

pub use polygon::Polygon;
pub use primitives::{
    cross, distance, orientation, point_segment_dist_sq, polar_angle, ray_distance,
    ray_segment_intersection, segments_intersect,
};
pub use types::{GeomCfg, Orientation, Rect, Segment};
