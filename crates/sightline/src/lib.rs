//! Visibility regions over segment scenes.
//!
//! The crate computes 2D visibility polygons from a viewpoint inside a scene
//! of polygonal blockers (an angular plane sweep), and applies bomb-style
//! queries (destroy, paint, clone) to the shapes each region covers.
//!
//! Module map:
//! - `geom`: points, segments, orientation and ray predicates, the polygon
//!   container.
//! - `scene`: shape variants, shape→blocker conversion, random scene sampler.
//! - `sweep`: the angular plane sweep (events, active-segment structure,
//!   polygon emission, visible-blocker tracking).
//! - `query`: containment predicates and the query executor.

pub mod geom;
pub mod query;
pub mod scene;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-export so callers and the sweep share one vector notation.
pub use nalgebra::Vector2 as Vec2;
pub use geom::{GeomCfg, Orientation, Polygon, Rect, Segment};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use nalgebra::Vector2 as Vec2;
    pub use crate::geom::{
        orientation, polar_angle, ray_distance, ray_segment_intersection, GeomCfg, Orientation,
        Polygon, Rect, Segment,
    };
    pub use crate::query::{Query, QueryOutcome, World};
    pub use crate::scene::{Anchor, ChordAxis, Shape, ShapeKind, TextStyle};
    pub use crate::sweep::{visibility_polygon, visibility_polygon_tracked, SortAlgo, SweepOpts};
}
