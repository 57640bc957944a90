//! Compute one visibility region and print its vertices.
//!
//! Run: cargo run -p sightline --example visibility_demo

use nalgebra::Vector2;
use sightline::geom::{Rect, Segment};
use sightline::sweep::{visibility_polygon_tracked, SweepOpts};

fn main() {
    let origin = Vector2::new(0.0, 0.0);
    let bbox = Rect::new(-10.0, -10.0, 10.0, 10.0);
    let blockers = vec![
        Segment::new(1, 1, 5.0, -5.0, 5.0, 5.0, "black"),
        Segment::new(2, 2, -6.0, 2.0, -2.0, 6.0, "black"),
        Segment::new(3, 3, 7.0, -2.0, 9.0, -2.0, "black"),
    ];

    let (polygon, visible) =
        visibility_polygon_tracked(origin, &blockers, bbox, &SweepOpts::default());

    println!("visible blockers: {visible:?}");
    println!("{} vertices:", polygon.len());
    for i in 0..polygon.len() {
        let v = polygon.vertex(i);
        println!("  ({:8.3}, {:8.3})", v.x, v.y);
    }
}
