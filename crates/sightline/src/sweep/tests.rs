use super::*;
use crate::geom::{point_segment_dist_sq, polar_angle, GeomCfg, Rect, Segment};
use crate::scene::sample::{draw_segments, sample_bounds, ReplayToken, SceneCfg};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

const BOX: Rect = Rect {
    min_x: -10.0,
    min_y: -10.0,
    max_x: 10.0,
    max_y: 10.0,
};

fn origin() -> Vector2<f64> {
    vector![0.0, 0.0]
}

/// Signed shoelace area; positive for CCW vertex order.
fn shoelace(p: &Polygon) -> f64 {
    let n = p.len();
    let mut acc = 0.0;
    for i in 0..n {
        let a = p.vertex(i);
        let b = p.vertex((i + 1) % n);
        acc += a.x * b.y - b.x * a.y;
    }
    acc / 2.0
}

/// Count descents in the vertex angle sequence; a closed sweep output wraps
/// at most once.
fn angle_descents(origin: Vector2<f64>, p: &Polygon) -> usize {
    let mut descents = 0;
    for i in 1..p.len() {
        let a = polar_angle(origin, p.vertex(i - 1));
        let b = polar_angle(origin, p.vertex(i));
        if b < a - 1e-9 {
            descents += 1;
        }
    }
    descents
}

#[test]
fn empty_scene_yields_padded_box() {
    let opts = SweepOpts::default();
    let p = visibility_polygon(origin(), &[], BOX, &opts);

    // margin 5 on each side: 30 x 30
    assert!(p.len() >= 4);
    assert!((shoelace(&p) - 900.0).abs() < 1e-6);
    // all four corners present
    for corner in [
        vector![15.0, -15.0],
        vector![15.0, 15.0],
        vector![-15.0, 15.0],
        vector![-15.0, -15.0],
    ] {
        assert!(
            (0..p.len()).any(|i| (p.vertex(i) - corner).norm() < 1e-9),
            "missing corner {corner:?}"
        );
    }
    // CCW, starting on the seam
    assert!(shoelace(&p) > 0.0);
    assert!((p.vertex(0) - vector![15.0, 0.0]).norm() < 1e-9);
}

#[test]
fn single_wall_blocks_the_far_side() {
    let wall = Segment::new(1, 1, 5.0, -5.0, 5.0, 5.0, "black");
    let opts = SweepOpts::default();
    let p = visibility_polygon(origin(), &[wall], BOX, &opts);

    // the wall's endpoints are polygon vertices
    for endpoint in [vector![5.0, -5.0], vector![5.0, 5.0]] {
        assert!(
            (0..p.len()).any(|i| (p.vertex(i) - endpoint).norm() < 1e-9),
            "missing wall endpoint {endpoint:?}"
        );
    }
    // shadow behind the wall, open field elsewhere
    assert!(!p.contains_point(8.0, 0.0));
    assert!(!p.contains_point(14.0, 1.0));
    assert!(p.contains_point(3.0, 0.0));
    assert!(p.contains_point(-12.0, 0.0));
    assert!(p.contains_point(8.0, 12.0));
    assert!(angle_descents(origin(), &p) <= 1);
}

#[test]
fn tracked_sweep_reports_the_wall_once() {
    let wall = Segment::new(1, 1, 5.0, -5.0, 5.0, 5.0, "black");
    let far = Segment::new(2, 2, 7.0, -3.0, 7.0, 3.0, "black");
    let opts = SweepOpts::default();
    let (_, visible) = visibility_polygon_tracked(origin(), &[wall, far], BOX, &opts);

    // the near wall fully occludes the far one; the seam split must not
    // produce duplicate ids
    assert_eq!(visible, vec![1]);
}

#[test]
fn near_seam_blocker_closes_cleanly() {
    // spans almost the whole upper half-plane, grazing the seam
    let graze = Segment::new(1, 1, -1.0, 0.0001, 10.0, 0.0001, "black");
    let opts = SweepOpts::default();
    let p = visibility_polygon(origin(), &[graze], BOX, &opts);

    assert!(p.len() >= 3);
    assert!(angle_descents(origin(), &p) <= 1);
    // nothing above the blocker within its angular range is visible
    assert!(!p.contains_point(2.0, 5.0));
    assert!(p.contains_point(2.0, -5.0));
}

#[test]
fn seam_crossing_blocker_is_split() {
    // crosses the positive x axis; without the seam split its events would
    // wrap and the region behind it would leak
    let crossing = Segment::new(1, 1, 6.0, -4.0, 6.0, 4.0, "black");
    let opts = SweepOpts::default();
    let p = visibility_polygon(origin(), &[crossing], BOX, &opts);

    // the seam intersection is the start vertex
    assert!((p.vertex(0) - vector![6.0, 0.0]).norm() < 1e-9);
    assert!(!p.contains_point(9.0, 0.0));
    assert!(p.contains_point(4.0, 0.0));
}

#[test]
fn origin_outside_box_extends_the_box() {
    let opts = SweepOpts::default();
    let outside = vector![30.0, 0.0];
    let p = visibility_polygon(outside, &[], BOX, &opts);

    // box grows to [-10,30]x[-10,10] plus margin; the sweep still closes
    assert!(p.len() >= 4);
    assert!((shoelace(&p) - 50.0 * 30.0).abs() < 1e-6);
    assert!(p.contains_point(34.0, 0.0));
}

#[test]
fn degenerate_blocker_on_origin_is_ignored() {
    let dot = Segment::new(1, 1, 0.0, 0.0, 0.0, 0.0, "black");
    let opts = SweepOpts::default();
    let p = visibility_polygon(origin(), &[dot], BOX, &opts);
    assert!((shoelace(&p) - 900.0).abs() < 1e-6);
}

#[test]
fn merge_and_quick_sort_agree_on_generic_scenes() {
    let cfg = SceneCfg::default();
    let segs = draw_segments(cfg, ReplayToken { seed: 11, index: 0 });
    let quick = visibility_polygon(
        origin(),
        &segs,
        sample_bounds(cfg),
        &SweepOpts {
            sort: SortAlgo::Quick,
            ..SweepOpts::default()
        },
    );
    let merge = visibility_polygon(
        origin(),
        &segs,
        sample_bounds(cfg),
        &SweepOpts {
            sort: SortAlgo::Merge,
            ..SweepOpts::default()
        },
    );
    assert_eq!(quick.len(), merge.len());
    for i in 0..quick.len() {
        assert!((quick.vertex(i) - merge.vertex(i)).norm() < 1e-9);
    }
}

#[test]
fn active_set_tracks_the_rotating_ray() {
    let cfg = GeomCfg::default();
    let segs = vec![
        Segment::new(1, 1, 5.0, -5.0, 5.0, 5.0, "a"),   // east wall
        Segment::new(2, 2, -5.0, -5.0, -5.0, 5.0, "b"), // west wall
        Segment::new(3, 3, 2.0, -5.0, 2.0, 5.0, "c"),   // nearer east wall
    ];
    let mut active = ActiveSegments::new(&segs, origin(), cfg);
    assert!(active.is_empty());

    active.insert(0);
    active.insert(1);
    active.insert(2);
    assert_eq!(active.len(), 3);
    // duplicate insert is a no-op
    active.insert(0);
    assert_eq!(active.len(), 3);

    // at angle 0 the nearest east wall wins
    assert_eq!(active.min(), Some(2));

    // swinging to π the west wall is the only hit
    active.set_angle(std::f64::consts::PI);
    assert_eq!(active.min(), Some(1));

    // removing an absent member is a no-op
    active.remove(17);
    assert_eq!(active.len(), 3);
    active.remove(1);
    active.set_angle(0.0);
    assert_eq!(active.min(), Some(2));
    active.remove(2);
    assert_eq!(active.min(), Some(0));
}

#[test]
fn event_extraction_picks_start_by_angle_then_distance() {
    let cfg = GeomCfg::default();
    let segs = vec![
        // p2 has the smaller angle
        Segment::new(1, 1, -3.0, 3.0, 3.0, 3.0, "a"),
        // collinear with the origin: same angle, nearer endpoint starts
        Segment::new(2, 2, 6.0, 6.0, 2.0, 2.0, "b"),
    ];
    let events = extract_events(&segs, origin(), cfg);
    assert_eq!(events.len(), 4);

    assert_eq!(events[0].kind, EventKind::Start);
    assert!((events[0].point - vector![3.0, 3.0]).norm() < 1e-12);
    assert_eq!(events[1].kind, EventKind::End);

    assert_eq!(events[2].kind, EventKind::Start);
    assert!((events[2].point - vector![2.0, 2.0]).norm() < 1e-12);

    let mut sorted = events;
    sort_events(&mut sorted, SortAlgo::Merge);
    // both segments share the 45° start angle; starts sort before ends and
    // the closer start comes first
    assert_eq!(sorted[0].kind, EventKind::Start);
    assert!(sorted[0].dist < sorted[1].dist);
    assert_eq!(sorted[1].kind, EventKind::Start);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Closedness, no eps-duplicates, angular monotonicity modulo one wrap,
    /// and every vertex on a blocker or on the padded box.
    #[test]
    fn sweep_invariants_on_random_scenes(seed in any::<u64>(), index in 0u64..32, n in 1usize..25) {
        let cfg = SceneCfg { segments: n, ..SceneCfg::default() };
        let segs = draw_segments(cfg, ReplayToken { seed, index });
        let bbox = sample_bounds(cfg);
        let opts = SweepOpts::default();
        let p = visibility_polygon(origin(), &segs, bbox, &opts);

        prop_assert!(p.len() >= 3);
        prop_assert!(angle_descents(origin(), &p) <= 1);

        let eps = opts.cfg.eps;
        for i in 1..p.len() {
            let a = p.vertex(i - 1);
            let b = p.vertex(i);
            prop_assert!((a.x - b.x).abs() > eps || (a.y - b.y).abs() > eps);
        }

        // on-blocker-or-box: distance to the nearest input segment or to the
        // padded box boundary is tiny
        let padded = bbox.with_margin(opts.cfg.bbox_margin);
        let tol = 1e-6;
        for i in 0..p.len() {
            let v = p.vertex(i);
            let on_blocker = segs
                .iter()
                .any(|s| point_segment_dist_sq(v, s.p1, s.p2) < tol * tol);
            let on_box = (v.x - padded.min_x).abs() < tol
                || (v.x - padded.max_x).abs() < tol
                || (v.y - padded.min_y).abs() < tol
                || (v.y - padded.max_y).abs() < tol;
            prop_assert!(on_blocker || on_box, "stray vertex {v:?}");
        }
    }

    /// The tracked id set never names an artificial segment and never
    /// repeats an id.
    #[test]
    fn tracked_ids_are_real_and_unique(seed in any::<u64>(), n in 1usize..25) {
        let cfg = SceneCfg { segments: n, ..SceneCfg::default() };
        let segs = draw_segments(cfg, ReplayToken { seed, index: 0 });
        let (_, visible) = visibility_polygon_tracked(
            origin(),
            &segs,
            sample_bounds(cfg),
            &SweepOpts::default(),
        );
        for id in &visible {
            prop_assert!(*id > 0);
        }
        let mut dedup = visible.clone();
        dedup.sort_unstable();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), visible.len());
    }
}
