//! Sweep events: one Start and one End per working segment.

use nalgebra::Vector2;

use crate::geom::{distance, polar_angle, GeomCfg, Segment};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Start,
    End,
}

/// An endpoint of a working segment, tagged for the sweep.
#[derive(Clone, Debug)]
pub struct Event {
    pub point: Vector2<f64>,
    pub angle: f64,
    pub dist: f64,
    pub kind: EventKind,
    /// Index into the working segment list (identity, not a copy).
    pub seg: usize,
}

/// Which slice sort orders the event list.
///
/// `Quick` maps to the unstable pattern-defeating quicksort, `Merge` to the
/// stable merge sort. Exact ties keep input order only under `Merge`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortAlgo {
    #[default]
    Quick,
    Merge,
}

/// Two events per segment. Start is the endpoint with the smaller polar
/// angle; within eps of a tie, the closer endpoint starts.
///
/// Seam rule: after the seam split no segment crosses angle 0, but one may
/// still touch it from below (one endpoint at angle 0, the other past π).
/// That endpoint is reported at angle 2π, so the segment starts at its lower
/// endpoint and ends where the sweep ends instead of ending before it began.
pub fn extract_events(segs: &[Segment], origin: Vector2<f64>, cfg: GeomCfg) -> Vec<Event> {
    let mut events = Vec::with_capacity(2 * segs.len());
    for (i, s) in segs.iter().enumerate() {
        let mut a1 = polar_angle(origin, s.p1);
        let mut a2 = polar_angle(origin, s.p2);
        if a1 < cfg.eps && a2 > std::f64::consts::PI {
            a1 = std::f64::consts::TAU;
        }
        if a2 < cfg.eps && a1 > std::f64::consts::PI {
            a2 = std::f64::consts::TAU;
        }
        let d1 = distance(origin, s.p1);
        let d2 = distance(origin, s.p2);

        let p1_starts = a1 < a2 - cfg.eps || ((a1 - a2).abs() <= cfg.eps && d1 < d2);
        let ((sp, sa, sd), (ep, ea, ed)) = if p1_starts {
            ((s.p1, a1, d1), (s.p2, a2, d2))
        } else {
            ((s.p2, a2, d2), (s.p1, a1, d1))
        };
        events.push(Event {
            point: sp,
            angle: sa,
            dist: sd,
            kind: EventKind::Start,
            seg: i,
        });
        events.push(Event {
            point: ep,
            angle: ea,
            dist: ed,
            kind: EventKind::End,
            seg: i,
        });
    }
    events
}

/// Total order of the sweep: angle ascending, Start before End, distance
/// ascending. Exact triple ties are left to the sort (deterministic for a
/// given input and algorithm).
fn compare(a: &Event, b: &Event) -> std::cmp::Ordering {
    a.angle
        .partial_cmp(&b.angle)
        .unwrap_or(std::cmp::Ordering::Equal)
        .then_with(|| match (a.kind, b.kind) {
            (EventKind::Start, EventKind::End) => std::cmp::Ordering::Less,
            (EventKind::End, EventKind::Start) => std::cmp::Ordering::Greater,
            _ => std::cmp::Ordering::Equal,
        })
        .then_with(|| a.dist.partial_cmp(&b.dist).unwrap_or(std::cmp::Ordering::Equal))
}

pub fn sort_events(events: &mut [Event], algo: SortAlgo) {
    match algo {
        SortAlgo::Quick => events.sort_unstable_by(compare),
        SortAlgo::Merge => events.sort_by(compare),
    }
}
