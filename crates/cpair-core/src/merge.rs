//! The conquer step: combine two sub-results into the global closest pair.
//!
//! The candidate is seeded from whichever sub-result is closer, then an
//! exhaustive cross-partition scan compares every lower point against every
//! upper point. The scan is O(|A|·|B|) by design, not a bounded strip merge;
//! replacement requires a strictly smaller distance, so the earliest-found
//! pair wins ties.

use crate::point::{Point, PointPair};

/// Merge two sub-results with an exhaustive cross-partition scan.
pub fn merge(
    left: Option<PointPair>,
    right: Option<PointPair>,
    lower: &[Point],
    upper: &[Point],
) -> Option<PointPair> {
    let mut best: Option<(PointPair, f64)> = match (left, right) {
        (Some(a), Some(b)) => {
            let closer = if b.distance() < a.distance() { b } else { a };
            Some((closer, closer.distance()))
        }
        (Some(a), None) => Some((a, a.distance())),
        (None, Some(b)) => Some((b, b.distance())),
        (None, None) => None,
    };

    for a in lower {
        for b in upper {
            let distance = a.distance_to(b);
            let improves = match best {
                Some((_, best_distance)) => distance < best_distance,
                None => true,
            };
            if improves {
                best = Some((PointPair::new(*a, *b), distance));
            }
        }
    }

    best.map(|(pair, _)| pair)
}
