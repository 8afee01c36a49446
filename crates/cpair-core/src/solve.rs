//! In-process recursion engine.
//!
//! The same split and merge contract as the process orchestrator, realized
//! as ordinary function calls over owned sub-ranges instead of child
//! processes. This is the engine for library callers and for runs where
//! fault containment across subproblems is not worth a process per
//! recursive call.

use crate::merge;
use crate::partition;
use crate::point::{Point, PointPair};

/// Find the closest pair of the set, or `None` for fewer than two points.
pub fn closest_pair(points: &[Point]) -> Option<PointPair> {
    match points {
        [] | [_] => None,
        [a, b] => Some(PointPair::new(*a, *b)),
        _ => {
            let partition = partition::split(points.to_vec());
            let left = closest_pair(&partition.lower);
            let right = closest_pair(&partition.upper);
            merge::merge(left, right, &partition.lower, &partition.upper)
        }
    }
}
