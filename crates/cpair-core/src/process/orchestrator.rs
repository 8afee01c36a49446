//! The divide-and-delegate step of the process engine.

use super::ChildHandle;
use crate::config::RunConfig;
use crate::error::{CpairError, Result};
use crate::merge;
use crate::partition;
use crate::point::{Point, PointPair};
use tracing::debug;

/// Find the closest pair by delegating both halves to child processes.
///
/// Sets of up to two points are resolved here without spawning. Larger sets
/// are partitioned; two children of the current executable are spawned
/// before either is fed, then both are driven through feed → wait → collect
/// concurrently. Both children always run to termination (a failure of one
/// is inspected only after the other has been awaited), and either child
/// failing fails this process in turn.
pub async fn orchestrate(points: Vec<Point>, config: &RunConfig) -> Result<Option<PointPair>> {
    match points.as_slice() {
        [] | [_] => return Ok(None),
        [a, b] => return Ok(Some(PointPair::new(*a, *b))),
        _ => {}
    }

    debug!(
        count = points.len(),
        depth = config.depth,
        "delegating to child processes"
    );
    let partition = partition::split(points);
    let exe = std::env::current_exe().map_err(|source| CpairError::ExecutablePath { source })?;

    let lower_child = ChildHandle::spawn(&exe, config)?;
    let upper_child = ChildHandle::spawn(&exe, config)?;

    let (lower_result, upper_result) = tokio::join!(
        lower_child.run(&partition.lower),
        upper_child.run(&partition.upper),
    );
    let left = lower_result?;
    let right = upper_result?;

    Ok(merge::merge(left, right, &partition.lower, &partition.upper))
}
