//! Point-set partitioning for the divide step.
//!
//! The split rule is chosen from the coordinates: a set of identical points
//! splits by index into two contiguous halves; a vertical line splits at the
//! mean of y; everything else splits at the mean of x. Threshold splits use
//! strict less-than, so skewed coordinate distributions can produce a
//! heavily unbalanced partition; accepted, not corrected.

use crate::point::Point;

/// Two non-overlapping subsets whose union is the parent set.
///
/// Every parent point lands in exactly one subset; nothing is duplicated or
/// lost. Callers resolve sets of fewer than three points as base cases
/// before splitting.
#[derive(Debug)]
pub struct Partition {
    pub lower: Vec<Point>,
    pub upper: Vec<Point>,
}

/// How to divide a particular point set.
#[derive(Debug, PartialEq)]
enum SplitRule {
    /// All points identical: contiguous halves by index.
    IndexHalves,
    /// All x identical (vertical line): threshold on y at its mean.
    MeanY(f64),
    /// General case: threshold on x at its mean.
    MeanX(f64),
}

fn choose_rule(points: &[Point]) -> SplitRule {
    let same_x = points.windows(2).all(|w| w[0].x == w[1].x);
    if same_x {
        let same_y = points.windows(2).all(|w| w[0].y == w[1].y);
        if same_y {
            return SplitRule::IndexHalves;
        }
        return SplitRule::MeanY(mean(points.iter().map(|p| p.y)));
    }
    SplitRule::MeanX(mean(points.iter().map(|p| p.x)))
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    values.sum::<f64>() / len as f64
}

/// Split a point set into two subsets, consuming it.
pub fn split(points: Vec<Point>) -> Partition {
    match choose_rule(&points) {
        SplitRule::IndexHalves => split_by_index(points),
        SplitRule::MeanY(threshold) => split_by_threshold(points, threshold, |p| p.y),
        SplitRule::MeanX(threshold) => split_by_threshold(points, threshold, |p| p.x),
    }
}

fn split_by_index(mut points: Vec<Point>) -> Partition {
    let upper = points.split_off(points.len() / 2);
    Partition {
        lower: points,
        upper,
    }
}

fn split_by_threshold(points: Vec<Point>, threshold: f64, key: fn(&Point) -> f64) -> Partition {
    let (lower, upper): (Vec<Point>, Vec<Point>) =
        points.into_iter().partition(|p| key(p) < threshold);

    // The mean of a non-constant coordinate lies strictly between min and
    // max, so both sides are normally populated. At the limit of f64
    // resolution the rounded mean can collapse onto the minimum and leave
    // `lower` empty; fall back to the index split so recursion terminates.
    if lower.is_empty() {
        return split_by_index(upper);
    }
    if upper.is_empty() {
        return split_by_index(lower);
    }
    Partition { lower, upper }
}
