//! cpair-core - Closest pair of points with a process-tree recursion engine.
//!
//! Finds the two points of a 2-D set that minimize Euclidean distance, using
//! divide and conquer: partition the set, solve both halves, then combine
//! with an exhaustive cross-partition scan. The recursive calls can run as
//! child processes of the same executable communicating over pipes (the
//! process engine, see [`process`]), or as ordinary recursion (the
//! in-process engine, see [`solve`]); both honor the same split/merge
//! contract and produce identical results.
//!
//! Library callers usually want the in-process engine:
//!
//! ```rust
//! use cpair_core::{solve, Point};
//!
//! let points = [
//!     Point::new(1.0, 2.0),
//!     Point::new(3.0, 0.0),
//!     Point::new(1.1, 2.1),
//! ];
//! let pair = solve::closest_pair(&points).expect("two or more points");
//! assert_eq!(pair.first(), Point::new(1.0, 2.0));
//! ```
//!
//! The process engine is the binary's default; it re-invokes the running
//! executable for each half of a partition and propagates any child failure
//! as its own nonzero exit. Input and output travel in the line-oriented
//! wire format of [`protocol`].

pub mod config;
pub mod error;
pub mod merge;
pub mod partition;
pub mod point;
pub mod process;
pub mod protocol;
pub mod solve;

// Re-export commonly used types
pub use config::{Engine, RunConfig};
pub use error::{CpairError, Result};
pub use partition::Partition;
pub use point::{Point, PointPair};
pub use process::{orchestrate, ChildHandle};
