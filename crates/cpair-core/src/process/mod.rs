//! Process-tree recursion engine.
//!
//! Each recursive call runs as a fresh child process of this same
//! executable, exec'd with zero arguments. A child owns exactly two pipe
//! ends, its standard input (partition in) and standard output (result
//! out), and inherits standard error so diagnostics surface on the
//! outermost terminal.
//!
//! # Per-child protocol
//!
//! 1. write the partition in wire form to the child's input
//! 2. close the write end so the child sees end-of-input
//! 3. wait for the child to exit; any failure exit is fatal here too
//! 4. read and parse the result: 0 or exactly 2 points
//!
//! Both children advance through this protocol concurrently. There is no
//! cancellation: a parent failing mid-flight leaves spawned children to
//! terminate on their own once their pipes close.

mod child;
mod orchestrator;

pub use child::ChildHandle;
pub use orchestrator::orchestrate;
