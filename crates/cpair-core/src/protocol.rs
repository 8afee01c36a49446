//! Line-oriented wire format shared by standard input and child pipes.
//!
//! One point per line, two float tokens separated by whitespace:
//!
//! ```text
//! <x> <y>\n
//! <x> <y>\n
//! \n            (optional: explicit end-of-input marker)
//! ```
//!
//! A line that is exactly a line terminator marks end-of-input; any
//! non-blank line after it is an error. End-of-stream without the marker is
//! a valid termination, and an empty stream is an empty point set.
//!
//! Points written to a child pipe use round-trip `f64` formatting so no
//! precision is lost climbing the process tree; only the root process
//! renders the final pair at 3 decimals (`write_pair`). The reader accepts
//! both forms.

use crate::error::{CpairError, Result};
use crate::point::{Point, PointPair};
use std::io::{BufRead, Write};

/// Read a point set from a line stream until its end-of-input marker or EOF.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points: Vec<Point> = Vec::with_capacity(2);
    let mut after_marker = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CpairError::io("read point stream", e))?;
        let number = index + 1;

        if line.is_empty() {
            after_marker = true;
            continue;
        }
        if after_marker {
            return Err(CpairError::TrailingData {
                line: number,
                content: line,
            });
        }
        points.push(parse_line(number, &line)?);
    }

    Ok(points)
}

/// Parse one `"<x> <y>"` line.
fn parse_line(number: usize, line: &str) -> Result<Point> {
    let malformed = || CpairError::MalformedLine {
        line: number,
        content: line.to_string(),
    };

    let mut tokens = line.split_whitespace();
    let x = tokens.next().ok_or_else(malformed)?;
    let y = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    let x: f64 = x.parse().map_err(|_| malformed())?;
    let y: f64 = y.parse().map_err(|_| malformed())?;
    Ok(Point::new(x, y))
}

/// Write a point set in wire form, one round-trip-precision line per point.
///
/// Used for partitions sent to children and for results climbing back up;
/// closing the write end afterwards is what signals end-of-input.
pub fn write_points<W: Write>(writer: &mut W, points: &[Point]) -> Result<()> {
    for point in points {
        writeln!(writer, "{} {}", point.x, point.y)
            .map_err(|e| CpairError::io("write point stream", e))?;
    }
    Ok(())
}

/// Render the final pair for the terminal: two `"X Y"` lines at 3 decimals.
pub fn write_pair<W: Write>(writer: &mut W, pair: &PointPair) -> Result<()> {
    for point in [pair.first(), pair.second()] {
        writeln!(writer, "{:.3} {:.3}", point.x, point.y)
            .map_err(|e| CpairError::io("write result stream", e))?;
    }
    Ok(())
}
