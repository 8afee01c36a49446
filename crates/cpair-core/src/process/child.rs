//! One spawned child of the recursion tree.

use crate::config::{RunConfig, DEPTH_ENV, ENGINE_ENV};
use crate::error::{CpairError, Result};
use crate::point::{Point, PointPair};
use crate::protocol;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::debug;

/// Owns a spawned child and the two pipe ends the parent keeps: the write
/// end of the child's input and the read end of its output.
///
/// Created at spawn, consumed by [`ChildHandle::run`], which drives the
/// child through its whole lifetime.
pub struct ChildHandle {
    pid: u32,
    child: Child,
    stdin: ChildStdin,
    stdout: ChildStdout,
}

impl ChildHandle {
    /// Spawn one re-invocation of `exe` with zero arguments.
    ///
    /// The engine choice and the child's depth travel in the environment.
    /// Standard error stays inherited. The runtime opens every pipe end
    /// close-on-exec, so the child never sees its sibling's descriptors.
    pub fn spawn(exe: &Path, config: &RunConfig) -> Result<Self> {
        let mut child = Command::new(exe)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .env(ENGINE_ENV, config.engine.as_str())
            .env(DEPTH_ENV, config.child_depth().to_string())
            .spawn()
            .map_err(|source| CpairError::Spawn { source })?;

        let stdin = child
            .stdin
            .take()
            .ok_or(CpairError::PipeUnavailable("stdin"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or(CpairError::PipeUnavailable("stdout"))?;
        let pid = child.id().unwrap_or_default();
        debug!(pid, depth = config.child_depth(), "spawned child");

        Ok(Self {
            pid,
            child,
            stdin,
            stdout,
        })
    }

    /// Deliver the partition, await the child's exit, collect its result.
    ///
    /// Strictly ordered: write everything, close the write end to deliver
    /// end-of-input, wait for the exit status, and only then read the output
    /// pipe. A child that has exited has flushed and closed its output. A
    /// nonzero or signal exit is fatal; no partial result is substituted.
    pub async fn run(self, points: &[Point]) -> Result<Option<PointPair>> {
        let Self {
            pid,
            mut child,
            mut stdin,
            mut stdout,
        } = self;

        let mut wire = Vec::new();
        protocol::write_points(&mut wire, points)?;
        stdin
            .write_all(&wire)
            .await
            .map_err(|e| CpairError::io("write partition to child", e))?;
        stdin
            .shutdown()
            .await
            .map_err(|e| CpairError::io("close child input", e))?;
        drop(stdin);

        let status = child
            .wait()
            .await
            .map_err(|e| CpairError::io("wait for child", e))?;
        if !status.success() {
            return Err(CpairError::ChildFailed { pid, status });
        }
        debug!(pid, "child exited cleanly");

        let mut wire = Vec::new();
        stdout
            .read_to_end(&mut wire)
            .await
            .map_err(|e| CpairError::io("read child result", e))?;
        let result = protocol::read_points(&wire[..])?;
        match result.as_slice() {
            [] => Ok(None),
            [a, b] => Ok(Some(PointPair::new(*a, *b))),
            other => Err(CpairError::ChildResult { count: other.len() }),
        }
    }
}
