//! Runtime configuration drawn from the environment.
//!
//! Children are always exec'd with zero arguments, so everything a child
//! must know travels in its environment: the recursion engine and the depth
//! of the spawned process within the tree. The root of the tree is the
//! process with no depth variable (or 0); only the root renders its result
//! at display precision.

use crate::error::{CpairError, Result};
use std::str::FromStr;

/// Environment variable selecting the recursion engine.
pub const ENGINE_ENV: &str = "CPAIR_ENGINE";
/// Environment variable carrying the recursion depth to a child process.
pub const DEPTH_ENV: &str = "CPAIR_DEPTH";

/// Strategy realizing the recursive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// One child process per half, wired over pipes.
    #[default]
    Process,
    /// Ordinary recursion over owned sub-ranges, same split/merge contract.
    InProcess,
}

impl Engine {
    /// Wire name, as accepted by [`ENGINE_ENV`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::InProcess => "in-process",
        }
    }
}

impl FromStr for Engine {
    type Err = CpairError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "process" => Ok(Self::Process),
            "in-process" => Ok(Self::InProcess),
            other => Err(CpairError::UnknownEngine(other.to_string())),
        }
    }
}

/// Per-process run configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub engine: Engine,
    pub depth: u32,
}

impl RunConfig {
    /// Read engine and depth from the process environment.
    pub fn from_env() -> Result<Self> {
        let engine = match std::env::var(ENGINE_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => Engine::default(),
        };
        // Only the orchestrator sets the depth variable, always numerically;
        // anything unparseable is treated as the root.
        let depth = std::env::var(DEPTH_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        Ok(Self { engine, depth })
    }

    /// Override the engine, e.g. from a command-line flag.
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Whether this process is the root of the recursion tree.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Depth for children spawned by this process.
    pub fn child_depth(&self) -> u32 {
        self.depth + 1
    }
}
