//! cpair - closest pair of 2-D points over a tree of child processes.
//!
//! Reads the point set from standard input in the line format of
//! [`cpair_core::protocol`], prints the closest pair to standard output, and
//! exits nonzero with a classified code on any failure. A zero-argument
//! invocation is the canonical form; children are always exec'd with zero
//! arguments, and the engine choice reaches them through the environment,
//! not through flags.

use clap::Parser;
use cpair_core::{protocol, solve, CpairError, Engine, RunConfig};
use tokio::io::AsyncReadExt;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cpair")]
#[command(about = "Closest pair of 2-D points via divide and conquer")]
struct Args {
    /// Recursion engine: "process" or "in-process" (overrides CPAIR_ENGINE)
    #[arg(long)]
    engine: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(args).await {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}

/// Log to standard error only: standard output is the result channel of
/// the wire protocol. Default level is `warn` so a clean run stays silent.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run(args: Args) -> cpair_core::Result<()> {
    let mut config = RunConfig::from_env()?;
    if let Some(engine) = &args.engine {
        config = config.with_engine(engine.parse()?);
    }

    let mut input = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut input)
        .await
        .map_err(|e| CpairError::io("read standard input", e))?;
    let points = protocol::read_points(&input[..])?;

    let result = match config.engine {
        Engine::Process => cpair_core::orchestrate(points, &config).await?,
        Engine::InProcess => solve::closest_pair(&points),
    };

    if let Some(pair) = result {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if config.is_root() {
            protocol::write_pair(&mut out, &pair)?;
        } else {
            // Internal result climbing the tree: keep full precision.
            protocol::write_points(&mut out, &[pair.first(), pair.second()])?;
        }
    }
    Ok(())
}
