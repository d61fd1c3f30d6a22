use std::process::ExitCode;

use clap::Parser;

use gridbench::metrics::platform_metrics;
use gridbench::producer::{self, CommonArgs, SearchKind};

/// A* shortest path over a grid file, written as a JSON result report
#[derive(Parser, Debug)]
#[command(name = "astar", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    /// `manhattan` or `airplane` (Euclidean), anything else exits with status 401
    heuristic: Option<String>,
}

fn main() -> ExitCode {
    producer::init_logging();
    let cli = Cli::parse();

    let config = cli.common.into_config(SearchKind::AStar { heuristic: cli.heuristic });
    let status = producer::run(&config, platform_metrics().as_ref());
    ExitCode::from(status.exit_code())
}
