use std::process::ExitCode;

use clap::Parser;

use gridbench::graph_algos::BrushfireSource;
use gridbench::metrics::platform_metrics;
use gridbench::producer::{self, CommonArgs, SearchKind};

/// Brushfire distance transform of a grid file, no path is produced
#[derive(Parser, Debug)]
#[command(name = "brushfire", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
    /// Seed the fire from every obstacle (clearance map) or from the start cell
    #[arg(long, default_value_t = BrushfireSource::Obstacles)]
    source: BrushfireSource,
}

fn main() -> ExitCode {
    producer::init_logging();
    let cli = Cli::parse();

    let config = cli.common.into_config(SearchKind::Brushfire { source: cli.source });
    ExitCode::from(producer::run(&config, platform_metrics().as_ref()).exit_code())
}
