use std::process::ExitCode;

use clap::Parser;

use gridbench::metrics::platform_metrics;
use gridbench::producer::{self, CommonArgs, SearchKind};

/// Wavefront (breadth-first) shortest path over a grid file
#[derive(Parser, Debug)]
#[command(name = "wavefront", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    producer::init_logging();
    let cli = Cli::parse();

    let config = cli.common.into_config(SearchKind::Wavefront);
    ExitCode::from(producer::run(&config, platform_metrics().as_ref()).exit_code())
}
