use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use gridbench::grid::codec::write_grid_file;
use gridbench::grid::generate::RandomGrid;
use gridbench::producer;

/// Write a random benchmark grid with one start and one goal
#[derive(Parser, Debug)]
#[command(name = "gridgen", version)]
struct Cli {
    /// Where to write the grid file
    output_file: PathBuf,
    #[arg(long)]
    rows: usize,
    #[arg(long)]
    cols: usize,
    /// Chance of each cell being an obstacle
    #[arg(long, default_value_t = 0.2)]
    density: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Wall off the outer ring
    #[arg(long)]
    frame: bool,
}

fn main() -> ExitCode {
    producer::init_logging();
    let cli = Cli::parse();

    let params = RandomGrid {
        density: cli.density,
        seed: cli.seed,
        frame: cli.frame,
        ..RandomGrid::new(cli.rows, cli.cols)
    };
    let grid = match params.generate() {
        Ok(grid) => grid,
        Err(e) => {
            error!("cannot generate a {}x{} grid: {e}", cli.rows, cli.cols);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_grid_file(&cli.output_file, &grid) {
        error!("cannot write {}: {e}", cli.output_file.display());
        return ExitCode::FAILURE;
    }
    info!("wrote {}x{} grid to {}", grid.rows(), grid.cols(), cli.output_file.display());
    ExitCode::SUCCESS
}
