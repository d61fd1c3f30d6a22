use std::path::PathBuf;

use clap::Args;
use log::{error, info, warn};

use crate::errors::{ProducerError, SearchError};
use crate::graph_algos::{a_star, brushfire, wavefront, BrushfireSource, Heuristic};
use crate::grid::codec::{read_grid_file, with_frame};
use crate::metrics::{measure_search, ProcessMetrics};
use crate::report::{ResultReport, RunMetadata};
use crate::status::StatusCode;

/// Language tag this crate writes into its reports
pub const LANGUAGE: &str = "Rust";


/// Arguments every producer binary takes
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Grid file, one row per line, comma separated cell codes
    pub grid_file: PathBuf,
    /// Where to write the JSON result report
    pub output_file: PathBuf,
    /// Implementation tag written into the report
    #[arg(long, default_value = LANGUAGE)]
    pub language: String,
    /// Wall off the outer ring of the grid before searching
    #[arg(long)]
    pub frame: bool,
}

impl CommonArgs {
    pub fn into_config(self, search: SearchKind) -> ProducerConfig {
        ProducerConfig {
            grid_file: self.grid_file,
            output_file: self.output_file,
            language: self.language,
            frame: self.frame,
            search,
        }
    }
}


/// Which search a producer runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchKind {
    // raw command line value, parsed in `execute`
    AStar { heuristic: Option<String> },
    Wavefront,
    Brushfire { source: BrushfireSource },
}

impl SearchKind {
    /// Algorithm tag used in reports and result file names
    pub fn name(&self) -> &'static str {
        match self {
            SearchKind::AStar { .. } => "AStar",
            SearchKind::Wavefront => "Wavefront",
            SearchKind::Brushfire { .. } => "Brushfire",
        }
    }
}


/// One producer invocation
#[derive(Clone, Debug)]
pub struct ProducerConfig {
    pub grid_file: PathBuf,
    pub output_file: PathBuf,
    pub language: String,
    pub frame: bool,
    pub search: SearchKind,
}

impl ProducerConfig {
    pub fn metadata(&self) -> RunMetadata {
        RunMetadata::new(self.search.name(), self.language.clone())
    }
}


/// Run a producer end to end and return its status
/// The report is written for failures too whenever the output path allows it
pub fn run(config: &ProducerConfig, metrics: &dyn ProcessMetrics) -> StatusCode {
    let metadata = config.metadata();

    let report = match execute(config, metrics) {
        Ok(report) => report,
        Err(e) => {
            error!("{}: {e}", metadata.algorithm);
            ResultReport::failure(e.status_code(), &metadata)
        }
    };
    // status_code always comes from the table above
    let status = report.status().unwrap_or(StatusCode::OutputFailure);

    if let Err(e) = report.write_to(&config.output_file) {
        error!("{}: {e}", metadata.algorithm);
        return StatusCode::OutputFailure;
    }
    info!("{}: wrote {} (status {status})", metadata.algorithm, config.output_file.display());
    status
}

/// Everything up to, but not including, writing the report
pub fn execute(config: &ProducerConfig, metrics: &dyn ProcessMetrics) -> Result<ResultReport, ProducerError> {
    // A bad heuristic is a configuration error, found before touching the grid file
    let heuristic = match &config.search {
        SearchKind::AStar { heuristic: Some(name) } => Some(name.parse::<Heuristic>()?),
        SearchKind::AStar { heuristic: None } => {
            return Err(SearchError::InvalidHeuristic(String::new()).into());
        }
        _ => None,
    };

    let mut grid = read_grid_file(&config.grid_file)?;
    if config.frame {
        grid = with_frame(&grid);
    }
    info!(
        "{}: {}x{} grid from {}",
        config.search.name(),
        grid.rows(),
        grid.cols(),
        config.grid_file.display()
    );

    // Only the search itself sits inside the measurement
    let result = match (&config.search, heuristic) {
        (SearchKind::AStar { .. }, Some(h)) => measure_search(metrics, || a_star(&grid, h))?,
        (SearchKind::AStar { .. }, None) => {
            return Err(SearchError::InvalidHeuristic(String::new()).into());
        }
        (SearchKind::Wavefront, _) => measure_search(metrics, || wavefront(&grid))?,
        (SearchKind::Brushfire { source }, _) => measure_search(metrics, || brushfire(&grid, *source))?,
    };

    if result.is_unreachable() {
        warn!("{}: goal unreachable", config.search.name());
    }
    info!(
        "{}: status {}, path length {}, {:.3} ms",
        config.search.name(),
        result.status,
        result.path_length(),
        result.elapsed.as_secs_f64() * 1000.0
    );

    Ok(ResultReport::new(&result, &config.metadata()))
}

/// env_logger with RUST_LOG, warnings and up by default
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
