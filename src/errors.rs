use std::path::PathBuf;

use thiserror::Error;

use crate::status::StatusCode;


/// Malformed grid text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("grid has no rows")]
    EmptyGrid,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row}, column {col}: '{token}' is not an integer")]
    InvalidToken { row: usize, col: usize, token: String },
    #[error("row {row}, column {col}: {value} is not a cell code")]
    UnknownCellCode { row: usize, col: usize, value: i64 },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
}


/// Random map parameters that cannot produce a usable grid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Shape(#[from] FormatError),
    #[error("obstacle density {0} is not within [0, 1]")]
    InvalidDensity(f64),
    #[error("a framed {rows}x{cols} grid has no inner cells for start and goal")]
    FrameTooThin { rows: usize, cols: usize },
}


/// Configuration problems that stop a search before it starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid heuristic '{0}', expected 'manhattan' or 'airplane'")]
    InvalidHeuristic(String),
    #[error("no start cell in grid")]
    StartNotFound,
    #[error("no goal cell in grid")]
    GoalNotFound,
    #[error("more than one start cell in grid")]
    MultipleStarts,
    #[error("more than one goal cell in grid")]
    MultipleGoals,
    // Reconstruction hit a cell with no predecessor one step closer
    #[error("distance field has no descending neighbour at row {row}, column {col}")]
    BrokenGradient { row: usize, col: usize },
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidHeuristic(_) => StatusCode::InvalidHeuristic,
            SearchError::StartNotFound => StatusCode::StartNotFound,
            SearchError::GoalNotFound => StatusCode::GoalNotFound,
            SearchError::MultipleStarts => StatusCode::MultipleStarts,
            SearchError::MultipleGoals => StatusCode::MultipleGoals,
            SearchError::BrokenGradient { .. } => StatusCode::OutputFailure,
        }
    }
}


/// Failures of the result report codec
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report is not valid: {0}")]
    Format(String),
    #[error("cannot read report {path}: {source}")]
    Input { path: PathBuf, source: std::io::Error },
    #[error("cannot write report {path}: {source}")]
    Output { path: PathBuf, source: std::io::Error },
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::Format(error.to_string())
    }
}


/// Fatal errors of a single producer run
#[derive(Debug, Error)]
pub enum ProducerError {
    #[error("cannot read grid {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("grid {path} is malformed: {source}")]
    Format { path: PathBuf, source: FormatError },
    #[error(transparent)]
    Config(#[from] SearchError),
    #[error(transparent)]
    Output(#[from] ReportError),
}

impl ProducerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProducerError::Read { .. } | ProducerError::Format { .. } => StatusCode::InputFailure,
            ProducerError::Config(e) => e.status_code(),
            ProducerError::Output(_) => StatusCode::OutputFailure,
        }
    }
}


/// Failures while driving producers or collecting their reports
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("cannot launch {program}: {source}")]
    Launch { program: String, source: std::io::Error },
    #[error("{program} exited with {code:?} and no report at {report}")]
    MissingReport { program: String, code: Option<i32>, report: PathBuf },
    #[error("cannot list {path}: {source}")]
    ReadDir { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Report(#[from] ReportError),
}
