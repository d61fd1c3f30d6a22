pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod harness;
pub mod metrics;
pub mod producer;
pub mod report;
pub mod status;

pub use errors::{FormatError, GenerateError, HarnessError, ProducerError, ReportError, SearchError};
pub use geometry::Coordinate;
pub use graph_algos::{a_star, brushfire, wavefront, BrushfireSource, DistanceField, Heuristic, SearchResult};
pub use grid::{CellCode, GridMap};
pub use report::{ResultReport, RunMetadata};
pub use status::StatusCode;
