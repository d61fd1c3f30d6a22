use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ReportError;
use crate::geometry::Coordinate;
use crate::graph_algos::SearchResult;
use crate::status::StatusCode;

/// Value of a string field the producer left out
pub const MISSING_TAG: &str = "none";

const BYTES_PER_MB: f64 = 1_048_576.0;
const NANOS_PER_MS: f64 = 1_000_000.0;


/// Who produced a report: algorithm tag and implementation language tag
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunMetadata {
    pub algorithm: String,
    pub language: String,
}

impl RunMetadata {

    pub fn new(algorithm: impl Into<String>, language: impl Into<String>) -> Self {
        Self { algorithm: algorithm.into(), language: language.into() }
    }

    /// `result_<Algorithm>_<Language>.json`
    pub fn result_file_name(&self) -> String {
        format!("result_{}_{}.json", self.algorithm, self.language)
    }

    /// Inverse of `result_file_name`
    /// The language tag is everything after the last underscore
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_prefix("result_")?.strip_suffix(".json")?;
        let (algorithm, language) = stem.rsplit_once('_')?;
        if algorithm.is_empty() || language.is_empty() {
            return None;
        }
        Some(Self::new(algorithm, language))
    }
}


fn missing_tag() -> String {
    MISSING_TAG.to_string()
}

/// One run's persisted outcome, the JSON document every producer writes
/// Absent fields read as `0`, `"none"` or empty. A document that is not an object,
/// has a mistyped field, or carries a ragged `algorithm_map` is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultReport {
    #[serde(default)]
    pub algorithm_map: Vec<Vec<i32>>,
    #[serde(default)]
    pub status_code: i32,
    #[serde(default)]
    pub path_length: i32,
    #[serde(default)]
    pub path: Vec<Coordinate>,
    #[serde(default)]
    pub computing_time: f64, // milliseconds, search only
    #[serde(default)]
    pub memory_usage: f64, // MB, search only
    #[serde(default = "missing_tag")]
    pub language: String,
    #[serde(default = "missing_tag")]
    pub algorithm: String,
}

impl Default for ResultReport {
    fn default() -> Self {
        Self {
            algorithm_map: Vec::new(),
            status_code: 0,
            path_length: 0,
            path: Vec::new(),
            computing_time: 0.0,
            memory_usage: 0.0,
            language: missing_tag(),
            algorithm: missing_tag(),
        }
    }
}

impl ResultReport {

    /// Report for a finished search
    pub fn new(result: &SearchResult, metadata: &RunMetadata) -> Self {
        Self {
            algorithm_map: result.distance_field.to_rows(),
            status_code: result.status.code(),
            path_length: result.path_length(),
            path: result.path.clone(),
            computing_time: result.elapsed.as_nanos() as f64 / NANOS_PER_MS,
            memory_usage: result.memory_delta as f64 / BYTES_PER_MB,
            language: metadata.language.clone(),
            algorithm: metadata.algorithm.clone(),
        }
    }

    /// Report for a run that failed before or instead of searching
    pub fn failure(status: StatusCode, metadata: &RunMetadata) -> Self {
        Self {
            status_code: status.code(),
            path_length: -1,
            language: metadata.language.clone(),
            algorithm: metadata.algorithm.clone(),
            ..Self::default()
        }
    }

    pub fn metadata(&self) -> RunMetadata {
        RunMetadata::new(self.algorithm.clone(), self.language.clone())
    }

    /// Known status, None for codes outside the shared table (including the 0 default)
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_code(self.status_code)
    }

    /// Consecutive path cells differ by exactly one row or one column
    pub fn path_is_contiguous(&self) -> bool {
        self.path.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Parse a report document
    pub fn from_json(text: &str) -> Result<Self, ReportError> {
        // Checked up front: derived struct decoding would also take a JSON array
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(ReportError::Format("report must be a JSON object".to_string()));
        }

        let report: ResultReport = serde_json::from_value(value)?;

        if let Some(first) = report.algorithm_map.first() {
            let width = first.len();
            if let Some(row) = report.algorithm_map.iter().position(|r| r.len() != width) {
                return Err(ReportError::Format(format!(
                    "algorithm_map row {row} has {} columns, expected {width}",
                    report.algorithm_map[row].len()
                )));
            }
        }
        Ok(report)
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let text = self.to_json()?;
        fs::write(path, text).map_err(|source| ReportError::Output {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn read_from(path: &Path) -> Result<Self, ReportError> {
        let text = fs::read_to_string(path).map_err(|source| ReportError::Input {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}
