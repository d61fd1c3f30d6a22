pub mod a_star;
pub mod brushfire;
pub mod wavefront;
mod shortest_path;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::geometry::Coordinate;
use crate::grid::GridMap;
use crate::status::StatusCode;

pub use a_star::a_star;
pub use brushfire::{brushfire, BrushfireSource};
pub use wavefront::wavefront;

/// Distance value of a cell no search has reached
pub const UNVISITED: i32 = -1;

/// Best known cost per discovered cell, in discovery order
/// Frontier entries refer to cells by their index in this map
pub type ScoreMap = FxIndexMap<Coordinate, i32>;


/// A* heuristic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Manhattan,
    Euclidean, // "airplane" on the command line
}

impl Heuristic {

    /// Estimated steps from `from` to `goal`
    pub fn estimate(self, from: Coordinate, goal: Coordinate) -> i64 {
        match self {
            Heuristic::Manhattan => from.manhattan(goal),
            Heuristic::Euclidean => from.euclidean_floor(goal),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("manhattan") {
            Ok(Heuristic::Manhattan)
        } else if s.eq_ignore_ascii_case("airplane") {
            Ok(Heuristic::Euclidean)
        } else {
            Err(SearchError::InvalidHeuristic(s.to_string()))
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Manhattan => f.write_str("manhattan"),
            Heuristic::Euclidean => f.write_str("airplane"),
        }
    }
}


/// Per-cell step counts, `UNVISITED` where no search reached
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    rows: usize,
    cols: usize,
    values: Vec<i32>,
}

impl DistanceField {

    /// Field with the extents of `grid`, every cell unvisited
    pub fn unvisited(grid: &GridMap) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            values: vec![UNVISITED; grid.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, at: Coordinate) -> i32 {
        if at.row < self.rows && at.col < self.cols {
            self.values[at.row * self.cols + at.col]
        } else {
            UNVISITED
        }
    }

    pub fn is_visited(&self, at: Coordinate) -> bool {
        self.get(at) != UNVISITED
    }

    pub(crate) fn set(&mut self, at: Coordinate, value: i32) {
        self.values[at.row * self.cols + at.col] = value;
    }

    pub fn visited_count(&self) -> usize {
        self.values.iter().filter(|v| **v != UNVISITED).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.values.chunks(self.cols.max(1)).map(<[i32]>::to_vec).collect()
    }
}


/// Outcome of one search run
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub distance_field: DistanceField,
    pub path: Vec<Coordinate>,  // start to goal inclusive, empty when none
    pub status: StatusCode,
    pub elapsed: Duration,      // search only, set by metrics::measure
    pub memory_delta: i64,      // resident bytes, set by metrics::measure
}

impl SearchResult {

    pub(crate) fn new(distance_field: DistanceField, path: Vec<Coordinate>, status: StatusCode) -> Self {
        Self {
            distance_field,
            path,
            status,
            elapsed: Duration::ZERO,
            memory_delta: 0,
        }
    }

    /// Edges in the path, -1 when there is none
    pub fn path_length(&self) -> i32 {
        if self.path.is_empty() {
            -1
        } else {
            (self.path.len() - 1) as i32
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.status == StatusCode::GoalUnreachable
    }
}


/// Finished search from `start` to `goal`: rebuild the path from the field when goal was reached
pub(crate) fn finish_route(field: DistanceField, start: Coordinate, goal: Coordinate, reached: bool) -> Result<SearchResult, SearchError> {
    if !reached {
        return Ok(SearchResult::new(field, Vec::new(), StatusCode::GoalUnreachable));
    }
    let path = shortest_path(&field, start, goal)?;
    Ok(SearchResult::new(field, path, StatusCode::Success))
}
