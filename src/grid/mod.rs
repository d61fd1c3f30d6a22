pub mod codec;
pub mod generate;

use std::fmt;

use crate::errors::{FormatError, SearchError};
use crate::geometry::Coordinate;


/// Cell code stored in a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellCode {
    Free,
    Obstacle,
    Start,
    Goal,
}

impl CellCode {

    pub fn code(self) -> i32 {
        match self {
            CellCode::Free => 0,
            CellCode::Obstacle => 1,
            CellCode::Start => 2,
            CellCode::Goal => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(CellCode::Free),
            1 => Some(CellCode::Obstacle),
            2 => Some(CellCode::Start),
            3 => Some(CellCode::Goal),
            _ => None,
        }
    }

    pub fn is_passable(self) -> bool {
        self != CellCode::Obstacle
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}


/// Immutable rectangular occupancy grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    cells: Vec<CellCode>, // row-major
}

impl GridMap {

    /// Build a grid from rows, all rows must have the same non-zero length
    pub fn new(rows: Vec<Vec<CellCode>>) -> Result<Self, FormatError> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => return Err(FormatError::EmptyGrid),
        };

        let height = rows.len();
        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.is_empty() {
                return Err(FormatError::EmptyRow { row });
            }
            if values.len() != width {
                return Err(FormatError::RaggedRow { row, expected: width, found: values.len() });
            }
            cells.extend(values);
        }

        Ok(Self { rows: height, cols: width, cells })
    }

    /// Grid of `rows` x `cols` cells all set to `fill`
    pub fn filled(rows: usize, cols: usize, fill: CellCode) -> Result<Self, FormatError> {
        Self::new(vec![vec![fill; cols]; rows])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    pub fn get(&self, at: Coordinate) -> Option<CellCode> {
        if self.contains(at) {
            Some(self.cells[self.index(at)])
        } else {
            None
        }
    }

    /// In bounds and not an obstacle
    pub fn is_passable(&self, at: Coordinate) -> bool {
        self.get(at).is_some_and(CellCode::is_passable)
    }

    /// Passable 4-neighbours of `at`, in scan order
    pub fn passable_neighbors(&self, at: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        at.neighbors(self.rows, self.cols).filter(move |n| self.is_passable(*n))
    }

    /// All cells holding `code`, row-major
    pub fn cells_with(&self, code: CellCode) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == code)
            .map(move |(i, _)| self.coordinate(i))
    }

    /// The single start cell
    pub fn start(&self) -> Result<Coordinate, SearchError> {
        self.unique(CellCode::Start, SearchError::StartNotFound, SearchError::MultipleStarts)
    }

    /// The single goal cell
    pub fn goal(&self) -> Result<Coordinate, SearchError> {
        self.unique(CellCode::Goal, SearchError::GoalNotFound, SearchError::MultipleGoals)
    }

    pub fn to_rows(&self) -> Vec<Vec<CellCode>> {
        self.cells.chunks(self.cols).map(<[CellCode]>::to_vec).collect()
    }

    /// Copy of this grid with the outermost ring turned into obstacles
    pub(crate) fn framed(&self) -> Self {
        let mut cells = self.cells.clone();
        for (i, cell) in cells.iter_mut().enumerate() {
            let at = self.coordinate(i);
            if at.row == 0 || at.col == 0 || at.row + 1 == self.rows || at.col + 1 == self.cols {
                *cell = CellCode::Obstacle;
            }
        }
        Self { rows: self.rows, cols: self.cols, cells }
    }

    pub(crate) fn index(&self, at: Coordinate) -> usize {
        at.row * self.cols + at.col
    }

    pub(crate) fn coordinate(&self, index: usize) -> Coordinate {
        Coordinate::new(index / self.cols, index % self.cols)
    }

    fn unique(&self, code: CellCode, missing: SearchError, duplicate: SearchError) -> Result<Coordinate, SearchError> {
        let mut found = self.cells_with(code);
        let first = found.next().ok_or(missing)?;
        if found.next().is_some() {
            return Err(duplicate);
        }
        Ok(first)
    }
}
