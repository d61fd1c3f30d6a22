use num_traits::{Num, Signed, Float};
use serde::{Deserialize, Serialize};


/// Neighbour offsets as (row, col) - up, down, left, right
/// Every search scans neighbours in this order, which keeps results reproducible
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// Grid cell position, 0-indexed and row-major
/// Serialized as a `[row, col]` pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move one step by `offset`, None if that leaves a `rows` x `cols` grid
    pub fn offset(self, (d_row, d_col): (isize, isize), rows: usize, cols: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < rows && col < cols {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// In-bounds 4-neighbours in `DIRECTIONS` order
    pub fn neighbors(self, rows: usize, cols: usize) -> impl Iterator<Item = Coordinate> {
        DIRECTIONS.into_iter().filter_map(move |d| self.offset(d, rows, cols))
    }

    pub fn manhattan(self, other: Self) -> i64 {
        manhattan_distance(self.row as i64, self.col as i64, other.row as i64, other.col as i64)
    }

    /// Straight-line distance, truncated towards zero
    pub fn euclidean_floor(self, other: Self) -> i64 {
        euclidean(self.row as f64, self.col as f64, other.row as f64, other.col as f64) as i64
    }

    /// True if `other` is exactly one row or one column away
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<[usize; 2]> for Coordinate {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for [usize; 2] {
    fn from(c: Coordinate) -> Self {
        [c.row, c.col]
    }
}
