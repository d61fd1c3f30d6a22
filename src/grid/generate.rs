use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{CellCode, GridMap};
use crate::errors::GenerateError;


/// Parameters for a random benchmark map
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGrid {
    pub rows: usize,
    pub cols: usize,
    pub density: f64, // chance of a cell being an obstacle, within [0, 1]
    pub seed: u64,
    pub frame: bool,  // wall off the outer ring
}

impl RandomGrid {

    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, density: 0.2, seed: 0, frame: false }
    }

    /// Generate the map
    /// Start and Goal land on distinct cells; a 1x1 map only gets a Start
    /// A framed map needs at least 3 rows and 3 columns
    pub fn generate(&self) -> Result<GridMap, GenerateError> {
        // also rejects NaN
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GenerateError::InvalidDensity(self.density));
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let density = self.density;

        let mut rows = vec![vec![CellCode::Free; self.cols]; self.rows];
        for row in rows.iter_mut() {
            for cell in row.iter_mut() {
                if rng.random_bool(density) {
                    *cell = CellCode::Obstacle;
                }
            }
        }
        // validates the shape before anything indexes into it
        let grid = GridMap::new(rows)?;
        let mut rows = grid.to_rows();

        // the frame would overwrite start and goal
        if self.frame && (self.rows <= 2 || self.cols <= 2) {
            return Err(GenerateError::FrameTooThin { rows: self.rows, cols: self.cols });
        }

        // Candidate cells for start and goal, inside the frame if there is one
        let (lo_row, hi_row, lo_col, hi_col) = if self.frame {
            (1, self.rows - 1, 1, self.cols - 1)
        } else {
            (0, self.rows, 0, self.cols)
        };
        let width = hi_col - lo_col;
        let cells = (hi_row - lo_row) * width;

        let start = rng.random_range(0..cells);
        rows[lo_row + start / width][lo_col + start % width] = CellCode::Start;
        if cells > 1 {
            // shift past the start so the goal never lands on it
            let mut goal = rng.random_range(0..cells - 1);
            if goal >= start {
                goal += 1;
            }
            rows[lo_row + goal / width][lo_col + goal % width] = CellCode::Goal;
        }

        let grid = GridMap::new(rows)?;
        if self.frame {
            Ok(grid.framed())
        } else {
            Ok(grid)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormatError;

    #[test]
    fn test_generate_is_seeded() {
        let spec = RandomGrid { rows: 12, cols: 9, density: 0.3, seed: 42, frame: false };
        let a = spec.generate().unwrap();
        let b = spec.generate().unwrap();
        assert_eq!(a, b);
        assert_eq!((a.rows(), a.cols()), (12, 9));
        assert!(a.start().is_ok());
        assert!(a.goal().is_ok());
    }

    #[test]
    fn test_generate_density_extremes() {
        let open = RandomGrid { density: 0.0, ..RandomGrid::new(5, 5) }.generate().unwrap();
        assert_eq!(open.cells_with(CellCode::Obstacle).count(), 0);

        // everything but start and goal is blocked
        let closed = RandomGrid { density: 1.0, ..RandomGrid::new(5, 5) }.generate().unwrap();
        assert_eq!(closed.cells_with(CellCode::Obstacle).count(), 23);
    }

    #[test]
    fn test_generate_with_frame_keeps_endpoints_inside() {
        for seed in 0..20 {
            let spec = RandomGrid { rows: 6, cols: 7, density: 0.1, seed, frame: true };
            let grid = spec.generate().unwrap();
            let start = grid.start().unwrap();
            let goal = grid.goal().unwrap();
            for at in [start, goal] {
                assert!(at.row > 0 && at.row < 5 && at.col > 0 && at.col < 6);
            }
        }
    }

    #[test]
    fn test_generate_rejects_empty() {
        assert_eq!(RandomGrid::new(0, 4).generate(), Err(GenerateError::Shape(FormatError::EmptyGrid)));
        assert!(matches!(
            RandomGrid::new(3, 0).generate(),
            Err(GenerateError::Shape(FormatError::EmptyRow { .. }))
        ));
    }

    #[test]
    fn test_generate_frame_too_thin() {
        for (rows, cols) in [(2, 5), (5, 2), (1, 1), (2, 2)] {
            let spec = RandomGrid { frame: true, ..RandomGrid::new(rows, cols) };
            assert_eq!(spec.generate(), Err(GenerateError::FrameTooThin { rows, cols }));
        }
        // the smallest framed map keeps its start on the single inner cell
        let grid = RandomGrid { frame: true, ..RandomGrid::new(3, 3) }.generate().unwrap();
        assert_eq!(grid.start(), Ok(crate::geometry::Coordinate::new(1, 1)));
    }

    #[test]
    fn test_generate_rejects_bad_density() {
        for density in [f64::NAN, f64::INFINITY, -0.1, 1.5] {
            let result = RandomGrid { density, ..RandomGrid::new(3, 3) }.generate();
            assert!(matches!(result, Err(GenerateError::InvalidDensity(_))), "{density}");
        }
    }

    #[test]
    fn test_generate_single_cell() {
        let grid = RandomGrid::new(1, 1).generate().unwrap();
        assert!(grid.start().is_ok());
        assert!(grid.goal().is_err());
    }
}
