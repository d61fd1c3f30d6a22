use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::errors::SearchError;
use crate::geometry::Coordinate;
use crate::grid::{CellCode, GridMap};
use crate::status::StatusCode;
use super::{DistanceField, SearchResult};


/// Which cells seed the brushfire
///
/// The two variants answer different questions:
/// `Obstacles` measures clearance (distance to the nearest obstacle, obstacles
/// themselves at 0), `Start` measures reachability from the start cell with
/// obstacles impassable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrushfireSource {
    Start,
    #[default]
    Obstacles,
}

impl FromStr for BrushfireSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(BrushfireSource::Start),
            "obstacles" => Ok(BrushfireSource::Obstacles),
            other => Err(format!("unknown brushfire source '{other}', expected 'start' or 'obstacles'")),
        }
    }
}

impl fmt::Display for BrushfireSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrushfireSource::Start => f.write_str("start"),
            BrushfireSource::Obstacles => f.write_str("obstacles"),
        }
    }
}


/// Brushfire distance transform
/// Multi-source BFS: all seeds enter the queue at distance 0 in one row-major pass,
/// then every cell gets the step count to its nearest seed. Never produces a path.
///
/// With `Start` seeding a grid whose Goal stays unvisited reports GoalUnreachable,
/// otherwise the status is Success.
pub fn brushfire(grid: &GridMap, source: BrushfireSource) -> Result<SearchResult, SearchError> {
    let seeds: Vec<Coordinate> = match source {
        BrushfireSource::Start => vec![grid.start()?],
        BrushfireSource::Obstacles => grid.cells_with(CellCode::Obstacle).collect(),
    };

    let mut field = DistanceField::unvisited(grid);
    let mut queue = VecDeque::with_capacity(seeds.len());
    for seed in seeds {
        field.set(seed, 0);
        queue.push_back(seed);
    }

    while let Some(cell) = queue.pop_front() {
        let distance = field.get(cell);
        for neighbor in cell.neighbors(grid.rows(), grid.cols()) {
            // obstacles never take a value from the fire, seeded from obstacles they already hold 0
            if field.is_visited(neighbor) || !grid.is_passable(neighbor) {
                continue;
            }
            field.set(neighbor, distance + 1);
            queue.push_back(neighbor);
        }
    }

    let status = match source {
        BrushfireSource::Start if grid.cells_with(CellCode::Goal).any(|g| !field.is_visited(g)) => {
            StatusCode::GoalUnreachable
        }
        _ => StatusCode::Success,
    };

    debug!("brushfire from {source}: {} cells valued, status {status}", field.visited_count());
    Ok(SearchResult::new(field, Vec::new(), status))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::codec::decode;

    #[test]
    fn test_brushfire_from_obstacles() {
        let grid = decode(
            "1,0,0,0\n\
             0,0,0,0\n\
             0,0,0,1\n"
        ).unwrap();
        let result = brushfire(&grid, BrushfireSource::Obstacles).unwrap();

        assert_eq!(result.status, StatusCode::Success);
        assert!(result.path.is_empty());
        assert_eq!(result.path_length(), -1);
        assert_eq!(result.distance_field.to_rows(), vec![
            vec![0, 1, 2, 2],
            vec![1, 2, 2, 1],
            vec![2, 2, 1, 0],
        ]);
    }

    #[test]
    fn test_brushfire_from_obstacles_needs_no_start() {
        let grid = decode("0,1,0\n").unwrap();
        let result = brushfire(&grid, BrushfireSource::Obstacles).unwrap();
        assert_eq!(result.distance_field.to_rows(), vec![vec![1, 0, 1]]);

        // no obstacles at all leaves everything unvisited
        let open = decode("0,0\n0,0\n").unwrap();
        let result = brushfire(&open, BrushfireSource::Obstacles).unwrap();
        assert_eq!(result.distance_field.visited_count(), 0);
    }

    #[test]
    fn test_brushfire_from_start() {
        let grid = decode(
            "2,0,0\n\
             1,1,0\n\
             0,0,3\n"
        ).unwrap();
        let result = brushfire(&grid, BrushfireSource::Start).unwrap();

        assert_eq!(result.status, StatusCode::Success);
        assert!(result.path.is_empty());
        assert_eq!(result.distance_field.get(Coordinate::new(0, 0)), 0);
        // the whole free region is flooded, not just up to the goal
        assert_eq!(result.distance_field.to_rows(), vec![
            vec![0, 1, 2],
            vec![-1, -1, 3],
            vec![6, 5, 4],
        ]);
    }

    #[test]
    fn test_brushfire_from_start_behind_wall() {
        let grid = decode(
            "2,0,1,0,0\n\
             0,0,1,0,3\n"
        ).unwrap();
        let result = brushfire(&grid, BrushfireSource::Start).unwrap();
        assert_eq!(result.status, StatusCode::GoalUnreachable);
        assert_eq!(result.path_length(), -1);
        assert_eq!(result.distance_field.get(Coordinate::new(1, 4)), -1);
    }

    #[test]
    fn test_brushfire_from_start_requires_start() {
        let grid = decode("0,1,3\n").unwrap();
        assert_eq!(brushfire(&grid, BrushfireSource::Start), Err(SearchError::StartNotFound));
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!("start".parse::<BrushfireSource>(), Ok(BrushfireSource::Start));
        assert_eq!("Obstacles".parse::<BrushfireSource>(), Ok(BrushfireSource::Obstacles));
        assert!("goal".parse::<BrushfireSource>().is_err());
        assert_eq!(BrushfireSource::default(), BrushfireSource::Obstacles);
    }
}
