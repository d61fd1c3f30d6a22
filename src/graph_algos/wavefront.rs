use std::collections::VecDeque;

use log::debug;

use crate::errors::SearchError;
use crate::grid::GridMap;
use super::{finish_route, DistanceField, SearchResult};


/// Wavefront (breadth-first) search from the grid's Start cell to its Goal cell
/// Each cell's value is its BFS depth at first visit. The search stops as soon
/// as the goal is taken off the queue, so cells further out stay unvisited
pub fn wavefront(grid: &GridMap) -> Result<SearchResult, SearchError> {
    let start = grid.start()?;
    let goal = grid.goal()?;

    let mut field = DistanceField::unvisited(grid);
    let mut queue = VecDeque::new();

    field.set(start, 0);
    queue.push_back(start);

    let mut reached = false;
    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            reached = true;
            break;
        }

        let distance = field.get(cell);
        for neighbor in grid.passable_neighbors(cell) {
            // enqueue each cell at most once
            if field.is_visited(neighbor) {
                continue;
            }
            field.set(neighbor, distance + 1);
            queue.push_back(neighbor);
        }
    }

    debug!("wavefront: {} cells valued, goal reached: {reached}", field.visited_count());
    finish_route(field, start, goal, reached)
}
