use crate::errors::SearchError;
use crate::geometry::Coordinate;
use crate::grid::GridMap;
use super::{finish_route, DistanceField, Heuristic, ScoreMap, SearchResult};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;



/// Node on A* frontier
#[derive(Debug)]
struct Node {
    index: usize, // index in the score map - maps to the cell
    cost: i32, // Cost to reach this node
    f_cost: i64, // Total cost = cost + h(n) aka estimated cost
    seq: usize, // push order, breaks f_cost ties first-in first-out
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl Eq for Node {}


/// A* search from the grid's Start cell to its Goal cell
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The distance field holds the gScore of every discovered cell
/// Goal unreachable is not an error, it comes back as a GoalUnreachable result
pub fn a_star(grid: &GridMap, heuristic: Heuristic) -> Result<SearchResult, SearchError> {
    let start = grid.start()?;
    let goal = grid.goal()?;

    let (scores, reached) = build_graph(grid, start, goal, heuristic);

    let mut field = DistanceField::unvisited(grid);
    for (cell, cost) in &scores {
        field.set(*cell, *cost);
    }

    finish_route(field, start, goal, reached)
}


/// Traverses the grid using A*
/// Returns the best gScore of each discovered cell and whether the goal was expanded
fn build_graph(grid: &GridMap, start: Coordinate, goal: Coordinate, heuristic: Heuristic) -> (ScoreMap, bool) {
    // Open List
    // Cells that need to be evaluated, implemented as priority queue
    // Sorting is done by f_cost (cost + heuristic), then by push order
    let mut open_list: BinaryHeap<Node> = BinaryHeap::new();
    let mut seq = 0;

    // Best known cost per discovered cell
    let mut scores = ScoreMap::default();

    // Expanded cells, never reopened
    let mut closed = vec![false; grid.len()];

    let start_index = scores.insert_full(start, 0).0;
    open_list.push(Node {
        index: start_index,
        cost: 0,
        f_cost: heuristic.estimate(start, goal),
        seq,
    });

    let mut expanded = 0usize;
    while let Some(Node { index, cost, .. }) = open_list.pop() {

        // fetch current best cost for the cell
        let Some((&cell, &best)) = scores.get_index(index) else {
            continue;
        };

        // A cheaper entry for this cell was already expanded
        if cost > best || closed[grid.index(cell)] {
            continue;
        }
        closed[grid.index(cell)] = true;
        expanded += 1;

        // Check if we've reached the goal
        if cell == goal {
            debug!("a*: goal reached after expanding {expanded} cells, {} discovered", scores.len());
            return (scores, true);
        }

        for neighbor in grid.passable_neighbors(cell) {
            if closed[grid.index(neighbor)] {
                continue;
            }

            // every move costs one step
            let new_cost = best + 1;

            let neighbor_index: usize;
            match scores.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert(new_cost);
                }
                Occupied(mut e) => {
                    if *e.get() > new_cost {
                        // We've found a better path to this neighbor
                        neighbor_index = e.index();
                        e.insert(new_cost);
                    } else {
                        continue;
                    }
                }
            }

            seq += 1;
            open_list.push(Node {
                index: neighbor_index,
                cost: new_cost,
                f_cost: new_cost as i64 + heuristic.estimate(neighbor, goal),
                seq,
            });
        }
    }

    debug!("a*: frontier exhausted after expanding {expanded} cells");
    (scores, false)
}
