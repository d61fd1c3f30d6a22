use crate::errors::SearchError;
use crate::geometry::Coordinate;
use super::DistanceField;

/// Construct the shortest path by descending the distance field from goal to start
/// Returns the ordered path as a vector of cells from start to goal
/// At every step the first neighbour in scan order whose value is exactly one lower is taken,
/// so equal-length alternatives always resolve the same way
pub(crate) fn shortest_path(field: &DistanceField, start: Coordinate, goal: Coordinate) -> Result<Vec<Coordinate>, SearchError> {

    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to start
    while current != start {
        let distance = field.get(current);

        // A field value of 0 only belongs to the source
        if distance <= 0 {
            return Err(SearchError::BrokenGradient { row: current.row, col: current.col });
        }

        let previous = current
            .neighbors(field.rows(), field.cols())
            .find(|n| field.get(*n) == distance - 1)
            .ok_or(SearchError::BrokenGradient { row: current.row, col: current.col })?;

        path.push(previous);
        current = previous;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::codec::decode;

    fn field_from(rows: &[&[i32]]) -> DistanceField {
        let text: Vec<String> = rows.iter().map(|r| vec!["0"; r.len()].join(",")).collect();
        let grid = decode(&text.join("\n")).unwrap();
        let mut field = DistanceField::unvisited(&grid);
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                field.set(Coordinate::new(r, c), *value);
            }
        }
        field
    }

    #[test]
    fn test_shortest_path_prefers_scan_order() {
        // Both (0,1) and (1,0) are one step from the start,
        // walking back from (1,1) the upward neighbour wins
        let field = field_from(&[
            &[0, 1],
            &[1, 2],
        ]);
        let path = shortest_path(&field, Coordinate::new(0, 0), Coordinate::new(1, 1)).unwrap();
        assert_eq!(path, vec![Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(1, 1)]);
    }

    #[test]
    fn test_shortest_path_start_is_goal() {
        let field = field_from(&[&[0]]);
        let path = shortest_path(&field, Coordinate::new(0, 0), Coordinate::new(0, 0)).unwrap();
        assert_eq!(path, vec![Coordinate::new(0, 0)]);
    }

    #[test]
    fn test_shortest_path_broken_gradient() {
        let field = field_from(&[
            &[0, -1, 3],
        ]);
        let result = shortest_path(&field, Coordinate::new(0, 0), Coordinate::new(0, 2));
        assert_eq!(result, Err(SearchError::BrokenGradient { row: 0, col: 2 }));

        // never walks into unvisited cells
        let field = field_from(&[
            &[-1, 0],
        ]);
        let result = shortest_path(&field, Coordinate::new(0, 1), Coordinate::new(0, 0));
        assert_eq!(result, Err(SearchError::BrokenGradient { row: 0, col: 0 }));
    }
}
