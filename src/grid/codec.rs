use std::fs;
use std::path::Path;

use super::{CellCode, GridMap};
use crate::errors::{FormatError, ProducerError};


/// Parse grid text, one row per line of comma separated cell codes
/// Any malformed row fails the whole decode, no partial grid is returned
///
/// ```text
/// 2,0,0
/// 1,1,0
/// 0,0,3
/// ```
pub fn decode(text: &str) -> Result<GridMap, FormatError> {
    let mut rows: Vec<Vec<CellCode>> = Vec::new();

    for (row, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            return Err(FormatError::EmptyRow { row });
        }

        let mut cells = Vec::new();
        for (col, token) in line.split(',').enumerate() {
            let token = token.trim();
            let value: i64 = token.parse().map_err(|_| FormatError::InvalidToken {
                row,
                col,
                token: token.to_string(),
            })?;
            let cell = CellCode::from_code(value)
                .ok_or(FormatError::UnknownCellCode { row, col, value })?;
            cells.push(cell);
        }

        // Checked here as well as in GridMap::new so the error names the first bad row
        if let Some(first) = rows.first() {
            if cells.len() != first.len() {
                return Err(FormatError::RaggedRow { row, expected: first.len(), found: cells.len() });
            }
        }
        rows.push(cells);
    }

    GridMap::new(rows)
}

/// Render a grid as text, every row ends with a newline
pub fn encode(grid: &GridMap) -> String {
    let mut text = String::with_capacity(grid.len() * 2);
    for row in grid.to_rows() {
        let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        text.push_str(&line.join(","));
        text.push('\n');
    }
    text
}

/// Copy of `grid` whose outermost ring is all obstacles
/// Keeps searches from walking off the edge of maps drawn without a border
pub fn with_frame(grid: &GridMap) -> GridMap {
    grid.framed()
}

/// Read and decode a grid file
pub fn read_grid_file(path: &Path) -> Result<GridMap, ProducerError> {
    let text = fs::read_to_string(path).map_err(|source| ProducerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&text).map_err(|source| ProducerError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a grid and write it to `path`
pub fn write_grid_file(path: &Path, grid: &GridMap) -> std::io::Result<()> {
    fs::write(path, encode(grid))
}
