//! Fixed-width console formatting for grids
//!
//! Output is for display only and is not intended to be re-parsed.

use gridmat_core::Grid;

/// Width each element is right-aligned to
const CELL_WIDTH: usize = 4;

/// Format a grid as a lazy sequence of lines, one per row
///
/// Each element is right-aligned to [`CELL_WIDTH`] characters; columns are
/// separated only by the alignment padding.
pub fn format_rows(grid: &impl Grid) -> impl Iterator<Item = String> + '_ {
    let (rows, cols) = grid.dimensions();
    (0..rows).map(move |i| {
        let mut line = String::new();
        for j in 0..cols {
            line.push_str(&format!("{:>width$}", grid.value(i, j), width = CELL_WIDTH));
        }
        line
    })
}

/// Render a whole grid, each row terminated by a newline
pub fn render(grid: &impl Grid) -> String {
    let mut out = String::new();
    for line in format_rows(grid) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
