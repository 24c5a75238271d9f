//! Index bounds validation
//!
//! User-supplied indices arrive as signed integers (an interactive user can
//! type `-1`); these functions reject out-of-range values and convert the
//! survivors to `usize` in one step.

use crate::GridError;

/// Validate a row index against a row count
///
/// Returns the index as `usize` when `0 <= index < rows`.
pub const fn check_row_index(rows: usize, index: i64) -> Result<usize, GridError> {
    if index < 0 || index as usize >= rows {
        return Err(GridError::RowIndexOutOfBounds);
    }
    Ok(index as usize)
}

/// Validate a column index against a column count
///
/// Returns the index as `usize` when `0 <= index < cols`.
pub const fn check_col_index(cols: usize, index: i64) -> Result<usize, GridError> {
    if index < 0 || index as usize >= cols {
        return Err(GridError::ColIndexOutOfBounds);
    }
    Ok(index as usize)
}

/// Validate an element position against matrix dimensions
///
/// Combines the row and column checks for a complete position check.
pub const fn check_element_index(
    dims: (usize, usize),
    row: i64,
    col: i64,
) -> Result<(usize, usize), GridError> {
    let row = match check_row_index(dims.0, row) {
        Ok(r) => r,
        Err(e) => return Err(e),
    };
    let col = match check_col_index(dims.1, col) {
        Ok(c) => c,
        Err(e) => return Err(e),
    };
    Ok((row, col))
}
