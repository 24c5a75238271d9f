//! Dimension compatibility checks for matrix arithmetic
//!
//! Pure functions over (rows, cols) pairs; no matrix is touched here.

use crate::GridError;

/// Require two operands to have identical shape (addition)
pub const fn check_same_shape(a: (usize, usize), b: (usize, usize)) -> Result<(), GridError> {
    if a.0 != b.0 || a.1 != b.1 {
        return Err(GridError::ShapeMismatch);
    }
    Ok(())
}

/// Require the operands to be chainable (multiplication)
///
/// The left operand's column count must equal the right operand's row count.
pub const fn check_chainable(a: (usize, usize), b: (usize, usize)) -> Result<(), GridError> {
    if a.1 != b.0 {
        return Err(GridError::InnerDimensionMismatch);
    }
    Ok(())
}

/// Require a square shape (diagonal sums)
///
/// Returns the order of the matrix on success.
pub const fn check_square(dims: (usize, usize)) -> Result<usize, GridError> {
    if dims.0 != dims.1 {
        return Err(GridError::NotSquare);
    }
    Ok(dims.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_same_shape() {
        assert_eq!(check_same_shape((2, 2), (2, 2)), Ok(()));
        assert_eq!(check_same_shape((0, 0), (0, 0)), Ok(()));

        assert_eq!(
            check_same_shape((2, 3), (3, 2)),
            Err(GridError::ShapeMismatch)
        );
        assert_eq!(
            check_same_shape((2, 2), (3, 3)),
            Err(GridError::ShapeMismatch)
        );
    }

    #[test]
    fn test_check_chainable() {
        assert_eq!(check_chainable((2, 3), (3, 5)), Ok(()));
        assert_eq!(check_chainable((1, 1), (1, 1)), Ok(()));

        assert_eq!(
            check_chainable((2, 3), (2, 3)),
            Err(GridError::InnerDimensionMismatch)
        );
    }

    #[test]
    fn test_check_square() {
        assert_eq!(check_square((3, 3)), Ok(3));
        assert_eq!(check_square((0, 0)), Ok(0));

        assert_eq!(check_square((2, 3)), Err(GridError::NotSquare));
    }
}
