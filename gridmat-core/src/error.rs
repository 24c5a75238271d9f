//! Error types for gridmat validation

/// Errors reported by the validation functions
///
/// The matrix type itself never produces these; every check runs in the
/// orchestration layer before the corresponding operation is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row index outside the matrix
    RowIndexOutOfBounds,
    /// Column index outside the matrix
    ColIndexOutOfBounds,
    /// Operand shapes are not identical
    ShapeMismatch,
    /// Left operand's columns do not match right operand's rows
    InnerDimensionMismatch,
    /// Operation requires a square matrix
    NotSquare,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            GridError::RowIndexOutOfBounds => "Invalid row index",
            GridError::ColIndexOutOfBounds => "Invalid column index",
            GridError::ShapeMismatch => "Dimension mismatch",
            GridError::InnerDimensionMismatch => "Dimension mismatch; matrices cannot be chained",
            GridError::NotSquare => "Matrix is not square",
        };
        write!(f, "{msg}")
    }
}

/// Result type for gridmat validation
pub type Result<T> = core::result::Result<T, GridError>;
