//! Dense integer matrix storage and arithmetic
//!
//! `Matrix` is a pure computational value type. Every operation documents
//! its preconditions and performs no bounds or shape checking of its own;
//! callers run the [`crate::validation`] functions first. This split keeps
//! the value type as close to raw storage as possible.

use alloc::vec;
use alloc::vec::Vec;

use crate::Grid;

/// Dense row-major matrix of integers
///
/// Element (i, j) lives at linear offset `i * cols + j`. A matrix
/// exclusively owns its buffer: cloning deep-copies every element, and two
/// distinct `Matrix` values never share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Create a `rows` x `cols` matrix with every element set to 0
    ///
    /// If either dimension is 0 the matrix holds no elements. Dimensions
    /// are taken as given and not validated here.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build a matrix from a row-major element buffer
    ///
    /// `data.len()` must equal `rows * cols`.
    pub fn from_parts(rows: usize, cols: usize, data: Vec<i64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Read the element at (row, col)
    ///
    /// Caller must guarantee `row < rows` and `col < cols`.
    pub fn value(&self, row: usize, col: usize) -> i64 {
        self.data[row * self.cols + col]
    }

    /// Mutable access to the element at (row, col)
    ///
    /// Caller must guarantee `row < rows` and `col < cols`.
    pub fn value_mut(&mut self, row: usize, col: usize) -> &mut i64 {
        &mut self.data[row * self.cols + col]
    }

    /// Elementwise sum of two matrices
    ///
    /// Both operands must have identical dimensions; callers check with
    /// [`crate::validation::check_same_shape`] first.
    pub fn add(&self, other: &Matrix) -> Matrix {
        let mut result = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                *result.value_mut(i, j) = self.value(i, j) + other.value(i, j);
            }
        }
        result
    }

    /// Standard matrix product
    ///
    /// Requires `self.cols == other.rows`; the result has shape
    /// (self.rows, other.cols). Callers check with
    /// [`crate::validation::check_chainable`] first.
    pub fn mul(&self, other: &Matrix) -> Matrix {
        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0;
                for k in 0..self.cols {
                    sum += self.value(i, k) * other.value(k, j);
                }
                *result.value_mut(i, j) = sum;
            }
        }
        result
    }

    /// Sum of the main diagonal (top-left to bottom-right)
    ///
    /// Assumes a square matrix.
    pub fn main_diagonal_sum(&self) -> i64 {
        (0..self.rows).map(|i| self.value(i, i)).sum()
    }

    /// Sum of the secondary diagonal (top-right to bottom-left)
    ///
    /// Assumes a square matrix.
    pub fn secondary_diagonal_sum(&self) -> i64 {
        (0..self.rows).map(|i| self.value(i, self.rows - 1 - i)).sum()
    }

    /// Return a copy with rows `r1` and `r2` exchanged
    ///
    /// The receiver is unchanged. Both indices must be less than `rows`.
    pub fn swap_rows(&self, r1: usize, r2: usize) -> Matrix {
        let mut result = self.clone();
        for j in 0..self.cols {
            result.data.swap(r1 * self.cols + j, r2 * self.cols + j);
        }
        result
    }

    /// Return a copy with columns `c1` and `c2` exchanged
    ///
    /// The receiver is unchanged. Both indices must be less than `cols`.
    pub fn swap_cols(&self, c1: usize, c2: usize) -> Matrix {
        let mut result = self.clone();
        for i in 0..self.rows {
            result.data.swap(i * self.cols + c1, i * self.cols + c2);
        }
        result
    }

    /// Return a copy with the element at (row, col) replaced by `value`
    ///
    /// The receiver is unchanged. The index must be in range.
    pub fn with_element(&self, row: usize, col: usize, value: i64) -> Matrix {
        let mut result = self.clone();
        *result.value_mut(row, col) = value;
        result
    }
}

impl Grid for Matrix {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn value(&self, row: usize, col: usize) -> i64 {
        Matrix::value(self, row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_2x2() -> (Matrix, Matrix) {
        let a = Matrix::from_parts(2, 2, vec![1, 2, 3, 4]);
        let b = Matrix::from_parts(2, 2, vec![5, 6, 7, 8]);
        (a, b)
    }

    #[test]
    fn test_zeros_construction() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(m.dimensions(), (2, 3));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.value(i, j), 0);
            }
        }

        // Degenerate dimensions hold no elements
        assert_eq!(Matrix::zeros(0, 5).dimensions(), (0, 5));
        assert_eq!(Matrix::zeros(3, 0), Matrix::from_parts(3, 0, vec![]));
    }

    #[test]
    fn test_add_elementwise() {
        let (a, b) = sample_2x2();
        let sum = a.add(&b);
        assert_eq!(sum, Matrix::from_parts(2, 2, vec![6, 8, 10, 12]));
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(sum.value(i, j), a.value(i, j) + b.value(i, j));
            }
        }
    }

    #[test]
    fn test_mul_square() {
        let (a, b) = sample_2x2();
        assert_eq!(a.mul(&b), Matrix::from_parts(2, 2, vec![19, 22, 43, 50]));
        assert_eq!(b.mul(&a), Matrix::from_parts(2, 2, vec![23, 34, 31, 46]));
    }

    #[test]
    fn test_mul_rectangular_shape() {
        // (2x3) * (3x2) -> (2x2)
        let a = Matrix::from_parts(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let b = Matrix::from_parts(3, 2, vec![7, 8, 9, 10, 11, 12]);
        let product = a.mul(&b);
        assert_eq!(product.dimensions(), (2, 2));
        assert_eq!(product, Matrix::from_parts(2, 2, vec![58, 64, 139, 154]));
    }

    #[test]
    fn test_clone_is_deep() {
        let (a, _) = sample_2x2();
        let mut copy = a.clone();
        *copy.value_mut(0, 0) = 99;
        assert_eq!(copy.value(0, 0), 99);
        assert_eq!(a.value(0, 0), 1);
    }

    #[test]
    fn test_diagonal_sums() {
        let (a, _) = sample_2x2();
        assert_eq!(a.main_diagonal_sum(), 5);
        assert_eq!(a.secondary_diagonal_sum(), 5);

        // Ones on the main diagonal sum to N
        let n = 4;
        let mut identity = Matrix::zeros(n, n);
        for i in 0..n {
            *identity.value_mut(i, i) = 1;
        }
        assert_eq!(identity.main_diagonal_sum(), n as i64);

        // Both diagonals coincide on a 1x1 matrix
        let single = Matrix::from_parts(1, 1, vec![42]);
        assert_eq!(single.main_diagonal_sum(), single.secondary_diagonal_sum());
    }

    #[test]
    fn test_swap_rows_self_inverse() {
        let a = Matrix::from_parts(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let swapped = a.swap_rows(0, 2);
        assert_eq!(swapped.value(0, 0), 7);
        assert_eq!(swapped.value(2, 2), 3);
        assert_eq!(swapped.value(1, 1), 5);
        assert_eq!(swapped.swap_rows(0, 2), a);
        // Receiver untouched
        assert_eq!(a.value(0, 0), 1);
    }

    #[test]
    fn test_swap_cols_self_inverse() {
        let a = Matrix::from_parts(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let swapped = a.swap_cols(0, 1);
        assert_eq!(swapped.value(0, 0), 2);
        assert_eq!(swapped.value(0, 1), 1);
        assert_eq!(swapped.value(1, 2), 6);
        assert_eq!(swapped.swap_cols(0, 1), a);
    }

    #[test]
    fn test_with_element_touches_one_cell() {
        let (a, _) = sample_2x2();
        let updated = a.with_element(1, 0, 100);
        assert_eq!(updated.value(1, 0), 100);
        for i in 0..2 {
            for j in 0..2 {
                if (i, j) != (1, 0) {
                    assert_eq!(updated.value(i, j), a.value(i, j));
                }
            }
        }
        assert_eq!(a.value(1, 0), 3);
    }

    #[test]
    fn test_grid_trait_access() {
        let (a, _) = sample_2x2();
        let grid: &dyn Grid = &a;
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.value(1, 1), 4);
    }
}
