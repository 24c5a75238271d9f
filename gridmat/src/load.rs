//! Loading matrices from whitespace-separated integer text
//!
//! The input format is `N` followed by 2·N² integers: matrix A then matrix
//! B, row-major. Parsing fails fast on the first short or malformed read;
//! a partially filled matrix is left as-is and discarded by the caller.

use std::io::Read;

use gridmat_core::Matrix;
use thiserror::Error;

/// Errors raised while loading matrices from a file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read from the input: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read size N from the file")]
    MissingSize,

    #[error("size N must be a positive integer, got {0}")]
    NonPositiveSize(i64),

    #[error("'{0}' is not an integer")]
    BadToken(String),

    #[error("matrix needs {expected} integers, file only held {found}")]
    Truncated { expected: usize, found: usize },
}

/// Read the matrix size N from the token stream
///
/// A missing or malformed token is reported the same way; a parsed but
/// non-positive N gets its own error.
pub fn read_size<'a, I>(tokens: &mut I) -> Result<usize, LoadError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(LoadError::MissingSize)?;
    let n: i64 = token.parse().map_err(|_| LoadError::MissingSize)?;
    if n <= 0 {
        return Err(LoadError::NonPositiveSize(n));
    }
    Ok(n as usize)
}

/// Fill a matrix from the token stream in row-major order
///
/// Stops at the first missing or non-integer token, leaving the matrix
/// partially filled; the caller discards it on failure.
pub fn fill<'a, I>(tokens: &mut I, matrix: &mut Matrix) -> Result<(), LoadError>
where
    I: Iterator<Item = &'a str>,
{
    let expected = matrix.rows() * matrix.cols();
    let mut found = 0;
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let token = tokens
                .next()
                .ok_or(LoadError::Truncated { expected, found })?;
            let value: i64 = token
                .parse()
                .map_err(|_| LoadError::BadToken(token.to_string()))?;
            *matrix.value_mut(i, j) = value;
            found += 1;
        }
    }
    Ok(())
}

/// Load a size N and two N x N matrices from a reader
///
/// Consumes the whole source up front; trailing tokens beyond the second
/// matrix are ignored.
pub fn load_pair(mut source: impl Read) -> Result<(Matrix, Matrix), LoadError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let n = read_size(&mut tokens)?;
    let mut a = Matrix::zeros(n, n);
    let mut b = Matrix::zeros(n, n);
    fill(&mut tokens, &mut a)?;
    fill(&mut tokens, &mut b)?;
    Ok((a, b))
}
