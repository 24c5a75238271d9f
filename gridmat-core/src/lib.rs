#![no_std]

//! Gridmat Core - Dense Integer Matrix Definitions
//!
//! This crate provides the pure computational matrix value type and the
//! validation functions surrounding its use. It performs no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod validation;

pub use error::*;
#[cfg(feature = "alloc")]
pub use matrix::*;
pub use validation::*;

/// Core grid trait for storage-agnostic element access
pub trait Grid {
    /// Get grid dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the element at the specified position
    ///
    /// The position must be in range; see the implementer's contract.
    fn value(&self, row: usize, col: usize) -> i64;
}
