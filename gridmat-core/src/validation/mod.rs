//! Validation utilities for matrix operations
//!
//! This module contains pure validation functions with no I/O dependencies.
//! The matrix type enforces none of its preconditions; the orchestrating
//! layer runs these checks immediately before each operation.

pub mod bounds;
pub mod shape;

pub use bounds::{check_col_index, check_element_index, check_row_index};
pub use shape::{check_chainable, check_same_shape, check_square};
