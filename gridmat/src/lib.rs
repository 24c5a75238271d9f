//! Gridmat - Dense Integer Matrix Loading and Demonstration
//!
//! This library loads pairs of square integer matrices from whitespace-
//! separated text files and drives a fixed set of textbook operations over
//! them: addition, multiplication, diagonal sums, row/column swaps, and
//! single-element updates.
//!
//! ## Architecture
//!
//! Gridmat follows a strict checked/unchecked separation:
//!
//! - **gridmat-core**: the pure `Matrix` value type (trusts its
//!   preconditions, no I/O) plus standalone validation functions
//! - **gridmat**: file parsing, console formatting, and the session layer
//!   that validates every index and dimension before touching the core
//!
//! ## Quick Start
//!
//! ```rust
//! use gridmat::{load_pair, render};
//!
//! fn example() -> Result<(), gridmat::LoadError> {
//!     let file: &[u8] = b"2  1 2 3 4  5 6 7 8";
//!     let (a, b) = load_pair(file)?;
//!     print!("{}", render(&a.add(&b)));
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use gridmat_core::{validation, Grid, GridError, Matrix};

pub mod display;
pub mod load;
pub mod session;

// Public exports
pub use display::{format_rows, render};
pub use load::{load_pair, LoadError};
