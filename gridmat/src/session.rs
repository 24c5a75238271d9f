//! Interactive demonstration session
//!
//! Orchestrates the whole run: load two matrices, display them, perform the
//! checked operations, then collect indices interactively for the swap and
//! update demonstrations. Every dimension and index check happens here,
//! immediately before the corresponding core operation; a failed check
//! prints a notice and the session moves on. Only load failures are fatal.
//!
//! The session is generic over its streams so tests can drive it with
//! in-memory buffers.

use std::io::{self, BufRead, Read, Write};

use gridmat_core::validation;

use crate::display::render;
use crate::load::{load_pair, LoadError};

/// Read the next whitespace-delimited token from the input
///
/// Skips leading whitespace; returns `None` at end of input.
fn next_token(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut token = String::new();
    loop {
        let (used, done) = {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte as char);
                }
            }
            (used, done)
        };
        input.consume(used);
        if done {
            break;
        }
    }
    Ok((!token.is_empty()).then_some(token))
}

/// Prompt for one integer; `None` if the input ended or was not an integer
fn prompt_integer(
    input: &mut impl BufRead,
    out: &mut impl Write,
    name: &str,
) -> Result<Option<i64>, LoadError> {
    write!(out, "Enter {name}: ")?;
    out.flush()?;
    Ok(next_token(input)?.and_then(|t| t.parse().ok()))
}

/// Run the full demonstration against an already-opened input file
///
/// `input` supplies the interactive index tokens, `out` receives all
/// user-visible text including non-fatal notices. An `Err` return means a
/// fatal load failure; the caller reports it and exits non-zero.
pub fn run(
    file: impl Read,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), LoadError> {
    let (a, b) = load_pair(file)?;

    writeln!(out, "Matrix A:\n{}", render(&a))?;
    writeln!(out, "Matrix B:\n{}", render(&b))?;

    // Addition (A + B).
    writeln!(out, "A + B:")?;
    match validation::check_same_shape(a.dimensions(), b.dimensions()) {
        Ok(()) => writeln!(out, "{}", render(&a.add(&b)))?,
        Err(_) => writeln!(out, "Notice: Dimension mismatch; cannot add matrices.\n")?,
    }

    // Multiplication (AB and BA).
    writeln!(out, "AB:")?;
    match validation::check_chainable(a.dimensions(), b.dimensions()) {
        Ok(()) => writeln!(out, "{}", render(&a.mul(&b)))?,
        Err(_) => writeln!(out, "Notice: Dimension mismatch; cannot multiply AB.\n")?,
    }
    writeln!(out, "BA:")?;
    match validation::check_chainable(b.dimensions(), a.dimensions()) {
        Ok(()) => writeln!(out, "{}", render(&b.mul(&a)))?,
        Err(_) => writeln!(out, "Notice: Dimension mismatch; cannot multiply BA.\n")?,
    }

    // Diagonal sums (A).
    writeln!(out, "Diagonal sums of A:")?;
    match validation::check_square(a.dimensions()) {
        Ok(_) => {
            writeln!(out, "Main diagonal: {}", a.main_diagonal_sum())?;
            writeln!(out, "Secondary diagonal: {}\n", a.secondary_diagonal_sum())?;
        }
        Err(_) => writeln!(out, "Notice: Cannot sum diagonals of non-square matrix.\n")?,
    }

    // Swapping rows (A).
    writeln!(out, "Swapping rows of A:")?;
    let r1 = prompt_integer(input, out, "r1")?;
    let r2 = prompt_integer(input, out, "r2")?;
    writeln!(out)?;
    match (r1, r2) {
        (Some(r1), Some(r2)) => {
            match (
                validation::check_row_index(a.rows(), r1),
                validation::check_row_index(a.rows(), r2),
            ) {
                (Err(_), _) => writeln!(out, "Error: Invalid row index r1 = {r1}.\n")?,
                (_, Err(_)) => writeln!(out, "Error: Invalid row index r2 = {r2}.\n")?,
                (Ok(r1), Ok(r2)) => {
                    writeln!(out, "Original matrix:\n{}", render(&a))?;
                    writeln!(out, "Modified matrix:\n{}", render(&a.swap_rows(r1, r2)))?;
                }
            }
        }
        _ => writeln!(out, "Error: Could not read integer row indices.\n")?,
    }

    // Swapping columns (A).
    writeln!(out, "Swapping columns of A:")?;
    let c1 = prompt_integer(input, out, "c1")?;
    let c2 = prompt_integer(input, out, "c2")?;
    writeln!(out)?;
    match (c1, c2) {
        (Some(c1), Some(c2)) => {
            match (
                validation::check_col_index(a.cols(), c1),
                validation::check_col_index(a.cols(), c2),
            ) {
                (Err(_), _) => writeln!(out, "Error: Invalid column index c1 = {c1}.\n")?,
                (_, Err(_)) => writeln!(out, "Error: Invalid column index c2 = {c2}.\n")?,
                (Ok(c1), Ok(c2)) => {
                    writeln!(out, "Original matrix:\n{}", render(&a))?;
                    writeln!(out, "Modified matrix:\n{}", render(&a.swap_cols(c1, c2)))?;
                }
            }
        }
        _ => writeln!(out, "Error: Could not read integer column indices.\n")?,
    }

    // Updating element (A).
    writeln!(out, "Updating element of A:")?;
    let row = prompt_integer(input, out, "row index")?;
    let col = prompt_integer(input, out, "column index")?;
    let value = prompt_integer(input, out, "element value")?;
    writeln!(out)?;
    match (row, col, value) {
        (Some(row), Some(col), Some(value)) => {
            match validation::check_element_index(a.dimensions(), row, col) {
                Ok((r, c)) => {
                    writeln!(out, "Original matrix:\n{}", render(&a))?;
                    writeln!(
                        out,
                        "Modified matrix:\n{}",
                        render(&a.with_element(r, c, value))
                    )?;
                }
                Err(_) => writeln!(out, "Error: Invalid index ({row},{col}).\n")?,
            }
        }
        _ => writeln!(out, "Error: Could not read integer update input.\n")?,
    }

    writeln!(out, "Program complete. Ending...")?;
    Ok(())
}
