//! # Plain text matrices
//!
//! This module reads and writes matrices in a simple text format. Each line
//! holds a row, and the entries of a row are separated by whitespace or
//! commas. Empty lines and lines starting with `#` are ignored.
//!
//! ```text
//! # augmented matrix
//! 2  3  1  5
//! -1 0  1 -1
//! 2, 1, -1, 3
//! ```
//!
//! Entries are parsed as integers when possible, as exact fractions when
//! written as `n/d`, and as floating point values otherwise (see [`Entry`]).
//! Rational matrices written by [`write_rational`] can therefore be read
//! back without losing precision. The shape of the matrix is not checked
//! here.

use crate::entry::Entry;
use ndarray::Array2;
use num_rational::BigRational;
use std::fmt::{Result, Write};
use thiserror::Error;

/// Text parse error.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParseError {
    /// An entry is not a number.
    #[error("line {line}: {token:?} is not a number")]
    InvalidEntry {
        /// Line number (starting by one).
        line: usize,
        /// Offending text.
        token: String,
    },
}

/// Parses the rows of a matrix in text format.
///
/// # Examples
/// ```
/// # use rowreduce::{entry::Entry, text::parse_rows};
/// let rows = parse_rows("1 2\n# comment\n3, 0.5\n").unwrap();
/// assert_eq!(
///     rows,
///     vec![
///         vec![Entry::Int(1), Entry::Int(2)],
///         vec![Entry::Int(3), Entry::Float(0.5)],
///     ]
/// );
/// ```
pub fn parse_rows(text: &str) -> std::result::Result<Vec<Vec<Entry>>, ParseError> {
    let mut rows = Vec::new();
    for (j, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse().map_err(|_| ParseError::InvalidEntry {
                    line: j + 1,
                    token: token.to_string(),
                })
            })
            .collect::<std::result::Result<Vec<Entry>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Writes the rows of a rational matrix as aligned columns.
///
/// Integers are written as such and other values as `numerator/denominator`.
pub fn write_rational<W: Write>(w: &mut W, rows: &[Vec<BigRational>]) -> Result {
    let grid: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    write_grid(w, &grid)
}

/// Writes a floating point matrix as aligned columns.
pub fn write_floating<W: Write>(w: &mut W, array: &Array2<f64>) -> Result {
    let grid: Vec<Vec<String>> = array
        .outer_iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    write_grid(w, &grid)
}

fn write_grid<W: Write>(w: &mut W, grid: &[Vec<String>]) -> Result {
    let mut widths = Vec::new();
    for row in grid {
        widths.resize(widths.len().max(row.len()), 0);
        for (width, s) in widths.iter_mut().zip(row) {
            *width = (*width).max(s.len());
        }
    }
    for row in grid {
        for (k, (s, &width)) in row.iter().zip(&widths).enumerate() {
            if k != 0 {
                write!(w, "  ")?;
            }
            write!(w, "{s:>width$}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}
