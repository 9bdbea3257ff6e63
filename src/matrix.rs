//! Conversion of input matrices to exact rationals.
//!
//! Matrices can be given as nested rows (vectors, slices or arrays of rows)
//! or as an [`ndarray`] 2D array. Entries can be of any type that converts
//! into an [`Entry`]. All of them are normalized by [`IntoMatrix`] into an
//! `Array2<BigRational>`.
//!
//! If every entry is an integer or a fraction, the matrix is converted
//! exactly. If any
//! entry is a floating point value, the whole matrix is treated as a
//! floating point matrix: a warning is logged and each float is converted to
//! the rational equal to its binary value (see [`Entry::to_rational`]).

use crate::entry::Entry;
use ndarray::{Array2, ArrayView2};
use num_rational::BigRational;
use thiserror::Error;

/// Matrix shape error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ShapeError {
    /// The matrix does not have any rows.
    #[error("the matrix does not have any rows")]
    Empty,
    /// The matrix does not have any columns.
    #[error("the matrix does not have any columns")]
    NoColumns,
    /// A row does not have the same length as the first row.
    #[error("row {row} has {found} entries, but the first row has {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Matrix conversion error.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The matrix does not have a valid shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// An entry is NaN or infinite.
    #[error("the entry in row {row}, column {col} is not a finite number")]
    NonFinite {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },
}

/// How the entries of a matrix were converted to rationals.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Coercion {
    /// All the entries were integers or fractions.
    Exact,
    /// Some entry was a floating point value, so all the entries were
    /// converted as floating point values.
    Float,
}

/// Matrix converted to exact rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Converted matrix.
    pub matrix: Array2<BigRational>,
    /// Conversion used for the entries.
    pub coercion: Coercion,
}

/// Conversion of a matrix into exact rationals.
///
/// # Examples
/// ```
/// # use rowreduce::matrix::{Coercion, IntoMatrix, ShapeError};
/// let a = (&[[1, 2, 3], [4, 5, 6]]).into_matrix().unwrap();
/// assert_eq!(a.matrix.dim(), (2, 3));
/// assert_eq!(a.coercion, Coercion::Exact);
///
/// let b = vec![vec![1.5, 2.0], vec![3.0]];
/// assert_eq!(
///     b.into_matrix(),
///     Err(ShapeError::Ragged { row: 1, expected: 2, found: 1 }.into())
/// );
/// ```
pub trait IntoMatrix {
    /// Validates the shape of the matrix and converts its entries.
    ///
    /// # Errors
    /// A [`ShapeError`] is returned if the matrix is empty or if its rows
    /// do not all have the same length. [`Error::NonFinite`] is returned if
    /// an entry is NaN or infinite.
    fn into_matrix(self) -> Result<Normalized, Error>;
}

/// Converts a 2D array of entries to exact rationals.
///
/// This does the work of [`IntoMatrix`] once the input has been collected
/// into an array.
pub fn normalize(entries: ArrayView2<'_, Entry>) -> Result<Normalized, Error> {
    let (nrows, ncols) = entries.dim();
    if nrows == 0 {
        return Err(ShapeError::Empty.into());
    }
    if ncols == 0 {
        return Err(ShapeError::NoColumns.into());
    }

    let coercion = match entries.indexed_iter().find(|(_, x)| !x.is_exact()) {
        None => Coercion::Exact,
        Some(((row, col), x)) => {
            tracing::warn!(
                row,
                col,
                value = %x,
                "found floating point value, interpreting the matrix as floats"
            );
            Coercion::Float
        }
    };

    let mut matrix = Array2::zeros((nrows, ncols));
    for ((row, col), x) in entries.indexed_iter() {
        matrix[[row, col]] = x.to_rational().ok_or(Error::NonFinite { row, col })?;
    }
    Ok(Normalized { matrix, coercion })
}

fn from_rows<'a, E, I>(rows: I) -> Result<Normalized, Error>
where
    E: Clone + Into<Entry> + 'a,
    I: IntoIterator<Item = &'a [E]>,
{
    let rows: Vec<&[E]> = rows.into_iter().collect();
    let ncols = rows.first().ok_or(ShapeError::Empty)?.len();
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(ShapeError::Ragged {
            row,
            expected: ncols,
            found: r.len(),
        }
        .into());
    }
    let entries: Array2<Entry> =
        Array2::from_shape_fn((rows.len(), ncols), |(j, k)| rows[j][k].clone().into());
    normalize(entries.view())
}

impl<'a, E: Clone + Into<Entry>> IntoMatrix for &'a [Vec<E>] {
    fn into_matrix(self) -> Result<Normalized, Error> {
        from_rows(self.iter().map(Vec::as_slice))
    }
}

impl<'a, E: Clone + Into<Entry>> IntoMatrix for &'a Vec<Vec<E>> {
    fn into_matrix(self) -> Result<Normalized, Error> {
        self.as_slice().into_matrix()
    }
}

impl<E: Clone + Into<Entry>> IntoMatrix for Vec<Vec<E>> {
    fn into_matrix(self) -> Result<Normalized, Error> {
        self.as_slice().into_matrix()
    }
}

impl<'a, E: Clone + Into<Entry>, const N: usize> IntoMatrix for &'a [[E; N]] {
    fn into_matrix(self) -> Result<Normalized, Error> {
        from_rows(self.iter().map(|r| r.as_slice()))
    }
}

impl<'a, E: Clone + Into<Entry>, const N: usize, const M: usize> IntoMatrix for &'a [[E; N]; M] {
    fn into_matrix(self) -> Result<Normalized, Error> {
        self.as_slice().into_matrix()
    }
}

impl<'a, E: Clone + Into<Entry>> IntoMatrix for ArrayView2<'a, E> {
    fn into_matrix(self) -> Result<Normalized, Error> {
        let entries: Array2<Entry> = self.mapv(Into::into);
        normalize(entries.view())
    }
}

impl<'a, E: Clone + Into<Entry>> IntoMatrix for &'a Array2<E> {
    fn into_matrix(self) -> Result<Normalized, Error> {
        self.view().into_matrix()
    }
}
