//! Gauss-Jordan row reduction.
//!
//! This module implements the reduction of a dense matrix to reduced
//! row-echelon form using exact arithmetic. The reduction is generic over the
//! scalar type, so it works with [`BigRational`](num_rational::BigRational)
//! as well as with any other exact field implementing [`Num`].
//!
//! The reduction is a loop over three steps. The pivot row is scaled so that
//! the pivot becomes one ([`normalize_pivot`]), the pivot column is cleared
//! in every other row ([`eliminate_column`]) and the next pivot is searched
//! for ([`next_pivot`]). The loop ends when no further pivot can be found.
//!
//! No rows are ever swapped. A row whose entries add up to zero is treated as
//! a zero row by the pivot search and is skipped, even if some of its entries
//! are non-zero. Such a row is left as it is.
//!
//! # Examples
//! ```
//! # use rowreduce::reduce::{row_reduce_in_place, Pivot};
//! use ndarray::arr2;
//! use num_rational::Rational64;
//!
//! let mut a = arr2(&[[1, 2], [2, 4]]).mapv(Rational64::from_integer);
//! let pivots = row_reduce_in_place(&mut a).unwrap();
//! assert_eq!(a, arr2(&[[1, 2], [0, 0]]).mapv(Rational64::from_integer));
//! assert_eq!(pivots, vec![Pivot { row: 0, col: 0 }]);
//! ```

use crate::matrix::ShapeError;
use ndarray::Array2;
use num_traits::Num;

/// Position of a pivot in a matrix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pivot {
    /// Row of the pivot.
    pub row: usize,
    /// Column of the pivot.
    pub col: usize,
}

impl std::fmt::Display for Pivot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Reduced matrix together with the pivots used to reduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction<T> {
    /// Matrix in reduced form.
    pub matrix: Array2<T>,
    /// Pivots visited by the reduction, in order.
    pub pivots: Vec<Pivot>,
}

/// Reduces a matrix in place.
///
/// Returns the pivots visited by the reduction, in the order in which they
/// were visited. Both their rows and their columns are strictly increasing.
///
/// # Errors
/// The matrix must have at least one row and one column. Otherwise a
/// [`ShapeError`] is returned and the matrix is not touched.
pub fn row_reduce_in_place<T: Num + Clone>(
    array: &mut Array2<T>,
) -> Result<Vec<Pivot>, ShapeError> {
    let (nrows, ncols) = array.dim();
    if nrows == 0 {
        return Err(ShapeError::Empty);
    }
    if ncols == 0 {
        return Err(ShapeError::NoColumns);
    }

    let mut pivots = Vec::new();
    let mut pivot = first_pivot(array);
    while let Some(p) = pivot {
        tracing::trace!(row = p.row, col = p.col, "pivot");
        normalize_pivot(array, p);
        eliminate_column(array, p);
        pivots.push(p);
        pivot = next_pivot(array, p);
    }
    Ok(pivots)
}

/// Reduces a matrix, taking ownership of it.
///
/// This is the same as [`row_reduce_in_place`], but the reduced matrix is
/// returned together with its pivots.
pub fn row_reduce_owned<T: Num + Clone>(
    mut array: Array2<T>,
) -> Result<Reduction<T>, ShapeError> {
    let pivots = row_reduce_in_place(&mut array)?;
    Ok(Reduction {
        matrix: array,
        pivots,
    })
}

/// Scales the pivot row so that the pivot entry becomes one.
///
/// # Panics
/// Panics if the pivot entry is zero. A zero pivot can only be reached if the
/// pivot search is broken.
pub fn normalize_pivot<T: Num + Clone>(array: &mut Array2<T>, pivot: Pivot) {
    let x = array[[pivot.row, pivot.col]].clone();
    assert!(!x.is_zero(), "zero pivot at {pivot}");
    if x.is_one() {
        return;
    }
    let inv = T::one() / x;
    for y in array.row_mut(pivot.row).iter_mut() {
        *y = y.clone() * inv.clone();
    }
}

/// Zeroes the pivot column in every row other than the pivot row.
///
/// The pivot entry must already be one. Rows which are already zero in the
/// pivot column are not touched.
pub fn eliminate_column<T: Num + Clone>(array: &mut Array2<T>, pivot: Pivot) {
    let pivot_row = array.row(pivot.row).to_owned();
    for (t, mut row) in array.rows_mut().into_iter().enumerate() {
        if t == pivot.row {
            continue;
        }
        let x = row[pivot.col].clone();
        if x.is_zero() {
            // avoid calculations if we're subtracting zero
            continue;
        }
        for (y, p) in row.iter_mut().zip(pivot_row.iter()) {
            *y = y.clone() - x.clone() * p.clone();
        }
    }
}

/// Finds the pivot that follows `pivot`.
///
/// The next pivot row is the first row below `pivot` whose entries do not add
/// up to zero. The next pivot column is the first non-zero entry of that row
/// to the right of `pivot`. `None` is returned if either search runs out of
/// rows or columns.
pub fn next_pivot<T: Num + Clone>(array: &Array2<T>, pivot: Pivot) -> Option<Pivot> {
    let (nrows, ncols) = array.dim();
    if pivot.row + 1 >= nrows {
        return None;
    }
    let row = find_row(array, pivot.row + 1)?;
    if pivot.col + 1 >= ncols {
        return None;
    }
    let col = find_col(array, row, pivot.col + 1)?;
    Some(Pivot { row, col })
}

// The reduction starts at the top left entry. If it is zero, the same
// searches as in next_pivot are used, starting at the first row and column.
fn first_pivot<T: Num + Clone>(array: &Array2<T>) -> Option<Pivot> {
    if !array[[0, 0]].is_zero() {
        return Some(Pivot { row: 0, col: 0 });
    }
    let row = find_row(array, 0)?;
    let col = find_col(array, row, 0)?;
    Some(Pivot { row, col })
}

fn find_row<T: Num + Clone>(array: &Array2<T>, start: usize) -> Option<usize> {
    (start..array.nrows()).find(|&j| !sums_to_zero(array, j))
}

fn find_col<T: Num + Clone>(array: &Array2<T>, row: usize, start: usize) -> Option<usize> {
    (start..array.ncols()).find(|&k| !array[[row, k]].is_zero())
}

fn sums_to_zero<T: Num + Clone>(array: &Array2<T>, row: usize) -> bool {
    array
        .row(row)
        .iter()
        .fold(T::zero(), |acc, x| acc + x.clone())
        .is_zero()
}
