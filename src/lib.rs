//! # rowreduce
//!
//! `rowreduce` row reduces matrices to reduced row-echelon form using exact
//! rational arithmetic. It is meant for the small matrices found in
//! introductory linear algebra problems, which usually have integer entries
//! and reduce to a "clean" rational solution.
//!
//! It can be used as a Rust library or as a CLI tool. See [`cli`] for
//! documentation about the usage of the CLI tool.
//!
//! # Examples
//! ```
//! use rowreduce::{row_reduce, OutputMode, Reduced};
//!
//! let x = [[2, 3, 1, 5], [-1, 0, 1, -1], [2, 1, -1, 3]];
//!
//! // get a floating point array as return type
//! let solution = row_reduce(&x, OutputMode::FloatingArray).unwrap();
//! print!("{solution}");
//! // prints:
//! // 1  0  -1  1
//! // 0  1   1  1
//! // 0  0   0  0
//! assert_eq!(
//!     solution.as_floating().unwrap(),
//!     &ndarray::arr2(&[[1.0, 0.0, -1.0, 1.0], [0.0, 1.0, 1.0, 1.0], [0.0, 0.0, 0.0, 0.0]])
//! );
//!
//! // alternatively, get exact rationals
//! let solution = row_reduce(&x, OutputMode::default()).unwrap();
//! let Reduced::Rational(rows) = solution else {
//!     unreachable!()
//! };
//! assert_eq!(rows[0][2], num_rational::BigRational::from_integer((-1).into()));
//! ```

#![warn(missing_docs)]

use matrix::Normalized;
use ndarray::Array2;
use num_rational::BigRational;
use reduce::Reduction;

pub mod cli;
pub mod entry;
pub mod matrix;
pub mod output;
pub mod reduce;
pub mod text;

pub use entry::Entry;
pub use matrix::{Coercion, Error, IntoMatrix, ShapeError};
pub use output::{OutputMode, Reduced};
pub use reduce::Pivot;

/// Exact reduction of a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalReduction {
    /// Matrix in reduced form.
    pub matrix: Array2<BigRational>,
    /// Pivots visited by the reduction, in order.
    pub pivots: Vec<Pivot>,
    /// Conversion used for the entries of the input matrix.
    pub coercion: Coercion,
}

/// Row reduces a matrix.
///
/// The matrix can be given as nested rows or as an [`ndarray`] array (see
/// [`IntoMatrix`]). The reduced matrix is returned as exact rationals or as
/// floating point values depending on `mode`.
///
/// # Errors
/// An [`Error`] is returned if the matrix is empty, if its rows do not all
/// have the same length, or if some entry is not a finite number.
pub fn row_reduce<M: IntoMatrix>(input: M, mode: OutputMode) -> Result<Reduced, Error> {
    let reduction = row_reduce_rational(input)?;
    Ok(output::convert(reduction.matrix, mode))
}

/// Row reduces a matrix, returning the exact result and the pivots used.
///
/// # Examples
/// ```
/// # use rowreduce::{row_reduce_rational, Coercion, Pivot};
/// let r = row_reduce_rational(&[[1, 2], [2, 4]]).unwrap();
/// assert_eq!(r.pivots, vec![Pivot { row: 0, col: 0 }]);
/// assert_eq!(r.coercion, Coercion::Exact);
/// ```
pub fn row_reduce_rational<M: IntoMatrix>(input: M) -> Result<RationalReduction, Error> {
    let Normalized { matrix, coercion } = input.into_matrix()?;
    let Reduction { matrix, pivots } = reduce::row_reduce_owned(matrix)?;
    Ok(RationalReduction {
        matrix,
        pivots,
        coercion,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::arr2;
    use num_bigint::BigInt;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn rows<const N: usize, const M: usize>(a: [[i64; N]; M]) -> Vec<Vec<BigRational>> {
        a.iter()
            .map(|row| row.iter().map(|&x| q(x, 1)).collect())
            .collect()
    }

    fn rational(r: Reduced) -> Vec<Vec<BigRational>> {
        match r {
            Reduced::Rational(rows) => rows,
            Reduced::Floating(_) => panic!("expected a rational matrix"),
        }
    }

    #[test]
    fn scenarios() {
        let r = row_reduce(&[[2, 3, 1, 5], [-1, 0, 1, -1], [2, 1, -1, 3]], OutputMode::default());
        assert_eq!(
            rational(r.unwrap()),
            rows([[1, 0, -1, 1], [0, 1, 1, 1], [0, 0, 0, 0]])
        );
        let r = row_reduce(&[[1, 0], [0, 1]], OutputMode::RationalMatrix);
        assert_eq!(rational(r.unwrap()), rows([[1, 0], [0, 1]]));
        let r = row_reduce(&[[2, 4, 6]], OutputMode::RationalMatrix);
        assert_eq!(rational(r.unwrap()), rows([[1, 2, 3]]));
        let r = row_reduce(&[[0, 0], [0, 0]], OutputMode::RationalMatrix);
        assert_eq!(rational(r.unwrap()), rows([[0, 0], [0, 0]]));
        let r = row_reduce(&[[1, 2], [2, 4]], OutputMode::RationalMatrix);
        assert_eq!(rational(r.unwrap()), rows([[1, 2], [0, 0]]));
    }

    #[test]
    fn floating_array() {
        let r = row_reduce(
            &[[2, 3, 1, 5], [-1, 0, 1, -1], [2, 1, -1, 3]],
            OutputMode::FloatingArray,
        )
        .unwrap();
        assert_eq!(
            r,
            Reduced::Floating(arr2(&[
                [1.0, 0.0, -1.0, 1.0],
                [0.0, 1.0, 1.0, 1.0],
                [0.0, 0.0, 0.0, 0.0]
            ]))
        );
    }

    #[test]
    fn exact_fractions() {
        let r = row_reduce_rational(&[[3, 2, 1], [2, 5, 7]]).unwrap();
        assert_eq!(
            r.matrix,
            arr2(&[[q(1, 1), q(0, 1), q(-9, 11)], [q(0, 1), q(1, 1), q(19, 11)]])
        );
        assert_eq!(r.coercion, Coercion::Exact);
    }

    #[test]
    fn fraction_input() {
        let x = vec![
            vec![Entry::from(q(1, 2)), Entry::from(q(1, 3)), Entry::Int(1)],
            vec![Entry::Int(1), Entry::from(q(-1, 3)), Entry::Int(0)],
        ];
        let r = row_reduce_rational(&x).unwrap();
        assert_eq!(r.coercion, Coercion::Exact);
        assert_eq!(
            r.matrix,
            arr2(&[[q(1, 1), q(0, 1), q(2, 3)], [q(0, 1), q(1, 1), q(2, 1)]])
        );
    }

    #[test]
    fn float_fallback() {
        let x = vec![
            vec![Entry::Float(0.5), Entry::Int(1)],
            vec![Entry::Int(1), Entry::Int(3)],
        ];
        let r = row_reduce_rational(&x).unwrap();
        assert_eq!(r.coercion, Coercion::Float);
        let y = row_reduce(&x, OutputMode::FloatingArray).unwrap();
        let y = y.as_floating().unwrap();
        let expected = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        for (a, b) in y.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn inexact_floats() {
        let x = arr2(&[[0.1, 0.2], [0.3, 0.7]]);
        let y = row_reduce(&x, OutputMode::FloatingArray).unwrap();
        assert_eq!(y.dim(), (2, 2));
        let expected = arr2(&[[1.0, 0.0], [0.0, 1.0]]);
        for (a, b) in y.as_floating().unwrap().iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn errors() {
        let empty: Vec<Vec<i32>> = vec![];
        assert_eq!(
            row_reduce(empty, OutputMode::default()),
            Err(Error::Shape(ShapeError::Empty))
        );
        assert_eq!(
            row_reduce(vec![vec![1, 2], vec![3]], OutputMode::default()),
            Err(Error::Shape(ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }))
        );
        assert_eq!(
            row_reduce(&[[1.0, f64::INFINITY]], OutputMode::default()),
            Err(Error::NonFinite { row: 0, col: 1 })
        );
    }
}
