//! Output of reduced matrices.
//!
//! A reduced matrix can be returned as nested rows of exact rationals or as a
//! dense floating point array, depending on the [`OutputMode`].

use crate::text;
use ndarray::Array2;
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// Representation used to return a reduced matrix.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum OutputMode {
    /// Nested rows of exact rationals.
    #[default]
    RationalMatrix,
    /// Dense array of `f64` values.
    FloatingArray,
}

/// Reduced matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduced {
    /// Nested rows of exact rationals.
    Rational(Vec<Vec<BigRational>>),
    /// Dense array of `f64` values.
    Floating(Array2<f64>),
}

impl Reduced {
    /// Returns the number of rows and columns of the matrix.
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Reduced::Rational(rows) => (rows.len(), rows.first().map_or(0, Vec::len)),
            Reduced::Floating(array) => array.dim(),
        }
    }

    /// Returns the rows of the matrix if it holds exact rationals.
    pub fn as_rational(&self) -> Option<&[Vec<BigRational>]> {
        match self {
            Reduced::Rational(rows) => Some(rows.as_slice()),
            Reduced::Floating(_) => None,
        }
    }

    /// Returns the array if the matrix holds floating point values.
    pub fn as_floating(&self) -> Option<&Array2<f64>> {
        match self {
            Reduced::Rational(_) => None,
            Reduced::Floating(array) => Some(array),
        }
    }
}

impl std::fmt::Display for Reduced {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reduced::Rational(rows) => text::write_rational(f, rows),
            Reduced::Floating(array) => text::write_floating(f, array),
        }
    }
}

/// Converts a rational matrix to the representation given by `mode`.
pub fn convert(matrix: Array2<BigRational>, mode: OutputMode) -> Reduced {
    match mode {
        OutputMode::RationalMatrix => Reduced::Rational(to_rows(matrix)),
        OutputMode::FloatingArray => Reduced::Floating(to_float_array(&matrix)),
    }
}

/// Splits a matrix into its rows.
pub fn to_rows<T: Clone>(matrix: Array2<T>) -> Vec<Vec<T>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}

/// Converts each entry of a rational matrix to the nearest `f64`.
pub fn to_float_array(matrix: &Array2<BigRational>) -> Array2<f64> {
    // to_f64() only fails for rationals whose parts do not fit in an f64
    matrix.map(|x| x.to_f64().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::arr2;
    use num_bigint::BigInt;

    fn q(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn default_mode() {
        assert_eq!(OutputMode::default(), OutputMode::RationalMatrix);
    }

    #[test]
    fn rational_rows() {
        let a = arr2(&[[q(1, 1), q(-1, 2)], [q(0, 1), q(3, 4)]]);
        let r = convert(a, OutputMode::RationalMatrix);
        assert_eq!(r.dim(), (2, 2));
        assert_eq!(
            r.as_rational().unwrap(),
            &[vec![q(1, 1), q(-1, 2)], vec![q(0, 1), q(3, 4)]]
        );
        assert!(r.as_floating().is_none());
    }

    #[test]
    fn floats() {
        let a = arr2(&[[q(1, 1), q(-1, 2), q(1, 3)]]);
        let r = convert(a, OutputMode::FloatingArray);
        assert_eq!(r.dim(), (1, 3));
        let x = r.as_floating().unwrap();
        assert_eq!(x[[0, 0]], 1.0);
        assert_eq!(x[[0, 1]], -0.5);
        assert!((x[[0, 2]] - 1.0 / 3.0).abs() < 1e-15);
        assert!(r.as_rational().is_none());
    }
}
