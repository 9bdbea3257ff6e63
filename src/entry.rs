//! Matrix entries as given by the user.
//!
//! This module contains the enum [Entry], which holds a single input value
//! before it is converted to an exact rational. Exact values (integers and
//! fractions) and floating point values are kept apart, so that the
//! conversion can decide how to treat the whole matrix before any value is
//! converted.

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};
use thiserror::Error;

/// Input matrix entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Integer value.
    Int(i64),
    /// Exact fraction.
    Rational(BigRational),
    /// Floating point value.
    Float(f64),
}

/// Error parsing an [Entry] from a string.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
#[error("{0:?} is not a number")]
pub struct ParseEntryError(String);

impl Entry {
    /// Returns `true` if the entry is an integer or a fraction.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Entry::Float(_))
    }

    /// Converts the entry to an exact rational.
    ///
    /// Integers and fractions are converted exactly. Floating point values are
    /// converted to
    /// the rational that is exactly equal to their binary value, so `0.1`
    /// does not become `1/10`. `None` is returned for NaN and infinities.
    ///
    /// # Examples
    /// ```
    /// # use rowreduce::entry::Entry;
    /// use num_rational::BigRational;
    ///
    /// let half = Entry::Float(0.5).to_rational().unwrap();
    /// assert_eq!(half, BigRational::new(1.into(), 2.into()));
    /// assert!(Entry::Float(f64::NAN).to_rational().is_none());
    /// ```
    pub fn to_rational(&self) -> Option<BigRational> {
        match self {
            Entry::Int(n) => Some(BigRational::from_integer(BigInt::from(*n))),
            Entry::Rational(x) => Some(x.clone()),
            Entry::Float(x) => BigRational::from_float(*x),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Entry {
                fn from(x: $t) -> Entry {
                    Entry::$variant(<$target>::from(x))
                }
            }
        )*
    };
}

impl_from!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
impl_from!(Float, f64, f32, f64);

impl From<BigRational> for Entry {
    fn from(x: BigRational) -> Entry {
        Entry::Rational(x)
    }
}

impl From<Rational64> for Entry {
    fn from(x: Rational64) -> Entry {
        let (numer, denom) = x.into_raw();
        Entry::Rational(BigRational::new(numer.into(), denom.into()))
    }
}

impl std::str::FromStr for Entry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Entry, ParseEntryError> {
        if let Ok(n) = s.parse::<i64>() {
            Ok(Entry::Int(n))
        } else if s.contains('/') {
            s.parse::<BigRational>()
                .map(Entry::Rational)
                .map_err(|_| ParseEntryError(s.to_string()))
        } else if let Ok(x) = s.parse::<f64>() {
            Ok(Entry::Float(x))
        } else {
            Err(ParseEntryError(s.to_string()))
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Int(n) => write!(f, "{n}"),
            Entry::Rational(x) => write!(f, "{x}"),
            Entry::Float(x) => write!(f, "{x}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_numbers() {
        assert_eq!(Entry::from(3i32), Entry::Int(3));
        assert_eq!(Entry::from(7u8), Entry::Int(7));
        assert_eq!(Entry::from(-2i64), Entry::Int(-2));
        assert_eq!(Entry::from(0.25f32), Entry::Float(0.25));
        assert_eq!(Entry::from(2.0), Entry::Float(2.0));
        assert_eq!(
            Entry::from(Rational64::new(2, -6)),
            Entry::Rational(BigRational::new((-1).into(), 3.into()))
        );
        let third = BigRational::new(1.into(), 3.into());
        assert_eq!(Entry::from(third.clone()), Entry::Rational(third));
    }

    #[test]
    fn parse() {
        assert_eq!("12".parse::<Entry>(), Ok(Entry::Int(12)));
        assert_eq!("-3".parse::<Entry>(), Ok(Entry::Int(-3)));
        assert_eq!("2.0".parse::<Entry>(), Ok(Entry::Float(2.0)));
        assert_eq!("1e-3".parse::<Entry>(), Ok(Entry::Float(1e-3)));
        assert_eq!(
            "-1/2".parse::<Entry>(),
            Ok(Entry::Rational(BigRational::new((-1).into(), 2.into())))
        );
        assert_eq!(
            "6/4".parse::<Entry>(),
            Ok(Entry::Rational(BigRational::new(3.into(), 2.into())))
        );
        assert!("1/0".parse::<Entry>().is_err());
        assert!("1/x".parse::<Entry>().is_err());
        assert!("0.5/2".parse::<Entry>().is_err());
        assert!("".parse::<Entry>().is_err());
    }

    #[test]
    fn exact_binary_value() {
        let x = Entry::Float(0.1).to_rational().unwrap();
        assert_ne!(x, BigRational::new(1.into(), 10.into()));
        assert_eq!(
            x,
            BigRational::new(3602879701896397u64.into(), (1u64 << 55).into())
        );
        assert_eq!(
            Entry::Int(-4).to_rational(),
            Some(BigRational::from_integer((-4).into()))
        );
        assert!(Entry::Float(f64::INFINITY).to_rational().is_none());
        assert!(Entry::Int(5).is_exact());
        assert!(Entry::Rational(BigRational::new(1.into(), 3.into())).is_exact());
        assert!(!Entry::Float(5.0).is_exact());
    }
}
