//! The field of native double-precision floating point numbers.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{
    decimal::PrecisionContext, Canonical, Divisible, Field, Normed, OrderedRing, RealField, Ring,
    SquareRoot,
};

/// The field of `f64` numbers.
///
/// Precision contexts are ignored: doubles always round to their 53-bit mantissa.
/// Division by zero is an error instead of an infinity.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DoubleField;

pub const DOUBLE: DoubleField = DoubleField::new();

impl DoubleField {
    pub const fn new() -> DoubleField {
        DoubleField
    }
}

impl Display for DoubleField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("F64")
    }
}

impl Ring for DoubleField {
    type Element = f64;

    #[inline(always)]
    fn add(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    #[inline(always)]
    fn sub(&self, a: &f64, b: &f64) -> f64 {
        a - b
    }

    #[inline(always)]
    fn mul(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    #[inline(always)]
    fn neg(&self, a: &f64) -> f64 {
        -a
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut f64, b: &f64, c: &f64) {
        *a += b * c;
    }

    fn zero(&self) -> f64 {
        0.
    }

    fn one(&self) -> f64 {
        1.
    }

    fn is_zero(a: &f64) -> bool {
        *a == 0.
    }

    fn is_one(&self, a: &f64) -> bool {
        *a == 1.
    }

    /// IEEE equality: `NaN` is not equal to itself.
    fn equals(&self, a: &f64, b: &f64) -> bool {
        a == b
    }

    fn is_invertible(&self, a: &f64) -> bool {
        *a != 0. && a.is_finite()
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> f64 {
        rng.gen_range(range.0..range.1) as f64
    }

    fn nth(&self, n: i64) -> f64 {
        n as f64
    }

    fn pow(&self, b: &f64, e: u64) -> f64 {
        b.powf(e as f64)
    }
}

impl Field for DoubleField {
    fn div(&self, a: &f64, b: &f64) -> Result<f64> {
        if *b == 0. {
            return Err(Error::DivisionByZero);
        }
        Ok(a / b)
    }

    fn inv(&self, a: &f64) -> Result<f64> {
        self.div(&1., a)
    }
}

impl Divisible for DoubleField {
    type Quotient = f64;

    fn divide(&self, a: &f64, b: &f64) -> Result<f64> {
        self.div(a, b)
    }
}

impl OrderedRing for DoubleField {
    /// The IEEE total order, in which `-0.0 < 0.0`.
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }

    fn is_negative(&self, a: &f64) -> bool {
        *a < 0.
    }
}

impl Normed for DoubleField {
    type NormRing = DoubleField;

    fn norm_ring(&self) -> DoubleField {
        *self
    }

    fn abs(&self, a: &f64) -> f64 {
        a.abs()
    }

    fn abs_squared(&self, a: &f64) -> f64 {
        a * a
    }
}

impl SquareRoot for DoubleField {
    type Root = DoubleField;

    fn root_ring(&self) -> DoubleField {
        *self
    }

    fn sqrt(&self, a: &f64, _context: Option<&PrecisionContext>) -> Result<f64> {
        if *a < 0. {
            return Err(Error::Domain(format!("square root of negative number {}", a)));
        }
        Ok(a.sqrt())
    }
}

impl RealField for DoubleField {
    fn atan2(&self, y: &f64, x: &f64, _context: Option<&PrecisionContext>) -> Result<f64> {
        Ok(y.atan2(*x))
    }

    fn sin(&self, a: &f64, _context: Option<&PrecisionContext>) -> Result<f64> {
        Ok(a.sin())
    }

    fn cos(&self, a: &f64, _context: Option<&PrecisionContext>) -> Result<f64> {
        Ok(a.cos())
    }

    fn pi(&self, _context: Option<&PrecisionContext>) -> Result<f64> {
        Ok(std::f64::consts::PI)
    }
}

impl Canonical for f64 {
    type Ring = DoubleField;

    fn ring() -> DoubleField {
        DOUBLE
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{Field, OrderedRing, Ring, SquareRoot},
        error::Error,
    };

    use super::DOUBLE;

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(DOUBLE.div(&1., &0.), Err(Error::DivisionByZero));
        assert_eq!(DOUBLE.div(&1., &4.), Ok(0.25));
        assert!(!DOUBLE.is_invertible(&f64::INFINITY));
    }

    #[test]
    fn nan_is_not_equal() {
        assert!(!DOUBLE.equals(&f64::NAN, &f64::NAN));
        assert_eq!(DOUBLE.max(&-1., &2.), &2.);
    }

    #[test]
    fn sqrt() {
        assert_eq!(DOUBLE.sqrt(&9., None), Ok(3.));
        assert!(DOUBLE.sqrt(&-1., None).is_err());
    }
}
