//! Machine and arbitrary-precision integer rings.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use rand::Rng;
use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{
    decimal::{Decimal, DecimalField, PrecisionContext, DECIMAL},
    rational::Fraction,
    Canonical, Divisible, EuclideanDomain, Integral, Normed, OrderedRing, Ring, SquareRoot,
};

/// The ring of 64-bit machine integers.
///
/// Arithmetic wraps on overflow, like machine integers do in two's complement.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct LongRing;

/// The ring of 64-bit machine integers.
pub const LONG: LongRing = LongRing::new();

impl LongRing {
    pub const fn new() -> LongRing {
        LongRing
    }
}

impl Display for LongRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Z64")
    }
}

impl Ring for LongRing {
    type Element = i64;

    #[inline]
    fn add(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_add(*b)
    }

    #[inline]
    fn sub(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_sub(*b)
    }

    #[inline]
    fn mul(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_mul(*b)
    }

    #[inline]
    fn neg(&self, a: &i64) -> i64 {
        a.wrapping_neg()
    }

    fn zero(&self) -> i64 {
        0
    }

    fn one(&self) -> i64 {
        1
    }

    fn is_zero(a: &i64) -> bool {
        *a == 0
    }

    fn is_one(&self, a: &i64) -> bool {
        *a == 1
    }

    fn equals(&self, a: &i64, b: &i64) -> bool {
        a == b
    }

    fn is_invertible(&self, a: &i64) -> bool {
        *a == 1 || *a == -1
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> i64 {
        rng.gen_range(range.0..range.1)
    }

    fn nth(&self, n: i64) -> i64 {
        n
    }
}

impl EuclideanDomain for LongRing {
    fn rem(&self, a: &i64, b: &i64) -> i64 {
        a.wrapping_rem(*b)
    }

    fn quot_rem(&self, a: &i64, b: &i64) -> (i64, i64) {
        (a.wrapping_div(*b), a.wrapping_rem(*b))
    }

    /// The non-negative gcd. The only gcd that does not fit is `gcd(i64::MIN, 0) = 2^63`,
    /// which wraps to `i64::MIN` like any other overflowing operation of this ring.
    fn gcd(&self, a: &i64, b: &i64) -> i64 {
        let mut a = a.unsigned_abs();
        let mut b = b.unsigned_abs();
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a as i64
    }
}

impl OrderedRing for LongRing {
    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }
}

impl Integral for LongRing {
    fn to_integer(&self, a: &i64) -> Integer {
        Integer::from(*a)
    }

    fn from_integer(&self, a: &Integer) -> i64 {
        a.to_i64_wrapping()
    }
}

impl Divisible for LongRing {
    type Quotient = Fraction<i64>;

    fn divide(&self, a: &i64, b: &i64) -> Result<Fraction<i64>> {
        if *b == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Fraction::from_parts(*a, *b))
    }
}

impl Normed for LongRing {
    type NormRing = LongRing;

    fn norm_ring(&self) -> LongRing {
        *self
    }

    fn abs(&self, a: &i64) -> i64 {
        a.wrapping_abs()
    }

    fn abs_squared(&self, a: &i64) -> i64 {
        a.wrapping_mul(*a)
    }
}

impl SquareRoot for LongRing {
    type Root = DecimalField;

    fn root_ring(&self) -> DecimalField {
        DECIMAL
    }

    fn sqrt(&self, a: &i64, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Decimal::sqrt_of_ratio(
            &Integer::from(*a),
            &Integer::from(1),
            context,
            &PrecisionContext::DEFAULT,
        )
    }
}

impl Canonical for i64 {
    type Ring = LongRing;

    fn ring() -> LongRing {
        LONG
    }
}

/// The ring of arbitrary-precision integers, backed by GMP.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BigIntegerRing;

/// The ring of arbitrary-precision integers.
pub const BIG_INTEGER: BigIntegerRing = BigIntegerRing::new();

impl BigIntegerRing {
    pub const fn new() -> BigIntegerRing {
        BigIntegerRing
    }
}

impl Display for BigIntegerRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Z")
    }
}

impl Ring for BigIntegerRing {
    type Element = Integer;

    #[inline]
    fn add(&self, a: &Integer, b: &Integer) -> Integer {
        a.clone() + b
    }

    #[inline]
    fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        a.clone() - b
    }

    #[inline]
    fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        a.clone() * b
    }

    #[inline]
    fn neg(&self, a: &Integer) -> Integer {
        -a.clone()
    }

    #[inline]
    fn add_assign(&self, a: &mut Integer, b: &Integer) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Integer, b: &Integer) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Integer, b: &Integer) {
        *a *= b;
    }

    fn add_mul_assign(&self, a: &mut Integer, b: &Integer, c: &Integer) {
        *a += b.clone() * c;
    }

    fn sub_mul_assign(&self, a: &mut Integer, b: &Integer, c: &Integer) {
        *a -= b.clone() * c;
    }

    fn zero(&self) -> Integer {
        Integer::new()
    }

    fn one(&self) -> Integer {
        Integer::from(1)
    }

    fn is_zero(a: &Integer) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Integer) -> bool {
        *a == 1
    }

    fn equals(&self, a: &Integer, b: &Integer) -> bool {
        a == b
    }

    fn is_invertible(&self, a: &Integer) -> bool {
        *a == 1 || *a == -1
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Integer {
        Integer::from(rng.gen_range(range.0..range.1))
    }

    fn nth(&self, n: i64) -> Integer {
        Integer::from(n)
    }
}

impl EuclideanDomain for BigIntegerRing {
    fn rem(&self, a: &Integer, b: &Integer) -> Integer {
        a.clone() % b
    }

    fn quot_rem(&self, a: &Integer, b: &Integer) -> (Integer, Integer) {
        a.clone().div_rem(b.clone())
    }

    fn gcd(&self, a: &Integer, b: &Integer) -> Integer {
        a.clone().gcd(b)
    }
}

impl OrderedRing for BigIntegerRing {
    fn compare(&self, a: &Integer, b: &Integer) -> Ordering {
        a.cmp(b)
    }

    fn is_negative(&self, a: &Integer) -> bool {
        a.is_negative()
    }
}

impl Integral for BigIntegerRing {
    fn to_integer(&self, a: &Integer) -> Integer {
        a.clone()
    }

    fn from_integer(&self, a: &Integer) -> Integer {
        a.clone()
    }
}

impl Divisible for BigIntegerRing {
    type Quotient = Fraction<Integer>;

    fn divide(&self, a: &Integer, b: &Integer) -> Result<Fraction<Integer>> {
        if b.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Fraction::from_parts(a.clone(), b.clone()))
    }
}

impl Normed for BigIntegerRing {
    type NormRing = BigIntegerRing;

    fn norm_ring(&self) -> BigIntegerRing {
        *self
    }

    fn abs(&self, a: &Integer) -> Integer {
        a.clone().abs()
    }

    fn abs_squared(&self, a: &Integer) -> Integer {
        a.clone().square()
    }
}

impl SquareRoot for BigIntegerRing {
    type Root = DecimalField;

    fn root_ring(&self) -> DecimalField {
        DECIMAL
    }

    fn sqrt(&self, a: &Integer, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Decimal::sqrt_of_ratio(a, &Integer::from(1), context, &PrecisionContext::DEFAULT)
    }
}

impl Canonical for Integer {
    type Ring = BigIntegerRing;

    fn ring() -> BigIntegerRing {
        BIG_INTEGER
    }
}

#[cfg(test)]
mod test {
    use rug::Integer;

    use crate::domains::{
        decimal::{Decimal, PrecisionContext, RoundingMode},
        EuclideanDomain, Normed, OrderedRing, Ring, SquareRoot,
    };

    use super::{BIG_INTEGER, LONG};

    #[test]
    fn gcd_is_non_negative() {
        assert_eq!(LONG.gcd(&-12, &18), 6);
        assert_eq!(LONG.gcd(&0, &-7), 7);
        assert_eq!(LONG.gcd(&i64::MIN, &6), 2);
        assert_eq!(LONG.gcd(&i64::MIN, &i64::MAX), 1);
        assert_eq!(
            BIG_INTEGER.gcd(&Integer::from(-12), &Integer::from(-18)),
            6
        );
    }

    #[test]
    fn gcd_of_minimum_wraps() {
        // 2^63 does not fit in an i64
        assert_eq!(LONG.gcd(&i64::MIN, &0), i64::MIN);
        assert_eq!(LONG.gcd(&0, &i64::MIN), i64::MIN);
        assert_eq!(LONG.gcd(&i64::MIN, &i64::MIN), i64::MIN);
    }

    #[test]
    fn wrapping() {
        assert_eq!(LONG.add(&i64::MAX, &1), i64::MIN);
        assert_eq!(LONG.abs(&-5), 5);
        assert!(LONG.is_negative(&-1));
    }

    #[test]
    fn nth_and_pow() {
        assert_eq!(BIG_INTEGER.nth(-42), -42);
        assert_eq!(LONG.pow(&3, 4), 81);
        let big = BIG_INTEGER.pow(&Integer::from(2), 100);
        assert_eq!(big.to_string(), "1267650600228229401496703205376");
    }

    #[test]
    fn units() {
        assert!(LONG.is_invertible(&-1));
        assert!(!LONG.is_invertible(&2));
        assert!(BIG_INTEGER.is_invertible(&Integer::from(1)));
    }

    #[test]
    fn sqrt() {
        assert_eq!(LONG.sqrt(&16, None).unwrap(), Decimal::from(4));
        let ctx = PrecisionContext::new(3, RoundingMode::HalfUp);
        assert_eq!(
            BIG_INTEGER.sqrt(&Integer::from(2), Some(&ctx)).unwrap(),
            "1.414".parse::<Decimal>().unwrap()
        );
        assert!(LONG.sqrt(&-1, None).is_err());
    }
}
