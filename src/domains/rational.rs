//! Fractions over an integer ring.
//!
//! Arithmetic on fractions does not reduce: `1/2 + 1/3` is computed as `(1*3 + 1*2)/(2*3)`.
//! Use [Fraction::reduce] or [Fraction::normalize] to obtain a canonical representation.
//! Equality and ordering are by value, so `1/2 == 2/4`.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{
    decimal::{Decimal, DecimalField, PrecisionContext, DECIMAL},
    integer::{BigIntegerRing, LongRing, BIG_INTEGER, LONG},
    Canonical, Divisible, Field, Integral, Normed, OrderedRing, Ring, SquareRoot,
};

/// A fraction `numerator / denominator` with a non-zero denominator.
#[derive(Clone, Serialize)]
pub struct Fraction<T> {
    numerator: T,
    denominator: T,
}

/// A fraction of machine integers.
pub type Rational64 = Fraction<i64>;
/// A fraction of arbitrary-precision integers.
pub type Rational = Fraction<Integer>;

impl<T> Fraction<T> {
    /// Create a fraction without checking the denominator.
    pub(crate) fn from_parts(numerator: T, denominator: T) -> Fraction<T> {
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &T {
        &self.numerator
    }

    pub fn denominator(&self) -> &T {
        &self.denominator
    }
}

/// The field of fractions of the integer ring `R`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FractionField<R> {
    ring: R,
}

/// The field of fractions of machine integers.
pub const Q64: FractionField<LongRing> = FractionField::new(LONG);
/// The field of fractions of arbitrary-precision integers.
pub const Q: FractionField<BigIntegerRing> = FractionField::new(BIG_INTEGER);

impl<R> FractionField<R> {
    pub const fn new(ring: R) -> FractionField<R> {
        FractionField { ring }
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }
}

impl<R: Display> Display for FractionField<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frac({})", self.ring)
    }
}

impl<R: Integral> FractionField<R> {
    /// Create a fraction, dividing out the gcd of the numerator and denominator if `do_gcd` is set.
    pub fn to_element(
        &self,
        numerator: R::Element,
        denominator: R::Element,
        do_gcd: bool,
    ) -> Result<Fraction<R::Element>> {
        if R::is_zero(&denominator) {
            return Err(Error::DivisionByZero);
        }

        let f = Fraction {
            numerator,
            denominator,
        };

        Ok(if do_gcd { self.reduce(&f) } else { f })
    }

    fn abs_integer(&self, a: &R::Element) -> R::Element {
        if self.ring.is_negative(a) {
            self.ring.neg(a)
        } else {
            a.clone()
        }
    }

    /// Move the sign into the numerator, so that the denominator is positive.
    pub fn normalize(&self, a: &Fraction<R::Element>) -> Fraction<R::Element> {
        if self.ring.is_negative(&a.denominator) {
            Fraction {
                numerator: self.ring.neg(&a.numerator),
                denominator: self.ring.neg(&a.denominator),
            }
        } else {
            a.clone()
        }
    }

    /// Divide the numerator and denominator by their gcd and normalize the sign.
    pub fn reduce(&self, a: &Fraction<R::Element>) -> Fraction<R::Element> {
        let g = self.ring.gcd(&a.numerator, &a.denominator);
        let reduced = if self.ring.is_one(&g) || R::is_zero(&g) {
            a.clone()
        } else {
            Fraction {
                numerator: self.ring.quot_rem(&a.numerator, &g).0,
                denominator: self.ring.quot_rem(&a.denominator, &g).0,
            }
        };
        self.normalize(&reduced)
    }

    /// Return `true` iff the reduced numerator is `1` or `-1`, so that the inverse is an integer.
    pub fn is_unit(&self, a: &Fraction<R::Element>) -> bool {
        let reduced = self.reduce(a);
        self.ring.is_invertible(&reduced.numerator)
    }

    pub fn signum(&self, a: &Fraction<R::Element>) -> i32 {
        if R::is_zero(&a.numerator) {
            0
        } else if self.ring.is_negative(&a.numerator) == self.ring.is_negative(&a.denominator) {
            1
        } else {
            -1
        }
    }

    /// Convert to a decimal, exactly if no context is given.
    pub fn to_decimal(
        &self,
        a: &Fraction<R::Element>,
        context: Option<&PrecisionContext>,
    ) -> Result<Decimal> {
        Decimal::from_ratio(
            &self.ring.to_integer(&a.numerator),
            &self.ring.to_integer(&a.denominator),
            context,
        )
    }

    pub fn to_f64(&self, a: &Fraction<R::Element>) -> f64 {
        rug::Rational::from((
            self.ring.to_integer(&a.numerator),
            self.ring.to_integer(&a.denominator),
        ))
        .to_f64()
    }

    /// Raise `a` to a signed power. Negative powers of zero are an error.
    pub fn pow_signed(&self, a: &Fraction<R::Element>, e: i64) -> Result<Fraction<R::Element>> {
        if e >= 0 {
            Ok(self.pow(a, e as u64))
        } else {
            Ok(self.pow(&self.inv(a)?, e.unsigned_abs()))
        }
    }
}

impl<R: Integral> Ring for FractionField<R> {
    type Element = Fraction<R::Element>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;
        Fraction {
            numerator: r.add(
                &r.mul(&a.numerator, &b.denominator),
                &r.mul(&b.numerator, &a.denominator),
            ),
            denominator: r.mul(&a.denominator, &b.denominator),
        }
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;
        Fraction {
            numerator: r.sub(
                &r.mul(&a.numerator, &b.denominator),
                &r.mul(&b.numerator, &a.denominator),
            ),
            denominator: r.mul(&a.denominator, &b.denominator),
        }
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Fraction {
            numerator: self.ring.mul(&a.numerator, &b.numerator),
            denominator: self.ring.mul(&a.denominator, &b.denominator),
        }
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Fraction {
            numerator: self.ring.neg(&a.numerator),
            denominator: a.denominator.clone(),
        }
    }

    fn zero(&self) -> Self::Element {
        Fraction {
            numerator: self.ring.zero(),
            denominator: self.ring.one(),
        }
    }

    fn one(&self) -> Self::Element {
        Fraction {
            numerator: self.ring.one(),
            denominator: self.ring.one(),
        }
    }

    fn is_zero(a: &Self::Element) -> bool {
        R::is_zero(&a.numerator)
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        self.ring.equals(&a.numerator, &a.denominator)
    }

    fn equals(&self, a: &Self::Element, b: &Self::Element) -> bool {
        self.ring.equals(
            &self.ring.mul(&a.numerator, &b.denominator),
            &self.ring.mul(&b.numerator, &a.denominator),
        )
    }

    fn is_invertible(&self, a: &Self::Element) -> bool {
        !R::is_zero(&a.numerator)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Fraction {
            numerator: self.ring.sample(rng, range),
            denominator: self.ring.sample(rng, (1, range.1.max(2))),
        }
    }

    fn nth(&self, n: i64) -> Self::Element {
        Fraction {
            numerator: self.ring.nth(n),
            denominator: self.ring.one(),
        }
    }
}

impl<R: Integral> Field for FractionField<R> {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        if R::is_zero(&b.numerator) {
            return Err(Error::DivisionByZero);
        }

        Ok(Fraction {
            numerator: self.ring.mul(&a.numerator, &b.denominator),
            denominator: self.ring.mul(&a.denominator, &b.numerator),
        })
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element> {
        if R::is_zero(&a.numerator) {
            return Err(Error::NotInvertible(a.to_string()));
        }

        Ok(Fraction {
            numerator: a.denominator.clone(),
            denominator: a.numerator.clone(),
        })
    }
}

impl<R: Integral> Divisible for FractionField<R> {
    type Quotient = Fraction<R::Element>;

    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        self.div(a, b)
    }
}

impl<R: Integral> OrderedRing for FractionField<R> {
    fn compare(&self, a: &Self::Element, b: &Self::Element) -> Ordering {
        let r = &self.ring;
        let ord = r.compare(
            &r.mul(&a.numerator, &b.denominator),
            &r.mul(&b.numerator, &a.denominator),
        );

        if r.is_negative(&a.denominator) != r.is_negative(&b.denominator) {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl<R: Integral> Normed for FractionField<R> {
    type NormRing = FractionField<R>;

    fn norm_ring(&self) -> FractionField<R> {
        self.clone()
    }

    fn abs(&self, a: &Self::Element) -> Self::Element {
        Fraction {
            numerator: self.abs_integer(&a.numerator),
            denominator: self.abs_integer(&a.denominator),
        }
    }

    fn abs_squared(&self, a: &Self::Element) -> Self::Element {
        self.mul(a, a)
    }
}

impl<R: Integral> SquareRoot for FractionField<R> {
    type Root = DecimalField;

    fn root_ring(&self) -> DecimalField {
        DECIMAL
    }

    fn sqrt(&self, a: &Self::Element, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Decimal::sqrt_of_ratio(
            &self.ring.to_integer(&a.numerator),
            &self.ring.to_integer(&a.denominator),
            context,
            &PrecisionContext::DEFAULT,
        )
    }
}

impl<T: Canonical> Canonical for Fraction<T>
where
    T::Ring: Integral,
{
    type Ring = FractionField<T::Ring>;

    fn ring() -> FractionField<T::Ring> {
        FractionField::new(T::ring())
    }
}

impl<T: Canonical> Fraction<T>
where
    T::Ring: Integral,
{
    fn field() -> FractionField<T::Ring> {
        FractionField::new(T::ring())
    }

    /// Create the fraction `numerator / denominator`, without reducing it.
    pub fn new(numerator: T, denominator: T) -> Result<Fraction<T>> {
        Self::field().to_element(numerator, denominator, false)
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::field().add(self, other)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self::field().sub(self, other)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        Self::field().mul(self, other)
    }

    /// Divide by `other`, failing if the numerator of `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        Self::field().div(self, other)
    }

    pub fn negate(&self) -> Self {
        Self::field().neg(self)
    }

    pub fn invert(&self) -> Result<Self> {
        Self::field().inv(self)
    }

    pub fn pow(&self, e: i64) -> Result<Self> {
        Self::field().pow_signed(self, e)
    }

    pub fn abs(&self) -> Self {
        Self::field().abs(self)
    }

    pub fn signum(&self) -> i32 {
        Self::field().signum(self)
    }

    pub fn normalize(&self) -> Self {
        Self::field().normalize(self)
    }

    pub fn reduce(&self) -> Self {
        Self::field().reduce(self)
    }

    pub fn is_zero(&self) -> bool {
        FractionField::<T::Ring>::is_zero(self)
    }

    pub fn is_invertible(&self) -> bool {
        Self::field().is_invertible(self)
    }

    pub fn is_unit(&self) -> bool {
        Self::field().is_unit(self)
    }

    pub fn to_decimal(&self, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Self::field().to_decimal(self, context)
    }

    pub fn to_f64(&self) -> f64 {
        Self::field().to_f64(self)
    }
}

impl<T: Canonical> From<T> for Fraction<T>
where
    T::Ring: Integral,
{
    fn from(value: T) -> Self {
        Fraction {
            numerator: value,
            denominator: T::ring().one(),
        }
    }
}

impl<T: Canonical> PartialEq for Fraction<T>
where
    T::Ring: Integral,
{
    fn eq(&self, other: &Self) -> bool {
        Self::field().equals(self, other)
    }
}

impl<T: Canonical> Eq for Fraction<T> where T::Ring: Integral {}

/// Equal fractions have the same reduced form, so that is what is hashed.
impl<T: Canonical + Hash> Hash for Fraction<T>
where
    T::Ring: Integral,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

impl<T: Canonical> PartialOrd for Fraction<T>
where
    T::Ring: Integral,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Canonical> Ord for Fraction<T>
where
    T::Ring: Integral,
{
    fn cmp(&self, other: &Self) -> Ordering {
        Self::field().compare(self, other)
    }
}

impl<T: Display> Display for Fraction<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<T: Display> Debug for Fraction<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T: Canonical + FromStr> FromStr for Fraction<T>
where
    T::Ring: Integral,
{
    type Err = Error;

    /// Parse `n/d` or an integer `n`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |p: &str| p.trim().parse::<T>().map_err(|_| Error::Parse(s.to_owned()));
        match s.split_once('/') {
            Some((n, d)) => Fraction::new(parse(n)?, parse(d)?),
            None => Ok(Fraction::from(parse(s)?)),
        }
    }
}

impl<'de, T> Deserialize<'de> for Fraction<T>
where
    T: Canonical + Deserialize<'de>,
    T::Ring: Integral,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts<T> {
            numerator: T,
            denominator: T,
        }

        let p = Parts::<T>::deserialize(deserializer)?;
        Fraction::new(p.numerator, p.denominator).map_err(serde::de::Error::custom)
    }
}

impl_ring_ops!(Fraction, crate::domains::Integral);

#[cfg(test)]
mod test {
    use rug::Integer;

    use crate::{
        domains::{
            decimal::{Decimal, PrecisionContext, RoundingMode},
            OrderedRing, Ring,
        },
        error::Error,
    };

    use super::{Fraction, Rational, Rational64, Q64};

    fn f(n: i64, d: i64) -> Rational64 {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn add_does_not_reduce() {
        let sum = f(1, 2).add(&f(1, 3));
        assert_eq!(*sum.numerator(), 5);
        assert_eq!(*sum.denominator(), 6);

        let sum = f(1, 2).add(&f(1, 2));
        assert_eq!((*sum.numerator(), *sum.denominator()), (4, 4));
        assert!(sum.reduce().denominator() == &1);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Fraction::new(1, 0), Err(Error::DivisionByZero));
        assert_eq!(f(1, 2).divide(&f(0, 5)), Err(Error::DivisionByZero));
        assert!(matches!(f(0, 3).invert(), Err(Error::NotInvertible(_))));
    }

    #[test]
    fn equality_by_value() {
        assert_eq!(f(1, 2), f(2, 4));
        assert_eq!(f(-1, 2), f(1, -2));
        assert_ne!(f(1, 2), f(1, 3));
        assert!(Q64.equals(&f(0, 4), &Q64.zero()));
    }

    #[test]
    fn normalize_and_reduce() {
        let a = f(6, -8);
        let n = a.normalize();
        assert_eq!((*n.numerator(), *n.denominator()), (-6, 8));
        let r = a.reduce();
        assert_eq!((*r.numerator(), *r.denominator()), (-3, 4));
        let z = f(0, -5).reduce();
        assert_eq!((*z.numerator(), *z.denominator()), (0, 1));
    }

    #[test]
    fn ordering() {
        assert!(f(1, 3) < f(1, 2));
        assert!(f(1, -3) > f(1, -2));
        assert!(f(-1, 2) < f(1, -3));
        assert_eq!(Q64.compare(&f(2, 4), &f(1, 2)), std::cmp::Ordering::Equal);
        assert_eq!(f(1, 3).max(f(2, 5)), f(2, 5));
        assert_eq!(f(3, -4).abs(), f(3, 4));
        assert_eq!(f(3, -4).signum(), -1);
    }

    #[test]
    fn powers_and_units() {
        assert_eq!(f(2, 3).pow(2).unwrap(), f(4, 9));
        assert_eq!(f(2, 3).pow(-2).unwrap(), f(9, 4));
        assert_eq!(f(2, 3).pow(0).unwrap(), f(1, 1));
        assert!(f(0, 1).pow(-1).is_err());
        assert!(f(2, 6).is_unit());
        assert!(f(-1, 7).is_unit());
        assert!(!f(2, 3).is_unit());
        assert!(f(2, 3).is_invertible());
    }

    #[test]
    fn decimals() {
        assert_eq!(
            f(3, 8).to_decimal(None).unwrap(),
            "0.375".parse::<Decimal>().unwrap()
        );
        assert_eq!(f(1, 3).to_decimal(None), Err(Error::NonTerminatingDecimal));
        let ctx = PrecisionContext::new(3, RoundingMode::HalfUp);
        assert_eq!(f(-2, 3).to_decimal(Some(&ctx)).unwrap().to_string(), "-0.667");
        assert_eq!(f(1, 4).to_f64(), 0.25);
    }

    #[test]
    fn hash_by_value() {
        let set: ahash::HashSet<Rational64> = [f(1, 2), f(2, 4), f(-3, -6), f(0, 5), f(0, -1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&f(4, 8)));
    }

    #[test]
    fn deserialization_validates() {
        let a: Rational64 = serde_json::from_str(&serde_json::to_string(&f(3, -4)).unwrap()).unwrap();
        assert_eq!((*a.numerator(), *a.denominator()), (3, -4));

        let err = serde_json::from_str::<Rational64>(r#"{"numerator":1,"denominator":0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("division by zero"));
        assert!(serde_json::from_str::<Rational64>(r#"{"numerator":1}"#).is_err());
    }

    #[test]
    fn parse_and_operators() {
        let a: Rational = "6/-4".parse().unwrap();
        assert_eq!(a, Fraction::new(Integer::from(-3), Integer::from(2)).unwrap());
        let b: Rational = "7".parse().unwrap();
        assert_eq!(b.to_string(), "7/1");
        assert!("1/x".parse::<Rational>().is_err());

        let c = &a + &b;
        assert_eq!(c, "11/2".parse::<Rational>().unwrap());
        assert_eq!(-f(1, 2) * f(2, 3), f(-1, 3));
        assert_eq!(f(1, 2) - f(1, 3), f(1, 6));
    }
}
