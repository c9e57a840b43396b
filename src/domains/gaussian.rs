//! Gaussian integers `a + bi` with integer parts.

use std::fmt::{Debug, Display, Formatter, Write};

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{
    complex::Complex,
    decimal::{Decimal, DecimalField, PrecisionContext, DECIMAL},
    integer::{BigIntegerRing, LongRing, BIG_INTEGER, LONG},
    rational::Fraction,
    Canonical, Divisible, Integral, Normed, Ring,
};

/// A Gaussian integer `real + imaginary * i`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gaussian<T> {
    real: T,
    imaginary: T,
}

impl<T> Gaussian<T> {
    pub fn real(&self) -> &T {
        &self.real
    }

    pub fn imaginary(&self) -> &T {
        &self.imaginary
    }
}

/// The ring of Gaussian integers over the integer ring `R`.
///
/// Absolute values are decimals, rounded to the context of the norm field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GaussianRing<R> {
    ring: R,
    norm: DecimalField,
}

/// Gaussian integers with machine integer parts.
pub const GAUSSIAN64: GaussianRing<LongRing> = GaussianRing::new(LONG);
/// Gaussian integers with arbitrary-precision parts.
pub const GAUSSIAN: GaussianRing<BigIntegerRing> = GaussianRing::new(BIG_INTEGER);

impl<R> GaussianRing<R> {
    pub const fn new(ring: R) -> GaussianRing<R> {
        GaussianRing {
            ring,
            norm: DECIMAL,
        }
    }

    /// Compute absolute values with `norm` instead of the default decimal field.
    pub const fn with_norm_field(ring: R, norm: DecimalField) -> GaussianRing<R> {
        GaussianRing { ring, norm }
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }
}

impl<R: Display> Display for GaussianRing<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[i]", self.ring)
    }
}

impl<R: Integral> GaussianRing<R> {
    pub fn to_element(&self, real: R::Element, imaginary: R::Element) -> Gaussian<R::Element> {
        Gaussian { real, imaginary }
    }

    pub fn conjugate(&self, a: &Gaussian<R::Element>) -> Gaussian<R::Element> {
        Gaussian {
            real: a.real.clone(),
            imaginary: self.ring.neg(&a.imaginary),
        }
    }

    /// The squared modulus `a^2 + b^2` in the base ring. For machine integers this wraps
    /// like every other `i64` operation; see [GaussianRing::exact_norm_squared].
    pub fn norm_squared(&self, a: &Gaussian<R::Element>) -> R::Element {
        let mut n = self.ring.mul(&a.real, &a.real);
        self.ring.add_mul_assign(&mut n, &a.imaginary, &a.imaginary);
        n
    }

    /// The squared modulus `a^2 + b^2` as an arbitrary-precision integer. It never overflows
    /// and is never negative.
    pub fn exact_norm_squared(&self, a: &Gaussian<R::Element>) -> Integer {
        self.ring.to_integer(&a.real).square() + self.ring.to_integer(&a.imaginary).square()
    }

    /// The modulus `sqrt(a^2 + b^2)`, exact if it terminates and no context is given.
    pub fn modulus(
        &self,
        a: &Gaussian<R::Element>,
        context: Option<&PrecisionContext>,
    ) -> Result<Decimal> {
        Decimal::sqrt_of_ratio(
            &self.exact_norm_squared(a),
            &Integer::from(1),
            context,
            self.norm.context(),
        )
    }

    /// Return `true` iff `a` has modulus 1, so that its inverse is again a Gaussian integer.
    pub fn is_unit(&self, a: &Gaussian<R::Element>) -> bool {
        self.exact_norm_squared(a) == 1
    }

    /// The inverse of a unit, which is its conjugate.
    pub fn invert(&self, a: &Gaussian<R::Element>) -> Result<Gaussian<R::Element>> {
        if !self.is_unit(a) {
            return Err(Error::NotInvertible(a.to_string()));
        }
        Ok(self.conjugate(a))
    }

    pub fn to_complex(&self, a: &Gaussian<R::Element>) -> Complex<R::Element> {
        Complex::new(a.real.clone(), a.imaginary.clone())
    }
}

impl<R: Integral> Ring for GaussianRing<R> {
    type Element = Gaussian<R::Element>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Gaussian {
            real: self.ring.add(&a.real, &b.real),
            imaginary: self.ring.add(&a.imaginary, &b.imaginary),
        }
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Gaussian {
            real: self.ring.sub(&a.real, &b.real),
            imaginary: self.ring.sub(&a.imaginary, &b.imaginary),
        }
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let mut real = self.ring.mul(&a.real, &b.real);
        self.ring.sub_mul_assign(&mut real, &a.imaginary, &b.imaginary);
        let mut imaginary = self.ring.mul(&a.real, &b.imaginary);
        self.ring.add_mul_assign(&mut imaginary, &a.imaginary, &b.real);
        Gaussian { real, imaginary }
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Gaussian {
            real: self.ring.neg(&a.real),
            imaginary: self.ring.neg(&a.imaginary),
        }
    }

    fn zero(&self) -> Self::Element {
        Gaussian {
            real: self.ring.zero(),
            imaginary: self.ring.zero(),
        }
    }

    fn one(&self) -> Self::Element {
        Gaussian {
            real: self.ring.one(),
            imaginary: self.ring.zero(),
        }
    }

    fn is_zero(a: &Self::Element) -> bool {
        R::is_zero(&a.real) && R::is_zero(&a.imaginary)
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        self.ring.is_one(&a.real) && R::is_zero(&a.imaginary)
    }

    fn equals(&self, a: &Self::Element, b: &Self::Element) -> bool {
        self.ring.equals(&a.real, &b.real) && self.ring.equals(&a.imaginary, &b.imaginary)
    }

    /// Only the units `1, -1, i, -i` are invertible in the Gaussian integers.
    fn is_invertible(&self, a: &Self::Element) -> bool {
        self.is_unit(a)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Gaussian {
            real: self.ring.sample(rng, range),
            imaginary: self.ring.sample(rng, range),
        }
    }

    fn nth(&self, n: i64) -> Self::Element {
        Gaussian {
            real: self.ring.nth(n),
            imaginary: self.ring.zero(),
        }
    }
}

impl<R: Integral> Divisible for GaussianRing<R> {
    type Quotient = Complex<Fraction<R::Element>>;

    /// Divide in the Gaussian rationals: `a / b = a * conj(b) / |b|^2`.
    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Quotient> {
        if Self::is_zero(b) {
            return Err(Error::DivisionByZero);
        }

        let n = self.norm_squared(b);
        let p = self.mul(a, &self.conjugate(b));
        Ok(Complex::new(
            Fraction::from_parts(p.real, n.clone()),
            Fraction::from_parts(p.imaginary, n),
        ))
    }
}

impl<R: Integral> Normed for GaussianRing<R> {
    type NormRing = DecimalField;

    fn norm_ring(&self) -> DecimalField {
        self.norm
    }

    /// The modulus, exact if it terminates and rounded to the context of the norm field otherwise.
    fn abs(&self, a: &Self::Element) -> Decimal {
        Decimal::sqrt_of_natural(&self.exact_norm_squared(a), self.norm.context())
    }

    fn abs_squared(&self, a: &Self::Element) -> Decimal {
        Decimal::from(self.exact_norm_squared(a))
    }
}

impl<T: Canonical> Canonical for Gaussian<T>
where
    T::Ring: Integral,
{
    type Ring = GaussianRing<T::Ring>;

    fn ring() -> GaussianRing<T::Ring> {
        GaussianRing::new(T::ring())
    }
}

impl<T: Canonical> Gaussian<T>
where
    T::Ring: Integral,
{
    fn gaussian_ring() -> GaussianRing<T::Ring> {
        GaussianRing::new(T::ring())
    }

    pub fn new(real: T, imaginary: T) -> Gaussian<T> {
        Gaussian { real, imaginary }
    }

    /// The imaginary unit `i`.
    pub fn i() -> Gaussian<T> {
        let r = T::ring();
        Gaussian {
            real: r.zero(),
            imaginary: r.one(),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::gaussian_ring().add(self, other)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self::gaussian_ring().sub(self, other)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        Self::gaussian_ring().mul(self, other)
    }

    /// Divide into the Gaussian rationals, failing if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Complex<Fraction<T>>> {
        Self::gaussian_ring().divide(self, other)
    }

    pub fn negate(&self) -> Self {
        Self::gaussian_ring().neg(self)
    }

    pub fn conjugate(&self) -> Self {
        Self::gaussian_ring().conjugate(self)
    }

    pub fn pow(&self, e: u64) -> Self {
        Self::gaussian_ring().pow(self, e)
    }

    pub fn norm_squared(&self) -> T {
        Self::gaussian_ring().norm_squared(self)
    }

    pub fn abs(&self, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Self::gaussian_ring().modulus(self, context)
    }

    pub fn is_zero(&self) -> bool {
        GaussianRing::<T::Ring>::is_zero(self)
    }

    /// Return `true` iff `self` is non-zero, so that dividing by it is defined.
    pub fn is_invertible(&self) -> bool {
        !self.is_zero()
    }

    pub fn is_unit(&self) -> bool {
        Self::gaussian_ring().is_unit(self)
    }

    /// The inverse of a unit. Other Gaussian integers have no inverse in the Gaussian integers.
    pub fn invert(&self) -> Result<Self> {
        Self::gaussian_ring().invert(self)
    }

    pub fn to_complex(&self) -> Complex<T> {
        Self::gaussian_ring().to_complex(self)
    }
}

impl<T: Canonical> From<T> for Gaussian<T>
where
    T::Ring: Integral,
{
    fn from(value: T) -> Self {
        Gaussian {
            real: value,
            imaginary: T::ring().zero(),
        }
    }
}

impl<T: Display> Display for Gaussian<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        Display::fmt(&self.real, f)?;
        f.write_char('+')?;
        Display::fmt(&self.imaginary, f)?;
        f.write_str("i)")
    }
}

impl<T: Display> Debug for Gaussian<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl_ring_ops!(Gaussian, crate::domains::Integral);
