//! Complex numbers over a field and their polar forms.
//!
//! ```
//! use numtower::domains::complex::Complex;
//!
//! let a = Complex::new(1., 2.);
//! let b = Complex::new(3., -1.);
//! assert_eq!(a.multiply(&b), Complex::new(5., 5.));
//! assert_eq!(a.multiply(&b).divide(&b).unwrap(), a);
//! ```

use std::fmt::{Debug, Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{
    decimal::{DecimalField, PrecisionContext, DECIMAL},
    float::{DoubleField, DOUBLE},
    Canonical, Divisible, Field, Normed, OrderedRing, RealField, Ring,
};

/// A complex number `re + im * i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    #[inline]
    pub fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }
}

/// The field of complex numbers over the field `F`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexField<F> {
    field: F,
}

/// Complex numbers with double-precision parts.
pub const C64: ComplexField<DoubleField> = ComplexField::new(DOUBLE);
/// Complex numbers with decimal parts.
pub const CDECIMAL: ComplexField<DecimalField> = ComplexField::new(DECIMAL);

impl<F> ComplexField<F> {
    pub const fn new(field: F) -> ComplexField<F> {
        ComplexField { field }
    }

    pub fn field(&self) -> &F {
        &self.field
    }
}

impl<F: Display> Display for ComplexField<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "C({})", self.field)
    }
}

impl<F: Field> ComplexField<F> {
    pub fn conjugate(&self, a: &Complex<F::Element>) -> Complex<F::Element> {
        Complex {
            re: a.re.clone(),
            im: self.field.neg(&a.im),
        }
    }

    /// The squared modulus `re^2 + im^2`.
    pub fn norm_squared(&self, a: &Complex<F::Element>) -> F::Element {
        let mut n = self.field.mul(&a.re, &a.re);
        self.field.add_mul_assign(&mut n, &a.im, &a.im);
        n
    }

    pub fn pow_signed(&self, a: &Complex<F::Element>, e: i64) -> Result<Complex<F::Element>> {
        if e >= 0 {
            Ok(self.pow(a, e as u64))
        } else {
            Ok(self.pow(&self.inv(a)?, e.unsigned_abs()))
        }
    }
}

impl<F: RealField> ComplexField<F> {
    pub fn modulus(
        &self,
        a: &Complex<F::Element>,
        context: Option<&PrecisionContext>,
    ) -> Result<F::Element> {
        self.field.sqrt(&self.norm_squared(a), context)
    }

    /// The angle of `a` in `(-pi, pi]`. The argument of zero is undefined.
    pub fn argument(
        &self,
        a: &Complex<F::Element>,
        context: Option<&PrecisionContext>,
    ) -> Result<F::Element> {
        if Self::is_zero(a) {
            return Err(Error::Domain("the argument of zero is undefined".into()));
        }
        self.field.atan2(&a.im, &a.re, context)
    }

    pub fn to_polar(
        &self,
        a: &Complex<F::Element>,
        context: Option<&PrecisionContext>,
    ) -> Result<Polar<F::Element>> {
        Ok(Polar {
            radial: self.modulus(a, context)?,
            angular: self.argument(a, context)?,
        })
    }

    pub fn from_polar(
        &self,
        p: &Polar<F::Element>,
        context: Option<&PrecisionContext>,
    ) -> Result<Complex<F::Element>> {
        let cos = self.field.cos(&p.angular, context)?;
        let sin = self.field.sin(&p.angular, context)?;
        Ok(Complex {
            re: self.field.mul(&p.radial, &cos),
            im: self.field.mul(&p.radial, &sin),
        })
    }
}

impl<F: Field> Ring for ComplexField<F> {
    type Element = Complex<F::Element>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Complex {
            re: self.field.add(&a.re, &b.re),
            im: self.field.add(&a.im, &b.im),
        }
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        Complex {
            re: self.field.sub(&a.re, &b.re),
            im: self.field.sub(&a.im, &b.im),
        }
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let mut re = self.field.mul(&a.re, &b.re);
        self.field.sub_mul_assign(&mut re, &a.im, &b.im);
        let mut im = self.field.mul(&a.re, &b.im);
        self.field.add_mul_assign(&mut im, &a.im, &b.re);
        Complex { re, im }
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Complex {
            re: self.field.neg(&a.re),
            im: self.field.neg(&a.im),
        }
    }

    fn zero(&self) -> Self::Element {
        Complex {
            re: self.field.zero(),
            im: self.field.zero(),
        }
    }

    fn one(&self) -> Self::Element {
        Complex {
            re: self.field.one(),
            im: self.field.zero(),
        }
    }

    fn is_zero(a: &Self::Element) -> bool {
        F::is_zero(&a.re) && F::is_zero(&a.im)
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        self.field.is_one(&a.re) && F::is_zero(&a.im)
    }

    fn equals(&self, a: &Self::Element, b: &Self::Element) -> bool {
        self.field.equals(&a.re, &b.re) && self.field.equals(&a.im, &b.im)
    }

    fn is_invertible(&self, a: &Self::Element) -> bool {
        !Self::is_zero(a)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element {
        Complex {
            re: self.field.sample(rng, range),
            im: self.field.sample(rng, range),
        }
    }

    fn nth(&self, n: i64) -> Self::Element {
        Complex {
            re: self.field.nth(n),
            im: self.field.zero(),
        }
    }
}

impl<F: Field> Field for ComplexField<F> {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        let n = self.norm_squared(b);
        if F::is_zero(&n) {
            return Err(Error::DivisionByZero);
        }

        let mut re = self.field.mul(&a.re, &b.re);
        self.field.add_mul_assign(&mut re, &a.im, &b.im);
        let mut im = self.field.mul(&a.im, &b.re);
        self.field.sub_mul_assign(&mut im, &a.re, &b.im);

        Ok(Complex {
            re: self.field.div(&re, &n)?,
            im: self.field.div(&im, &n)?,
        })
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element> {
        if Self::is_zero(a) {
            return Err(Error::NotInvertible(a.to_string()));
        }
        self.div(&self.one(), a)
    }
}

impl<F: Field> Divisible for ComplexField<F> {
    type Quotient = Complex<F::Element>;

    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element> {
        self.div(a, b)
    }
}

impl<F: RealField> Normed for ComplexField<F> {
    type NormRing = F;

    fn norm_ring(&self) -> F {
        self.field.clone()
    }

    fn abs(&self, a: &Self::Element) -> F::Element {
        // the radicand is a sum of squares, so the root always exists
        self.modulus(a, None)
            .unwrap_or_else(|_| self.field.zero())
    }

    fn abs_squared(&self, a: &Self::Element) -> F::Element {
        self.norm_squared(a)
    }
}

impl<T: Canonical> Canonical for Complex<T>
where
    T::Ring: Field,
{
    type Ring = ComplexField<T::Ring>;

    fn ring() -> ComplexField<T::Ring> {
        ComplexField::new(T::ring())
    }
}

impl<T: Canonical> Complex<T>
where
    T::Ring: Field,
{
    fn complex_field() -> ComplexField<T::Ring> {
        ComplexField::new(T::ring())
    }

    /// The imaginary unit `i`.
    pub fn i() -> Complex<T> {
        let f = T::ring();
        Complex::new(f.zero(), f.one())
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::complex_field().add(self, other)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self::complex_field().sub(self, other)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        Self::complex_field().mul(self, other)
    }

    /// Divide by `other`, failing if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        Self::complex_field().div(self, other)
    }

    pub fn negate(&self) -> Self {
        Self::complex_field().neg(self)
    }

    pub fn conjugate(&self) -> Self {
        Self::complex_field().conjugate(self)
    }

    pub fn invert(&self) -> Result<Self> {
        Self::complex_field().inv(self)
    }

    pub fn pow(&self, e: i64) -> Result<Self> {
        Self::complex_field().pow_signed(self, e)
    }

    pub fn abs_squared(&self) -> T {
        Self::complex_field().norm_squared(self)
    }

    pub fn is_zero(&self) -> bool {
        ComplexField::<T::Ring>::is_zero(self)
    }

    pub fn is_invertible(&self) -> bool {
        !self.is_zero()
    }
}

impl<T: Canonical> Complex<T>
where
    T::Ring: RealField,
{
    pub fn abs(&self, context: Option<&PrecisionContext>) -> Result<T> {
        Self::complex_field().modulus(self, context)
    }

    pub fn argument(&self, context: Option<&PrecisionContext>) -> Result<T> {
        Self::complex_field().argument(self, context)
    }

    pub fn to_polar(&self, context: Option<&PrecisionContext>) -> Result<Polar<T>> {
        Self::complex_field().to_polar(self, context)
    }
}

impl<T: Display> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        Display::fmt(&self.re, f)?;
        f.write_char('+')?;
        Display::fmt(&self.im, f)?;
        f.write_str("i)")
    }
}

impl<T: Debug> Debug for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        Debug::fmt(&self.re, f)?;
        f.write_char('+')?;
        Debug::fmt(&self.im, f)?;
        f.write_str("i)")
    }
}

impl_ring_ops!(Complex, crate::domains::Field);

/// A complex number in polar form `radial * exp(angular * i)`.
///
/// Angles are not reduced, so `(1, 0)` and `(1, 2pi)` are different values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Polar<T> {
    radial: T,
    angular: T,
}

impl<T> Polar<T> {
    pub fn radial(&self) -> &T {
        &self.radial
    }

    pub fn angular(&self) -> &T {
        &self.angular
    }
}

impl<T: Canonical> Polar<T>
where
    T::Ring: RealField,
{
    /// Create a polar form, failing for a negative radius.
    pub fn new(radial: T, angular: T) -> Result<Polar<T>> {
        let field = T::ring();
        if field.is_negative(&radial) {
            return Err(Error::Domain(format!("negative radius {}", radial)));
        }
        Ok(Polar { radial, angular })
    }

    pub fn from_complex(c: &Complex<T>, context: Option<&PrecisionContext>) -> Result<Polar<T>> {
        c.to_polar(context)
    }

    pub fn to_complex(&self, context: Option<&PrecisionContext>) -> Result<Complex<T>> {
        ComplexField::new(T::ring()).from_polar(self, context)
    }

    pub fn is_zero(&self) -> bool {
        <T::Ring as Ring>::is_zero(&self.radial)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let field = T::ring();
        Polar {
            radial: field.mul(&self.radial, &other.radial),
            angular: field.add(&self.angular, &other.angular),
        }
    }

    pub fn divide(&self, other: &Self) -> Result<Self> {
        let field = T::ring();
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Polar {
            radial: field.div(&self.radial, &other.radial)?,
            angular: field.sub(&self.angular, &other.angular),
        })
    }

    pub fn invert(&self) -> Result<Self> {
        let field = T::ring();
        if self.is_zero() {
            return Err(Error::NotInvertible(self.to_string()));
        }
        Ok(Polar {
            radial: field.inv(&self.radial)?,
            angular: field.neg(&self.angular),
        })
    }

    /// Raise to an integer power using de Moivre's formula.
    pub fn pow(&self, e: i64) -> Result<Self> {
        let field = T::ring();
        let radial = if e < 0 {
            self.invert()?.radial
        } else {
            self.radial.clone()
        };

        Ok(Polar {
            radial: field.pow(&radial, e.unsigned_abs()),
            angular: field.mul(&self.angular, &field.nth(e)),
        })
    }
}

impl<'de, T> Deserialize<'de> for Polar<T>
where
    T: Canonical + Deserialize<'de>,
    T::Ring: RealField,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts<T> {
            radial: T,
            angular: T,
        }

        let p = Parts::<T>::deserialize(deserializer)?;
        Polar::new(p.radial, p.angular).map_err(serde::de::Error::custom)
    }
}

impl<T: Display> Display for Polar<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.radial, f)?;
        f.write_str("*exp(")?;
        Display::fmt(&self.angular, f)?;
        f.write_str("i)")
    }
}

impl<T: Display> Debug for Polar<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
