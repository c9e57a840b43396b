//! Defines the descriptor traits that vectors and matrices are generic over.
//!
//! The core trait is [Ring], which has two binary operations, addition and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example:
//! - The ring of machine integers [LONG](integer::LONG) has elements of type [i64].
//! - The ring of arbitrary-precision integers [BIG_INTEGER](integer::BIG_INTEGER) has elements of type [rug::Integer].
//! - The field of fractions [Q](rational::Q) has elements of type [Rational](rational::Rational).
//! - The field of decimals [DECIMAL](decimal::DECIMAL) has elements of type [Decimal](decimal::Decimal).
//!
//! In general, the ring elements are not required to implement operations such as addition or multiplication,
//! but rather the ring itself does. [Vector](crate::tensors::Vector) and [Matrix](crate::tensors::Matrix)
//! only ever use the operations of their ring.
//!
//! Extensions of the ring trait add division ([`Divisible`], [`Field`]), remainders and gcds ([`EuclideanDomain`]),
//! an ordering ([`OrderedRing`]), absolute values ([`Normed`]) and square roots ([`SquareRoot`]).
//! The tower types implement [`Canonical`], which resolves the unique descriptor of an element type statically.

macro_rules! impl_ring_ops {
    ($t:ident, $bound:path) => {
        impl<T: $crate::domains::Canonical> std::ops::Add for $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn add(self, rhs: Self) -> Self::Output {
                $crate::domains::Ring::add(&<$t<T> as $crate::domains::Canonical>::ring(), &self, &rhs)
            }
        }

        impl<'a, T: $crate::domains::Canonical> std::ops::Add<&'a $t<T>> for &'a $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn add(self, rhs: &'a $t<T>) -> Self::Output {
                $crate::domains::Ring::add(&<$t<T> as $crate::domains::Canonical>::ring(), self, rhs)
            }
        }

        impl<T: $crate::domains::Canonical> std::ops::Sub for $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn sub(self, rhs: Self) -> Self::Output {
                $crate::domains::Ring::sub(&<$t<T> as $crate::domains::Canonical>::ring(), &self, &rhs)
            }
        }

        impl<'a, T: $crate::domains::Canonical> std::ops::Sub<&'a $t<T>> for &'a $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn sub(self, rhs: &'a $t<T>) -> Self::Output {
                $crate::domains::Ring::sub(&<$t<T> as $crate::domains::Canonical>::ring(), self, rhs)
            }
        }

        impl<T: $crate::domains::Canonical> std::ops::Mul for $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn mul(self, rhs: Self) -> Self::Output {
                $crate::domains::Ring::mul(&<$t<T> as $crate::domains::Canonical>::ring(), &self, &rhs)
            }
        }

        impl<'a, T: $crate::domains::Canonical> std::ops::Mul<&'a $t<T>> for &'a $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn mul(self, rhs: &'a $t<T>) -> Self::Output {
                $crate::domains::Ring::mul(&<$t<T> as $crate::domains::Canonical>::ring(), self, rhs)
            }
        }

        impl<T: $crate::domains::Canonical> std::ops::Neg for $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn neg(self) -> Self::Output {
                $crate::domains::Ring::neg(&<$t<T> as $crate::domains::Canonical>::ring(), &self)
            }
        }

        impl<'a, T: $crate::domains::Canonical> std::ops::Neg for &'a $t<T>
        where
            T::Ring: $bound,
        {
            type Output = $t<T>;

            fn neg(self) -> Self::Output {
                $crate::domains::Ring::neg(&<$t<T> as $crate::domains::Canonical>::ring(), self)
            }
        }
    };
}

pub mod complex;
pub mod decimal;
pub mod float;
pub mod gaussian;
pub mod integer;
pub mod rational;

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::Result;
use decimal::PrecisionContext;

/// A ring is a set with two binary operations, addition and multiplication.
///
/// Each ring has an element type, that should not be confused with the ring type itself.
/// A ring value is a descriptor: it is stateless apart from configuration such as a precision,
/// so that every instance for the same element type behaves identically.
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    /// The element of a ring. For example, the elements of [LONG](integer::LONG) are [i64].
    type Element: Clone + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Compare two elements by their value. Two elements with a different representation,
    /// such as `1/2` and `2/4` or `1.0` and `1.00`, are equal.
    fn equals(&self, a: &Self::Element, b: &Self::Element) -> bool;

    /// Return `true` iff `a` has a multiplicative inverse in this ring.
    fn is_invertible(&self, a: &Self::Element) -> bool;

    /// Sample an element whose integral part lies in `range.0..range.1`.
    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Self::Element;

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = self.add(a, &self.mul(b, c));
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = self.sub(a, &self.mul(b, c));
    }

    /// Return the nth element by computing `n * 1`.
    fn nth(&self, n: i64) -> Self::Element {
        let mut result = self.zero();
        let mut base = self.one();
        let mut k = n.unsigned_abs();
        while k > 0 {
            if k & 1 == 1 {
                self.add_assign(&mut result, &base);
            }
            base = self.add(&base, &base);
            k >>= 1;
        }

        if n < 0 {
            self.neg(&result)
        } else {
            result
        }
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        let mut result = self.one();
        let mut base = b.clone();
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                self.mul_assign(&mut result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = self.mul(&base, &base);
            }
        }
        result
    }
}

/// A ring with a division whose result may live in a different type.
/// For example, dividing two machine integers yields a fraction.
pub trait Divisible: Ring {
    type Quotient: Clone + Debug + Display;

    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Quotient>;
}

/// A Euclidean domain is a ring that supports division with remainder, quotients, and gcds.
pub trait EuclideanDomain: Ring {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element);
    /// The non-negative greatest common divisor.
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
}

/// A field is a ring that supports division and inversion within its own elements.
pub trait Field: Ring {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element>;
    fn inv(&self, a: &Self::Element) -> Result<Self::Element>;

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<()> {
        *a = self.div(a, b)?;
        Ok(())
    }
}

/// A ring with a total order on its elements.
pub trait OrderedRing: Ring {
    fn compare(&self, a: &Self::Element, b: &Self::Element) -> Ordering;

    fn is_negative(&self, a: &Self::Element) -> bool {
        self.compare(a, &self.zero()) == Ordering::Less
    }

    fn max<'a>(&self, a: &'a Self::Element, b: &'a Self::Element) -> &'a Self::Element {
        if self.compare(a, b) == Ordering::Less {
            b
        } else {
            a
        }
    }
}

/// A ring whose elements have an absolute value in an ordered ring, which
/// may be different from the ring itself. For example, the absolute value of a
/// complex number is real.
pub trait Normed: Ring {
    type NormRing: OrderedRing;

    fn norm_ring(&self) -> Self::NormRing;
    fn abs(&self, a: &Self::Element) -> NormOf<Self>;
    /// The squared absolute value, which is exact even when [Normed::abs] is not.
    fn abs_squared(&self, a: &Self::Element) -> NormOf<Self>;
}

/// A ring with a square root into a (possibly different) root ring.
pub trait SquareRoot: Ring {
    type Root: Ring;

    fn root_ring(&self) -> Self::Root;

    /// Compute the square root of `a`. The context sets the scale and rounding of inexact roots,
    /// if `None`, exact roots are returned exactly and inexact roots are rounded to the ring's default.
    fn sqrt(
        &self,
        a: &Self::Element,
        context: Option<&PrecisionContext>,
    ) -> Result<<Self::Root as Ring>::Element>;
}

/// An ordered field of real numbers with transcendental functions.
pub trait RealField: Field + OrderedRing + SquareRoot<Root = Self> {
    /// The angle of the point `(x, y)` in `(-pi, pi]`.
    fn atan2(
        &self,
        y: &Self::Element,
        x: &Self::Element,
        context: Option<&PrecisionContext>,
    ) -> Result<Self::Element>;
    fn sin(&self, a: &Self::Element, context: Option<&PrecisionContext>) -> Result<Self::Element>;
    fn cos(&self, a: &Self::Element, context: Option<&PrecisionContext>) -> Result<Self::Element>;
    fn pi(&self, context: Option<&PrecisionContext>) -> Result<Self::Element>;
}

/// Rings of integers, which convert losslessly to and from arbitrary-precision integers
/// (machine integers wrap).
pub trait Integral: EuclideanDomain + OrderedRing {
    fn to_integer(&self, a: &Self::Element) -> rug::Integer;
    fn from_integer(&self, a: &rug::Integer) -> Self::Element;
}

/// Element types with exactly one descriptor, resolved statically.
pub trait Canonical: Clone + Debug + Display + Sized {
    type Ring: Ring<Element = Self>;

    fn ring() -> Self::Ring;
}

/// The element type of the norm ring of `F`.
pub type NormOf<F> = <<F as Normed>::NormRing as Ring>::Element;
/// The element type of square roots of norms of `F`.
pub type RootOf<F> = <<<F as Normed>::NormRing as SquareRoot>::Root as Ring>::Element;
