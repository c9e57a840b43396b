//! Arbitrary-precision decimal numbers and their precision contexts.
//!
//! A [Decimal] is an unscaled arbitrary-precision integer together with a scale, so that its value is
//! `unscaled * 10^-scale`. Addition, subtraction and multiplication are exact. Operations whose result may
//! need rounding (division, square roots and trigonometric functions) take an optional [PrecisionContext].
//!
//! ```
//! use numtower::domains::decimal::{Decimal, PrecisionContext, RoundingMode};
//!
//! let a: Decimal = "1.10".parse().unwrap();
//! let b: Decimal = "1.1".parse().unwrap();
//! assert_eq!(a, b);
//!
//! let third = Decimal::from(1)
//!     .divide(&Decimal::from(3), Some(&PrecisionContext::new(4, RoundingMode::HalfEven)))
//!     .unwrap();
//! assert_eq!(third.to_string(), "0.3333");
//! ```

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use rand::Rng;
use rug::{float::Constant, ops::Pow, Complete, Float, Integer, Rational};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

use super::{
    Canonical, Divisible, Field, Normed, OrderedRing, RealField, Ring, SquareRoot,
};

/// How to round a result that cannot be represented exactly at the requested scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero.
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    HalfUp,
    HalfDown,
    /// To the nearest neighbour, and to the even neighbour on ties.
    #[default]
    HalfEven,
    /// Fail with [Error::RoundingNecessary] if the result is inexact.
    Unnecessary,
}

/// The number of digits after the decimal point and the rounding mode of an inexact result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrecisionContext {
    pub scale: u32,
    pub rounding: RoundingMode,
}

impl PrecisionContext {
    /// 32 digits after the decimal point, rounded half to even.
    pub const DEFAULT: PrecisionContext = PrecisionContext::new(32, RoundingMode::HalfEven);

    pub const fn new(scale: u32, rounding: RoundingMode) -> PrecisionContext {
        PrecisionContext { scale, rounding }
    }

    /// The binary precision at which transcendental functions are evaluated
    /// before they are rounded to this context. It carries guard digits.
    pub fn float_precision(&self) -> u32 {
        ((self.scale as f64 + 16.) * std::f64::consts::LOG2_10).ceil() as u32
    }
}

impl Default for PrecisionContext {
    fn default() -> Self {
        PrecisionContext::DEFAULT
    }
}

/// The part of a quotient that is dropped by truncation, relative to half a unit in the last kept digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Discarded {
    Zero,
    BelowHalf,
    Half,
    AboveHalf,
}

impl Discarded {
    fn of_remainder(remainder: &Integer, divisor: &Integer) -> Discarded {
        if remainder.is_zero() {
            return Discarded::Zero;
        }

        match (remainder.clone() * 2u32).cmp(divisor) {
            Ordering::Less => Discarded::BelowHalf,
            Ordering::Equal => Discarded::Half,
            Ordering::Greater => Discarded::AboveHalf,
        }
    }
}

impl RoundingMode {
    /// Round the truncated magnitude `q` of a result with sign `negative`.
    fn apply(self, q: Integer, discarded: Discarded, negative: bool) -> Result<Integer> {
        if self == RoundingMode::Unnecessary && discarded != Discarded::Zero {
            return Err(Error::RoundingNecessary);
        }
        Ok(self.round(q, discarded, negative))
    }

    /// Like [RoundingMode::apply], but an inexact `Unnecessary` rounds half to even.
    fn round(self, q: Integer, discarded: Discarded, negative: bool) -> Integer {
        let increment = match (self, discarded) {
            (_, Discarded::Zero) => false,
            (RoundingMode::Up, _) => true,
            (RoundingMode::Down, _) => false,
            (RoundingMode::Ceiling, _) => !negative,
            (RoundingMode::Floor, _) => negative,
            (RoundingMode::HalfUp, d) => d >= Discarded::Half,
            (RoundingMode::HalfDown, d) => d == Discarded::AboveHalf,
            (RoundingMode::HalfEven | RoundingMode::Unnecessary, d) => {
                d == Discarded::AboveHalf || (d == Discarded::Half && q.is_odd())
            }
        };

        if increment {
            q + 1u32
        } else {
            q
        }
    }
}

fn ten_pow(e: u32) -> Integer {
    Integer::u_pow_u(10, e).complete()
}

fn with_sign(magnitude: Integer, negative: bool) -> Integer {
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// An arbitrary-precision decimal number `unscaled * 10^-scale`.
///
/// Equality, ordering and hashing are by value, so `1.0` and `1.00` are equal.
#[derive(Clone)]
pub struct Decimal {
    unscaled: Integer,
    scale: u32,
}

impl Decimal {
    pub fn new(unscaled: impl Into<Integer>, scale: u32) -> Decimal {
        Decimal {
            unscaled: unscaled.into(),
            scale,
        }
    }

    pub fn zero() -> Decimal {
        Decimal::new(0, 0)
    }

    pub fn one() -> Decimal {
        Decimal::new(1, 0)
    }

    pub fn unscaled(&self) -> &Integer {
        &self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    pub fn signum(&self) -> i32 {
        match self.unscaled.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// The unscaled value at a scale at least as large as the current one.
    fn rescaled(&self, scale: u32) -> Integer {
        self.unscaled.clone() * ten_pow(scale - self.scale)
    }

    pub fn add(&self, other: &Decimal) -> Decimal {
        let scale = self.scale.max(other.scale);
        Decimal {
            unscaled: self.rescaled(scale) + other.rescaled(scale),
            scale,
        }
    }

    pub fn subtract(&self, other: &Decimal) -> Decimal {
        let scale = self.scale.max(other.scale);
        Decimal {
            unscaled: self.rescaled(scale) - other.rescaled(scale),
            scale,
        }
    }

    /// Multiply exactly. The scales add, which panics if the sum exceeds `u32::MAX`.
    pub fn multiply(&self, other: &Decimal) -> Decimal {
        Decimal {
            unscaled: self.unscaled.clone() * &other.unscaled,
            scale: self
                .scale
                .checked_add(other.scale)
                .expect("overflow in adding decimal scales"),
        }
    }

    pub fn negate(&self) -> Decimal {
        Decimal {
            unscaled: -self.unscaled.clone(),
            scale: self.scale,
        }
    }

    pub fn abs(&self) -> Decimal {
        Decimal {
            unscaled: self.unscaled.clone().abs(),
            scale: self.scale,
        }
    }

    pub fn pow(&self, e: u32) -> Decimal {
        Decimal {
            unscaled: self.unscaled.clone().pow(e),
            scale: self
                .scale
                .checked_mul(e)
                .expect("overflow in multiplying decimal scales"),
        }
    }

    /// Divide `self` by `other`. Without a context the quotient must have a terminating
    /// decimal expansion, otherwise [Error::NonTerminatingDecimal] is returned.
    pub fn divide(&self, other: &Decimal, context: Option<&PrecisionContext>) -> Result<Decimal> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let numerator = self.unscaled.clone() * ten_pow(other.scale);
        let denominator = other.unscaled.clone() * ten_pow(self.scale);
        Decimal::from_ratio(&numerator, &denominator, context)
    }

    /// Create the decimal `numerator / denominator`, exactly if no context is given.
    pub fn from_ratio(
        numerator: &Integer,
        denominator: &Integer,
        context: Option<&PrecisionContext>,
    ) -> Result<Decimal> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }

        match context {
            Some(context) => Ok(Decimal::ratio_rounded(numerator, denominator, context)?),
            None => Decimal::ratio_exact(numerator, denominator),
        }
    }

    fn ratio_exact(numerator: &Integer, denominator: &Integer) -> Result<Decimal> {
        let g = numerator.clone().gcd(denominator);
        let mut num = numerator.clone() / &g;
        let mut den = denominator.clone() / &g;
        if den.is_negative() {
            num = -num;
            den = -den;
        }

        let mut rest = den.clone();
        let (mut twos, mut fives) = (0u32, 0u32);
        while rest.is_divisible_u(2) {
            rest /= 2u32;
            twos += 1;
        }
        while rest.is_divisible_u(5) {
            rest /= 5u32;
            fives += 1;
        }

        if rest != 1 {
            return Err(Error::NonTerminatingDecimal);
        }

        let scale = twos.max(fives);
        Ok(Decimal {
            unscaled: num * ten_pow(scale) / den,
            scale,
        })
    }

    fn ratio_rounded(
        numerator: &Integer,
        denominator: &Integer,
        context: &PrecisionContext,
    ) -> Result<Decimal> {
        let negative = numerator.is_negative() != denominator.is_negative();
        let p = numerator.clone().abs() * ten_pow(context.scale);
        let q = denominator.clone().abs();
        let (quotient, remainder) = p.div_rem(q.clone());

        let discarded = Discarded::of_remainder(&remainder, &q);
        let magnitude = context.rounding.apply(quotient, discarded, negative)?;
        Ok(Decimal {
            unscaled: with_sign(magnitude, negative),
            scale: context.scale,
        })
    }

    /// Change the scale, rounding with `rounding` if digits are dropped.
    pub fn set_scale(&self, scale: u32, rounding: RoundingMode) -> Result<Decimal> {
        if scale >= self.scale {
            return Ok(Decimal {
                unscaled: self.rescaled(scale),
                scale,
            });
        }

        Decimal::ratio_rounded(
            &self.unscaled,
            &ten_pow(self.scale),
            &PrecisionContext::new(scale, rounding),
        )
    }

    pub fn round(&self, context: &PrecisionContext) -> Result<Decimal> {
        self.set_scale(context.scale, context.rounding)
    }

    /// The representation of the same value with the smallest scale.
    pub fn strip_trailing_zeros(&self) -> Decimal {
        if self.is_zero() {
            return Decimal::zero();
        }

        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while scale > 0 && unscaled.is_divisible_u(10) {
            unscaled /= 10u32;
            scale -= 1;
        }
        Decimal { unscaled, scale }
    }

    /// The square root, exact for perfect squares such as `2.25` if no context is given.
    /// Inexact roots without a context are rounded to [PrecisionContext::DEFAULT].
    pub fn sqrt(&self, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Decimal::sqrt_of_ratio(
            &self.unscaled,
            &ten_pow(self.scale),
            context,
            &PrecisionContext::DEFAULT,
        )
    }

    /// The square root of `numerator / denominator`. Without a context, the root is exact if it
    /// has a terminating expansion and is rounded to `fallback` otherwise.
    pub fn sqrt_of_ratio(
        numerator: &Integer,
        denominator: &Integer,
        context: Option<&PrecisionContext>,
        fallback: &PrecisionContext,
    ) -> Result<Decimal> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if !numerator.is_zero() && numerator.is_negative() != denominator.is_negative() {
            return Err(Error::Domain(format!(
                "square root of negative number {}/{}",
                numerator, denominator
            )));
        }

        let n = numerator.clone().abs();
        let d = denominator.clone().abs();

        if let Some(context) = context {
            return Decimal::sqrt_rounded(&n, &d, context);
        }

        let g = n.clone().gcd(&d);
        let (n, d) = (n / &g, d / &g);
        if n.is_perfect_square() && d.is_perfect_square() {
            if let Ok(exact) = Decimal::ratio_exact(&n.clone().sqrt(), &d.clone().sqrt()) {
                return Ok(exact);
            }
        }

        trace!("inexact square root of {}/{}, rounding to scale {}", n, d, fallback.scale);
        Decimal::sqrt_rounded(&n, &d, fallback)
    }

    /// The square root of a natural number such as a sum of squares. It is exact for perfect
    /// squares and rounded to `context` otherwise, half to even if the context forbids rounding.
    pub fn sqrt_of_natural(n: &Integer, context: &PrecisionContext) -> Decimal {
        let n = n.clone().abs();
        if n.is_perfect_square() {
            return Decimal {
                unscaled: n.sqrt(),
                scale: 0,
            };
        }

        let (root, discarded) = Decimal::sqrt_truncated(&n, &Integer::from(1), context.scale);
        Decimal {
            unscaled: context.rounding.round(root, discarded, false),
            scale: context.scale,
        }
    }

    /// Round `sqrt(n / d)` for non-negative `n` and positive `d`.
    fn sqrt_rounded(n: &Integer, d: &Integer, context: &PrecisionContext) -> Result<Decimal> {
        let (root, discarded) = Decimal::sqrt_truncated(n, d, context.scale);
        Ok(Decimal {
            unscaled: context.rounding.apply(root, discarded, false)?,
            scale: context.scale,
        })
    }

    /// The truncated `sqrt(n / d) * 10^scale` and the part that was dropped.
    fn sqrt_truncated(n: &Integer, d: &Integer, scale: u32) -> (Integer, Discarded) {
        // sqrt(n / d) * 10^s = sqrt(p / q)
        let p = n.clone() * ten_pow(scale.checked_mul(2).expect("overflow in doubling the scale"));
        let q = d.clone();
        let root = (p.clone() * &q).sqrt() / &q;

        let discarded = if root.clone().square() * &q == p {
            Discarded::Zero
        } else {
            let twice = root.clone() * 2u32 + 1u32;
            match (p.clone() * 4u32).cmp(&(twice.square() * &q)) {
                Ordering::Less => Discarded::BelowHalf,
                Ordering::Equal => Discarded::Half,
                Ordering::Greater => Discarded::AboveHalf,
            }
        };

        (root, discarded)
    }

    /// The integer value, if `self` has no fractional part.
    pub fn to_integer(&self) -> Option<Integer> {
        let stripped = self.strip_trailing_zeros();
        if stripped.scale == 0 {
            Some(stripped.unscaled)
        } else {
            None
        }
    }

    pub fn to_rational(&self) -> Rational {
        Rational::from((self.unscaled.clone(), ten_pow(self.scale)))
    }

    pub fn from_rational(r: &Rational, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Decimal::from_ratio(r.numer(), r.denom(), context)
    }

    pub fn to_f64(&self) -> f64 {
        self.to_rational().to_f64()
    }

    fn to_float(&self, prec: u32) -> Float {
        Float::with_val(prec, &self.to_rational())
    }

    fn from_float(f: &Float, context: &PrecisionContext) -> Result<Decimal> {
        match f.to_rational() {
            Some(r) => Decimal::from_rational(&r, Some(context)),
            None => Err(Error::Domain(format!("{} is not finite", f))),
        }
    }

    pub fn sin(&self, context: &PrecisionContext) -> Result<Decimal> {
        Decimal::from_float(&self.to_float(context.float_precision()).sin(), context)
    }

    pub fn cos(&self, context: &PrecisionContext) -> Result<Decimal> {
        Decimal::from_float(&self.to_float(context.float_precision()).cos(), context)
    }

    /// The angle of the point `(x, y)`, with `self` as `y`.
    pub fn atan2(&self, x: &Decimal, context: &PrecisionContext) -> Result<Decimal> {
        let prec = context.float_precision();
        let angle = self.to_float(prec).atan2(&x.to_float(prec));
        Decimal::from_float(&angle, context)
    }

    pub fn pi(context: &PrecisionContext) -> Result<Decimal> {
        Decimal::from_float(
            &Float::with_val(context.float_precision(), Constant::Pi),
            context,
        )
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.rescaled(scale).cmp(&other.rescaled(scale))
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let stripped = self.strip_trailing_zeros();
        stripped.unscaled.hash(state);
        stripped.scale.hash(state);
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Decimal::new(value, 0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::new(value, 0)
    }
}

impl From<Integer> for Decimal {
    fn from(value: Integer) -> Self {
        Decimal::new(value, 0)
    }
}

impl From<&Integer> for Decimal {
    fn from(value: &Integer) -> Self {
        Decimal::new(value.clone(), 0)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = Error;

    /// Convert the exact binary value of `value`.
    fn try_from(value: f64) -> Result<Self> {
        match Rational::from_f64(value) {
            Some(r) => Decimal::from_rational(&r, None),
            None => Err(Error::Domain(format!("{} is not finite", value))),
        }
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let digits = self.unscaled.clone().abs().to_string();
        let sign = if self.is_negative() { "-" } else { "" };
        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let scale = self.scale as usize;
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (integral, fractional) = padded.split_at(padded.len() - scale);
        write!(f, "{}{}.{}", sign, integral, fractional)
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parse a decimal such as `-12.50` or `1.5e-3`.
    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::Parse(s.to_owned());
        let t = s.trim();

        let (mantissa, exponent) = match t.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => (&t[..i], t[i + 1..].parse::<i64>().map_err(|_| err())?),
            None => (t, 0),
        };

        let (negative, digits) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let (integral, fractional) = digits.split_once('.').unwrap_or((digits, ""));
        if (integral.is_empty() && fractional.is_empty())
            || !integral
                .chars()
                .chain(fractional.chars())
                .all(|c| c.is_ascii_digit())
        {
            return Err(err());
        }

        let unscaled: Integer = format!("{}{}", integral, fractional)
            .parse()
            .map_err(|_| err())?;
        let unscaled = with_sign(unscaled, negative);

        let scale = i64::try_from(fractional.len())
            .ok()
            .and_then(|digits| digits.checked_sub(exponent))
            .ok_or_else(err)?;
        if scale >= 0 {
            Ok(Decimal {
                unscaled,
                scale: u32::try_from(scale).map_err(|_| err())?,
            })
        } else {
            let shift = scale
                .checked_neg()
                .and_then(|s| u32::try_from(s).ok())
                .ok_or_else(err)?;
            Ok(Decimal {
                unscaled: unscaled * ten_pow(shift),
                scale: 0,
            })
        }
    }
}

impl Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The field of decimals. Inexact quotients and square roots are rounded to
/// the context of the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecimalField {
    context: PrecisionContext,
}

/// The field of decimals with the default precision context.
pub const DECIMAL: DecimalField = DecimalField::new();

impl DecimalField {
    pub const fn new() -> DecimalField {
        DecimalField {
            context: PrecisionContext::DEFAULT,
        }
    }

    pub const fn with_context(context: PrecisionContext) -> DecimalField {
        DecimalField { context }
    }

    pub fn context(&self) -> &PrecisionContext {
        &self.context
    }

    fn resolve<'a>(&'a self, context: Option<&'a PrecisionContext>) -> &'a PrecisionContext {
        context.unwrap_or(&self.context)
    }
}

impl Default for DecimalField {
    fn default() -> Self {
        DecimalField::new()
    }
}

impl Display for DecimalField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decimal[{}]", self.context.scale)
    }
}

impl Ring for DecimalField {
    type Element = Decimal;

    fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        a.add(b)
    }

    fn sub(&self, a: &Decimal, b: &Decimal) -> Decimal {
        a.subtract(b)
    }

    fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
        a.multiply(b)
    }

    fn neg(&self, a: &Decimal) -> Decimal {
        a.negate()
    }

    fn zero(&self) -> Decimal {
        Decimal::zero()
    }

    fn one(&self) -> Decimal {
        Decimal::one()
    }

    fn is_zero(a: &Decimal) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Decimal) -> bool {
        *a == Decimal::one()
    }

    fn equals(&self, a: &Decimal, b: &Decimal) -> bool {
        a == b
    }

    fn is_invertible(&self, a: &Decimal) -> bool {
        !a.is_zero()
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Decimal {
        let integral = Integer::from(rng.gen_range(range.0..range.1));
        Decimal::new(integral * 10u32 + rng.gen_range(0..10u32), 1)
    }

    fn nth(&self, n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn pow(&self, b: &Decimal, e: u64) -> Decimal {
        match u32::try_from(e) {
            Ok(e) => b.pow(e),
            Err(_) => {
                let half = self.pow(b, e / 2);
                let square = half.multiply(&half);
                if e % 2 == 1 {
                    square.multiply(b)
                } else {
                    square
                }
            }
        }
    }
}

impl Field for DecimalField {
    /// Divide exactly if the quotient terminates and round to the context of the field otherwise.
    fn div(&self, a: &Decimal, b: &Decimal) -> Result<Decimal> {
        match a.divide(b, None) {
            Err(Error::NonTerminatingDecimal) => {
                trace!("rounding {} / {} to scale {}", a, b, self.context.scale);
                a.divide(b, Some(&self.context))
            }
            r => r,
        }
    }

    fn inv(&self, a: &Decimal) -> Result<Decimal> {
        self.div(&Decimal::one(), a)
    }
}

impl Divisible for DecimalField {
    type Quotient = Decimal;

    fn divide(&self, a: &Decimal, b: &Decimal) -> Result<Decimal> {
        self.div(a, b)
    }
}

impl OrderedRing for DecimalField {
    fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }

    fn is_negative(&self, a: &Decimal) -> bool {
        a.is_negative()
    }
}

impl Normed for DecimalField {
    type NormRing = DecimalField;

    fn norm_ring(&self) -> DecimalField {
        *self
    }

    fn abs(&self, a: &Decimal) -> Decimal {
        a.abs()
    }

    fn abs_squared(&self, a: &Decimal) -> Decimal {
        a.multiply(a)
    }
}

impl SquareRoot for DecimalField {
    type Root = DecimalField;

    fn root_ring(&self) -> DecimalField {
        *self
    }

    fn sqrt(&self, a: &Decimal, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Decimal::sqrt_of_ratio(&a.unscaled, &ten_pow(a.scale), context, &self.context)
    }
}

impl RealField for DecimalField {
    fn atan2(
        &self,
        y: &Decimal,
        x: &Decimal,
        context: Option<&PrecisionContext>,
    ) -> Result<Decimal> {
        y.atan2(x, self.resolve(context))
    }

    fn sin(&self, a: &Decimal, context: Option<&PrecisionContext>) -> Result<Decimal> {
        a.sin(self.resolve(context))
    }

    fn cos(&self, a: &Decimal, context: Option<&PrecisionContext>) -> Result<Decimal> {
        a.cos(self.resolve(context))
    }

    fn pi(&self, context: Option<&PrecisionContext>) -> Result<Decimal> {
        Decimal::pi(self.resolve(context))
    }
}

impl Canonical for Decimal {
    type Ring = DecimalField;

    fn ring() -> DecimalField {
        DECIMAL
    }
}
