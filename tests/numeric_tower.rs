use ahash::HashSet;
use numtower::{
    domains::{
        complex::{Complex, Polar, CDECIMAL},
        decimal::{Decimal, DecimalField, PrecisionContext, RoundingMode, DECIMAL},
        gaussian::{Gaussian, GAUSSIAN64},
        integer::LONG,
        rational::{Fraction, Rational64, Q64},
        Divisible, Field, Normed, Ring,
    },
    tensors::LinearSpace,
    Error,
};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn f(n: i64, d: i64) -> Rational64 {
    Fraction::new(n, d).unwrap()
}

#[test]
fn fraction_addition_is_not_reduced() {
    let sum = f(1, 2).add(&f(1, 3));
    assert_eq!((*sum.numerator(), *sum.denominator()), (5, 6));

    let sum = f(1, 2).add(&f(1, 2));
    assert_eq!((*sum.numerator(), *sum.denominator()), (4, 4));
    assert_eq!(sum, f(1, 1));
    let r = sum.reduce();
    assert_eq!((*r.numerator(), *r.denominator()), (1, 1));

    let n = f(1, -2).normalize();
    assert_eq!((*n.numerator(), *n.denominator()), (-1, 2));
}

#[test]
fn integer_division_yields_a_fraction() {
    let q = LONG.divide(&6, &4).unwrap();
    assert_eq!(q, f(3, 2));
    assert_eq!(LONG.divide(&1, &0), Err(Error::DivisionByZero));
}

#[test]
fn fraction_ordering() {
    let mut v = vec![f(1, 2), f(-1, 3), f(2, -3), f(3, 4)];
    v.sort();
    assert_eq!(v, vec![f(2, -3), f(-1, 3), f(1, 2), f(3, 4)]);
    assert_eq!(f(1, 2).max(f(2, 3)), f(2, 3));
    assert_eq!(f(1, 2).min(f(2, 3)), f(1, 2));
    assert_eq!(Q64.abs(&f(-1, 2)), f(1, 2));
}

#[test]
fn decimal_context() {
    let third = d("1").divide(&d("3"), None);
    assert_eq!(third, Err(Error::NonTerminatingDecimal));

    let ctx = PrecisionContext::new(4, RoundingMode::Up);
    assert_eq!(d("1").divide(&d("3"), Some(&ctx)).unwrap(), d("0.3334"));

    let field = DecimalField::with_context(PrecisionContext::new(3, RoundingMode::Floor));
    assert_eq!(field.div(&d("2"), &d("3")).unwrap(), d("0.666"));
    assert_eq!(field.div(&d("1"), &d("8")).unwrap(), d("0.125"));
    assert_eq!(DECIMAL.div(&d("1"), &d("0")), Err(Error::DivisionByZero));

    let json = serde_json::to_string(&ctx).unwrap();
    assert_eq!(
        serde_json::from_str::<PrecisionContext>(&json).unwrap(),
        ctx
    );
}

#[test]
fn decimal_values_hash_by_value() {
    let set: HashSet<Decimal> = ["1", "1.0", "1.00", "2.50", "2.5"]
        .iter()
        .map(|s| d(s))
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn serialization() {
    let c = Complex::new(d("1.5"), d("-2"));
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"re":"1.5","im":"-2"}"#);
    assert_eq!(serde_json::from_str::<Complex<Decimal>>(&json).unwrap(), c);

    let g = Gaussian::new(3i64, -4);
    let back: Gaussian<i64> = serde_json::from_str(&serde_json::to_string(&g).unwrap()).unwrap();
    assert_eq!(back, g);
}

#[test]
fn gaussian_vectors() {
    let v = GAUSSIAN64
        .vector(vec![Gaussian::new(3, 4), Gaussian::new(0, 1)])
        .unwrap();
    assert_eq!(v.taxicab_norm(), d("6"));
    assert_eq!(v.euclidean_norm_squared(), d("26"));
    assert_eq!(v.max_norm(), d("5"));

    let ctx = PrecisionContext::new(5, RoundingMode::HalfEven);
    assert_eq!(v.euclidean_norm(Some(&ctx)).unwrap(), d("5.09902"));
}

#[test]
fn gaussian_units() {
    assert!(GAUSSIAN64.is_invertible(&Gaussian::i()));
    assert!(!GAUSSIAN64.is_invertible(&Gaussian::new(1, 1)));
    assert!(Gaussian::new(1i64, 1).is_invertible());
    assert_eq!(Gaussian::<i64>::i().invert().unwrap(), Gaussian::new(0, -1));
    assert!(matches!(
        Gaussian::new(2i64, 0).invert(),
        Err(Error::NotInvertible(_))
    ));
}

#[test]
fn complex_over_decimals() {
    let a = Complex::new(d("1"), d("2"));
    let b = Complex::new(d("3"), d("-1"));
    assert_eq!(a.multiply(&b), Complex::new(d("5"), d("5")));
    assert_eq!(CDECIMAL.div(&a.multiply(&b), &b).unwrap(), a);
    assert_eq!(CDECIMAL.abs(&Complex::new(d("0.6"), d("0.8"))), d("1"));

    let ctx = PrecisionContext::new(10, RoundingMode::HalfEven);
    let p = Complex::new(d("-1"), d("0")).to_polar(Some(&ctx)).unwrap();
    assert_eq!(*p.radial(), d("1"));
    assert_eq!(*p.angular(), d("3.1415926536"));

    assert!(matches!(
        Complex::new(d("0"), d("0")).argument(None),
        Err(Error::Domain(_))
    ));
}

#[test]
fn polar_de_moivre() {
    let p = Polar::new(2., std::f64::consts::FRAC_PI_4).unwrap();
    let c = p.pow(4).unwrap().to_complex(None).unwrap();
    assert!((c.re + 16.).abs() < 1e-12);
    assert!(c.im.abs() < 1e-12);

    let back = Polar::from_complex(&p.to_complex(None).unwrap(), None).unwrap();
    assert!((back.radial() - 2.).abs() < 1e-12);
    assert!((back.angular() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn fraction_vectors() {
    let v = Q64.vector(vec![f(1, 2), f(-1, 3)]).unwrap();
    let w = Q64.vector(vec![f(2, 3), f(1, 1)]).unwrap();
    assert_eq!(v.dot_product(&w).unwrap(), f(0, 1));
    assert!(v.orthogonal_to(&w).unwrap());
    assert_eq!(v.taxicab_norm(), f(5, 6));
    assert_eq!(v.max_norm(), f(1, 2));
    assert_eq!(
        v.euclidean_norm(Some(&PrecisionContext::new(6, RoundingMode::HalfEven)))
            .unwrap(),
        d("0.600925")
    );
}
