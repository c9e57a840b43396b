use numtower::{
    domains::{
        decimal::{PrecisionContext, RoundingMode},
        rational::{Fraction, Q},
    },
    tensors::LinearSpace,
};
use rug::Integer;
use tracing_subscriber::EnvFilter;

fn main() {
    // run with RUST_LOG=numtower=debug to see the determinant dispatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // the Hilbert matrix H_ij = 1 / (i + j - 1)
    let n = 5;
    let h = Q
        .matrix_builder(n, n)
        .unwrap()
        .compute_if_absent(|i, j| {
            Fraction::new(Integer::from(1), Integer::from(i + j - 1)).unwrap()
        })
        .build()
        .unwrap();

    println!("H = {}", h);

    let det = h.determinant().unwrap();
    println!("det(H) = {}", det.reduce());

    let ctx = PrecisionContext::new(20, RoundingMode::HalfEven);
    println!("|H|_F = {}", h.frobenius_norm(Some(&ctx)).unwrap());
    println!("det(H) = {}", det.to_decimal(Some(&ctx)).unwrap());
}
