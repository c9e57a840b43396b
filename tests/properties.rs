use numtower::{
    domains::{
        complex::C64,
        decimal::{Decimal, DECIMAL},
        float::DOUBLE,
        gaussian::GAUSSIAN64,
        integer::{BIG_INTEGER, LONG},
        rational::{Q, Q64},
        Ring,
    },
    tensors::{LinearSpace, Matrix, Vector},
    Error,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vector<F: Ring>(field: &F, size: usize, rng: &mut StdRng) -> Vector<F> {
    field
        .vector((0..size).map(|_| field.sample(rng, (-10, 10))).collect())
        .unwrap()
}

fn random_matrix<F: Ring>(field: &F, rows: usize, cols: usize, rng: &mut StdRng) -> Matrix<F> {
    field
        .matrix(
            (0..rows)
                .map(|_| (0..cols).map(|_| field.sample(rng, (-5, 5))).collect())
                .collect(),
        )
        .unwrap()
}

fn check_vector_laws<F: Ring>(field: F, rng: &mut StdRng) {
    for size in 1..=6 {
        let v = random_vector(&field, size, rng);
        let w = random_vector(&field, size, rng);
        let zero = Vector::zero(size, field.clone()).unwrap();

        assert!(
            v.add(&zero).unwrap().equals_by_comparing(&v).unwrap(),
            "{} + 0 != {} over {}",
            v,
            v,
            field
        );
        assert!(
            v.negate().negate().equals_by_comparing(&v).unwrap(),
            "--{} != {} over {}",
            v,
            v,
            field
        );
        assert!(
            field.equals(
                &v.dot_product(&w).unwrap(),
                &w.dot_product(&v).unwrap()
            ),
            "{} . {} is not symmetric over {}",
            v,
            w,
            field
        );
        assert!(v.subtract(&v).unwrap().orthogonal_to(&w).unwrap());
        assert_eq!(v.indices().collect::<Vec<_>>(), (1..=size).collect::<Vec<_>>());
    }
}

#[test]
fn vector_laws() {
    let mut rng = StdRng::seed_from_u64(1);
    check_vector_laws(LONG, &mut rng);
    check_vector_laws(BIG_INTEGER, &mut rng);
    check_vector_laws(Q64, &mut rng);
    check_vector_laws(DECIMAL, &mut rng);
    check_vector_laws(DOUBLE, &mut rng);
    check_vector_laws(GAUSSIAN64, &mut rng);
    check_vector_laws(C64, &mut rng);
}

fn check_matrix_laws<F: Ring>(field: F, max_size: usize, rng: &mut StdRng) {
    for n in 1..=max_size {
        let id = Matrix::identity(n, field.clone()).unwrap();
        assert!(field.is_one(&id.determinant().unwrap()));

        let rows = rng.gen_range(1..=max_size);
        let m = random_matrix(&field, rows, n, rng);
        assert!(m.transpose().transpose().equals_by_comparing(&m).unwrap());
        assert_eq!((m.row_size(), m.column_size()), (rows, n));

        let a = random_matrix(&field, n, n, rng);
        assert!(field.equals(
            &a.determinant().unwrap(),
            &a.transpose().determinant().unwrap()
        ));
        assert!(a.multiply(&id).unwrap().equals_by_comparing(&a).unwrap());
    }
}

#[test]
fn matrix_laws() {
    let mut rng = StdRng::seed_from_u64(2);
    check_matrix_laws(LONG, 5, &mut rng);
    check_matrix_laws(BIG_INTEGER, 5, &mut rng);
    check_matrix_laws(Q, 4, &mut rng);
    check_matrix_laws(DECIMAL, 4, &mut rng);
    check_matrix_laws(GAUSSIAN64, 4, &mut rng);
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 1..=5 {
        let a = random_matrix(&BIG_INTEGER, n, n, &mut rng);
        let b = random_matrix(&BIG_INTEGER, n, n, &mut rng);
        let ab = a.multiply(&b).unwrap();
        assert_eq!(
            ab.determinant().unwrap(),
            a.determinant().unwrap() * b.determinant().unwrap()
        );
    }
}

#[test]
fn integer_decimal_round_trip() {
    let mut rng = StdRng::seed_from_u64(4);
    for size in 1..=8 {
        let v = random_vector(&LONG, size, &mut rng);
        let d = v.map(|e| Decimal::from(*e), DECIMAL);
        let back = d
            .try_map(
                |e| {
                    e.to_integer()
                        .and_then(|i| i.to_i64())
                        .ok_or(Error::RoundingNecessary)
                },
                LONG,
            )
            .unwrap();
        assert!(back.equals_by_comparing(&v).unwrap());
    }

    // fractional parts cannot be converted back
    let d = DECIMAL.vector(vec!["1.5".parse().unwrap()]).unwrap();
    assert!(d
        .try_map(
            |e| e.to_integer().and_then(|i| i.to_i64()).ok_or(Error::RoundingNecessary),
            LONG
        )
        .is_err());
}
