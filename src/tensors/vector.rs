use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    ops::{Mul, Neg, RangeInclusive},
};

use crate::{
    domains::{decimal::PrecisionContext, NormOf, Normed, OrderedRing, RootOf, Ring, SquareRoot},
    error::{Error, Result},
};

use super::{Matrix, VectorEntry};

/// A vector with elements at the 1-based indices `1..=size`.
///
/// A vector is never empty and has an element at every index.
/// All operations return new vectors.
#[derive(Clone, Debug)]
pub struct Vector<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) field: F,
}

impl<F: Ring> Vector<F> {
    /// Create a new vector from a list of scalars, the first of which has index 1.
    pub fn new(elements: Vec<F::Element>, field: F) -> Result<Vector<F>> {
        if elements.is_empty() {
            return Err(Error::EmptyEntries);
        }

        Ok(Vector {
            data: elements,
            field,
        })
    }

    /// Create a vector of `size` zeroes.
    pub fn zero(size: usize, field: F) -> Result<Vector<F>> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }

        Ok(Vector {
            data: vec![field.zero(); size],
            field,
        })
    }

    /// Create a vector from entries in any order. The size is the largest index
    /// and every index up to it must occur exactly once.
    pub fn from_entries(
        entries: impl IntoIterator<Item = VectorEntry<F::Element>>,
        field: F,
    ) -> Result<Vector<F>> {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|e| e.index);

        let size = entries.last().map(|e| e.index).ok_or(Error::EmptyEntries)?;
        if entries[0].index == 0 {
            return Err(Error::IndexOutOfRange { index: 0, size });
        }

        if let Some(w) = entries.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(Error::DuplicateIndex(w[0].index));
        }

        // the indices are now strictly increasing, so the first one that is not
        // its own position marks a gap
        if let Some(missing) = (1..=entries.len()).find(|&i| entries[i - 1].index != i) {
            return Err(Error::IncompleteIndices {
                expected: size,
                missing,
            });
        }

        Ok(Vector {
            data: entries.into_iter().map(|e| e.element).collect(),
            field,
        })
    }

    /// Create a vector from a map of indices to elements.
    pub fn from_index_map(map: BTreeMap<usize, F::Element>, field: F) -> Result<Vector<F>> {
        Self::from_entries(
            map.into_iter().map(|(index, element)| VectorEntry { index, element }),
            field,
        )
    }

    /// Create a vector from data that is known to be non-empty.
    pub(crate) fn from_data(data: Vec<F::Element>, field: F) -> Vector<F> {
        debug_assert!(!data.is_empty());
        Vector { data, field }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn elements(&self) -> &[F::Element] {
        &self.data
    }

    pub fn into_elements(self) -> Vec<F::Element> {
        self.data
    }

    /// The indices of the vector, which are always `1..=size`.
    pub fn indices(&self) -> RangeInclusive<usize> {
        1..=self.data.len()
    }

    /// Get the element at the 1-based `index`.
    pub fn get(&self, index: usize) -> Result<&F::Element> {
        if index == 0 || index > self.data.len() {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.data.len(),
            });
        }
        Ok(&self.data[index - 1])
    }

    pub fn entry(&self, index: usize) -> Result<VectorEntry<F::Element>> {
        Ok(VectorEntry {
            index,
            element: self.get(index)?.clone(),
        })
    }

    /// Iterate over the entries in order of their index.
    pub fn entries(&self) -> impl Iterator<Item = VectorEntry<&F::Element>> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, element)| VectorEntry {
                index: i + 1,
                element,
            })
    }

    /// Convert the vector into a `1 x size` matrix.
    pub fn into_row_matrix(self) -> Matrix<F> {
        Matrix {
            nrows: 1,
            ncols: self.data.len(),
            data: self.data,
            field: self.field,
        }
    }

    /// Convert the vector into a `size x 1` matrix.
    pub fn into_column_matrix(self) -> Matrix<F> {
        Matrix {
            nrows: self.data.len(),
            ncols: 1,
            data: self.data,
            field: self.field,
        }
    }

    /// Apply a function `f` to each element of the vector.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Vector<G> {
        Vector {
            data: self.data.iter().map(f).collect(),
            field,
        }
    }

    /// Apply a fallible function `f` to each element of the vector.
    pub fn try_map<G: Ring>(
        &self,
        f: impl Fn(&F::Element) -> Result<G::Element>,
        field: G,
    ) -> Result<Vector<G>> {
        Ok(Vector {
            data: self.data.iter().map(f).collect::<Result<_>>()?,
            field,
        })
    }

    fn check_size(&self, other: &Self) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(Error::DimensionMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Self,
        f: impl Fn(&F::Element, &F::Element) -> F::Element,
    ) -> Result<Vector<F>> {
        self.check_size(other)?;
        Ok(Vector {
            data: self.data.iter().zip(&other.data).map(|(a, b)| f(a, b)).collect(),
            field: self.field.clone(),
        })
    }

    pub fn add(&self, other: &Self) -> Result<Vector<F>> {
        self.zip_with(other, |a, b| self.field.add(a, b))
    }

    pub fn subtract(&self, other: &Self) -> Result<Vector<F>> {
        self.zip_with(other, |a, b| self.field.sub(a, b))
    }

    /// Take the scalar product `sum(a_i * b_i)`. No conjugation is applied.
    pub fn dot_product(&self, other: &Self) -> Result<F::Element> {
        self.check_size(other)?;

        let mut res = self.field.zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            self.field.add_mul_assign(&mut res, a, b);
        }
        Ok(res)
    }

    pub fn scalar_multiply(&self, scalar: &F::Element) -> Vector<F> {
        self.map(|e| self.field.mul(e, scalar), self.field.clone())
    }

    /// Multiply by `-1`.
    pub fn negate(&self) -> Vector<F> {
        self.scalar_multiply(&self.field.neg(&self.field.one()))
    }

    /// Return `true` iff the scalar product with `other` is zero.
    pub fn orthogonal_to(&self, other: &Self) -> Result<bool> {
        Ok(F::is_zero(&self.dot_product(other)?))
    }

    /// Compare the elements by value, so that `(1/2)` equals `(2/4)`.
    pub fn equals_by_comparing(&self, other: &Self) -> Result<bool> {
        self.check_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| self.field.equals(a, b)))
    }
}

impl<F: Normed> Vector<F> {
    /// The sum of the absolute values.
    pub fn taxicab_norm(&self) -> NormOf<F> {
        let n = self.field.norm_ring();
        let mut res = n.zero();
        for e in &self.data {
            n.add_assign(&mut res, &self.field.abs(e));
        }
        res
    }

    /// The sum of the squared absolute values. For real rings this is the scalar product
    /// of the vector with itself.
    pub fn euclidean_norm_squared(&self) -> NormOf<F> {
        let n = self.field.norm_ring();
        let mut res = n.zero();
        for e in &self.data {
            n.add_assign(&mut res, &self.field.abs_squared(e));
        }
        res
    }

    /// The largest absolute value.
    pub fn max_norm(&self) -> NormOf<F> {
        let n = self.field.norm_ring();
        let mut res = self.field.abs(&self.data[0]);
        for e in &self.data[1..] {
            let a = self.field.abs(e);
            if n.compare(&a, &res).is_gt() {
                res = a;
            }
        }
        res
    }

    pub fn taxicab_distance(&self, other: &Self) -> Result<NormOf<F>> {
        Ok(self.subtract(other)?.taxicab_norm())
    }

    pub fn euclidean_distance_squared(&self, other: &Self) -> Result<NormOf<F>> {
        Ok(self.subtract(other)?.euclidean_norm_squared())
    }

    pub fn max_distance(&self, other: &Self) -> Result<NormOf<F>> {
        Ok(self.subtract(other)?.max_norm())
    }
}

impl<F: Normed> Vector<F>
where
    F::NormRing: SquareRoot,
{
    /// The Euclidean norm, rounded to `context` if it is not exact.
    pub fn euclidean_norm(&self, context: Option<&PrecisionContext>) -> Result<RootOf<F>> {
        self.field
            .norm_ring()
            .sqrt(&self.euclidean_norm_squared(), context)
    }

    pub fn euclidean_distance(
        &self,
        other: &Self,
        context: Option<&PrecisionContext>,
    ) -> Result<RootOf<F>> {
        self.subtract(other)?.euclidean_norm(context)
    }
}

impl<F: Ring> PartialEq for Vector<F> {
    /// Compare by value, see [Vector::equals_by_comparing]. Vectors of different sizes are not equal.
    fn eq(&self, other: &Self) -> bool {
        self.equals_by_comparing(other).unwrap_or(false)
    }
}

impl<F: Ring> Display for Vector<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            Display::fmt(e, f)?;
        }
        f.write_str("}")
    }
}

impl<F: Ring> Neg for Vector<F> {
    type Output = Vector<F>;

    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }
        self
    }
}

impl<F: Ring> Mul<&F::Element> for &Vector<F> {
    type Output = Vector<F>;

    fn mul(self, rhs: &F::Element) -> Self::Output {
        self.scalar_multiply(rhs)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use crate::{
        domains::{
            complex::{Complex, C64},
            decimal::{Decimal, DECIMAL},
            integer::LONG,
            rational::{Fraction, Q64},
        },
        error::Error,
        tensors::{LinearSpace, Vector, VectorEntry},
    };

    #[test]
    fn norms() {
        let v = LONG.vector(vec![1, 2, 3]).unwrap();
        assert_eq!(v.taxicab_norm(), 6);
        assert_eq!(v.euclidean_norm_squared(), 14);
        assert_eq!(v.max_norm(), 3);
        assert_eq!(v.euclidean_norm_squared(), v.dot_product(&v).unwrap());

        let w = LONG.vector(vec![-4, 2, 3]).unwrap();
        assert_eq!(w.max_norm(), 4);
        assert_eq!(v.taxicab_distance(&w).unwrap(), 5);
        assert_eq!(v.max_distance(&w).unwrap(), 5);
        assert_eq!(
            LONG.vector(vec![3, 4]).unwrap().euclidean_norm(None).unwrap(),
            "5".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn arithmetic() {
        let v = LONG.vector(vec![1, 2, 3]).unwrap();
        let w = LONG.vector(vec![4, 5, 6]).unwrap();
        assert_eq!(v.add(&w).unwrap().elements(), &[5, 7, 9]);
        assert_eq!(v.subtract(&w).unwrap().elements(), &[-3, -3, -3]);
        assert_eq!(v.dot_product(&w).unwrap(), 32);
        assert_eq!(v.scalar_multiply(&2).elements(), &[2, 4, 6]);
        assert_eq!(v.negate().elements(), &[-1, -2, -3]);
        assert_eq!((-v.clone()).elements(), &[-1, -2, -3]);
        assert_eq!((&v * &3).elements(), &[3, 6, 9]);

        let u = LONG.vector(vec![1, 1, -1]).unwrap();
        assert!(v.orthogonal_to(&u).unwrap());
        assert!(!v.orthogonal_to(&w).unwrap());
    }

    #[test]
    fn dimension_mismatch() {
        let v = LONG.vector(vec![1, 2, 3]).unwrap();
        let w = LONG.vector(vec![1, 2]).unwrap();
        let err = Error::DimensionMismatch { left: 3, right: 2 };
        assert_eq!(v.add(&w).unwrap_err(), err);
        assert_eq!(v.dot_product(&w).unwrap_err(), err);
        assert_eq!(v.equals_by_comparing(&w).unwrap_err(), err);
        assert_ne!(v, w);
    }

    #[test]
    fn construction() {
        assert_eq!(Vector::new(vec![], LONG).unwrap_err(), Error::EmptyEntries);
        assert_eq!(Vector::zero(0, LONG).unwrap_err(), Error::InvalidSize(0));

        let v = Vector::from_entries(
            vec![VectorEntry::new(2, 20), VectorEntry::new(1, 10)],
            LONG,
        )
        .unwrap();
        assert_eq!(v.elements(), &[10, 20]);
        assert_eq!(v.indices(), 1..=2);
        assert_eq!(v.entry(2).unwrap(), VectorEntry::new(2, 20));
        assert_eq!(v.entries().map(|e| e.index).collect::<Vec<_>>(), vec![1, 2]);

        assert_eq!(
            Vector::from_entries(vec![VectorEntry::new(3, 1), VectorEntry::new(1, 1)], LONG)
                .unwrap_err(),
            Error::IncompleteIndices {
                expected: 3,
                missing: 2
            }
        );
        assert_eq!(
            Vector::from_entries(vec![VectorEntry::new(1, 1), VectorEntry::new(1, 2)], LONG)
                .unwrap_err(),
            Error::DuplicateIndex(1)
        );
        assert_eq!(
            Vector::from_entries(vec![VectorEntry::new(0, 1)], LONG).unwrap_err(),
            Error::IndexOutOfRange { index: 0, size: 0 }
        );
        assert_eq!(
            Vector::from_entries(Vec::<VectorEntry<i64>>::new(), LONG).unwrap_err(),
            Error::EmptyEntries
        );

        let map = BTreeMap::from([(1, 7), (2, 8)]);
        assert_eq!(Vector::from_index_map(map, LONG).unwrap().elements(), &[7, 8]);
    }

    #[test]
    fn huge_sparse_index() {
        assert_eq!(
            Vector::from_entries(vec![VectorEntry::new(usize::MAX, 1)], LONG).unwrap_err(),
            Error::IncompleteIndices {
                expected: usize::MAX,
                missing: 1
            }
        );
        assert_eq!(
            Vector::from_entries(
                vec![VectorEntry::new(usize::MAX, 1), VectorEntry::new(1, 1)],
                LONG
            )
            .unwrap_err(),
            Error::IncompleteIndices {
                expected: usize::MAX,
                missing: 2
            }
        );
    }

    #[test]
    fn single_element() {
        let v = LONG.vector(vec![-7]).unwrap();
        assert_eq!(v.size(), 1);
        assert_eq!(v.max_norm(), 7);
        assert_eq!(
            v.get(2).unwrap_err(),
            Error::IndexOutOfRange { index: 2, size: 1 }
        );
        assert!(v.get(0).is_err());
    }

    #[test]
    fn equality_by_value() {
        let f = |n: i64, d: i64| Fraction::new(n, d).unwrap();
        let v = Q64.vector(vec![f(1, 2), f(2, 3)]).unwrap();
        let w = Q64.vector(vec![f(2, 4), f(4, 6)]).unwrap();
        assert!(v.equals_by_comparing(&w).unwrap());
        assert_eq!(v, w);

        let d = |s: &str| s.parse::<Decimal>().unwrap();
        let a = DECIMAL.vector(vec![d("1.0"), d("2")]).unwrap();
        let b = DECIMAL.vector(vec![d("1"), d("2.00")]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn complex_norms() {
        let v = C64
            .vector(vec![Complex::new(3., 4.), Complex::new(0., 1.)])
            .unwrap();
        assert_eq!(v.taxicab_norm(), 6.);
        assert_eq!(v.euclidean_norm_squared(), 26.);
        assert_eq!(v.max_norm(), 5.);
        assert_eq!(v.euclidean_norm(None).unwrap(), 26f64.sqrt());
    }

    #[test]
    fn round_trip() {
        let v = LONG.vector(vec![1, -2, 3]).unwrap();
        let d = v.map(|e| Decimal::from(*e), DECIMAL);
        assert_eq!(d.to_string(), "{1,-2,3}");
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
}
