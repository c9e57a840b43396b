use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    ops::{Mul, Neg},
    slice::Chunks,
};

use tracing::{debug, instrument, trace};

use crate::{
    combinatorics::PermutationIterator,
    domains::{decimal::PrecisionContext, NormOf, Normed, OrderedRing, RootOf, Ring, SquareRoot},
    error::{Error, Result},
};

use super::{MatrixEntry, Vector};

/// A dense matrix with 1-based row and column indices, stored in row-major order.
///
/// A matrix is never empty and has an element at every position of its rectangle.
#[derive(Clone, Debug)]
pub struct Matrix<F: Ring> {
    pub(crate) data: Vec<F::Element>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) field: F,
}

/// The number of entries of a `nrows x ncols` matrix.
pub(crate) fn area(nrows: usize, ncols: usize) -> Result<usize> {
    nrows.checked_mul(ncols).ok_or(Error::ShapeTooLarge {
        rows: nrows,
        columns: ncols,
    })
}

impl<F: Ring> Matrix<F> {
    /// Create a matrix with `nrows` rows and `ncols` columns from row-major `data`.
    pub fn new(nrows: usize, ncols: usize, data: Vec<F::Element>, field: F) -> Result<Matrix<F>> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidSize(0));
        }
        let area = area(nrows, ncols)?;
        if data.len() != area {
            return Err(Error::DimensionMismatch {
                left: data.len(),
                right: area,
            });
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            field,
        })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    pub fn from_nested_vec(matrix: Vec<Vec<F::Element>>, field: F) -> Result<Matrix<F>> {
        let cols = matrix.first().map(|r| r.len()).unwrap_or(0);
        if cols == 0 {
            return Err(Error::EmptyEntries);
        }

        let nrows = matrix.len();
        let mut data = Vec::with_capacity(nrows * cols);
        for (i, d) in matrix.into_iter().enumerate() {
            if d.len() != cols {
                return Err(Error::NotRectangular {
                    row: i + 1,
                    expected: cols,
                    found: d.len(),
                });
            }

            data.extend(d);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols: cols,
            field,
        })
    }

    /// Create a matrix from entries in any order. The shape is given by the largest row
    /// and column index, and every position must occur exactly once.
    pub fn from_entries(
        entries: impl IntoIterator<Item = MatrixEntry<F::Element>>,
        field: F,
    ) -> Result<Matrix<F>> {
        let mut entries: Vec<_> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(Error::EmptyEntries);
        }

        let nrows = entries.iter().map(|e| e.row).max().unwrap_or(0);
        let ncols = entries.iter().map(|e| e.column).max().unwrap_or(0);

        if let Some(e) = entries.iter().find(|e| e.row == 0 || e.column == 0) {
            return Err(Error::MatrixIndexOutOfRange {
                row: e.row,
                column: e.column,
                rows: nrows,
                columns: ncols,
            });
        }

        entries.sort_by_key(|e| (e.row, e.column));
        if let Some(w) = entries
            .windows(2)
            .find(|w| (w[0].row, w[0].column) == (w[1].row, w[1].column))
        {
            return Err(Error::DuplicateMatrixIndex {
                row: w[0].row,
                column: w[0].column,
            });
        }

        // positions are distinct and inside the rectangle, so the first entry that is not at
        // its row-major position marks a gap, and so does any position after the last entry
        let position = |i: usize| (i / ncols + 1, i % ncols + 1);
        let gap = (0..entries.len())
            .find(|&i| (entries[i].row, entries[i].column) != position(i))
            .or_else(|| (area(nrows, ncols).ok() != Some(entries.len())).then_some(entries.len()));
        if let Some(i) = gap {
            let (row, column) = position(i);
            return Err(Error::MissingEntry { row, column });
        }

        Ok(Matrix {
            data: entries.into_iter().map(|e| e.element).collect(),
            nrows,
            ncols,
            field,
        })
    }

    /// Create a matrix from a map of `(row, column)` to elements.
    pub fn from_index_map(map: BTreeMap<(usize, usize), F::Element>, field: F) -> Result<Matrix<F>> {
        Self::from_entries(
            map.into_iter()
                .map(|((row, column), element)| MatrixEntry::new(row, column, element)),
            field,
        )
    }

    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn zero(nrows: usize, ncols: usize, field: F) -> Result<Matrix<F>> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidSize(0));
        }

        Ok(Matrix {
            data: vec![field.zero(); area(nrows, ncols)?],
            nrows,
            ncols,
            field,
        })
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: usize, field: F) -> Result<Matrix<F>> {
        if nrows == 0 {
            return Err(Error::InvalidSize(0));
        }

        Ok(Matrix {
            data: (0..area(nrows, nrows)?)
                .map(|i| {
                    if i % nrows == i / nrows {
                        field.one()
                    } else {
                        field.zero()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
            field,
        })
    }

    /// Create a new matrix with the scalars `diag` on the main diagonal and zeroes elsewhere.
    pub fn diagonal(diag: Vec<F::Element>, field: F) -> Result<Matrix<F>> {
        let mut m = Matrix::zero(diag.len(), diag.len(), field)?;
        let n = m.ncols;
        for (i, e) in diag.into_iter().enumerate() {
            m.data[i * n + i] = e;
        }
        Ok(m)
    }

    /// Return the number of rows.
    pub fn row_size(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn column_size(&self) -> usize {
        self.ncols
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// The elements in row-major order.
    pub fn elements(&self) -> &[F::Element] {
        &self.data
    }

    /// Iterate over the rows of the matrix.
    pub fn rows(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.ncols)
    }

    fn check_index(&self, row: usize, column: usize) -> Result<usize> {
        if row == 0 || column == 0 || row > self.nrows || column > self.ncols {
            return Err(Error::MatrixIndexOutOfRange {
                row,
                column,
                rows: self.nrows,
                columns: self.ncols,
            });
        }
        Ok((row - 1) * self.ncols + column - 1)
    }

    /// Get the element in the 1-based `row` and `column`.
    pub fn get(&self, row: usize, column: usize) -> Result<&F::Element> {
        Ok(&self.data[self.check_index(row, column)?])
    }

    pub fn entry(&self, row: usize, column: usize) -> Result<MatrixEntry<F::Element>> {
        Ok(MatrixEntry::new(row, column, self.get(row, column)?.clone()))
    }

    /// Iterate over the entries in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = MatrixEntry<&F::Element>> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, e)| MatrixEntry::new(i / self.ncols + 1, i % self.ncols + 1, e))
    }

    /// Extract the 1-based `row` as a vector.
    pub fn row_vector(&self, row: usize) -> Result<Vector<F>> {
        if row == 0 || row > self.nrows {
            return Err(Error::IndexOutOfRange {
                index: row,
                size: self.nrows,
            });
        }

        let start = (row - 1) * self.ncols;
        Ok(Vector::from_data(
            self.data[start..start + self.ncols].to_vec(),
            self.field.clone(),
        ))
    }

    /// Extract the 1-based `column` as a vector.
    pub fn column_vector(&self, column: usize) -> Result<Vector<F>> {
        if column == 0 || column > self.ncols {
            return Err(Error::IndexOutOfRange {
                index: column,
                size: self.ncols,
            });
        }

        Ok(Vector::from_data(
            self.rows().map(|r| r[column - 1].clone()).collect(),
            self.field.clone(),
        ))
    }

    /// Apply a function `f` to each entry of the matrix.
    pub fn map<G: Ring>(&self, f: impl Fn(&F::Element) -> G::Element, field: G) -> Matrix<G> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
            field,
        }
    }

    /// Apply a fallible function `f` to each entry of the matrix.
    pub fn try_map<G: Ring>(
        &self,
        f: impl Fn(&F::Element) -> Result<G::Element>,
        field: G,
    ) -> Result<Matrix<G>> {
        Ok(Matrix {
            data: self.data.iter().map(f).collect::<Result<_>>()?,
            nrows: self.nrows,
            ncols: self.ncols,
            field,
        })
    }

    fn check_shape(&self, other: &Self) -> Result<()> {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Err(Error::ShapeMismatch {
                left: (self.nrows, self.ncols),
                right: (other.nrows, other.ncols),
            });
        }
        Ok(())
    }

    fn check_square(&self) -> Result<()> {
        if self.nrows != self.ncols {
            return Err(Error::NotSquare {
                rows: self.nrows,
                columns: self.ncols,
            });
        }
        Ok(())
    }

    /// Add two matrices.
    pub fn add(&self, other: &Self) -> Result<Matrix<F>> {
        self.check_shape(other)?;

        let mut m = self.clone();
        for (a, b) in m.data.iter_mut().zip(&other.data) {
            self.field.add_assign(a, b);
        }
        Ok(m)
    }

    /// Subtract two matrices.
    pub fn subtract(&self, other: &Self) -> Result<Matrix<F>> {
        self.check_shape(other)?;

        let mut m = self.clone();
        for (a, b) in m.data.iter_mut().zip(&other.data) {
            self.field.sub_assign(a, b);
        }
        Ok(m)
    }

    /// Multiply two matrices. The number of columns of `self` must equal the number of rows of `other`.
    pub fn multiply(&self, other: &Self) -> Result<Matrix<F>> {
        if self.ncols != other.nrows {
            return Err(Error::ShapeMismatch {
                left: (self.nrows, self.ncols),
                right: (other.nrows, other.ncols),
            });
        }

        let mut data = vec![self.field.zero(); area(self.nrows, other.ncols)?];
        for i in 0..self.nrows {
            for j in 0..other.ncols {
                let sum = &mut data[i * other.ncols + j];
                for k in 0..self.ncols {
                    self.field.add_mul_assign(
                        sum,
                        &self.data[i * self.ncols + k],
                        &other.data[k * other.ncols + j],
                    );
                }
            }
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: other.ncols,
            field: self.field.clone(),
        })
    }

    /// Multiply the matrix with the column vector `v`.
    pub fn multiply_vector(&self, v: &Vector<F>) -> Result<Vector<F>> {
        if self.ncols != v.size() {
            return Err(Error::DimensionMismatch {
                left: self.ncols,
                right: v.size(),
            });
        }

        Ok(Vector::from_data(
            self.rows()
                .map(|r| {
                    let mut sum = self.field.zero();
                    for (a, b) in r.iter().zip(v.elements()) {
                        self.field.add_mul_assign(&mut sum, a, b);
                    }
                    sum
                })
                .collect(),
            self.field.clone(),
        ))
    }

    pub fn scalar_multiply(&self, scalar: &F::Element) -> Matrix<F> {
        self.map(|e| self.field.mul(e, scalar), self.field.clone())
    }

    /// Multiply by `-1`.
    pub fn negate(&self) -> Matrix<F> {
        self.scalar_multiply(&self.field.neg(&self.field.one()))
    }

    /// Return the transpose of the matrix.
    pub fn transpose(&self) -> Matrix<F> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.data[i * self.ncols + j].clone());
            }
        }

        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
            field: self.field.clone(),
        }
    }

    /// Remove the 1-based `row` and `column`. The result must not be empty.
    pub fn minor(&self, row: usize, column: usize) -> Result<Matrix<F>> {
        self.check_index(row, column)?;
        if self.nrows == 1 || self.ncols == 1 {
            return Err(Error::EmptyEntries);
        }

        let data = self
            .entries()
            .filter(|e| e.row != row && e.column != column)
            .map(|e| e.element.clone())
            .collect();

        Ok(Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
            field: self.field.clone(),
        })
    }

    /// The sum of the diagonal of a square matrix.
    pub fn trace(&self) -> Result<F::Element> {
        self.check_square()?;

        let mut sum = self.field.zero();
        for i in 0..self.nrows {
            self.field.add_assign(&mut sum, &self.data[i * self.ncols + i]);
        }
        Ok(sum)
    }

    /// Compute the determinant of a square matrix.
    ///
    /// Triangular matrices take the product of their diagonal. Otherwise, 2x2 and 3x3
    /// matrices are expanded in closed form, and larger matrices use the Leibniz formula,
    /// which sums `n!` terms.
    #[instrument(level = "debug", skip(self), fields(size = self.nrows))]
    pub fn determinant(&self) -> Result<F::Element> {
        self.check_square()?;

        if self.is_triangular() {
            debug!("triangular matrix: multiplying the diagonal");
            let mut det = self.field.one();
            for i in 0..self.nrows {
                self.field.mul_assign(&mut det, &self.data[i * self.ncols + i]);
            }
            return Ok(det);
        }

        let f = &self.field;
        match self.nrows {
            1 => Ok(self.data[0].clone()),
            2 => {
                debug!("expanding 2x2 determinant");
                Ok(f.sub(
                    &f.mul(&self.data[0], &self.data[3]),
                    &f.mul(&self.data[1], &self.data[2]),
                ))
            }
            3 => {
                debug!("rule of Sarrus");
                Ok(self.rule_of_sarrus())
            }
            _ => {
                debug!("Leibniz expansion");
                Ok(self.leibniz())
            }
        }
    }

    /// The closed-form determinant of a 3x3 matrix.
    pub(crate) fn rule_of_sarrus(&self) -> F::Element {
        let f = &self.field;
        let d = &self.data;
        let term = |a: usize, b: usize, c: usize| f.mul(&f.mul(&d[a], &d[b]), &d[c]);

        let mut det = term(0, 4, 8);
        f.add_assign(&mut det, &term(1, 5, 6));
        f.add_assign(&mut det, &term(2, 3, 7));
        f.sub_assign(&mut det, &term(2, 4, 6));
        f.sub_assign(&mut det, &term(1, 3, 8));
        f.sub_assign(&mut det, &term(0, 5, 7));
        det
    }

    /// The determinant as the signed sum over all permutations `p` of `prod_i a_{i,p(i)}`.
    pub(crate) fn leibniz(&self) -> F::Element {
        let f = &self.field;
        let n = self.nrows;

        let mut det = f.zero();
        let mut terms = 0usize;
        let mut perm = PermutationIterator::new(n);
        'next: while let Some((p, even)) = perm.next() {
            let mut term = f.one();
            for (row, &col) in p.iter().enumerate() {
                let e = &self.data[row * n + col];
                if F::is_zero(e) {
                    continue 'next;
                }
                f.mul_assign(&mut term, e);
            }

            terms += 1;
            if even {
                f.add_assign(&mut det, &term);
            } else {
                f.sub_assign(&mut det, &term);
            }
        }

        trace!(terms, "summed non-zero permutation terms");
        det
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return `true` iff the matrix is square and all entries below the diagonal are zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square() && self.entries().all(|e| e.row <= e.column || F::is_zero(e.element))
    }

    /// Return `true` iff the matrix is square and all entries above the diagonal are zero.
    pub fn is_lower_triangular(&self) -> bool {
        self.is_square() && self.entries().all(|e| e.row >= e.column || F::is_zero(e.element))
    }

    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_square() && self.entries().all(|e| e.row == e.column || F::is_zero(e.element))
    }

    pub fn is_identity(&self) -> bool {
        self.is_diagonal()
            && self
                .entries()
                .all(|e| e.row != e.column || self.field.is_one(e.element))
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && self.entries().all(|e| {
                self.field
                    .equals(e.element, &self.data[(e.column - 1) * self.ncols + e.row - 1])
            })
    }

    /// Return `true` iff the matrix equals the negation of its transpose.
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && self.entries().all(|e| {
                self.field.equals(
                    e.element,
                    &self
                        .field
                        .neg(&self.data[(e.column - 1) * self.ncols + e.row - 1]),
                )
            })
    }

    /// Return `true` iff the matrix is square and its determinant is invertible in the ring.
    pub fn is_invertible(&self) -> bool {
        self.determinant()
            .map(|d| self.field.is_invertible(&d))
            .unwrap_or(false)
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(F::is_zero)
    }

    /// Compare the elements by value, failing if the shapes differ.
    pub fn equals_by_comparing(&self, other: &Self) -> Result<bool> {
        self.check_shape(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .all(|(a, b)| self.field.equals(a, b)))
    }
}

impl<F: Normed> Matrix<F> {
    fn max_of(&self, it: impl Iterator<Item = NormOf<F>>) -> NormOf<F> {
        let n = self.field.norm_ring();
        let mut res = n.zero();
        for x in it {
            if n.compare(&x, &res).is_gt() {
                res = x;
            }
        }
        res
    }

    fn abs_sum<'a>(&self, it: impl Iterator<Item = &'a F::Element>) -> NormOf<F>
    where
        F::Element: 'a,
    {
        let n = self.field.norm_ring();
        let mut sum = n.zero();
        for e in it {
            n.add_assign(&mut sum, &self.field.abs(e));
        }
        sum
    }

    /// The largest sum of absolute values in a column.
    pub fn max_abs_column_sum_norm(&self) -> NormOf<F> {
        self.max_of(
            (0..self.ncols).map(|j| self.abs_sum(self.data[j..].iter().step_by(self.ncols))),
        )
    }

    /// The largest sum of absolute values in a row.
    pub fn max_abs_row_sum_norm(&self) -> NormOf<F> {
        self.max_of(self.rows().map(|r| self.abs_sum(r.iter())))
    }

    /// The sum of the squared absolute values of all entries.
    pub fn frobenius_norm_squared(&self) -> NormOf<F> {
        let n = self.field.norm_ring();
        let mut sum = n.zero();
        for e in &self.data {
            n.add_assign(&mut sum, &self.field.abs_squared(e));
        }
        sum
    }

    /// The largest absolute value of all entries.
    pub fn max_norm(&self) -> NormOf<F> {
        self.max_of(self.data.iter().map(|e| self.field.abs(e)))
    }
}

impl<F: Normed> Matrix<F>
where
    F::NormRing: SquareRoot,
{
    pub fn frobenius_norm(&self, context: Option<&PrecisionContext>) -> Result<RootOf<F>> {
        self.field
            .norm_ring()
            .sqrt(&self.frobenius_norm_squared(), context)
    }
}

impl<F: Ring> PartialEq for Matrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_by_comparing(other).unwrap_or(false)
    }
}

impl<F: Ring> Display for Matrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, r) in self.rows().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for (j, e) in r.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                Display::fmt(e, f)?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

impl<F: Ring> Neg for Matrix<F> {
    type Output = Matrix<F>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = self.field.neg(e);
        }

        self
    }
}

impl<F: Ring> Mul<&F::Element> for &Matrix<F> {
    type Output = Matrix<F>;

    fn mul(self, rhs: &F::Element) -> Self::Output {
        self.scalar_multiply(rhs)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use crate::{
        domains::{
            decimal::{Decimal, DECIMAL},
            float::DOUBLE,
            integer::{BIG_INTEGER, LONG},
            rational::{Fraction, Q64},
        },
        error::Error,
        tensors::{LinearSpace, Matrix, MatrixEntry},
    };

    #[test]
    fn basics() {
        let a = Matrix::new(2, 3, vec![1, 2, 3, 4, 5, 6], LONG).unwrap();

        assert_eq!(a.transpose().data, vec![1, 4, 2, 5, 3, 6]);
        assert_eq!((-a.clone()).data, vec![-1, -2, -3, -4, -5, -6]);
        assert_eq!(a.negate().data, vec![-1, -2, -3, -4, -5, -6]);
        assert!(a.subtract(&a).unwrap().is_zero());
        assert_eq!(a.add(&a).unwrap().data, vec![2, 4, 6, 8, 10, 12]);
        assert_eq!((&a * &2).data, vec![2, 4, 6, 8, 10, 12]);

        let b = LONG.matrix(vec![vec![7, 8], vec![9, 10], vec![11, 12]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.data, vec![58, 64, 139, 154]);
        assert_eq!(*c.get(2, 1).unwrap(), 139);
        assert_eq!(c.to_string(), "{{58,64},{139,154}}");

        assert_eq!(
            a.multiply(&a).unwrap_err(),
            Error::ShapeMismatch {
                left: (2, 3),
                right: (2, 3)
            }
        );
        assert_eq!(
            a.add(&b).unwrap_err(),
            Error::ShapeMismatch {
                left: (2, 3),
                right: (3, 2)
            }
        );
    }

    #[test]
    fn determinant_and_square() {
        let m = LONG.matrix(vec![vec![1, 2], vec![2, 3]]).unwrap();
        assert_eq!(m.determinant().unwrap(), -1);
        assert_eq!(
            m.multiply(&m).unwrap(),
            LONG.matrix(vec![vec![5, 8], vec![8, 13]]).unwrap()
        );
        assert!(m.is_symmetric());
        assert!(m.is_invertible());
    }

    #[test]
    fn triangular_determinant_is_the_diagonal_product() {
        let m = LONG
            .matrix(vec![vec![2, 1, 1], vec![0, 3, 1], vec![0, 0, 4]])
            .unwrap();
        assert!(m.is_upper_triangular());
        assert!(!m.is_lower_triangular());
        assert_eq!(m.determinant().unwrap(), 24);
        assert_eq!(m.rule_of_sarrus(), 24);
        // summing the diagonal would give 9
        assert_ne!(m.determinant().unwrap(), m.trace().unwrap());

        let l = m.transpose();
        assert!(l.is_lower_triangular());
        assert_eq!(l.determinant().unwrap(), 24);
    }

    #[test]
    fn sarrus_and_leibniz() {
        let m = LONG
            .matrix(vec![vec![2, -3, 1], vec![2, 0, -1], vec![1, 4, 5]])
            .unwrap();
        assert_eq!(m.determinant().unwrap(), 49);
        assert_eq!(m.rule_of_sarrus(), 49);
        assert_eq!(m.leibniz(), 49);

        let m = LONG
            .matrix(vec![
                vec![1, 0, 2, -1],
                vec![3, 0, 0, 5],
                vec![2, 1, 4, -3],
                vec![1, 0, 5, 0],
            ])
            .unwrap();
        assert_eq!(m.determinant().unwrap(), 30);
        assert_eq!(m.transpose().determinant().unwrap(), 30);

        let singular = LONG
            .matrix(vec![
                vec![1, 2, 3, 4],
                vec![2, 4, 6, 8],
                vec![0, 1, 0, 1],
                vec![1, 0, 1, 0],
            ])
            .unwrap();
        assert_eq!(singular.determinant().unwrap(), 0);
        assert!(!singular.is_invertible());
    }

    #[test]
    fn identity_determinant() {
        for n in 1..=6 {
            let id = Matrix::identity(n, BIG_INTEGER).unwrap();
            assert!(id.is_identity());
            assert_eq!(id.determinant().unwrap(), 1);
        }
    }

    #[test]
    fn determinant_over_fractions() {
        let f = |n: i64, d: i64| Fraction::new(n, d).unwrap();
        let m = Q64
            .matrix(vec![vec![f(1, 2), f(1, 3)], vec![f(1, 4), f(1, 1)]])
            .unwrap();
        assert_eq!(m.determinant().unwrap(), f(5, 12));
        assert!(m.is_invertible());

        let d = |s: &str| s.parse::<Decimal>().unwrap();
        let m = DECIMAL
            .matrix(vec![vec![d("0.5"), d("2")], vec![d("1.5"), d("1")]])
            .unwrap();
        assert_eq!(m.determinant().unwrap(), d("-2.5"));
    }

    #[test]
    fn not_square() {
        let m = Matrix::zero(2, 3, LONG).unwrap();
        let err = Error::NotSquare {
            rows: 2,
            columns: 3,
        };
        assert_eq!(m.determinant().unwrap_err(), err);
        assert_eq!(m.trace().unwrap_err(), err);
        assert!(!m.is_triangular());
        assert!(!m.is_invertible());
    }

    #[test]
    fn predicates() {
        let d = Matrix::diagonal(vec![1, 2, 3], LONG).unwrap();
        assert!(d.is_diagonal());
        assert!(d.is_triangular());
        assert!(!d.is_identity());
        assert_eq!(d.trace().unwrap(), 6);

        let s = LONG
            .matrix(vec![vec![0, 2, -1], vec![-2, 0, 4], vec![1, -4, 0]])
            .unwrap();
        assert!(s.is_skew_symmetric());
        assert!(!s.is_symmetric());
        assert!(!s.is_invertible());
    }

    #[test]
    fn minors_and_slices() {
        let m = LONG
            .matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])
            .unwrap();
        assert_eq!(m.minor(2, 2).unwrap().data, vec![1, 3, 7, 9]);
        assert_eq!(m.minor(1, 3).unwrap().data, vec![4, 5, 7, 8]);
        assert!(m.minor(4, 1).is_err());
        assert_eq!(
            LONG.matrix(vec![vec![1, 2]]).unwrap().minor(1, 1).unwrap_err(),
            Error::EmptyEntries
        );

        assert_eq!(m.row_vector(2).unwrap().elements(), &[4, 5, 6]);
        assert_eq!(m.column_vector(3).unwrap().elements(), &[3, 6, 9]);
        assert_eq!(
            m.row_vector(0).unwrap_err(),
            Error::IndexOutOfRange { index: 0, size: 3 }
        );

        let v = LONG.vector(vec![1, 0, -1]).unwrap();
        assert_eq!(m.multiply_vector(&v).unwrap().elements(), &[-2, -2, -2]);
        assert!(m
            .multiply_vector(&LONG.vector(vec![1]).unwrap())
            .is_err());

        assert_eq!(
            m.get(0, 1).unwrap_err(),
            Error::MatrixIndexOutOfRange {
                row: 0,
                column: 1,
                rows: 3,
                columns: 3
            }
        );
        assert_eq!(m.entry(3, 1).unwrap(), MatrixEntry::new(3, 1, 7));
        assert_eq!(m.rows().count(), 3);
    }

    #[test]
    fn construction() {
        assert_eq!(
            Matrix::new(2, 2, vec![1, 2, 3], LONG).unwrap_err(),
            Error::DimensionMismatch { left: 3, right: 4 }
        );
        assert_eq!(
            LONG.matrix(vec![vec![1, 2], vec![3]]).unwrap_err(),
            Error::NotRectangular {
                row: 2,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(LONG.matrix(vec![]).unwrap_err(), Error::EmptyEntries);

        let m = Matrix::from_entries(
            vec![
                MatrixEntry::new(2, 2, 4),
                MatrixEntry::new(1, 1, 1),
                MatrixEntry::new(2, 1, 3),
                MatrixEntry::new(1, 2, 2),
            ],
            LONG,
        )
        .unwrap();
        assert_eq!(m.data, vec![1, 2, 3, 4]);

        assert_eq!(
            Matrix::from_entries(
                vec![MatrixEntry::new(1, 1, 1), MatrixEntry::new(2, 2, 4)],
                LONG
            )
            .unwrap_err(),
            Error::MissingEntry { row: 1, column: 2 }
        );
        assert_eq!(
            Matrix::from_entries(
                vec![MatrixEntry::new(1, 1, 1), MatrixEntry::new(1, 1, 4)],
                LONG
            )
            .unwrap_err(),
            Error::DuplicateMatrixIndex { row: 1, column: 1 }
        );

        let map = BTreeMap::from([((1, 1), 5), ((1, 2), 6)]);
        let m = Matrix::from_index_map(map, LONG).unwrap();
        assert_eq!((m.row_size(), m.column_size()), (1, 2));
    }

    #[test]
    fn huge_shapes() {
        let far = 1usize << 40;
        assert_eq!(
            Matrix::from_entries(vec![MatrixEntry::new(far, far, 1)], LONG).unwrap_err(),
            Error::MissingEntry { row: 1, column: 1 }
        );
        assert_eq!(
            Matrix::from_entries(
                vec![MatrixEntry::new(far, far, 1), MatrixEntry::new(1, 1, 1)],
                LONG
            )
            .unwrap_err(),
            Error::MissingEntry { row: 1, column: 2 }
        );
        assert_eq!(
            Matrix::from_entries(
                vec![
                    MatrixEntry::new(1, 1, 1),
                    MatrixEntry::new(1, 2, 1),
                    MatrixEntry::new(2, 1, 1)
                ],
                LONG
            )
            .unwrap_err(),
            Error::MissingEntry { row: 2, column: 2 }
        );

        let too_large = Error::ShapeTooLarge {
            rows: usize::MAX,
            columns: 2,
        };
        assert_eq!(
            Matrix::new(usize::MAX, 2, vec![1], LONG).unwrap_err(),
            too_large
        );
        assert_eq!(Matrix::zero(usize::MAX, 2, LONG).unwrap_err(), too_large);
        assert_eq!(
            Matrix::identity(usize::MAX, LONG).unwrap_err(),
            Error::ShapeTooLarge {
                rows: usize::MAX,
                columns: usize::MAX
            }
        );
    }

    #[test]
    fn norms() {
        let m = LONG.matrix(vec![vec![1, -2], vec![-3, 4]]).unwrap();
        assert_eq!(m.max_abs_column_sum_norm(), 6);
        assert_eq!(m.max_abs_row_sum_norm(), 7);
        assert_eq!(m.frobenius_norm_squared(), 30);
        assert_eq!(m.max_norm(), 4);

        let m = DOUBLE.matrix(vec![vec![3., 0.], vec![0., 4.]]).unwrap();
        assert_eq!(m.frobenius_norm(None).unwrap(), 5.);
    }

    #[test]
    fn round_trip() {
        let m = LONG.matrix(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let d = m.map(|e| Decimal::from(*e), DECIMAL);
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
        assert!(back.equals_by_comparing(&m).unwrap());
        assert!(m.transpose().transpose().equals_by_comparing(&m).unwrap());
    }
}
