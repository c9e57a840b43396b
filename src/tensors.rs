//! Vectors and matrices over any [Ring], with 1-based indices.
//!
//! All element arithmetic is delegated to the ring descriptor that a vector or matrix carries,
//! so the same implementation works for machine integers, decimals, fractions and complex numbers:
//!
//! ```
//! use numtower::domains::{integer::LONG, rational::{Fraction, Q64}};
//! use numtower::tensors::LinearSpace;
//!
//! let v = LONG.vector(vec![1, 2, 3]).unwrap();
//! assert_eq!(v.dot_product(&v).unwrap(), 14);
//!
//! let half = Fraction::new(1, 2).unwrap();
//! let w = Q64.vector(vec![half.clone(), half]).unwrap();
//! assert_eq!(w.taxicab_norm(), Fraction::from(1));
//! ```

use serde::{Deserialize, Serialize};

use crate::{domains::Ring, error::Result};

pub mod builder;
pub mod matrix;
pub mod vector;

pub use builder::{MatrixBuilder, VectorBuilder};
pub use matrix::Matrix;
pub use vector::Vector;

/// An element of a vector at a 1-based `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorEntry<E> {
    pub index: usize,
    pub element: E,
}

impl<E> VectorEntry<E> {
    pub fn new(index: usize, element: E) -> VectorEntry<E> {
        VectorEntry { index, element }
    }
}

/// An element of a matrix at a 1-based `row` and `column`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixEntry<E> {
    pub row: usize,
    pub column: usize,
    pub element: E,
}

impl<E> MatrixEntry<E> {
    pub fn new(row: usize, column: usize, element: E) -> MatrixEntry<E> {
        MatrixEntry {
            row,
            column,
            element,
        }
    }
}

/// Constructors of vectors and matrices over a ring descriptor.
///
/// This is implemented for every [Ring], so that `LONG.vector(...)` or `Q.matrix_builder(2, 2)`
/// create containers that use that descriptor for their arithmetic.
pub trait LinearSpace: Ring {
    /// Create a vector with the elements at indices `1..=elements.len()`.
    fn vector(&self, elements: Vec<Self::Element>) -> Result<Vector<Self>>;
    fn vector_builder(&self, size: usize) -> Result<VectorBuilder<Self>>;
    /// Create a matrix from its rows.
    fn matrix(&self, rows: Vec<Vec<Self::Element>>) -> Result<Matrix<Self>>;
    fn matrix_builder(&self, rows: usize, columns: usize) -> Result<MatrixBuilder<Self>>;
}

impl<F: Ring> LinearSpace for F {
    fn vector(&self, elements: Vec<F::Element>) -> Result<Vector<F>> {
        Vector::new(elements, self.clone())
    }

    fn vector_builder(&self, size: usize) -> Result<VectorBuilder<F>> {
        VectorBuilder::new(size, self.clone())
    }

    fn matrix(&self, rows: Vec<Vec<F::Element>>) -> Result<Matrix<F>> {
        Matrix::from_nested_vec(rows, self.clone())
    }

    fn matrix_builder(&self, rows: usize, columns: usize) -> Result<MatrixBuilder<F>> {
        MatrixBuilder::new(rows, columns, self.clone())
    }
}
