//! Builders that collect entries of a vector or matrix in any order.
//!
//! Indices that were not given an element are filled when the container is built,
//! with the zero of the ring unless a [default fill](VectorBuilder::default_fill) is set.
//!
//! ```
//! use numtower::domains::integer::LONG;
//! use numtower::tensors::LinearSpace;
//!
//! let v = LONG
//!     .vector_builder(5)
//!     .unwrap()
//!     .set(2, 7)
//!     .set(4, 9)
//!     .build()
//!     .unwrap();
//! assert_eq!(v.elements(), &[0, 7, 0, 9, 0]);
//! ```

use tracing::{debug, instrument};

use crate::{
    domains::Ring,
    error::{Error, Result},
};

use super::{matrix::area, Matrix, MatrixEntry, Vector, VectorEntry};

/// Collects the entries of a [Vector] of a fixed size.
pub struct VectorBuilder<F: Ring> {
    size: usize,
    entries: Vec<VectorEntry<F::Element>>,
    fill: Option<Box<dyn Fn(usize) -> F::Element>>,
    field: F,
}

impl<F: Ring> VectorBuilder<F> {
    /// Create a builder for a vector with indices `1..=size`.
    pub fn new(size: usize, field: F) -> Result<VectorBuilder<F>> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }

        Ok(VectorBuilder {
            size,
            entries: vec![],
            fill: None,
            field,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Set the element at `index`, replacing an earlier one.
    pub fn set(mut self, index: usize, element: F::Element) -> Self {
        self.put(index, element);
        self
    }

    /// Set the element at `index` and return the element it replaces.
    pub fn put(&mut self, index: usize, element: F::Element) -> Option<F::Element> {
        match self.entries.iter_mut().find(|e| e.index == index) {
            Some(e) => Some(std::mem::replace(&mut e.element, element)),
            None => {
                self.entries.push(VectorEntry { index, element });
                None
            }
        }
    }

    /// Set the element after the largest index that is currently set.
    pub fn push(self, element: F::Element) -> Self {
        let index = self
            .entries
            .iter()
            .map(|e| e.index)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        self.set(index, element)
    }

    /// Add a raw entry. Unlike [VectorBuilder::set], a repeated index is not replaced
    /// but reported when building.
    pub fn entry(mut self, entry: VectorEntry<F::Element>) -> Self {
        self.entries.push(entry);
        self
    }

    /// Get the element that is currently set at `index`.
    pub fn get(&self, index: usize) -> Option<&F::Element> {
        self.entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| &e.element)
    }

    /// Recompute every index from its current element, if any.
    pub fn compute(mut self, f: impl Fn(usize, Option<&F::Element>) -> F::Element) -> Self {
        for index in 1..=self.size {
            let e = f(index, self.get(index));
            self.put(index, e);
        }
        self
    }

    /// Compute the element of every index that is not set.
    pub fn compute_if_absent(mut self, f: impl Fn(usize) -> F::Element) -> Self {
        for index in 1..=self.size {
            if self.get(index).is_none() {
                self.entries.push(VectorEntry {
                    index,
                    element: f(index),
                });
            }
        }
        self
    }

    /// Fill the indices that are not set at build time with `f(index)` instead of zero.
    pub fn default_fill(mut self, f: impl Fn(usize) -> F::Element + 'static) -> Self {
        self.fill = Some(Box::new(f));
        self
    }

    /// Validate the entries and fill the missing ones.
    #[instrument(level = "debug", skip(self), fields(size = self.size))]
    pub fn build(self) -> Result<Vector<F>> {
        let mut slots: Vec<Option<F::Element>> = vec![None; self.size];
        for e in self.entries {
            if e.index == 0 || e.index > self.size {
                return Err(Error::IndexOutOfRange {
                    index: e.index,
                    size: self.size,
                });
            }

            let slot = &mut slots[e.index - 1];
            if slot.is_some() {
                return Err(Error::DuplicateIndex(e.index));
            }
            *slot = Some(e.element);
        }

        let mut filled = 0;
        let data = slots
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                e.unwrap_or_else(|| {
                    filled += 1;
                    match &self.fill {
                        Some(f) => f(i + 1),
                        None => self.field.zero(),
                    }
                })
            })
            .collect();

        debug!(filled, "built vector");
        Ok(Vector::from_data(data, self.field))
    }
}

/// Collects the entries of a [Matrix] of a fixed shape.
pub struct MatrixBuilder<F: Ring> {
    nrows: usize,
    ncols: usize,
    entries: Vec<MatrixEntry<F::Element>>,
    fill: Option<Box<dyn Fn(usize, usize) -> F::Element>>,
    field: F,
}

impl<F: Ring> MatrixBuilder<F> {
    /// Create a builder for a matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: usize, ncols: usize, field: F) -> Result<MatrixBuilder<F>> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidSize(0));
        }
        area(nrows, ncols)?;

        Ok(MatrixBuilder {
            nrows,
            ncols,
            entries: vec![],
            fill: None,
            field,
        })
    }

    pub fn row_size(&self) -> usize {
        self.nrows
    }

    pub fn column_size(&self) -> usize {
        self.ncols
    }

    /// Set the element at (`row`, `column`), replacing an earlier one.
    pub fn set(mut self, row: usize, column: usize, element: F::Element) -> Self {
        self.put(row, column, element);
        self
    }

    /// Set the element at (`row`, `column`) and return the element it replaces.
    pub fn put(&mut self, row: usize, column: usize, element: F::Element) -> Option<F::Element> {
        match self
            .entries
            .iter_mut()
            .find(|e| e.row == row && e.column == column)
        {
            Some(e) => Some(std::mem::replace(&mut e.element, element)),
            None => {
                self.entries.push(MatrixEntry {
                    row,
                    column,
                    element,
                });
                None
            }
        }
    }

    /// Set the element at the row-major position after the last one that is set.
    pub fn push(self, element: F::Element) -> Self {
        let next = self
            .entries
            .iter()
            .filter(|e| e.row > 0 && e.row <= self.nrows && e.column > 0 && e.column <= self.ncols)
            .map(|e| (e.row - 1) * self.ncols + e.column)
            .max()
            .unwrap_or(0);
        let (row, column) = (next / self.ncols + 1, next % self.ncols + 1);
        self.set(row, column, element)
    }

    /// Add a raw entry. A repeated position is reported when building.
    pub fn entry(mut self, entry: MatrixEntry<F::Element>) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&F::Element> {
        self.entries
            .iter()
            .find(|e| e.row == row && e.column == column)
            .map(|e| &e.element)
    }

    /// Recompute every position from its current element, if any.
    pub fn compute(
        mut self,
        f: impl Fn(usize, usize, Option<&F::Element>) -> F::Element,
    ) -> Self {
        for row in 1..=self.nrows {
            for column in 1..=self.ncols {
                let e = f(row, column, self.get(row, column));
                self.put(row, column, e);
            }
        }
        self
    }

    /// Compute the element of every position that is not set.
    pub fn compute_if_absent(mut self, f: impl Fn(usize, usize) -> F::Element) -> Self {
        for row in 1..=self.nrows {
            for column in 1..=self.ncols {
                if self.get(row, column).is_none() {
                    self.entries.push(MatrixEntry::new(row, column, f(row, column)));
                }
            }
        }
        self
    }

    /// Fill the positions that are not set at build time with `f(row, column)` instead of zero.
    pub fn default_fill(mut self, f: impl Fn(usize, usize) -> F::Element + 'static) -> Self {
        self.fill = Some(Box::new(f));
        self
    }

    /// Validate the entries and fill the missing ones.
    #[instrument(level = "debug", skip(self), fields(rows = self.nrows, columns = self.ncols))]
    pub fn build(self) -> Result<Matrix<F>> {
        let (nrows, ncols) = (self.nrows, self.ncols);
        let mut slots: Vec<Option<F::Element>> = vec![None; area(nrows, ncols)?];
        for e in self.entries {
            if e.row == 0 || e.column == 0 || e.row > nrows || e.column > ncols {
                return Err(Error::MatrixIndexOutOfRange {
                    row: e.row,
                    column: e.column,
                    rows: nrows,
                    columns: ncols,
                });
            }

            let slot = &mut slots[(e.row - 1) * ncols + e.column - 1];
            if slot.is_some() {
                return Err(Error::DuplicateMatrixIndex {
                    row: e.row,
                    column: e.column,
                });
            }
            *slot = Some(e.element);
        }

        let mut filled = 0;
        let data = slots
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                e.unwrap_or_else(|| {
                    filled += 1;
                    match &self.fill {
                        Some(f) => f(i / ncols + 1, i % ncols + 1),
                        None => self.field.zero(),
                    }
                })
            })
            .collect();

        debug!(filled, "built matrix");
        Ok(Matrix {
            data,
            nrows,
            ncols,
            field: self.field,
        })
    }
}
