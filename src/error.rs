//! The error type shared by all fallible operations of the crate.

use thiserror::Error;

/// Errors raised by the numeric tower, vectors, matrices and builders.
///
/// All errors are deterministic: the same inputs always produce the same error,
/// so none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vector or builder was requested with a size of zero.
    #[error("size must be positive, but was {0}")]
    InvalidSize(usize),
    #[error("entries must not be empty")]
    EmptyEntries,
    /// The indices of a vector or matrix do not cover `1..=size`.
    #[error("indices must cover 1..={expected}, but index {missing} is missing")]
    IncompleteIndices { expected: usize, missing: usize },
    /// The entries of a matrix do not fill its rectangle.
    #[error("entry ({row}, {column}) is missing")]
    MissingEntry { row: usize, column: usize },
    #[error("index {0} occurs more than once")]
    DuplicateIndex(usize),
    #[error("entry ({row}, {column}) occurs more than once")]
    DuplicateMatrixIndex { row: usize, column: usize },
    /// The number of entries of a `rows x columns` matrix does not fit in a `usize`.
    #[error("a {rows}x{columns} matrix is too large")]
    ShapeTooLarge { rows: usize, columns: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An index outside of the valid 1-based range.
    #[error("index {index} is out of range 1..={size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("entry ({row}, {column}) is out of range for a {rows}x{columns} matrix")]
    MatrixIndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    #[error("dimension mismatch: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("shape mismatch: {}x{} and {}x{}", left.0, left.1, right.0, right.1)]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("matrix is not square: {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },
    #[error("division by zero")]
    DivisionByZero,
    /// The element has no inverse in its own type.
    #[error("{0} is not invertible")]
    NotInvertible(String),
    /// The operation is undefined for its argument, such as the square root of a negative number.
    #[error("domain error: {0}")]
    Domain(String),
    #[error("the quotient has a non-terminating decimal expansion")]
    NonTerminatingDecimal,
    #[error("rounding is necessary but the rounding mode is Unnecessary")]
    RoundingNecessary,
    #[error("could not parse '{0}'")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
