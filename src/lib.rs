//! A numeric tower with vectors and matrices that are generic over their ring.
//!
//! The scalar types are machine and arbitrary-precision integers, arbitrary-precision decimals,
//! fractions, Gaussian integers and complex numbers in cartesian and polar form.
//! Each has a ring descriptor (see [domains]) that [Vector](tensors::Vector) and [Matrix](tensors::Matrix)
//! use for all of their arithmetic.
//!
//! For example:
//!
//! ```
//! use numtower::domains::{integer::LONG, rational::{Fraction, Q64}};
//! use numtower::tensors::LinearSpace;
//!
//! let m = LONG.matrix(vec![vec![1, 2], vec![2, 3]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -1);
//! assert_eq!(m.multiply(&m).unwrap().to_string(), "{{5,8},{8,13}}");
//!
//! let a = Fraction::new(1, 2).unwrap();
//! let b = Fraction::new(1, 3).unwrap();
//! assert_eq!((a + b).to_string(), "5/6");
//!
//! let v = Q64.vector_builder(3).unwrap().set(2, Fraction::new(2, 4).unwrap()).build().unwrap();
//! assert_eq!(v.to_string(), "{0/1,2/4,0/1}");
//! ```
//!
//! Inexact results, such as square roots, are rounded according to a
//! [PrecisionContext](domains::decimal::PrecisionContext).

pub mod combinatorics;
pub mod domains;
pub mod error;
pub mod tensors;

pub use error::{Error, Result};
