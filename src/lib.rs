//! Dense matrix and vector linear algebra over a generic number
//! abstraction.
//!
//! Number kinds (real scalars, complex numbers, future kinds) implement the
//! [`Algebra`] capability trait and share the generic [`NumVector`]
//! container; real-scalar [`RowVector`]/[`ColumnVector`]/[`Matrix`] add the
//! usual products on top. Storage order of a matrix is a [`Layout`] tag
//! behind one indexing contract, so row-major and column-major matrices are
//! interchangeable at every call site.
//!
//! ```
//! use numbra::{ColumnVector, Matrix};
//!
//! let a = Matrix::from_rows(vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 9.0],
//! ])?;
//! let v = ColumnVector::new(vec![10.0, 11.0, 12.0]);
//! assert_eq!((&a * &v).as_slice(), &[68.0, 167.0, 266.0]);
//! # Ok::<(), numbra::AlgebraError>(())
//! ```

mod display;
mod error;
mod linalg;
mod number;
mod random;
mod statistics;

pub use crate::error::AlgebraError;
pub use crate::linalg::*;
pub use crate::number::*;
pub use crate::random::GaussianRng;
pub use crate::statistics::*;
pub use rand;
