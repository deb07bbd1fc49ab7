//! Dense real-scalar linear algebra: matrices, row/column vectors and the
//! products connecting them.

mod matrix;
mod read;
mod vector;

pub use matrix::{Layout, Matrix};
pub use read::ReadError;
pub use vector::{ColumnVector, RowVector};
