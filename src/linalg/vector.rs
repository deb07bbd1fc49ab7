use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use num_traits::Float;

use super::matrix::Matrix;
use crate::error::AlgebraError;

/// 1×N vector of real scalars.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowVector<F = f64> {
    data: Vec<F>,
}

/// N×1 vector of real scalars.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnVector<F = f64> {
    data: Vec<F>,
}

fn zip_sum<F: Float>(a: &[F], b: &[F], sign: F) -> Result<Vec<F>, AlgebraError> {
    if a.len() != b.len() {
        return Err(AlgebraError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| x + sign * y).collect())
}

fn scale_slice<F: Float>(a: &[F], k: F) -> Vec<F> {
    a.iter().map(|&x| x * k).collect()
}

fn euclid_norm<F: Float>(a: &[F]) -> F {
    a.iter().fold(F::zero(), |acc, &x| acc + x * x).sqrt()
}

fn join_delimited<F: fmt::Display>(a: &[F], separator: &str) -> String {
    a.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

macro_rules! vector_common {
    ($name:ident, $dim:expr) => {
        impl<F: Float> $name<F> {
            /// Wraps the given elements.
            pub fn new(data: Vec<F>) -> Self {
                Self { data }
            }

            /// Zero-filled vector of `n` elements.
            pub fn zeros(n: usize) -> Self {
                Self { data: vec![F::zero(); n] }
            }

            /// Number of elements.
            pub fn len(&self) -> usize {
                self.data.len()
            }

            /// Whether the vector has no elements.
            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            /// Borrow the elements as a slice.
            pub fn as_slice(&self) -> &[F] {
                &self.data
            }

            /// `[rows, cols]` of this vector's shape.
            pub fn dim(&self) -> [usize; 2] {
                let n = self.data.len();
                $dim(n)
            }

            /// Euclidean norm: square root of the sum of squared elements.
            pub fn norm(&self) -> F {
                euclid_norm(&self.data)
            }

            /// Element-wise sum.
            ///
            /// # Errors
            /// [`AlgebraError::LengthMismatch`] unless both operands have
            /// the same length.
            pub fn checked_add(&self, rhs: &Self) -> Result<Self, AlgebraError> {
                Ok(Self::new(zip_sum(&self.data, &rhs.data, F::one())?))
            }

            /// Element-wise difference.
            ///
            /// # Errors
            /// [`AlgebraError::LengthMismatch`] unless both operands have
            /// the same length.
            pub fn checked_sub(&self, rhs: &Self) -> Result<Self, AlgebraError> {
                Ok(Self::new(zip_sum(&self.data, &rhs.data, -F::one())?))
            }

            /// Every element scaled by `k`.
            pub fn scale(&self, k: F) -> Self {
                Self::new(scale_slice(&self.data, k))
            }

            /// Elements joined by `separator`.
            pub fn to_delimited(&self, separator: &str) -> String
            where
                F: fmt::Display,
            {
                join_delimited(&self.data, separator)
            }
        }

        impl<F: Float> Index<usize> for $name<F> {
            type Output = F;

            fn index(&self, i: usize) -> &F {
                &self.data[i]
            }
        }

        impl<F: Float> IndexMut<usize> for $name<F> {
            fn index_mut(&mut self, i: usize) -> &mut F {
                &mut self.data[i]
            }
        }

        impl<F: Float> Add for &$name<F> {
            type Output = $name<F>;

            /// # Panics
            /// On operand length mismatch.
            fn add(self, rhs: Self) -> $name<F> {
                match self.checked_add(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<F: Float> Add for $name<F> {
            type Output = Self;

            /// # Panics
            /// On operand length mismatch.
            fn add(self, rhs: Self) -> Self {
                &self + &rhs
            }
        }

        impl<F: Float> Sub for &$name<F> {
            type Output = $name<F>;

            /// # Panics
            /// On operand length mismatch.
            fn sub(self, rhs: Self) -> $name<F> {
                match self.checked_sub(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<F: Float> Sub for $name<F> {
            type Output = Self;

            /// # Panics
            /// On operand length mismatch.
            fn sub(self, rhs: Self) -> Self {
                &self - &rhs
            }
        }

        impl<F: Float> Neg for &$name<F> {
            type Output = $name<F>;

            fn neg(self) -> $name<F> {
                self.scale(-F::one())
            }
        }

        impl<F: Float> Neg for $name<F> {
            type Output = Self;

            fn neg(self) -> Self {
                self.scale(-F::one())
            }
        }

        impl<F: Float> Mul<F> for &$name<F> {
            type Output = $name<F>;

            fn mul(self, k: F) -> $name<F> {
                self.scale(k)
            }
        }

        impl<F: Float> Mul<F> for $name<F> {
            type Output = Self;

            fn mul(self, k: F) -> Self {
                self.scale(k)
            }
        }

        /// Division by `k == 0` keeps IEEE-754 semantics: the elements are
        /// scaled by infinity rather than raising an error.
        impl<F: Float> Div<F> for &$name<F> {
            type Output = $name<F>;

            fn div(self, k: F) -> $name<F> {
                self.scale(F::one() / k)
            }
        }

        /// Division by `k == 0` keeps IEEE-754 semantics.
        impl<F: Float> Div<F> for $name<F> {
            type Output = Self;

            fn div(self, k: F) -> Self {
                self.scale(F::one() / k)
            }
        }
    };
}

vector_common!(RowVector, |n| [1, n]);
vector_common!(ColumnVector, |n| [n, 1]);

impl<F: Float> RowVector<F> {
    /// Dot product with a column vector of the same size.
    ///
    /// # Errors
    /// [`AlgebraError::DimensionMismatch`] unless both vectors have the
    /// same length.
    pub fn dot(&self, rhs: &ColumnVector<F>) -> Result<F, AlgebraError> {
        if self.len() != rhs.len() {
            return Err(AlgebraError::DimensionMismatch {
                operation: "dot-multiply",
                left: self.dim(),
                right: rhs.dim(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&rhs.data)
            .fold(F::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Vector–matrix product `self · matrix`, a row vector of
    /// `matrix.cols()` elements.
    ///
    /// # Errors
    /// [`AlgebraError::DimensionMismatch`] unless
    /// `matrix.rows() == self.len()`; the error cites both operands'
    /// dimensions.
    pub fn mul_matrix(&self, matrix: &Matrix<F>) -> Result<Self, AlgebraError> {
        if matrix.rows() != self.len() {
            return Err(AlgebraError::DimensionMismatch {
                operation: "multiply",
                left: self.dim(),
                right: matrix.dim(),
            });
        }
        let mut product = Self::zeros(matrix.cols());
        for j in 0..matrix.cols() {
            let mut acc = F::zero();
            for i in 0..self.len() {
                acc = acc + self.data[i] * matrix[(i, j)];
            }
            product[j] = acc;
        }
        Ok(product)
    }

    /// Reinterprets this row as a column; the backing storage moves, it is
    /// not copied.
    pub fn transpose(self) -> ColumnVector<F> {
        ColumnVector { data: self.data }
    }
}

impl<F: Float> ColumnVector<F> {
    /// Outer product with a row vector: the M×N matrix with
    /// `C[(i, j)] = self[i] * rhs[j]`.
    pub fn outer(&self, rhs: &RowVector<F>) -> Matrix<F> {
        let mut product = Matrix::zeros(self.len(), rhs.len());
        for i in 0..self.len() {
            for j in 0..rhs.len() {
                product[(i, j)] = self.data[i] * rhs.data[j];
            }
        }
        product
    }

    /// Reinterprets this column as a row; the backing storage moves, it is
    /// not copied.
    pub fn transpose(self) -> RowVector<F> {
        RowVector { data: self.data }
    }
}

impl<F: Float> Matrix<F> {
    /// Matrix–vector product `self · vector`, a column vector of
    /// `self.rows()` elements.
    ///
    /// # Errors
    /// [`AlgebraError::DimensionMismatch`] unless
    /// `self.cols() == vector.len()`; the error cites both operands'
    /// dimensions.
    pub fn mul_vector(&self, vector: &ColumnVector<F>) -> Result<ColumnVector<F>, AlgebraError> {
        if self.cols() != vector.len() {
            return Err(AlgebraError::DimensionMismatch {
                operation: "multiply",
                left: self.dim(),
                right: vector.dim(),
            });
        }
        let mut product = ColumnVector::zeros(self.rows());
        for i in 0..self.rows() {
            let mut acc = F::zero();
            for j in 0..vector.len() {
                acc = acc + self[(i, j)] * vector.data[j];
            }
            product[i] = acc;
        }
        Ok(product)
    }
}

impl<F: Float> Mul<&ColumnVector<F>> for &RowVector<F> {
    type Output = F;

    /// Dot product.
    ///
    /// # Panics
    /// On operand length mismatch.
    fn mul(self, rhs: &ColumnVector<F>) -> F {
        match self.dot(rhs) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Float> Mul<ColumnVector<F>> for RowVector<F> {
    type Output = F;

    /// Dot product.
    ///
    /// # Panics
    /// On operand length mismatch.
    fn mul(self, rhs: ColumnVector<F>) -> F {
        &self * &rhs
    }
}

impl<F: Float> Mul<&RowVector<F>> for &ColumnVector<F> {
    type Output = Matrix<F>;

    /// Outer product.
    fn mul(self, rhs: &RowVector<F>) -> Matrix<F> {
        self.outer(rhs)
    }
}

impl<F: Float> Mul<RowVector<F>> for ColumnVector<F> {
    type Output = Matrix<F>;

    /// Outer product.
    fn mul(self, rhs: RowVector<F>) -> Matrix<F> {
        self.outer(&rhs)
    }
}

impl<F: Float> Mul<&ColumnVector<F>> for &Matrix<F> {
    type Output = ColumnVector<F>;

    /// # Panics
    /// Unless `self.cols() == rhs.len()`.
    fn mul(self, rhs: &ColumnVector<F>) -> ColumnVector<F> {
        match self.mul_vector(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Float> Mul<ColumnVector<F>> for Matrix<F> {
    type Output = ColumnVector<F>;

    /// # Panics
    /// Unless `self.cols() == rhs.len()`.
    fn mul(self, rhs: ColumnVector<F>) -> ColumnVector<F> {
        &self * &rhs
    }
}

impl<F: Float> Mul<&Matrix<F>> for &RowVector<F> {
    type Output = RowVector<F>;

    /// # Panics
    /// Unless `rhs.rows() == self.len()`.
    fn mul(self, rhs: &Matrix<F>) -> RowVector<F> {
        match self.mul_matrix(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Float> Mul<Matrix<F>> for RowVector<F> {
    type Output = RowVector<F>;

    /// # Panics
    /// Unless `rhs.rows() == self.len()`.
    fn mul(self, rhs: Matrix<F>) -> RowVector<F> {
        &self * &rhs
    }
}

impl<F: Float + fmt::Display> fmt::Display for RowVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_delimited(","))
    }
}

impl<F: Float + fmt::Display> fmt::Display for ColumnVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_delimited("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fixture_3x3() -> Matrix<f64> {
        Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap()
    }

    #[test]
    fn add_then_sub_returns_the_original() {
        let a = RowVector::new(vec![1.0, -2.0, 3.5]);
        let b = RowVector::new(vec![0.5, 4.0, -1.0]);
        let roundtrip = &(&a + &b) - &b;
        for i in 0..3 {
            assert_abs_diff_eq!(roundtrip[i], a[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn dot_product_concrete() {
        let row = RowVector::new(vec![1.0, 2.0, 3.0]);
        let col = ColumnVector::new(vec![4.0, 5.0, 6.0]);
        assert_abs_diff_eq!(row.dot(&col).unwrap(), 32.0);
        assert_abs_diff_eq!(&row * &col, 32.0);
    }

    #[test]
    fn dot_product_requires_equal_sizes() {
        let row = RowVector::new(vec![1.0, 2.0]);
        let col = ColumnVector::new(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            row.dot(&col),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn outer_product_builds_the_rank_one_matrix() {
        let col = ColumnVector::new(vec![1.0, 2.0]);
        let row = RowVector::new(vec![3.0, 4.0, 5.0]);
        let m = &col * &row;
        assert_eq!(m.dim(), [2, 3]);
        assert_abs_diff_eq!(m[(0, 0)], 3.0);
        assert_abs_diff_eq!(m[(1, 2)], 10.0);
    }

    #[test]
    fn matrix_times_column_vector_concrete() {
        let v = ColumnVector::new(vec![10.0, 11.0, 12.0]);
        let product = fixture_3x3().mul_vector(&v).unwrap();
        assert_eq!(product.as_slice(), &[68.0, 167.0, 266.0]);
    }

    #[test]
    fn matvec_sees_through_the_storage_layout() {
        // Column-major storage of the transpose of fixture_3x3
        let m = Matrix::from_columns(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let v = ColumnVector::new(vec![10.0, 11.0, 12.0]);
        let product = m.mul_vector(&v).unwrap();
        assert_eq!(product.as_slice(), &[138.0, 171.0, 204.0]);
    }

    #[test]
    fn row_vector_times_matrix_concrete() {
        let v = RowVector::new(vec![1.0, 2.0, 3.0]);
        let product = v.mul_matrix(&fixture_3x3()).unwrap();
        assert_eq!(product.as_slice(), &[30.0, 36.0, 42.0]);
    }

    #[test]
    fn matvec_mismatch_cites_both_dimensions() {
        let m = Matrix::<f64>::zeros(2, 3);
        let v = ColumnVector::new(vec![1.0, 2.0]);
        let msg = m.mul_vector(&v).unwrap_err().to_string();
        assert!(msg.contains("[2,3]"), "message was: {msg}");
        assert!(msg.contains("[2,1]"), "message was: {msg}");
    }

    #[test]
    #[should_panic(expected = "multiply")]
    fn matvec_operator_panics_on_mismatch() {
        let _ = &Matrix::<f64>::zeros(2, 3) * &ColumnVector::new(vec![1.0, 2.0]);
    }

    #[test]
    fn transpose_changes_the_shape_tag_only() {
        let row = RowVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(row.dim(), [1, 3]);
        let col = row.transpose();
        assert_eq!(col.dim(), [3, 1]);
        assert_eq!(col.as_slice(), &[1.0, 2.0, 3.0]);
        let back = col.transpose();
        assert_eq!(back.dim(), [1, 3]);
    }

    #[test]
    fn euclidean_norm_concrete() {
        assert_abs_diff_eq!(ColumnVector::new(vec![3.0, 4.0]).norm(), 5.0);
    }

    #[test]
    fn scalar_ops_and_negation() {
        let v = RowVector::new(vec![1.0, -2.0]);
        assert_eq!((&v * 3.0).as_slice(), &[3.0, -6.0]);
        assert_eq!((&v / 2.0).as_slice(), &[0.5, -1.0]);
        assert_eq!((-&v).as_slice(), &[-1.0, 2.0]);
    }

    #[test]
    fn display_separators_follow_the_shape() {
        let row = RowVector::new(vec![1.0, 2.0, 3.0]);
        let col = ColumnVector::new(vec![1.0, 2.0]);
        assert_eq!(row.to_string(), "1,2,3");
        assert_eq!(col.to_string(), "1\n2");
    }
}
