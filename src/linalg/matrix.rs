use std::fmt;
use std::ops::{Add, BitXor, Div, Index, IndexMut, Mul, Neg, Sub};

use num_traits::Float;

use crate::error::AlgebraError;

/// Physical storage order of a dense matrix.
///
/// The order is invisible through the indexing contract: `m[(i, j)]` means
/// row `i`, column `j` for both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Elements of one row are contiguous.
    RowMajor,
    /// Elements of one column are contiguous.
    ColumnMajor,
}

/// Dense M×N matrix of real scalars over a flat backing store.
///
/// The dimensions are fixed at construction; cells mutate in place through
/// [`IndexMut`]. Derived matrices (arithmetic results, transposes) are
/// always row-major regardless of the operands' storage order.
#[derive(Debug, Clone)]
pub struct Matrix<F = f64> {
    data: Vec<F>,
    rows: usize,
    cols: usize,
    layout: Layout,
}

impl<F: Float> Matrix<F> {
    /// Zero-filled row-major matrix with `m` rows and `n` columns.
    pub fn zeros(m: usize, n: usize) -> Self {
        Self {
            data: vec![F::zero(); m * n],
            rows: m,
            cols: n,
            layout: Layout::RowMajor,
        }
    }

    /// Zero-filled column-major matrix with `m` rows and `n` columns.
    pub fn column_major_zeros(m: usize, n: usize) -> Self {
        Self {
            layout: Layout::ColumnMajor,
            ..Self::zeros(m, n)
        }
    }

    /// Row-major matrix from per-row element arrays.
    ///
    /// # Errors
    /// [`AlgebraError::MalformedConstruction`] when `rows` is empty or any
    /// row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, AlgebraError> {
        let (m, n) = Self::jagged_dims(&rows, "row")?;
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: m,
            cols: n,
            layout: Layout::RowMajor,
        })
    }

    /// Column-major matrix from per-column element arrays: `columns[j][i]`
    /// becomes the element at row `i`, column `j`.
    ///
    /// # Errors
    /// [`AlgebraError::MalformedConstruction`] when `columns` is empty or
    /// any column's length differs from the first column's.
    pub fn from_columns(columns: Vec<Vec<F>>) -> Result<Self, AlgebraError> {
        let (n, m) = Self::jagged_dims(&columns, "column")?;
        Ok(Self {
            data: columns.into_iter().flatten().collect(),
            rows: m,
            cols: n,
            layout: Layout::ColumnMajor,
        })
    }

    /// Square row-major matrix from per-row element arrays.
    ///
    /// # Errors
    /// [`AlgebraError::MalformedConstruction`] on ragged input or when the
    /// row count differs from the column count.
    pub fn square_from_rows(rows: Vec<Vec<F>>) -> Result<Self, AlgebraError> {
        let matrix = Self::from_rows(rows)?;
        if matrix.rows != matrix.cols {
            return Err(AlgebraError::MalformedConstruction {
                reason: format!(
                    "square matrix needs equal dimensions, got {}x{}",
                    matrix.rows, matrix.cols
                ),
            });
        }
        Ok(matrix)
    }

    /// The `size`×`size` identity matrix.
    ///
    /// Only the constructor fixes the diagonal; cells stay mutable like any
    /// other matrix afterwards.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        for i in 0..size {
            matrix[(i, i)] = F::one();
        }
        matrix
    }

    /// Row-major matrix filled by calling `generator` once per cell.
    ///
    /// Cells are visited in row-major order (row index outer, column index
    /// inner), so a seeded generator reproduces the same matrix. The crate
    /// never constructs its own randomness; see [`crate::GaussianRng`] for
    /// a normal-deviate source to plug in here.
    pub fn random(m: usize, n: usize, mut generator: impl FnMut() -> F) -> Self {
        let mut matrix = Self::zeros(m, n);
        for i in 0..m {
            for j in 0..n {
                matrix[(i, j)] = generator();
            }
        }
        matrix
    }

    fn jagged_dims(
        arrays: &[Vec<F>],
        axis: &str,
    ) -> Result<(usize, usize), AlgebraError> {
        let Some(first) = arrays.first() else {
            return Err(AlgebraError::MalformedConstruction {
                reason: format!("matrix needs at least one {axis}"),
            });
        };
        for (index, array) in arrays.iter().enumerate() {
            if array.len() != first.len() {
                return Err(AlgebraError::MalformedConstruction {
                    reason: format!(
                        "{axis} {index} has length {}, expected {}",
                        array.len(),
                        first.len()
                    ),
                });
            }
        }
        Ok((arrays.len(), first.len()))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `[rows, cols]`.
    pub fn dim(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Total number of stored elements.
    pub fn element_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Physical storage order.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        match self.layout {
            Layout::RowMajor => i * self.cols + j,
            Layout::ColumnMajor => j * self.rows + i,
        }
    }

    /// Element-wise sum.
    ///
    /// # Errors
    /// [`AlgebraError::DimensionMismatch`] unless both operands have the
    /// same shape.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    /// [`AlgebraError::DimensionMismatch`] unless both operands have the
    /// same shape.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }

    /// Hadamard (element-wise) product.
    ///
    /// # Errors
    /// [`AlgebraError::DimensionMismatch`] unless both operands have the
    /// same shape.
    pub fn hadamard(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(rhs, "hadamard-multiply", |a, b| a * b)
    }

    /// Matrix product by the classic triple loop, O(m·n·p), single thread.
    ///
    /// # Errors
    /// [`AlgebraError::DimensionMismatch`] unless `self.cols == rhs.rows`;
    /// the error cites both operands' dimensions.
    pub fn matmul(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        if self.cols != rhs.rows {
            return Err(AlgebraError::DimensionMismatch {
                operation: "multiply",
                left: self.dim(),
                right: rhs.dim(),
            });
        }
        let mut product = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = F::zero();
                for k in 0..self.cols {
                    acc = acc + self[(i, k)] * rhs[(k, j)];
                }
                product[(i, j)] = acc;
            }
        }
        Ok(product)
    }

    /// Every element scaled by `k`; the result is row-major.
    pub fn scale(&self, k: F) -> Self {
        let mut scaled = Self::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                scaled[(i, j)] = self[(i, j)] * k;
            }
        }
        scaled
    }

    /// The transposed matrix, always in row-major storage.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeros(self.cols, self.rows);
        for i in 0..self.cols {
            for j in 0..self.rows {
                transposed[(i, j)] = self[(j, i)];
            }
        }
        transposed
    }

    /// Frobenius norm: square root of the sum of all squared elements.
    pub fn frobenius_norm(&self) -> F {
        let mut acc = F::zero();
        for i in 0..self.rows {
            for j in 0..self.cols {
                acc = acc + self[(i, j)] * self[(i, j)];
            }
        }
        acc.sqrt()
    }

    /// Sum of all elements.
    pub fn sum(&self) -> F {
        let mut acc = F::zero();
        for i in 0..self.rows {
            for j in 0..self.cols {
                acc = acc + self[(i, j)];
            }
        }
        acc
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Vec<F> {
        (0..self.cols).map(|j| self[(i, j)]).collect()
    }

    /// Replaces row `i` with the given elements.
    ///
    /// # Errors
    /// [`AlgebraError::LengthMismatch`] unless `row.len()` equals the
    /// column count.
    pub fn set_row(&mut self, i: usize, row: &[F]) -> Result<(), AlgebraError> {
        if row.len() != self.cols {
            return Err(AlgebraError::LengthMismatch {
                left: row.len(),
                right: self.cols,
            });
        }
        for (j, &value) in row.iter().enumerate() {
            self[(i, j)] = value;
        }
        Ok(())
    }

    /// Rows in visual row-major order joined by newlines, elements within
    /// a row joined by `separator` — identical output for both layouts.
    pub fn to_delimited(&self, separator: &str) -> String
    where
        F: fmt::Display,
    {
        (0..self.rows)
            .map(|i| {
                (0..self.cols)
                    .map(|j| self[(i, j)].to_string())
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn zip_with(
        &self,
        rhs: &Self,
        operation: &'static str,
        op: impl Fn(F, F) -> F,
    ) -> Result<Self, AlgebraError> {
        if self.dim() != rhs.dim() {
            return Err(AlgebraError::DimensionMismatch {
                operation,
                left: self.dim(),
                right: rhs.dim(),
            });
        }
        let mut combined = Self::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                combined[(i, j)] = op(self[(i, j)], rhs[(i, j)]);
            }
        }
        Ok(combined)
    }
}

impl<F: Float> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    /// # Panics
    /// When the index is outside the matrix dimensions.
    fn index(&self, (i, j): (usize, usize)) -> &F {
        &self.data[self.offset(i, j)]
    }
}

impl<F: Float> IndexMut<(usize, usize)> for Matrix<F> {
    /// # Panics
    /// When the index is outside the matrix dimensions.
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut F {
        let offset = self.offset(i, j);
        &mut self.data[offset]
    }
}

/// Logical equality: same shape, same value at every row/column position.
/// Storage order does not participate.
impl<F: Float> PartialEq for Matrix<F> {
    fn eq(&self, other: &Self) -> bool {
        if self.dim() != other.dim() {
            return false;
        }
        (0..self.rows).all(|i| (0..self.cols).all(|j| self[(i, j)] == other[(i, j)]))
    }
}

impl<F: Float> Add for &Matrix<F> {
    type Output = Matrix<F>;

    /// # Panics
    /// On shape mismatch.
    fn add(self, rhs: Self) -> Matrix<F> {
        match self.checked_add(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Float> Add for Matrix<F> {
    type Output = Self;

    /// # Panics
    /// On shape mismatch.
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<F: Float> Sub for &Matrix<F> {
    type Output = Matrix<F>;

    /// # Panics
    /// On shape mismatch.
    fn sub(self, rhs: Self) -> Matrix<F> {
        match self.checked_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Float> Sub for Matrix<F> {
    type Output = Self;

    /// # Panics
    /// On shape mismatch.
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<F: Float> Mul for &Matrix<F> {
    type Output = Matrix<F>;

    /// # Panics
    /// When the inner dimensions disagree.
    fn mul(self, rhs: Self) -> Matrix<F> {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<F: Float> Mul for Matrix<F> {
    type Output = Self;

    /// # Panics
    /// When the inner dimensions disagree.
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

/// Hadamard product.
impl<F: Float> BitXor for &Matrix<F> {
    type Output = Matrix<F>;

    /// # Panics
    /// On shape mismatch.
    fn bitxor(self, rhs: Self) -> Matrix<F> {
        match self.hadamard(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Hadamard product.
impl<F: Float> BitXor for Matrix<F> {
    type Output = Self;

    /// # Panics
    /// On shape mismatch.
    fn bitxor(self, rhs: Self) -> Self {
        &self ^ &rhs
    }
}

impl<F: Float> Mul<F> for &Matrix<F> {
    type Output = Matrix<F>;

    fn mul(self, k: F) -> Matrix<F> {
        self.scale(k)
    }
}

impl<F: Float> Mul<F> for Matrix<F> {
    type Output = Self;

    fn mul(self, k: F) -> Self {
        self.scale(k)
    }
}

/// Division by `k == 0` keeps IEEE-754 semantics: the elements are scaled
/// by infinity rather than raising an error.
impl<F: Float> Div<F> for &Matrix<F> {
    type Output = Matrix<F>;

    fn div(self, k: F) -> Matrix<F> {
        self.scale(F::one() / k)
    }
}

/// Division by `k == 0` keeps IEEE-754 semantics.
impl<F: Float> Div<F> for Matrix<F> {
    type Output = Self;

    fn div(self, k: F) -> Self {
        self.scale(F::one() / k)
    }
}

impl<F: Float> Neg for &Matrix<F> {
    type Output = Matrix<F>;

    fn neg(self) -> Matrix<F> {
        self.scale(-F::one())
    }
}

impl<F: Float> Neg for Matrix<F> {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-F::one())
    }
}

impl<F: Float + fmt::Display> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_delimited(","))
    }
}
