use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use super::Algebra;
use crate::error::AlgebraError;
use crate::linalg::Matrix;

/// Complex number `re + im·i`, the arity-2 number kind.
///
/// Components are stored as `[re, im]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<F = f64> {
    components: [F; 2],
}

impl<F: Float> Complex<F> {
    /// Builds `re + im·i`.
    pub fn new(re: F, im: F) -> Self {
        Self { components: [re, im] }
    }

    /// Real component.
    pub fn re(&self) -> F {
        self.components[0]
    }

    /// Imaginary component.
    pub fn im(&self) -> F {
        self.components[1]
    }

    /// Replaces the real component.
    pub fn set_re(&mut self, re: F) {
        self.components[0] = re;
    }

    /// Replaces the imaginary component.
    pub fn set_im(&mut self, im: F) {
        self.components[1] = im;
    }

    /// The conjugate `re - im·i`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.re(), -self.im())
    }

    /// Euclidean magnitude `sqrt(re² + im²)`.
    pub fn magnitude(&self) -> F {
        (self.re() * self.re() + self.im() * self.im()).sqrt()
    }

    /// The real 2×2 matrix `[[re, -im], [im, re]]` acting as
    /// multiplication by this number on ℝ².
    ///
    /// The embedding is a ring homomorphism: the matrix of `z1 * z2` equals
    /// the matrix product of the embeddings of `z1` and `z2`.
    pub fn to_rotation_scaling_matrix(&self) -> Matrix<F> {
        Matrix::from_rows(vec![
            vec![self.re(), -self.im()],
            vec![self.im(), self.re()],
        ])
        .expect("2x2 embedding is well-formed")
    }

    // (a + bi)(c + di) = (ac - bd) + (bc + ad)i
    fn product(&self, rhs: &Self) -> Self {
        Self::new(
            self.re() * rhs.re() - self.im() * rhs.im(),
            self.im() * rhs.re() + self.re() * rhs.im(),
        )
    }

    // k·conj(z) / |z|²; the |z|² == 0 guard lives in `Algebra::reciprocal`
    fn reciprocal_unchecked(&self, k: F) -> Self {
        let divisor = self.re() * self.re() + self.im() * self.im();
        Self::new(self.re() * k / divisor, -self.im() * k / divisor)
    }
}

impl<F: Float> Algebra for Complex<F> {
    type Field = F;

    const ARITY: usize = 2;
    const KIND: &'static str = "complex";

    fn components(&self) -> &[F] {
        &self.components
    }

    fn from_components(components: &[F]) -> Result<Self, AlgebraError> {
        match components {
            [re, im] => Ok(Self::new(*re, *im)),
            _ => Err(AlgebraError::MalformedConstruction {
                reason: format!(
                    "complex numbers have 2 components, got {}",
                    components.len()
                ),
            }),
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::new(self.re() + rhs.re(), self.im() + rhs.im())
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.re() - rhs.re(), self.im() - rhs.im())
    }

    fn scale(&self, k: F) -> Self {
        Self::new(self.re() * k, self.im() * k)
    }

    fn reciprocal(&self, k: F) -> Result<Self, AlgebraError> {
        if self.re() * self.re() + self.im() * self.im() == F::zero() {
            return Err(AlgebraError::Singularity);
        }
        Ok(self.reciprocal_unchecked(k))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        Ok(self.product(rhs))
    }
}

impl<F: Float> Add for Complex<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Algebra::add(&self, &rhs)
    }
}

impl<F: Float> Sub for Complex<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Algebra::sub(&self, &rhs)
    }
}

impl<F: Float> Mul for Complex<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.product(&rhs)
    }
}

impl<F: Float> Mul<F> for Complex<F> {
    type Output = Self;

    fn mul(self, k: F) -> Self {
        self.scale(k)
    }
}

/// Scalar division `z / k` keeps IEEE-754 semantics: `k == 0` scales by
/// infinity rather than raising an error.
impl<F: Float> Div<F> for Complex<F> {
    type Output = Self;

    fn div(self, k: F) -> Self {
        self.scale(F::one() / k)
    }
}

impl<F: Float> Neg for Complex<F> {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-F::one())
    }
}

// `k * z` and `k / z` need the scalar on the left, which the orphan rule
// only permits for concrete field types.
macro_rules! scalar_lhs_ops {
    ($($f:ty),*) => {$(
        impl Mul<Complex<$f>> for $f {
            type Output = Complex<$f>;

            fn mul(self, z: Complex<$f>) -> Complex<$f> {
                z.scale(self)
            }
        }

        impl Div<Complex<$f>> for $f {
            type Output = Complex<$f>;

            /// # Panics
            /// When `z` has zero magnitude.
            fn div(self, z: Complex<$f>) -> Complex<$f> {
                match z.reciprocal(self) {
                    Ok(r) => r,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    )*};
}

scalar_lhs_ops!(f32, f64);

impl<F: Float + fmt::Display> fmt::Display for Complex<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im() >= F::zero() { " + " } else { " - " };
        write!(f, "{}{}{}i", self.re(), sign, self.im().abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn square_of_one_plus_two_i() {
        // (1 + 2i)(1 + 2i) = -3 + 4i
        let z = Complex::new(1.0, 2.0);
        let sq = z * z;
        assert_abs_diff_eq!(sq.re(), -3.0);
        assert_abs_diff_eq!(sq.im(), 4.0);
    }

    #[test]
    fn sum_doubles_both_components() {
        let z = Complex::new(1.0, 2.0);
        let sum = z + z;
        assert_abs_diff_eq!(sum.re(), 2.0);
        assert_abs_diff_eq!(sum.im(), 4.0);
    }

    #[test]
    fn scalar_over_complex_is_the_reciprocal() {
        // 2 / (1 + 2i) = 0.4 - 0.8i
        let z: Complex<f64> = Complex::new(1.0, 2.0);
        let r = 2.0 / z;
        assert_abs_diff_eq!(r.re(), 0.4);
        assert_abs_diff_eq!(r.im(), -0.8);
    }

    #[test]
    fn scalar_multiply_and_divide() {
        let z = Complex::new(1.0, 2.0);
        assert_eq!(2.0 * z, Complex::new(2.0, 4.0));
        assert_eq!(z * 4.0, Complex::new(4.0, 8.0));
        assert_eq!(z / 4.0, Complex::new(0.25, 0.5));
    }

    #[test]
    fn reciprocal_inverts_nonzero_values() {
        let z: Complex<f64> = Complex::new(3.0, -4.0);
        let product = z * (1.0 / z);
        assert_abs_diff_eq!(product.re(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(product.im(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn reciprocal_of_zero_is_singular() {
        let zero = Complex::new(0.0_f64, 0.0);
        assert_eq!(zero.reciprocal(1.0), Err(AlgebraError::Singularity));
    }

    #[test]
    fn conjugate_is_an_involution() {
        let z = Complex::new(1.5, -2.5);
        assert_eq!(z.conjugate().conjugate(), z);
    }

    #[test]
    fn magnitude_of_three_four_is_five() {
        assert_abs_diff_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn embedding_is_a_ring_homomorphism() {
        let z1 = Complex::new(1.0, 2.0);
        let z2 = Complex::new(-0.5, 3.0);
        let lhs = (z1 * z2).to_rotation_scaling_matrix();
        let rhs = z1
            .to_rotation_scaling_matrix()
            .matmul(&z2.to_rotation_scaling_matrix())
            .unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(lhs[(i, j)], rhs[(i, j)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn embedding_matches_the_component_layout() {
        let m = Complex::new(1.0, 2.0).to_rotation_scaling_matrix();
        assert_abs_diff_eq!(m[(0, 0)], 1.0);
        assert_abs_diff_eq!(m[(0, 1)], -2.0);
        assert_abs_diff_eq!(m[(1, 0)], 2.0);
        assert_abs_diff_eq!(m[(1, 1)], 1.0);
    }

    #[test]
    fn display_uses_the_sign_of_the_imaginary_part() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
    }
}
