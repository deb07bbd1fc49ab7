use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Sub};

use num_traits::One;

use super::Algebra;
use crate::error::AlgebraError;

/// Fixed-length ordered container of one number kind.
///
/// The length is set at construction and never changes; elements mutate in
/// place through [`IndexMut`]. All arithmetic delegates to the kind's
/// [`Algebra`] operations, so the container works identically for every
/// kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumVector<K> {
    data: Vec<K>,
}

impl<K> NumVector<K> {
    /// Wraps the given elements.
    pub fn new(data: Vec<K>) -> Self {
        Self { data }
    }

    /// `n` copies of `value`.
    pub fn filled(n: usize, value: K) -> Self
    where
        K: Clone,
    {
        Self { data: vec![value; n] }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the container has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the elements as a slice.
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.data.iter()
    }
}

impl<K: Algebra> NumVector<K> {
    /// Element-wise sum.
    ///
    /// # Errors
    /// [`AlgebraError::LengthMismatch`] unless both operands have the same
    /// length.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(rhs, K::add)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    /// [`AlgebraError::LengthMismatch`] unless both operands have the same
    /// length.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        self.zip_with(rhs, K::sub)
    }

    /// Every element scaled by `k`.
    pub fn scale(&self, k: K::Field) -> Self {
        Self {
            data: self.data.iter().map(|x| x.scale(k)).collect(),
        }
    }

    fn zip_with(
        &self,
        rhs: &Self,
        op: impl Fn(&K, &K) -> K,
    ) -> Result<Self, AlgebraError> {
        if self.len() != rhs.len() {
            return Err(AlgebraError::LengthMismatch {
                left: self.len(),
                right: rhs.len(),
            });
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| op(a, b))
                .collect(),
        })
    }
}

impl<K> Index<usize> for NumVector<K> {
    type Output = K;

    fn index(&self, i: usize) -> &K {
        &self.data[i]
    }
}

impl<K> IndexMut<usize> for NumVector<K> {
    fn index_mut(&mut self, i: usize) -> &mut K {
        &mut self.data[i]
    }
}

impl<K> FromIterator<K> for NumVector<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<K> IntoIterator for NumVector<K> {
    type Item = K;
    type IntoIter = std::vec::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<K: Algebra> Add for &NumVector<K> {
    type Output = NumVector<K>;

    /// # Panics
    /// On operand length mismatch.
    fn add(self, rhs: Self) -> NumVector<K> {
        match self.checked_add(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K: Algebra> Add for NumVector<K> {
    type Output = Self;

    /// # Panics
    /// On operand length mismatch.
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<K: Algebra> Sub for &NumVector<K> {
    type Output = NumVector<K>;

    /// # Panics
    /// On operand length mismatch.
    fn sub(self, rhs: Self) -> NumVector<K> {
        match self.checked_sub(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K: Algebra> Sub for NumVector<K> {
    type Output = Self;

    /// # Panics
    /// On operand length mismatch.
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<K: Algebra> Mul<K::Field> for NumVector<K> {
    type Output = Self;

    fn mul(self, k: K::Field) -> Self {
        self.scale(k)
    }
}

/// Division by `k == 0` keeps IEEE-754 semantics: the elements are scaled
/// by infinity rather than raising an error.
impl<K: Algebra> Div<K::Field> for NumVector<K> {
    type Output = Self;

    fn div(self, k: K::Field) -> Self {
        self.scale(K::Field::one() / k)
    }
}

impl<K: fmt::Display> fmt::Display for NumVector<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for x in &self.data {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{x}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{Complex, Real};
    use approx::assert_abs_diff_eq;

    fn reals(values: &[f64]) -> NumVector<Real<f64>> {
        values.iter().map(|&x| Real::new(x)).collect()
    }

    #[test]
    fn add_then_sub_returns_the_original() {
        let a = reals(&[1.0, 2.0, 3.0]);
        let b = reals(&[0.5, -1.0, 4.0]);
        let roundtrip = &(&a + &b) - &b;
        for i in 0..3 {
            assert_abs_diff_eq!(roundtrip[i].value(), a[i].value(), epsilon = 1e-12);
        }
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let a = reals(&[1.0, 2.0]);
        let b = reals(&[1.0, 2.0, 3.0]);
        assert_eq!(
            a.checked_add(&b),
            Err(AlgebraError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "operand lengths differ: 2 and 3")]
    fn add_operator_panics_on_mismatch() {
        let _ = reals(&[1.0, 2.0]) + reals(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn scalar_ops_apply_to_every_element() {
        let v = NumVector::new(vec![Complex::new(1.0, -2.0), Complex::new(0.0, 3.0)]);
        let scaled = v.clone() * 2.0;
        assert_eq!(scaled[0], Complex::new(2.0, -4.0));
        assert_eq!(scaled[1], Complex::new(0.0, 6.0));

        let halved = v / 2.0;
        assert_eq!(halved[0], Complex::new(0.5, -1.0));
    }

    #[test]
    fn elements_mutate_in_place() {
        let mut v = reals(&[1.0, 2.0]);
        v[1] = Real::new(7.0);
        assert_abs_diff_eq!(v[1].value(), 7.0);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn display_joins_elements_with_newlines() {
        let v = NumVector::new(vec![Complex::new(1.0, 2.0), Complex::new(3.0, -4.0)]);
        assert_eq!(v.to_string(), "1 + 2i\n3 - 4i");
    }
}
