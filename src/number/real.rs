use std::fmt;

use num_traits::Float;

use super::Algebra;
use crate::error::AlgebraError;

/// Real scalar, the arity-1 number kind.
///
/// Exists so plain scalars can live in the same generic containers as
/// higher-arity kinds; on its own it is a thin wrapper around `F`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Real<F = f64>(pub F);

impl<F: Float> Real<F> {
    /// Wraps a scalar value.
    pub fn new(value: F) -> Self {
        Self(value)
    }

    /// The wrapped scalar.
    pub fn value(&self) -> F {
        self.0
    }
}

impl<F: Float> Algebra for Real<F> {
    type Field = F;

    const ARITY: usize = 1;
    const KIND: &'static str = "real";

    fn components(&self) -> &[F] {
        std::slice::from_ref(&self.0)
    }

    fn from_components(components: &[F]) -> Result<Self, AlgebraError> {
        match components {
            [value] => Ok(Self(*value)),
            _ => Err(AlgebraError::MalformedConstruction {
                reason: format!(
                    "real numbers have 1 component, got {}",
                    components.len()
                ),
            }),
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self(self.0 - rhs.0)
    }

    fn scale(&self, k: F) -> Self {
        Self(self.0 * k)
    }

    fn reciprocal(&self, k: F) -> Result<Self, AlgebraError> {
        if self.0 == F::zero() {
            return Err(AlgebraError::Singularity);
        }
        Ok(Self(k / self.0))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        Ok(Self(self.0 * rhs.0))
    }
}

impl<F: Float + fmt::Display> fmt::Display for Real<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
