//! Generic number kinds.
//!
//! # Motivation
//! A number kind (real scalar, complex, …) is a fixed-arity tuple of real
//! components together with the algebraic operations that make those
//! components behave like one number. Containers such as [`NumVector`]
//! store a single kind and delegate all arithmetic to it, so the same
//! container code serves every kind without runtime dispatch.
//!
//! The scalar field is an associated type rather than a parameter: a kind
//! determines its own field, and downstream containers stay generic over
//! the kind alone.

mod complex;
mod real;
mod vector;

pub use complex::Complex;
pub use real::Real;
pub use vector::NumVector;

use num_traits::Float;

use crate::error::AlgebraError;

/// Algebraic capability of a number kind.
///
/// Implementations are componentwise over a fixed-length slice of
/// [`Self::Field`] values; [`Self::ARITY`] is that length and never changes
/// over the lifetime of a value.
pub trait Algebra: Sized + Clone {
    /// Scalar field the components live in.
    type Field: Float;

    /// Fixed component count of this kind.
    const ARITY: usize;

    /// Kind name used in error messages.
    const KIND: &'static str;

    /// Borrow the raw components; the slice has length [`Self::ARITY`].
    fn components(&self) -> &[Self::Field];

    /// Rebuild a value from raw components.
    ///
    /// # Errors
    /// [`AlgebraError::MalformedConstruction`] unless
    /// `components.len() == Self::ARITY`.
    fn from_components(components: &[Self::Field]) -> Result<Self, AlgebraError>;

    /// Componentwise sum of `self` and `rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// Componentwise difference of `self` and `rhs`.
    fn sub(&self, rhs: &Self) -> Self;

    /// Componentwise multiple of `self` by the scalar `k`.
    fn scale(&self, k: Self::Field) -> Self;

    /// The scalar `k` divided by this value.
    ///
    /// # Errors
    /// [`AlgebraError::Singularity`] when the value has zero magnitude.
    fn reciprocal(&self, k: Self::Field) -> Result<Self, AlgebraError>;

    /// Full product of two values of this kind.
    ///
    /// Kinds without a natural product keep the default body.
    ///
    /// # Errors
    /// [`AlgebraError::UndefinedOperation`] unless the kind overrides this.
    fn multiply(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        let _ = rhs;
        Err(AlgebraError::UndefinedOperation {
            kind: Self::KIND,
            operation: "multiply",
        })
    }
}
