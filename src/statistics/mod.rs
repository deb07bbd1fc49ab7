//! Descriptive statistics over plain ordered sequences of real numbers.
//!
//! Estimators are small stateless (or parameter-only) values implementing
//! [`Statistic`]; they consume anything slice-like and have no dependency
//! on the matrix/vector containers.

mod func;

pub use func::{bayes_posterior, erf, normal_cdf, normal_pdf, sigmoid, softsign};

use num_traits::{Float, FromPrimitive};

/// An estimator producing a value of type `T` from data of type `D`.
pub trait Statistic<D, T> {
    /// Evaluates the estimator on `data`.
    fn compute(&self, data: &D) -> T;
}

/// Sample median: midpoint of the sorted data, averaging the two central
/// values for even sample sizes.
///
/// Returns NaN on empty input. Input must not contain NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

/// First, second and third quartile, as `[Q1, Q2, Q3]`.
///
/// Q1/Q3 are medians of the lower/upper halves of the sorted data; for odd
/// sample sizes the upper half keeps the central value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quartiles;

/// Unbiased sample variance (divisor n − 1) by Welford's recurrence.
///
/// Returns NaN for fewer than two observations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleVariance;

/// Unbiased sample standard deviation, the square root of
/// [`SampleVariance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStdDev;

fn sorted_copy<F: Float>(data: &[F]) -> Vec<F> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("data must not contain NaN"));
    sorted
}

fn median_of_sorted<F: Float + FromPrimitive>(sorted: &[F]) -> F {
    let n = sorted.len();
    if n == 0 {
        return F::nan();
    }
    if n % 2 == 0 {
        let bottom = sorted[n / 2 - 1];
        let top = sorted[n / 2];
        (bottom + top) / F::from_usize(2).expect("2 fits in float")
    } else {
        sorted[n / 2]
    }
}

impl<D, F> Statistic<D, F> for Median
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> F {
        median_of_sorted(&sorted_copy(data.as_ref()))
    }
}

impl<D, F> Statistic<D, [F; 3]> for Quartiles
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> [F; 3] {
        let sorted = sorted_copy(data.as_ref());
        let half = sorted.len() / 2;
        [
            median_of_sorted(&sorted[..half]),
            median_of_sorted(&sorted),
            median_of_sorted(&sorted[half..]),
        ]
    }
}

impl<D, F> Statistic<D, F> for SampleVariance
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> F {
        let slice = data.as_ref();
        if slice.len() < 2 {
            return F::nan();
        }

        // Welford's recurrence: numerically stable single pass
        let mut mean = F::zero();
        let mut sq_sum = F::zero();
        for (k, &x) in slice.iter().enumerate() {
            let previous_mean = mean;
            let count = F::from_usize(k + 1).expect("usize fits in float");
            mean = mean + (x - previous_mean) / count;
            sq_sum = sq_sum + (x - previous_mean) * (x - mean);
        }

        sq_sum / F::from_usize(slice.len() - 1).expect("usize fits in float")
    }
}

impl<D, F> Statistic<D, F> for SampleStdDev
where
    D: AsRef<[F]>,
    F: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> F {
        SampleVariance.compute(data).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn median_of_odd_and_even_samples() {
        let odd = [3.0, 1.0, 2.0];
        let even = [4.0, 1.0, 3.0, 2.0];
        assert_abs_diff_eq!(Median.compute(&odd), 2.0);
        assert_abs_diff_eq!(Median.compute(&even), 2.5);
    }

    #[test]
    fn median_of_empty_is_nan() {
        let empty: Vec<f64> = Vec::new();
        assert!(Median.compute(&empty).is_nan());
    }

    #[test]
    fn quartiles_split_the_sorted_data() {
        let data = [6.0, 7.0, 15.0, 36.0, 39.0, 40.0, 41.0, 42.0];
        let [q1, q2, q3] = Quartiles.compute(&data);
        assert_abs_diff_eq!(q1, 11.0);
        assert_abs_diff_eq!(q2, 37.5);
        assert_abs_diff_eq!(q3, 40.5);
    }

    #[test]
    fn quartiles_of_odd_sample_keep_the_center_in_the_upper_half() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let [q1, q2, q3] = Quartiles.compute(&data);
        assert_abs_diff_eq!(q1, 1.5);
        assert_abs_diff_eq!(q2, 3.0);
        assert_abs_diff_eq!(q3, 4.0);
    }

    #[test]
    fn sample_variance_concrete() {
        // mean 2.5, squared deviations sum 5.0, divisor 3
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_abs_diff_eq!(SampleVariance.compute(&data), 5.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            SampleStdDev.compute(&data),
            (5.0_f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn variance_needs_two_observations() {
        assert!(SampleVariance.compute(&[1.0_f64]).is_nan());
    }
}
