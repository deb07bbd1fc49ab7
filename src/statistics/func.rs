use num_traits::{Float, FromPrimitive};

/// 1/√(2π)
const INV_SQRT_TWO_PI: f64 = 0.398_942_280_401_432_7;

fn c<F: Float + FromPrimitive>(x: f64) -> F {
    F::from_f64(x).expect("constant fits in float")
}

/// Error function, rational polynomial approximation with a maximal error
/// of 1.2×10⁻⁷.
pub fn erf<F: Float + FromPrimitive>(x: F) -> F {
    let t = F::one() / (F::one() + c::<F>(0.5) * x.abs());

    let tau = t
        * (-(x * x) - c::<F>(1.26551223)
            + c::<F>(1.00002368) * t
            + c::<F>(0.37409196) * t.powi(2)
            + c::<F>(0.09678418) * t.powi(3)
            - c::<F>(0.18628806) * t.powi(4)
            + c::<F>(0.27886807) * t.powi(5)
            - c::<F>(1.13520398) * t.powi(6)
            + c::<F>(1.48851587) * t.powi(7)
            - c::<F>(0.82215223) * t.powi(8)
            + c::<F>(0.17087277) * t.powi(9))
        .exp();

    if x >= F::zero() { F::one() - tau } else { tau - F::one() }
}

/// Probability density of N(`mean`, `std_dev`²) at `value`.
pub fn normal_pdf<F: Float + FromPrimitive>(value: F, mean: F, std_dev: F) -> F {
    let z = (value - mean) / std_dev;
    c::<F>(INV_SQRT_TWO_PI) * (F::one() / std_dev) * (-(z * z) / c::<F>(2.0)).exp()
}

/// Cumulative distribution of N(`mean`, `std_dev`²) at `value`, through
/// [`erf`].
pub fn normal_cdf<F: Float + FromPrimitive>(value: F, mean: F, std_dev: F) -> F {
    let z = (value - mean) / (std_dev * c::<F>(std::f64::consts::SQRT_2));
    c::<F>(0.5) * (F::one() + erf(z))
}

/// Bayesian posterior P(A|B) from the prior P(A), the likelihoods P(B|A)
/// and P(B|¬A), and the prior complement P(¬A).
pub fn bayes_posterior<F: Float>(
    p_a: F,
    p_b_given_a: F,
    p_b_given_not_a: F,
    p_not_a: F,
) -> F {
    (p_b_given_a * p_a) / (p_b_given_a * p_a + p_b_given_not_a * p_not_a)
}

/// Logistic sigmoid 1/(1+e⁻ˣ).
pub fn sigmoid<F: Float>(x: F) -> F {
    F::one() / (F::one() + (-x).exp())
}

/// Softsign x/(1+|x|).
pub fn softsign<F: Float>(x: F) -> F {
    x / (F::one() + x.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{Continuous, ContinuousCDF, Normal};

    #[test]
    fn erf_vanishes_at_zero_and_is_odd() {
        assert_abs_diff_eq!(erf(0.0_f64), 0.0, epsilon = 1.2e-7);
        for &x in &[0.3, 1.0, 2.5] {
            assert_abs_diff_eq!(erf(x), -erf(-x), epsilon = 1e-12);
        }
    }

    #[test]
    fn normal_cdf_matches_the_reference_distribution() {
        let reference = Normal::new(0.0, 1.0).unwrap();
        for &x in &[-3.0, -1.0, -0.2, 0.0, 0.5, 1.5, 2.5] {
            assert_abs_diff_eq!(
                normal_cdf(x, 0.0, 1.0),
                reference.cdf(x),
                epsilon = 1.5e-7
            );
        }
    }

    #[test]
    fn normal_cdf_honors_mean_and_spread() {
        let reference = Normal::new(3.0, 2.0).unwrap();
        for &x in &[-1.0, 2.0, 3.0, 7.5] {
            assert_abs_diff_eq!(
                normal_cdf(x, 3.0, 2.0),
                reference.cdf(x),
                epsilon = 1.5e-7
            );
        }
    }

    #[test]
    fn normal_pdf_matches_the_reference_distribution() {
        let reference = Normal::new(1.0, 0.5).unwrap();
        for &x in &[0.0, 0.5, 1.0, 2.0] {
            assert_abs_diff_eq!(
                normal_pdf(x, 1.0, 0.5),
                reference.pdf(x),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn bayes_posterior_concrete() {
        // Rare condition, sensitive but imperfect test
        let posterior = bayes_posterior(0.01, 0.9, 0.05, 0.99);
        assert_abs_diff_eq!(posterior, 0.009 / 0.0585, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_and_softsign_shapes() {
        assert_abs_diff_eq!(sigmoid(0.0_f64), 0.5);
        assert!(sigmoid(10.0_f64) > 0.999);
        assert_abs_diff_eq!(softsign(0.0_f64), 0.0);
        assert_abs_diff_eq!(softsign(1.0_f64), 0.5);
        assert!(softsign(1e6_f64) < 1.0);
    }
}
