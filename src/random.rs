use rand::Rng;

/// Normal-deviate sampling on top of any [`rand::Rng`].
///
/// The core containers never construct randomness of their own;
/// [`crate::Matrix::random`] takes a generator closure, and this extension
/// is the canonical way to make that closure Gaussian:
///
/// ```
/// use numbra::{GaussianRng, Matrix};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let m = Matrix::random(3, 4, || rng.gaussian(0.0, 1.0));
/// assert_eq!(m.dim(), [3, 4]);
/// ```
pub trait GaussianRng: Rng {
    /// One sample from N(`mean`, `std_dev`²) via the Box–Muller transform.
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1: f64 = self.gen_range(0.0..1.0);
        let u2: f64 = self.gen_range(0.0..1.0);
        let std_normal =
            (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).sin();
        mean + std_dev * std_normal
    }
}

impl<R: Rng + ?Sized> GaussianRng for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn seeded_generators_reproduce_the_sequence() {
        let mut a = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(a.gaussian(0.0, 1.0).to_bits(), b.gaussian(0.0, 1.0).to_bits());
        }
    }

    #[test]
    fn sample_moments_are_close_to_the_target() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let n = 100_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.gaussian(2.0, 3.0)).collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>()
            / (n - 1) as f64;

        assert!((mean - 2.0).abs() < 0.05, "sample mean was {mean}");
        assert!((var.sqrt() - 3.0).abs() < 0.05, "sample std dev was {}", var.sqrt());
    }
}
