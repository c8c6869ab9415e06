//! # Position Noise
//!
//! Gaussian perturbation of lattice positions. The random source is always
//! supplied by the caller, so seeded generators give reproducible lattices.

use crate::error::{GenerationError, GenerationResult};
use glam::{DVec2, DVec3};
use rand::RngCore;
use rand_distr::{Distribution, Normal};

/// Independent, zero-mean Gaussian noise drawn from a borrowed generator.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tissue_generation::noise::PositionNoise;
/// use tissue_generation::grids::hexa_grid2d;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut noise = PositionNoise::new(0.05, &mut rng).unwrap();
/// let points = hexa_grid2d(3, 3, 1.0, 1.0, Some(&mut noise));
/// assert_eq!(points.len(), 25);
/// ```
pub struct PositionNoise<'a> {
    normal: Normal<f64>,
    rng: &'a mut dyn RngCore,
}

impl<'a> PositionNoise<'a> {
    /// Creates a noise source with standard deviation `sigma`.
    ///
    /// `sigma` must be finite and non-negative; zero gives an exact lattice
    /// while still consuming draws from `rng`.
    pub fn new(sigma: f64, rng: &'a mut dyn RngCore) -> GenerationResult<Self> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(GenerationError::InvalidNoise(sigma));
        }
        let normal = Normal::new(0.0, sigma).map_err(|_| GenerationError::InvalidNoise(sigma))?;
        Ok(Self { normal, rng })
    }

    /// Standard deviation of every draw.
    pub fn sigma(&self) -> f64 {
        self.normal.std_dev()
    }

    fn draw(&mut self) -> f64 {
        self.normal.sample(&mut *self.rng)
    }

    /// Perturbs both coordinates of a planar point.
    pub fn perturb2(&mut self, point: DVec2) -> DVec2 {
        // x is drawn before y, matching the row-major layout of the points
        let dx = self.draw();
        let dy = self.draw();
        point + DVec2::new(dx, dy)
    }

    /// Perturbs all three coordinates of a point.
    pub fn perturb3(&mut self, point: DVec3) -> DVec3 {
        let dx = self.draw();
        let dy = self.draw();
        let dz = self.draw();
        point + DVec3::new(dx, dy, dz)
    }
}

impl std::fmt::Debug for PositionNoise<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionNoise")
            .field("sigma", &self.sigma())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_negative_sigma_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = PositionNoise::new(-0.1, &mut rng).unwrap_err();
        assert_eq!(err, GenerationError::InvalidNoise(-0.1));
    }

    #[test]
    fn test_non_finite_sigma_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(PositionNoise::new(f64::NAN, &mut rng).is_err());
        assert!(PositionNoise::new(f64::INFINITY, &mut rng).is_err());
    }

    #[test]
    fn test_zero_sigma_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut noise = PositionNoise::new(0.0, &mut rng).unwrap();
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(noise.perturb3(p), p);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let mut a = PositionNoise::new(0.3, &mut rng_a).unwrap();
        let mut b = PositionNoise::new(0.3, &mut rng_b).unwrap();
        for _ in 0..10 {
            assert_eq!(a.perturb2(DVec2::ZERO), b.perturb2(DVec2::ZERO));
        }
    }

    #[test]
    fn test_sigma_accessor() {
        let mut rng = StdRng::seed_from_u64(3);
        let noise = PositionNoise::new(0.25, &mut rng).unwrap();
        assert_eq!(noise.sigma(), 0.25);
    }
}
