//! Mutation operators
//!
//! Per-gene Gaussian perturbation, optionally clamped to bounds.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::OperatorError;
use crate::genome::bounds::MultiBounds;
use crate::genome::traits::Genome;
use crate::operators::traits::{BoundedMutationOperator, MutationOperator};

/// Gaussian mutation
///
/// Each gene is perturbed with probability `mutation_probability`
/// (default `1/G`) by noise drawn from `N(0, sigma)`.
#[derive(Clone, Debug)]
pub struct GaussianMutation {
    /// Standard deviation of the Gaussian noise
    pub sigma: f64,
    /// Per-gene mutation probability
    pub mutation_probability: Option<f64>,
    normal: Normal<f64>,
}

impl GaussianMutation {
    /// Create a new Gaussian mutation with the given standard deviation
    ///
    /// # Panics
    /// Panics if sigma is negative or not finite
    pub fn new(sigma: f64) -> Self {
        match Self::try_new(sigma) {
            Ok(mutation) => mutation,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible constructor for sigma values coming from configuration
    pub fn try_new(sigma: f64) -> Result<Self, OperatorError> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(OperatorError::InvalidConfiguration(format!(
                "sigma must be finite and non-negative, got {}",
                sigma
            )));
        }
        let normal = Normal::new(0.0, sigma)
            .map_err(|e| OperatorError::InvalidConfiguration(e.to_string()))?;
        Ok(Self {
            sigma,
            mutation_probability: None,
            normal,
        })
    }

    /// Set a fixed mutation probability per gene
    pub fn with_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        self.mutation_probability = Some(probability);
        self
    }

    fn gene_probability(&self, dimension: usize) -> f64 {
        self.mutation_probability
            .unwrap_or_else(|| 1.0 / dimension.max(1) as f64)
    }
}

impl<G: Genome> MutationOperator<G> for GaussianMutation {
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) {
        let prob = self.gene_probability(genome.dimension());

        for gene in genome.genes_mut() {
            if rng.gen::<f64>() < prob {
                *gene += self.normal.sample(rng);
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_probability.unwrap_or(1.0)
    }
}

impl<G: Genome> BoundedMutationOperator<G> for GaussianMutation {
    fn mutate_bounded<R: Rng>(&self, genome: &mut G, bounds: &MultiBounds, rng: &mut R) {
        let prob = self.gene_probability(genome.dimension());

        for (i, gene) in genome.genes_mut().iter_mut().enumerate() {
            if rng.gen::<f64>() < prob {
                *gene += self.normal.sample(rng);
                if let Some(bound) = bounds.get(i) {
                    *gene = bound.clamp(*gene);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::real_vector::RealVector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gaussian_mutation_changes_genome() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = RealVector::zeros(10);
        let mut genome = original.clone();

        let mutation = GaussianMutation::new(0.1).with_probability(1.0);
        mutation.mutate(&mut genome, &mut rng);

        assert_ne!(genome, original);
    }

    #[test]
    fn test_gaussian_mutation_zero_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut genome = RealVector::filled(10, 0.5);

        GaussianMutation::new(1.0)
            .with_probability(0.0)
            .mutate(&mut genome, &mut rng);

        assert_eq!(genome, RealVector::filled(10, 0.5));
    }

    #[test]
    fn test_gaussian_mutation_bounded() {
        let mut rng = StdRng::seed_from_u64(2);
        let bounds = MultiBounds::unit(10);
        let mutation = GaussianMutation::new(10.0).with_probability(1.0);

        for _ in 0..100 {
            let mut genome = RealVector::filled(10, 0.5);
            mutation.mutate_bounded(&mut genome, &bounds, &mut rng);
            assert!(bounds.contains_vec(genome.genes()));
        }
    }

    #[test]
    fn test_default_probability_is_one_over_dimension() {
        let mut rng = StdRng::seed_from_u64(3);
        let mutation = GaussianMutation::new(1.0);
        let trials = 2000;
        let dimension = 20;

        let changed: usize = (0..trials)
            .map(|_| {
                let mut genome = RealVector::zeros(dimension);
                mutation.mutate(&mut genome, &mut rng);
                genome.genes().iter().filter(|&&g| g != 0.0).count()
            })
            .sum();

        // Expect about one changed gene per call.
        let mean = changed as f64 / trials as f64;
        assert!((0.8..1.2).contains(&mean), "mean changed genes {}", mean);
    }

    #[test]
    fn test_invalid_sigma() {
        assert!(GaussianMutation::try_new(-1.0).is_err());
        assert!(GaussianMutation::try_new(f64::NAN).is_err());
        assert!(GaussianMutation::try_new(0.0).is_ok());
    }
}
