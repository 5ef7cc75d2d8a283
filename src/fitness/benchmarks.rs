//! Benchmark fitness functions
//!
//! Cheap analytic problems over `RealVector` for exercising the
//! evolutionary loop without rendering.

use std::f64::consts::PI;

use rand::Rng;

use crate::error::EvoResult;
use crate::fitness::traits::Problem;
use crate::genome::bounds::MultiBounds;
use crate::genome::real_vector::RealVector;
use crate::genome::traits::Genome;
use crate::operators::mutation::GaussianMutation;
use crate::operators::traits::BoundedMutationOperator;

/// Trait for benchmark functions
pub trait BenchmarkFunction: Send + Sync {
    /// Name of the benchmark function
    fn name(&self) -> &'static str;

    /// Dimensionality of the problem
    fn dimension(&self) -> usize;

    /// Search space bounds (min, max)
    fn bounds(&self) -> (f64, f64);

    /// Optimal (minimum) fitness value
    fn optimal_fitness(&self) -> f64;

    /// Evaluate the function (returns value to be MINIMIZED)
    fn evaluate_raw(&self, x: &[f64]) -> f64;

    /// Per-dimension search bounds
    fn multi_bounds(&self) -> MultiBounds {
        let (min, max) = self.bounds();
        MultiBounds::uniform((min, max).into(), self.dimension())
    }
}

fn random_in_bounds<B: BenchmarkFunction, R: Rng>(function: &B, rng: &mut R) -> RealVector {
    let (min, max) = function.bounds();
    RealVector::new((0..function.dimension()).map(|_| rng.gen_range(min..=max)).collect())
}

fn mutate_in_bounds<B: BenchmarkFunction, R: Rng>(
    function: &B,
    mutation: &GaussianMutation,
    genome: &RealVector,
    rng: &mut R,
) -> RealVector {
    let mut child = genome.clone();
    mutation.mutate_bounded(&mut child, &function.multi_bounds(), rng);
    child
}

/// Sphere function: f(x) = Σxᵢ²
///
/// Unimodal, convex, separable. Optimum at origin.
#[derive(Clone, Debug)]
pub struct Sphere {
    dimension: usize,
    mutation: GaussianMutation,
}

impl Sphere {
    /// Create a new Sphere function
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            mutation: GaussianMutation::new(0.5),
        }
    }

    /// Replace the mutation operator
    pub fn with_mutation(mut self, mutation: GaussianMutation) -> Self {
        self.mutation = mutation;
        self
    }
}

impl BenchmarkFunction for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn bounds(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

impl Problem for Sphere {
    type Genome = RealVector;

    fn gene_count(&self) -> usize {
        self.dimension
    }

    fn random_genome<R: Rng>(&self, rng: &mut R) -> RealVector {
        random_in_bounds(self, rng)
    }

    fn mutate<R: Rng>(&self, genome: &RealVector, rng: &mut R) -> EvoResult<RealVector> {
        Ok(mutate_in_bounds(self, &self.mutation, genome, rng))
    }

    fn evaluate(&self, genome: &RealVector) -> EvoResult<f64> {
        Ok(self.evaluate_raw(genome.genes()))
    }
}

/// Rastrigin function: f(x) = 10n + Σ(xᵢ² - 10cos(2πxᵢ))
///
/// Highly multimodal with many local minima. Optimum at origin.
#[derive(Clone, Debug)]
pub struct Rastrigin {
    dimension: usize,
    mutation: GaussianMutation,
}

impl Rastrigin {
    /// Create a new Rastrigin function
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            mutation: GaussianMutation::new(0.5),
        }
    }
}

impl BenchmarkFunction for Rastrigin {
    fn name(&self) -> &'static str {
        "Rastrigin"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn bounds(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn evaluate_raw(&self, x: &[f64]) -> f64 {
        let n = x.len() as f64;
        10.0 * n
            + x.iter()
                .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
                .sum::<f64>()
    }
}

impl Problem for Rastrigin {
    type Genome = RealVector;

    fn gene_count(&self) -> usize {
        self.dimension
    }

    fn random_genome<R: Rng>(&self, rng: &mut R) -> RealVector {
        random_in_bounds(self, rng)
    }

    fn mutate<R: Rng>(&self, genome: &RealVector, rng: &mut R) -> EvoResult<RealVector> {
        Ok(mutate_in_bounds(self, &self.mutation, genome, rng))
    }

    fn evaluate(&self, genome: &RealVector) -> EvoResult<f64> {
        Ok(self.evaluate_raw(genome.genes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sphere_at_optimum() {
        let sphere = Sphere::new(3);
        let optimum = RealVector::zeros(3);
        assert_relative_eq!(sphere.evaluate(&optimum).unwrap(), 0.0);
    }

    #[test]
    fn test_sphere_non_optimum() {
        let sphere = Sphere::new(3);
        let point = RealVector::new(vec![1.0, 2.0, 3.0]);
        assert_relative_eq!(sphere.evaluate(&point).unwrap(), 14.0);
    }

    #[test]
    fn test_sphere_metadata() {
        let sphere = Sphere::new(5);
        assert_eq!(sphere.name(), "Sphere");
        assert_eq!(sphere.dimension(), 5);
        assert_eq!(sphere.gene_count(), 5);
        assert_eq!(sphere.bounds(), (-5.12, 5.12));
        assert_relative_eq!(sphere.optimal_fitness(), 0.0);
    }

    #[test]
    fn test_rastrigin_at_optimum() {
        let rastrigin = Rastrigin::new(3);
        let optimum = RealVector::zeros(3);
        assert_relative_eq!(rastrigin.evaluate(&optimum).unwrap(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rastrigin_at_integer_point() {
        // cos(2π) = 1, so each unit coordinate contributes exactly 1
        let rastrigin = Rastrigin::new(2);
        let point = RealVector::new(vec![1.0, 1.0]);
        assert_relative_eq!(rastrigin.evaluate(&point).unwrap(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_random_genomes_within_bounds() {
        let mut rng = StdRng::seed_from_u64(17);
        let sphere = Sphere::new(8);
        let bounds = sphere.multi_bounds();

        for _ in 0..50 {
            let genome = sphere.random_genome(&mut rng);
            assert_eq!(genome.dimension(), 8);
            assert!(bounds.contains_vec(genome.genes()));
        }
    }

    #[test]
    fn test_mutate_is_pure_and_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        let sphere = Sphere::new(4).with_mutation(GaussianMutation::new(100.0).with_probability(1.0));
        let genome = RealVector::filled(4, 5.0);

        let child = sphere.mutate(&genome, &mut rng).unwrap();

        assert_eq!(genome, RealVector::filled(4, 5.0));
        assert_ne!(child, genome);
        assert!(sphere.multi_bounds().contains_vec(child.genes()));
    }
}
