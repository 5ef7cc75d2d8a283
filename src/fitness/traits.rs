//! Problem traits
//!
//! This module defines the candidate capability the evolutionary loop
//! consumes: construct a random genome, derive a mutated copy, evaluate
//! fitness, and optionally render.

use rand::Rng;

use crate::error::EvoResult;
use crate::genome::traits::Genome;
use crate::render::raster::Raster;

/// Problem definition trait
///
/// Fitness is an error measure: lower is better.
pub trait Problem: Send + Sync {
    /// The genome type being evolved
    type Genome: Genome;

    /// Number of genes in every genome of this problem
    fn gene_count(&self) -> usize;

    /// Construct a fresh random genome
    fn random_genome<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Produce a mutated copy of `genome`
    ///
    /// The input is never modified.
    fn mutate<R: Rng>(&self, genome: &Self::Genome, rng: &mut R) -> EvoResult<Self::Genome>;

    /// Evaluate fitness (lower = better)
    ///
    /// The loop evaluates every offspring, copies included, so a
    /// non-deterministic problem may rescore an unchanged genome.
    fn evaluate(&self, genome: &Self::Genome) -> EvoResult<f64>;
}

/// A problem whose genomes can be drawn to a raster
pub trait RenderProblem: Problem {
    /// Render a genome
    fn render(&self, genome: &Self::Genome) -> EvoResult<Raster>;
}

impl<P: Problem> Problem for &P {
    type Genome = P::Genome;

    fn gene_count(&self) -> usize {
        (**self).gene_count()
    }

    fn random_genome<R: Rng>(&self, rng: &mut R) -> Self::Genome {
        (**self).random_genome(rng)
    }

    fn mutate<R: Rng>(&self, genome: &Self::Genome, rng: &mut R) -> EvoResult<Self::Genome> {
        (**self).mutate(genome, rng)
    }

    fn evaluate(&self, genome: &Self::Genome) -> EvoResult<f64> {
        (**self).evaluate(genome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvolutionError;
    use crate::genome::real_vector::RealVector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Counts genes above a threshold; mutation flips the first gene.
    struct Threshold;

    impl Problem for Threshold {
        type Genome = RealVector;

        fn gene_count(&self) -> usize {
            3
        }

        fn random_genome<R: Rng>(&self, rng: &mut R) -> RealVector {
            RealVector::new((0..3).map(|_| rng.gen()).collect())
        }

        fn mutate<R: Rng>(&self, genome: &RealVector, _rng: &mut R) -> EvoResult<RealVector> {
            let mut child = genome.clone();
            child.set_gene(0, 1.0 - genome[0])?;
            Ok(child)
        }

        fn evaluate(&self, genome: &RealVector) -> EvoResult<f64> {
            if genome.genes().iter().any(|g| g.is_nan()) {
                return Err(EvolutionError::FitnessEvaluation("nan gene".into()));
            }
            Ok(genome.genes().iter().filter(|&&g| g > 0.5).count() as f64)
        }
    }

    #[test]
    fn test_mutate_leaves_input_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let genome = RealVector::new(vec![0.2, 0.9, 0.1]);
        let child = Threshold.mutate(&genome, &mut rng).unwrap();

        assert_eq!(genome.genes(), &[0.2, 0.9, 0.1]);
        assert_eq!(child.genes(), &[0.8, 0.9, 0.1]);
    }

    #[test]
    fn test_reference_forwards() {
        let problem = &Threshold;
        let genome = RealVector::new(vec![0.7, 0.9, 0.1]);
        assert_eq!(problem.gene_count(), 3);
        assert_eq!(problem.evaluate(&genome).unwrap(), 2.0);
        assert!(problem.evaluate(&RealVector::filled(3, f64::NAN)).is_err());
    }
}
