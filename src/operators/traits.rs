//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::{EvoResult, OperatorError};
use crate::genome::bounds::MultiBounds;
use crate::genome::traits::Genome;
use crate::population::population::Population;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual
    ///
    /// `fitness` holds one value per population slot (lower is better).
    /// Returns the index of the selected slot.
    fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> Result<usize, OperatorError>;

    /// Select multiple individuals
    fn select_many<R: Rng>(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, OperatorError> {
        (0..count).map(|_| self.select(fitness, rng)).collect()
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents into one offspring. Parents
/// are borrowed and never modified.
pub trait CrossoverOperator<G: Genome>: Send + Sync {
    /// Apply crossover to two parents and produce one offspring
    fn crossover<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R)
        -> Result<G, OperatorError>;
}

/// Mutation operator trait
///
/// Applies random changes to a genome in place. Callers hand it a genome
/// they own exclusively.
pub trait MutationOperator<G: Genome>: Send + Sync {
    /// Apply mutation to a genome in place
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R);

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64 {
        1.0
    }
}

/// Bounded mutation operator trait
///
/// Mutation operator that respects bounds on gene values.
pub trait BoundedMutationOperator<G: Genome>: MutationOperator<G> {
    /// Apply bounded mutation to a genome
    fn mutate_bounded<R: Rng>(&self, genome: &mut G, bounds: &MultiBounds, rng: &mut R);
}

/// Replacement operator trait
///
/// Forms the next generation from the current population and its
/// evaluated offspring. Implementations are pure functions of their inputs.
pub trait ReplacementOperator<G: Genome>: Send + Sync {
    /// Build the next population
    fn replace(
        &self,
        current: &Population<G>,
        offspring: Population<G>,
    ) -> EvoResult<Population<G>>;
}
