//! Individual wrapper type
//!
//! This module provides the Individual type that wraps a genome with its fitness.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::genome::traits::Genome;

/// An individual in the population
///
/// Wraps a genome with its computed fitness value. Fitness is an error
/// measure: lower is better.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Individual<G>
where
    G: Genome,
{
    /// The genome of this individual
    pub genome: G,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<f64>,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl<G> Individual<G>
where
    G: Genome,
{
    /// Create a new individual with an unevaluated genome
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
            birth_generation: 0,
        }
    }

    /// Create a new individual with a known fitness
    pub fn with_fitness(genome: G, fitness: f64) -> Self {
        Self {
            genome,
            fitness: Some(fitness),
            birth_generation: 0,
        }
    }

    /// Create a new individual with birth generation
    pub fn with_generation(genome: G, generation: usize) -> Self {
        Self {
            genome,
            fitness: None,
            birth_generation: generation,
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Fitness for ranking; unevaluated individuals rank last
    pub fn rank_fitness(&self) -> f64 {
        self.fitness.unwrap_or(f64::INFINITY)
    }

    /// Set the fitness value
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Take the genome out of this individual
    pub fn into_genome(self) -> G {
        self.genome
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Check if this individual is strictly better (lower fitness) than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1 < f2,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => false,
        }
    }

    /// Age of this individual (generations since birth)
    pub fn age(&self, current_generation: usize) -> usize {
        current_generation.saturating_sub(self.birth_generation)
    }
}

impl<G> PartialEq for Individual<G>
where
    G: Genome,
{
    fn eq(&self, other: &Self) -> bool {
        self.genome == other.genome && self.fitness == other.fitness
    }
}

impl<G> PartialOrd for Individual<G>
where
    G: Genome,
{
    /// Orders by fitness; `Less` means better
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.rank_fitness().partial_cmp(&other.rank_fitness())
    }
}
