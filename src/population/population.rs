//! Population type
//!
//! This module provides the Population container type: an ordered,
//! unsorted collection of individuals plus the generation it belongs to.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{EvoResult, EvolutionError};
use crate::fitness::traits::Problem;
use crate::genome::traits::Genome;
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug, PartialEq)]
pub struct Population<G>
where
    G: Genome,
{
    /// The individuals in this population
    individuals: Vec<Individual<G>>,
    /// Current generation number
    generation: usize,
}

impl<G> Population<G>
where
    G: Genome,
{
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
            generation: 0,
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual<G>>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a population of `size` fresh, unevaluated random genomes
    pub fn random<P, R>(size: usize, problem: &P, rng: &mut R) -> Self
    where
        P: Problem<Genome = G>,
        R: Rng,
    {
        let individuals = (0..size)
            .map(|_| Individual::new(problem.random_genome(rng)))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual<G>> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual<G>) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual<G>> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual<G>] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual<G>> {
        self.individuals
    }

    /// Index of the lowest-fitness individual, first one on ties
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, individual) in self.individuals.iter().enumerate() {
            let f = individual.rank_fitness();
            match best {
                Some((_, bf)) if !(f < bf) => {}
                _ => best = Some((i, f)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Get the best (lowest-fitness) individual
    pub fn best(&self) -> Option<&Individual<G>> {
        self.best_index().map(|i| &self.individuals[i])
    }

    /// Index of the highest-fitness individual, first one on ties
    pub fn worst_index(&self) -> Option<usize> {
        let mut worst: Option<(usize, f64)> = None;
        for (i, individual) in self.individuals.iter().enumerate() {
            let f = individual.rank_fitness();
            match worst {
                Some((_, wf)) if !(f > wf) => {}
                _ => worst = Some((i, f)),
            }
        }
        worst.map(|(i, _)| i)
    }

    /// Get the worst (highest-fitness) individual
    pub fn worst(&self) -> Option<&Individual<G>> {
        self.worst_index().map(|i| &self.individuals[i])
    }

    /// Fitness of every slot in order, for selection
    ///
    /// Fails on the first unevaluated individual.
    pub fn fitness_values(&self) -> EvoResult<Vec<f64>> {
        self.individuals
            .iter()
            .enumerate()
            .map(|(i, ind)| ind.fitness.ok_or(EvolutionError::UnevaluatedIndividual(i)))
            .collect()
    }

    /// Check if all individuals have been evaluated
    pub fn all_evaluated(&self) -> bool {
        self.count_evaluated() == self.individuals.len()
    }

    /// Count the number of evaluated individuals
    pub fn count_evaluated(&self) -> usize {
        self.individuals.iter().filter(|i| i.is_evaluated()).count()
    }

    /// Evaluate every unevaluated individual (sequential)
    ///
    /// Returns the number of evaluations performed. The first evaluation
    /// error aborts and is returned unchanged.
    pub fn evaluate<P>(&mut self, problem: &P) -> EvoResult<usize>
    where
        P: Problem<Genome = G>,
    {
        let mut evaluated = 0;
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                let f = problem.evaluate(&individual.genome)?;
                individual.set_fitness(f);
                evaluated += 1;
            }
        }
        Ok(evaluated)
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();

        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<f64>() / evaluated.len() as f64)
        }
    }

    /// Compute fitness standard deviation
    pub fn fitness_std(&self) -> Option<f64> {
        let mean = self.mean_fitness()?;
        let evaluated: Vec<f64> = self.individuals.iter().filter_map(|i| i.fitness).collect();

        if evaluated.len() < 2 {
            return None;
        }

        let variance = evaluated.iter().map(|f| (f - mean).powi(2)).sum::<f64>()
            / (evaluated.len() - 1) as f64;
        Some(variance.sqrt())
    }

    /// Compute population diversity (average pairwise distance)
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0.0;
        let mut count = 0;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.individuals[i]
                    .genome
                    .distance(&self.individuals[j].genome);
                count += 1;
            }
        }

        total_distance / count as f64
    }
}

/// Parallel evaluation support (requires `parallel` feature)
#[cfg(feature = "parallel")]
impl<G> Population<G>
where
    G: Genome,
{
    /// Evaluate every unevaluated individual (parallel)
    pub fn evaluate_parallel<P>(&mut self, problem: &P) -> EvoResult<usize>
    where
        P: Problem<Genome = G>,
    {
        self.individuals
            .par_iter_mut()
            .filter(|i| !i.is_evaluated())
            .map(|individual| {
                let f = problem.evaluate(&individual.genome)?;
                individual.set_fitness(f);
                Ok(1)
            })
            .try_reduce(|| 0, |a, b| Ok(a + b))
    }
}

/// Sequential fallback for parallel evaluation (when `parallel` feature is disabled)
#[cfg(not(feature = "parallel"))]
impl<G> Population<G>
where
    G: Genome,
{
    /// Evaluate every unevaluated individual (sequential fallback)
    pub fn evaluate_parallel<P>(&mut self, problem: &P) -> EvoResult<usize>
    where
        P: Problem<Genome = G>,
    {
        self.evaluate(problem)
    }
}

impl<G> Default for Population<G>
where
    G: Genome,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G> FromIterator<Individual<G>> for Population<G>
where
    G: Genome,
{
    fn from_iter<I: IntoIterator<Item = Individual<G>>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}

impl<G> std::ops::Index<usize> for Population<G>
where
    G: Genome,
{
    type Output = Individual<G>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::benchmarks::Sphere;
    use crate::genome::real_vector::RealVector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn with_fitness(values: &[f64]) -> Population<RealVector> {
        values
            .iter()
            .enumerate()
            .map(|(i, &f)| Individual::with_fitness(RealVector::new(vec![i as f64]), f))
            .collect()
    }

    #[test]
    fn test_random_population() {
        let mut rng = StdRng::seed_from_u64(0);
        let pop = Population::random(12, &Sphere::new(4), &mut rng);

        assert_eq!(pop.len(), 12);
        assert_eq!(pop.generation(), 0);
        assert_eq!(pop.count_evaluated(), 0);
        assert!(pop.iter().all(|i| i.genome.dimension() == 4));
    }

    #[test]
    fn test_evaluate_counts_only_unevaluated() {
        let mut rng = StdRng::seed_from_u64(0);
        let problem = Sphere::new(3);
        let mut pop = Population::random(5, &problem, &mut rng);
        pop.push(Individual::with_fitness(RealVector::zeros(3), 0.0));

        assert_eq!(pop.evaluate(&problem).unwrap(), 5);
        assert!(pop.all_evaluated());
        assert_eq!(pop.evaluate(&problem).unwrap(), 0);
    }

    #[test]
    fn test_evaluate_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(4);
        let problem = Sphere::new(6);
        let mut seq = Population::random(20, &problem, &mut rng);
        let mut par = seq.clone();

        seq.evaluate(&problem).unwrap();
        assert_eq!(par.evaluate_parallel(&problem).unwrap(), 20);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_best_and_worst_index() {
        let pop = with_fitness(&[5.0, 3.0, 8.0, 2.0]);
        assert_eq!(pop.best_index(), Some(3));
        assert_eq!(pop.worst_index(), Some(2));
        assert_eq!(pop.best().unwrap().fitness, Some(2.0));
        assert_eq!(pop.worst().unwrap().fitness, Some(8.0));
    }

    #[test]
    fn test_best_and_worst_ties_take_first() {
        let pop = with_fitness(&[4.0, 1.0, 9.0, 1.0, 9.0]);
        assert_eq!(pop.best_index(), Some(1));
        assert_eq!(pop.worst_index(), Some(2));
    }

    #[test]
    fn test_empty_population_has_no_best() {
        let pop: Population<RealVector> = Population::new();
        assert_eq!(pop.best_index(), None);
        assert_eq!(pop.worst_index(), None);
        assert!(pop.mean_fitness().is_none());
    }

    #[test]
    fn test_fitness_values_requires_evaluation() {
        let mut pop = with_fitness(&[1.0, 2.0]);
        assert_eq!(pop.fitness_values().unwrap(), vec![1.0, 2.0]);

        pop.push(Individual::new(RealVector::zeros(1)));
        assert!(matches!(
            pop.fitness_values(),
            Err(EvolutionError::UnevaluatedIndividual(2))
        ));
    }

    #[test]
    fn test_statistics() {
        let pop = with_fitness(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(pop.mean_fitness(), Some(30.0));
        let std = pop.fitness_std().unwrap();
        assert!(std > 15.0 && std < 16.0);
        // genomes are [0], [1], ..., [4]
        assert!((pop.diversity() - 2.0).abs() < 1e-12);
    }
}
