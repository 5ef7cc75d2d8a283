//! Diagnostics and statistics
//!
//! This module provides statistics collection for evolutionary runs and
//! the progress sinks that receive the per-generation best fitness.

pub mod progress;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::genome::traits::Genome;
use crate::population::population::Population;

/// Statistics for a single generation
///
/// Fitness is minimized: `best_fitness` is the lowest value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Best (lowest) fitness in this generation
    pub best_fitness: f64,
    /// Worst (highest) fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Median fitness
    pub median_fitness: f64,
    /// Fitness standard deviation
    pub fitness_std: f64,
    /// Population diversity
    pub diversity: f64,
    /// Timing information
    pub timing: TimingStats,
}

/// Timing statistics
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimingStats {
    /// Time spent on selection, crossover and mutation (ms)
    pub variation_ms: f64,
    /// Time spent on fitness evaluation (ms)
    pub evaluation_ms: f64,
    /// Time spent on replacement (ms)
    pub replacement_ms: f64,
    /// Total generation time (ms)
    pub total_ms: f64,
}

impl TimingStats {
    /// Create new timing stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Set variation time
    pub fn with_variation(mut self, duration: Duration) -> Self {
        self.variation_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Set evaluation time
    pub fn with_evaluation(mut self, duration: Duration) -> Self {
        self.evaluation_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Set replacement time
    pub fn with_replacement(mut self, duration: Duration) -> Self {
        self.replacement_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Set total time
    pub fn with_total(mut self, duration: Duration) -> Self {
        self.total_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population<G>(population: &Population<G>, generation: usize, evaluations: usize) -> Self
    where
        G: Genome,
    {
        let mut fitnesses: Vec<f64> = population.iter().filter_map(|i| i.fitness).collect();

        if fitnesses.is_empty() {
            return Self {
                generation,
                evaluations,
                best_fitness: f64::INFINITY,
                worst_fitness: f64::NEG_INFINITY,
                mean_fitness: 0.0,
                median_fitness: 0.0,
                fitness_std: 0.0,
                diversity: 0.0,
                timing: TimingStats::default(),
            };
        }

        fitnesses.sort_by(|a, b| a.total_cmp(b));

        let best = fitnesses[0];
        let worst = fitnesses[fitnesses.len() - 1];
        let mean = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
        let median = if fitnesses.len() % 2 == 0 {
            (fitnesses[fitnesses.len() / 2 - 1] + fitnesses[fitnesses.len() / 2]) / 2.0
        } else {
            fitnesses[fitnesses.len() / 2]
        };

        Self {
            generation,
            evaluations,
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: mean,
            median_fitness: median,
            fitness_std: population.fitness_std().unwrap_or(0.0),
            diversity: population.diversity(),
            timing: TimingStats::default(),
        }
    }

    /// Set timing information
    pub fn with_timing(mut self, timing: TimingStats) -> Self {
        self.timing = timing;
        self
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the lowest best fitness across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Get the final best fitness
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Get the history of diversity values
    pub fn diversity_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.diversity).collect()
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        let best = self.best_fitness().unwrap_or(f64::INFINITY);
        let final_best = self.final_best_fitness().unwrap_or(f64::INFINITY);

        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best fitness: {:.6}\n\
             - Final best: {:.6}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations(),
            best,
            final_best,
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}

/// Result of an evolution run
#[derive(Clone, Debug)]
pub struct EvolutionResult<G>
where
    G: Genome,
{
    /// The best genome of the final generation
    pub best_genome: G,
    /// Its fitness
    pub best_fitness: f64,
    /// Number of generations completed, including initialization
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl<G> EvolutionResult<G>
where
    G: Genome,
{
    /// Create a new evolution result
    pub fn new(best_genome: G, best_fitness: f64, generations: usize, evaluations: usize) -> Self {
        Self {
            best_genome,
            best_fitness,
            generations,
            evaluations,
            stats: EvolutionStats::new(),
        }
    }

    /// Add statistics to the result
    pub fn with_stats(mut self, stats: EvolutionStats) -> Self {
        self.stats = stats;
        self
    }
}

pub mod prelude {
    pub use super::progress::*;
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats, TimingStats};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::real_vector::RealVector;
    use crate::population::individual::Individual;

    fn create_test_population() -> Population<RealVector> {
        let individuals = vec![
            Individual::with_fitness(RealVector::new(vec![1.0]), 30.0),
            Individual::with_fitness(RealVector::new(vec![2.0]), 10.0),
            Individual::with_fitness(RealVector::new(vec![3.0]), 50.0),
            Individual::with_fitness(RealVector::new(vec![4.0]), 40.0),
            Individual::with_fitness(RealVector::new(vec![5.0]), 20.0),
        ];
        Population::from_individuals(individuals)
    }

    fn stats_with(generation: usize, best: f64, mean: f64) -> GenerationStats {
        GenerationStats {
            generation,
            evaluations: generation * 10,
            best_fitness: best,
            worst_fitness: best * 2.0,
            mean_fitness: mean,
            median_fitness: mean,
            fitness_std: 0.0,
            diversity: 1.0 / (generation + 1) as f64,
            timing: TimingStats::default(),
        }
    }

    #[test]
    fn test_generation_stats_from_population() {
        let pop = create_test_population();
        let stats = GenerationStats::from_population(&pop, 10, 100);

        assert_eq!(stats.generation, 10);
        assert_eq!(stats.evaluations, 100);
        assert_eq!(stats.best_fitness, 10.0);
        assert_eq!(stats.worst_fitness, 50.0);
        assert_eq!(stats.mean_fitness, 30.0);
        assert_eq!(stats.median_fitness, 30.0);
        assert!(stats.fitness_std > 15.0 && stats.fitness_std < 16.0);
    }

    #[test]
    fn test_generation_stats_empty_population() {
        let pop: Population<RealVector> = Population::new();
        let stats = GenerationStats::from_population(&pop, 0, 0);

        assert_eq!(stats.best_fitness, f64::INFINITY);
        assert_eq!(stats.worst_fitness, f64::NEG_INFINITY);
    }

    #[test]
    fn test_evolution_stats_best_is_lowest() {
        let mut stats = EvolutionStats::new();
        for (i, best) in [40.0, 25.0, 31.0].into_iter().enumerate() {
            stats.record(stats_with(i, best, best + 5.0));
        }

        assert_eq!(stats.num_generations(), 3);
        assert_eq!(stats.best_fitness(), Some(25.0));
        assert_eq!(stats.final_best_fitness(), Some(31.0));
        assert_eq!(stats.best_fitness_history(), vec![40.0, 25.0, 31.0]);
        assert_eq!(stats.mean_fitness_history(), vec![45.0, 30.0, 36.0]);
        assert_eq!(stats.diversity_history().len(), 3);
    }

    #[test]
    fn test_evolution_stats_summary() {
        let mut stats = EvolutionStats::new();
        stats.record(stats_with(0, 12.5, 30.0));
        stats.set_termination_reason("generation budget exhausted");
        stats.set_runtime(Duration::from_millis(1234));

        let summary = stats.summary();
        assert!(summary.contains("Generations: 1"));
        assert!(summary.contains("Best fitness: 12.5"));
        assert!(summary.contains("generation budget exhausted"));
        assert!(summary.contains("1234.00ms"));
    }

    #[test]
    fn test_timing_stats() {
        let timing = TimingStats::new()
            .with_variation(Duration::from_millis(20))
            .with_evaluation(Duration::from_millis(100))
            .with_replacement(Duration::from_millis(5))
            .with_total(Duration::from_millis(125));

        assert!((timing.variation_ms - 20.0).abs() < 1e-9);
        assert!((timing.evaluation_ms - 100.0).abs() < 1e-9);
        assert!((timing.replacement_ms - 5.0).abs() < 1e-9);
        assert!((timing.total_ms - 125.0).abs() < 1e-9);
    }
}
