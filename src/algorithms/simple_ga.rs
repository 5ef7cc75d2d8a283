//! Simple Genetic Algorithm
//!
//! This module implements a generational genetic algorithm with tournament
//! selection, single-point crossover, problem-defined mutation and
//! single-elite replacement.
//!
//! Fitness is minimized. One run passes through
//! `Uninitialized → Initialized → Running → Terminated` and performs
//! `number_of_generations + 1` generations, counting the initial
//! population as generation 0.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::diagnostics::progress::{NullSink, ProgressSink};
use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats, TimingStats};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::traits::Problem;
use crate::operators::crossover::SinglePointCrossover;
use crate::operators::replacement::ElitistReplacement;
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{CrossoverOperator, ReplacementOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Configuration for the Simple GA
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleGAConfig {
    /// Population size
    pub population_size: usize,
    /// Generations to run after the initial one
    pub number_of_generations: usize,
    /// Probability that an offspring is replaced by a mutated copy
    pub mutation_probability: f64,
    /// Probability that an offspring comes from crossover
    pub crossover_probability: f64,
    /// Challengers drawn per tournament
    pub tournament_size: usize,
    /// Whether to evaluate offspring in parallel
    pub parallel_evaluation: bool,
}

impl Default for SimpleGAConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            number_of_generations: 1000,
            mutation_probability: 0.25,
            crossover_probability: 0.75,
            tournament_size: 3,
            parallel_evaluation: false,
        }
    }
}

impl SimpleGAConfig {
    /// Check every parameter, failing on the first invalid one
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "population_size must be at least 1".to_string(),
            ));
        }
        check_probability("mutation_probability", self.mutation_probability)?;
        check_probability("crossover_probability", self.crossover_probability)?;
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(EvolutionError::Configuration(format!(
                "tournament_size must be in [1, {}], got {}",
                self.population_size, self.tournament_size
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> EvoResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(EvolutionError::Configuration(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Lifecycle of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    /// No population yet
    Uninitialized,
    /// Generation 0 evaluated, no offspring produced yet
    Initialized,
    /// At least one offspring generation completed
    Running,
    /// Generation budget exhausted
    Terminated,
}

/// Builder for SimpleGA
pub struct SimpleGABuilder<P, K = NullSink> {
    config: SimpleGAConfig,
    problem: Option<P>,
    sink: K,
}

impl<P> SimpleGABuilder<P, NullSink> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: SimpleGAConfig::default(),
            problem: None,
            sink: NullSink,
        }
    }
}

impl<P> Default for SimpleGABuilder<P, NullSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, K> SimpleGABuilder<P, K> {
    /// Replace the whole configuration
    pub fn config(mut self, config: SimpleGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the number of generations after initialization
    pub fn number_of_generations(mut self, generations: usize) -> Self {
        self.config.number_of_generations = generations;
        self
    }

    /// Set the mutation probability
    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.config.mutation_probability = probability;
        self
    }

    /// Set the crossover probability
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.config.crossover_probability = probability;
        self
    }

    /// Set the tournament size
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.config.tournament_size = size;
        self
    }

    /// Enable or disable parallel evaluation
    pub fn parallel_evaluation(mut self, enabled: bool) -> Self {
        self.config.parallel_evaluation = enabled;
        self
    }

    /// Set the problem to optimize
    pub fn problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    /// Set the progress sink
    pub fn sink<NewK>(self, sink: NewK) -> SimpleGABuilder<P, NewK>
    where
        NewK: ProgressSink,
    {
        SimpleGABuilder {
            config: self.config,
            problem: self.problem,
            sink,
        }
    }
}

impl<P, K> SimpleGABuilder<P, K>
where
    P: Problem,
    K: ProgressSink,
{
    /// Build the SimpleGA instance
    pub fn build(self) -> Result<SimpleGA<P, K>, EvolutionError> {
        self.config.validate()?;

        let problem = self.problem.ok_or_else(|| {
            EvolutionError::Configuration("Problem must be specified".to_string())
        })?;
        if problem.gene_count() == 0 {
            return Err(EvolutionError::Configuration(
                "problem must have at least one gene".to_string(),
            ));
        }

        Ok(SimpleGA {
            selection: TournamentSelection::new(self.config.tournament_size),
            crossover: SinglePointCrossover::new(),
            replacement: ElitistReplacement::new(),
            config: self.config,
            problem,
            sink: self.sink,
            population: Population::new(),
            phase: RunPhase::Uninitialized,
            generation: 0,
            current_best: None,
            evaluations: 0,
            stats: EvolutionStats::new(),
            started: None,
        })
    }
}

/// Simple Genetic Algorithm
///
/// Owns the population for the whole run. Randomness is supplied by the
/// caller on every call, so a seeded generator replays a run exactly.
pub struct SimpleGA<P, K = NullSink>
where
    P: Problem,
{
    config: SimpleGAConfig,
    problem: P,
    sink: K,
    selection: TournamentSelection,
    crossover: SinglePointCrossover,
    replacement: ElitistReplacement,
    population: Population<P::Genome>,
    phase: RunPhase,
    generation: usize,
    current_best: Option<Individual<P::Genome>>,
    evaluations: usize,
    stats: EvolutionStats,
    started: Option<Instant>,
}

impl<P> SimpleGA<P, NullSink>
where
    P: Problem,
{
    /// Create a builder for SimpleGA
    pub fn builder() -> SimpleGABuilder<P, NullSink> {
        SimpleGABuilder::new()
    }
}

impl<P, K> SimpleGA<P, K>
where
    P: Problem,
    K: ProgressSink,
{
    /// Current lifecycle phase
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// The generation counter: the index of the next generation to run
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The current population
    pub fn population(&self) -> &Population<P::Genome> {
        &self.population
    }

    /// Best individual of the most recent generation
    pub fn current_best(&self) -> Option<&Individual<P::Genome>> {
        self.current_best.as_ref()
    }

    /// Fitness evaluations performed so far
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Statistics collected so far
    pub fn stats(&self) -> &EvolutionStats {
        &self.stats
    }

    /// The progress sink
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Take the progress sink out of the run
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// The problem being optimized
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// The run configuration
    pub fn config(&self) -> &SimpleGAConfig {
        &self.config
    }

    /// Create and evaluate generation 0
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) -> EvoResult<()> {
        if self.phase != RunPhase::Uninitialized {
            return Err(EvolutionError::InvalidState(format!(
                "cannot initialize a run in phase {:?}",
                self.phase
            )));
        }
        self.started = Some(Instant::now());
        info!(
            population_size = self.config.population_size,
            number_of_generations = self.config.number_of_generations,
            gene_count = self.problem.gene_count(),
            "initializing population"
        );

        let mut population = Population::random(self.config.population_size, &self.problem, rng);
        let eval_start = Instant::now();
        let evaluated = self.evaluate(&mut population)?;
        let timing = TimingStats::new()
            .with_evaluation(eval_start.elapsed())
            .with_total(eval_start.elapsed());

        self.population = population;
        self.evaluations += evaluated;
        self.generation = 0;
        self.phase = RunPhase::Initialized;
        self.finish_generation(timing)
    }

    /// Produce one offspring population from the current one
    ///
    /// For every slot: a tournament picks the first parent; with the
    /// crossover probability a second tournament and single-point crossover
    /// produce the child, otherwise the child is a copy of the first
    /// parent; with the mutation probability the child is replaced by the
    /// problem's mutated copy. Every child is returned unevaluated.
    pub fn breed<R: Rng>(&self, rng: &mut R) -> EvoResult<Population<P::Genome>> {
        let fitness = self.population.fitness_values()?;
        let mut offspring = Population::with_capacity(self.population.len());

        for _ in 0..self.population.len() {
            let p1 = self.selection.select(&fitness, rng)?;
            let mut child = if rng.gen::<f64>() < self.config.crossover_probability {
                let p2 = self.selection.select(&fitness, rng)?;
                let genome = self.crossover.crossover(
                    &self.population[p1].genome,
                    &self.population[p2].genome,
                    rng,
                )?;
                Individual::with_generation(genome, self.generation)
            } else {
                Individual::with_generation(self.population[p1].genome.clone(), self.generation)
            };

            if rng.gen::<f64>() < self.config.mutation_probability {
                let genome = self.problem.mutate(&child.genome, rng)?;
                child = Individual::with_generation(genome, self.generation);
            }
            offspring.push(child);
        }
        Ok(offspring)
    }

    /// Run one generation
    ///
    /// The run moves to `Terminated` as soon as the last generation of the
    /// budget completes. Stepping a terminated run returns `false` without
    /// doing any work.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation))]
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> EvoResult<bool> {
        match self.phase {
            RunPhase::Uninitialized => {
                return Err(EvolutionError::InvalidState(
                    "run must be initialized before stepping".to_string(),
                ))
            }
            RunPhase::Terminated => return Ok(false),
            RunPhase::Initialized | RunPhase::Running => {}
        }

        let gen_start = Instant::now();
        let mut offspring = self.breed(rng)?;
        let variation_time = gen_start.elapsed();

        let eval_start = Instant::now();
        let evaluated = self.evaluate(&mut offspring)?;
        self.evaluations += evaluated;
        let eval_time = eval_start.elapsed();

        let replace_start = Instant::now();
        let mut next = self.replacement.replace(&self.population, offspring)?;
        next.set_generation(self.generation);
        self.population = next;
        let replace_time = replace_start.elapsed();

        let timing = TimingStats::new()
            .with_variation(variation_time)
            .with_evaluation(eval_time)
            .with_replacement(replace_time)
            .with_total(gen_start.elapsed());
        self.phase = RunPhase::Running;
        self.finish_generation(timing)?;
        Ok(true)
    }

    /// Run to completion and return the result
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> EvoResult<EvolutionResult<P::Genome>> {
        match self.phase {
            RunPhase::Terminated => {
                return Err(EvolutionError::InvalidState(
                    "run has already terminated".to_string(),
                ))
            }
            RunPhase::Uninitialized => self.initialize(rng)?,
            RunPhase::Initialized | RunPhase::Running => {}
        }

        while self.step(rng)? {}

        let best = self
            .current_best
            .clone()
            .ok_or(EvolutionError::EmptyPopulation)?;
        let best_fitness = best.rank_fitness();
        Ok(EvolutionResult::new(
            best.into_genome(),
            best_fitness,
            self.generation,
            self.evaluations,
        )
        .with_stats(self.stats.clone()))
    }

    fn evaluate(&self, population: &mut Population<P::Genome>) -> EvoResult<usize> {
        if self.config.parallel_evaluation {
            population.evaluate_parallel(&self.problem)
        } else {
            population.evaluate(&self.problem)
        }
    }

    /// Refresh the best, report progress and advance the counter,
    /// terminating once the counter passes the budget
    fn finish_generation(&mut self, timing: TimingStats) -> EvoResult<()> {
        let best = self
            .population
            .best()
            .ok_or(EvolutionError::EmptyPopulation)?
            .clone();
        let best_fitness = best.rank_fitness();
        self.current_best = Some(best);

        self.sink.record(self.generation, best_fitness);
        self.stats.record(
            GenerationStats::from_population(&self.population, self.generation, self.evaluations)
                .with_timing(timing),
        );
        debug!(
            generation = self.generation,
            best_fitness,
            evaluations = self.evaluations,
            "generation complete"
        );

        self.generation += 1;
        if self.generation > self.config.number_of_generations {
            self.terminate();
        }
        Ok(())
    }

    fn terminate(&mut self) {
        self.phase = RunPhase::Terminated;
        self.stats.set_termination_reason("generation budget exhausted");
        if let Some(started) = self.started {
            self.stats.set_runtime(started.elapsed());
        }
        info!(
            generations = self.generation,
            evaluations = self.evaluations,
            best_fitness = self.current_best.as_ref().map(|b| b.rank_fitness()),
            "evolution finished"
        );
    }
}
