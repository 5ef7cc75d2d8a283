//! Experiment configuration
//!
//! A run is described by a TOML file; every key is optional and falls back
//! to its default.
//!
//! ```toml
//! number_of_triangles = 50
//! population_size = 50
//! number_of_generations = 1000
//! mutation_probability = 0.25
//! crossover_probability = 0.75
//! tournament_size = 3
//! seed = 42
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::simple_ga::SimpleGAConfig;
use crate::error::{EvoResult, EvolutionError};
use crate::genome::triangles::TriangleGenome;

/// Parameters of one triangle image run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Triangles per candidate
    pub number_of_triangles: usize,
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
    /// Fixed seed for a reproducible run; entropy when absent
    pub seed: Option<u64>,
    /// Whether to evaluate offspring in parallel
    pub parallel_evaluation: bool,
    /// Log the best fitness of every generation
    pub log_progress: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        let ga = SimpleGAConfig::default();
        Self {
            number_of_triangles: 50,
            population_size: ga.population_size,
            number_of_generations: ga.number_of_generations,
            mutation_probability: ga.mutation_probability,
            crossover_probability: ga.crossover_probability,
            tournament_size: ga.tournament_size,
            seed: None,
            parallel_evaluation: ga.parallel_evaluation,
            log_progress: false,
        }
    }
}

impl ExperimentConfig {
    /// Read and validate a TOML file
    pub fn load(path: &Path) -> EvoResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> EvoResult<Self> {
        let config: ExperimentConfig =
            toml::from_str(content).map_err(|e| EvolutionError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML text
    pub fn to_toml_string(&self) -> EvoResult<String> {
        toml::to_string(self).map_err(|e| EvolutionError::Serialization(e.to_string()))
    }

    /// Check the triangle count and every loop parameter
    pub fn validate(&self) -> EvoResult<()> {
        if self.number_of_triangles == 0 {
            return Err(EvolutionError::Configuration(
                "number_of_triangles must be at least 1".to_string(),
            ));
        }
        self.ga_config().validate()
    }

    /// Genes per candidate
    pub fn gene_count(&self) -> usize {
        TriangleGenome::gene_count(self.number_of_triangles)
    }

    /// Loop parameters for `SimpleGA`
    pub fn ga_config(&self) -> SimpleGAConfig {
        SimpleGAConfig {
            population_size: self.population_size,
            number_of_generations: self.number_of_generations,
            mutation_probability: self.mutation_probability,
            crossover_probability: self.crossover_probability,
            tournament_size: self.tournament_size,
            parallel_evaluation: self.parallel_evaluation,
        }
    }
}
