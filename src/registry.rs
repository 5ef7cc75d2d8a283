//! Best-solution registry
//!
//! Collects the winner of each finished run so several runs can be
//! compared, and persists them as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::EvolutionResult;
use crate::error::{EvoResult, EvolutionError};
use crate::genome::traits::Genome;

/// One registered run winner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RegisteredSolution<G>
where
    G: Genome,
{
    /// Free-form run label
    pub label: String,
    /// Fitness of the genome (lower is better)
    pub fitness: f64,
    /// Generations the run performed
    pub generations: usize,
    /// Fitness evaluations the run performed
    pub evaluations: usize,
    /// The winning genome
    pub genome: G,
}

/// Ordered collection of run winners
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SolutionRegistry<G>
where
    G: Genome,
{
    solutions: Vec<RegisteredSolution<G>>,
}

impl<G> SolutionRegistry<G>
where
    G: Genome,
{
    pub fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }

    /// Register a solution
    pub fn add(&mut self, solution: RegisteredSolution<G>) {
        self.solutions.push(solution);
    }

    /// Register the winner of a finished run
    pub fn add_result(&mut self, label: impl Into<String>, result: &EvolutionResult<G>) {
        self.add(RegisteredSolution {
            label: label.into(),
            fitness: result.best_fitness,
            generations: result.generations,
            evaluations: result.evaluations,
            genome: result.best_genome.clone(),
        });
    }

    /// Lowest-fitness solution, first registered on ties
    pub fn best(&self) -> Option<&RegisteredSolution<G>> {
        self.solutions
            .iter()
            .fold(None, |best: Option<&RegisteredSolution<G>>, s| match best {
                Some(b) if !(s.fitness < b.fitness) => Some(b),
                _ => Some(s),
            })
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Solutions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredSolution<G>> {
        self.solutions.iter()
    }

    /// Write the registry as pretty JSON
    pub fn save_json(&self, path: &Path) -> EvoResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| EvolutionError::Serialization(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a registry written by `save_json`
    pub fn load_json(path: &Path) -> EvoResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| EvolutionError::Serialization(e.to_string()))
    }
}

impl<G> Default for SolutionRegistry<G>
where
    G: Genome,
{
    fn default() -> Self {
        Self::new()
    }
}
