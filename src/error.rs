//! Error types for trimage-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for genome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Gene index outside the genome
    #[error("Gene index {index} out of range for genome of dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// Invalid genome structure
    #[error("Invalid genome structure: {0}")]
    InvalidStructure(String),

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(String),

    /// Mutation operation failed
    #[error("Mutation failed: {0}")]
    MutationFailed(String),

    /// Selection operation failed
    #[error("Selection failed: {0}")]
    SelectionFailed(String),

    /// Invalid operator configuration
    #[error("Invalid operator configuration: {0}")]
    InvalidConfiguration(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Fitness evaluation failed
    #[error("Fitness evaluation failed: {0}")]
    FitnessEvaluation(String),

    /// Rendering a candidate failed
    #[error("Render failed: {0}")]
    Render(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Operation not legal in the current run phase
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An individual was used before its fitness was computed
    #[error("Individual at index {0} has not been evaluated")]
    UnevaluatedIndividual(usize),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,

    /// IO error while persisting results
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_error_display() {
        let err = GenomeError::IndexOutOfRange {
            index: 12,
            dimension: 10,
        };
        assert_eq!(
            err.to_string(),
            "Gene index 12 out of range for genome of dimension 10"
        );

        let err = GenomeError::DimensionMismatch {
            expected: 10,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 10, got 5");
    }

    #[test]
    fn test_operator_error_display() {
        let err = OperatorError::CrossoverFailed("incompatible parents".to_string());
        assert_eq!(err.to_string(), "Crossover failed: incompatible parents");

        let err = OperatorError::InvalidConfiguration("sigma must be non-negative".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid operator configuration: sigma must be non-negative"
        );
    }

    #[test]
    fn test_evolution_error_from_genome_error() {
        let genome_err = GenomeError::InvalidStructure("bad shape".to_string());
        let evo_err: EvolutionError = genome_err.into();
        assert!(matches!(evo_err, EvolutionError::Genome(_)));
    }

    #[test]
    fn test_evolution_error_from_operator_error() {
        let op_err = OperatorError::SelectionFailed("empty pool".to_string());
        let evo_err: EvolutionError = op_err.into();
        assert!(matches!(evo_err, EvolutionError::Operator(_)));
        assert_eq!(
            evo_err.to_string(),
            "Operator error: Selection failed: empty pool"
        );
    }

    #[test]
    fn test_configuration_error_display() {
        let err = EvolutionError::Configuration("population_size must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: population_size must be at least 1"
        );
    }
}
