//! Selection operators
//!
//! Tournament selection for a minimization problem.

use rand::Rng;

use crate::error::OperatorError;
use crate::operators::traits::SelectionOperator;

/// Tournament selection operator
///
/// Draws one index uniformly as the incumbent, then draws `tournament_size`
/// more indices uniformly with replacement. A challenger replaces the
/// incumbent only when its fitness is strictly lower, so earlier draws win
/// ties. A size of 0 degenerates to uniform random selection.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Number of challengers drawn after the incumbent
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        Self { tournament_size }
    }

    /// Create binary tournament selection (size = 2)
    pub fn binary() -> Self {
        Self::new(2)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> Result<usize, OperatorError> {
        if fitness.is_empty() {
            return Err(OperatorError::SelectionFailed(
                "population cannot be empty".to_string(),
            ));
        }

        let n = fitness.len();
        let mut incumbent = rng.gen_range(0..n);
        for _ in 0..self.tournament_size {
            let challenger = rng.gen_range(0..n);
            if fitness[challenger] < fitness[incumbent] {
                incumbent = challenger;
            }
        }
        Ok(incumbent)
    }
}
