//! Crossover operators
//!
//! Single-point crossover producing one offspring per parent pair.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::traits::Genome;
use crate::operators::traits::CrossoverOperator;

/// Single-point crossover
///
/// The offspring starts as a copy of the first parent; every gene from the
/// crossover point onward is overwritten with the second parent's gene.
/// The point is drawn from `[0, G)`, so point 0 reproduces the second
/// parent and no draw reproduces the first parent unchanged.
#[derive(Clone, Debug, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Create a new single-point crossover
    pub fn new() -> Self {
        Self
    }

    /// Cross two parents at a fixed point
    ///
    /// Genes `[0, point)` come from `parent1`, genes `[point, G)` from
    /// `parent2`.
    pub fn crossover_at<G: Genome>(
        &self,
        parent1: &G,
        parent2: &G,
        point: usize,
    ) -> Result<G, OperatorError> {
        check_parents(parent1, parent2)?;
        let dimension = parent1.dimension();
        if point >= dimension {
            return Err(OperatorError::CrossoverFailed(format!(
                "crossover point {} outside [0, {})",
                point, dimension
            )));
        }

        let mut offspring = parent1.clone();
        offspring.genes_mut()[point..].copy_from_slice(&parent2.genes()[point..]);
        Ok(offspring)
    }
}

fn check_parents<G: Genome>(parent1: &G, parent2: &G) -> Result<(), OperatorError> {
    if parent1.dimension() != parent2.dimension() {
        return Err(OperatorError::CrossoverFailed(format!(
            "parent dimensions do not match: {} vs {}",
            parent1.dimension(),
            parent2.dimension()
        )));
    }
    if parent1.dimension() == 0 {
        return Err(OperatorError::CrossoverFailed(
            "cannot cross empty genomes".to_string(),
        ));
    }
    Ok(())
}

impl<G: Genome> CrossoverOperator<G> for SinglePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &G,
        parent2: &G,
        rng: &mut R,
    ) -> Result<G, OperatorError> {
        check_parents(parent1, parent2)?;
        let point = rng.gen_range(0..parent1.dimension());
        self.crossover_at(parent1, parent2, point)
    }
}
