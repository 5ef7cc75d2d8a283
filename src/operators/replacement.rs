//! Replacement operators
//!
//! Generational replacement with single-elite preservation.

use tracing::trace;

use crate::error::{EvoResult, EvolutionError};
use crate::genome::traits::Genome;
use crate::operators::traits::ReplacementOperator;
use crate::population::population::Population;

/// Elitist generational replacement
///
/// The offspring become the next generation. If the best offspring is
/// strictly worse than the best current individual, that individual is
/// re-inserted at slot 0 and the worst offspring (first one on ties) is
/// dropped; the remaining offspring keep their relative order.
#[derive(Clone, Debug, Default)]
pub struct ElitistReplacement;

impl ElitistReplacement {
    /// Create a new elitist replacement
    pub fn new() -> Self {
        Self
    }
}

impl<G: Genome> ReplacementOperator<G> for ElitistReplacement {
    fn replace(
        &self,
        current: &Population<G>,
        offspring: Population<G>,
    ) -> EvoResult<Population<G>> {
        if current.is_empty() || offspring.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if current.len() != offspring.len() {
            return Err(EvolutionError::InvalidState(format!(
                "offspring size {} does not match population size {}",
                offspring.len(),
                current.len()
            )));
        }

        let next_generation = current.generation() + 1;
        let parent_idx = current.best_index().ok_or(EvolutionError::EmptyPopulation)?;
        let offspring_idx = offspring.best_index().ok_or(EvolutionError::EmptyPopulation)?;
        let best_parent = &current[parent_idx];

        if offspring[offspring_idx].rank_fitness() <= best_parent.rank_fitness() {
            let mut next = offspring;
            next.set_generation(next_generation);
            return Ok(next);
        }

        let worst_idx = offspring.worst_index().ok_or(EvolutionError::EmptyPopulation)?;
        trace!(
            elite_fitness = best_parent.rank_fitness(),
            dropped_index = worst_idx,
            dropped_fitness = offspring[worst_idx].rank_fitness(),
            "injecting elite"
        );

        let mut next: Population<G> = std::iter::once(best_parent.clone())
            .chain(
                offspring
                    .into_individuals()
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| *i != worst_idx)
                    .map(|(_, ind)| ind),
            )
            .collect();
        next.set_generation(next_generation);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::real_vector::RealVector;
    use crate::population::individual::Individual;

    // Each genome holds its own slot tag so positions can be checked.
    fn pop(values: &[f64], tag: f64) -> Population<RealVector> {
        values
            .iter()
            .enumerate()
            .map(|(i, &f)| Individual::with_fitness(RealVector::new(vec![tag, i as f64]), f))
            .collect()
    }

    fn fitnesses(pop: &Population<RealVector>) -> Vec<f64> {
        pop.fitness_values().unwrap()
    }

    #[test]
    fn test_elite_injected_in_place_of_worst() {
        let current = pop(&[4.0, 1.0, 6.0, 7.0], 0.0);
        let offspring = pop(&[5.0, 3.0, 8.0, 2.0], 1.0);

        let next = ElitistReplacement.replace(&current, offspring).unwrap();

        assert_eq!(fitnesses(&next), vec![1.0, 5.0, 3.0, 2.0]);
        assert_eq!(next[0], current[1]);
        let slots: Vec<f64> = next.iter().skip(1).map(|i| i.genome[1]).collect();
        assert_eq!(slots, vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn test_offspring_kept_when_not_worse() {
        let current = pop(&[4.0, 2.0, 6.0], 0.0);

        let improved = pop(&[9.0, 1.0, 9.0], 1.0);
        let next = ElitistReplacement.replace(&current, improved.clone()).unwrap();
        assert_eq!(next.individuals(), improved.individuals());

        // A tie also keeps the offspring unchanged.
        let tied = pop(&[9.0, 2.0, 7.0], 1.0);
        let next = ElitistReplacement.replace(&current, tied.clone()).unwrap();
        assert_eq!(next.individuals(), tied.individuals());
    }

    #[test]
    fn test_first_of_tied_worst_is_dropped() {
        let current = pop(&[0.5, 3.0, 4.0], 0.0);
        let offspring = pop(&[9.0, 1.0, 9.0], 1.0);

        let next = ElitistReplacement.replace(&current, offspring).unwrap();

        assert_eq!(fitnesses(&next), vec![0.5, 1.0, 9.0]);
        assert_eq!(next[2].genome[1], 2.0);
    }

    #[test]
    fn test_generation_advances() {
        let mut current = pop(&[1.0, 2.0], 0.0);
        current.set_generation(7);
        let next = ElitistReplacement.replace(&current, pop(&[3.0, 4.0], 1.0)).unwrap();
        assert_eq!(next.generation(), 8);
    }

    #[test]
    fn test_replacement_is_pure() {
        let current = pop(&[4.0, 1.0, 6.0, 7.0], 0.0);
        let offspring = pop(&[5.0, 3.0, 8.0, 2.0], 1.0);

        let a = ElitistReplacement.replace(&current, offspring.clone()).unwrap();
        let b = ElitistReplacement.replace(&current, offspring).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_size_mismatch_and_empty() {
        let current = pop(&[1.0, 2.0], 0.0);
        assert!(matches!(
            ElitistReplacement.replace(&current, pop(&[1.0], 1.0)),
            Err(EvolutionError::InvalidState(_))
        ));
        assert!(matches!(
            ElitistReplacement.replace(&Population::new(), Population::<RealVector>::new()),
            Err(EvolutionError::EmptyPopulation)
        ));
    }
}
