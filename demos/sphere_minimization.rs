//! Sphere Function Minimization
//!
//! This example runs the generational GA on the Sphere function (sum of
//! squares) to check the loop converges without any rendering cost.

use rand::rngs::StdRng;
use rand::SeedableRng;
use trimage_evo::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Sphere Function Minimization ===\n");

    let mut rng = StdRng::seed_from_u64(42);

    const DIM: usize = 10;

    let mut ga = SimpleGA::builder()
        .population_size(100)
        .number_of_generations(300)
        .mutation_probability(0.5)
        .crossover_probability(0.75)
        .tournament_size(3)
        .problem(Sphere::new(DIM))
        .build()?;

    let result = ga.run(&mut rng)?;

    println!("Optimization complete!");
    println!("  Best fitness: {:.6}", result.best_fitness);
    println!("  Generations:  {}", result.generations);
    println!("  Evaluations:  {}", result.evaluations);
    println!("\nBest solution:");
    for (i, val) in result.best_genome.genes().iter().enumerate() {
        println!("  x[{}] = {:.6}", i, val);
    }

    println!("\n{}", result.stats.summary());

    Ok(())
}
