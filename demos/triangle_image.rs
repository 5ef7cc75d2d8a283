//! Triangle Image Approximation
//!
//! Evolves translucent triangles toward a synthetic target (a gradient
//! with a dark disc) and registers the winner of each run.
//!
//! Usage: `cargo run --example triangle_image -- [config.toml]`

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use trimage_evo::prelude::*;

const SIZE: u32 = 48;
const RUNS: usize = 2;

fn target() -> Result<Raster, EvolutionError> {
    let centre = SIZE as f64 / 2.0;
    let radius = SIZE as f64 / 4.0;
    Raster::from_fn(SIZE, SIZE, |x, y| {
        let dx = x as f64 - centre;
        let dy = y as f64 - centre;
        if (dx * dx + dy * dy).sqrt() < radius {
            [20, 30, 60, 255]
        } else {
            let r = (x * 255 / SIZE) as u8;
            let g = (y * 255 / SIZE) as u8;
            [r, g, 200, 255]
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Triangle Image Approximation ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => ExperimentConfig::load(Path::new(&path))?,
        None => ExperimentConfig {
            number_of_triangles: 30,
            population_size: 40,
            number_of_generations: 200,
            seed: Some(42),
            ..ExperimentConfig::default()
        },
    };
    println!("{}", config.to_toml_string()?);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let target = target()?;
    let mut registry = SolutionRegistry::new();

    for run in 0..RUNS {
        let problem = TriangleImageProblem::new(target.clone(), config.number_of_triangles)?;
        let label = format!("run-{}", run);

        let result = if config.log_progress {
            let mut ga = SimpleGA::builder()
                .config(config.ga_config())
                .problem(problem)
                .sink((FitnessSeries::new(), TracingSink::labelled(label.clone())))
                .build()?;
            ga.run(&mut rng)?
        } else {
            let mut ga = SimpleGA::builder()
                .config(config.ga_config())
                .problem(problem)
                .sink(FitnessSeries::new())
                .build()?;
            let result = ga.run(&mut rng)?;
            let series = ga.into_sink();
            if let (Some(first), Some(last)) = (series.points().first(), series.last()) {
                println!(
                    "{}: fitness {:.0} at generation {} -> {:.0} at generation {}",
                    label, first.1, first.0, last.1, last.0
                );
            }
            result
        };

        registry.add_result(label, &result);
    }

    let best = registry.best().ok_or(EvolutionError::EmptyPopulation)?;
    let problem = TriangleImageProblem::new(target, config.number_of_triangles)?;
    let rendered = problem.render(&best.genome)?;
    let per_channel = best.fitness / rendered.data().len() as f64;
    println!(
        "\nBest: {} with fitness {:.0} ({:.2} mean error per channel)",
        best.label, best.fitness, per_channel
    );

    let out = std::env::temp_dir().join("trimage_registry.json");
    registry.save_json(&out)?;
    println!("Registry written to {}", out.display());

    Ok(())
}
