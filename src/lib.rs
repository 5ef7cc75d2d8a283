//! # trimage-evo
//!
//! Evolve a stack of translucent triangles toward a target image with a
//! generational genetic algorithm.
//!
//! ## Core Concepts
//!
//! - **Fitness as error**: every problem returns a value to minimize; for
//!   images it is the sum of absolute RGBA differences to the target
//! - **Problems own their genomes**: a `Problem` builds random genomes,
//!   derives mutated copies and evaluates them, so the loop never touches
//!   gene semantics
//! - **Explicit randomness**: every operation takes the caller's `Rng`, so a
//!   seeded generator replays a run exactly
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trimage_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let target = Raster::from_fn(64, 64, |x, y| [x as u8 * 4, y as u8 * 4, 128, 255])?;
//!
//! let mut ga = SimpleGA::builder()
//!     .population_size(50)
//!     .number_of_generations(500)
//!     .tournament_size(3)
//!     .problem(TriangleImageProblem::new(target, 50)?)
//!     .sink(FitnessSeries::new())
//!     .build()?;
//!
//! let result = ga.run(&mut rng)?;
//! let image = ga.problem().render(&result.best_genome)?;
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod registry;
pub mod render;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::ExperimentConfig;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::registry::{RegisteredSolution, SolutionRegistry};
    pub use crate::render::prelude::*;
}
