//! Triangle image approximation problem
//!
//! Candidates are stacks of translucent triangles painted over an opaque
//! background; fitness is the pixel difference against a target raster.

use rand::Rng;

use crate::error::{EvoResult, EvolutionError, GenomeError};
use crate::fitness::traits::{Problem, RenderProblem};
use crate::genome::bounds::MultiBounds;
use crate::genome::traits::Genome;
use crate::genome::triangles::TriangleGenome;
use crate::operators::mutation::GaussianMutation;
use crate::operators::traits::BoundedMutationOperator;
use crate::render::painter::TrianglePainter;
use crate::render::raster::Raster;

/// Default standard deviation of per-gene mutation noise
pub const DEFAULT_MUTATION_SIGMA: f64 = 0.1;

/// Approximate a target raster with a fixed number of triangles
#[derive(Clone, Debug)]
pub struct TriangleImageProblem {
    target: Raster,
    number_of_triangles: usize,
    painter: TrianglePainter,
    mutation: GaussianMutation,
    bounds: MultiBounds,
}

impl TriangleImageProblem {
    /// Create a problem for `target` using `number_of_triangles` triangles
    pub fn new(target: Raster, number_of_triangles: usize) -> EvoResult<Self> {
        if number_of_triangles == 0 {
            return Err(EvolutionError::Configuration(
                "number_of_triangles must be at least 1".to_string(),
            ));
        }
        let painter = TrianglePainter::new(target.width(), target.height());
        let mutation = GaussianMutation::try_new(DEFAULT_MUTATION_SIGMA)?;
        Ok(Self {
            target,
            number_of_triangles,
            painter,
            mutation,
            bounds: TriangleGenome::bounds(number_of_triangles),
        })
    }

    /// Set the opaque background colour
    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.painter = self.painter.with_background(rgb);
        self
    }

    /// Replace the mutation operator
    pub fn with_mutation(mut self, mutation: GaussianMutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// The target raster
    pub fn target(&self) -> &Raster {
        &self.target
    }

    /// Number of triangles per candidate
    pub fn number_of_triangles(&self) -> usize {
        self.number_of_triangles
    }

    /// The painter used for rendering
    pub fn painter(&self) -> &TrianglePainter {
        &self.painter
    }

    /// Largest possible fitness for the target size
    pub fn max_fitness(&self) -> f64 {
        self.target.data().len() as f64 * 255.0
    }

    fn check_shape(&self, genome: &TriangleGenome) -> EvoResult<()> {
        if genome.dimension() != self.gene_count() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.gene_count(),
                actual: genome.dimension(),
            }
            .into());
        }
        Ok(())
    }
}

impl Problem for TriangleImageProblem {
    type Genome = TriangleGenome;

    fn gene_count(&self) -> usize {
        TriangleGenome::gene_count(self.number_of_triangles)
    }

    fn random_genome<R: Rng>(&self, rng: &mut R) -> TriangleGenome {
        TriangleGenome::random(self.number_of_triangles, rng)
    }

    fn mutate<R: Rng>(&self, genome: &TriangleGenome, rng: &mut R) -> EvoResult<TriangleGenome> {
        self.check_shape(genome)?;
        let mut child = genome.clone();
        self.mutation.mutate_bounded(&mut child, &self.bounds, rng);
        Ok(child)
    }

    fn evaluate(&self, genome: &TriangleGenome) -> EvoResult<f64> {
        let rendered = self.render(genome)?;
        Ok(rendered.sad(&self.target)? as f64)
    }
}

impl RenderProblem for TriangleImageProblem {
    fn render(&self, genome: &TriangleGenome) -> EvoResult<Raster> {
        self.check_shape(genome)?;
        self.painter.paint(genome)
    }
}
