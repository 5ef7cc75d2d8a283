//! Triangle-set genome
//!
//! Each triangle occupies `VALUES_PER_TRIANGLE` consecutive genes, all
//! normalized to `[0, 1]`:
//!
//! | offset | meaning |
//! |--------|---------|
//! | 0..6   | vertices `x0, y0, x1, y1, x2, y2` as fractions of width/height |
//! | 6..10  | colour `r, g, b, a` |
//!
//! Triangles are painted in gene order, so later triangles sit on top.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::bounds::MultiBounds;
use crate::genome::traits::Genome;

/// Number of genes encoding one triangle
pub const VALUES_PER_TRIANGLE: usize = 10;

/// Decoded view of one triangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Normalized vertex coordinates
    pub vertices: [(f64, f64); 3],
    /// Normalized, un-premultiplied colour
    pub rgba: [f64; 4],
}

impl Triangle {
    fn from_slice(values: &[f64]) -> Self {
        Self {
            vertices: [
                (values[0], values[1]),
                (values[2], values[3]),
                (values[4], values[5]),
            ],
            rgba: [values[6], values[7], values[8], values[9]],
        }
    }
}

/// Genome encoding a fixed number of coloured triangles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriangleGenome {
    genes: Vec<f64>,
}

impl TriangleGenome {
    /// Gene count for a given number of triangles
    pub fn gene_count(number_of_triangles: usize) -> usize {
        number_of_triangles * VALUES_PER_TRIANGLE
    }

    /// Bounds for every gene of a genome with `number_of_triangles` triangles
    pub fn bounds(number_of_triangles: usize) -> MultiBounds {
        MultiBounds::unit(Self::gene_count(number_of_triangles))
    }

    /// Sample every gene uniformly from `[0, 1]`
    pub fn random<R: Rng>(number_of_triangles: usize, rng: &mut R) -> Self {
        let genes = (0..Self::gene_count(number_of_triangles))
            .map(|_| rng.gen::<f64>())
            .collect();
        Self { genes }
    }

    /// Number of triangles encoded
    pub fn number_of_triangles(&self) -> usize {
        self.genes.len() / VALUES_PER_TRIANGLE
    }

    /// Decode the triangle at `index`
    pub fn triangle(&self, index: usize) -> Option<Triangle> {
        let start = index.checked_mul(VALUES_PER_TRIANGLE)?;
        self.genes
            .get(start..start + VALUES_PER_TRIANGLE)
            .map(Triangle::from_slice)
    }

    /// Iterate over all triangles in paint order
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.genes
            .chunks_exact(VALUES_PER_TRIANGLE)
            .map(Triangle::from_slice)
    }
}

impl Genome for TriangleGenome {
    fn genes(&self) -> &[f64] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    fn from_genes(genes: Vec<f64>) -> Result<Self, GenomeError> {
        if genes.is_empty() || genes.len() % VALUES_PER_TRIANGLE != 0 {
            return Err(GenomeError::InvalidStructure(format!(
                "{} genes is not a positive multiple of {}",
                genes.len(),
                VALUES_PER_TRIANGLE
            )));
        }
        Ok(Self { genes })
    }
}
