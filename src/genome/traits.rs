//! Core genome trait
//!
//! A genome is a fixed-length vector of real-valued genes. Cloning is the
//! explicit copy operation; operators that produce a variant always work
//! on a fresh clone so no two generations share a mutable gene vector.

use std::fmt::Debug;

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::GenomeError;
use crate::genome::bounds::MultiBounds;

/// Fixed-length real-valued genome
pub trait Genome: Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Get the genes as a slice
    fn genes(&self) -> &[f64];

    /// Get the genes as a mutable slice
    fn genes_mut(&mut self) -> &mut [f64];

    /// Create from a vector of genes
    fn from_genes(genes: Vec<f64>) -> Result<Self, GenomeError>;

    /// Number of genes
    fn dimension(&self) -> usize {
        self.genes().len()
    }

    /// Read a single gene
    fn gene(&self, index: usize) -> Option<f64> {
        self.genes().get(index).copied()
    }

    /// Overwrite a single gene
    fn set_gene(&mut self, index: usize, value: f64) -> Result<(), GenomeError> {
        let dimension = self.dimension();
        match self.genes_mut().get_mut(index) {
            Some(gene) => {
                *gene = value;
                Ok(())
            }
            None => Err(GenomeError::IndexOutOfRange { index, dimension }),
        }
    }

    /// Generate a random genome within the given bounds
    fn generate<R: Rng>(rng: &mut R, bounds: &MultiBounds) -> Result<Self, GenomeError> {
        let genes = bounds
            .bounds
            .iter()
            .map(|b| rng.gen_range(b.min..=b.max))
            .collect();
        Self::from_genes(genes)
    }

    /// Apply bounds to all genes
    fn apply_bounds(&mut self, bounds: &MultiBounds) {
        bounds.clamp_vec(self.genes_mut());
    }

    /// Euclidean distance between two genomes
    fn distance(&self, other: &Self) -> f64 {
        self.genes()
            .iter()
            .zip(other.genes())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}
