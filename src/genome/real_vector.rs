//! Real-valued vector genome
//!
//! Plain gene vector with no layout of its own. Used by the benchmark
//! problems and as the simplest `Genome` for exercising operators.

use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::traits::Genome;

/// Fixed-length real-valued vector genome
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealVector {
    genes: Vec<f64>,
}

impl RealVector {
    /// Create a new real vector with the given genes
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Create a zero-filled vector of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        Self {
            genes: vec![0.0; dimension],
        }
    }

    /// Create a vector filled with a constant value
    pub fn filled(dimension: usize, value: f64) -> Self {
        Self {
            genes: vec![value; dimension],
        }
    }

    /// Get the underlying vector
    pub fn into_inner(self) -> Vec<f64> {
        self.genes
    }

    /// Calculate squared Euclidean norm
    pub fn norm_squared(&self) -> f64 {
        self.genes.iter().map(|x| x * x).sum::<f64>()
    }
}

impl Genome for RealVector {
    fn genes(&self) -> &[f64] {
        &self.genes
    }

    fn genes_mut(&mut self) -> &mut [f64] {
        &mut self.genes
    }

    fn from_genes(genes: Vec<f64>) -> Result<Self, GenomeError> {
        Ok(Self { genes })
    }
}

impl std::ops::Index<usize> for RealVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.genes[index]
    }
}

impl From<Vec<f64>> for RealVector {
    fn from(genes: Vec<f64>) -> Self {
        Self { genes }
    }
}

impl<const N: usize> From<[f64; N]> for RealVector {
    fn from(arr: [f64; N]) -> Self {
        Self {
            genes: arr.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bounds::MultiBounds;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_real_vector_new() {
        let v = RealVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.genes(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_real_vector_constructors() {
        assert!(RealVector::zeros(5).genes().iter().all(|&x| x == 0.0));
        assert_eq!(RealVector::filled(3, 42.0).genes(), &[42.0, 42.0, 42.0]);
        let v: RealVector = [1.0, 2.0].into();
        assert_eq!(v.into_inner(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_real_vector_gene_access() {
        let mut v = RealVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.gene(1), Some(2.0));
        assert_eq!(v.gene(3), None);

        v.set_gene(1, 42.0).unwrap();
        assert_eq!(v[1], 42.0);

        let err = v.set_gene(3, 0.0).unwrap_err();
        assert_eq!(
            err,
            GenomeError::IndexOutOfRange {
                index: 3,
                dimension: 3
            }
        );
    }

    #[test]
    fn test_real_vector_generate() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = MultiBounds::symmetric(5.0, 10);
        let v = RealVector::generate(&mut rng, &bounds).unwrap();

        assert_eq!(v.dimension(), 10);
        assert!(bounds.contains_vec(v.genes()));
    }

    #[test]
    fn test_real_vector_norm_and_distance() {
        let v1 = RealVector::new(vec![0.0, 0.0]);
        let v2 = RealVector::new(vec![3.0, 4.0]);
        assert_relative_eq!(v2.norm_squared(), 25.0);
        assert_relative_eq!(v1.distance(&v2), 5.0);
    }

    #[test]
    fn test_real_vector_apply_bounds() {
        let mut v = RealVector::new(vec![-10.0, 0.0, 10.0]);
        v.apply_bounds(&MultiBounds::symmetric(5.0, 3));
        assert_eq!(v.genes(), &[-5.0, 0.0, 5.0]);
    }

    #[test]
    fn test_real_vector_clone_is_independent() {
        let original = RealVector::new(vec![1.0, 2.0]);
        let mut copy = original.clone();
        copy.set_gene(0, 9.0).unwrap();
        assert_eq!(original.genes(), &[1.0, 2.0]);
    }

    #[test]
    fn test_real_vector_serialization() {
        let v = RealVector::new(vec![1.0, 2.0, 3.0]);
        let serialized = serde_json::to_string(&v).unwrap();
        let deserialized: RealVector = serde_json::from_str(&serialized).unwrap();
        assert_eq!(v, deserialized);
    }
}
