//! Genetic operators
//!
//! This module provides selection, crossover, mutation, and replacement operators.

pub mod crossover;
pub mod mutation;
pub mod replacement;
pub mod selection;
pub mod traits;

pub mod prelude {
    pub use super::crossover::*;
    pub use super::mutation::*;
    pub use super::replacement::*;
    pub use super::selection::*;
    pub use super::traits::*;
}
