//! Genome abstractions and implementations
//!
//! This module provides the core `Genome` trait and built-in genome types.

pub mod bounds;
pub mod real_vector;
pub mod traits;
pub mod triangles;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::real_vector::*;
    pub use super::traits::*;
    pub use super::triangles::*;
}
