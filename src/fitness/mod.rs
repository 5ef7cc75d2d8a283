//! Fitness evaluation and benchmarks
//!
//! This module provides the problem abstraction, the triangle image
//! problem, and analytic benchmark functions.

pub mod benchmarks;
pub mod image;
pub mod traits;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::image::*;
    pub use super::traits::*;
}
