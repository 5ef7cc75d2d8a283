//! Rendering of triangle genomes
//!
//! This module provides the raster buffer and the triangle painter used by
//! the image-approximation problem.

pub mod painter;
pub mod raster;

pub mod prelude {
    pub use super::painter::*;
    pub use super::raster::*;
}
