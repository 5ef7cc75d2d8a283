//! RGBA raster buffer
//!
//! Targets and renders share this representation so fitness is a direct
//! byte-wise comparison.

use serde::{Deserialize, Serialize};

use crate::error::EvolutionError;

/// Owned RGBA8 image, row-major, four bytes per pixel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap raw RGBA bytes
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EvolutionError> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(EvolutionError::Render(format!(
                "raster {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Solid colour raster
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, EvolutionError> {
        Self::from_fn(width, height, |_, _| rgba)
    }

    /// Build a raster pixel by pixel
    pub fn from_fn<F>(width: u32, height: u32, mut pixel: F) -> Result<Self, EvolutionError>
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let mut data = Vec::with_capacity(Self::byte_len(width, height)?);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&pixel(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn byte_len(width: u32, height: u32) -> Result<usize, EvolutionError> {
        if width == 0 || height == 0 {
            return Err(EvolutionError::Render(format!(
                "raster dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| EvolutionError::Render("raster dimensions overflow".to_string()))
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Take the raw bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Sum of absolute differences over every channel byte
    pub fn sad(&self, other: &Raster) -> Result<u64, EvolutionError> {
        if self.width != other.width || self.height != other.height {
            return Err(EvolutionError::FitnessEvaluation(format!(
                "raster size mismatch: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a.abs_diff(b) as u64)
            .sum())
    }
}
