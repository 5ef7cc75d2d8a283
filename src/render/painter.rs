//! Triangle rasterizer backed by tiny-skia

use tiny_skia as sk;

use crate::error::EvolutionError;
use crate::genome::triangles::{Triangle, TriangleGenome};
use crate::render::raster::Raster;

/// Paints a `TriangleGenome` onto an opaque background
///
/// Output bytes are tiny-skia's premultiplied RGBA; since the background is
/// forced opaque every pixel ends up with alpha 255, which makes the
/// premultiplied and straight encodings identical.
#[derive(Clone, Debug)]
pub struct TrianglePainter {
    width: u32,
    height: u32,
    background: [u8; 4],
    anti_alias: bool,
}

impl TrianglePainter {
    /// Painter for a `width` x `height` canvas with a white background
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: [255, 255, 255, 255],
            anti_alias: false,
        }
    }

    /// Set the background colour (alpha is ignored)
    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = [rgb[0], rgb[1], rgb[2], 255];
        self
    }

    /// Enable anti-aliased edges
    pub fn with_anti_alias(mut self, enabled: bool) -> Self {
        self.anti_alias = enabled;
        self
    }

    /// Canvas width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Render all triangles in gene order
    pub fn paint(&self, genome: &TriangleGenome) -> Result<Raster, EvolutionError> {
        let mut pixmap = sk::Pixmap::new(self.width, self.height).ok_or_else(|| {
            EvolutionError::Render(format!(
                "cannot allocate {}x{} pixmap",
                self.width, self.height
            ))
        })?;
        let [r, g, b, a] = self.background;
        pixmap.fill(sk::Color::from_rgba8(r, g, b, a));

        for triangle in genome.triangles() {
            self.draw_triangle(&mut pixmap, &triangle);
        }

        Raster::from_rgba(self.width, self.height, pixmap.take())
    }

    fn draw_triangle(&self, pixmap: &mut sk::Pixmap, triangle: &Triangle) {
        let w = self.width as f32;
        let h = self.height as f32;

        let mut pb = sk::PathBuilder::new();
        let [(x0, y0), (x1, y1), (x2, y2)] = triangle.vertices;
        pb.move_to(x0 as f32 * w, y0 as f32 * h);
        pb.line_to(x1 as f32 * w, y1 as f32 * h);
        pb.line_to(x2 as f32 * w, y2 as f32 * h);
        pb.close();
        // Collinear or coincident vertices produce no path.
        let Some(path) = pb.finish() else {
            return;
        };

        let [r, g, b, a] = triangle.rgba.map(channel_to_u8);
        if a == 0 {
            return;
        }
        let mut paint = sk::Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.anti_alias;

        pixmap.fill_path(
            &path,
            &paint,
            sk::FillRule::Winding,
            sk::Transform::identity(),
            None,
        );
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::traits::Genome;

    fn full_cover(rgba: [f64; 4]) -> Vec<f64> {
        // Two triangles would be needed to cover a square exactly; one
        // oversized triangle covers the whole canvas instead.
        let mut genes = vec![0.0, 0.0, 2.0, 0.0, 0.0, 2.0];
        genes.extend_from_slice(&rgba);
        genes
    }

    #[test]
    fn test_transparent_triangle_leaves_background() {
        let painter = TrianglePainter::new(4, 4).with_background([10, 20, 30]);
        let genome = TriangleGenome::from_genes(full_cover([1.0, 0.0, 0.0, 0.0])).unwrap();
        let raster = painter.paint(&genome).unwrap();

        assert_eq!(raster, Raster::filled(4, 4, [10, 20, 30, 255]).unwrap());
    }

    #[test]
    fn test_opaque_triangle_covers_canvas() {
        let painter = TrianglePainter::new(8, 6);
        let genome = TriangleGenome::from_genes(full_cover([1.0, 0.0, 0.0, 1.0])).unwrap();
        let raster = painter.paint(&genome).unwrap();

        assert_eq!(raster.width(), 8);
        assert_eq!(raster.height(), 6);
        assert_eq!(raster.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(raster.pixel(7, 5), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_later_triangles_paint_on_top() {
        let painter = TrianglePainter::new(4, 4);
        let mut genes = full_cover([1.0, 0.0, 0.0, 1.0]);
        genes.extend(full_cover([0.0, 0.0, 1.0, 1.0]));
        let genome = TriangleGenome::from_genes(genes).unwrap();
        let raster = painter.paint(&genome).unwrap();

        assert_eq!(raster.pixel(1, 1), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_degenerate_triangle_is_skipped() {
        let painter = TrianglePainter::new(4, 4);
        let genes = vec![0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0, 1.0];
        let genome = TriangleGenome::from_genes(genes).unwrap();
        let raster = painter.paint(&genome).unwrap();

        assert_eq!(raster, Raster::filled(4, 4, [255, 255, 255, 255]).unwrap());
    }

    #[test]
    fn test_zero_sized_canvas_is_an_error() {
        let painter = TrianglePainter::new(0, 4);
        let genome = TriangleGenome::from_genes(full_cover([0.0; 4])).unwrap();
        assert!(matches!(
            painter.paint(&genome),
            Err(EvolutionError::Render(_))
        ));
    }
}
