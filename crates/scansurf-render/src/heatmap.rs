//! 2D heatmap preview of the raw scan.
//!
//! The radius matrix is drawn as an image with one pixel per sample: angular
//! rows top to bottom, axial columns left to right.

#![allow(clippy::cast_possible_truncation)]

use std::path::Path;

use image::{ImageBuffer, Rgba};
use scansurf_core::RadiusMatrix;

use crate::color_maps::ColorMap;
use crate::error::{ExportError, ExportResult};

/// An RGBA preview image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Heatmap {
    /// Colors every radius sample, normalized by the global min and max.
    ///
    /// A flat field maps every pixel to the low end of the color map.
    pub fn from_radius(radius: &RadiusMatrix, color_map: &ColorMap) -> Self {
        let grid = radius.grid();
        let (min, max) = grid.min_max();
        let range = max - min;

        let mut rgba = Vec::with_capacity(grid.as_slice().len() * 4);
        for &r in grid.as_slice() {
            let t = if range > 0.0 { (r - min) / range } else { 0.0 };
            let [red, green, blue] = color_map.sample_rgb8(t as f32);
            rgba.extend_from_slice(&[red, green, blue, 255]);
        }

        Self {
            width: radius.depths() as u32,
            height: radius.angles() as u32,
            rgba,
        }
    }

    /// Image width (axial samples).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height (angular samples).
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA pixels, row by row from the top-left.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA value of the pixel at column `x`, row `y`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let k = ((y * self.width + x) * 4) as usize;
        [
            self.rgba[k],
            self.rgba[k + 1],
            self.rgba[k + 2],
            self.rgba[k + 3],
        ]
    }

    /// Saves the preview as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ExportResult<()> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(self.width, self.height, self.rgba.clone())
                .ok_or(ExportError::InvalidImageData)?;
        img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::info!(
            "wrote {}x{} heatmap to '{}'",
            self.width,
            self.height,
            path.as_ref().display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn ramp() -> ColorMap {
        ColorMap::new("ramp", vec![Vec3::ZERO, Vec3::ONE])
    }

    #[test]
    fn test_dimensions_follow_matrix() {
        let r = RadiusMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let heatmap = Heatmap::from_radius(&r, &ramp());
        assert_eq!(heatmap.width(), 3);
        assert_eq!(heatmap.height(), 2);
        assert_eq!(heatmap.pixels().len(), 3 * 2 * 4);
    }

    #[test]
    fn test_min_and_max_pixels() {
        let r = RadiusMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 5.0]]).unwrap();
        let heatmap = Heatmap::from_radius(&r, &ramp());
        assert_eq!(heatmap.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(heatmap.pixel(1, 1), [255, 255, 255, 255]);
        // row 1, column 0 holds 3.0 -> halfway
        assert_eq!(heatmap.pixel(0, 1), [128, 128, 128, 255]);
    }

    #[test]
    fn test_flat_field() {
        let r = RadiusMatrix::from_rows(vec![vec![2.0, 2.0]]).unwrap();
        let heatmap = Heatmap::from_radius(&r, &ramp());
        assert_eq!(heatmap.pixel(1, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        let r = RadiusMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        Heatmap::from_radius(&r, &ramp()).save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(loaded.get_pixel(1, 1).0, [255, 255, 255, 255]);
    }
}
