//! Triangle mesh built from a reconstructed surface.
//!
//! The coordinate grids are subsampled to at most `max_rows x max_cols`
//! vertices (keeping the first and last row and column), every grid quad is
//! split into two triangles, and each vertex gets the color of its sample.

#![allow(clippy::cast_possible_truncation)]

use glam::Vec3;
use scansurf_core::{BoundingBox, Surface};

use crate::color_maps::ColorMap;

/// Picks at most about `count` evenly strided indices out of `0..n`.
///
/// The stride is `max(ceil(n / count), 1)` and the last index is always kept,
/// so the result may hold one more entry than `count`.
#[must_use]
pub fn sample_indices(n: usize, count: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let stride = n.div_ceil(count.max(1)).max(1);
    let mut indices: Vec<usize> = (0..n - 1).step_by(stride).collect();
    indices.push(n - 1);
    indices
}

/// A colored triangle mesh ready for a plotting backend or file export.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Per-vertex 8-bit RGB colors.
    pub colors: Vec<[u8; 3]>,
    /// Counter-clockwise triangles (viewed from outside a positive sweep).
    pub faces: Vec<[u32; 3]>,
    /// Number of kept angular samples.
    pub rows: usize,
    /// Number of kept axial samples.
    pub cols: usize,
    /// Equal-aspect limits of the full-resolution surface.
    pub bounds: BoundingBox,
}

impl SurfaceMesh {
    /// Builds the mesh from a surface.
    pub fn from_surface(
        surface: &Surface,
        color_map: &ColorMap,
        max_rows: usize,
        max_cols: usize,
    ) -> Self {
        let (a, d) = surface.grid.shape();
        let row_ids = sample_indices(a, max_rows);
        let col_ids = sample_indices(d, max_cols);

        let mut vertices = Vec::with_capacity(row_ids.len() * col_ids.len());
        let mut colors = Vec::with_capacity(vertices.capacity());
        for &i in &row_ids {
            for &j in &col_ids {
                vertices.push(surface.grid.point(i, j).as_vec3());
                colors.push(color_map.sample_rgb8(surface.colors[(i, j)] as f32));
            }
        }

        let (rows, cols) = (row_ids.len(), col_ids.len());
        let mut faces = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1) * 2);
        let index = |r: usize, c: usize| (r * cols + c) as u32;
        for r in 0..rows.saturating_sub(1) {
            for c in 0..cols.saturating_sub(1) {
                let v00 = index(r, c);
                let v01 = index(r, c + 1);
                let v10 = index(r + 1, c);
                let v11 = index(r + 1, c + 1);
                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }

        log::debug!(
            "surface mesh: {}x{} samples kept of {a}x{d}, {} triangles",
            rows,
            cols,
            faces.len()
        );

        Self {
            vertices,
            colors,
            faces,
            rows,
            cols,
            bounds: surface.bounds,
        }
    }

    /// Returns the number of triangles in the mesh.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
