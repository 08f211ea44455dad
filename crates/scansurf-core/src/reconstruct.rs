//! Surface reconstruction from a radius matrix.
//!
//! Each row of the scan is a radial profile taken at one rotation angle, each
//! column one axial position. The reconstruction:
//! - assigns an angle to every row and an axial offset to every column,
//! - projects every sample to Cartesian coordinates,
//! - normalizes the radius field into a `[0, 1]` color field,
//! - computes an equal-aspect bounding box so that no axis is stretched when
//!   the surface is rendered.

#![allow(clippy::cast_precision_loss)]

use glam::DVec3;

use crate::error::{Result, ScanError};
use crate::grid::Grid;
use crate::matrix::RadiusMatrix;
use crate::options::{AngularSpacing, DegenerateRangePolicy, ReconstructionOptions};

/// Cartesian coordinate grids, each with the shape of the source matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub x: Grid<f64>,
    pub y: Grid<f64>,
    pub z: Grid<f64>,
}

impl SurfaceGrid {
    /// Returns `(rows, cols)`, shared by all three grids.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Position of sample `(i, j)`.
    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> DVec3 {
        DVec3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }
}

/// Radius field normalized into `[0, 1]`.
pub type ColorField = Grid<f64>;

/// An axis-aligned box with the same half-extent on all three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Per-axis center.
    pub center: DVec3,
    /// Half-extent shared by every axis.
    pub half_extent: f64,
}

impl BoundingBox {
    /// Computes the equal-aspect box of a surface.
    ///
    /// The half-extent is half of the largest per-axis range; each axis keeps
    /// its own center.
    #[must_use]
    pub fn equal_aspect(surface: &SurfaceGrid) -> Self {
        let (x_min, x_max) = surface.x.min_max();
        let (y_min, y_max) = surface.y.min_max();
        let (z_min, z_max) = surface.z.min_max();

        let min = DVec3::new(x_min, y_min, z_min);
        let max = DVec3::new(x_max, y_max, z_max);

        Self {
            center: (max + min) * 0.5,
            half_extent: (max - min).max_element() / 2.0,
        }
    }

    /// Lower corner.
    #[must_use]
    pub fn min(&self) -> DVec3 {
        self.center - DVec3::splat(self.half_extent)
    }

    /// Upper corner.
    #[must_use]
    pub fn max(&self) -> DVec3 {
        self.center + DVec3::splat(self.half_extent)
    }

    /// Axis limits as `[(x_min, x_max), (y_min, y_max), (z_min, z_max)]`.
    #[must_use]
    pub fn limits(&self) -> [(f64, f64); 3] {
        let (lo, hi) = (self.min(), self.max());
        [(lo.x, hi.x), (lo.y, hi.y), (lo.z, hi.z)]
    }
}

/// Everything derived from one radius matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Angle of each row, in degrees.
    pub angles: Vec<f64>,
    /// Axial offset of each column.
    pub axial: Vec<f64>,
    /// Cartesian coordinates.
    pub grid: SurfaceGrid,
    /// Normalized radius field.
    pub colors: ColorField,
    /// Equal-aspect axis limits.
    pub bounds: BoundingBox,
}

/// Converts a radius matrix into surface coordinates, colors and bounds.
#[derive(Debug, Clone, Default)]
pub struct SurfaceReconstructor {
    options: ReconstructionOptions,
}

impl SurfaceReconstructor {
    /// Creates a reconstructor, rejecting options that fail
    /// [`ReconstructionOptions::validate`].
    pub fn new(options: ReconstructionOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Returns the reconstruction options.
    #[must_use]
    pub fn options(&self) -> &ReconstructionOptions {
        &self.options
    }

    /// Runs the full reconstruction.
    pub fn reconstruct(&self, radius: &RadiusMatrix) -> Result<Surface> {
        let (a, d) = radius.shape();
        let angles = self.angle_vector(a);
        let axial = self.axial_vector(d);
        if let Some(last) = axial.last().filter(|z| !z.is_finite()) {
            return Err(ScanError::InvalidOption(format!(
                "axial spacing {} overflows over {d} samples (last offset {last})",
                self.options.axial_spacing
            )));
        }
        let grid = project(radius, &angles, &axial)?;
        let colors = self.color_field(radius)?;
        let bounds = BoundingBox::equal_aspect(&grid);
        if !(bounds.half_extent.is_finite() && bounds.center.is_finite()) {
            return Err(ScanError::InvalidData(
                "surface extent is not representable as a finite bounding box".to_string(),
            ));
        }

        log::debug!(
            "reconstructed {a}x{d} surface, half-extent {:.4} around {:?}",
            bounds.half_extent,
            bounds.center
        );

        Ok(Surface {
            angles,
            axial,
            grid,
            colors,
            bounds,
        })
    }

    /// Angle in degrees for each of `count` rows.
    ///
    /// With [`AngularSpacing::Closed`] the first value is exactly the start angle
    /// and the last exactly the end angle. A single row sits at the start angle.
    #[must_use]
    pub fn angle_vector(&self, count: usize) -> Vec<f64> {
        let start = self.options.angle_start;
        let end = self.options.angle_end;
        let span = end - start;

        match self.options.angular_spacing {
            AngularSpacing::Closed => {
                if count <= 1 {
                    return vec![start; count];
                }
                let step = span / (count - 1) as f64;
                let mut angles: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
                angles[count - 1] = end;
                angles
            }
            AngularSpacing::HalfOpen => {
                let step = span / count.max(1) as f64;
                (0..count).map(|i| start + step * i as f64).collect()
            }
        }
    }

    /// Axial offset `j * spacing` for each of `count` columns.
    #[must_use]
    pub fn axial_vector(&self, count: usize) -> Vec<f64> {
        (0..count)
            .map(|j| j as f64 * self.options.axial_spacing)
            .collect()
    }

    /// Normalizes the radius field into `[0, 1]` using its global min and max.
    ///
    /// A flat field is handled by the configured [`DegenerateRangePolicy`].
    pub fn color_field(&self, radius: &RadiusMatrix) -> Result<ColorField> {
        let (min, max) = radius.grid().min_max();
        let range = max - min;

        if range > 0.0 {
            return Ok(radius.grid().map(|r| ((r - min) / range).clamp(0.0, 1.0)));
        }

        match self.options.degenerate_range {
            DegenerateRangePolicy::Reject => Err(ScanError::DegenerateRange { value: min }),
            DegenerateRangePolicy::Flat => {
                log::warn!("radius field is flat at {min}, rendering uncolored");
                Ok(radius.grid().map(|_| 0.0))
            }
        }
    }
}

/// Projects every sample `(i, j)` to `(R cos θ_i, R sin θ_i, d_j)`.
///
/// `angles` must have one entry per row and `axial` one per column.
pub fn project(radius: &RadiusMatrix, angles: &[f64], axial: &[f64]) -> Result<SurfaceGrid> {
    let (a, d) = radius.shape();
    if angles.len() != a {
        return Err(ScanError::SizeMismatch {
            expected: a,
            actual: angles.len(),
        });
    }
    if axial.len() != d {
        return Err(ScanError::SizeMismatch {
            expected: d,
            actual: axial.len(),
        });
    }

    let trig: Vec<(f64, f64)> = angles
        .iter()
        .map(|deg| {
            let (sin, cos) = deg.to_radians().sin_cos();
            (cos, sin)
        })
        .collect();

    Ok(SurfaceGrid {
        x: Grid::from_fn(a, d, |i, j| radius[(i, j)] * trig[i].0),
        y: Grid::from_fn(a, d, |i, j| radius[(i, j)] * trig[i].1),
        z: Grid::from_fn(a, d, |_, j| axial[j]),
    })
}
