//! The radius matrix produced by a rotational range scan.

use crate::error::{Result, ScanError};
use crate::grid::Grid;

/// Radial distance samples, one row per angular step and one column per axial step.
///
/// Always at least 1x1, with every value finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusMatrix {
    grid: Grid<f64>,
}

impl RadiusMatrix {
    /// Wraps a grid, checking the matrix invariants.
    pub fn new(grid: Grid<f64>) -> Result<Self> {
        if grid.rows() == 0 || grid.cols() == 0 {
            return Err(ScanError::InvalidData(format!(
                "radius matrix must be at least 1x1, got {}x{}",
                grid.rows(),
                grid.cols()
            )));
        }
        if let Some(k) = grid
            .as_slice()
            .iter()
            .position(|v| !v.is_finite() || *v < 0.0)
        {
            let (i, j) = (k / grid.cols(), k % grid.cols());
            return Err(ScanError::InvalidData(format!(
                "radius at ({i}, {j}) must be finite and non-negative, got {}",
                grid.as_slice()[k]
            )));
        }
        Ok(Self { grid })
    }

    /// Builds a matrix from nested rows.
    ///
    /// Ragged rows yield [`ScanError::SizeMismatch`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            if row.len() != n_cols {
                return Err(ScanError::SizeMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Self::new(Grid::from_vec(n_rows, n_cols, data)?)
    }

    /// Number of angular samples (A).
    #[must_use]
    pub fn angles(&self) -> usize {
        self.grid.rows()
    }

    /// Number of axial samples (D).
    #[must_use]
    pub fn depths(&self) -> usize {
        self.grid.cols()
    }

    /// Returns `(A, D)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.grid.shape()
    }

    /// Read-only access to the underlying grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<f64> {
        &self.grid
    }
}

impl std::ops::Index<(usize, usize)> for RadiusMatrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.grid[index]
    }
}
