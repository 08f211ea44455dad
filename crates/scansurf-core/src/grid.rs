//! Row-major 2D grid container.
//!
//! Every 2D array in scansurf (the radius matrix, the X/Y/Z coordinate grids and
//! the color field) is a [`Grid`]. Row index is the angular sample, column index
//! is the axial sample.

use crate::error::{Result, ScanError};

/// A dense row-major 2D array.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid from row-major data.
    ///
    /// Returns [`ScanError::SizeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(ScanError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a grid by evaluating `f(i, j)` for every cell, row by row.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows (angular samples).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (axial samples).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the cell at `(i, j)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.data.get(i * self.cols + j)
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {i} out of range ({})", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on zero, and a zero-column grid has no rows worth yielding
        self.data.chunks_exact(self.cols.max(1))
    }

    /// Row-major view of the whole grid.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the grid, returning its row-major data.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Applies `f` to every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T> std::ops::Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl Grid<f64> {
    /// Smallest value in the grid (`+inf` when empty).
    #[must_use]
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the grid (`-inf` when empty).
    #[must_use]
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// `(min, max)` in a single pass.
    #[must_use]
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Row-major index of the first smallest value.
    #[must_use]
    pub fn argmin(&self) -> Option<(usize, usize)> {
        self.arg_by(|candidate, best| candidate < best)
    }

    /// Row-major index of the first largest value.
    #[must_use]
    pub fn argmax(&self) -> Option<(usize, usize)> {
        self.arg_by(|candidate, best| candidate > best)
    }

    fn arg_by(&self, better: impl Fn(f64, f64) -> bool) -> Option<(usize, usize)> {
        let mut best: Option<(usize, f64)> = None;
        for (k, &v) in self.data.iter().enumerate() {
            match best {
                Some((_, b)) if !better(v, b) => {}
                _ => best = Some((k, v)),
            }
        }
        best.map(|(k, _)| (k / self.cols, k % self.cols))
    }
}
