//! Headless rendering side of scansurf.
//!
//! This crate turns the core's outputs into things a viewer can consume:
//! - Color map registry (viridis and friends)
//! - 2D heatmap preview of the raw radius matrix, saved as PNG
//! - Subsampled, per-vertex colored triangle mesh of the reconstructed surface
//! - PLY export of that mesh

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod color_maps;
pub mod error;
pub mod heatmap;
pub mod mesh;
pub mod ply;

pub use color_maps::{ColorMap, ColorMapRegistry};
pub use error::{ExportError, ExportResult};
pub use heatmap::Heatmap;
pub use mesh::{sample_indices, SurfaceMesh};
pub use ply::{save_ply, write_ply};
