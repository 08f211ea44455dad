//! Core of scansurf.
//!
//! This crate turns a rotational range scan into a 3D surface:
//! - [`ScanLoader`] reads the delimited scan table into a [`RadiusMatrix`]
//! - [`SurfaceReconstructor`] derives coordinates, colors and equal-aspect bounds
//! - [`Options`] gathers every adjustable constant of the pipeline
//! - [`PathSelector`] abstracts how scan and output paths are chosen

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Tests compare exactly computed floats
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod error;
pub mod grid;
pub mod loader;
pub mod matrix;
pub mod options;
pub mod reconstruct;
pub mod selection;

pub use error::{Result, ScanError};
pub use grid::Grid;
pub use loader::ScanLoader;
pub use matrix::RadiusMatrix;
pub use options::{
    AngularSpacing, DegenerateRangePolicy, LoaderOptions, Options, ReconstructionOptions,
    RenderOptions,
};
pub use reconstruct::{project, BoundingBox, ColorField, Surface, SurfaceGrid, SurfaceReconstructor};
pub use selection::{
    get_dir, get_file, get_files, normalize_path, DirRequest, FileFilter, FileRequest,
    PathSelector,
};

// Re-export glam types for convenience
pub use glam::DVec3;
