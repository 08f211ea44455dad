//! scansurf: reconstruct a 3D surface from a rotational range scan.
//!
//! A scan is a table of radial distances, one row per rotation angle and one
//! column per axial position. scansurf reads it, projects every sample to
//! Cartesian coordinates, colors the surface by radius and computes axis limits
//! that keep the true aspect ratio.
//!
//! # Quick Start
//!
//! ```no_run
//! use scansurf::*;
//!
//! fn main() -> Result<()> {
//!     let options = Options::default();
//!     let radius = load_scan(&options, std::path::Path::new("Data/scan.csv"))?;
//!     let surface = reconstruct(&options, &radius)?;
//!     println!("axis limits: {:?}", surface.bounds.limits());
//!     Ok(())
//! }
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod pipeline;
pub mod selector;

// Re-export core types
pub use scansurf_core::{
    error::{Result, ScanError},
    get_dir, get_file, get_files, normalize_path, project, AngularSpacing, BoundingBox,
    ColorField, DegenerateRangePolicy, DirRequest, FileFilter, FileRequest, Grid,
    LoaderOptions, Options, PathSelector, RadiusMatrix, ReconstructionOptions, RenderOptions,
    ScanLoader, Surface, SurfaceGrid, SurfaceReconstructor, DVec3,
};

// Re-export render types
pub use scansurf_render::{
    save_ply, write_ply, ColorMap, ColorMapRegistry, ExportError, Heatmap, SurfaceMesh,
};

pub use pipeline::{load_scan, reconstruct, run, Outputs, RunReport};
pub use selector::{ArgsSelector, PromptSelector, SelectorBackend};

/// Initializes logging from `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
