//! Load -> reconstruct -> export, for one scan file.

use std::path::{Path, PathBuf};

use scansurf_core::{
    BoundingBox, Options, RadiusMatrix, Result, ScanLoader, Surface, SurfaceReconstructor,
};
use scansurf_render::{save_ply, ColorMapRegistry, Heatmap, SurfaceMesh};

/// Which artifacts a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outputs {
    /// 2D preview of the raw radius matrix.
    pub heatmap: bool,
    /// Colored surface mesh.
    pub mesh: bool,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            heatmap: true,
            mesh: true,
        }
    }
}

/// Summary of one processed scan.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The scan that was processed.
    pub scan: PathBuf,
    /// `(angles, depths)` of the radius matrix.
    pub shape: (usize, usize),
    /// Equal-aspect axis limits of the surface.
    pub bounds: BoundingBox,
    /// Written heatmap, if any.
    pub heatmap: Option<PathBuf>,
    /// Written mesh, if any.
    pub mesh: Option<PathBuf>,
}

/// Loads a scan with the configured loader options.
pub fn load_scan(options: &Options, scan: &Path) -> Result<RadiusMatrix> {
    ScanLoader::new(options.loader.clone())?.load(scan)
}

/// Reconstructs a surface with the configured reconstruction options.
pub fn reconstruct(options: &Options, radius: &RadiusMatrix) -> Result<Surface> {
    SurfaceReconstructor::new(options.reconstruction.clone())?.reconstruct(radius)
}

/// Processes one scan and writes the requested artifacts into `out_dir`.
///
/// Nothing is written unless both loading and reconstruction succeed.
pub fn run(options: &Options, scan: &Path, out_dir: &Path, outputs: Outputs) -> Result<RunReport> {
    options.validate()?;

    let color_maps = ColorMapRegistry::new();
    let color_map = color_maps.require(&options.render.colormap)?;

    let radius = load_scan(options, scan)?;
    let surface = reconstruct(options, &radius)?;
    log::info!(
        "reconstructed '{}': {} angles x {} depths",
        scan.display(),
        radius.angles(),
        radius.depths()
    );

    let stem = scan
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scan");

    if outputs.heatmap || outputs.mesh {
        std::fs::create_dir_all(out_dir)?;
    }

    let heatmap = if outputs.heatmap {
        let path = out_dir.join(format!("{stem}_heatmap.png"));
        Heatmap::from_radius(&radius, color_map).save_png(&path)?;
        Some(path)
    } else {
        None
    };

    let mesh = if outputs.mesh {
        let path = out_dir.join(format!("{stem}_surface.ply"));
        let mesh = SurfaceMesh::from_surface(
            &surface,
            color_map,
            options.render.max_rows,
            options.render.max_cols,
        );
        save_ply(&mesh, &path)?;
        Some(path)
    } else {
        None
    };

    Ok(RunReport {
        scan: scan.to_path_buf(),
        shape: radius.shape(),
        bounds: surface.bounds,
        heatmap,
        mesh,
    })
}
