//! scansurf command-line tool.
//!
//! Reads one or more rotational range scans and writes, for each, a heatmap
//! preview and a colored surface mesh with equal-aspect axis limits.
//!
//! # Usage
//!
//! ```bash
//! scansurf Data/part_01.csv --out-dir results
//! scansurf --selector prompt --multiple
//! ```

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use scansurf::{
    get_dir, get_files, normalize_path, run, AngularSpacing, ArgsSelector, DegenerateRangePolicy,
    DirRequest, FileRequest, Options, Outputs, PathSelector, PromptSelector, Result,
    SelectorBackend,
};

/// Reconstruct a 3D surface from a rotational range scan
#[derive(Parser, Debug)]
#[command(name = "scansurf")]
#[command(about = "Reconstruct a 3D surface from a rotational range scan")]
struct Args {
    /// Scan files (comma-delimited tables)
    scans: Vec<PathBuf>,

    /// JSON options file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How scan and output paths are selected
    #[arg(long, value_enum, default_value_t = SelectorBackend::Args)]
    selector: SelectorBackend,

    /// Ask for several scans at the prompt instead of one
    #[arg(long)]
    multiple: bool,

    /// Directory the prompt starts from
    #[arg(long, default_value = "./Data")]
    initial_dir: PathBuf,

    /// Output directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Axial distance between samples
    #[arg(long)]
    spacing: Option<f64>,

    /// Number of header lines to skip
    #[arg(long)]
    header_rows: Option<usize>,

    /// Spread the angles over [start, end) instead of [start, end]
    #[arg(long)]
    half_open: bool,

    /// Render a flat radius field uncolored instead of failing
    #[arg(long)]
    flat_ok: bool,

    /// Color map name
    #[arg(long)]
    colormap: Option<String>,

    /// Skip the heatmap preview
    #[arg(long)]
    no_heatmap: bool,

    /// Skip the surface mesh
    #[arg(long)]
    no_mesh: bool,

    /// Do not print prompts
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_json_file(path)?,
            None => Options::default(),
        };

        if let Some(spacing) = self.spacing {
            options.reconstruction.axial_spacing = spacing;
        }
        if let Some(header_rows) = self.header_rows {
            options.loader.header_rows = header_rows;
        }
        if self.half_open {
            options.reconstruction.angular_spacing = AngularSpacing::HalfOpen;
        }
        if self.flat_ok {
            options.reconstruction.degenerate_range = DegenerateRangePolicy::Flat;
        }
        if let Some(colormap) = &self.colormap {
            options.render.colormap.clone_from(colormap);
        }

        options.validate()?;
        Ok(options)
    }

    fn file_request(&self) -> FileRequest {
        FileRequest {
            initial_dir: self.initial_dir.clone(),
            quiet: self.quiet,
            ..FileRequest::default()
        }
    }

    /// Scans to process. Empty when the selection was cancelled.
    fn select_scans(&self, selector: &mut dyn PathSelector) -> Vec<PathBuf> {
        let request = self.file_request();
        if self.multiple || self.scans.len() > 1 {
            get_files(selector, &request)
        } else {
            selector
                .select_file(&request)
                .map(normalize_path)
                .into_iter()
                .collect()
        }
    }

    fn selector(&self) -> Box<dyn PathSelector> {
        match self.selector {
            SelectorBackend::Args => Box::new(ArgsSelector::new(
                self.scans.clone(),
                self.out_dir.clone(),
            )),
            SelectorBackend::Prompt => Box::new(PromptSelector::new(
                BufReader::new(io::stdin()),
                io::stdout(),
            )),
        }
    }
}

fn main() -> ExitCode {
    scansurf::init_logging();

    let args = Args::parse();

    let options = match args.options() {
        Ok(options) => options,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    let mut selector = args.selector();

    let scans = args.select_scans(selector.as_mut());
    if scans.is_empty() {
        error!("no scan selected");
        return ExitCode::from(2);
    }

    let dir_request = DirRequest {
        quiet: args.quiet,
        ..DirRequest::default()
    };
    let default_out = args.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let out_dir = get_dir(selector.as_mut(), &dir_request, default_out);

    let outputs = Outputs {
        heatmap: !args.no_heatmap,
        mesh: !args.no_mesh,
    };

    let mut failures = 0;
    for scan in &scans {
        match run(&options, scan, &out_dir, outputs) {
            Ok(report) => {
                let [(x0, x1), (y0, y1), (z0, z1)] = report.bounds.limits();
                info!(
                    "'{}' ({}x{}): xlim [{x0:.4}, {x1:.4}] ylim [{y0:.4}, {y1:.4}] zlim [{z0:.4}, {z1:.4}]",
                    report.scan.display(),
                    report.shape.0,
                    report.shape.1
                );
            }
            Err(e) => {
                error!("{}: {e}", scan.display());
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
