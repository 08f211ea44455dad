//! End-to-end tests: scan file on disk -> reconstruction -> written artifacts.

use std::path::{Path, PathBuf};

use scansurf::*;

fn write_scan(dir: &Path, name: &str, body: &str) -> PathBuf {
    let mut text = String::new();
    for i in 0..13 {
        text.push_str(&format!("# header {i}\n"));
    }
    text.push_str(body);
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_loader_example() {
    let dir = tempfile::tempdir().unwrap();
    let scan = write_scan(dir.path(), "scan.csv", "1,2\n3,4\n");
    let radius = load_scan(&Options::default(), &scan).unwrap();
    assert_eq!(
        radius,
        RadiusMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
    );
}

#[test]
fn test_run_writes_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let scan = write_scan(
        dir.path(),
        "part.csv",
        "1.0,1.1,1.2\n1.0,1.2,1.4\n1.1,1.3,1.5\n1.0,1.1,1.2\n",
    );
    let out = dir.path().join("out");

    let report = run(&Options::default(), &scan, &out, Outputs::default()).unwrap();
    assert_eq!(report.shape, (4, 3));

    let heatmap = report.heatmap.unwrap();
    let mesh = report.mesh.unwrap();
    assert_eq!(heatmap, out.join("part_heatmap.png"));
    assert_eq!(mesh, out.join("part_surface.ply"));

    let image = image_dimensions(&heatmap);
    assert_eq!(image, (3, 4));

    let ply = std::fs::read_to_string(&mesh).unwrap();
    assert!(ply.contains("element vertex 12"));
    assert!(ply.contains("element face 12"));

    let [(x0, x1), (y0, y1), (z0, z1)] = report.bounds.limits();
    let spans = [x1 - x0, y1 - y0, z1 - z0];
    assert!((spans[0] - spans[1]).abs() < 1e-12);
    assert!((spans[1] - spans[2]).abs() < 1e-12);
}

fn image_dimensions(path: &Path) -> (u32, u32) {
    // PNG IHDR: width and height are big-endian u32 at byte offsets 16 and 20
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

#[test]
fn test_run_selected_outputs_only() {
    let dir = tempfile::tempdir().unwrap();
    let scan = write_scan(dir.path(), "part.csv", "1,2\n3,4\n");
    let out = dir.path().join("out");
    let outputs = Outputs {
        heatmap: false,
        mesh: true,
    };
    let report = run(&Options::default(), &scan, &out, outputs).unwrap();
    assert!(report.heatmap.is_none());
    assert!(!out.join("part_heatmap.png").exists());
    assert!(report.mesh.unwrap().exists());
}

#[test]
fn test_missing_scan_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let err = run(
        &Options::default(),
        &dir.path().join("missing.csv"),
        &out,
        Outputs::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ScanError::NotFound { .. }));
    assert!(!out.exists());
}

#[test]
fn test_ragged_scan_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let scan = write_scan(dir.path(), "bad.csv", "1,2,3\n4,5\n");
    let err = load_scan(&Options::default(), &scan).unwrap_err();
    assert!(matches!(err, ScanError::Format { line: 15, .. }));
}

#[test]
fn test_flat_scan_policies() {
    let dir = tempfile::tempdir().unwrap();
    let scan = write_scan(dir.path(), "flat.csv", "2,2\n2,2\n2,2\n");
    let out = dir.path().join("out");

    let err = run(&Options::default(), &scan, &out, Outputs::default()).unwrap_err();
    assert!(matches!(err, ScanError::DegenerateRange { .. }));
    assert!(!out.exists());

    let mut options = Options::default();
    options.reconstruction.degenerate_range = DegenerateRangePolicy::Flat;
    let report = run(&options, &scan, &out, Outputs::default()).unwrap();
    assert_eq!(report.shape, (3, 2));
}

#[test]
fn test_unknown_colormap_is_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let scan = write_scan(dir.path(), "part.csv", "1,2\n3,4\n");
    let mut options = Options::default();
    options.render.colormap = "nope".to_string();
    let err = run(&options, &scan, dir.path(), Outputs::default()).unwrap_err();
    assert!(matches!(err, ScanError::RenderError(msg) if msg.contains("nope")));
}

#[test]
fn test_prompt_selection_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    write_scan(dir.path(), "picked.csv", "1,2\n3,4\n");

    let input = "picked.csv\n\n";
    let mut selector = PromptSelector::new(std::io::Cursor::new(input), Vec::new());
    let request = FileRequest {
        initial_dir: dir.path().to_path_buf(),
        quiet: true,
        ..FileRequest::default()
    };
    let scan = get_file(&mut selector, &request, "unused.csv");
    let out = get_dir(
        &mut selector,
        &DirRequest {
            quiet: true,
            ..DirRequest::default()
        },
        dir.path().join("results"),
    );

    let report = run(&Options::default(), &scan, &out, Outputs::default()).unwrap();
    assert_eq!(report.scan, dir.path().join("picked.csv"));
    assert!(dir.path().join("results/picked_surface.ply").exists());
}

#[test]
fn test_library_entry_points_validate_options() {
    let dir = tempfile::tempdir().unwrap();
    let scan = write_scan(dir.path(), "part.csv", "1,2\n3,4\n");

    let mut options = Options::default();
    options.loader.delimiter = ' ';
    assert!(matches!(
        load_scan(&options, &scan),
        Err(ScanError::InvalidOption(_))
    ));

    let radius = load_scan(&Options::default(), &scan).unwrap();
    let mut options = Options::default();
    options.reconstruction.axial_spacing = -1.0;
    assert!(matches!(
        reconstruct(&options, &radius),
        Err(ScanError::InvalidOption(_))
    ));
}
