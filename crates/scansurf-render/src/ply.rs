//! PLY export of a surface mesh.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;

use crate::error::ExportResult;
use crate::mesh::SurfaceMesh;

/// Writes `mesh` as ASCII PLY with per-vertex colors.
///
/// The equal-aspect axis limits are stored as header comments so that a viewer
/// can restore the undistorted framing.
pub fn write_ply(mesh: &SurfaceMesh, out: &mut impl Write) -> ExportResult<usize> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;
    ply.header
        .comments
        .push("generated by scansurf".to_string());
    for (axis, (lo, hi)) in ["x", "y", "z"].iter().zip(mesh.bounds.limits()) {
        ply.header
            .comments
            .push(format!("{axis}lim {lo} {hi}"));
    }

    let mut vertex = ElementDef::new("vertex".to_string());
    for name in ["x", "y", "z"] {
        vertex.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    for name in ["red", "green", "blue"] {
        vertex.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar(ScalarType::UChar),
        ));
    }
    ply.header.elements.add(vertex);

    let mut face = ElementDef::new("face".to_string());
    face.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::UInt),
    ));
    ply.header.elements.add(face);

    let vertices: Vec<DefaultElement> = mesh
        .vertices
        .iter()
        .zip(&mesh.colors)
        .map(|(p, [r, g, b])| {
            let mut element = DefaultElement::new();
            element.insert("x".to_string(), Property::Float(p.x));
            element.insert("y".to_string(), Property::Float(p.y));
            element.insert("z".to_string(), Property::Float(p.z));
            element.insert("red".to_string(), Property::UChar(*r));
            element.insert("green".to_string(), Property::UChar(*g));
            element.insert("blue".to_string(), Property::UChar(*b));
            element
        })
        .collect();
    ply.payload.insert("vertex".to_string(), vertices);

    let faces: Vec<DefaultElement> = mesh
        .faces
        .iter()
        .map(|f| {
            let mut element = DefaultElement::new();
            element.insert("vertex_indices".to_string(), Property::ListUInt(f.to_vec()));
            element
        })
        .collect();
    ply.payload.insert("face".to_string(), faces);

    let written = Writer::new().write_ply(out, &mut ply)?;
    Ok(written)
}

/// Writes `mesh` to a PLY file.
pub fn save_ply(mesh: &SurfaceMesh, path: impl AsRef<Path>) -> ExportResult<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    let written = write_ply(mesh, &mut out)?;
    out.flush()?;
    log::info!(
        "wrote {} vertices / {} triangles ({written} bytes) to '{}'",
        mesh.vertices.len(),
        mesh.num_triangles(),
        path.display()
    );
    Ok(())
}
