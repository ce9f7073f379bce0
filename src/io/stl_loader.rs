use crate::core::geometry::Triangle;
use crate::error::Result;
use log::info;
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads an ASCII or binary STL file as a triangle soup.
///
/// Each facet keeps the normal stored in the file, unchanged; it is not
/// recomputed from the winding order.
pub fn load_triangles<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    info!("Loading STL file: {}", path.display());

    let mut reader = BufReader::new(File::open(path)?);
    let mesh = stl_io::read_stl(&mut reader)?;

    let vertex = |i: usize| {
        let v = &mesh.vertices[i];
        Point3::new(v[0], v[1], v[2])
    };

    let triangles: Vec<Triangle> = mesh
        .faces
        .iter()
        .map(|face| {
            let n = &face.normal;
            Triangle::new(face.vertices.map(vertex), Vector3::new(n[0], n[1], n[2]))
        })
        .collect();

    info!(
        "STL loaded successfully. {} vertices, {} triangles.",
        mesh.vertices.len(),
        triangles.len()
    );

    Ok(triangles)
}
