use crate::core::geometry::Triangle;
use crate::error::{RenderError, Result};
use log::{info, warn};
use nalgebra::{Point3, Vector3};
use std::io;
use std::path::Path;

/// Loads an OBJ file as a triangle soup with one face normal per triangle.
///
/// Polygons are triangulated and all sub-models are concatenated. The face
/// normal follows the winding order; when the file carries vertex normals,
/// it is flipped to agree with them.
pub fn load_triangles<P: AsRef<Path>>(path: P) -> Result<Vec<Triangle>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RenderError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        )));
    }

    info!("Loading OBJ file: {}", path.display());

    let load_options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };

    // Materials come from the scene config, not from MTL files
    let (models, _materials) = tobj::load_obj(path, &load_options)?;

    let mut triangles = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        if mesh.normals.is_empty() {
            warn!(
                "Mesh '{}' has no normals; using winding order only.",
                model.name
            );
        }
        triangles.extend(triangles_from_mesh(mesh));
    }

    info!(
        "OBJ loaded successfully. {} models, {} triangles.",
        models.len(),
        triangles.len()
    );

    Ok(triangles)
}

fn triangles_from_mesh(mesh: &tobj::Mesh) -> Vec<Triangle> {
    let position = |i: usize| {
        Point3::new(
            mesh.positions[i * 3],
            mesh.positions[i * 3 + 1],
            mesh.positions[i * 3 + 2],
        )
    };
    let normal = |i: usize| {
        mesh.normals
            .get(i * 3..i * 3 + 3)
            .map(|n| Vector3::new(n[0], n[1], n[2]))
    };

    mesh.indices
        .chunks_exact(3)
        .map(|chunk| {
            let idx = [chunk[0], chunk[1], chunk[2]].map(|i| i as usize);
            let vertices = idx.map(position);
            let wound = Triangle::from_winding(vertices);

            // Sum of the file normals, when every corner has one
            let supplied = idx
                .iter()
                .try_fold(Vector3::zeros(), |acc, &i| normal(i).map(|n| acc + n));

            match supplied {
                Some(sum) if wound.normal == Vector3::zeros() => Triangle::new(
                    vertices,
                    sum.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros),
                ),
                Some(sum) if wound.normal.dot(&sum) < 0.0 => Triangle::new(vertices, -wound.normal),
                _ => wound,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::fs;

    fn write_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "phong_rasterizer_{}_{}.obj",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_quad_is_triangulated_with_winding_normals() {
        let path = write_obj(
            "quad",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        );
        let triangles = load_triangles(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(triangles.len(), 2);
        for t in &triangles {
            assert_relative_eq!(t.normal, Vector3::z(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_file_normals_decide_orientation() {
        let path = write_obj(
            "flipped",
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 -1\nf 1//1 2//1 3//1\n",
        );
        let triangles = load_triangles(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(triangles.len(), 1);
        assert_relative_eq!(triangles[0].normal, -Vector3::z(), epsilon = 1e-6);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_triangles("/nonexistent/model.obj").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
