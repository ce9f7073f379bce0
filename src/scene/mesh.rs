use crate::core::geometry::{Face, Triangle};
use crate::core::math::transform::Transform;
use crate::error::{RenderError, Result};
use crate::scene::material::Material;
use crate::scene::normals::compute_vertex_normals;
use log::debug;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;

/// An indexed triangle mesh with per-face and smooth per-vertex normals.
///
/// Geometry and material are fixed once the mesh is built. Only `transform`
/// may change, and only between frames.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    faces: Vec<Face>,
    normals: Vec<Vector3<f32>>,
    vertex_normals: Vec<Vector3<f32>>,
    material: Material,
    /// Placement of the mesh in world space.
    pub transform: Transform,
}

impl Mesh {
    /// Builds a mesh from indexed geometry, validating every face index.
    pub fn new(
        vertices: Vec<Point3<f32>>,
        faces: Vec<Face>,
        normals: Vec<Vector3<f32>>,
        material: Material,
    ) -> Result<Self> {
        if faces.len() != normals.len() {
            return Err(RenderError::NormalCountMismatch {
                faces: faces.len(),
                normals: normals.len(),
            });
        }

        for (face_idx, face) in faces.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&i| i >= vertices.len()) {
                return Err(RenderError::VertexIndexOutOfRange {
                    face: face_idx,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }

        let vertex_normals = compute_vertex_normals(vertices.len(), &faces, &normals);

        Ok(Self {
            vertices,
            faces,
            normals,
            vertex_normals,
            material,
            transform: Transform::identity(),
        })
    }

    /// Builds a mesh from a triangle soup, merging corners with identical
    /// coordinates into a single vertex.
    pub fn from_triangles(triangles: &[Triangle], material: Material) -> Result<Self> {
        let mut vertices = Vec::new();
        let mut faces = Vec::with_capacity(triangles.len());
        let mut normals = Vec::with_capacity(triangles.len());
        let mut lookup: HashMap<[u32; 3], usize> = HashMap::new();

        for triangle in triangles {
            let face = triangle.vertices.map(|corner| {
                *lookup.entry(vertex_key(&corner)).or_insert_with(|| {
                    vertices.push(corner);
                    vertices.len() - 1
                })
            });
            faces.push(face);
            normals.push(triangle.normal);
        }

        debug!(
            "Deduplicated {} corners into {} vertices.",
            triangles.len() * 3,
            vertices.len()
        );

        Self::new(vertices, faces, normals, material)
    }

    /// A single triangle in the z = 0 plane facing +Z, counter-clockwise.
    pub fn create_test_triangle(material: Material) -> Self {
        let triangle = Triangle::new(
            [
                Point3::new(-0.5, -0.5, 0.0),
                Point3::new(0.5, -0.5, 0.0),
                Point3::new(0.0, 0.5, 0.0),
            ],
            Vector3::new(0.0, 0.0, 1.0),
        );
        Self {
            vertices: triangle.vertices.to_vec(),
            faces: vec![[0, 1, 2]],
            normals: vec![triangle.normal],
            vertex_normals: vec![triangle.normal; 3],
            material,
            transform: Transform::identity(),
        }
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// One face normal per face, as supplied by the source data.
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn vertex_normals(&self) -> &[Vector3<f32>] {
        &self.vertex_normals
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// Hash key for exact coordinate equality. `-0.0` and `0.0` share a key.
fn vertex_key(p: &Point3<f32>) -> [u32; 3] {
    [p.x, p.y, p.z].map(|c| if c == 0.0 { 0.0f32.to_bits() } else { c.to_bits() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> Vec<Triangle> {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(1.0, 1.0, 0.0);
        let d = Point3::new(0.0, 1.0, 0.0);
        vec![Triangle::from_winding([a, b, c]), Triangle::from_winding([a, c, d])]
    }

    #[test]
    fn test_shared_corners_are_deduplicated() {
        let mesh = Mesh::from_triangles(&quad(), Material::default()).unwrap();
        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.faces(), &[[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.normals().len(), 2);
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let triangles = [
            Triangle::from_winding([
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ]),
            Triangle::from_winding([
                Point3::new(-0.0, 0.0, -0.0),
                Point3::new(0.0, -1.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
            ]),
        ];
        let mesh = Mesh::from_triangles(&triangles, Material::default()).unwrap();
        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.faces()[1][0], 0);
    }

    #[test]
    fn test_vertex_normals_computed_at_construction() {
        let mesh = Mesh::from_triangles(&quad(), Material::default()).unwrap();
        assert_eq!(mesh.vertex_normals().len(), 4);
        for n in mesh.vertex_normals() {
            assert_relative_eq!(*n, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let err = Mesh::new(
            vertices,
            vec![[0, 1, 2], [0, 2, 7]],
            vec![Vector3::z(), Vector3::z()],
            Material::default(),
        )
        .unwrap_err();

        match err {
            RenderError::VertexIndexOutOfRange {
                face,
                index,
                vertex_count,
            } => {
                assert_eq!((face, index, vertex_count), (1, 7, 3));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_face_normal_is_rejected() {
        let vertices = vec![Point3::origin(); 3];
        let err = Mesh::new(vertices, vec![[0, 1, 2]], Vec::new(), Material::default());
        assert!(matches!(
            err,
            Err(RenderError::NormalCountMismatch {
                faces: 1,
                normals: 0
            })
        ));
    }

    #[test]
    fn test_degenerate_face_is_accepted() {
        let vertices = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let mesh = Mesh::new(vertices, vec![[0, 0, 1]], vec![Vector3::z()], Material::default());
        assert!(mesh.is_ok());
    }

    #[test]
    fn test_test_triangle_faces_positive_z() {
        let mesh = Mesh::create_test_triangle(Material::default());
        assert_eq!(mesh.faces().len(), 1);
        assert_eq!(mesh.normals()[0], Vector3::new(0.0, 0.0, 1.0));
    }
}
