use crate::scene::material::Material;
use nalgebra::{Point3, Vector3};

/// Per-face data handed to the shading stage, computed once per face.
#[derive(Debug, Clone, Copy)]
pub struct Primitive {
    /// Vertices after the mesh transform (world space).
    pub world: [Point3<f32>; 3],
    /// Vertices after camera projection: (x, y, depth), depth in [-1, 1].
    pub device: [Point3<f32>; 3],
    /// Face normal rotated by the mesh transform.
    pub face_normal: Vector3<f32>,
    /// Smooth vertex normals rotated by the mesh transform.
    pub vertex_normals: [Vector3<f32>; 3],
}

/// Per-pixel data for a covered pixel that passed the depth test.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub x: usize,
    pub y: usize,
    /// Screen-space barycentric weights of the pixel center.
    pub barycentric: Vector3<f32>,
    /// Interpolated device depth.
    pub depth: f32,
}

/// The shading stage of the pipeline.
///
/// One implementation exists per shading mode; the renderer picks the
/// implementation once per frame so the pixel loop is monomorphized.
pub trait Shader {
    /// Returns the pixel color in byte range (0..=255 per channel, unclamped).
    fn fragment(
        &self,
        primitive: &Primitive,
        fragment: &Fragment,
        material: &Material,
    ) -> Vector3<f32>;
}
