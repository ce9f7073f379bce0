use crate::scene::camera::Camera;
use crate::scene::light::PointLight;
use crate::scene::mesh::Mesh;

/// Holds all scene resources required for rendering.
///
/// Read-only during a render call; move meshes or the camera between calls.
pub struct RenderContext {
    pub camera: Camera,
    pub light: PointLight,
    pub meshes: Vec<Mesh>,
}
