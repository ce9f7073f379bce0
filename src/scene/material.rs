use nalgebra::Vector3;

/// Reflectance parameters for the Phong lighting model.
///
/// Shared by every face of a mesh and never mutated after the mesh is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    /// Ambient coefficient.
    pub ka: f32,
    /// Diffuse coefficient.
    pub kd: f32,
    /// Specular coefficient.
    pub ks: f32,
    /// Specular exponent (shininess).
    pub ke: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Vector3::new(0.8, 0.8, 0.8),
            specular_color: Vector3::new(1.0, 1.0, 1.0),
            ka: 0.1,
            kd: 1.0,
            ks: 0.5,
            ke: 32.0,
        }
    }
}

impl Material {
    pub fn new(
        diffuse_color: Vector3<f32>,
        specular_color: Vector3<f32>,
        ka: f32,
        kd: f32,
        ks: f32,
        ke: f32,
    ) -> Self {
        Self {
            diffuse_color,
            specular_color,
            ka,
            kd,
            ks,
            ke,
        }
    }
}
