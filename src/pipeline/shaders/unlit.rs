use crate::core::color::{BYTE_RANGE, grayscale};
use crate::core::math::interpolation::interpolate_vector;
use crate::core::pipeline::{Fragment, Primitive, Shader};
use crate::scene::material::Material;
use nalgebra::Vector3;

/// Blends a fixed color per triangle corner by barycentric weight.
/// Ignores lighting and material; useful for checking interpolation.
#[derive(Debug, Clone, Copy)]
pub struct BarycentricShader {
    pub corner_colors: [Vector3<f32>; 3],
}

impl Default for BarycentricShader {
    fn default() -> Self {
        Self {
            corner_colors: [
                Vector3::new(BYTE_RANGE, 0.0, 0.0),
                Vector3::new(0.0, BYTE_RANGE, 0.0),
                Vector3::new(0.0, 0.0, BYTE_RANGE),
            ],
        }
    }
}

impl Shader for BarycentricShader {
    fn fragment(&self, _: &Primitive, fragment: &Fragment, _: &Material) -> Vector3<f32> {
        interpolate_vector(&fragment.barycentric, &self.corner_colors)
    }
}

/// Visualizes device depth as gray: far plane black, near plane white.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthShader;

impl Shader for DepthShader {
    fn fragment(&self, _: &Primitive, fragment: &Fragment, _: &Material) -> Vector3<f32> {
        grayscale((fragment.depth + 1.0) * 0.5 * BYTE_RANGE)
    }
}
