use crate::core::color::BYTE_RANGE;
use crate::core::math::interpolation::interpolate_point;
use crate::core::pipeline::{Fragment, Primitive, Shader};
use crate::pipeline::shaders::lighting::{compute_ambient, compute_diffuse};
use crate::scene::light::PointLight;
use crate::scene::material::Material;
use nalgebra::Vector3;

/// Ambient + diffuse lighting with one normal for the whole face.
///
/// The shaded position is the barycentric blend of the world-space corners.
pub struct FlatShader<'a> {
    pub light: &'a PointLight,
    pub ambient_light: Vector3<f32>,
}

impl<'a> FlatShader<'a> {
    pub fn new(light: &'a PointLight, ambient_light: Vector3<f32>) -> Self {
        Self {
            light,
            ambient_light,
        }
    }
}

impl Shader for FlatShader<'_> {
    fn fragment(
        &self,
        primitive: &Primitive,
        fragment: &Fragment,
        material: &Material,
    ) -> Vector3<f32> {
        let world_pos = interpolate_point(&fragment.barycentric, &primitive.world);

        let ambient = compute_ambient(&self.ambient_light, material);
        let diffuse = compute_diffuse(self.light, &world_pos, &primitive.face_normal, material);

        (ambient + diffuse) * BYTE_RANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn primitive() -> Primitive {
        let world = [
            Point3::new(-1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        Primitive {
            world,
            device: world,
            face_normal: Vector3::y(),
            vertex_normals: [Vector3::x(), Vector3::z(), -Vector3::x()],
        }
    }

    fn fragment(barycentric: Vector3<f32>) -> Fragment {
        Fragment {
            x: 0,
            y: 0,
            barycentric,
            depth: 0.0,
        }
    }

    #[test]
    fn test_ambient_only_is_constant() {
        let white = Vector3::new(1.0, 1.0, 1.0);
        let light = PointLight::new(Point3::new(0.0, 2.0, 0.0), white, 10.0);
        let shader = FlatShader::new(&light, white);
        let red = Vector3::new(1.0, 0.0, 0.0);
        let material = Material::new(red, Vector3::zeros(), 1.0, 0.0, 0.0, 1.0);

        let a = shader.fragment(&primitive(), &fragment(Vector3::new(1.0, 0.0, 0.0)), &material);
        let b = shader.fragment(&primitive(), &fragment(Vector3::new(0.2, 0.3, 0.5)), &material);
        assert_eq!(a, Vector3::new(255.0, 0.0, 0.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_uses_face_normal_not_vertex_normals() {
        let white = Vector3::new(1.0, 1.0, 1.0);
        let light = PointLight::new(Point3::new(0.0, 1.0, 0.0), white, 1.0);
        let shader = FlatShader::new(&light, Vector3::zeros());
        let material = Material::new(white, Vector3::zeros(), 0.0, 1.0, 0.0, 1.0);

        // The face normal points up at the light; the vertex normals do not
        let third = 1.0 / 3.0;
        let centroid = fragment(Vector3::new(third, third, third));
        let world_pos = interpolate_point(&centroid.barycentric, &primitive().world);
        let color = shader.fragment(&primitive(), &centroid, &material);

        let to_light = light.position() - world_pos;
        let distance = to_light.norm();
        let cos_theta = to_light.normalize().y;
        let expected = cos_theta / (std::f32::consts::PI * distance * distance) * 255.0;
        assert_relative_eq!(color.x, expected, epsilon = 1e-3);
    }
}
