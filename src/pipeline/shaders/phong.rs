use crate::core::color::BYTE_RANGE;
use crate::core::math::interpolation::{interpolate_point, interpolate_vector};
use crate::core::pipeline::{Fragment, Primitive, Shader};
use crate::pipeline::shaders::lighting::compute_phong;
use crate::scene::camera::Camera;
use crate::scene::light::PointLight;
use crate::scene::material::Material;
use nalgebra::Vector3;

/// Per-pixel Phong lighting with smoothly interpolated vertex normals.
///
/// The shaded position is recovered by blending the device-space corners
/// and un-projecting through the camera, so it stays on the pixel's ray.
pub struct PhongShader<'a> {
    pub camera: &'a Camera,
    pub light: &'a PointLight,
    pub ambient_light: Vector3<f32>,
}

impl<'a> PhongShader<'a> {
    pub fn new(camera: &'a Camera, light: &'a PointLight, ambient_light: Vector3<f32>) -> Self {
        Self {
            camera,
            light,
            ambient_light,
        }
    }
}

impl Shader for PhongShader<'_> {
    fn fragment(
        &self,
        primitive: &Primitive,
        fragment: &Fragment,
        material: &Material,
    ) -> Vector3<f32> {
        let bary = &fragment.barycentric;

        let device_pos = interpolate_point(bary, &primitive.device);
        let world_pos = self.camera.inverse_project_point(&device_pos);

        // Opposing vertex normals can cancel out
        let normal = interpolate_vector(bary, &primitive.vertex_normals)
            .try_normalize(f32::EPSILON)
            .unwrap_or(primitive.face_normal);

        let view_dir = self.camera.position() - world_pos;

        compute_phong(
            self.light,
            &self.ambient_light,
            &world_pos,
            &normal,
            &view_dir,
            material,
        ) * BYTE_RANGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::shaders::lighting::compute_ambient;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn camera() -> Camera {
        Camera::new_perspective(60.0, 1.0, 0.5, 20.0)
    }

    fn primitive(camera: &Camera, vertex_normals: [Vector3<f32>; 3]) -> Primitive {
        let world = [
            Point3::new(-1.0, -1.0, -3.0),
            Point3::new(1.0, -1.0, -3.0),
            Point3::new(0.0, 1.0, -4.0),
        ];
        Primitive {
            world,
            device: world.map(|p| camera.project_point(&p)),
            face_normal: Vector3::z(),
            vertex_normals,
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

    fn white() -> Vector3<f32> {
        Vector3::new(1.0, 1.0, 1.0)
    }

    #[test]
    fn test_ambient_only_ignores_light_position() {
        let camera = camera();
        let prim = primitive(&camera, [Vector3::z(); 3]);
        let material = Material::new(Vector3::new(0.2, 0.4, 0.8), white(), 0.5, 0.0, 0.0, 8.0);
        let ambient_light = Vector3::new(1.0, 0.5, 1.0);
        let expected = compute_ambient(&ambient_light, &material) * BYTE_RANGE;

        for position in [Point3::new(0.0, 5.0, 0.0), Point3::new(-3.0, 0.0, -10.0)] {
            let light = PointLight::new(position, white(), 50.0);
            let shader = PhongShader::new(&camera, &light, ambient_light);
            let color = shader.fragment(&prim, &fragment(Vector3::new(0.2, 0.3, 0.5)), &material);
            assert_eq!(color, expected);
        }
    }

    #[test]
    fn test_corner_shades_at_its_world_position() {
        let camera = camera();
        let normals = [
            Vector3::new(0.0, 0.6, 0.8),
            Vector3::z(),
            Vector3::new(0.6, 0.0, 0.8),
        ];
        let prim = primitive(&camera, normals);
        let light = PointLight::new(Point3::new(1.0, 2.0, 0.0), white(), 20.0);
        let ambient_light = Vector3::new(0.1, 0.1, 0.1);
        let material = Material::default();
        let shader = PhongShader::new(&camera, &light, ambient_light);

        let color = shader.fragment(&prim, &fragment(Vector3::new(1.0, 0.0, 0.0)), &material);

        let corner = prim.world[0];
        let view_dir = camera.position() - corner;
        let expected =
            compute_phong(&light, &ambient_light, &corner, &normals[0], &view_dir, &material);
        assert_relative_eq!(color, expected * BYTE_RANGE, max_relative = 1e-2);
    }

    #[test]
    fn test_cancelled_normals_fall_back_to_face_normal() {
        let camera = camera();
        let opposing = [Vector3::x(), -Vector3::x(), Vector3::zeros()];
        let cancelled = primitive(&camera, opposing);
        let flat = primitive(&camera, [Vector3::z(); 3]);
        let light = PointLight::new(Point3::new(0.0, 0.0, 2.0), white(), 30.0);
        let shader = PhongShader::new(&camera, &light, Vector3::zeros());
        let material = Material::default();

        let frag = fragment(Vector3::new(0.5, 0.5, 0.0));
        let color = shader.fragment(&cancelled, &frag, &material);
        assert!(color.iter().all(|c| c.is_finite()));
        assert_eq!(color, shader.fragment(&flat, &frag, &material));
    }
}
