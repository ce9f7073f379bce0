//! Ambient, diffuse and specular terms of the Phong reflection model.
//!
//! All results are in unit range; shaders scale them to byte range.
//! Point lights fall off as `intensity / (π · distance²)`.

use crate::scene::light::PointLight;
use crate::scene::material::Material;
use nalgebra::{Point3, Vector3};
use std::f32::consts::PI;

/// Unit direction from `point` to the light and the distance between them.
/// `None` when the point sits on the light.
#[inline]
fn light_direction(light: &PointLight, point: &Point3<f32>) -> Option<(Vector3<f32>, f32)> {
    let to_light = light.position() - point;
    let distance = to_light.norm();
    if distance <= f32::EPSILON {
        return None;
    }
    Some((to_light / distance, distance))
}

/// Light arriving at distance `distance`, per unit of surface response.
#[inline]
fn falloff(light: &PointLight, distance: f32) -> f32 {
    light.intensity / (PI * distance * distance)
}

/// `ambient_light ⊙ diffuse_color · ka`. Independent of the light position.
pub fn compute_ambient(ambient_light: &Vector3<f32>, material: &Material) -> Vector3<f32> {
    ambient_light.component_mul(&material.diffuse_color) * material.ka
}

/// Lambertian term with inverse-square falloff.
pub fn compute_diffuse(
    light: &PointLight,
    point: &Point3<f32>,
    normal: &Vector3<f32>,
    material: &Material,
) -> Vector3<f32> {
    let Some((light_dir, distance)) = light_direction(light, point) else {
        return Vector3::zeros();
    };

    let diffuse_intensity = normal.dot(&light_dir).max(0.0);
    let diffuse = diffuse_intensity * material.kd / (PI * distance * distance);

    light.color.component_mul(&material.diffuse_color) * (diffuse * light.intensity)
}

/// Mirror of the light direction `l` about the normal `n`: `-l + 2(n·l)n`.
#[inline]
pub fn reflect(l: &Vector3<f32>, n: &Vector3<f32>) -> Vector3<f32> {
    -l + n * (2.0 * l.dot(n))
}

/// Specular highlight given the unit view and reflection directions.
pub fn compute_specular(
    light: &PointLight,
    view_dir: &Vector3<f32>,
    reflect_dir: &Vector3<f32>,
    distance: f32,
    material: &Material,
) -> Vector3<f32> {
    let specular_strength = view_dir.dot(reflect_dir).max(0.0).powf(material.ke);
    light.color.component_mul(&material.specular_color)
        * (specular_strength * material.ks * falloff(light, distance))
}

/// Ambient + diffuse + specular at `point`.
///
/// `normal` and `view_dir` need not be unit length; zero vectors are kept
/// as zero and simply contribute nothing.
pub fn compute_phong(
    light: &PointLight,
    ambient_light: &Vector3<f32>,
    point: &Point3<f32>,
    normal: &Vector3<f32>,
    view_dir: &Vector3<f32>,
    material: &Material,
) -> Vector3<f32> {
    let normal = normal.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros);
    let view_dir = view_dir.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::zeros);

    let ambient = compute_ambient(ambient_light, material);
    let Some((light_dir, distance)) = light_direction(light, point) else {
        return ambient;
    };

    let diffuse = compute_diffuse(light, point, &normal, material);
    let reflect_dir = reflect(&light_dir, &normal);
    let specular = compute_specular(light, &view_dir, &reflect_dir, distance, material);

    ambient + diffuse + specular
}
