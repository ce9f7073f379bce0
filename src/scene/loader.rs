use crate::core::geometry::Triangle;
use crate::core::math::transform::Transform;
use crate::core::screen::Screen;
use crate::error::{RenderError, Result};
use crate::io::config::{CameraConfig, Config, ObjectConfig};
use crate::io::{obj_loader, stl_loader};
use crate::scene::camera::Camera;
use crate::scene::context::RenderContext;
use crate::scene::light::PointLight;
use crate::scene::material::Material;
use crate::scene::mesh::Mesh;
use crate::scene::utils::normalize_and_center;
use log::{debug, error, info};
use nalgebra::{Point3, Vector3};
use std::path::Path;

/// Builds the camera described by `[camera]`, sized to the output image.
pub fn build_camera(config: &CameraConfig, aspect_ratio: f32) -> Result<Camera> {
    let mut camera = match config.projection.to_ascii_lowercase().as_str() {
        "perspective" => Camera::new_perspective(config.fov, aspect_ratio, config.near, config.far),
        "orthographic" => {
            Camera::new_orthographic(config.ortho_height, aspect_ratio, config.near, config.far)
        }
        other => return Err(RenderError::InvalidProjection(other.to_string())),
    };
    camera.transform = Transform::new(
        Point3::from(config.position),
        Vector3::from(config.rotation),
    );
    Ok(camera)
}

fn build_material(obj_conf: &ObjectConfig) -> Material {
    Material::new(
        Vector3::from(obj_conf.diffuse_color),
        Vector3::from(obj_conf.specular_color),
        obj_conf.ka,
        obj_conf.kd,
        obj_conf.ks,
        obj_conf.ke,
    )
}

/// Reads a model file as a triangle soup, choosing the format by extension.
/// `.stl` keeps the file's facet normals; anything else is read as OBJ.
pub fn load_model(path: &str) -> Result<Vec<Triangle>> {
    let is_stl = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"));
    if is_stl {
        stl_loader::load_triangles(path)
    } else {
        obj_loader::load_triangles(path)
    }
}

/// Loads one `[[objects]]` entry. A model that fails to load is replaced
/// by a single test triangle so the rest of the scene still renders.
fn load_object(obj_conf: &ObjectConfig) -> Result<Mesh> {
    let material = build_material(obj_conf);

    let mesh = match load_model(&obj_conf.path) {
        Ok(mut triangles) => {
            if obj_conf.normalize {
                let (center, scale) = normalize_and_center(&mut triangles);
                debug!(
                    "Model '{}' normalized. Center: {:?}, Scale: {:.4}",
                    obj_conf.path, center, scale
                );
            }
            Mesh::from_triangles(&triangles, material)?
        }
        Err(e) => {
            error!(
                "Error loading model '{}': {}. Using fallback mesh.",
                obj_conf.path, e
            );
            Mesh::create_test_triangle(material)
        }
    };

    Ok(mesh.with_transform(Transform::new(
        Point3::from(obj_conf.position),
        Vector3::from(obj_conf.rotation),
    )))
}

/// Initial resource loading (heavy I/O). Returns a RenderContext.
pub fn init_scene_resources(config: &Config) -> Result<RenderContext> {
    // 1. Camera
    let aspect_ratio = Screen::new(config.render.width, config.render.height).aspect_ratio();
    let camera = build_camera(&config.camera, aspect_ratio)?;

    // 2. Light
    let light = PointLight::new(
        Point3::from(config.light.position),
        Vector3::from(config.light.color),
        config.light.intensity,
    );

    // 3. Objects
    let meshes = config
        .objects
        .iter()
        .map(load_object)
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Scene initialized with {} objects ({} faces).",
        meshes.len(),
        meshes.iter().map(|m| m.faces().len()).sum::<usize>()
    );

    Ok(RenderContext {
        camera,
        light,
        meshes,
    })
}
