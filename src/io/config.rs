use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            objects: vec![ObjectConfig {
                path: "assets/models/octahedron.obj".to_string(),
                position: [0.0, 0.0, 0.0],
                rotation: [0.0, 30.0, 0.0],
                normalize: true,
                diffuse_color: [1.0, 0.76, 0.33],
                specular_color: default_specular_color(),
                ka: default_ka(),
                kd: default_kd(),
                ks: default_ks(),
                ke: default_ke(),
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    // --- Output ---
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_output")]
    pub output: String,

    // --- Pipeline ---
    #[serde(default = "default_shading")]
    pub shading: String, // "barycentric", "flat", "phong", "depth"
    #[serde(default = "default_cull_mode")]
    pub cull_mode: String, // "back", "front", "none"

    // --- Environment ---
    /// Byte range, e.g. [30, 30, 40].
    #[serde(default)]
    pub background_color: [f32; 3],
    #[serde(default = "default_ambient")]
    pub ambient_light: [f32; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            output: default_output(),
            shading: default_shading(),
            cull_mode: default_cull_mode(),
            background_color: [0.0, 0.0, 0.0],
            ambient_light: default_ambient(),
        }
    }
}

// Defaults matching scene.toml
fn default_width() -> usize {
    800
}
fn default_height() -> usize {
    600
}
fn default_output() -> String {
    "output.png".to_string()
}
fn default_shading() -> String {
    "phong".to_string()
}
fn default_cull_mode() -> String {
    "back".to_string()
}
fn default_ambient() -> [f32; 3] {
    [0.1, 0.1, 0.1]
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_projection")]
    pub projection: String, // "perspective", "orthographic"
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_ortho_height")]
    pub ortho_height: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    /// Euler angles in degrees.
    #[serde(default)]
    pub rotation: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            projection: default_projection(),
            fov: default_fov(),
            ortho_height: default_ortho_height(),
            near: default_near(),
            far: default_far(),
            position: default_camera_position(),
            rotation: [0.0, 0.0, 0.0],
        }
    }
}

fn default_projection() -> String {
    "perspective".to_string()
}
fn default_fov() -> f32 {
    45.0
}
fn default_ortho_height() -> f32 {
    3.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    100.0
}
fn default_camera_position() -> [f32; 3] {
    [0.0, 0.0, 3.0]
}

#[derive(Debug, Deserialize)]
pub struct LightConfig {
    #[serde(default = "default_light_position")]
    pub position: [f32; 3],
    #[serde(default = "default_light_intensity")]
    pub intensity: f32,
    #[serde(default = "default_light_color")]
    pub color: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: default_light_position(),
            intensity: default_light_intensity(),
            color: default_light_color(),
        }
    }
}

fn default_light_position() -> [f32; 3] {
    [2.0, 3.0, 3.0]
}
fn default_light_intensity() -> f32 {
    60.0
}
fn default_light_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    pub path: String,

    // --- Transform ---
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    /// Center the model and fit it into [-1, 1]³ before placing it.
    #[serde(default)]
    pub normalize: bool,

    // --- Material ---
    #[serde(default = "default_diffuse_color")]
    pub diffuse_color: [f32; 3],
    #[serde(default = "default_specular_color")]
    pub specular_color: [f32; 3],
    #[serde(default = "default_ka")]
    pub ka: f32,
    #[serde(default = "default_kd")]
    pub kd: f32,
    #[serde(default = "default_ks")]
    pub ks: f32,
    #[serde(default = "default_ke")]
    pub ke: f32,
}

fn default_diffuse_color() -> [f32; 3] {
    [0.8, 0.8, 0.8]
}
fn default_specular_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}
fn default_ka() -> f32 {
    0.1
}
fn default_kd() -> f32 {
    1.0
}
fn default_ks() -> f32 {
    0.5
}
fn default_ke() -> f32 {
    32.0
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
