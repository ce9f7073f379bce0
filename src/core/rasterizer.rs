use crate::core::framebuffer::FrameBuffer;
use crate::core::math::interpolation::{interpolate_scalar, is_inside_triangle};
use crate::core::pipeline::{Fragment, Primitive, Shader};
use crate::core::screen::Screen;
use crate::error::RenderError;
use crate::scene::camera::Camera;
use crate::scene::mesh::Mesh;
use std::str::FromStr;

/// Which faces the orientation test throws away.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub enum CullMode {
    /// Skip faces whose normal points along the view direction.
    #[default]
    Back,
    /// Skip faces whose normal points against the view direction.
    Front,
    None,
}

impl FromStr for CullMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "back" => Ok(CullMode::Back),
            "front" => Ok(CullMode::Front),
            "none" => Ok(CullMode::None),
            _ => Err(RenderError::InvalidCullMode(s.to_string())),
        }
    }
}

/// What happened to a single face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceOutcome {
    Culled,
    /// A vertex fell outside the near/far depth range.
    Clipped,
    /// The screen bounding box missed the screen entirely.
    OffScreen,
    /// The face was scanned; `pixels` passed the depth test and were shaded.
    Rasterized { pixels: usize },
}

/// Draws the faces of a mesh into a `FrameBuffer`, one face at a time.
#[derive(Debug, Clone, Default)]
pub struct Rasterizer {
    pub cull_mode: CullMode,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            cull_mode: CullMode::Back,
        }
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) {
        self.cull_mode = mode;
    }

    /// Runs one face through cull, transform, projection, clip, screen
    /// mapping and the pixel loop.
    ///
    /// The orientation test uses the face normal as stored in the mesh, before
    /// the mesh transform, while shading receives transformed normals.
    ///
    /// Faces drawn later overwrite equal depths: the depth test keeps the
    /// larger depth and lets ties through.
    pub fn rasterize_face<S: Shader>(
        &self,
        framebuffer: &mut FrameBuffer,
        screen: &Screen,
        camera: &Camera,
        mesh: &Mesh,
        face_index: usize,
        shader: &S,
    ) -> FaceOutcome {
        let face = mesh.faces()[face_index];
        let face_normal = mesh.normals()[face_index];

        // 1. Orientation test
        let facing = face_normal.dot(&camera.view_direction());
        match self.cull_mode {
            CullMode::Back if facing > 0.0 => return FaceOutcome::Culled,
            CullMode::Front if facing < 0.0 => return FaceOutcome::Culled,
            _ => {}
        }

        // 2. Object → world
        let vertices = mesh.vertices();
        let world = face.map(|i| mesh.transform.apply_to_point(&vertices[i]));

        // 3. World → device
        let device = world.map(|p| camera.project_point(&p));

        // 4. Near/far clip, whole face only
        if device.iter().any(|p| !(-1.0..=1.0).contains(&p.z)) {
            return FaceOutcome::Clipped;
        }

        // 5. Device → pixels, 6. bounding box
        let screen_coords = screen.device_to_screen(&device);
        let Some(bounds) = screen.bounding_box(&screen_coords) else {
            return FaceOutcome::OffScreen;
        };

        let vertex_normals = mesh.vertex_normals();
        let primitive = Primitive {
            world,
            device,
            face_normal: mesh.transform.apply_to_normal(&face_normal),
            vertex_normals: face.map(|i| mesh.transform.apply_to_normal(&vertex_normals[i])),
        };
        let depths = device.map(|p| p.z);
        let material = mesh.material();

        // 7. Pixel loop
        let mut pixels = 0;
        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                let Some(bary) = screen.barycentric_coordinates(x, y, &screen_coords) else {
                    continue;
                };
                if !is_inside_triangle(bary) {
                    continue;
                }

                let depth = interpolate_scalar(&bary, depths);
                if !framebuffer.depth_buffer.test_and_set(x, y, depth) {
                    continue;
                }

                let fragment = Fragment {
                    x,
                    y,
                    barycentric: bary,
                    depth,
                };
                let color = shader.fragment(&primitive, &fragment, material);
                framebuffer.set_pixel(x, y, color);
                pixels += 1;
            }
        }

        FaceOutcome::Rasterized { pixels }
    }
}
