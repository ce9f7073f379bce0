use crate::core::framebuffer::FrameBuffer;
use crate::core::pipeline::Shader;
use crate::core::rasterizer::{CullMode, FaceOutcome, Rasterizer};
use crate::core::screen::Screen;
use crate::pipeline::shaders::ShadingMode;
use crate::pipeline::shaders::flat::FlatShader;
use crate::pipeline::shaders::phong::PhongShader;
use crate::pipeline::shaders::unlit::{BarycentricShader, DepthShader};
use crate::scene::context::RenderContext;
use image::RgbImage;
use log::debug;
use nalgebra::Vector3;

/// Per-frame settings that do not belong to the scene itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub shading: ShadingMode,
    /// Byte-range color for pixels no face covers.
    pub background: Vector3<f32>,
    /// Unit-range ambient light color.
    pub ambient_light: Vector3<f32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            shading: ShadingMode::default(),
            background: Vector3::zeros(),
            ambient_light: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

/// Face and pixel counts for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces_culled: usize,
    pub faces_clipped: usize,
    pub faces_off_screen: usize,
    pub faces_rasterized: usize,
    pub pixels_shaded: usize,
}

impl RenderStats {
    fn record(&mut self, outcome: FaceOutcome) {
        match outcome {
            FaceOutcome::Culled => self.faces_culled += 1,
            FaceOutcome::Clipped => self.faces_clipped += 1,
            FaceOutcome::OffScreen => self.faces_off_screen += 1,
            FaceOutcome::Rasterized { pixels } => {
                self.faces_rasterized += 1;
                self.pixels_shaded += pixels;
            }
        }
    }
}

/// Owns the frame buffers and drives the rasterizer over a whole scene.
pub struct Renderer {
    pub rasterizer: Rasterizer,
    pub framebuffer: FrameBuffer,
    pub screen: Screen,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            framebuffer: FrameBuffer::new(width, height),
            screen: Screen::new(width, height),
        }
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) {
        self.rasterizer.set_cull_mode(mode);
    }

    /// Renders one frame of `ctx` into the framebuffer.
    ///
    /// Both buffers are reset first, so repeated calls never see the
    /// previous frame. Meshes are drawn in order; within equal depths the
    /// last face drawn wins.
    pub fn render(&mut self, ctx: &RenderContext, options: &RenderOptions) -> RenderStats {
        self.framebuffer.clear(options.background);

        let stats = match options.shading {
            ShadingMode::Barycentric => self.draw_scene(ctx, &BarycentricShader::default()),
            ShadingMode::Flat => {
                let shader = FlatShader::new(&ctx.light, options.ambient_light);
                self.draw_scene(ctx, &shader)
            }
            ShadingMode::Phong => {
                let shader = PhongShader::new(&ctx.camera, &ctx.light, options.ambient_light);
                self.draw_scene(ctx, &shader)
            }
            ShadingMode::Depth => self.draw_scene(ctx, &DepthShader),
        };

        debug!(
            "Rendered {} faces ({} culled, {} clipped, {} off screen), {} pixels shaded in {} mode.",
            stats.faces_rasterized,
            stats.faces_culled,
            stats.faces_clipped,
            stats.faces_off_screen,
            stats.pixels_shaded,
            options.shading
        );

        stats
    }

    fn draw_scene<S: Shader>(&mut self, ctx: &RenderContext, shader: &S) -> RenderStats {
        let mut stats = RenderStats::default();
        for mesh in &ctx.meshes {
            for face_index in 0..mesh.faces().len() {
                let outcome = self.rasterizer.rasterize_face(
                    &mut self.framebuffer,
                    &self.screen,
                    &ctx.camera,
                    mesh,
                    face_index,
                    shader,
                );
                stats.record(outcome);
            }
        }
        stats
    }

    /// The current frame as an 8-bit image, row 0 at the top.
    pub fn present(&self) -> RgbImage {
        self.screen.draw(&self.framebuffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::camera::Camera;
    use crate::scene::light::PointLight;
    use crate::scene::material::Material;
    use crate::scene::mesh::Mesh;
    use nalgebra::Point3;

    fn context(meshes: Vec<Mesh>) -> RenderContext {
        let mut camera = Camera::new_perspective(60.0, 1.0, 0.1, 10.0);
        camera.transform.set_position(0.0, 0.0, 2.0);
        RenderContext {
            camera,
            light: PointLight::new(Point3::new(0.0, 0.0, 3.0), Vector3::new(1.0, 1.0, 1.0), 5.0),
            meshes,
        }
    }

    #[test]
    fn test_stats_count_every_face() {
        let front = Mesh::create_test_triangle(Material::default());
        let mut back = Mesh::create_test_triangle(Material::default());
        back.transform.set_rotation(0.0, 180.0, 0.0);
        let ctx = context(vec![front, back]);

        let mut renderer = Renderer::new(32, 32);
        let stats = renderer.render(&ctx, &RenderOptions::default());

        // The cull test sees the stored normal, so the rotated copy is kept
        assert_eq!(stats.faces_culled, 0);
        assert_eq!(stats.faces_rasterized, 2);
        assert!(stats.pixels_shaded > 0);
    }

    #[test]
    fn test_background_fills_empty_frame() {
        let ctx = context(Vec::new());
        let options = RenderOptions {
            background: Vector3::new(10.0, 20.0, 30.0),
            ..RenderOptions::default()
        };

        let mut renderer = Renderer::new(4, 3);
        let stats = renderer.render(&ctx, &options);
        let image = renderer.present();

        assert_eq!(stats, RenderStats::default());
        assert_eq!((image.width(), image.height()), (4, 3));
        assert!(image.pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn test_depth_buffer_resets_between_frames() {
        let ctx = context(vec![Mesh::create_test_triangle(Material::default())]);
        let options = RenderOptions {
            shading: ShadingMode::Depth,
            ..RenderOptions::default()
        };

        let mut renderer = Renderer::new(32, 32);
        renderer.render(&ctx, &options);
        let first = renderer.present();
        let stats = renderer.render(&ctx, &options);

        assert!(stats.pixels_shaded > 0);
        assert_eq!(first, renderer.present());
    }
}
