use crate::core::color::to_rgb8;
use crate::core::framebuffer::FrameBuffer;
use crate::core::math::interpolation;
use image::{Rgb, RgbImage};
use nalgebra::{Point2, Point3, Vector3};

/// Inclusive pixel rectangle, already clamped to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

/// The pixel grid the pipeline renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: usize,
    pub height: usize,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Viewport transform. Device x in [-1, 1] spans [0, width]; device y is
    /// flipped so +1 lands on row 0 (the top of the image).
    pub fn device_to_screen(&self, device: &[Point3<f32>; 3]) -> [Point2<f32>; 3] {
        let width = self.width as f32;
        let height = self.height as f32;
        device.map(|p| Point2::new((p.x + 1.0) * 0.5 * width, (1.0 - (p.y + 1.0) * 0.5) * height))
    }

    /// Barycentric weights of the center of pixel (x, y).
    /// `None` for triangles with (near) zero screen area.
    pub fn barycentric_coordinates(
        &self,
        x: usize,
        y: usize,
        triangle: &[Point2<f32>; 3],
    ) -> Option<Vector3<f32>> {
        let center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);
        interpolation::barycentric_coordinates(center, triangle[0], triangle[1], triangle[2])
    }

    /// Integer bounding box of the triangle clamped to the screen, or `None`
    /// when it lies entirely off-screen.
    pub fn bounding_box(&self, points: &[Point2<f32>; 3]) -> Option<PixelBounds> {
        if self.width == 0 || self.height == 0 {
            return None;
        }

        let min_x = points[0].x.min(points[1].x).min(points[2].x).floor();
        let min_y = points[0].y.min(points[1].y).min(points[2].y).floor();
        let max_x = points[0].x.max(points[1].x).max(points[2].x).ceil();
        let max_y = points[0].y.max(points[1].y).max(points[2].y).ceil();

        let last_x = (self.width - 1) as f32;
        let last_y = (self.height - 1) as f32;

        // Scissor test (NaN coordinates fail it as well)
        if !(max_x >= 0.0 && max_y >= 0.0 && min_x <= last_x && min_y <= last_y) {
            return None;
        }

        Some(PixelBounds {
            min_x: min_x.max(0.0) as usize,
            min_y: min_y.max(0.0) as usize,
            max_x: max_x.min(last_x) as usize,
            max_y: max_y.min(last_y) as usize,
        })
    }

    /// Presents the frame as an 8-bit RGB image.
    pub fn draw(&self, framebuffer: &FrameBuffer) -> RgbImage {
        let mut img = RgbImage::new(self.width as u32, self.height as u32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            if let Some(color) = framebuffer.get_pixel(x as usize, y as usize) {
                *pixel = Rgb(to_rgb8(&color));
            }
        }
        img
    }
}
