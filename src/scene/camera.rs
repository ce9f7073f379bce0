use crate::core::math::transform::{Transform, TransformFactory, transform_point};
use log::warn;
use nalgebra::{Matrix4, Point3, Vector3};

/// Canonical viewing direction in camera space.
#[inline]
pub fn forward() -> Vector3<f32> {
    -Vector3::z()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionType {
    /// Full vertical field of view in degrees.
    Perspective { fov_y_deg: f32, aspect_ratio: f32 },
    /// Height of the view volume in world units.
    Orthographic { height: f32, aspect_ratio: f32 },
}

/// Projects world space into device space and back.
///
/// Device depth is in [-1, 1] with +1 on the near plane.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,
    pub near: f32,
    pub far: f32,
    pub projection_type: ProjectionType,

    // --- Cached Matrices ---
    projection_matrix: Matrix4<f32>,
    inverse_projection_matrix: Matrix4<f32>,
}

impl Camera {
    pub fn new_perspective(fov_y_deg: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self::with_projection(
            ProjectionType::Perspective {
                fov_y_deg,
                aspect_ratio,
            },
            near,
            far,
        )
    }

    pub fn new_orthographic(height: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self::with_projection(
            ProjectionType::Orthographic {
                height,
                aspect_ratio,
            },
            near,
            far,
        )
    }

    fn with_projection(projection_type: ProjectionType, near: f32, far: f32) -> Self {
        let mut cam = Self {
            transform: Transform::identity(),
            near,
            far,
            projection_type,
            projection_matrix: Matrix4::identity(),
            inverse_projection_matrix: Matrix4::identity(),
        };
        cam.update_matrices();
        cam
    }

    /// Recalculates the projection matrices after `near`, `far` or
    /// `projection_type` changed. Moving the camera needs no update.
    pub fn update_matrices(&mut self) {
        self.projection_matrix = match self.projection_type {
            ProjectionType::Perspective {
                fov_y_deg,
                aspect_ratio,
            } => {
                let half_height = self.near * (fov_y_deg.to_radians() / 2.0).tan();
                let half_width = half_height * aspect_ratio;
                TransformFactory::frustum(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
            ProjectionType::Orthographic {
                height,
                aspect_ratio,
            } => {
                let half_height = height / 2.0;
                let half_width = half_height * aspect_ratio;
                TransformFactory::orthographic(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        };

        self.inverse_projection_matrix = self.projection_matrix.try_inverse().unwrap_or_else(|| {
            warn!(
                "Projection matrix is singular (near={}, far={}); inverse projection disabled.",
                self.near, self.far
            );
            Matrix4::identity()
        });
    }

    pub fn position(&self) -> Point3<f32> {
        self.transform.position()
    }

    /// World-space direction the camera looks along.
    pub fn view_direction(&self) -> Vector3<f32> {
        self.transform.apply_to_normal(&forward())
    }

    /// World → device `(x, y, depth)`.
    ///
    /// A point on the camera plane has no projection; it is reported with a
    /// depth of negative infinity so the depth-range clip discards it.
    pub fn project_point(&self, world: &Point3<f32>) -> Point3<f32> {
        let camera_space = self.transform.apply_inverse_to_point(world);
        let clip = self.projection_matrix * camera_space.to_homogeneous();
        if clip.w.abs() < 1e-6 {
            return Point3::new(0.0, 0.0, f32::NEG_INFINITY);
        }
        Point3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w)
    }

    /// Device `(x, y, depth)` → world.
    pub fn inverse_project_point(&self, device: &Point3<f32>) -> Point3<f32> {
        let camera_space = transform_point(&self.inverse_projection_matrix, device);
        self.transform.apply_to_point(&camera_space)
    }
}
