use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

//=================================
// Transform Matrix Factory
//=================================

/// Factory for the transformation matrices used by the pipeline.
/// Right-handed; cameras look down -Z.
pub struct TransformFactory;

#[rustfmt::skip]
impl TransformFactory {
    /// Creates a rotation matrix around the X-axis.
    pub fn rotation_x(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,  -s,   0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a rotation matrix around the Y-axis.
    pub fn rotation_y(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
           -s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a rotation matrix around the Z-axis.
    pub fn rotation_z(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            c,  -s,   0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a translation matrix.
    pub fn translation(translation: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, translation.x,
            0.0, 1.0, 0.0, translation.y,
            0.0, 0.0, 1.0, translation.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a perspective frustum projection with reversed depth.
    ///
    /// Camera-space points on the near plane map to depth +1 and points on the
    /// far plane to -1, so a larger device depth always means a nearer surface.
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4<f32> {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let fn_ = 1.0 / (far - near);

        Matrix4::new(
            2.0 * near * rl, 0.0,             (right + left) * rl, 0.0,
            0.0,             2.0 * near * tb, (top + bottom) * tb, 0.0,
            0.0,             0.0,             (far + near) * fn_,  2.0 * far * near * fn_,
            0.0,             0.0,             -1.0,                0.0,
        )
    }

    /// Creates an orthographic projection with reversed depth (near → +1, far → -1).
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4<f32> {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let fn_ = 1.0 / (far - near);

        Matrix4::new(
            2.0 * rl, 0.0,      0.0,       -(right + left) * rl,
            0.0,      2.0 * tb, 0.0,       -(top + bottom) * tb,
            0.0,      0.0,      2.0 * fn_, (far + near) * fn_,
            0.0,      0.0,      0.0,       1.0,
        )
    }
}

/// Applies a 4x4 matrix to a point, including the homogeneous divide.
/// A point that lands on w = 0 maps to the origin.
#[inline]
pub fn transform_point(matrix: &Matrix4<f32>, point: &Point3<f32>) -> Point3<f32> {
    Point3::from_homogeneous(matrix * point.to_homogeneous()).unwrap_or_else(Point3::origin)
}

//=================================
// Rigid Transform
//=================================

/// Placement of an object in world space: a translation and an Euler rotation.
///
/// Rotation angles are in degrees and applied X, then Y, then Z. The
/// matrices are rebuilt by the setters, never per applied point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Point3<f32>,
    rotation: Vector3<f32>,

    // --- Cached Matrices ---
    rotation_matrix: Matrix3<f32>,
    matrix: Matrix4<f32>,
    inverse_matrix: Matrix4<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self::new(Point3::origin(), Vector3::zeros())
    }

    pub fn new(position: Point3<f32>, rotation: Vector3<f32>) -> Self {
        let mut t = Self {
            position,
            rotation,
            rotation_matrix: Matrix3::identity(),
            matrix: Matrix4::identity(),
            inverse_matrix: Matrix4::identity(),
        };
        t.update_matrices();
        t
    }

    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    /// Euler angles in degrees.
    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Point3::new(x, y, z);
        self.update_matrices();
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vector3::new(x, y, z);
        self.update_matrices();
    }

    fn update_matrices(&mut self) {
        let rotation = TransformFactory::rotation_z(self.rotation.z.to_radians())
            * TransformFactory::rotation_y(self.rotation.y.to_radians())
            * TransformFactory::rotation_x(self.rotation.x.to_radians());

        self.rotation_matrix = rotation.fixed_view::<3, 3>(0, 0).into_owned();
        // Rotate, then translate
        self.matrix = TransformFactory::translation(&self.position.coords) * rotation;
        // Rigid: the inverse is the transposed rotation after undoing the translation
        self.inverse_matrix =
            rotation.transpose() * TransformFactory::translation(&-self.position.coords);
    }

    /// Local-to-world matrix.
    pub fn matrix(&self) -> &Matrix4<f32> {
        &self.matrix
    }

    /// World-to-local matrix.
    pub fn inverse_matrix(&self) -> &Matrix4<f32> {
        &self.inverse_matrix
    }

    pub fn apply_to_point(&self, point: &Point3<f32>) -> Point3<f32> {
        transform_point(&self.matrix, point)
    }

    pub fn apply_inverse_to_point(&self, point: &Point3<f32>) -> Point3<f32> {
        transform_point(&self.inverse_matrix, point)
    }

    /// Rotates a direction and renormalizes it. The zero vector stays zero.
    pub fn apply_to_normal(&self, normal: &Vector3<f32>) -> Vector3<f32> {
        (self.rotation_matrix * normal)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }
}
