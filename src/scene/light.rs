use crate::core::math::transform::Transform;
use nalgebra::{Point3, Vector3};

/// A point light radiating equally in all directions.
#[derive(Debug, Clone)]
pub struct PointLight {
    /// Placement of the light; only the position is used.
    pub transform: Transform,
    pub intensity: f32,
    pub color: Vector3<f32>,
}

impl PointLight {
    pub fn new(position: Point3<f32>, color: Vector3<f32>, intensity: f32) -> Self {
        Self {
            transform: Transform::new(position, Vector3::zeros()),
            intensity,
            color,
        }
    }

    pub fn position(&self) -> Point3<f32> {
        self.transform.position()
    }
}
