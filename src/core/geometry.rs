use nalgebra::{Point3, Vector3};

/// Indices of the three vertices of a face, in winding order.
pub type Face = [usize; 3];

/// One triangle of an unindexed triangle soup, as produced by a mesh loader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Corner positions in local object space.
    pub vertices: [Point3<f32>; 3],
    /// Unit face normal supplied by the source data.
    pub normal: Vector3<f32>,
}

impl Triangle {
    pub fn new(vertices: [Point3<f32>; 3], normal: Vector3<f32>) -> Self {
        Self { vertices, normal }
    }

    /// Builds a triangle whose normal follows the counter-clockwise winding.
    /// Degenerate corners produce the zero normal.
    pub fn from_winding(vertices: [Point3<f32>; 3]) -> Self {
        let normal = (vertices[1] - vertices[0])
            .cross(&(vertices[2] - vertices[0]))
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3::zeros);
        Self { vertices, normal }
    }
}
