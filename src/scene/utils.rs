use crate::core::geometry::Triangle;
use nalgebra::Point3;

/// Moves all corners so the bounding box is centered at the origin and
/// the largest extent spans 1.8 units, leaving a margin inside [-1, 1].
///
/// Face normals are unaffected by uniform scale and translation.
/// Returns the original center and the scaling factor used.
pub fn normalize_and_center(triangles: &mut [Triangle]) -> (Point3<f32>, f32) {
    let mut corners = triangles.iter().flat_map(|t| t.vertices.iter());
    let Some(first) = corners.next() else {
        return (Point3::origin(), 1.0);
    };

    // 1. Bounding box
    let (min_bound, max_bound) = corners.fold((*first, *first), |(lo, hi), p| {
        (lo.inf(p), hi.sup(p))
    });

    // 2. Center and size
    let center = nalgebra::center(&min_bound, &max_bound);
    let extent = max_bound - min_bound;
    let max_dimension = extent.x.max(extent.y).max(extent.z);

    let scale_factor = if max_dimension > 1e-6 {
        1.8 / max_dimension
    } else {
        1.0
    };

    // 3. Translate to origin, then scale
    for triangle in triangles.iter_mut() {
        for vertex in triangle.vertices.iter_mut() {
            *vertex = Point3::from((*vertex - center) * scale_factor);
        }
    }

    (center, scale_factor)
}
