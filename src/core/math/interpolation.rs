use nalgebra::{Point2, Point3, Vector3};

const EPSILON: f32 = 1e-5;

/// Calculates the barycentric coordinates (alpha, beta, gamma) of point p
/// with respect to triangle (v1, v2, v3).
///
/// Returns `None` if the triangle is degenerate (area is near zero).
///
/// # Returns
/// A Vector3 where:
/// - x: alpha (weight for v1)
/// - y: beta  (weight for v2)
/// - z: gamma (weight for v3)
pub fn barycentric_coordinates(
    p: Point2<f32>,
    v1: Point2<f32>,
    v2: Point2<f32>,
    v3: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e1 = v2 - v1;
    let e2 = v3 - v1;
    let p_v1 = p - v1;

    // Twice the signed area of the triangle
    let total_area_x2 = e1.x * e2.y - e1.y * e2.x;

    if total_area_x2.abs() < EPSILON {
        return None;
    }

    let inv_total_area_x2 = 1.0 / total_area_x2;

    let beta = (p_v1.x * e2.y - p_v1.y * e2.x) * inv_total_area_x2;
    let gamma = (e1.x * p_v1.y - e1.y * p_v1.x) * inv_total_area_x2;
    let alpha = 1.0 - beta - gamma;

    Some(Vector3::new(alpha, beta, gamma))
}

/// A pixel is covered only when every weight lies in [0, 1].
#[inline(always)]
pub fn is_inside_triangle(bary: Vector3<f32>) -> bool {
    bary.iter().all(|w| (0.0..=1.0).contains(w))
}

/// Blends three scalars by barycentric weight.
#[inline]
pub fn interpolate_scalar(bary: &Vector3<f32>, values: [f32; 3]) -> f32 {
    bary.x * values[0] + bary.y * values[1] + bary.z * values[2]
}

/// Blends three vectors by barycentric weight.
#[inline]
pub fn interpolate_vector(bary: &Vector3<f32>, values: &[Vector3<f32>; 3]) -> Vector3<f32> {
    values[0] * bary.x + values[1] * bary.y + values[2] * bary.z
}

/// Blends three points by barycentric weight (an affine combination).
#[inline]
pub fn interpolate_point(bary: &Vector3<f32>, points: &[Point3<f32>; 3]) -> Point3<f32> {
    Point3::from(
        points[0].coords * bary.x + points[1].coords * bary.y + points[2].coords * bary.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> [Point2<f32>; 3] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_interior_weights_sum_to_one() {
        let [a, b, c] = triangle();
        for p in [
            Point2::new(1.0, 1.0),
            Point2::new(3.3, 4.4),
            Point2::new(0.5, 8.0),
            Point2::new(4.9, 4.9),
        ] {
            let bary = barycentric_coordinates(p, a, b, c).unwrap();
            assert_relative_eq!(bary.sum(), 1.0, epsilon = 1e-5);
            assert!(is_inside_triangle(bary), "{:?} should be inside", p);
        }
    }

    #[test]
    fn test_exterior_point_has_weight_out_of_range() {
        let [a, b, c] = triangle();
        for p in [
            Point2::new(-1.0, 1.0),
            Point2::new(6.0, 6.0),
            Point2::new(5.0, -0.5),
        ] {
            let bary = barycentric_coordinates(p, a, b, c).unwrap();
            assert!(bary.iter().any(|w| !(0.0..=1.0).contains(w)));
            assert!(!is_inside_triangle(bary));
        }
    }

    #[test]
    fn test_vertices_get_unit_weights() {
        let [a, b, c] = triangle();
        assert_relative_eq!(
            barycentric_coordinates(a, a, b, c).unwrap(),
            Vector3::new(1.0, 0.0, 0.0)
        );
        assert_relative_eq!(
            barycentric_coordinates(c, a, b, c).unwrap(),
            Vector3::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_winding_does_not_matter() {
        let [a, b, c] = triangle();
        let p = Point2::new(2.0, 3.0);
        let ccw = barycentric_coordinates(p, a, b, c).unwrap();
        let cw = barycentric_coordinates(p, a, c, b).unwrap();
        assert_relative_eq!(ccw.x, cw.x, epsilon = 1e-6);
        assert_relative_eq!(ccw.y, cw.z, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_triangle() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 1.0);
        let c = Point2::new(2.0, 2.0);
        assert!(barycentric_coordinates(Point2::new(1.0, 1.0), a, b, c).is_none());
    }

    #[test]
    fn test_interpolate_point_at_centroid() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 3.0),
        ];
        let third = 1.0 / 3.0;
        let centroid = interpolate_point(&Vector3::new(third, third, third), &points);
        assert_relative_eq!(centroid, Point3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
        assert_relative_eq!(
            interpolate_scalar(&Vector3::new(0.5, 0.5, 0.0), [2.0, 4.0, 100.0]),
            3.0
        );
    }
}
