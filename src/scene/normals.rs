use crate::core::geometry::Face;
use nalgebra::Vector3;

/// Smooth per-vertex normals: the unweighted average of the normals of every
/// face touching the vertex, renormalized.
///
/// A vertex referenced by no face keeps the zero vector, as does a vertex
/// whose adjacent normals cancel out. Face indices must already be validated.
pub fn compute_vertex_normals(
    vertex_count: usize,
    faces: &[Face],
    face_normals: &[Vector3<f32>],
) -> Vec<Vector3<f32>> {
    let mut accum = vec![Vector3::zeros(); vertex_count];
    let mut contributions = vec![0u32; vertex_count];

    for (face, normal) in faces.iter().zip(face_normals) {
        for &vertex in face {
            accum[vertex] += normal;
            contributions[vertex] += 1;
        }
    }

    accum
        .into_iter()
        .zip(contributions)
        .map(|(sum, count)| {
            if count == 0 {
                return Vector3::zeros();
            }
            (sum / count as f32)
                .try_normalize(f32::EPSILON)
                .unwrap_or_else(Vector3::zeros)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shared_vertex_averages_adjacent_faces() {
        // Two faces folded along the edge (1, 2)
        let faces = [[0, 1, 2], [2, 1, 3]];
        let normals = [Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 0.0)];
        let vertex_normals = compute_vertex_normals(4, &faces, &normals);

        let diagonal = Vector3::new(1.0, 0.0, 1.0).normalize();
        assert_relative_eq!(vertex_normals[0], normals[0]);
        assert_relative_eq!(vertex_normals[1], diagonal, epsilon = 1e-6);
        assert_relative_eq!(vertex_normals[2], diagonal, epsilon = 1e-6);
        assert_relative_eq!(vertex_normals[3], normals[1]);
    }

    #[test]
    fn test_unreferenced_vertex_keeps_zero_normal() {
        let faces = [[0, 1, 2]];
        let normals = [Vector3::new(0.0, 1.0, 0.0)];
        let vertex_normals = compute_vertex_normals(5, &faces, &normals);
        assert_eq!(vertex_normals[3], Vector3::zeros());
        assert_eq!(vertex_normals[4], Vector3::zeros());
    }

    #[test]
    fn test_every_normal_is_unit_or_zero() {
        let faces = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];
        let normals = [
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0).normalize(),
        ];
        let vertex_normals = compute_vertex_normals(6, &faces, &normals);
        for (i, n) in vertex_normals.iter().enumerate() {
            if i < 4 {
                assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-5);
            } else {
                assert_eq!(*n, Vector3::zeros());
            }
        }
    }

    #[test]
    fn test_opposite_faces_cancel_to_zero() {
        let faces = [[0, 1, 2], [0, 2, 1]];
        let normals = [Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, -1.0)];
        let vertex_normals = compute_vertex_normals(3, &faces, &normals);
        assert!(vertex_normals.iter().all(|n| *n == Vector3::zeros()));
    }
}
