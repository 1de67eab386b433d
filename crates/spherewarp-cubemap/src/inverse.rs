//! Direction-to-face selection: recover the struck face and its UV from a
//! direction vector.

use glam::DVec3;

use crate::{CubeFace, FaceCoord};

/// Determine which cube face a direction vector strikes.
///
/// The face is the axis with the largest absolute component, its sign
/// selecting between the two faces on that axis. Exact ties are broken by
/// a fixed priority: Y before X before Z. This order decides which face
/// owns the seams and corners, so stitched output depends on it.
///
/// The zero vector and non-finite vectors strike no face.
#[must_use]
pub fn direction_to_face(dir: DVec3) -> Option<CubeFace> {
    if !dir.is_finite() || dir == DVec3::ZERO {
        return None;
    }
    let ax = dir.x.abs();
    let ay = dir.y.abs();
    let az = dir.z.abs();

    let face = if ay >= ax && ay >= az {
        if dir.y >= 0.0 {
            CubeFace::Left
        } else {
            CubeFace::Right
        }
    } else if ax >= az {
        if dir.x >= 0.0 {
            CubeFace::Front
        } else {
            CubeFace::Back
        }
    } else if dir.z >= 0.0 {
        CubeFace::Over
    } else {
        CubeFace::Under
    };
    Some(face)
}

/// Convert a direction vector to a [`FaceCoord`] by central projection onto
/// the struck face's plane. The direction does not need to be unit length.
#[must_use]
pub fn direction_to_face_coord(dir: DVec3) -> Option<FaceCoord> {
    let face = direction_to_face(dir)?;

    // Dominant component, always > 0 for a selected face.
    let d = dir.dot(face.normal());
    let projected = dir / d;

    let s = projected.dot(face.right());
    let t = projected.dot(face.down());

    Some(FaceCoord::new(face, (s + 1.0) * 0.5, (t + 1.0) * 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_face_detection_axis_aligned_directions() {
        assert_eq!(direction_to_face(DVec3::X), Some(CubeFace::Front));
        assert_eq!(direction_to_face(DVec3::NEG_X), Some(CubeFace::Back));
        assert_eq!(direction_to_face(DVec3::Y), Some(CubeFace::Left));
        assert_eq!(direction_to_face(DVec3::NEG_Y), Some(CubeFace::Right));
        assert_eq!(direction_to_face(DVec3::Z), Some(CubeFace::Over));
        assert_eq!(direction_to_face(DVec3::NEG_Z), Some(CubeFace::Under));
    }

    #[test]
    fn test_ties_prefer_y_then_x_then_z() {
        assert_eq!(direction_to_face(DVec3::new(1.0, 1.0, 0.0)), Some(CubeFace::Left));
        assert_eq!(direction_to_face(DVec3::new(-1.0, -1.0, 0.0)), Some(CubeFace::Right));
        assert_eq!(direction_to_face(DVec3::new(0.0, 1.0, 1.0)), Some(CubeFace::Left));
        assert_eq!(direction_to_face(DVec3::new(1.0, 0.0, 1.0)), Some(CubeFace::Front));
        assert_eq!(direction_to_face(DVec3::new(-1.0, 0.0, -1.0)), Some(CubeFace::Back));
        assert_eq!(direction_to_face(DVec3::new(1.0, 1.0, 1.0)), Some(CubeFace::Left));
        assert_eq!(direction_to_face(DVec3::new(1.0, -1.0, -1.0)), Some(CubeFace::Right));
    }

    #[test]
    fn test_zero_and_nan_strike_no_face() {
        assert_eq!(direction_to_face(DVec3::ZERO), None);
        assert_eq!(direction_to_face(DVec3::new(f64::NAN, 0.0, 1.0)), None);
        assert_eq!(direction_to_face_coord(DVec3::ZERO), None);
    }

    #[test]
    fn test_direction_to_face_all_negative() {
        let dir = DVec3::new(-0.1, -0.5, -0.9);
        assert_eq!(direction_to_face(dir), Some(CubeFace::Under));
    }

    #[test]
    fn test_face_centers_map_to_uv_center() {
        for face in CubeFace::ALL {
            let fc = direction_to_face_coord(face.normal() * 3.0).unwrap();
            assert_eq!(fc.face, face);
            assert!((fc.u - 0.5).abs() < EPSILON, "{face:?} u={}", fc.u);
            assert!((fc.v - 0.5).abs() < EPSILON, "{face:?} v={}", fc.v);
        }
    }

    #[test]
    fn test_uv_follows_face_image_axes() {
        for face in CubeFace::ALL {
            let dir = face.normal() + 0.5 * face.right() - 0.25 * face.down();
            let fc = direction_to_face_coord(dir).unwrap();
            assert_eq!(fc.face, face);
            assert!((fc.u - 0.75).abs() < EPSILON, "{face:?}");
            assert!((fc.v - 0.375).abs() < EPSILON, "{face:?}");
        }
    }

    #[test]
    fn test_front_top_edge_meets_over_bottom_edge() {
        // Just either side of the front/over seam, straight ahead.
        let below = direction_to_face_coord(DVec3::new(1.0, 0.0, 0.999)).unwrap();
        let above = direction_to_face_coord(DVec3::new(0.999, 0.0, 1.0)).unwrap();
        assert_eq!(below.face, CubeFace::Front);
        assert_eq!(above.face, CubeFace::Over);
        assert!(below.v < 0.001);
        assert!(above.v > 0.999);
        assert!((below.u - above.u).abs() < EPSILON);
    }

    #[test]
    fn test_front_bottom_edge_meets_under_top_edge() {
        let above = direction_to_face_coord(DVec3::new(1.0, 0.2, -0.999)).unwrap();
        let below = direction_to_face_coord(DVec3::new(0.999, 0.2, -1.0)).unwrap();
        assert_eq!(above.face, CubeFace::Front);
        assert_eq!(below.face, CubeFace::Under);
        assert!(above.v > 0.999);
        assert!(below.v < 0.001);
        assert!((above.u - below.u).abs() < 1e-3);
    }

    #[test]
    fn test_left_right_edge_meets_front_left_edge() {
        let on_left = direction_to_face_coord(DVec3::new(0.999, 1.0, 0.3)).unwrap();
        let on_front = direction_to_face_coord(DVec3::new(1.0, 0.999, 0.3)).unwrap();
        assert_eq!(on_left.face, CubeFace::Left);
        assert_eq!(on_front.face, CubeFace::Front);
        assert!(on_left.u > 0.999);
        assert!(on_front.u < 0.001);
        assert!((on_left.v - on_front.v).abs() < 1e-3);
    }
}
