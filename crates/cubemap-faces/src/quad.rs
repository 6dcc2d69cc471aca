//! The shared full-screen quad and its per-face rotations.

use glam::{Mat3, Vec3};

/// Six vertices (two triangles) of a square spanning `[-1, 1]²` at `z = -1`.
pub type CanonicalQuad = [Vec3; 6];

/// A [`CanonicalQuad`] rotated to face one cubemap direction.
pub type RotatedQuad = [Vec3; 6];

/// Quad facing −Z, which fills a 90° square frustum looking down −Z.
pub const CANONICAL_QUAD: CanonicalQuad = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
];

/// Apply `rotation` to every vertex of `quad`.
#[must_use]
pub fn rotate_quad(quad: &CanonicalQuad, rotation: Mat3) -> RotatedQuad {
    quad.map(|v| rotation * v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_canonical_quad_lies_on_neg_z_plane() {
        for v in CANONICAL_QUAD {
            assert_eq!(v.z, -1.0);
            assert_eq!(v.x.abs(), 1.0);
            assert_eq!(v.y.abs(), 1.0);
        }
    }

    #[test]
    fn test_identity_rotation_is_noop() {
        assert_eq!(rotate_quad(&CANONICAL_QUAD, Mat3::IDENTITY), CANONICAL_QUAD);
    }

    #[test]
    fn test_rotation_preserves_distance_from_origin() {
        let rotated = rotate_quad(&CANONICAL_QUAD, Mat3::from_rotation_x(FRAC_PI_2));
        for (a, b) in rotated.iter().zip(CANONICAL_QUAD.iter()) {
            assert!((a.length() - b.length()).abs() < 1e-6);
        }
    }
}
