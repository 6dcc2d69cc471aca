//! Per-face camera bases and quad rotations.
//!
//! The `up` vectors here are paired with the half-turn correction applied to
//! the x and z faces after rendering. Changing one without the other yields
//! mirrored or rotated faces once the images are uploaded as a cubemap.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat3, Mat4, Vec3};

use crate::cube_face::CubeFace;
use crate::quad::{CANONICAL_QUAD, RotatedQuad, rotate_quad};

/// Vertical field of view of every face camera (90°).
pub const FIELD_OF_VIEW: f32 = FRAC_PI_2;

/// Aspect ratio of every face camera. Faces are square.
pub const ASPECT_RATIO: f32 = 1.0;

/// Camera orientation and quad geometry for one cubemap face.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceBasis {
    /// The face this basis renders.
    pub face: CubeFace,
    /// Camera view direction (axis-aligned unit vector).
    pub forward: Vec3,
    /// Camera up direction, orthogonal to `forward`.
    pub up: Vec3,
    /// Rotation taking the canonical quad (facing −Z) onto `forward`.
    pub quad_rotation: Mat3,
    /// The canonical quad with `quad_rotation` applied.
    pub quad: RotatedQuad,
}

impl FaceBasis {
    fn new(face: CubeFace, forward: Vec3, up: Vec3, quad_rotation: Mat3) -> Self {
        Self {
            face,
            forward,
            up,
            quad_rotation,
            quad: rotate_quad(&CANONICAL_QUAD, quad_rotation),
        }
    }

    /// Camera right vector (`forward × up`).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up)
    }

    /// Right-handed view matrix for a camera at the origin.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(Vec3::ZERO, self.forward, self.up)
    }

    /// Right-handed 90° square perspective projection.
    #[must_use]
    pub fn projection_matrix(&self, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(FIELD_OF_VIEW, ASPECT_RATIO, near, far)
    }

    /// Normalized world-space ray through a point on this face's image plane.
    ///
    /// `ndc_x` grows to the right and `ndc_y` grows upward, both in `[-1, 1]`.
    /// The ray passes through the rotated quad at the same point the
    /// rasterizer would cover with that pixel.
    #[must_use]
    pub fn ray_direction(&self, ndc_x: f32, ndc_y: f32) -> Vec3 {
        let half_extent = (FIELD_OF_VIEW * 0.5).tan();
        (self.forward
            + self.right() * (ndc_x * half_extent * ASPECT_RATIO)
            + self.up * (ndc_y * half_extent))
            .normalize()
    }
}

/// The six face bases of a cubemap.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceBasisTable {
    // Indexed by `CubeFace::index()`.
    entries: [FaceBasis; 6],
}

impl FaceBasisTable {
    /// Build the table. Pure; every call yields identical values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: [
                FaceBasis::new(
                    CubeFace::PosX,
                    Vec3::X,
                    Vec3::Y,
                    Mat3::from_rotation_y(-FRAC_PI_2),
                ),
                FaceBasis::new(
                    CubeFace::NegX,
                    Vec3::NEG_X,
                    Vec3::Y,
                    Mat3::from_rotation_y(FRAC_PI_2),
                ),
                FaceBasis::new(
                    CubeFace::PosY,
                    Vec3::Y,
                    Vec3::Z,
                    Mat3::from_rotation_x(FRAC_PI_2),
                ),
                FaceBasis::new(
                    CubeFace::NegY,
                    Vec3::NEG_Y,
                    Vec3::NEG_Z,
                    Mat3::from_rotation_x(-FRAC_PI_2),
                ),
                FaceBasis::new(
                    CubeFace::PosZ,
                    Vec3::Z,
                    Vec3::Y,
                    Mat3::from_rotation_y(PI),
                ),
                FaceBasis::new(CubeFace::NegZ, Vec3::NEG_Z, Vec3::Y, Mat3::IDENTITY),
            ],
        }
    }

    /// Basis for `face`.
    #[must_use]
    pub fn get(&self, face: CubeFace) -> &FaceBasis {
        &self.entries[face.index()]
    }

    /// Bases in render order (see [`CubeFace::RENDER_ORDER`]).
    pub fn iter(&self) -> impl Iterator<Item = &FaceBasis> {
        CubeFace::RENDER_ORDER
            .iter()
            .map(move |face| &self.entries[face.index()])
    }
}

impl Default for FaceBasisTable {
    fn default() -> Self {
        Self::new()
    }
}
