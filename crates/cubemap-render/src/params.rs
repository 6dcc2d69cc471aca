//! Render settings and the per-face parameters passed to render steps.

use cubemap_faces::{ASPECT_RATIO, CubeFace, FIELD_OF_VIEW, FaceBasis, RotatedQuad};
use glam::{Mat4, Vec3};

use crate::error::CubemapError;

/// Validated settings shared by all six faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    resolution: u32,
}

impl RenderSettings {
    /// Field of view of every face camera. Not configurable: each face must
    /// cover exactly one side of the cube as seen from its center.
    pub const FIELD_OF_VIEW: f32 = FIELD_OF_VIEW;

    /// Aspect ratio of every face camera.
    pub const ASPECT: f32 = ASPECT_RATIO;

    /// Settings for `resolution × resolution` faces.
    pub fn new(resolution: u32) -> Result<Self, CubemapError> {
        if resolution == 0 {
            return Err(CubemapError::InvalidResolution(resolution));
        }
        Ok(Self { resolution })
    }

    /// Side length of each face image in pixels.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }
}

/// Everything a render step needs to draw one face.
#[derive(Clone, Copy, Debug)]
pub struct FaceParams<'a> {
    /// The face being rendered.
    pub face: CubeFace,
    /// Camera view direction.
    pub forward: Vec3,
    /// Camera up direction.
    pub up: Vec3,
    /// Vertical field of view in radians (always π/2).
    pub fov: f32,
    /// Width / height (always 1).
    pub aspect: f32,
    /// Required side length of the produced image.
    pub resolution: u32,
    /// Canonical quad rotated to fill this face's view.
    pub quad: &'a RotatedQuad,
    basis: &'a FaceBasis,
}

impl<'a> FaceParams<'a> {
    pub(crate) fn new(basis: &'a FaceBasis, settings: &RenderSettings) -> Self {
        Self {
            face: basis.face,
            forward: basis.forward,
            up: basis.up,
            fov: RenderSettings::FIELD_OF_VIEW,
            aspect: RenderSettings::ASPECT,
            resolution: settings.resolution(),
            quad: &basis.quad,
            basis,
        }
    }

    /// View matrix for a camera at the origin looking along `forward`.
    pub fn view_matrix(&self) -> Mat4 {
        self.basis.view_matrix()
    }

    /// Projection matrix using `fov` and `aspect`.
    pub fn projection_matrix(&self, near: f32, far: f32) -> Mat4 {
        self.basis.projection_matrix(near, far)
    }

    /// World-space ray through the center of pixel `(x, y)`, with row 0 at
    /// the top of the image.
    pub fn pixel_ray(&self, x: u32, y: u32) -> Vec3 {
        let side = self.resolution as f32;
        let ndc_x = (x as f32 + 0.5) / side * 2.0 - 1.0;
        let ndc_y = 1.0 - (y as f32 + 0.5) / side * 2.0;
        self.basis.ray_direction(ndc_x, ndc_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubemap_faces::FaceBasisTable;

    #[test]
    fn test_zero_resolution_rejected() {
        assert!(matches!(
            RenderSettings::new(0),
            Err(CubemapError::InvalidResolution(0))
        ));
    }

    #[test]
    fn test_params_carry_fixed_projection() {
        let table = FaceBasisTable::new();
        let settings = RenderSettings::new(16).unwrap();
        for basis in table.iter() {
            let params = FaceParams::new(basis, &settings);
            assert_eq!(params.fov, std::f32::consts::FRAC_PI_2);
            assert_eq!(params.aspect, 1.0);
            assert_eq!(params.resolution, 16);
            assert_eq!(params.forward, basis.forward);
            assert_eq!(params.up, basis.up);
            assert_eq!(params.quad, &basis.quad);
        }
    }

    #[test]
    fn test_pixel_ray_top_left_points_up_and_left() {
        let table = FaceBasisTable::new();
        let settings = RenderSettings::new(64).unwrap();
        let params = FaceParams::new(table.get(CubeFace::NegZ), &settings);

        let ray = params.pixel_ray(0, 0);
        assert!(ray.x < 0.0, "top-left ray should point left: {ray:?}");
        assert!(ray.y > 0.0, "top-left ray should point up: {ray:?}");
        assert!(ray.z < 0.0);
    }

    #[test]
    fn test_pixel_ray_is_unit_length() {
        let table = FaceBasisTable::new();
        let settings = RenderSettings::new(8).unwrap();
        let params = FaceParams::new(table.get(CubeFace::PosY), &settings);
        for (x, y) in [(0, 0), (7, 7), (3, 4)] {
            assert!((params.pixel_ray(x, y).length() - 1.0).abs() < 1e-5);
        }
    }
}
