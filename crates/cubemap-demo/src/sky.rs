//! Procedural sky: fBm clouds over a vertical gradient, raycast per pixel.

use cubemap_config::SkyConfig;
use cubemap_render::{FaceParams, FaceRenderer, RenderSettings};
use glam::{Mat4, Vec3};
use image::{Rgba, RgbaImage};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

const HORIZON: Vec3 = Vec3::new(0.78, 0.86, 0.95);
const ZENITH: Vec3 = Vec3::new(0.12, 0.32, 0.72);
const GROUND: Vec3 = Vec3::new(0.22, 0.2, 0.18);
const CLOUD_OPACITY: f32 = 0.85;

#[derive(Debug, thiserror::Error)]
pub enum SkyError {
    #[error("sky octaves must be between 1 and {max}, got {got}")]
    Octaves { got: usize, max: usize },

    #[error("sky frequency must be positive, got {0}")]
    Frequency(f64),
}

/// Noise generator and camera planes shared by all six faces.
pub struct SkyShader {
    noise: Fbm<Perlin>,
    near: f32,
    far: f32,
}

impl SkyShader {
    pub fn new(config: &SkyConfig, near: f32, far: f32) -> Result<Self, SkyError> {
        let max = Fbm::<Perlin>::MAX_OCTAVES;
        if config.octaves == 0 || config.octaves > max {
            return Err(SkyError::Octaves {
                got: config.octaves,
                max,
            });
        }
        if config.frequency.is_nan() || config.frequency <= 0.0 {
            return Err(SkyError::Frequency(config.frequency));
        }

        let noise = Fbm::<Perlin>::new(config.seed)
            .set_octaves(config.octaves)
            .set_frequency(config.frequency);
        Ok(Self { noise, near, far })
    }

    /// Render one face into a new image.
    pub fn shade_face(&self, params: &FaceParams<'_>) -> RgbaImage {
        let mut image = RgbaImage::new(params.resolution, params.resolution);
        self.shade_into(params, &mut image);
        image
    }

    /// Render one face into `target`, which must be `resolution` square.
    pub fn shade_into(&self, params: &FaceParams<'_>, target: &mut RgbaImage) {
        let inverse_view_proj =
            (params.projection_matrix(self.near, self.far) * params.view_matrix()).inverse();
        let side = params.resolution;
        for (x, y, pixel) in target.enumerate_pixels_mut() {
            let dir = view_ray(&inverse_view_proj, x, y, side);
            *pixel = self.shade(dir);
        }
    }

    fn shade(&self, dir: Vec3) -> Rgba<u8> {
        let background = if dir.y >= 0.0 {
            HORIZON.lerp(ZENITH, dir.y.sqrt())
        } else {
            HORIZON.lerp(GROUND, (-dir.y).sqrt())
        };

        let density = self
            .noise
            .get([f64::from(dir.x), f64::from(dir.y), f64::from(dir.z)]) as f32;
        // Clouds fade out at the horizon and never cover the ground.
        let cover =
            smoothstep(0.0, 0.6, density) * smoothstep(-0.05, 0.1, dir.y) * CLOUD_OPACITY;
        let color = background.lerp(Vec3::ONE, cover);

        Rgba([to_channel(color.x), to_channel(color.y), to_channel(color.z), 255])
    }
}

/// Unproject the center of pixel `(x, y)` onto the far plane. The camera
/// sits at the origin, so the far-plane point is the view direction.
fn view_ray(inverse_view_proj: &Mat4, x: u32, y: u32, side: u32) -> Vec3 {
    let side = side as f32;
    let ndc_x = (x as f32 + 0.5) / side * 2.0 - 1.0;
    let ndc_y = 1.0 - (y as f32 + 0.5) / side * 2.0;
    inverse_view_proj
        .project_point3(Vec3::new(ndc_x, ndc_y, 1.0))
        .normalize()
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Two-phase sky renderer: builds the [`SkyShader`] once, then fills each
/// face target.
pub struct SkyRenderer {
    config: SkyConfig,
    near: f32,
    far: f32,
}

impl SkyRenderer {
    pub fn new(config: SkyConfig, near: f32, far: f32) -> Self {
        Self { config, near, far }
    }
}

impl FaceRenderer<RgbaImage> for SkyRenderer {
    type Shared = SkyShader;
    type Error = SkyError;

    fn initialize(&mut self, settings: &RenderSettings) -> Result<SkyShader, SkyError> {
        tracing::debug!(
            resolution = settings.resolution(),
            octaves = self.config.octaves,
            "Building sky shader"
        );
        SkyShader::new(&self.config, self.near, self.far)
    }

    fn render(
        &mut self,
        params: &FaceParams<'_>,
        shader: &SkyShader,
        target: &mut RgbaImage,
    ) -> Result<(), SkyError> {
        shader.shade_into(params, target);
        Ok(())
    }
}
