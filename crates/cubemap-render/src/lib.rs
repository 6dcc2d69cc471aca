//! Six-pass cubemap rendering driven by a caller-supplied per-face render step.
//!
//! [`CubemapRenderer`] invokes the render step once per face with that face's
//! camera basis, a 90° square projection, and the canonical quad rotated to
//! face the camera. Results are corrected to the cubemap texture layout and
//! collected into a [`CubemapFaceSet`] ready for upload.

mod error;
mod face_set;
mod params;
mod raster;
mod renderer;

pub use cubemap_faces::{Axis, CubeFace, FaceBasis, FaceBasisTable, Sign};
pub use error::{BoxError, CubemapError};
pub use face_set::{CubemapFaceSet, PartialFaceSet};
pub use params::{FaceParams, RenderSettings};
pub use raster::{Correction, FaceRaster, orientation_correction};
pub use renderer::{CubemapRenderer, FaceRenderer, RendererState};
