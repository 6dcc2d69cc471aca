//! Cubemap face layout: face identities, camera bases, and the rotated quads
//! handed to per-face render steps.

mod basis;
mod cube_face;
mod quad;

pub use basis::{ASPECT_RATIO, FIELD_OF_VIEW, FaceBasis, FaceBasisTable};
pub use cube_face::{Axis, CubeFace, Sign};
pub use quad::{CANONICAL_QUAD, CanonicalQuad, RotatedQuad, rotate_quad};
