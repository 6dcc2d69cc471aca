//! Cubemap rendering error types.

use cubemap_faces::CubeFace;

/// Boxed error produced by a caller-supplied render step.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while rendering a cubemap.
#[derive(Debug, thiserror::Error)]
pub enum CubemapError {
    /// The requested face resolution is zero.
    #[error("cubemap resolution must be a positive integer, got {0}")]
    InvalidResolution(u32),

    /// The one-time initialization phase failed; no face was rendered.
    #[error("render initialization failed: {source}")]
    Initialize {
        #[source]
        source: BoxError,
    },

    /// The render step returned an error for a face.
    #[error("render step failed for face {face}: {source}")]
    RenderStep {
        face: CubeFace,
        #[source]
        source: BoxError,
    },

    /// The render step produced an image that is not `expected × expected`.
    #[error(
        "render step for face {face} produced a {width}x{height} image, expected {expected}x{expected}"
    )]
    FaceSizeMismatch {
        face: CubeFace,
        width: u32,
        height: u32,
        expected: u32,
    },

    /// A face set is missing faces and cannot be used as a cubemap.
    #[error("cubemap is incomplete, missing faces {missing:?}")]
    Incomplete { missing: Vec<CubeFace> },

    /// A worker thread could not be started.
    #[error("failed to spawn render worker for face {face}: {source}")]
    WorkerSpawn {
        face: CubeFace,
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked while rendering a face.
    #[error("render worker for face {face} panicked")]
    WorkerPanicked { face: CubeFace },
}

impl CubemapError {
    pub(crate) fn render_step(face: CubeFace, source: impl Into<BoxError>) -> Self {
        CubemapError::RenderStep {
            face,
            source: source.into(),
        }
    }

    /// The face this error is tagged with, if any.
    pub fn face(&self) -> Option<CubeFace> {
        match self {
            CubemapError::RenderStep { face, .. }
            | CubemapError::FaceSizeMismatch { face, .. }
            | CubemapError::WorkerSpawn { face, .. }
            | CubemapError::WorkerPanicked { face } => Some(*face),
            CubemapError::InvalidResolution(_)
            | CubemapError::Initialize { .. }
            | CubemapError::Incomplete { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_step_error_names_face() {
        let err = CubemapError::render_step(CubeFace::NegX, "shader compile failed");
        assert_eq!(err.face(), Some(CubeFace::NegX));
        let msg = err.to_string();
        assert!(msg.contains("-x"), "{msg}");
        assert!(msg.contains("shader compile failed"), "{msg}");
    }

    #[test]
    fn test_size_mismatch_message() {
        let err = CubemapError::FaceSizeMismatch {
            face: CubeFace::PosY,
            width: 3,
            height: 4,
            expected: 4,
        };
        assert_eq!(
            err.to_string(),
            "render step for face +y produced a 3x4 image, expected 4x4"
        );
    }

    #[test]
    fn test_configuration_errors_have_no_face() {
        assert_eq!(CubemapError::InvalidResolution(0).face(), None);
        let incomplete = CubemapError::Incomplete {
            missing: vec![CubeFace::NegZ],
        };
        assert_eq!(incomplete.face(), None);
    }
}
