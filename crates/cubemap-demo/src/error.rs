//! Errors surfaced by the demo binary.

use std::path::PathBuf;

use cubemap_config::ConfigError;
use cubemap_render::CubemapError;

use crate::sky::SkyError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cubemap(#[from] CubemapError),

    #[error(transparent)]
    Sky(#[from] SkyError),

    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
