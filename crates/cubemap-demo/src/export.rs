//! Writing rendered faces to disk.

use std::path::{Path, PathBuf};

use cubemap_config::OutputConfig;
use cubemap_render::CubemapFaceSet;
use image::{RgbaImage, imageops};

use crate::error::DemoError;

/// File name of the upload-order strip.
pub const STRIP_NAME: &str = "strip.png";

/// Write each face as `<prefix><face>.png` (e.g. `px.png`), plus the strip
/// when enabled. Returns the written paths.
pub fn write_faces(
    set: &CubemapFaceSet<RgbaImage>,
    output: &OutputConfig,
) -> Result<Vec<PathBuf>, DemoError> {
    let dir = output.directory.as_path();
    std::fs::create_dir_all(dir).map_err(|source| DemoError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(7);
    for (face, image) in set.iter() {
        let path = dir.join(format!("{}{}.png", output.file_prefix, face.short_name()));
        save(image, &path)?;
        tracing::debug!(%face, path = %path.display(), "Wrote face");
        written.push(path);
    }

    if output.write_strip {
        let path = dir.join(format!("{}{STRIP_NAME}", output.file_prefix));
        save(&strip(set), &path)?;
        written.push(path);
    }

    Ok(written)
}

/// All six faces side by side in upload order (+X, −X, +Y, −Y, +Z, −Z).
pub fn strip(set: &CubemapFaceSet<RgbaImage>) -> RgbaImage {
    let side = set.resolution();
    let mut strip = RgbaImage::new(side * 6, side);
    for (face, image) in set.iter() {
        let x = i64::from(side) * face.index() as i64;
        imageops::overlay(&mut strip, image, x, 0);
    }
    strip
}

fn save(image: &RgbaImage, path: &Path) -> Result<(), DemoError> {
    image.save(path).map_err(|source| DemoError::WriteImage {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubemap_render::{BoxError, CubeFace, CubemapRenderer};
    use image::Rgba;

    fn face_color(face: CubeFace) -> Rgba<u8> {
        Rgba([face.index() as u8 * 40, 0, 0, 255])
    }

    fn colored_set(side: u32) -> CubemapFaceSet<RgbaImage> {
        CubemapRenderer::new(side)
            .unwrap()
            .render_all(|params| {
                Ok::<_, BoxError>(RgbaImage::from_pixel(
                    params.resolution,
                    params.resolution,
                    face_color(params.face),
                ))
            })
            .unwrap()
    }

    #[test]
    fn test_strip_places_faces_in_upload_order() {
        let strip = strip(&colored_set(3));
        assert_eq!(strip.dimensions(), (18, 3));
        for face in CubeFace::ALL {
            let x = face.index() as u32 * 3 + 1;
            assert_eq!(strip.get_pixel(x, 1), &face_color(face));
        }
    }

    #[test]
    fn test_write_faces_creates_named_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            directory: dir.path().join("out"),
            file_prefix: "sky_".to_string(),
            write_strip: true,
        };

        let written = write_faces(&colored_set(2), &output).unwrap();
        assert_eq!(written.len(), 7);
        for name in [
            "sky_px.png",
            "sky_nx.png",
            "sky_py.png",
            "sky_ny.png",
            "sky_pz.png",
            "sky_nz.png",
            "sky_strip.png",
        ] {
            assert!(output.directory.join(name).exists(), "{name} missing");
        }

        let reloaded = image::open(output.directory.join("sky_nx.png")).unwrap().to_rgba8();
        assert_eq!(reloaded.get_pixel(0, 0), &face_color(CubeFace::NegX));
    }

    #[test]
    fn test_strip_can_be_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            directory: dir.path().to_path_buf(),
            file_prefix: String::new(),
            write_strip: false,
        };
        let written = write_faces(&colored_set(2), &output).unwrap();
        assert_eq!(written.len(), 6);
        assert!(!dir.path().join(STRIP_NAME).exists());
    }
}
