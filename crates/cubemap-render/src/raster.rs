//! Face images and the orientation correction applied before storing them.

use cubemap_faces::Axis;
use image::{ImageBuffer, Pixel, imageops};

/// A square raster produced for one cubemap face.
///
/// The renderer never interprets pixels. It only needs to allocate blank
/// targets, check sizes, and rotate by a half turn.
pub trait FaceRaster: Sized {
    /// A `side × side` image with every channel zeroed.
    fn blank(side: u32) -> Self;

    /// Returns `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Rotate the image 180° in place (a point reflection about its center).
    fn rotate_half_turn(&mut self);
}

impl<P> FaceRaster for ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    fn blank(side: u32) -> Self {
        ImageBuffer::new(side, side)
    }

    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn rotate_half_turn(&mut self) {
        imageops::rotate180_in_place(self);
    }
}

/// In-plane transform applied to a rendered face before it is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Correction {
    /// Store the image as rendered.
    Identity,
    /// Rotate the image by 180°.
    RotateHalfTurn,
}

impl Correction {
    /// Apply this correction to `image`.
    pub fn apply<I: FaceRaster>(self, image: &mut I) {
        match self {
            Correction::Identity => {}
            Correction::RotateHalfTurn => image.rotate_half_turn(),
        }
    }
}

/// Correction required for faces on `axis`.
///
/// The x and z faces come out of the face cameras a half turn away from the
/// layout cubemap textures expect; the y faces already match. This table is
/// fixed and tied to the `up` vectors of [`cubemap_faces::FaceBasisTable`].
#[must_use]
pub fn orientation_correction(axis: Axis) -> Correction {
    match axis {
        Axis::X | Axis::Z => Correction::RotateHalfTurn,
        Axis::Y => Correction::Identity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    fn gradient(side: u32) -> GrayImage {
        GrayImage::from_fn(side, side, |x, y| Luma([(y * side + x) as u8]))
    }

    #[test]
    fn test_blank_is_square_and_zeroed() {
        let image = RgbaImage::blank(5);
        assert_eq!(FaceRaster::dimensions(&image), (5, 5));
        assert!(image.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_half_turn_is_point_reflection() {
        let side = 7;
        let original = gradient(side);
        let mut rotated = original.clone();
        rotated.rotate_half_turn();

        for y in 0..side {
            for x in 0..side {
                assert_eq!(
                    rotated.get_pixel(x, y),
                    original.get_pixel(side - 1 - x, side - 1 - y)
                );
            }
        }
        assert_eq!(rotated.get_pixel(0, 0), original.get_pixel(side - 1, side - 1));
    }

    #[test]
    fn test_half_turn_twice_is_identity() {
        let original = gradient(6);
        let mut image = original.clone();
        image.rotate_half_turn();
        image.rotate_half_turn();
        assert_eq!(image, original);
    }

    #[test]
    fn test_correction_table() {
        assert_eq!(orientation_correction(Axis::X), Correction::RotateHalfTurn);
        assert_eq!(orientation_correction(Axis::Y), Correction::Identity);
        assert_eq!(orientation_correction(Axis::Z), Correction::RotateHalfTurn);
    }

    #[test]
    fn test_identity_correction_leaves_bytes_untouched() {
        let original = gradient(4);
        let mut image = original.clone();
        Correction::Identity.apply(&mut image);
        assert_eq!(image.as_raw(), original.as_raw());
    }
}
