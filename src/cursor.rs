//! Custom cursor images.
//!
//! Hardware cursors are picky: the image must be RGBA8888, each dimension an
//! independent power of two, and every pixel either fully opaque or fully
//! transparent. [`CursorImage::new`] enforces that contract up front, so a
//! value of this type is valid by construction and backends never need to
//! re-validate. A non-conforming image is a caller error, not a soft
//! fallback.

use crate::errors::{Error, Result};

const BYTES_PER_PIXEL: usize = 4;
const ALPHA_OFFSET: usize = 3;

/// A validated cursor image: RGBA8888, power-of-two dimensions, binary alpha.
///
/// Passing `None` instead of a `CursorImage` to
/// [`InputHub::set_cursor_image`] reverts to the system default cursor.
///
/// [`InputHub::set_cursor_image`]: crate::hub::InputHub::set_cursor_image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CursorImage {
    /// Builds a cursor image from an RGBA8888 pixel buffer, row-major from
    /// the top-left corner.
    ///
    /// # Errors
    ///
    /// - [`Error::CursorImageSize`] if `width` or `height` is zero or not a
    ///   power of two, or `pixels.len() != width * height * 4`.
    /// - [`Error::CursorImageAlpha`] if any pixel's alpha is neither `0x00`
    ///   nor `0xFF`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if !width.is_power_of_two() || !height.is_power_of_two() || pixels.len() != expected {
            return Err(Error::CursorImageSize {
                width,
                height,
                bytes: pixels.len(),
            });
        }

        if let Some((pixel, &alpha)) = pixels
            .iter()
            .skip(ALPHA_OFFSET)
            .step_by(BYTES_PER_PIXEL)
            .enumerate()
            .find(|&(_, &a)| a != 0x00 && a != 0xFF)
        {
            return Err(Error::CursorImageAlpha { pixel, alpha });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels. Always a power of two.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels. Always a power of two.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8888 pixel buffer, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Checks that a hotspot lies within this image.
    ///
    /// # Errors
    ///
    /// [`Error::HotspotOutOfBounds`] if `(x, y)` does not address a pixel.
    pub(crate) fn check_hotspot(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::HotspotOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::pretty_assertions::assert_eq;

    fn opaque_pixels(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 0xFF;
        }
        pixels
    }

    #[test]
    fn test_valid_image() {
        let img = CursorImage::new(16, 32, opaque_pixels(16, 32)).unwrap();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 32);
        assert_eq!(img.pixels().len(), 16 * 32 * 4);
    }

    /// Width and height are independently power-of-two; 12x16 fails even
    /// though the buffer length is self-consistent.
    #[test]
    fn test_non_power_of_two_dimensions_are_rejected() {
        assert_eq!(
            CursorImage::new(12, 16, opaque_pixels(12, 16)),
            Err(Error::CursorImageSize {
                width: 12,
                height: 16,
                bytes: 12 * 16 * 4,
            })
        );
        assert!(CursorImage::new(0, 16, vec![]).is_err());
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        assert_eq!(
            CursorImage::new(8, 8, vec![0u8; 16]),
            Err(Error::CursorImageSize {
                width: 8,
                height: 8,
                bytes: 16,
            })
        );
    }

    /// Alpha must be strictly binary; a single translucent pixel fails the
    /// whole image, and the error names the pixel.
    #[test]
    fn test_translucent_alpha_is_rejected() {
        let mut pixels = opaque_pixels(8, 8);
        pixels[5 * 4 + 3] = 0x80;
        assert_eq!(
            CursorImage::new(8, 8, pixels),
            Err(Error::CursorImageAlpha {
                pixel: 5,
                alpha: 0x80,
            })
        );
    }

    #[test]
    fn test_fully_transparent_pixels_are_allowed() {
        let mut pixels = opaque_pixels(4, 4);
        pixels[3] = 0x00;
        assert!(CursorImage::new(4, 4, pixels).is_ok());
    }

    #[test]
    fn test_hotspot_bounds() {
        let img = CursorImage::new(8, 4, opaque_pixels(8, 4)).unwrap();
        assert!(img.check_hotspot(7, 3).is_ok());
        assert_eq!(
            img.check_hotspot(8, 0),
            Err(Error::HotspotOutOfBounds {
                x: 8,
                y: 0,
                width: 8,
                height: 4,
            })
        );
    }
}
