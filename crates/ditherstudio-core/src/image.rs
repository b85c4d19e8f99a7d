//! Core pixel buffer type and engine errors.

use thiserror::Error;

/// Error types for the dithering engine.
///
/// Both variants are parameter-validation failures reported synchronously to
/// the caller; the engine never retries and holds no state across calls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// The input buffer has zero width or zero height.
    #[error("image has zero width or height")]
    EmptyImage,

    /// The pixel data length does not match width * height * 4.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The contrast value sits on the pole of the contrast curve.
    ///
    /// The contrast factor `(259*(c+255)) / (255*(259-c))` divides by zero at
    /// `c == 259`. Callers are expected to stay in [-50, 150].
    #[error("contrast {0} is the pole of the contrast curve")]
    ContrastPole(i32),
}

/// An RGBA image with 8-bit channels.
///
/// Pixel data is row-major with 4 bytes per pixel (R, G, B, A) and no padding
/// between rows. The engine treats this as an opaque buffer handed over by the
/// caller; decoding and scaling happen upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Get the byte offset of the pixel at (x, y).
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}
