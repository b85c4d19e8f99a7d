//! Luminance calculation using ITU-R BT.709 coefficients.
//!
//! The engine's working samples live on the 0-255 scale (matching the byte
//! channels they come from), so luminance here stays on that scale too.

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.0722;

/// Calculate luminance from RGB samples on the 0-255 scale.
///
/// Uses ITU-R BT.709 coefficients for perceptual luminance. The result is
/// not rounded or clamped; it feeds the floating-point working buffer.
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

/// Calculate luminance from u8 RGB channel values.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> f32 {
    luma(r as f32, g as f32, b as f32)
}
