//! DitherStudio Core - dithering engine
//!
//! This crate converts a full-color RGBA image into a reduced-tone (1-bit
//! black/white) rendition. The caller hands over a decoded, pre-scaled pixel
//! buffer; decoding, scaling and UI wiring live upstream.
//!
//! The engine is a pure function of (buffer, options) -> new buffer: it never
//! mutates its input, owns no state across calls, and performs no I/O.

pub mod contrast;
pub mod dither;
pub mod image;
pub mod luminance;

pub use dither::{process, process_with_rng};
pub use image::{PixelBuffer, ProcessError};

/// Dithering method.
///
/// A closed set; dispatch is a plain `match`, no dynamic dispatch. Names
/// serialize in lowercase to match the UI-facing identifiers
/// (`"threshold"`, `"random"`, `"bayer"`, `"floyd"`, `"atkinson"`, `"none"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DitherMethod {
    /// Hard threshold at 128, no dithering.
    Threshold,
    /// Threshold with uniform noise in [-30, +30) added per sample.
    Random,
    /// Ordered dithering against a tiled 4x4 Bayer matrix.
    Bayer,
    /// Floyd-Steinberg error diffusion.
    Floyd,
    /// Atkinson error diffusion.
    #[default]
    Atkinson,
    /// Contrast pre-pass only; output is clamped but not binarized.
    None,
}

impl DitherMethod {
    /// Returns true for the error-diffusion methods, whose raster-scan order
    /// is a hard output invariant.
    pub fn is_error_diffusion(self) -> bool {
        matches!(self, DitherMethod::Floyd | DitherMethod::Atkinson)
    }
}

/// Which signals run through quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelMode {
    /// Collapse RGB to BT.709 luminance, quantize the single scalar, and
    /// write the result back to R, G and B. Monochrome output.
    #[default]
    Luminance,
    /// Quantize R, G and B as three independent signals. Produces colored
    /// dither artifacts.
    PerChannel,
}

impl ChannelMode {
    /// Number of working samples per pixel.
    pub(crate) fn channel_count(self) -> usize {
        match self {
            ChannelMode::Luminance => 1,
            ChannelMode::PerChannel => 3,
        }
    }
}

/// Parameters for one `process` invocation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DitherOptions {
    /// The dithering method to apply.
    pub method: DitherMethod,
    /// Contrast adjustment, recommended range [-50, 150].
    ///
    /// Any value is accepted except 259, where the contrast curve has a pole
    /// and `process` returns an error.
    pub contrast: i32,
    /// Luminance (default) or per-channel quantization.
    pub channel_mode: ChannelMode,
}

impl DitherOptions {
    /// Create options with default values (Atkinson, contrast 0, luminance).
    pub fn new() -> Self {
        Self::default()
    }
}
