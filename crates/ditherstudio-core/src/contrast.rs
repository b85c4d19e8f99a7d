//! Contrast and tone pre-pass.
//!
//! Stages the image into a floating-point working buffer so that later error
//! diffusion can accumulate without clamping or rounding loss between pixels.
//! In luminance mode (the default) each pixel contributes one BT.709 luma
//! sample; in per-channel mode R, G and B stay three independent signals.

use crate::image::{PixelBuffer, ProcessError};
use crate::luminance::luma_u8;
use crate::ChannelMode;

/// Floating-point staging buffer for one `process` invocation.
///
/// Holds width * height * channels samples in row-major order, channels
/// interleaved per pixel. Samples are unclamped; diffusion may transiently
/// push them outside [0, 255].
#[derive(Debug)]
pub(crate) struct WorkingBuffer {
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// 1 in luminance mode, 3 in per-channel mode.
    pub(crate) channels: usize,
    pub(crate) samples: Vec<f32>,
}

impl WorkingBuffer {
    /// Index of the sample for channel `c` of the pixel at (x, y).
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32, c: usize) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels + c
    }
}

/// Compute the multiplicative contrast factor for an integer contrast value.
///
/// `factor = (259*(c+255)) / (255*(259-c))`, which is 1.0 at c = 0. The
/// curve has a pole at c = 259; that value is rejected rather than letting
/// an infinite factor propagate. Callers conventionally stay in [-50, 150].
pub fn contrast_factor(contrast: i32) -> Result<f32, ProcessError> {
    if contrast == 259 {
        return Err(ProcessError::ContrastPole(contrast));
    }
    let c = contrast as f32;
    Ok((259.0 * (c + 255.0)) / (255.0 * (259.0 - c)))
}

/// Contrast curve around the 128 midpoint, unclamped.
#[inline]
fn adjust(v: f32, factor: f32) -> f32 {
    factor * (v - 128.0) + 128.0
}

/// Build the working buffer: contrast-adjusted luma or RGB samples.
///
/// Alpha never enters the working buffer; it is copied straight from input
/// to output by the orchestrator.
pub(crate) fn build_working(
    image: &PixelBuffer,
    factor: f32,
    mode: ChannelMode,
) -> WorkingBuffer {
    let channels = mode.channel_count();
    let mut samples = Vec::with_capacity(image.pixel_count() * channels);

    for px in image.pixels.chunks_exact(4) {
        match mode {
            ChannelMode::Luminance => {
                samples.push(adjust(luma_u8(px[0], px[1], px[2]), factor));
            }
            ChannelMode::PerChannel => {
                for &v in &px[0..3] {
                    samples.push(adjust(v as f32, factor));
                }
            }
        }
    }

    WorkingBuffer {
        width: image.width,
        height: image.height,
        channels,
        samples,
    }
}
