//! Quantization and orchestration.
//!
//! `process` is the engine's single public operation: validate parameters,
//! stage the image through the contrast pre-pass, run the selected method,
//! and return a fresh output buffer. The stateless methods (threshold,
//! random, bayer, none) quantize each pixel independently; the error-
//! diffusion methods live in [`diffusion`] and are order-dependent.

pub mod bayer;
pub mod diffusion;

use rand::Rng;

use crate::contrast::{build_working, contrast_factor, WorkingBuffer};
use crate::image::{PixelBuffer, ProcessError};
use crate::{DitherMethod, DitherOptions};

/// Snap a working sample to the nearer of the two output tones.
///
/// Exactly 128 maps to white (255), matching `v < 128 -> 0, else 255`.
#[inline]
pub(crate) fn closest_tone(v: f32) -> f32 {
    if v < 128.0 {
        0.0
    } else {
        255.0
    }
}

/// Write one quantized sample into the RGBA output.
///
/// A single luminance sample fans out to R, G and B; per-channel samples map
/// one-to-one. Alpha bytes are written by the orchestrator.
#[inline]
pub(crate) fn write_sample(output: &mut [u8], out_base: usize, channels: usize, c: usize, value: f32) {
    let byte = value.clamp(0.0, 255.0).round() as u8;
    if channels == 1 {
        output[out_base] = byte;
        output[out_base + 1] = byte;
        output[out_base + 2] = byte;
    } else {
        output[out_base + c] = byte;
    }
}

/// Process an image with the default randomness source.
///
/// Equivalent to [`process_with_rng`] seeded from [`rand::thread_rng`]. Only
/// [`DitherMethod::Random`] consumes randomness; every other method is
/// deterministic and yields byte-identical output for identical inputs.
pub fn process(image: &PixelBuffer, options: &DitherOptions) -> Result<PixelBuffer, ProcessError> {
    process_with_rng(image, options, &mut rand::thread_rng())
}

/// Process an image, drawing any needed noise from the supplied generator.
///
/// Always allocates a fresh output buffer of the input's dimensions; the
/// input is never mutated. The alpha channel passes through unchanged.
///
/// # Errors
///
/// - [`ProcessError::EmptyImage`] if the buffer has zero width or height.
/// - [`ProcessError::BufferSizeMismatch`] if the pixel data length is not
///   width * height * 4.
/// - [`ProcessError::ContrastPole`] if `options.contrast == 259`.
pub fn process_with_rng<R: Rng>(
    image: &PixelBuffer,
    options: &DitherOptions,
    rng: &mut R,
) -> Result<PixelBuffer, ProcessError> {
    if image.width == 0 || image.height == 0 {
        return Err(ProcessError::EmptyImage);
    }
    let expected = image.pixel_count() * 4;
    if image.byte_len() != expected {
        return Err(ProcessError::BufferSizeMismatch {
            expected,
            actual: image.byte_len(),
        });
    }
    let factor = contrast_factor(options.contrast)?;

    let mut working = build_working(image, factor, options.channel_mode);
    let mut output = vec![0u8; image.byte_len()];

    match options.method {
        DitherMethod::Threshold => threshold_pass(&working, &mut output),
        DitherMethod::Random => random_pass(&working, &mut output, rng),
        DitherMethod::Bayer => bayer_pass(&working, &mut output),
        DitherMethod::None => passthrough_pass(&working, &mut output),
        DitherMethod::Floyd => diffusion::diffuse(&mut working, &mut output, &diffusion::FLOYD_STEINBERG),
        DitherMethod::Atkinson => diffusion::diffuse(&mut working, &mut output, &diffusion::ATKINSON),
    }

    // Alpha passes through untouched for every method
    for (dst, src) in output.chunks_exact_mut(4).zip(image.pixels.chunks_exact(4)) {
        dst[3] = src[3];
    }

    Ok(PixelBuffer::new(image.width, image.height, output))
}

/// Hard threshold at 128.
fn threshold_pass(working: &WorkingBuffer, output: &mut [u8]) {
    for_each_sample(working, output, |s, _, _| closest_tone(s));
}

/// Threshold after adding uniform noise in [-30, +30) to each sample.
///
/// Each draw is independent; reproducibility across runs is only available
/// through [`process_with_rng`] with a seeded generator.
fn random_pass<R: Rng>(working: &WorkingBuffer, output: &mut [u8], rng: &mut R) {
    for_each_sample(working, output, |s, _, _| {
        let noise: f32 = rng.gen_range(-30.0..30.0);
        closest_tone(s + noise)
    });
}

/// Ordered dithering against the tiled 4x4 Bayer matrix.
fn bayer_pass(working: &WorkingBuffer, output: &mut [u8]) {
    for_each_sample(working, output, |s, x, y| {
        if s < bayer::threshold_at(x, y) {
            0.0
        } else {
            255.0
        }
    });
}

/// Contrast pre-pass only: clamp to [0, 255], no binarization.
fn passthrough_pass(working: &WorkingBuffer, output: &mut [u8]) {
    for_each_sample(working, output, |s, _, _| s.clamp(0.0, 255.0));
}

/// Drive a stateless quantizer over every sample in the working buffer.
fn for_each_sample<F>(working: &WorkingBuffer, output: &mut [u8], mut quantize: F)
where
    F: FnMut(f32, u32, u32) -> f32,
{
    for y in 0..working.height {
        for x in 0..working.width {
            let out_base = (y as usize * working.width as usize + x as usize) * 4;
            for c in 0..working.channels {
                let s = working.samples[working.index(x, y, c)];
                write_sample(output, out_base, working.channels, c, quantize(s, x, y));
            }
        }
    }
}
