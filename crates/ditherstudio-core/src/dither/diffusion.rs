//! Error-diffusion dithering (Floyd-Steinberg, Atkinson).
//!
//! Binarizes in strict raster-scan order (rows top to bottom, pixels left to
//! right), pushing each pixel's quantization error forward into not-yet-
//! processed neighbors. Scan order is an output invariant: a pixel must see
//! every error share deposited by earlier pixels before it is quantized, so
//! this pass cannot be split across rows or columns.

use crate::contrast::WorkingBuffer;

use super::{closest_tone, write_sample};

/// A single diffusion tap: neighbor offset plus the fraction of quantization
/// error it receives.
#[derive(Debug, Clone, Copy)]
pub struct Tap {
    pub dx: i32,
    pub dy: i32,
    pub weight: f32,
}

const fn tap(dx: i32, dy: i32, weight: f32) -> Tap {
    Tap { dx, dy, weight }
}

/// An error-diffusion kernel as a static tap table.
#[derive(Debug)]
pub struct DiffusionKernel {
    pub name: &'static str,
    pub taps: &'static [Tap],
}

/// Floyd-Steinberg kernel. Distributes 100% of the error to 4 neighbors:
///
/// ```text
///       X   7
///   3   5   1      (all /16)
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    name: "floyd-steinberg",
    taps: &[
        tap(1, 0, 7.0 / 16.0),
        tap(-1, 1, 3.0 / 16.0),
        tap(0, 1, 5.0 / 16.0),
        tap(1, 1, 1.0 / 16.0),
    ],
};

/// Atkinson kernel. Six taps of 1/8 each:
///
/// ```text
///       X   1   1
///   1   1   1
///       1
/// ```
///
/// Only 6/8 = 75% of the error is propagated, which lightens output relative
/// to Floyd-Steinberg. That loss is intentional, not a bug.
pub const ATKINSON: DiffusionKernel = DiffusionKernel {
    name: "atkinson",
    taps: &[
        tap(1, 0, 1.0 / 8.0),
        tap(2, 0, 1.0 / 8.0),
        tap(-1, 1, 1.0 / 8.0),
        tap(0, 1, 1.0 / 8.0),
        tap(1, 1, 1.0 / 8.0),
        tap(0, 2, 1.0 / 8.0),
    ],
};

/// Run one error-diffusion pass over the working buffer, writing binarized
/// RGB into `output` (RGBA layout; alpha bytes are left for the caller).
///
/// For each sample in scan order: quantize with the 128 threshold, write the
/// result, then distribute `err = sample - result` through the kernel taps.
/// Taps landing outside the image are silently dropped; their error share is
/// lost. In per-channel mode each channel diffuses independently.
pub(crate) fn diffuse(working: &mut WorkingBuffer, output: &mut [u8], kernel: &DiffusionKernel) {
    let width = working.width;
    let height = working.height;
    let channels = working.channels;

    for y in 0..height {
        for x in 0..width {
            let out_base = (y as usize * width as usize + x as usize) * 4;
            for c in 0..channels {
                let idx = working.index(x, y, c);
                let sample = working.samples[idx];
                let tone = closest_tone(sample);
                let err = sample - tone;
                write_sample(output, out_base, channels, c, tone);

                for t in kernel.taps {
                    let nx = x as i64 + t.dx as i64;
                    let ny = y as i64 + t.dy as i64;
                    if nx >= 0 && nx < width as i64 && ny >= 0 && ny < height as i64 {
                        let ni = working.index(nx as u32, ny as u32, c);
                        working.samples[ni] += err * t.weight;
                    }
                }
            }
        }
    }
}
