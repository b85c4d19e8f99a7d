//! Ordered dithering thresholds from a fixed 4x4 Bayer matrix.

/// The 4x4 Bayer index matrix. Each cell is an ordered-dither level in 0..16;
/// the matrix tiles infinitely over the image by modular indexing.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// The dither threshold applied at (x, y), on the 0-255 scale.
///
/// `t = (level / 16) * 255` where `level = BAYER_4X4[y mod 4][x mod 4]`.
#[inline]
pub fn threshold_at(x: u32, y: u32) -> f32 {
    let level = BAYER_4X4[(y % 4) as usize][(x % 4) as usize];
    (level as f32 / 16.0) * 255.0
}
