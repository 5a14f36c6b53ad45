//! Luminance conversion for colour inputs
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses fast integer arithmetic: Y = (77*R + 150*G + 29*B + 128) >> 8
//!
//! The coefficients sum to 256, so neutral grays keep their value and a
//! colour file classifies like its single-channel twin. Rows are
//! converted in parallel.

use rayon::prelude::*;

/// Coefficients for grayscale conversion: Y = (77*R + 150*G + 29*B + 128) >> 8
const COEF_R: u32 = 77;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;
const ROUND: u32 = 128;

#[inline]
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32 + ROUND) >> 8;
    lum.min(255) as u8
}

fn to_grayscale_strided(pixels: &[u8], width: usize, height: usize, stride: usize) -> Vec<u8> {
    let pixel_count = width * height;
    if pixel_count == 0 {
        return Vec::new();
    }
    let mut gray = vec![0u8; pixel_count];

    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * stride;
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * stride;
            *out = luminance(pixels[idx], pixels[idx + 1], pixels[idx + 2]);
        }
    });

    gray
}

/// Convert packed RGB bytes to grayscale
pub fn rgb_to_grayscale(rgb: &[u8], width: usize, height: usize) -> Vec<u8> {
    to_grayscale_strided(rgb, width, height, 3)
}

/// Convert packed RGBA bytes to grayscale (alpha is ignored)
pub fn rgba_to_grayscale(rgba: &[u8], width: usize, height: usize) -> Vec<u8> {
    to_grayscale_strided(rgba, width, height, 4)
}
