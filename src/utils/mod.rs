//! Pixel-level helpers
//!
//! - Grayscale conversion (RGB/RGBA to luminance)
//! - Binarization (fixed cutoff or Otsu, either polarity)

pub mod binarization;
pub mod grayscale;
