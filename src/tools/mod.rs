//! Loading and reporting helpers shared by the library and the CLI

use crate::config::max_dim_from_env;
use crate::models::BitMatrix;
use crate::utils::grayscale::{rgb_to_grayscale, rgba_to_grayscale};
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Load an image as 8-bit grayscale along with its dimensions.
///
/// Colour inputs are converted with the integer luminance weights; inputs
/// that are already single-channel keep their values. When
/// `STARFIELD_MAX_DIM` is set, larger images are downscaled first.
pub fn load_grayscale<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = fit_within(image::open(path)?, max_dim_from_env());
    Ok(to_grayscale(&img))
}

/// Downscale so the longest side is at most `max_dim`, keeping the aspect
/// ratio. Images that already fit, or `None`, pass through untouched.
pub fn fit_within(img: DynamicImage, max_dim: Option<u32>) -> DynamicImage {
    let Some(max_dim) = max_dim else {
        return img;
    };
    let (orig_w, orig_h) = img.dimensions();
    if orig_w.max(orig_h) <= max_dim {
        return img;
    }
    log::debug!("downscaling {}x{} to fit {}", orig_w, orig_h, max_dim);
    img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle)
}

/// Convert a decoded image into row-major grayscale bytes
pub fn to_grayscale(img: &DynamicImage) -> (Vec<u8>, usize, usize) {
    let (width, height) = img.dimensions();
    let (width, height) = (width as usize, height as usize);
    let gray = if !img.color().has_color() {
        img.to_luma8().into_raw()
    } else if img.color().has_alpha() {
        rgba_to_grayscale(&img.to_rgba8().into_raw(), width, height)
    } else {
        rgb_to_grayscale(&img.to_rgb8().into_raw(), width, height)
    };
    (gray, width, height)
}

/// Summary statistics for grayscale data.
#[derive(Debug, Clone, Copy)]
pub struct GrayStats {
    /// Minimum grayscale value.
    pub min: u8,
    /// Maximum grayscale value.
    pub max: u8,
    /// Average grayscale value.
    pub avg: u8,
}

/// Summary statistics for a mask.
#[derive(Debug, Clone, Copy)]
pub struct MaskStats {
    /// Count of foreground pixels.
    pub foreground_pixels: usize,
    /// Total pixels in the mask.
    pub total_pixels: usize,
    /// Ratio of foreground pixels to total pixels.
    pub foreground_ratio: f64,
}

/// Compute min/max/avg for grayscale values.
pub fn grayscale_stats(gray: &[u8]) -> GrayStats {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum: u64 = 0;
    for &v in gray {
        min = min.min(v);
        max = max.max(v);
        sum += v as u64;
    }
    let avg = if gray.is_empty() {
        0
    } else {
        (sum / gray.len() as u64) as u8
    };
    GrayStats { min, max, avg }
}

/// Compute foreground pixel stats for a mask.
pub fn mask_stats(mask: &BitMatrix) -> MaskStats {
    let foreground = mask.count_ones();
    let total = mask.len();
    let ratio = if total == 0 {
        0.0
    } else {
        foreground as f64 / total as f64
    };
    MaskStats {
        foreground_pixels: foreground,
        total_pixels: total,
        foreground_ratio: ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_grayscale_stats() {
        let stats = grayscale_stats(&[10, 20, 30]);
        assert_eq!((stats.min, stats.max, stats.avg), (10, 30, 20));
    }

    #[test]
    fn test_mask_stats() {
        let mut mask = BitMatrix::new(4, 5);
        mask.set(0, 0, true);
        mask.set(3, 4, true);
        let stats = mask_stats(&mask);
        assert_eq!(stats.foreground_pixels, 2);
        assert_eq!(stats.total_pixels, 20);
        assert!((stats.foreground_ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_luma_input_keeps_values() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([255])));
        let (gray, w, h) = to_grayscale(&img);
        assert_eq!((w, h), (3, 2));
        assert!(gray.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_fit_within_downscales_longest_side() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(200, 100, Luma([0])));
        let small = fit_within(img, Some(50));
        assert_eq!(small.dimensions(), (50, 25));
    }

    #[test]
    fn test_fit_within_keeps_small_images() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 30, Luma([0])));
        assert_eq!(fit_within(img.clone(), Some(40)).dimensions(), (40, 30));
        assert_eq!(fit_within(img, None).dimensions(), (40, 30));
    }

    #[test]
    fn test_neutral_rgb_matches_luma() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([128, 128, 128])));
        let luma = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([128])));
        assert_eq!(to_grayscale(&rgb), to_grayscale(&luma));
    }

    #[test]
    fn test_rgb_input_converted() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([0, 255, 0])));
        let (gray, _, _) = to_grayscale(&img);
        assert!(gray.iter().all(|&v| v == 149));
    }
}
