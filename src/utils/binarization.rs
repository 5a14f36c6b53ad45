use crate::config::{Polarity, ThresholdSetting};
use crate::models::BitMatrix;
use rayon::prelude::*;

/// Whether a single intensity lands on the foreground side of the cutoff.
///
/// Inverse polarity keeps `v < threshold`, except that 255 is the ceiling
/// and keeps every value. Direct polarity keeps `v > threshold`.
#[inline]
pub fn is_foreground(value: u8, threshold: u8, polarity: Polarity) -> bool {
    match polarity {
        Polarity::Inverse => threshold == u8::MAX || value < threshold,
        Polarity::Direct => value > threshold,
    }
}

/// Global threshold binarization
/// Returns a BitMatrix where true = foreground
pub fn threshold_binarize(
    gray: &[u8],
    width: usize,
    height: usize,
    threshold: u8,
    polarity: Polarity,
) -> BitMatrix {
    if width == 0 || height == 0 {
        return BitMatrix::new(width, height);
    }

    let mut flags = vec![false; width * height];
    flags
        .par_chunks_mut(width)
        .zip(gray.par_chunks(width))
        .for_each(|(out, row)| {
            for (flag, &value) in out.iter_mut().zip(row) {
                *flag = is_foreground(value, threshold, polarity);
            }
        });

    BitMatrix::from_flags(&flags, width, height)
}

/// Binarize with the cutoff Otsu's method picks for this image
pub fn otsu_binarize(gray: &[u8], width: usize, height: usize, polarity: Polarity) -> BitMatrix {
    threshold_binarize(gray, width, height, otsu_threshold(gray), polarity)
}

/// Resolve a configured threshold against a concrete image
pub fn resolve_threshold(setting: ThresholdSetting, gray: &[u8]) -> u8 {
    match setting {
        ThresholdSetting::Fixed(value) => value,
        ThresholdSetting::Otsu => otsu_threshold(gray),
    }
}

/// Calculate Otsu's optimal threshold.
///
/// The returned value `t` splits the histogram into `[0, t)` and `[t, 255]`
/// with maximal between-class variance.
pub fn otsu_threshold(gray: &[u8]) -> u8 {
    // Build histogram
    let mut histogram = [0u64; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total_pixels = gray.len() as f64;
    let total_sum: u64 = histogram
        .iter()
        .enumerate()
        .map(|(intensity, &count)| intensity as u64 * count)
        .sum();

    let mut max_variance = 0.0;
    let mut optimal_threshold = 128u8;
    let mut class1_pixels = 0u64;
    let mut class1_sum = 0u64;

    for threshold in 1..=255usize {
        class1_pixels += histogram[threshold - 1];
        class1_sum += (threshold as u64 - 1) * histogram[threshold - 1];
        let class2_pixels = gray.len() as u64 - class1_pixels;

        if class1_pixels == 0 || class2_pixels == 0 {
            continue;
        }

        let class1_mean = class1_sum as f64 / class1_pixels as f64;
        let class2_mean = (total_sum - class1_sum) as f64 / class2_pixels as f64;

        let weight1 = class1_pixels as f64 / total_pixels;
        let weight2 = class2_pixels as f64 / total_pixels;

        let variance = weight1 * weight2 * (class1_mean - class2_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold as u8;
        }
    }

    optimal_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_binarize_inverse() {
        let gray = vec![100, 150, 200, 50]; // 2x2 image
        let binary = threshold_binarize(&gray, 2, 2, 128, Polarity::Inverse);

        // Pixels < 128 should be foreground (true)
        assert!(binary.get(0, 0)); // 100 < 128
        assert!(!binary.get(1, 0)); // 150 >= 128
        assert!(!binary.get(0, 1)); // 200 >= 128
        assert!(binary.get(1, 1)); // 50 < 128
    }

    #[test]
    fn test_threshold_binarize_direct() {
        let gray = vec![100, 150, 128, 50];
        let binary = threshold_binarize(&gray, 2, 2, 128, Polarity::Direct);
        assert!(!binary.get(0, 0));
        assert!(binary.get(1, 0));
        assert!(!binary.get(0, 1)); // 128 is not above the cutoff
        assert!(!binary.get(1, 1));
    }

    #[test]
    fn test_cutoff_extremes() {
        let gray: Vec<u8> = (0..=255).collect();
        let none = threshold_binarize(&gray, 16, 16, 0, Polarity::Inverse);
        assert_eq!(none.count_ones(), 0);

        let all = threshold_binarize(&gray, 16, 16, 255, Polarity::Inverse);
        assert_eq!(all.count_ones(), 256);
    }

    #[test]
    fn test_otsu_binarize() {
        // Create a simple two-class image
        let mut gray = vec![50u8; 50]; // Dark class
        gray.extend(vec![200u8; 50]); // Light class

        let threshold = otsu_threshold(&gray);
        assert!(threshold > 50 && threshold <= 200);

        let binary = otsu_binarize(&gray, 10, 10, Polarity::Inverse);
        // Top half is dark and becomes foreground
        assert!(binary.get(0, 0));
        assert!(!binary.get(0, 7));
    }

    #[test]
    fn test_resolve_threshold() {
        let gray = vec![10u8, 240];
        assert_eq!(resolve_threshold(ThresholdSetting::Fixed(77), &gray), 77);
        assert_eq!(
            resolve_threshold(ThresholdSetting::Otsu, &gray),
            otsu_threshold(&gray)
        );
    }
}
