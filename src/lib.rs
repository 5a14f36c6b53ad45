//! starfield - turn the silhouette of an image into a starfield
//!
//! The pipeline is linear: grayscale load, threshold, external contour
//! tracing, contour fill, uniform sampling without replacement, and a
//! scatter plot of the sampled pixels (white on black, row axis flipped).

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Pipeline configuration and environment overrides
pub mod config;
/// Shape region extraction (contours and fill)
pub mod detector;
/// Error type
pub mod error;
/// Star position export (JSON/CSV)
pub mod export;
/// Core data structures (BitMatrix, Point, Contour)
pub mod models;
/// Scatter plot rendering
pub mod render;
/// Point collection and sampling
pub mod sampling;
/// Loading and stats helpers
pub mod tools;
/// Pixel-level helpers (grayscale, binarization)
pub mod utils;

pub use config::{PlotStyle, Polarity, StarfieldConfig, ThresholdSetting};
pub use error::{Result, StarfieldError};
pub use models::{BitMatrix, Contour, Point, PointI};

use detector::{fill_contours, find_external_contours};
use export::{ExportFormat, StarExport, export_stars};
use render::render_scatter;
use sampling::StarSampler;
use std::path::Path;
use utils::binarization::{resolve_threshold, threshold_binarize};

/// Load an image file as grayscale bytes with its dimensions
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize)> {
    let path = path.as_ref();
    tools::load_grayscale(path).map_err(|source| StarfieldError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Intermediate masks for one image
#[derive(Debug, Clone)]
pub struct ShapeRegion {
    /// Cutoff that produced `binary`
    pub threshold: u8,
    /// Thresholded mask
    pub binary: BitMatrix,
    /// Outer contours of top-level regions
    pub contours: Vec<Contour>,
    /// Contours filled into a fresh mask
    pub filled: BitMatrix,
}

impl ShapeRegion {
    /// Mask width
    pub fn width(&self) -> usize {
        self.filled.width()
    }

    /// Mask height
    pub fn height(&self) -> usize {
        self.filled.height()
    }

    /// Number of pixels stars can be drawn from
    pub fn area(&self) -> usize {
        self.filled.count_ones()
    }
}

/// Threshold `gray`, trace external contours and fill them
pub fn extract_region(
    gray: &[u8],
    width: usize,
    height: usize,
    threshold: u8,
    polarity: Polarity,
) -> ShapeRegion {
    // Step 1: Binarize
    let binary = threshold_binarize(gray, width, height, threshold, polarity);

    // Step 2: Outer contours
    let contours = find_external_contours(&binary);

    // Step 3: Fill into a zeroed mask
    let filled = fill_contours(&contours, width, height);

    log::debug!(
        "threshold={} polarity={:?}: {} binary px, {} contours, {} filled px",
        threshold,
        polarity,
        binary.count_ones(),
        contours.len(),
        filled.count_ones()
    );

    ShapeRegion {
        threshold,
        binary,
        contours,
        filled,
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct StarfieldReport {
    /// Source width after loading
    pub width: usize,
    /// Source height after loading
    pub height: usize,
    /// Cutoff used
    pub threshold: u8,
    /// External contours found
    pub contour_count: usize,
    /// Pixels in the filled mask
    pub filled_pixels: usize,
    /// Sampled star positions in image coordinates
    pub stars: Vec<PointI>,
}

impl StarfieldReport {
    /// Borrow the report as an exportable record
    pub fn as_export(&self) -> StarExport<'_> {
        StarExport {
            width: self.width,
            height: self.height,
            threshold: self.threshold,
            stars: &self.stars,
        }
    }
}

/// Reusable pipeline with its own configuration and RNG
pub struct Starfield {
    config: StarfieldConfig,
    sampler: StarSampler,
}

impl Starfield {
    /// Create a pipeline; fails on a zero star count
    pub fn new(config: StarfieldConfig) -> Result<Self> {
        config.validate()?;
        let sampler = StarSampler::new(config.seed);
        Ok(Self { config, sampler })
    }

    /// Run thresholding, contour tracing and fill on a grayscale buffer
    pub fn extract_region(&self, gray: &[u8], width: usize, height: usize) -> ShapeRegion {
        let threshold = resolve_threshold(self.config.threshold, gray);
        extract_region(gray, width, height, threshold, self.config.polarity)
    }

    /// Draw the configured number of stars from a region
    pub fn sample(&mut self, region: &ShapeRegion) -> Result<Vec<PointI>> {
        self.sampler
            .sample_mask(&region.filled, self.config.num_stars)
    }

    /// Load, extract and sample without rendering
    pub fn generate<P: AsRef<Path>>(&mut self, image_path: P) -> Result<StarfieldReport> {
        let (gray, width, height) = load_image(image_path)?;
        let region = self.extract_region(&gray, width, height);
        let stars = self.sample(&region)?;
        Ok(StarfieldReport {
            width,
            height,
            threshold: region.threshold,
            contour_count: region.contours.len(),
            filled_pixels: region.area(),
            stars,
        })
    }

    /// Render a report's stars with the configured style
    pub fn render(&self, report: &StarfieldReport, output: &Path) -> Result<()> {
        render_scatter(
            &report.stars,
            report.width,
            report.height,
            &self.config.style,
            output,
        )
    }

    /// Full pipeline: load, extract, sample and render to `output`
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        image_path: P,
        output: Q,
    ) -> Result<StarfieldReport> {
        let report = self.generate(image_path)?;
        self.render(&report, output.as_ref())?;
        Ok(report)
    }

    /// Load, extract and sample, then write the stars to `output`
    pub fn export<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        image_path: P,
        output: Q,
        format: ExportFormat,
    ) -> Result<StarfieldReport> {
        let report = self.generate(image_path)?;
        export_stars(output.as_ref(), &report.as_export(), format)?;
        Ok(report)
    }
}

/// Render a starfield from `image_path` into `output` with a fixed cutoff
/// and star count, using default polarity and style.
///
/// # Example
/// ```no_run
/// let report = starfield::render_starfield("shape.jpg", "stars.png", 128, 500)?;
/// assert_eq!(report.stars.len(), 500);
/// # Ok::<(), starfield::StarfieldError>(())
/// ```
pub fn render_starfield<P: AsRef<Path>, Q: AsRef<Path>>(
    image_path: P,
    output: Q,
    threshold: u8,
    num_stars: usize,
) -> Result<StarfieldReport> {
    Starfield::new(StarfieldConfig::new(threshold, num_stars))?.run(image_path, output)
}
