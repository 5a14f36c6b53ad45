use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use starfield::config::{DEFAULT_NUM_STARS, DEFAULT_THRESHOLD, PlotStyle, seed_from_env};
use starfield::export::ExportFormat;
use starfield::tools::{grayscale_stats, mask_stats};
use starfield::{Polarity, Starfield, StarfieldConfig, ThresholdSetting, load_image};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "starfield", version, about = "Sample a starfield from the shape in an image")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render sampled stars as a scatter plot (PNG, or SVG by extension)
    Render {
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value = "starfield.png")]
        output: PathBuf,
        #[command(flatten)]
        pipeline: PipelineArgs,
        #[arg(long, default_value_t = PlotStyle::default().width)]
        width: u32,
        #[arg(long, default_value_t = PlotStyle::default().height)]
        height: u32,
        #[arg(long, default_value_t = PlotStyle::default().point_size)]
        point_size: u32,
    },
    /// Print grayscale, mask and contour stats for an image
    Inspect {
        #[arg(long)]
        image: PathBuf,
        #[command(flatten)]
        threshold: ThresholdArgs,
    },
    /// Write sampled star positions as JSON or CSV
    Export {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Defaults to the output extension (csv, otherwise json)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

#[derive(Args)]
struct ThresholdArgs {
    /// Intensity cutoff (0-255)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, conflicts_with = "otsu")]
    threshold: u8,
    /// Pick the cutoff per image with Otsu's method
    #[arg(long)]
    otsu: bool,
    #[arg(long, value_enum, default_value_t = PolarityArg::Inverse)]
    polarity: PolarityArg,
}

impl ThresholdArgs {
    fn setting(&self) -> ThresholdSetting {
        if self.otsu {
            ThresholdSetting::Otsu
        } else {
            ThresholdSetting::Fixed(self.threshold)
        }
    }
}

#[derive(Args)]
struct PipelineArgs {
    #[command(flatten)]
    threshold: ThresholdArgs,
    /// Number of stars to sample
    #[arg(long, default_value_t = DEFAULT_NUM_STARS)]
    stars: usize,
    /// RNG seed (falls back to STARFIELD_SEED)
    #[arg(long)]
    seed: Option<u64>,
}

impl PipelineArgs {
    fn config(&self, style: PlotStyle) -> StarfieldConfig {
        StarfieldConfig {
            threshold: self.threshold.setting(),
            polarity: self.threshold.polarity.into(),
            num_stars: self.stars,
            seed: self.seed.or_else(seed_from_env),
            style,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolarityArg {
    /// Darker than the cutoff is the shape
    Inverse,
    /// Brighter than the cutoff is the shape
    Direct,
}

impl From<PolarityArg> for Polarity {
    fn from(arg: PolarityArg) -> Self {
        match arg {
            PolarityArg::Inverse => Polarity::Inverse,
            PolarityArg::Direct => Polarity::Direct,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            image,
            output,
            pipeline,
            width,
            height,
            point_size,
        } => {
            let style = PlotStyle {
                width,
                height,
                point_size,
            };
            render_cmd(&image, &output, pipeline.config(style))
        }
        Command::Inspect { image, threshold } => inspect_cmd(&image, &threshold),
        Command::Export {
            image,
            output,
            format,
            pipeline,
        } => {
            let format = format
                .map(ExportFormat::from)
                .unwrap_or_else(|| ExportFormat::from_path(&output));
            export_cmd(&image, &output, format, pipeline.config(PlotStyle::default()))
        }
    }
}

fn render_cmd(image: &Path, output: &Path, config: StarfieldConfig) -> Result<()> {
    let mut pipeline = Starfield::new(config).context("invalid configuration")?;
    let start = Instant::now();
    let report = pipeline
        .run(image, output)
        .with_context(|| format!("failed to render starfield for {}", image.display()))?;

    println!("Image: {} ({}x{})", image.display(), report.width, report.height);
    println!(
        "Threshold {} -> {} contours, {} shape pixels",
        report.threshold, report.contour_count, report.filled_pixels
    );
    println!(
        "Plotted {} stars to {} ({:.2?})",
        report.stars.len(),
        output.display(),
        start.elapsed()
    );
    Ok(())
}

fn inspect_cmd(image: &Path, threshold: &ThresholdArgs) -> Result<()> {
    let (gray, width, height) = load_image(image)?;
    println!("Image: {} ({}x{})", image.display(), width, height);

    let gray_stats = grayscale_stats(&gray);
    println!(
        "Grayscale range: {}-{}, average: {}",
        gray_stats.min, gray_stats.max, gray_stats.avg
    );

    let config = StarfieldConfig {
        threshold: threshold.setting(),
        polarity: threshold.polarity.into(),
        ..StarfieldConfig::default()
    };
    let pipeline = Starfield::new(config)?;
    let region = pipeline.extract_region(&gray, width, height);

    let binary = mask_stats(&region.binary);
    println!(
        "Binary (threshold {}): foreground={} total={} ratio={:.2}%",
        region.threshold,
        binary.foreground_pixels,
        binary.total_pixels,
        binary.foreground_ratio * 100.0
    );

    println!("Found {} external contours", region.contours.len());
    for (i, contour) in region.contours.iter().take(10).enumerate() {
        let centre = contour.centroid().unwrap_or_default();
        println!(
            "  Contour {}: vertices={} polygon_area={:.1} bbox={:?} centroid=({:.1}, {:.1})",
            i,
            contour.len(),
            contour.polygon_area(),
            contour.bounding_box(),
            centre.x,
            centre.y
        );
    }

    let filled = mask_stats(&region.filled);
    println!(
        "Filled: foreground={} ratio={:.2}%",
        filled.foreground_pixels,
        filled.foreground_ratio * 100.0
    );
    Ok(())
}

fn export_cmd(
    image: &Path,
    output: &Path,
    format: ExportFormat,
    config: StarfieldConfig,
) -> Result<()> {
    let mut pipeline = Starfield::new(config).context("invalid configuration")?;
    let report = pipeline
        .export(image, output, format)
        .with_context(|| format!("failed to export stars for {}", image.display()))?;
    println!(
        "Exported {} stars ({}x{}, threshold {}) to {}",
        report.stars.len(),
        report.width,
        report.height,
        report.threshold,
        output.display()
    );
    Ok(())
}
