//! Starfield scatter plot
//!
//! Stars are drawn as small white discs on a black canvas without mesh,
//! labels or caption. The plot spans the full image extent with the row
//! axis negated, so the shape appears the way it does in the source image.

use crate::config::PlotStyle;
use crate::error::{Result, StarfieldError};
use crate::models::PointI;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

fn draw_stars<DB>(
    root: &DrawingArea<DB, Shift>,
    stars: &[PointI],
    width: usize,
    height: usize,
    point_size: u32,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&BLACK)?;

    // Half-pixel padding keeps edge stars on the canvas.
    let x_range = -0.5f64..(width as f64 - 0.5);
    let y_range = -(height as f64 - 0.5)..0.5f64;
    let mut chart = ChartBuilder::on(root)
        .margin(0)
        .x_label_area_size(0)
        .y_label_area_size(0)
        .build_cartesian_2d(x_range, y_range)?;

    chart.draw_series(
        stars
            .iter()
            .map(|star| Circle::new(star.plot_coords(), point_size, WHITE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Render `stars` from an image of `width`x`height` pixels into `output`.
///
/// The backend follows the file extension: `.svg` writes vector output,
/// anything else goes through the bitmap encoder (PNG for `.png`).
pub fn render_scatter(
    stars: &[PointI],
    width: usize,
    height: usize,
    style: &PlotStyle,
    output: &Path,
) -> Result<()> {
    let size = (style.width, style.height);
    let is_svg = output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let drawn = if is_svg {
        let root = SVGBackend::new(output, size).into_drawing_area();
        draw_stars(&root, stars, width, height, style.point_size)
    } else {
        let root = BitMapBackend::new(output, size).into_drawing_area();
        draw_stars(&root, stars, width, height, style.point_size)
    };

    drawn.map_err(|err| StarfieldError::Render(err.to_string()))?;
    log::info!("wrote {} stars to {}", stars.len(), output.display());
    Ok(())
}
