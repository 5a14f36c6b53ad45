//! Star position export for external viewers
//!
//! JSON carries the source dimensions and cutoff next to the positions;
//! CSV is a plain `x,y` table. Positions are image pixel coordinates
//! (row axis pointing down).

use crate::error::Result;
use crate::models::PointI;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Single JSON document
    #[default]
    Json,
    /// `x,y` header followed by one star per line
    Csv,
}

impl ExportFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

/// Serialized form of a sampled starfield
#[derive(Debug, Serialize)]
pub struct StarExport<'a> {
    /// Source image width
    pub width: usize,
    /// Source image height
    pub height: usize,
    /// Intensity cutoff that produced the mask
    pub threshold: u8,
    /// Star positions as `[x, y]`
    #[serde(serialize_with = "serialize_points")]
    pub stars: &'a [PointI],
}

fn serialize_points<S>(points: &&[PointI], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(points.iter().map(|p| [p.x, p.y]))
}

/// Write the export to any writer
pub fn write_stars<W: Write>(
    writer: &mut W,
    export: &StarExport<'_>,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, export)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            writeln!(writer, "x,y")?;
            for star in export.stars {
                writeln!(writer, "{},{}", star.x, star.y)?;
            }
        }
    }
    Ok(())
}

/// Write the export to `path`
pub fn export_stars(path: &Path, export: &StarExport<'_>, format: ExportFormat) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_stars(&mut writer, export, format)?;
    writer.flush()?;
    log::info!(
        "exported {} stars to {} ({:?})",
        export.stars.len(),
        path.display(),
        format
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PointI> {
        vec![PointI::new(3, 4), PointI::new(10, 0)]
    }

    #[test]
    fn test_json_layout() {
        let stars = sample();
        let export = StarExport {
            width: 32,
            height: 16,
            threshold: 128,
            stars: &stars,
        };
        let mut buf = Vec::new();
        write_stars(&mut buf, &export, ExportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["width"], 32);
        assert_eq!(value["height"], 16);
        assert_eq!(value["threshold"], 128);
        assert_eq!(value["stars"], serde_json::json!([[3, 4], [10, 0]]));
    }

    #[test]
    fn test_csv_layout() {
        let stars = sample();
        let export = StarExport {
            width: 32,
            height: 16,
            threshold: 90,
            stars: &stars,
        };
        let mut buf = Vec::new();
        write_stars(&mut buf, &export, ExportFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "x,y\n3,4\n10,0\n");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a/b.CSV")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("stars.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("stars")), ExportFormat::Json);
    }
}
