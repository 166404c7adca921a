use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clustering::kmeans::ClusteringResult;
use clustering::Point;
use colored::{Color, Colorize};
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::input::CountryTable;

// Means are shown with this many decimals
const DISPLAY_DECIMALS: i32 = 2;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    #[error("Cannot color {requested} clusters with a palette of {available} colors")]
    PaletteTooSmall { requested: usize, available: usize },
}

/// Shuffles the whole palette and hands out its first `num_clusters` colors.
pub fn assign_colors<R: Rng + ?Sized>(
    palette: &[String],
    num_clusters: usize,
    rng: &mut R,
) -> std::result::Result<Vec<String>, ReportError> {
    if num_clusters > palette.len() {
        return Err(ReportError::PaletteTooSmall {
            requested: num_clusters,
            available: palette.len(),
        });
    }
    let mut colors = palette.to_vec();
    colors.shuffle(rng);
    colors.truncate(num_clusters);
    Ok(colors)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterReport {
    /// 1-based, as shown to the user
    pub ordinal: usize,
    pub color: String,
    pub countries: Vec<String>,
    pub points: Vec<Point>,
    /// None when the cluster is empty
    pub mean_birthrate: Option<f64>,
    pub mean_life_expectancy: Option<f64>,
}

pub fn build_reports(
    result: &ClusteringResult,
    table: &CountryTable,
    colors: &[String],
) -> std::result::Result<Vec<ClusterReport>, ReportError> {
    if colors.len() < result.clusters.len() {
        return Err(ReportError::PaletteTooSmall {
            requested: result.clusters.len(),
            available: colors.len(),
        });
    }

    let reports = result
        .clusters
        .iter()
        .zip(colors)
        .map(|(cluster, color)| {
            let summary = match cluster.summary() {
                Ok(summary) => Some(summary.rounded(DISPLAY_DECIMALS)),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            };
            ClusterReport {
                ordinal: cluster.index() + 1,
                color: color.clone(),
                countries: table
                    .countries_in(cluster.points())
                    .into_iter()
                    .map(String::from)
                    .collect(),
                points: cluster.points().to_vec(),
                mean_birthrate: summary.map(|s| s.mean_x),
                mean_life_expectancy: summary.map(|s| s.mean_y),
            }
        })
        .collect::<Vec<ClusterReport>>();
    debug!("Reported {} clusters", reports.len());
    Ok(reports)
}

/// Terminal color for a palette entry. Unknown names are drawn in white.
pub fn display_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "blue" => Color::Blue,
        "green" => Color::Green,
        "purple" => Color::Magenta,
        "pink" => Color::TrueColor {
            r: 255,
            g: 105,
            b: 180,
        },
        "red" => Color::Red,
        "orange" => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        "brown" => Color::TrueColor {
            r: 139,
            g: 69,
            b: 19,
        },
        "black" => Color::Black,
        "yellow" => Color::Yellow,
        "grey" | "gray" => Color::BrightBlack,
        _ => Color::White,
    }
}

pub fn render_text<W: Write>(reports: &[ClusterReport], writer: &mut W) -> std::io::Result<()> {
    for report in reports {
        let header = format!(
            "Country list for cluster {} (colour: {}) :",
            report.ordinal, report.color
        );
        writeln!(writer, "{}", header.color(display_color(&report.color)))?;
        writeln!(writer, "{}", report.countries.join(", "))?;
        writeln!(
            writer,
            "Number of countries in the cluster: {}",
            report.countries.len()
        )?;
        match (report.mean_birthrate, report.mean_life_expectancy) {
            (Some(birthrate), Some(life_expectancy)) => {
                writeln!(writer, "The mean birthrate for the cluster is {:.2}", birthrate)?;
                writeln!(
                    writer,
                    "The mean life expectancy for the cluster is {:.2}",
                    life_expectancy
                )?;
            }
            _ => writeln!(writer, "The cluster is empty, no means to report")?,
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_json<P: AsRef<Path>>(reports: &[ClusterReport], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.flush()?;
    Ok(())
}
