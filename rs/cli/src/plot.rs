use std::path::Path;

use anyhow::Result;
use log::debug;
use plotters::prelude::*;

use crate::report::ClusterReport;

const PLOT_SIZE: (u32, u32) = (1024, 768);
const POINT_RADIUS: i32 = 4;

/// Plot color for a palette entry. Unknown names are drawn in black.
pub fn plot_color(name: &str) -> RGBColor {
    match name.to_lowercase().as_str() {
        "blue" => RGBColor(0, 0, 255),
        "green" => RGBColor(0, 128, 0),
        "purple" => RGBColor(128, 0, 128),
        "pink" => RGBColor(255, 192, 203),
        "red" => RGBColor(255, 0, 0),
        "orange" => RGBColor(255, 165, 0),
        "brown" => RGBColor(165, 42, 42),
        "yellow" => RGBColor(255, 255, 0),
        "grey" | "gray" => RGBColor(128, 128, 128),
        _ => RGBColor(0, 0, 0),
    }
}

// Padded (min, max) over `values`, never an empty range
fn axis_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (min, max) = values.fold((f64::MAX, f64::MIN), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    if min > max {
        return 0.0..1.0;
    }
    let padding = ((max - min) * 0.05).max(1.0);
    (min - padding)..(max + padding)
}

/// Scatter plot of every cluster in its own color, birthrate on x and life
/// expectancy on y, written as SVG.
pub fn render_svg<P: AsRef<Path>>(reports: &[ClusterReport], path: P) -> Result<()> {
    let path = path.as_ref();
    let points = || reports.iter().flat_map(|r| r.points.iter());
    let x_range = axis_range(points().map(|p| p.x));
    let y_range = axis_range(points().map(|p| p.y));

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Life Expectancy vs Birthrate", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;
    chart
        .configure_mesh()
        .x_desc("Birthrate")
        .y_desc("Life Expectancy")
        .draw()?;

    for report in reports {
        let color = plot_color(&report.color);
        chart
            .draw_series(
                report
                    .points
                    .iter()
                    .map(|p| Circle::new((p.x, p.y), POINT_RADIUS, color.filled())),
            )?
            .label(format!("Cluster {}", report.ordinal))
            .legend(move |(x, y)| Circle::new((x, y), POINT_RADIUS, color.filled()));
    }
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    debug!("Plotted {} clusters to {}", reports.len(), path.display());
    Ok(())
}
