use std::io::Write;

use anyhow::Result;
use clap::Parser;
use cli::input::csv::CsvReader;
use cli::input::CountryTable;
use cli::{plot, prompt, report};
use clustering::kmeans::ClusteringEngine;
use config::ClusteringConfig;
use log::info;

#[derive(Parser, Debug)]
#[command(version, about = "Groups countries by birthrate and life expectancy", long_about = None)]
struct Args {
    /// YAML config file. Flags below take precedence over its values.
    #[arg(long)]
    config: Option<String>,

    /// CSV file with name, birthrate and life expectancy columns
    #[arg(long)]
    input_path: Option<String>,

    #[arg(short = 'k', long)]
    num_clusters: Option<usize>,

    /// Also write the cluster report to this path as JSON
    #[arg(long)]
    report_path: Option<String>,

    /// Also draw the clusters as an SVG scatter plot at this path
    #[arg(long)]
    plot_path: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let arg = Args::parse();
    let mut config = match &arg.config {
        Some(path) => ClusteringConfig::from_yaml_file(path)?,
        None => ClusteringConfig::default(),
    };
    if arg.input_path.is_some() {
        config.input_path = arg.input_path;
    }
    if arg.num_clusters.is_some() {
        config.num_clusters = arg.num_clusters;
    }
    if arg.report_path.is_some() {
        config.report_path = arg.report_path;
    }
    if arg.plot_path.is_some() {
        config.plot_path = arg.plot_path;
    }

    let input_path = match config.input_path {
        Some(path) => path,
        None => prompt::input_path()?,
    };
    let mut input = CsvReader::open(&input_path)?;
    let (table, malformed_rows) = CountryTable::load(&mut input);
    info!(
        "Loaded {} countries from {}, skipped {} malformed rows",
        table.len(),
        input_path,
        malformed_rows.len()
    );

    let num_clusters = match config.num_clusters {
        Some(num_clusters) => num_clusters,
        None => prompt::num_clusters()?,
    };

    let mut rng = rand::thread_rng();
    let colors = report::assign_colors(&config.palette, num_clusters, &mut rng)?;
    let engine = ClusteringEngine::new(num_clusters);
    let result = engine.fit_with_rng(&table.points(), &mut rng)?;

    let reports = report::build_reports(&result, &table, &colors)?;
    let mut stdout = std::io::stdout().lock();
    report::render_text(&reports, &mut stdout)?;
    stdout.flush()?;

    if let Some(report_path) = config.report_path {
        report::write_json(&reports, &report_path)?;
        info!("Wrote cluster report to {}", report_path);
    }
    if let Some(plot_path) = config.plot_path {
        plot::render_svg(&reports, &plot_path)?;
        info!("Wrote cluster plot to {}", plot_path);
    }
    Ok(())
}
