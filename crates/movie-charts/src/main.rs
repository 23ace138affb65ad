// File: crates/movie-charts/src/main.rs
// Summary: Loads a movie CSV, aggregates it, and renders the line and bar charts to PNGs.

use anyhow::{Context, Result};
use chart_core::{theme, Chart, RenderOptions};
use clap::Parser;
use movie_stats::{load_records, DirectorRanking, GrossTrend, PipelineConfig, Summary, ViewError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "movie-charts")]
#[command(about = "Render gross-by-year and top-director charts from a movie CSV", long_about = None)]
struct Cli {
    /// Movie CSV with imdb_score, title_year, director_name and gross columns
    #[arg(value_name = "CSV", default_value = "movies.csv")]
    input: PathBuf,

    /// Directory the PNGs (and optional JSON summary) are written to
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Color theme: light or dark
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// First year included in the gross-by-year chart
    #[arg(long, default_value_t = movie_stats::config::MIN_YEAR)]
    min_year: i32,

    /// Number of directors in the ranking
    #[arg(long, default_value_t = movie_stats::config::TOP_N)]
    top: usize,

    /// Also write summary.json with both derived tables
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log intermediate tables (debug level) unless RUST_LOG says otherwise
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.input.exists() {
        anyhow::bail!("file not found: {}", cli.input.display());
    }
    info!(input = %cli.input.display(), "loading movies");
    let records = load_records(&cli.input)
        .with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    info!(records = records.len(), "loaded records");

    let config = PipelineConfig { min_year: cli.min_year, top_n: cli.top, ..PipelineConfig::default() };
    let opts = config.render_options(theme::find(&cli.theme));
    debug!(?config, theme = opts.theme.name, "render settings");

    // Each chart stands alone: an empty table skips that chart only.
    match GrossTrend::build(&records, &config) {
        Ok(view) => {
            debug!(series = ?view.series, "gross by year");
            render(&view.to_chart(), &opts, &cli.out_dir.join("gross_by_year.png"))?;
        }
        Err(e @ ViewError::EmptySeries(_)) => warn!("{e}; skipping line chart"),
    }
    match DirectorRanking::build(&records, &config) {
        Ok(view) => {
            debug!(bars = ?view.bars, "top directors");
            render(&view.to_chart(), &opts, &cli.out_dir.join("top_directors.png"))?;
        }
        Err(e @ ViewError::EmptySeries(_)) => warn!("{e}; skipping bar chart"),
    }

    if cli.json {
        write_summary(&Summary::compute(&records, &config), &cli.out_dir.join("summary.json"))?;
    }
    Ok(())
}

fn render(chart: &Chart, opts: &RenderOptions, path: &Path) -> Result<()> {
    chart
        .render_to_png(opts, path)
        .with_context(|| format!("rendering '{}'", chart.title))?;
    info!(path = %path.display(), "wrote chart");
    Ok(())
}

fn write_summary(summary: &Summary, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote summary");
    Ok(())
}
