// File: crates/movie-stats/src/views.rs
// Summary: Chart views: a derived table plus the scale mappings that place it on the canvas.

use chart_core::{Axis, BandScale, Chart, LinearScale, Series, TickFormat, XScale};
use thiserror::Error;
use tracing::debug;

use crate::aggregate::{top_directors, yearly_gross, DirectorAverage, YearlyGross};
use crate::config::PipelineConfig;
use crate::record::Record;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// No rows survived filtering, so the scales have no domain.
    #[error("no rows left for the {0} chart after filtering")]
    EmptySeries(&'static str),
}

/// Line chart view: total gross per year.
#[derive(Clone, Debug)]
pub struct GrossTrend {
    pub series: Vec<YearlyGross>,
    /// Year -> x, domain `[min_year, last year]`.
    pub x: LinearScale,
    /// Gross -> y, domain `[0, max total]`, inverted range.
    pub y: LinearScale,
}

impl GrossTrend {
    pub fn build(records: &[Record], config: &PipelineConfig) -> Result<Self, ViewError> {
        Self::from_series(yearly_gross(records, config.min_year), config)
    }

    pub fn from_series(series: Vec<YearlyGross>, config: &PipelineConfig) -> Result<Self, ViewError> {
        let last_year = series.last().ok_or(ViewError::EmptySeries("gross by year"))?.year;
        let max_gross = series.iter().map(|p| p.total_gross).fold(f64::NEG_INFINITY, f64::max);
        let (pw, ph) = config.plot_size();

        let x = LinearScale::new((config.min_year as f64, last_year as f64), (0.0, pw));
        let y = LinearScale::new((0.0, max_gross), (ph, 0.0));
        debug!(years = series.len(), last_year, max_gross, "built gross trend scales");
        Ok(Self { series, x, y })
    }

    /// One tick per year from the first to the last year of the series.
    pub fn year_ticks(&self) -> Vec<i32> {
        match (self.series.first(), self.series.last()) {
            (Some(first), Some(last)) => (first.year..=last.year).collect(),
            _ => Vec::new(),
        }
    }

    pub fn to_chart(&self) -> Chart {
        let mut chart = Chart::new("Trends in Total Gross Movie Revenue", XScale::Linear(self.x), self.y);
        chart.x_axis = Axis::new("Year")
            .with_format(TickFormat::Integer)
            .with_tick_values(self.year_ticks().into_iter().map(f64::from).collect());
        chart.y_axis = Axis::new("Gross Revenue (Billion $)").with_format(TickFormat::Billions);
        chart.add_series(Series::line(
            self.series.iter().map(|p| (p.year as f64, p.total_gross)).collect(),
        ));
        chart
    }
}

/// Bar chart view: best average scores by director.
#[derive(Clone, Debug)]
pub struct DirectorRanking {
    pub bars: Vec<DirectorAverage>,
    /// Director -> band, in ranking order.
    pub x: BandScale,
    /// Score -> y, domain `[0, best score]`, inverted range.
    pub y: LinearScale,
}

impl DirectorRanking {
    pub fn build(records: &[Record], config: &PipelineConfig) -> Result<Self, ViewError> {
        Self::from_bars(top_directors(records, config.top_n), config)
    }

    pub fn from_bars(bars: Vec<DirectorAverage>, config: &PipelineConfig) -> Result<Self, ViewError> {
        if bars.is_empty() {
            return Err(ViewError::EmptySeries("top directors"));
        }
        let max_score = bars.iter().map(|b| b.average_score).fold(f64::NEG_INFINITY, f64::max);
        let (pw, ph) = config.plot_size();

        let names = bars.iter().map(|b| b.director.clone()).collect();
        let x = BandScale::new(names, (0.0, pw)).padding(config.band_padding);
        let y = LinearScale::new((0.0, max_score), (ph, 0.0));
        debug!(directors = bars.len(), max_score, "built director ranking scales");
        Ok(Self { bars, x, y })
    }

    pub fn to_chart(&self) -> Chart {
        let title = format!("Top {} Average IMDb Scores by Director", self.bars.len());
        let mut chart = Chart::new(title, XScale::Band(self.x.clone()), self.y);
        chart.x_axis = Axis::new("Director");
        chart.y_axis = Axis::new("Average Score");
        chart.add_series(Series::bars(
            self.bars.iter().map(|b| (b.director.clone(), b.average_score)).collect(),
        ));
        chart
    }
}
