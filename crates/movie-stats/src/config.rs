// File: crates/movie-stats/src/config.rs
// Summary: Pipeline knobs and chart layout constants.

use chart_core::types::{Insets, HEIGHT, WIDTH};
use chart_core::{RenderOptions, Theme};

/// First year kept in the gross-by-year series.
pub const MIN_YEAR: i32 = 2010;
/// Number of directors kept in the ranking.
pub const TOP_N: usize = 6;
/// Band padding of the director axis, as a fraction of the band step.
pub const BAND_PADDING: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineConfig {
    pub min_year: i32,
    pub top_n: usize,
    pub band_padding: f64,
    /// Canvas size in pixels, margins included.
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl PipelineConfig {
    /// Plot area (width, height) inside the margins.
    pub fn plot_size(&self) -> (f64, f64) {
        self.insets.plot_size(self.width, self.height)
    }

    /// Render options sharing this config's canvas and margins, so marks
    /// placed by the view scales line up with the drawn axes.
    pub fn render_options(&self, theme: Theme) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            insets: self.insets,
            theme,
            ..RenderOptions::default()
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            top_n: TOP_N,
            band_padding: BAND_PADDING,
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
        }
    }
}
