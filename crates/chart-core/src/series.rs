// File: crates/chart-core/src/series.rs
// Summary: Series model for line (x, y) and categorical bar data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bars,   // one bar per category, from the zero baseline
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,        // used by Line
    pub data_bands: Vec<(String, f64)>,  // used by Bars
}

impl Series {
    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self { series_type: SeriesType::Line, data_xy: data, data_bands: Vec::new() }
    }

    pub fn bars(data: Vec<(String, f64)>) -> Self {
        Self { series_type: SeriesType::Bars, data_xy: Vec::new(), data_bands: data }
    }
}
