// File: crates/chart-core/src/scale.rs
// Summary: Linear (numeric) and band (categorical) scale mappings from data space to pixels.

use crate::grid;

/// Data-space value on a numeric axis (year, gross, score, ...).
pub type Value = f64;

/// Continuous mapping of `domain` onto `range`.
/// An inverted range (`r0 > r1`) is how chart-space Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to a pixel coordinate. Values outside the domain
    /// extrapolate linearly. A zero-width domain maps to the range midpoint.
    #[inline]
    pub fn map(&self, x: Value) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span != 0.0 { (x - d0) / span } else { 0.5 };
        r0 + t * (r1 - r0)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }
}

/// Discrete mapping of an ordered category set onto uniform bands.
///
/// `padding_inner` is the gap between bands and `padding_outer` the gap
/// before the first and after the last band, both as fractions of the step.
/// Bands are centered in the range.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(categories: Vec<String>, range: (f64, f64)) -> Self {
        Self { categories, range, padding_inner: 0.0, padding_outer: 0.0 }
    }

    /// Set inner and outer padding to the same fraction (clamped to [0, 1]).
    pub fn padding(mut self, p: f64) -> Self {
        let p = p.clamp(0.0, 1.0);
        self.padding_inner = p;
        self.padding_outer = p;
        self
    }

    pub fn categories(&self) -> &[String] { &self.categories }
    pub fn range(&self) -> (f64, f64) { self.range }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.categories.len() as f64;
        let (r0, r1) = self.range;
        (r1 - r0) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    /// Width of each band (step minus inner padding).
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    fn start(&self) -> f64 {
        let n = self.categories.len() as f64;
        let (r0, r1) = self.range;
        r0 + (r1 - r0 - self.step() * (n - self.padding_inner)) * 0.5
    }

    /// Left edge of the band for `category`, or `None` if it is not in the domain.
    pub fn position(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .position(|c| c == category)
            .map(|i| self.position_at(i))
    }

    /// Left edge of the `index`-th band.
    pub fn position_at(&self, index: usize) -> f64 {
        self.start() + self.step() * index as f64
    }

    /// Center of the band for `category`, used for tick placement.
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category).map(|x| x + self.bandwidth() * 0.5)
    }
}
