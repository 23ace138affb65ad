// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, tick formatting and explicit tick values.

/// How numeric tick values are turned into label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Shortest representation without trailing zeros.
    Auto,
    /// Rounded to a whole number, no grouping ("2015").
    Integer,
    /// Divided by one billion with a "B" suffix ("1.5B").
    Billions,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match self {
            TickFormat::Auto => trim_float(v),
            TickFormat::Integer => format!("{}", v.round() as i64),
            TickFormat::Billions => format!("{}B", trim_float(v / 1e9)),
        }
    }
}

/// Print with up to 6 decimals, then strip trailing zeros and the dot.
fn trim_float(v: f64) -> String {
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub format: TickFormat,
    /// Explicit tick values; when unset the scale chooses its own.
    pub tick_values: Option<Vec<f64>>,
    /// Requested tick count for automatic ticks.
    pub tick_count: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), format: TickFormat::Auto, tick_values: None, tick_count: 10 }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_tick_values(mut self, values: Vec<f64>) -> Self {
        self.tick_values = Some(values);
        self
    }
}
