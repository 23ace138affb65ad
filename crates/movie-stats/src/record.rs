// File: crates/movie-stats/src/record.rs
// Summary: Raw CSV row and the cleaned, numerically coerced movie record.

/// The four cells of one CSV row the pipeline reads, as text. A column
/// missing from the header or an empty cell leaves its field `None`.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub director_name: Option<String>,
    pub imdb_score: Option<String>,
    pub title_year: Option<String>,
    pub gross: Option<String>,
}

/// A cleaned movie row. `None` marks a numeric field that was absent or
/// not a finite number; such fields are excluded from every aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub director: String,
    pub score: Option<f64>,
    pub year: Option<i32>,
    pub gross: Option<f64>,
}

impl Record {
    pub fn from_raw(raw: RawRecord) -> Self {
        Self {
            score: raw.imdb_score.as_deref().and_then(coerce_number),
            year: raw.title_year.as_deref().and_then(coerce_year),
            gross: raw.gross.as_deref().and_then(coerce_number),
            director: raw.director_name.unwrap_or_default(),
        }
    }
}

/// Parse trimmed text as a finite `f64`. Never fails loudly.
pub fn coerce_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a year; integral floats ("2010.0") are accepted, fractions are not.
pub fn coerce_year(text: &str) -> Option<i32> {
    let v = coerce_number(text)?;
    if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
        return None;
    }
    Some(v as i32)
}
