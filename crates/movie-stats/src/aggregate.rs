// File: crates/movie-stats/src/aggregate.rs
// Summary: Group-by-reduce of movie records: total gross per year, mean score per director.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::PipelineConfig;
use crate::group::{Grouped, MeanAcc};
use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct YearlyGross {
    pub year: i32,
    pub total_gross: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectorAverage {
    pub director: String,
    pub average_score: f64,
}

/// Total gross per year for years >= `min_year`, ascending by year.
/// Rows without a year or gross are skipped.
pub fn yearly_gross(records: &[Record], min_year: i32) -> Vec<YearlyGross> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    let mut kept = 0usize;
    for r in records {
        let (Some(year), Some(gross)) = (r.year, r.gross) else { continue };
        if year < min_year {
            continue;
        }
        *totals.entry(year).or_insert(0.0) += gross;
        kept += 1;
    }
    debug!(kept, years = totals.len(), min_year, "grouped gross by year");

    totals
        .into_iter()
        .map(|(year, total_gross)| YearlyGross { year, total_gross })
        .collect()
}

/// Mean score of every director with a non-empty name, best first.
/// Equal means keep the order in which the directors first appeared.
pub fn director_averages(records: &[Record]) -> Vec<DirectorAverage> {
    let mut groups: Grouped<&str, MeanAcc> = Grouped::new();
    for r in records {
        let Some(score) = r.score else { continue };
        if r.director.is_empty() {
            continue;
        }
        groups.entry(r.director.as_str(), MeanAcc::default).push(score);
    }
    debug!(directors = groups.len(), "grouped scores by director");

    let mut out: Vec<DirectorAverage> = groups
        .into_groups()
        .into_iter()
        .filter_map(|(director, acc)| {
            acc.mean().map(|average_score| DirectorAverage { director: director.to_string(), average_score })
        })
        .collect();
    // Stable sort: ties keep first-appearance order.
    out.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
    out
}

/// The `n` best-scoring directors (fewer if fewer qualify).
pub fn top_directors(records: &[Record], n: usize) -> Vec<DirectorAverage> {
    let mut all = director_averages(records);
    all.truncate(n);
    all
}

/// Both derived tables, as handed to the renderer or dumped as JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub gross_by_year: Vec<YearlyGross>,
    pub top_directors: Vec<DirectorAverage>,
}

impl Summary {
    pub fn compute(records: &[Record], config: &PipelineConfig) -> Self {
        Self {
            gross_by_year: yearly_gross(records, config.min_year),
            top_directors: top_directors(records, config.top_n),
        }
    }
}
