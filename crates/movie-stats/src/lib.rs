// File: crates/movie-stats/src/lib.rs
// Summary: Library entry point; load movie records, aggregate them, and build chart views.

pub mod record;
pub mod load;
pub mod group;
pub mod aggregate;
pub mod config;
pub mod views;

pub use record::{RawRecord, Record};
pub use load::{load_records, load_records_from_reader, LoadError};
pub use aggregate::{director_averages, top_directors, yearly_gross, DirectorAverage, Summary, YearlyGross};
pub use config::PipelineConfig;
pub use views::{DirectorRanking, GrossTrend, ViewError};
