// File: crates/movie-stats/src/load.rs
// Summary: Load movie CSVs into cleaned records; a failed load is fatal, missing columns are not.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::record::{RawRecord, Record};

/// Header names the pipeline reads.
pub const COLUMNS: [&str; 4] = ["imdb_score", "title_year", "director_name", "gross"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("reading CSV header: {0}")]
    Header(#[source] csv::Error),
    #[error("reading CSV record {record}: {source}")]
    Read {
        record: usize,
        #[source]
        source: csv::Error,
    },
}

fn builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    // Short rows leave their trailing fields absent instead of failing the load.
    b.has_headers(true).flexible(true);
    b
}

/// Load every row of the CSV at `path`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let rdr = builder()
        .from_path(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    let records = read_all(rdr)?;
    debug!(path = %path.display(), records = records.len(), "loaded movie records");
    Ok(records)
}

/// Same as [`load_records`] over any reader (header row first).
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    read_all(builder().from_reader(reader))
}

/// Positions of the columns the pipeline reads, resolved once from the header.
struct ColumnIndex {
    director: Option<usize>,
    score: Option<usize>,
    year: Option<usize>,
    gross: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::ByteRecord) -> Self {
        let find = |name: &str| {
            let ix = headers.iter().position(|h| h == name.as_bytes());
            if ix.is_none() {
                warn!(column = name, "column missing from header; field treated as absent");
            }
            ix
        };
        Self {
            score: find(COLUMNS[0]),
            year: find(COLUMNS[1]),
            director: find(COLUMNS[2]),
            gross: find(COLUMNS[3]),
        }
    }

    fn raw(&self, row: &csv::ByteRecord) -> RawRecord {
        RawRecord {
            director_name: cell(row, self.director),
            imdb_score: cell(row, self.score),
            title_year: cell(row, self.year),
            gross: cell(row, self.gross),
        }
    }
}

/// Text of one cell, decoded lossily; empty or missing cells are `None`.
fn cell(row: &csv::ByteRecord, ix: Option<usize>) -> Option<String> {
    let bytes = row.get(ix?)?;
    if bytes.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(bytes).into_owned())
}

/// Only CSV structure or I/O errors fail the load; bad bytes inside a
/// cell are replaced, and cells outside [`COLUMNS`] are never decoded.
fn read_all<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Record>, LoadError> {
    let columns = ColumnIndex::from_headers(rdr.byte_headers().map_err(LoadError::Header)?);

    let mut out = Vec::new();
    for (i, row) in rdr.byte_records().enumerate() {
        let row = row.map_err(|source| LoadError::Read { record: i + 1, source })?;
        out.push(Record::from_raw(columns.raw(&row)));
    }
    Ok(out)
}
