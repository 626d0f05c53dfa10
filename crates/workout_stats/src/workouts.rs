//! Workout log reader.
//!
//! A workout log is a comma-separated file whose first line names the columns. The reader
//! insists on `date`, `type` and `minutes` being present (in any order, extras allowed) and
//! hands every following line back as a [`WorkoutRecord`] of raw strings. Numeric
//! interpretation happens later, in [`crate::aggregate`].

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use crate::{Dataset, StatsError, StatsResult, aggregate};

/// Columns every workout log header must declare.
pub const REQUIRED_COLUMNS: [&str; 3] = ["date", "type", "minutes"];

/// One data line of a workout log, keyed by the header columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkoutRecord {
    header: Arc<[String]>,
    values: Vec<String>,
}

impl WorkoutRecord {
    /// Build a record from `(column, value)` pairs, in column order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (header, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            header: header.into(),
            values,
        }
    }

    /// Raw value of `column`. With duplicate header names the last one wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.header
            .iter()
            .rposition(|h| h == column)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }

    /// Whether this record carries a value for `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.header.iter().any(|h| h == column)
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.header.iter().map(String::as_str)
    }
}

/// Count and minute total derived from a single parse of a workout log.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkoutTotals {
    pub workouts: usize,
    pub minutes: f64,
}

/// Read and validate the workout log at `path`.
///
/// Errors:
/// - [`StatsError::FileNotFound`] when `path` does not exist
/// - [`StatsError::CorruptedInput`] for an empty file, a header without the required
///   columns, or any tokenizer failure (unterminated quotes, bad UTF-8)
/// - [`StatsError::Io`] for other read failures
///
/// Rows shorter than the header lack the trailing columns; cells past the header are kept
/// under positional names (`_3`, `_4`, ...).
pub fn read_workout_csv(path: impl AsRef<Path>) -> StatsResult<Vec<WorkoutRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| StatsError::from_io(Dataset::Workout, path.to_path_buf(), e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(QuoteTracker::new(file));

    let header: Arc<[String]> = reader
        .headers()
        .map_err(|e| csv_failure(path, e))?
        .iter()
        .map(str::to_owned)
        .collect();
    validate_header(path, &header)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_failure(path, e))?;
        rows.push(WorkoutRecord {
            header: row_header(&header, record.len()),
            values: record.iter().map(str::to_owned).collect(),
        });
    }

    // csv accepts EOF inside a quoted field as the end of the record
    if reader.into_inner().in_open_quote() {
        return Err(corrupted(path, "unterminated quoted field"));
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "read workout log");
    Ok(rows)
}

/// Number of workouts (data lines) in the log at `path`.
pub fn count_workouts(path: impl AsRef<Path>) -> StatsResult<usize> {
    let rows = read_workout_csv(path)?;
    Ok(aggregate::count(&rows))
}

/// Sum of the numeric values of `field` across the log at `path`.
pub fn total_minutes(path: impl AsRef<Path>, field: &str) -> StatsResult<f64> {
    let rows = read_workout_csv(path)?;
    aggregate::sum_field(&rows, field)
}

/// Parse the log once and derive both the workout count and the `field` total.
pub fn summarize_workouts(path: impl AsRef<Path>, field: &str) -> StatsResult<WorkoutTotals> {
    let rows = read_workout_csv(path)?;
    Ok(WorkoutTotals {
        workouts: aggregate::count(&rows),
        minutes: aggregate::sum_field(&rows, field)?,
    })
}

/// Column names for a row of `width` cells: the header cut to length, or extended with
/// positional names for extra cells.
fn row_header(header: &Arc<[String]>, width: usize) -> Arc<[String]> {
    if width == header.len() {
        return Arc::clone(header);
    }
    header
        .iter()
        .take(width)
        .cloned()
        .chain((header.len()..width).map(|idx| format!("_{idx}")))
        .collect()
}

fn validate_header(path: &Path, header: &[String]) -> StatsResult<()> {
    if header.is_empty() {
        return Err(corrupted(path, "missing header line"));
    }
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !header.iter().any(|h| h == required))
        .collect();
    if !missing.is_empty() {
        return Err(corrupted(
            path,
            format!("header is missing required columns: {}", missing.join(", ")),
        ));
    }
    Ok(())
}

fn corrupted(path: &Path, reason: impl Into<String>) -> StatsError {
    StatsError::CorruptedInput {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn csv_failure(path: &Path, err: csv::Error) -> StatsError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => StatsError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => corrupted(path, reason),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Pass-through reader that follows RFC 4180 quoting so an unterminated quoted field can
/// be detected once the csv reader is done with the stream.
struct QuoteTracker<R> {
    inner: R,
    state: QuoteState,
}

impl<R> QuoteTracker<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            state: QuoteState::FieldStart,
        }
    }

    fn observe(&mut self, byte: u8) {
        let boundary = matches!(byte, b',' | b'\n' | b'\r');
        self.state = match (self.state, byte) {
            (QuoteState::FieldStart, b'"') => QuoteState::Quoted,
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (_, _) if boundary => QuoteState::FieldStart,
            (_, _) => QuoteState::Unquoted,
        };
    }

    fn in_open_quote(&self) -> bool {
        self.state == QuoteState::Quoted
    }
}

impl<R: Read> Read for QuoteTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for &byte in &buf[..n] {
            self.observe(byte);
        }
        Ok(n)
    }
}
