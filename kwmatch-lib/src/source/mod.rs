//! File-backed report sources
//!
//! A report source yields raw rows one at a time, in file order. Rows come either from
//! JSON Lines files holding one API search row per line, or from CSV files whose header
//! row names the report's query fields.
//!
//! Both formats surface absent and empty fields as `None` and expose metrics through a
//! flat name → value mapping keyed by the API's camelCase metric names, so the same data
//! read from either format produces identical [`RawRecord`]s.
//!
//! Which keyword fields are read depends on the [`ReportKind`]: keyword-view rows carry
//! the keyword under the ad group criterion, search-term-view rows under the keyword
//! segment.

mod csv;
mod jsonl;
mod query_filter;

pub use csv::CsvSource;
pub use jsonl::JsonlSource;
pub use query_filter::QueryFilter;

use crate::Result;
use crate::records::{RawRecord, RawValue};
use camino::Utf8Path;
use clap::ValueEnum;
use ohno::IntoAppError;
use std::fs::File;
use std::io::{self, BufReader, Read};

const LOG_TARGET: &str = "    source";

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// An iterator over the rows of one report source.
pub type RecordIter = Box<dyn Iterator<Item = Result<RawRecord>>>;

/// Input file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SourceFormat {
    /// CSV for `.csv` files, JSON Lines otherwise
    #[default]
    Auto,
    /// One JSON object per line
    Jsonl,
    /// Comma-separated values with a header row
    Csv,
}

impl SourceFormat {
    /// Resolves `Auto` from the file extension.
    #[must_use]
    pub fn resolve(self, path: &Utf8Path) -> Self {
        match self {
            Self::Auto => {
                if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
                    Self::Csv
                } else {
                    Self::Jsonl
                }
            }
            format => format,
        }
    }
}

/// The report a source was queried from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Per-keyword rows, feeding the match type comparison views.
    KeywordView,
    /// Per-search-term rows, feeding the search term comparison views.
    SearchTermView,
}

/// Opens a report file, or standard input for `-`.
pub fn open(path: &Utf8Path, format: SourceFormat, kind: ReportKind) -> Result<RecordIter> {
    if path.as_str() == STDIN_PATH {
        log::debug!(target: LOG_TARGET, "Reading report rows from standard input");
        return from_reader(io::stdin().lock(), format.resolve(path), kind, "<stdin>");
    }

    let file = File::open(path).into_app_err_with(|| format!("opening report file '{path}'"))?;
    log::debug!(target: LOG_TARGET, "Reading report rows from '{path}'");
    from_reader(file, format.resolve(path), kind, path.as_str())
}

/// Reads report rows from any reader.
///
/// `format` must already be resolved; `Auto` reads as JSON Lines. `origin` names the
/// input in error messages.
pub fn from_reader<R: Read + 'static>(reader: R, format: SourceFormat, kind: ReportKind, origin: &str) -> Result<RecordIter> {
    match format {
        SourceFormat::Csv => Ok(Box::new(CsvSource::new(reader, kind, origin)?)),
        SourceFormat::Auto | SourceFormat::Jsonl => Ok(Box::new(JsonlSource::new(BufReader::new(reader), kind, origin))),
    }
}

/// Interprets a textual field value as the most specific raw value it spells.
fn parse_raw_value(text: &str) -> RawValue {
    let text = text.trim();
    if let Ok(value) = text.parse::<i64>() {
        RawValue::Integer(value)
    } else if let Ok(value) = text.parse::<f64>() {
        RawValue::Float(value)
    } else {
        RawValue::Text(text.into())
    }
}
