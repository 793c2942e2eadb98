use super::{LOG_TARGET, ReportKind, parse_raw_value};
use crate::Result;
use crate::records::{RawMetrics, RawRecord};
use compact_str::CompactString;
use core::fmt::{Debug, Formatter};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use ohno::IntoAppError;
use std::io::Read;

const METRICS_PREFIX: &str = "metrics.";

/// Where the value of a CSV column goes in a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Column {
    Account,
    CampaignName,
    BiddingStrategy,
    KeywordText,
    MatchType,
    SearchTerm,
    Metric(CompactString),
    Ignored,
}

impl Column {
    fn from_header(name: &str, kind: ReportKind) -> Self {
        let (keyword_text, match_type) = match kind {
            ReportKind::KeywordView => ("ad_group_criterion.keyword.text", "ad_group_criterion.keyword.match_type"),
            ReportKind::SearchTermView => ("segments.keyword.info.text", "segments.keyword.info.match_type"),
        };

        match name.trim() {
            "customer.id" => Self::Account,
            "campaign.name" => Self::CampaignName,
            "campaign.bidding_strategy_type" => Self::BiddingStrategy,
            "search_term_view.search_term" => Self::SearchTerm,
            name if name == keyword_text => Self::KeywordText,
            name if name == match_type => Self::MatchType,
            name => name
                .strip_prefix(METRICS_PREFIX)
                .map_or(Self::Ignored, |metric| Self::Metric(camel_case(metric))),
        }
    }
}

/// Reads report rows from CSV with a header row of query field names.
///
/// Columns are matched by name, so their order does not matter. Unknown columns are
/// ignored and blank cells read as absent.
pub struct CsvSource<R> {
    columns: Vec<Column>,
    records: StringRecordsIntoIter<R>,
    origin: String,
}

impl<R> Debug for CsvSource<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CsvSource")
            .field("columns", &self.columns)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl<R: Read> CsvSource<R> {
    pub fn new(reader: R, kind: ReportKind, origin: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let columns: Vec<Column> = reader
            .headers()
            .into_app_err_with(|| format!("reading the header row of '{origin}'"))?
            .iter()
            .map(|name| Column::from_header(name, kind))
            .collect();

        let ignored = columns.iter().filter(|column| **column == Column::Ignored).count();
        if ignored > 0 {
            log::debug!(target: LOG_TARGET, "Ignoring {ignored} unrecognized column(s) in '{origin}'");
        }

        Ok(Self {
            columns,
            records: reader.into_records(),
            origin: origin.to_string(),
        })
    }

    fn to_record(&self, row: &StringRecord) -> RawRecord {
        let mut record = RawRecord::default();
        let mut metrics = RawMetrics::new();

        for (column, value) in self.columns.iter().zip(row.iter()) {
            if value.trim().is_empty() {
                continue;
            }

            let text = CompactString::from(value);
            match column {
                Column::Account => record.account = Some(text),
                Column::CampaignName => record.campaign_name = Some(text),
                Column::BiddingStrategy => record.bidding_strategy = Some(text),
                Column::KeywordText => record.keyword_text = Some(text),
                Column::MatchType => record.match_type = Some(text),
                Column::SearchTerm => record.search_term = Some(text),
                Column::Metric(name) => metrics.insert(name.clone(), parse_raw_value(value)),
                Column::Ignored => {}
            }
        }

        record.metrics = metrics;
        record
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.records.next()? {
            Ok(row) => Some(Ok(self.to_record(&row))),
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                Some(Err(e).into_app_err_with(|| format!("parsing line {line} of '{}'", self.origin)))
            }
        }
    }
}

/// `conversions_value` → `conversionsValue`
fn camel_case(snake: &str) -> CompactString {
    let mut result = CompactString::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            result.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            result.push(c);
        }
    }
    result
}
