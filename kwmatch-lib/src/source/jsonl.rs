use super::{LOG_TARGET, ReportKind, parse_raw_value};
use crate::Result;
use crate::records::{RawMetrics, RawRecord, RawValue};
use compact_str::CompactString;
use ohno::{IntoAppError, app_err};
use serde_json::Value;
use std::io::{BufRead, Lines};

/// Reads one API search row per line.
///
/// Blank lines are skipped. A line that is not a JSON object fails with its 1-based line
/// number; a missing field inside a well-formed object is simply absent.
#[derive(Debug)]
pub struct JsonlSource<R> {
    lines: Lines<R>,
    line: usize,
    kind: ReportKind,
    origin: String,
}

impl<R: BufRead> JsonlSource<R> {
    pub fn new(reader: R, kind: ReportKind, origin: &str) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            kind,
            origin: origin.to_string(),
        }
    }

    fn parse_line(&self, text: &str) -> Result<RawRecord> {
        let value: Value = serde_json::from_str(text).into_app_err_with(|| format!("parsing line {} of '{}'", self.line, self.origin))?;
        if !value.is_object() {
            return Err(app_err!("line {} of '{}' is not a JSON object", self.line, self.origin));
        }

        Ok(record_from_json(&value, self.kind))
    }
}

impl<R: BufRead> Iterator for JsonlSource<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => {
                    return Some(Err(e).into_app_err_with(|| format!("reading line {} of '{}'", self.line + 1, self.origin)));
                }
            };
            self.line += 1;

            if text.trim().is_empty() {
                log::trace!(target: LOG_TARGET, "Skipping blank line {} of '{}'", self.line, self.origin);
                continue;
            }

            return Some(self.parse_line(&text));
        }
    }
}

/// Maps an API search row onto a raw record.
fn record_from_json(value: &Value, kind: ReportKind) -> RawRecord {
    let keyword = match kind {
        ReportKind::KeywordView => "/adGroupCriterion/keyword",
        ReportKind::SearchTermView => "/segments/keyword/info",
    };

    RawRecord {
        account: text_at(value, "/customer/id"),
        campaign_name: text_at(value, "/campaign/name"),
        bidding_strategy: text_at(value, "/campaign/biddingStrategyType"),
        match_type: text_at(value, &format!("{keyword}/matchType")),
        keyword_text: text_at(value, &format!("{keyword}/text")),
        search_term: text_at(value, "/searchTermView/searchTerm"),
        metrics: value
            .pointer("/metrics")
            .and_then(Value::as_object)
            .map(|metrics| {
                metrics
                    .iter()
                    .filter_map(|(name, value)| metric_value(value).map(|value| (name.as_str(), value)))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// A non-blank string or number at `pointer`, as text.
fn text_at(value: &Value, pointer: &str) -> Option<CompactString> {
    match value.pointer(pointer)? {
        Value::String(text) if !text.trim().is_empty() => Some(CompactString::from(text.as_str())),
        Value::Number(number) => Some(CompactString::from(number.to_string())),
        _ => None,
    }
}

fn metric_value(value: &Value) -> Option<RawValue> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .map(RawValue::Integer)
            .or_else(|| number.as_f64().map(RawValue::Float)),
        Value::String(text) if !text.trim().is_empty() => Some(parse_raw_value(text)),
        _ => None,
    }
}
