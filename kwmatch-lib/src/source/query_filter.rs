use super::ReportKind;
use crate::records::{RawRecord, read_count};
use compact_str::CompactString;
use std::collections::HashSet;

/// Re-applies the report query's row conditions to file-backed input.
///
/// Keyword-view rows need a keyword and at least one impression; search-term-view rows
/// need a keyword and at least one click. Search-term rows can additionally be limited to
/// a fixed list of keywords, compared against the keyword text as reported.
#[derive(Debug, Clone)]
pub struct QueryFilter {
    kind: ReportKind,
    conditions: bool,
    keywords: HashSet<CompactString>,
}

impl QueryFilter {
    #[must_use]
    pub fn new(kind: ReportKind, conditions: bool) -> Self {
        Self {
            kind,
            conditions,
            keywords: HashSet::new(),
        }
    }

    /// Limits search-term rows to the given keywords. An empty list keeps every keyword.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn accepts(&self, record: &RawRecord) -> bool {
        let keyword = record.keyword_text.as_deref().unwrap_or_default();

        if self.conditions {
            let volume = match self.kind {
                ReportKind::KeywordView => "impressions",
                ReportKind::SearchTermView => "clicks",
            };
            if keyword.is_empty() || read_count(&record.metrics, volume).value_or_zero() == 0 {
                return false;
            }
        }

        self.kind != ReportKind::SearchTermView || self.keywords.is_empty() || self.keywords.contains(keyword)
    }
}
