use compact_str::CompactString;
use std::collections::HashMap;

/// A raw metric value as delivered by a report source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(CompactString),
}

/// The flat metrics sub-mapping of a raw row, keyed by metric name (`clicks`, `averageCost`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetrics {
    values: HashMap<CompactString, RawValue>,
}

impl RawMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    /// Sets a metric, replacing any previous value with the same name.
    pub fn insert(&mut self, name: impl Into<CompactString>, value: RawValue) {
        let _ = self.values.insert(name.into(), value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<CompactString>> FromIterator<(K, RawValue)> for RawMetrics {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

/// One row as read from a report source.
///
/// Every field may be absent. Absent values are never an error: they flow through the
/// pipeline as `None` or `NotAvailable`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    /// Customer (account) identifier, when the row carries one.
    pub account: Option<CompactString>,
    pub campaign_name: Option<CompactString>,
    pub bidding_strategy: Option<CompactString>,
    pub match_type: Option<CompactString>,
    pub keyword_text: Option<CompactString>,
    pub search_term: Option<CompactString>,
    pub metrics: RawMetrics,
}
