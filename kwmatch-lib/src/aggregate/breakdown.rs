use super::{GroupKey, KeyShape, MatchTypeSet};
use crate::metrics::Measures;
use crate::records::{EnrichedRecord, MatchType};
use compact_str::CompactString;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Totals for one match type of one key.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchTypeEntry {
    pub measures: Measures,

    /// Bidding strategy of the most recent record that reported one.
    pub bidding_strategy: Option<CompactString>,
}

/// Groups records one level below their key, producing one entry per (key, match type).
///
/// Unlike [`GroupAccumulator`](super::GroupAccumulator), metrics of different match types
/// are never summed together: each entry holds the plain five-metric totals of its own
/// match type.
#[derive(Debug, Clone)]
pub struct MatchTypeBreakdown {
    shape: KeyShape,
    groups: IndexMap<GroupKey, IndexMap<MatchType, MatchTypeEntry>>,
}

impl MatchTypeBreakdown {
    #[must_use]
    pub fn new(shape: KeyShape) -> Self {
        Self {
            shape,
            groups: IndexMap::new(),
        }
    }

    /// Folds a record into the entry for its key and match type.
    pub fn fold(&mut self, record: &EnrichedRecord) -> GroupKey {
        let key = self.shape.key_for(record);
        let entries = self.groups.entry(key.clone()).or_default();
        match entries.entry(record.match_type.clone()) {
            Entry::Occupied(mut entry) => {
                let entry = entry.get_mut();
                entry.measures += record.measures;
                if record.bidding_strategy.is_some() {
                    entry.bidding_strategy.clone_from(&record.bidding_strategy);
                }
            }
            Entry::Vacant(entry) => {
                let _ = entry.insert(MatchTypeEntry {
                    measures: record.measures,
                    bidding_strategy: record.bidding_strategy.clone(),
                });
            }
        }
        key
    }

    #[must_use]
    pub fn get(&self, key: &GroupKey) -> Option<&IndexMap<MatchType, MatchTypeEntry>> {
        self.groups.get(key)
    }

    /// Keys in first-seen order, each with its entries in first-seen match type order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &IndexMap<MatchType, MatchTypeEntry>)> {
        self.groups.iter()
    }

    /// The distinct match types recorded for a key.
    #[must_use]
    pub fn match_types(entries: &IndexMap<MatchType, MatchTypeEntry>) -> MatchTypeSet {
        entries.keys().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
