use crate::metrics::SlotMetrics;
use crate::records::{EnrichedRecord, MatchType};

/// Distinct match types in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTypeSet {
    items: Vec<MatchType>,
}

impl MatchTypeSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a match type unless already present. Returns `true` if it was added.
    pub fn insert(&mut self, match_type: &MatchType) -> bool {
        if self.contains(match_type) {
            false
        } else {
            self.items.push(match_type.clone());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, match_type: &MatchType) -> bool {
        self.items.contains(match_type)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchType> {
        self.items.iter()
    }
}

impl<'a> FromIterator<&'a MatchType> for MatchTypeSet {
    fn from_iter<I: IntoIterator<Item = &'a MatchType>>(iter: I) -> Self {
        let mut set = Self::new();
        for match_type in iter {
            let _ = set.insert(match_type);
        }
        set
    }
}

/// Accumulated state for one grouping key.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Slot-by-slot sum of every record folded into the group.
    pub metrics: SlotMetrics,

    /// Match types contributed by those records.
    pub match_types: MatchTypeSet,
}

impl Group {
    /// Starts a group from its first record.
    #[must_use]
    pub fn from_record(record: &EnrichedRecord) -> Self {
        let mut match_types = MatchTypeSet::new();
        let _ = match_types.insert(&record.match_type);
        Self {
            metrics: record.metrics,
            match_types,
        }
    }

    /// Adds a later record with the same key.
    pub fn absorb(&mut self, record: &EnrichedRecord) {
        self.metrics += record.metrics;
        let _ = self.match_types.insert(&record.match_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_first_seen_order() {
        let mut set = MatchTypeSet::new();
        assert!(set.insert(&MatchType::Exact));
        assert!(set.insert(&MatchType::Broad));
        assert!(!set.insert(&MatchType::Exact));
        assert!(set.insert(&MatchType::NotAvailable));
        let items: Vec<_> = set.iter().cloned().collect();
        assert_eq!(items, [MatchType::Exact, MatchType::Broad, MatchType::NotAvailable]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_set_from_iter_dedups() {
        let types = [MatchType::Phrase, MatchType::Phrase, MatchType::Broad];
        let set: MatchTypeSet = types.iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&MatchType::Broad));
        assert!(!set.contains(&MatchType::Exact));
    }

    #[test]
    fn test_empty_set() {
        let set = MatchTypeSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
