use super::{Group, GroupKey, KeyShape};
use crate::records::EnrichedRecord;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Sums enriched records into one [`Group`] per key.
#[derive(Debug, Clone)]
pub struct GroupAccumulator {
    shape: KeyShape,
    groups: IndexMap<GroupKey, Group>,
}

impl GroupAccumulator {
    #[must_use]
    pub fn new(shape: KeyShape) -> Self {
        Self {
            shape,
            groups: IndexMap::new(),
        }
    }

    #[must_use]
    pub const fn shape(&self) -> KeyShape {
        self.shape
    }

    /// Folds a record into the group at its key, creating the group on first sight.
    ///
    /// A new group takes the record's metrics and match type verbatim. An existing group
    /// adds the record's metrics slot by slot and records its match type if unseen.
    pub fn fold(&mut self, record: &EnrichedRecord) -> GroupKey {
        let key = self.shape.key_for(record);
        match self.groups.entry(key.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().absorb(record),
            Entry::Vacant(entry) => {
                let _ = entry.insert(Group::from_record(record));
            }
        }
        key
    }

    #[must_use]
    pub fn get(&self, key: &GroupKey) -> Option<&Group> {
        self.groups.get(key)
    }

    /// Groups in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &Group)> {
        self.groups.iter()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Measure;
    use crate::records::{MatchType, RawRecord, RawValue};

    fn record(campaign: &str, match_type: &str, keyword: &str, clicks: i64, average_cost: i64) -> EnrichedRecord {
        EnrichedRecord::from_raw(RawRecord {
            account: Some("acct".into()),
            campaign_name: Some(campaign.into()),
            match_type: Some(match_type.into()),
            keyword_text: Some(keyword.into()),
            metrics: [("clicks", RawValue::Integer(clicks)), ("averageCost", RawValue::Integer(average_cost))]
                .into_iter()
                .collect(),
            ..RawRecord::default()
        })
    }

    #[test]
    fn test_first_fold_creates_group() {
        let mut acc = GroupAccumulator::new(KeyShape::KEYWORD);
        assert!(acc.is_empty());
        let key = acc.fold(&record("C1", "EXACT", "shoe", 4, 1_500_000));
        let group = acc.get(&key).unwrap();
        assert_eq!(group.metrics.exact.clicks, Measure::Value(4));
        assert_eq!(group.match_types.iter().collect::<Vec<_>>(), [&MatchType::Exact]);
    }

    #[test]
    fn test_same_key_sums_and_tracks_match_types() {
        let mut acc = GroupAccumulator::new(KeyShape::KEYWORD);
        let k1 = acc.fold(&record("C1", "BROAD", "+shoe", 10, 2_000_000));
        let k2 = acc.fold(&record("C1", "EXACT", "shoe", 4, 1_500_000));
        let k3 = acc.fold(&record("C1", "EXACT", "shoe", 1, 1_000_000));
        assert_eq!(k1, k2);
        assert_eq!(k2, k3);
        assert_eq!(acc.len(), 1);

        let group = acc.get(&k1).unwrap();
        assert_eq!(group.metrics.broad_legacy.clicks, Measure::Value(10));
        assert_eq!(group.metrics.broad_legacy.cost, Measure::Value(20.0));
        assert_eq!(group.metrics.exact.clicks, Measure::Value(5));
        assert_eq!(group.metrics.exact.cost, Measure::Value(7.0));
        assert_eq!(group.metrics.broad.clicks, Measure::NotAvailable);
        assert_eq!(
            group.match_types.iter().collect::<Vec<_>>(),
            [&MatchType::BroadLegacy, &MatchType::Exact]
        );
    }

    #[test]
    fn test_fold_order_does_not_change_sums() {
        let r1 = record("C1", "BROAD", "shoe", 10, 2_000_000);
        let r2 = record("C1", "PHRASE", "shoe", 3, 500_000);

        let mut forward = GroupAccumulator::new(KeyShape::KEYWORD);
        let key = forward.fold(&r1);
        let _ = forward.fold(&r2);

        let mut backward = GroupAccumulator::new(KeyShape::KEYWORD);
        let _ = backward.fold(&r2);
        let _ = backward.fold(&r1);

        assert_eq!(forward.get(&key).unwrap().metrics, backward.get(&key).unwrap().metrics);
    }

    #[test]
    fn test_iteration_is_first_seen_order() {
        let mut acc = GroupAccumulator::new(KeyShape::KEYWORD);
        let _ = acc.fold(&record("C2", "EXACT", "boot", 1, 0));
        let _ = acc.fold(&record("C1", "EXACT", "shoe", 1, 0));
        let _ = acc.fold(&record("C2", "BROAD", "boot", 1, 0));

        let campaigns: Vec<_> = acc.iter().map(|(key, _)| key.components()[1].clone()).collect();
        assert_eq!(campaigns, [Some("C2".into()), Some("C1".into())]);
    }

    #[test]
    fn test_different_shapes_share_input() {
        let mut by_keyword = GroupAccumulator::new(KeyShape::KEYWORD);
        let mut by_campaign = GroupAccumulator::new(KeyShape::CAMPAIGN);
        for r in [record("C1", "EXACT", "shoe", 1, 0), record("C1", "EXACT", "boot", 2, 0)] {
            let _ = by_keyword.fold(&r);
            let _ = by_campaign.fold(&r);
        }
        assert_eq!(by_keyword.len(), 2);
        assert_eq!(by_campaign.len(), 1);
        assert_eq!(by_campaign.iter().next().unwrap().1.metrics.exact.clicks, Measure::Value(3));
        assert_eq!(by_keyword.shape(), KeyShape::KEYWORD);
    }
}
