use crate::aggregate::{Group, GroupKey, MatchTypeEntry};
use crate::metrics::{Measure, MetricKind, MetricReading, SlotMetrics};
use crate::records::MatchType;
use crate::reports::Cell;
use compact_str::CompactString;
use strum::IntoEnumIterator;

impl From<MetricReading> for Cell {
    fn from(reading: MetricReading) -> Self {
        match reading {
            MetricReading::Count(Measure::Value(value)) => Self::Integer(value),
            MetricReading::Amount(Measure::Value(value)) => Self::Number(value),
            MetricReading::Count(Measure::NotAvailable) | MetricReading::Amount(Measure::NotAvailable) => Self::NotAvailable,
        }
    }
}

/// Flattens a group into a wide row: its key components followed by the 20 slot metrics.
#[must_use]
pub fn project_group(key: &GroupKey, group: &Group) -> Vec<Cell> {
    key_cells(key).chain(slot_cells(&group.metrics)).collect()
}

/// Flattens one per-match-type entry: key components, match type, bidding strategy, then the five metrics.
#[must_use]
pub fn project_entry(key: &GroupKey, match_type: &MatchType, entry: &MatchTypeEntry) -> Vec<Cell> {
    let match_type = match_type.label().map_or(Cell::NotAvailable, Cell::from);
    key_cells(key)
        .chain([match_type, Cell::from(entry.bidding_strategy.as_ref())])
        .chain(MetricKind::iter().map(|kind| Cell::from(entry.measures.get(kind))))
        .collect()
}

/// A campaign row: account, campaign, bidding strategy.
#[must_use]
pub fn project_campaign(key: &GroupKey, bidding_strategy: Option<&CompactString>) -> Vec<Cell> {
    key_cells(key).chain([Cell::from(bidding_strategy)]).collect()
}

fn key_cells(key: &GroupKey) -> impl Iterator<Item = Cell> + '_ {
    key.components().iter().map(|component| Cell::from(component.as_ref()))
}

fn slot_cells(metrics: &SlotMetrics) -> impl Iterator<Item = Cell> + '_ {
    metrics.readings().map(|(_, _, reading)| Cell::from(reading))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{GroupAccumulator, KeyShape, MatchTypeBreakdown};
    use crate::records::{EnrichedRecord, RawMetrics, RawRecord, RawValue};
    use crate::views::View;

    fn record(match_type: &str, keyword: &str, clicks: i64, average_cost: i64) -> EnrichedRecord {
        EnrichedRecord::from_raw(RawRecord {
            account: Some("123".into()),
            campaign_name: Some("C1".into()),
            bidding_strategy: Some("TARGET_CPA".into()),
            match_type: Some(match_type.into()),
            keyword_text: Some(keyword.into()),
            search_term: None,
            metrics: [
                ("clicks", RawValue::Integer(clicks)),
                ("impressions", RawValue::Integer(clicks * 10)),
                ("averageCost", RawValue::Integer(average_cost)),
            ]
            .into_iter()
            .collect::<RawMetrics>(),
        })
    }

    #[test]
    fn test_group_row_matches_header_width() {
        let mut groups = GroupAccumulator::new(KeyShape::KEYWORD);
        let key = groups.fold(&record("EXACT", "shoe", 4, 1_500_000));
        let _ = groups.fold(&record("BROAD", "shoe", 10, 2_000_000));
        let row = project_group(&key, groups.get(&key).expect("group exists"));

        assert_eq!(row.len(), View::MatchTypeComparison.header().len());
        assert_eq!(row[..3], [Cell::from("123"), Cell::from("C1"), Cell::from("shoe")]);

        // BROAD block first
        assert_eq!(row[3], Cell::Integer(10));
        assert_eq!(row[4], Cell::Integer(100));
        assert_eq!(row[5], Cell::NotAvailable);
        assert_eq!(row[7], Cell::Number(20.0));

        // then EXACT
        assert_eq!(row[8], Cell::Integer(4));
        assert_eq!(row[12], Cell::Number(6.0));

        // nothing was reported for BROAD LEGACY or PHRASE
        assert!(row[13..].iter().all(|cell| *cell == Cell::NotAvailable));
    }

    #[test]
    fn test_entry_row() {
        let mut breakdown = MatchTypeBreakdown::new(KeyShape::KEYWORD);
        let key = breakdown.fold(&record("BROAD", "+shoe", 10, 2_000_000));
        let entries = breakdown.get(&key).expect("entries exist");
        let (match_type, entry) = entries.first().expect("one entry");
        let row = project_entry(&key, match_type, entry);

        assert_eq!(row.len(), View::MatchTypeComparisonAggregated.header().len());
        assert_eq!(row[2], Cell::from("shoe"));
        assert_eq!(row[3], Cell::from("BROAD_LEGACY"));
        assert_eq!(row[4], Cell::from("TARGET_CPA"));
        assert_eq!(row[5], Cell::Integer(10));
        assert_eq!(row[9], Cell::Number(20.0));
    }

    #[test]
    fn test_entry_row_without_match_type() {
        let entry = MatchTypeEntry {
            measures: crate::metrics::Measures::default(),
            bidding_strategy: None,
        };
        let key: GroupKey = [Some("a"), Some("c"), Some("k")].into_iter().collect();
        let row = project_entry(&key, &MatchType::NotAvailable, &entry);
        assert_eq!(row[3], Cell::NotAvailable);
        assert_eq!(row[4], Cell::NotAvailable);
    }

    #[test]
    fn test_campaign_row() {
        let key: GroupKey = [Some("123"), None].into_iter().collect();
        let strategy = CompactString::from("MANUAL_CPC");
        assert_eq!(
            project_campaign(&key, Some(&strategy)),
            [Cell::from("123"), Cell::NotAvailable, Cell::from("MANUAL_CPC")]
        );
    }
}
