use super::{MatchType, RawRecord, extract_measures, normalize_keyword};
use crate::metrics::{Measures, SlotMetrics};
use compact_str::CompactString;

/// A normalized record with its metrics spread over the 20-slot layout.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub account: Option<CompactString>,
    pub campaign_name: Option<CompactString>,
    pub bidding_strategy: Option<CompactString>,
    pub keyword_text: Option<CompactString>,
    pub match_type: MatchType,
    pub search_term: Option<CompactString>,

    /// The five metrics as extracted from the row, independent of match type.
    pub measures: Measures,

    /// The same metrics placed in the slots of the record's own match type.
    pub metrics: SlotMetrics,
}

impl EnrichedRecord {
    /// Normalizes, extracts, and enriches one raw row.
    ///
    /// Only the slots of the record's own match type are populated. A record without a
    /// recognized match type keeps every slot `NotAvailable`.
    #[must_use]
    pub fn from_raw(raw: RawRecord) -> Self {
        let normalized = normalize_keyword(raw.match_type.as_deref(), raw.keyword_text.as_deref());
        let measures = extract_measures(&raw.metrics);
        let metrics = normalized
            .match_type
            .slot()
            .map_or_else(SlotMetrics::default, |slot| SlotMetrics::with_slot(slot, measures));

        Self {
            account: raw.account,
            campaign_name: raw.campaign_name,
            bidding_strategy: raw.bidding_strategy,
            keyword_text: normalized.keyword_text,
            match_type: normalized.match_type,
            search_term: raw.search_term,
            measures,
            metrics,
        }
    }
}
