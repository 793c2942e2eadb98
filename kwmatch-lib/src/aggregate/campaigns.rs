use super::{GroupKey, KeyShape};
use crate::records::EnrichedRecord;
use compact_str::CompactString;
use indexmap::IndexMap;

/// Bidding strategy per (account, campaign), last seen value wins.
#[derive(Debug, Clone, Default)]
pub struct CampaignStrategies {
    strategies: IndexMap<GroupKey, Option<CompactString>>,
}

impl CampaignStrategies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold(&mut self, record: &EnrichedRecord) -> GroupKey {
        let key = KeyShape::CAMPAIGN.key_for(record);
        let _ = self.strategies.insert(key.clone(), record.bidding_strategy.clone());
        key
    }

    /// Campaigns in first-seen order with their latest strategy.
    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, Option<&CompactString>)> {
        self.strategies.iter().map(|(key, strategy)| (key, strategy.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
