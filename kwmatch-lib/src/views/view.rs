use crate::metrics::{MetricKind, Slot};
use strum::{EnumIter, IntoEnumIterator};

/// The output tables produced by the two report passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum View {
    /// Per keyword, metrics of every match type side by side. Filtered.
    MatchTypeComparison,

    /// One row per keyword and match type. Unfiltered.
    MatchTypeComparisonAggregated,

    /// The rows of the aggregated view whose keyword qualifies. Filtered.
    MatchTypeComparisonCustom,

    /// Latest bidding strategy per campaign.
    CampaignInformation,

    /// Per keyword and search term, metrics of every match type side by side.
    SearchTermComparison,

    /// Per search term across all keywords, metrics of every match type side by side.
    SearchTermComparisonAggregated,
}

impl View {
    /// Table name, used as worksheet name and CSV file stem.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MatchTypeComparison => "matchTypeComparison",
            Self::MatchTypeComparisonAggregated => "matchTypeComparisonAggregated",
            Self::MatchTypeComparisonCustom => "matchTypeComparisonCustom",
            Self::CampaignInformation => "Campaign_information",
            Self::SearchTermComparison => "searchTermComparison",
            Self::SearchTermComparisonAggregated => "searchTermComparisonAggregated",
        }
    }

    /// The fixed column names of the view.
    #[must_use]
    pub fn header(self) -> Vec<String> {
        self.key_columns()
            .iter()
            .map(ToString::to_string)
            .chain(self.metric_columns().columns())
            .collect()
    }

    const fn key_columns(self) -> &'static [&'static str] {
        match self {
            Self::MatchTypeComparison => &["Account Name", "Campaign Name", "Keyword"],
            Self::MatchTypeComparisonAggregated | Self::MatchTypeComparisonCustom => {
                &["Account Name", "Campaign Name", "Keyword", "Match Type", "Bidding Strategy"]
            }
            Self::CampaignInformation => &["Account", "Campaign", "Bidding Strategy"],
            Self::SearchTermComparison => &["Account Name", "Campaign Name", "Keyword", "Search term"],
            Self::SearchTermComparisonAggregated => &["Search term"],
        }
    }

    const fn metric_columns(self) -> MetricColumns {
        match self {
            Self::MatchTypeComparison | Self::SearchTermComparison | Self::SearchTermComparisonAggregated => MetricColumns::PerSlot,
            Self::MatchTypeComparisonAggregated | Self::MatchTypeComparisonCustom => MetricColumns::PerMetric,
            Self::CampaignInformation => MetricColumns::None,
        }
    }
}

/// The metric columns that follow a view's leading key columns.
#[derive(Debug, Clone, Copy)]
enum MetricColumns {
    /// The 20 slot columns of a wide view.
    PerSlot,

    /// One column per metric, for views with a row per match type.
    PerMetric,

    None,
}

impl MetricColumns {
    fn columns(self) -> Vec<String> {
        match self {
            Self::PerSlot => slot_columns().collect(),
            Self::PerMetric => MetricKind::iter().map(|kind| kind.label().to_string()).collect(),
            Self::None => Vec::new(),
        }
    }
}

/// The 20 wide-view metric columns in canonical order.
fn slot_columns() -> impl Iterator<Item = String> {
    Slot::iter().flat_map(|slot| MetricKind::iter().map(move |kind| format!("{} {}", kind.label(), slot.label())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_comparison_header() {
        let header = View::MatchTypeComparison.header();
        assert_eq!(header.len(), 23);
        assert_eq!(header[..4], ["Account Name", "Campaign Name", "Keyword", "Clicks BROAD"]);
        assert_eq!(header[7], "Cost BROAD");
        assert_eq!(header[8], "Clicks EXACT");
        assert_eq!(header[16], "Conversion Value BROAD LEGACY");
        assert_eq!(header[22], "Cost PHRASE");
    }

    #[test]
    fn test_aggregated_header() {
        let header = View::MatchTypeComparisonAggregated.header();
        assert_eq!(
            header,
            [
                "Account Name",
                "Campaign Name",
                "Keyword",
                "Match Type",
                "Bidding Strategy",
                "Clicks",
                "Impressions",
                "Conversions",
                "Conversion Value",
                "Cost"
            ]
        );
        assert_eq!(View::MatchTypeComparisonCustom.header(), header);
    }

    #[test]
    fn test_search_term_headers() {
        assert_eq!(View::SearchTermComparison.header().len(), 24);
        assert_eq!(View::SearchTermComparison.header()[3], "Search term");
        assert_eq!(View::SearchTermComparisonAggregated.header().len(), 21);
    }

    #[test]
    fn test_campaign_header() {
        assert_eq!(View::CampaignInformation.header(), ["Account", "Campaign", "Bidding Strategy"]);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = View::iter().map(View::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), View::iter().count());
    }
}
