use super::{View, ViewFilter, project_campaign, project_entry, project_group};
use crate::aggregate::{CampaignStrategies, GroupAccumulator, KeyShape, MatchTypeBreakdown};
use crate::records::{EnrichedRecord, RawRecord};
use crate::reports::Table;
use compact_str::CompactString;

const LOG_TARGET: &str = "      pass";

/// A single accumulation pass over a stream of raw records.
///
/// Records are consumed one at a time in arrival order. Once the input is exhausted,
/// [`finish`](Self::finish) hands the accumulated groups to the view filters and
/// projectors, producing one table per view.
pub trait ReportPass {
    /// The views this pass produces, in output order.
    fn views(&self) -> &'static [View];

    /// Normalizes, enriches and folds one record into every grouping structure of the pass.
    fn consume(&mut self, record: RawRecord);

    /// Number of records consumed so far.
    fn consumed(&self) -> usize;

    fn finish(self) -> Vec<Table>
    where
        Self: Sized;
}

/// Settings shared by both passes.
#[derive(Debug, Clone, Default)]
pub struct PassOptions {
    pub filter: ViewFilter,

    /// Account used for records that carry none.
    pub default_account: Option<CompactString>,
}

impl PassOptions {
    fn enrich(&self, mut record: RawRecord) -> EnrichedRecord {
        if record.account.is_none() {
            record.account.clone_from(&self.default_account);
        }
        EnrichedRecord::from_raw(record)
    }
}

/// The keyword-view pass, feeding the match type comparison views and campaign information.
#[derive(Debug)]
pub struct MatchTypePass {
    options: PassOptions,
    keywords: GroupAccumulator,
    breakdown: MatchTypeBreakdown,
    campaigns: CampaignStrategies,
    consumed: usize,
}

impl MatchTypePass {
    const VIEWS: &'static [View] = &[
        View::MatchTypeComparison,
        View::MatchTypeComparisonAggregated,
        View::MatchTypeComparisonCustom,
        View::CampaignInformation,
    ];

    #[must_use]
    pub fn new(options: PassOptions) -> Self {
        Self {
            options,
            keywords: GroupAccumulator::new(KeyShape::KEYWORD),
            breakdown: MatchTypeBreakdown::new(KeyShape::KEYWORD),
            campaigns: CampaignStrategies::new(),
            consumed: 0,
        }
    }
}

impl ReportPass for MatchTypePass {
    fn views(&self) -> &'static [View] {
        Self::VIEWS
    }

    fn consume(&mut self, record: RawRecord) {
        let record = self.options.enrich(record);
        let _ = self.keywords.fold(&record);
        let _ = self.breakdown.fold(&record);
        let _ = self.campaigns.fold(&record);
        self.consumed += 1;
    }

    fn consumed(&self) -> usize {
        self.consumed
    }

    fn finish(self) -> Vec<Table> {
        let filter = &self.options.filter;

        let mut comparison = table(View::MatchTypeComparison);
        for (key, group) in self.keywords.iter().filter(|(_, group)| filter.qualifies(group)) {
            comparison.append(project_group(key, group));
        }

        let mut aggregated = table(View::MatchTypeComparisonAggregated);
        let mut custom = table(View::MatchTypeComparisonCustom);
        for (key, entries) in self.breakdown.iter() {
            let qualifies = filter.qualifies_set(&MatchTypeBreakdown::match_types(entries));
            for (match_type, entry) in entries {
                let row = project_entry(key, match_type, entry);
                if qualifies {
                    custom.append(row.clone());
                }
                aggregated.append(row);
            }
        }

        let mut campaigns = table(View::CampaignInformation);
        for (key, strategy) in self.campaigns.iter() {
            campaigns.append(project_campaign(key, strategy));
        }

        let tables = vec![comparison, aggregated, custom, campaigns];
        log_tables(self.consumed, &tables);
        tables
    }
}

/// The search-term-view pass, feeding the two search term comparison views.
#[derive(Debug)]
pub struct SearchTermPass {
    options: PassOptions,
    keyword_terms: GroupAccumulator,
    terms: GroupAccumulator,
    consumed: usize,
}

impl SearchTermPass {
    const VIEWS: &'static [View] = &[View::SearchTermComparison, View::SearchTermComparisonAggregated];

    #[must_use]
    pub fn new(options: PassOptions) -> Self {
        Self {
            options,
            keyword_terms: GroupAccumulator::new(KeyShape::KEYWORD_SEARCH_TERM),
            terms: GroupAccumulator::new(KeyShape::SEARCH_TERM),
            consumed: 0,
        }
    }
}

impl ReportPass for SearchTermPass {
    fn views(&self) -> &'static [View] {
        Self::VIEWS
    }

    fn consume(&mut self, record: RawRecord) {
        let record = self.options.enrich(record);
        let _ = self.keyword_terms.fold(&record);
        let _ = self.terms.fold(&record);
        self.consumed += 1;
    }

    fn consumed(&self) -> usize {
        self.consumed
    }

    fn finish(self) -> Vec<Table> {
        let mut comparison = table(View::SearchTermComparison);
        for (key, group) in self.keyword_terms.iter() {
            comparison.append(project_group(key, group));
        }

        let mut aggregated = table(View::SearchTermComparisonAggregated);
        for (key, group) in self.terms.iter() {
            aggregated.append(project_group(key, group));
        }

        let tables = vec![comparison, aggregated];
        log_tables(self.consumed, &tables);
        tables
    }
}

fn table(view: View) -> Table {
    Table::new(view.name(), view.header())
}

fn log_tables(consumed: usize, tables: &[Table]) {
    log::info!(target: LOG_TARGET, "Consumed {consumed} records");
    for table in tables {
        if table.is_empty() {
            log::info!(target: LOG_TARGET, "{}: No records provided", table.name());
        } else {
            log::info!(target: LOG_TARGET, "{}: {} rows", table.name(), table.len());
        }
    }
}
