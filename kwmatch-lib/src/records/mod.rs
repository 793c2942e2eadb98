//! Report rows from raw input to enriched, aggregation-ready records
//!
//! # Implementation Model
//!
//! A [`RawRecord`] is one row exactly as a report source delivered it: every field is
//! optional and metrics live in a flat, name-keyed [`RawMetrics`] mapping. Turning it
//! into an [`EnrichedRecord`] takes three steps:
//!
//! 1. **Normalization** ([`normalize_keyword`]) folds the legacy "broad match modifier"
//!    convention (`+word`) into its own [`MatchType::BroadLegacy`] label and strips the
//!    `+` markers from the keyword text.
//! 2. **Extraction** ([`extract_measures`]) reads the typed metric values and derives
//!    cost from average cost per click.
//! 3. **Enrichment** ([`EnrichedRecord::from_raw`]) spreads the extracted metrics into
//!    the 20-slot [`SlotMetrics`](crate::metrics::SlotMetrics) layout.
//!
//! None of these steps can fail. Absent fields stay absent and absent metrics stay
//! `NotAvailable`.

mod enrich;
mod extract;
mod match_type;
mod normalize;
mod raw_record;

pub use enrich::EnrichedRecord;
pub use extract::{extract_measures, read_amount, read_count};
pub use match_type::MatchType;
pub use normalize::{NormalizedKeyword, normalize_keyword};
pub use raw_record::{RawMetrics, RawRecord, RawValue};
