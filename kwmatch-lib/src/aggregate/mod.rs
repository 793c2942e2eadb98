//! Incremental grouping of enriched records
//!
//! # Implementation Model
//!
//! Each structure here owns an insertion-ordered map from [`GroupKey`] to accumulated
//! state and exposes one `fold` operation with create-or-update semantics: the first
//! record for a key creates the entry from that record, every later record is added
//! into it. Iteration yields entries in first-seen key order, which is the row order of
//! the views built on top of them.
//!
//! - [`GroupAccumulator`] sums the 20-slot layout across match types and tracks the
//!   distinct match types seen per key.
//! - [`MatchTypeBreakdown`] keys one level deeper, by match type, and sums the plain
//!   five-metric quintuple per (key, match type).
//! - [`CampaignStrategies`] remembers the latest bidding strategy per campaign.
//!
//! The key of every structure is projected from a record by a [`KeyShape`], so several
//! structures with different shapes can be fed from a single pass over the input.

mod accumulator;
mod breakdown;
mod campaigns;
mod group;
mod group_key;

pub use accumulator::GroupAccumulator;
pub use breakdown::{MatchTypeBreakdown, MatchTypeEntry};
pub use campaigns::CampaignStrategies;
pub use group::{Group, MatchTypeSet};
pub use group_key::{Dimension, GroupKey, KeyShape};
