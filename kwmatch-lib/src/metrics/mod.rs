//! Typed metric values and the fixed metric × match type slot layout
//!
//! Every report row carries the same five metrics: clicks, impressions,
//! conversions, conversion value, and cost. This module models those values
//! without conflating "reported as zero" with "not reported at all".
//!
//! # Implementation Model
//!
//! - [`Measure`] wraps a single reading and is either a value or
//!   `NotAvailable`. Adding two measures keeps a value if either side has one,
//!   and counts saturate rather than overflow.
//! - [`Measures`] is the five-metric quintuple for one record or one match type.
//! - [`SlotMetrics`] is the enriched layout: one [`Measures`] per recognized
//!   match type ([`Slot`]), giving 20 named slots. Summing two layouts is a
//!   single structural add.
//!
//! The column order used by every wide view is [`Slot`] order (BROAD, EXACT,
//! BROAD LEGACY, PHRASE), then [`MetricKind`] order within each slot.

mod measure;
mod measures;
mod slot_metrics;

pub use measure::{Accumulate, Measure};
pub use measures::{Measures, MetricKind, MetricReading};
pub use slot_metrics::{Slot, SlotMetrics};
