use super::{MetricKind, MetricReading, Measures};
use core::ops::AddAssign;
use strum::{EnumIter, IntoEnumIterator};

/// A match type that owns a group of metric slots in the enriched layout.
///
/// Variant order is the canonical column order of every wide view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Slot {
    Broad,
    Exact,
    BroadLegacy,
    Phrase,
}

impl Slot {
    /// Lower-case identifier used as the suffix of a slot name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Broad => "broad",
            Self::Exact => "exact",
            Self::BroadLegacy => "broad_legacy",
            Self::Phrase => "phrase",
        }
    }

    /// Suffix used in report column headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Broad => "BROAD",
            Self::Exact => "EXACT",
            Self::BroadLegacy => "BROAD LEGACY",
            Self::Phrase => "PHRASE",
        }
    }

    /// Looks up a slot by its lower-case identifier.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|slot| slot.key() == key)
    }
}

/// The 20-slot enriched metrics layout: one [`Measures`] per [`Slot`].
///
/// A freshly enriched record fills at most one slot group, the one matching its own
/// match type. Every other slot stays `NotAvailable`, so summing layouts from records
/// of different match types never mixes their totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlotMetrics {
    pub broad: Measures,
    pub exact: Measures,
    pub broad_legacy: Measures,
    pub phrase: Measures,
}

impl SlotMetrics {
    /// A layout with only `slot` populated.
    #[must_use]
    pub fn with_slot(slot: Slot, measures: Measures) -> Self {
        let mut metrics = Self::default();
        *metrics.slot_mut(slot) = measures;
        metrics
    }

    #[must_use]
    pub const fn slot(&self, slot: Slot) -> &Measures {
        match slot {
            Slot::Broad => &self.broad,
            Slot::Exact => &self.exact,
            Slot::BroadLegacy => &self.broad_legacy,
            Slot::Phrase => &self.phrase,
        }
    }

    pub const fn slot_mut(&mut self, slot: Slot) -> &mut Measures {
        match slot {
            Slot::Broad => &mut self.broad,
            Slot::Exact => &mut self.exact,
            Slot::BroadLegacy => &mut self.broad_legacy,
            Slot::Phrase => &mut self.phrase,
        }
    }

    /// All 20 slots in canonical column order, paired with their slot and metric.
    pub fn readings(&self) -> impl Iterator<Item = (Slot, MetricKind, MetricReading)> + '_ {
        Slot::iter().flat_map(move |slot| MetricKind::iter().map(move |kind| (slot, kind, self.slot(slot).get(kind))))
    }

    /// Number of slots holding a reported value.
    #[must_use]
    pub fn available_count(&self) -> usize {
        Slot::iter().map(|slot| self.slot(slot).available_count()).sum()
    }
}

impl AddAssign for SlotMetrics {
    fn add_assign(&mut self, rhs: Self) {
        self.broad += rhs.broad;
        self.exact += rhs.exact;
        self.broad_legacy += rhs.broad_legacy;
        self.phrase += rhs.phrase;
    }
}
