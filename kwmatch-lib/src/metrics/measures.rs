use super::Measure;
use core::ops::AddAssign;
use strum::EnumIter;

/// The five metrics carried by every report row, in output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MetricKind {
    Clicks,
    Impressions,
    Conversions,
    ConversionsValue,
    Cost,
}

impl MetricKind {
    /// Column label used in report headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clicks => "Clicks",
            Self::Impressions => "Impressions",
            Self::Conversions => "Conversions",
            Self::ConversionsValue => "Conversion Value",
            Self::Cost => "Cost",
        }
    }

    /// Lower-case identifier, used as the metric prefix of a slot name (e.g. `conversions_value_exact`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Clicks => "clicks",
            Self::Impressions => "impressions",
            Self::Conversions => "conversions",
            Self::ConversionsValue => "conversions_value",
            Self::Cost => "cost",
        }
    }
}

/// One reading of a metric, typed by the kind of metric it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricReading {
    Count(Measure<u64>),
    Amount(Measure<f64>),
}

/// The metric quintuple for a single record, or the running total for a single match type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measures {
    pub clicks: Measure<u64>,
    pub impressions: Measure<u64>,
    pub conversions: Measure<u64>,
    pub conversions_value: Measure<f64>,
    pub cost: Measure<f64>,
}

impl Measures {
    #[must_use]
    pub const fn get(&self, kind: MetricKind) -> MetricReading {
        match kind {
            MetricKind::Clicks => MetricReading::Count(self.clicks),
            MetricKind::Impressions => MetricReading::Count(self.impressions),
            MetricKind::Conversions => MetricReading::Count(self.conversions),
            MetricKind::ConversionsValue => MetricReading::Amount(self.conversions_value),
            MetricKind::Cost => MetricReading::Amount(self.cost),
        }
    }

    /// Number of metrics that carry a reported value.
    #[must_use]
    pub fn available_count(&self) -> usize {
        [
            self.clicks.is_available(),
            self.impressions.is_available(),
            self.conversions.is_available(),
            self.conversions_value.is_available(),
            self.cost.is_available(),
        ]
        .into_iter()
        .filter(|available| *available)
        .count()
    }
}

impl AddAssign for Measures {
    fn add_assign(&mut self, rhs: Self) {
        self.clicks += rhs.clicks;
        self.impressions += rhs.impressions;
        self.conversions += rhs.conversions;
        self.conversions_value += rhs.conversions_value;
        self.cost += rhs.cost;
    }
}
