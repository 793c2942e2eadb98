use super::{RawMetrics, RawValue};
use crate::metrics::{Measure, Measures};

/// Divisor converting the source's micro-currency units to currency units.
const MICROS_PER_UNIT: f64 = 1_000_000.0;

/// Reads the five report metrics from a raw metrics mapping.
///
/// Cost is not read directly: it is derived as `averageCost / 1e6 * clicks`, with an
/// absent average cost or click count treated as zero. A derived cost of zero therefore
/// cannot tell a free click from a row that never reported its clicks.
#[must_use]
pub fn extract_measures(metrics: &RawMetrics) -> Measures {
    let clicks = read_count(metrics, "clicks");
    let average_cost_micros = read_amount(metrics, "averageCost");

    #[expect(clippy::cast_precision_loss, reason = "Click counts are far below 2^52")]
    let cost = average_cost_micros.value_or_zero() / MICROS_PER_UNIT * clicks.value_or_zero() as f64;

    Measures {
        clicks,
        impressions: read_count(metrics, "impressions"),
        conversions: read_count(metrics, "conversions"),
        conversions_value: read_amount(metrics, "conversionsValue"),
        cost: Measure::Value(cost),
    }
}

/// Reads an integral metric, truncating any fractional part.
///
/// Absent, negative, non-numeric, and out-of-range values read as `NotAvailable`.
#[must_use]
pub fn read_count(metrics: &RawMetrics, name: &str) -> Measure<u64> {
    match metrics.get(name) {
        None => Measure::NotAvailable,
        Some(RawValue::Integer(i)) => u64::try_from(*i).ok().into(),
        Some(RawValue::Float(f)) => count_from_float(*f),
        Some(RawValue::Text(text)) => {
            let text = text.trim();
            text.parse::<u64>()
                .map_or_else(|_| text.parse::<f64>().map_or(Measure::NotAvailable, count_from_float), Measure::Value)
        }
    }
}

/// Reads a fractional metric.
///
/// Absent and non-numeric values read as `NotAvailable`.
#[must_use]
pub fn read_amount(metrics: &RawMetrics, name: &str) -> Measure<f64> {
    match metrics.get(name) {
        None => Measure::NotAvailable,
        #[expect(clippy::cast_precision_loss, reason = "Metric values are far below 2^52")]
        Some(RawValue::Integer(i)) => Measure::Value(*i as f64),
        Some(RawValue::Float(f)) => finite(*f),
        Some(RawValue::Text(text)) => text.trim().parse::<f64>().map_or(Measure::NotAvailable, finite),
    }
}

/// 2^64, the first float past the range of `u64`.
const COUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn count_from_float(value: f64) -> Measure<u64> {
    if value.is_finite() && (0.0..COUNT_LIMIT).contains(&value) {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "Value is finite and non-negative; truncation is intended")]
        Measure::Value(value.trunc() as u64)
    } else {
        Measure::NotAvailable
    }
}

const fn finite(value: f64) -> Measure<f64> {
    if value.is_finite() { Measure::Value(value) } else { Measure::NotAvailable }
}
