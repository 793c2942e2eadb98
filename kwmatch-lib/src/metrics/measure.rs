use core::ops::{Add, AddAssign};

/// A single metric reading.
///
/// Report sources do not always deliver every metric. A missing metric is kept as
/// `NotAvailable` rather than being collapsed into zero, so a zero that was actually
/// reported stays distinguishable from one that was never there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure<T> {
    NotAvailable,
    Value(T),
}

impl<T> Measure<T> {
    /// Returns `true` if a value was reported.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    #[must_use]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::NotAvailable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Measure<U> {
        match self {
            Self::Value(value) => Measure::Value(f(value)),
            Self::NotAvailable => Measure::NotAvailable,
        }
    }
}

impl<T: Default> Measure<T> {
    /// The reported value, or zero when nothing was reported.
    #[must_use]
    pub fn value_or_zero(self) -> T {
        self.value().unwrap_or_default()
    }
}

impl<T> Default for Measure<T> {
    fn default() -> Self {
        Self::NotAvailable
    }
}

impl<T> From<Option<T>> for Measure<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotAvailable, Self::Value)
    }
}

/// How two readings of the same metric combine.
///
/// Counts saturate at `u64::MAX` instead of overflowing.
pub trait Accumulate: Copy {
    #[must_use]
    fn accumulate(self, other: Self) -> Self;
}

impl Accumulate for u64 {
    fn accumulate(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl Accumulate for f64 {
    fn accumulate(self, other: Self) -> Self {
        self + other
    }
}

impl<T: Accumulate> Add for Measure<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Value(a), Self::Value(b)) => Self::Value(a.accumulate(b)),
            (Self::Value(v), Self::NotAvailable) | (Self::NotAvailable, Self::Value(v)) => Self::Value(v),
            (Self::NotAvailable, Self::NotAvailable) => Self::NotAvailable,
        }
    }
}

impl<T: Accumulate> AddAssign for Measure<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
