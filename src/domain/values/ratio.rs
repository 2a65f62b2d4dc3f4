//! A KPI value that may be undefined.
//!
//! Every ratio KPI divides by some raw measurement. When that denominator is
//! zero the result is [`Ratio::Undefined`] rather than an infinity or NaN, so
//! callers have to handle the "cannot be rated" case explicitly. The sentinel
//! is per denominator: one undefined KPI does not affect the others.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    /// `numerator / denominator`, or `Undefined` for a zero denominator or a
    /// non-finite quotient.
    pub fn divide(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Ratio::Undefined;
        }
        Ratio::from_value(numerator / denominator)
    }

    /// Same as [`Ratio::divide`], scaled to a percentage.
    pub fn percent(numerator: f64, denominator: f64) -> Self {
        Ratio::divide(numerator, denominator).map(|v| v * 100.0)
    }

    fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Ratio::Defined(value)
        } else {
            Ratio::Undefined
        }
    }

    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Ratio::Defined(v) => Ratio::from_value(f(v)),
            Ratio::Undefined => Ratio::Undefined,
        }
    }

    /// Rounds half away from zero to two decimal places.
    pub fn rounded(self) -> Self {
        self.map(round2)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Ratio::Defined(v) => Some(*v),
            Ratio::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Ratio::Defined(_))
    }

    pub fn is_below(&self, threshold: f64) -> bool {
        self.value().is_some_and(|v| v < threshold)
    }

    pub fn is_above(&self, threshold: f64) -> bool {
        self.value().is_some_and(|v| v > threshold)
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Defined(v) => write!(f, "{v:.2}"),
            Ratio::Undefined => write!(f, "n/a"),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ratio::Defined(v) => serializer.serialize_f64(*v),
            Ratio::Undefined => serializer.serialize_none(),
        }
    }
}
