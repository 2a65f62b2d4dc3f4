//! Three-tier status used to colour headline KPIs.
//!
//! This is a presentation policy only. Alerting uses its own cut-offs in
//! `application::alerts::AlertThresholds`.

use crate::domain::values::kpis::DerivedKpis;
use crate::domain::values::ratio::Ratio;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Medium,
    Poor,
    Unrated,
}

impl Status {
    /// Only a good reading shows an upward trend marker.
    pub fn is_trending_up(&self) -> bool {
        matches!(self, Status::Good)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Good => write!(f, "good"),
            Status::Medium => write!(f, "medium"),
            Status::Poor => write!(f, "poor"),
            Status::Unrated => write!(f, "unrated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusMetric {
    Roi,
    Roas,
    Conversion,
}

/// Strict lower bounds for the good and medium tiers of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tier {
    pub good_above: f64,
    pub medium_above: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusThresholds {
    pub roi: Tier,
    pub roas: Tier,
    pub conversion: Tier,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            roi: Tier {
                good_above: 100.0,
                medium_above: 50.0,
            },
            roas: Tier {
                good_above: 3.0,
                medium_above: 2.0,
            },
            conversion: Tier {
                good_above: 10.0,
                medium_above: 5.0,
            },
        }
    }
}

impl StatusThresholds {
    pub fn tier(&self, metric: StatusMetric) -> Tier {
        match metric {
            StatusMetric::Roi => self.roi,
            StatusMetric::Roas => self.roas,
            StatusMetric::Conversion => self.conversion,
        }
    }

    pub fn classify(&self, metric: StatusMetric, value: Ratio) -> Status {
        let tier = self.tier(metric);
        match value {
            Ratio::Undefined => Status::Unrated,
            Ratio::Defined(v) if v > tier.good_above => Status::Good,
            Ratio::Defined(v) if v > tier.medium_above => Status::Medium,
            Ratio::Defined(_) => Status::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KpiStatuses {
    pub roi: Status,
    pub roas: Status,
    pub conversion: Status,
}

impl KpiStatuses {
    pub fn classify(kpis: &DerivedKpis, thresholds: &StatusThresholds) -> Self {
        Self {
            roi: thresholds.classify(StatusMetric::Roi, kpis.return_on_investment),
            roas: thresholds.classify(StatusMetric::Roas, kpis.return_on_ad_spend),
            conversion: thresholds.classify(StatusMetric::Conversion, kpis.final_conversion_rate),
        }
    }
}
