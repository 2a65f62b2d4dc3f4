use crate::domain::error::DomainError;
use crate::domain::ports::funnel_repository::FunnelRepository;
use crate::domain::values::kpis::{compute_kpis, DerivedKpis};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

pub struct AlertsUseCase {
    repo: Arc<dyn FunnelRepository>,
    thresholds: AlertThresholds,
}

#[derive(Debug, Serialize)]
pub struct AlertScan {
    pub scanned_at: chrono::DateTime<Utc>,
    pub funnel_count: usize,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub funnel: String,
    pub severity: AlertSeverity,
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowRoi,
    LowRoas,
    LowConversion,
    ExcellentRoi,
}

/// Cut-offs for the alert rules. Kept apart from the status colouring tiers;
/// the two policies share metrics but not numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertThresholds {
    /// Warn when ROI (%) is below this.
    pub low_roi: f64,
    /// Warn when ROAS (x) is below this.
    pub low_roas: f64,
    /// Warn when final conversion (%) is below this.
    pub low_conversion: f64,
    /// Celebrate when ROI (%) is above this.
    pub excellent_roi: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            low_roi: 50.0,
            low_roas: 2.0,
            low_conversion: 5.0,
            excellent_roi: 100.0,
        }
    }
}

impl AlertsUseCase {
    pub fn new(repo: Arc<dyn FunnelRepository>) -> Self {
        Self {
            repo,
            thresholds: AlertThresholds::default(),
        }
    }

    pub fn scan(&self) -> Result<AlertScan, DomainError> {
        let per_funnel: Vec<(String, DerivedKpis)> = self
            .repo
            .list()
            .into_iter()
            .map(|f| {
                let kpis = compute_kpis(&f.metrics);
                (f.name, kpis)
            })
            .collect();

        Ok(AlertScan {
            scanned_at: Utc::now(),
            funnel_count: per_funnel.len(),
            alerts: derive_alerts(&per_funnel, &self.thresholds),
        })
    }
}

/// Applies every rule to every funnel, independently. Output follows input
/// order; within a funnel the rules fire in a fixed order (low ROI, low ROAS,
/// low conversion, excellent ROI). Undefined KPIs never fire.
pub fn derive_alerts(
    per_funnel: &[(String, DerivedKpis)],
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for (funnel, kpis) in per_funnel {
        alerts_for_funnel(funnel, kpis, thresholds, &mut alerts);
    }
    alerts
}

fn alerts_for_funnel(
    funnel: &str,
    kpis: &DerivedKpis,
    thresholds: &AlertThresholds,
    alerts: &mut Vec<Alert>,
) {
    let roi = kpis.return_on_investment;
    let roas = kpis.return_on_ad_spend;
    let conversion = kpis.final_conversion_rate;

    for (name, ratio) in [("roi", roi), ("roas", roas), ("conversion", conversion)] {
        if !ratio.is_defined() {
            tracing::warn!(funnel, metric = name, "metric undefined, alert rules skipped");
        }
    }

    let mut push = |severity, kind, message: String| {
        alerts.push(Alert {
            funnel: funnel.to_string(),
            severity,
            kind,
            message,
        })
    };

    if roi.is_below(thresholds.low_roi) {
        push(
            AlertSeverity::Warning,
            AlertKind::LowRoi,
            format!("{funnel}: low ROI ({roi}%) - consider optimizing campaigns"),
        );
    }
    if roas.is_below(thresholds.low_roas) {
        push(
            AlertSeverity::Warning,
            AlertKind::LowRoas,
            format!("{funnel}: low ROAS ({roas}x) - review creatives"),
        );
    }
    if conversion.is_below(thresholds.low_conversion) {
        push(
            AlertSeverity::Warning,
            AlertKind::LowConversion,
            format!("{funnel}: low conversion rate ({conversion}%) - optimize funnel"),
        );
    }
    if roi.is_above(thresholds.excellent_roi) {
        push(
            AlertSeverity::Success,
            AlertKind::ExcellentRoi,
            format!(
                "{funnel}: excellent performance! ROI of {roi}% - consider scaling investment"
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::ratio::Ratio;

    fn kpis(roi: Ratio, roas: Ratio, conversion: Ratio) -> DerivedKpis {
        DerivedKpis {
            cost_per_lead: Ratio::Defined(10.0),
            acquisition_cost: Ratio::Defined(100.0),
            click_through_rate: Ratio::Defined(5.0),
            capture_conversion_rate: Ratio::Defined(50.0),
            final_conversion_rate: conversion,
            average_ticket: Ratio::Defined(200.0),
            return_on_ad_spend: roas,
            return_on_investment: roi,
            contribution_margin: Ratio::Defined(80.0),
        }
    }

    #[test]
    fn test_all_warnings_fire_together() {
        let input = vec![(
            "Webinar".to_string(),
            kpis(Ratio::Defined(10.0), Ratio::Defined(1.5), Ratio::Defined(2.0)),
        )];
        let alerts = derive_alerts(&input, &AlertThresholds::default());
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::LowRoi, AlertKind::LowRoas, AlertKind::LowConversion]
        );
        assert!(alerts.iter().all(|a| a.severity == AlertSeverity::Warning));
    }

    #[test]
    fn test_success_and_warning_are_independent() {
        let input = vec![(
            "Quiz".to_string(),
            kpis(Ratio::Defined(150.0), Ratio::Defined(1.2), Ratio::Defined(12.0)),
        )];
        let alerts = derive_alerts(&input, &AlertThresholds::default());
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::LowRoas);
        assert_eq!(alerts[1].kind, AlertKind::ExcellentRoi);
        assert_eq!(alerts[1].severity, AlertSeverity::Success);
    }

    #[test]
    fn test_boundaries_are_strict() {
        let input = vec![(
            "Edge".to_string(),
            kpis(Ratio::Defined(50.0), Ratio::Defined(2.0), Ratio::Defined(5.0)),
        )];
        assert!(derive_alerts(&input, &AlertThresholds::default()).is_empty());

        let input = vec![(
            "Edge".to_string(),
            kpis(Ratio::Defined(100.0), Ratio::Defined(2.0), Ratio::Defined(5.0)),
        )];
        assert!(derive_alerts(&input, &AlertThresholds::default()).is_empty());
    }

    #[test]
    fn test_undefined_metrics_never_fire() {
        let input = vec![(
            "Empty".to_string(),
            kpis(Ratio::Undefined, Ratio::Undefined, Ratio::Undefined),
        )];
        assert!(derive_alerts(&input, &AlertThresholds::default()).is_empty());
    }

    #[test]
    fn test_message_formatting() {
        let input = vec![(
            "VSL".to_string(),
            kpis(Ratio::Defined(14.29), Ratio::Defined(2.5), Ratio::Defined(10.0)),
        )];
        let alerts = derive_alerts(&input, &AlertThresholds::default());
        assert_eq!(
            alerts[0].message,
            "VSL: low ROI (14.29%) - consider optimizing campaigns"
        );
    }

    #[test]
    fn test_order_follows_input() {
        let low = kpis(Ratio::Defined(10.0), Ratio::Defined(3.0), Ratio::Defined(10.0));
        let input = vec![("B".to_string(), low), ("A".to_string(), low)];
        let alerts = derive_alerts(&input, &AlertThresholds::default());
        assert_eq!(alerts[0].funnel, "B");
        assert_eq!(alerts[1].funnel, "A");
    }
}
