use crate::domain::entities::funnel::FunnelMetrics;
use crate::domain::error::DomainError;
use crate::domain::ports::funnel_repository::FunnelRepository;
use crate::domain::values::cost_breakdown::CostBreakdown;
use crate::domain::values::kpis::{compute_kpis, DerivedKpis};
use crate::domain::values::ratio::Ratio;
use crate::domain::values::status::{KpiStatuses, StatusThresholds};
use serde::Serialize;
use std::sync::Arc;

pub struct KpiUseCase {
    repo: Arc<dyn FunnelRepository>,
    thresholds: StatusThresholds,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunnelReport {
    pub funnel: String,
    pub metrics: FunnelMetrics,
    pub kpis: DerivedKpis,
    pub statuses: KpiStatuses,
}

/// One row of the cross-funnel comparison charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelComparison {
    pub funnel: String,
    pub roi: Ratio,
    pub roas: Ratio,
    pub cpl: Ratio,
    pub cac: Ratio,
    pub conversion_rate: Ratio,
    pub net_revenue: f64,
}

impl KpiUseCase {
    pub fn new(repo: Arc<dyn FunnelRepository>) -> Self {
        Self {
            repo,
            thresholds: StatusThresholds::default(),
        }
    }

    pub fn report(&self, funnel: &str) -> Result<FunnelReport, DomainError> {
        let metrics = self.repo.get(funnel)?;
        let kpis = compute_kpis(&metrics);
        let undefined = kpis.undefined_kpis();
        if !undefined.is_empty() {
            tracing::debug!(funnel, ?undefined, "some KPIs are undefined");
        }

        Ok(FunnelReport {
            funnel: funnel.to_string(),
            metrics,
            statuses: KpiStatuses::classify(&kpis, &self.thresholds),
            kpis,
        })
    }

    pub fn compare(&self) -> Vec<FunnelComparison> {
        self.repo
            .list()
            .into_iter()
            .map(|f| {
                let kpis = compute_kpis(&f.metrics);
                FunnelComparison {
                    funnel: f.name,
                    roi: kpis.return_on_investment,
                    roas: kpis.return_on_ad_spend,
                    cpl: kpis.cost_per_lead,
                    cac: kpis.acquisition_cost,
                    conversion_rate: kpis.final_conversion_rate,
                    net_revenue: f.metrics.net_revenue,
                }
            })
            .collect()
    }

    pub fn costs(&self, funnel: &str) -> Result<CostBreakdown, DomainError> {
        let metrics = self.repo.get(funnel)?;
        Ok(CostBreakdown::from_metrics(&metrics))
    }
}
