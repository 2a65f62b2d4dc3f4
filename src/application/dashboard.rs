use crate::application::alerts::{Alert, AlertsUseCase};
use crate::application::kpis::{FunnelComparison, FunnelReport, KpiUseCase};
use crate::domain::error::DomainError;
use crate::domain::ports::funnel_repository::FunnelRepository;
use crate::domain::values::cost_breakdown::CostBreakdown;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

pub struct DashboardUseCase {
    repo: Arc<dyn FunnelRepository>,
    kpis: KpiUseCase,
    alerts: AlertsUseCase,
}

/// Everything the dashboard page shows for one selected funnel.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub funnels: Vec<String>,
    pub selected: FunnelReport,
    pub costs: CostBreakdown,
    pub comparison: Vec<FunnelComparison>,
    pub alerts: Vec<Alert>,
}

impl DashboardUseCase {
    pub fn new(repo: Arc<dyn FunnelRepository>) -> Self {
        Self {
            kpis: KpiUseCase::new(repo.clone()),
            alerts: AlertsUseCase::new(repo.clone()),
            repo,
        }
    }

    /// Builds the snapshot. Without a selection the first funnel is shown.
    pub fn snapshot(&self, selected: Option<&str>) -> Result<Dashboard, DomainError> {
        let funnels = self.repo.names();
        let selected = match selected {
            Some(name) => name.to_string(),
            None => funnels
                .first()
                .cloned()
                .ok_or_else(|| DomainError::NotFound("no funnels configured".into()))?,
        };

        let report = self.kpis.report(&selected)?;
        let costs = self.kpis.costs(&selected)?;
        let scan = self.alerts.scan()?;

        Ok(Dashboard {
            generated_at: scan.scanned_at,
            funnels,
            selected: report,
            costs,
            comparison: self.kpis.compare(),
            alerts: scan.alerts,
        })
    }
}
