pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::alerts::{AlertScan, AlertsUseCase};
use crate::application::dashboard::{Dashboard, DashboardUseCase};
use crate::application::kpis::{FunnelComparison, FunnelReport, KpiUseCase};
use crate::domain::entities::funnel::Funnel;
use crate::domain::error::DomainError;
use crate::domain::ports::funnel_repository::FunnelRepository;
use crate::domain::values::cost_breakdown::CostBreakdown;
use crate::infrastructure::json::dataset::{load_dataset, to_json};
use crate::infrastructure::memory::funnel_repo::InMemoryFunnelRepo;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable naming a JSON funnel dataset to use instead of the
/// built-in reference data.
pub const DATA_ENV: &str = "FUNNELKPI_DATA";

pub struct FunnelKpi {
    repo: Arc<dyn FunnelRepository>,
    kpi_uc: KpiUseCase,
    alerts_uc: AlertsUseCase,
    dashboard_uc: DashboardUseCase,
}

impl FunnelKpi {
    /// Loads `data_path` if given, else the file named by `FUNNELKPI_DATA`,
    /// else the reference funnels.
    pub fn new(data_path: Option<&Path>) -> Result<Self, DomainError> {
        let env_path = std::env::var(DATA_ENV).ok().map(PathBuf::from);
        let repo: Arc<dyn FunnelRepository> = match data_path.or(env_path.as_deref()) {
            Some(path) => Arc::new(load_dataset(path)?),
            None => {
                tracing::debug!("using reference funnel dataset");
                Arc::new(InMemoryFunnelRepo::reference())
            }
        };
        Ok(Self::with_repository(repo))
    }

    pub fn with_repository(repo: Arc<dyn FunnelRepository>) -> Self {
        Self {
            kpi_uc: KpiUseCase::new(repo.clone()),
            alerts_uc: AlertsUseCase::new(repo.clone()),
            dashboard_uc: DashboardUseCase::new(repo.clone()),
            repo,
        }
    }

    pub fn funnels(&self) -> Vec<String> {
        self.repo.names()
    }

    pub fn report(&self, funnel: &str) -> Result<FunnelReport, DomainError> {
        self.kpi_uc.report(funnel)
    }

    pub fn compare(&self) -> Vec<FunnelComparison> {
        self.kpi_uc.compare()
    }

    pub fn costs(&self, funnel: &str) -> Result<CostBreakdown, DomainError> {
        self.kpi_uc.costs(funnel)
    }

    pub fn scan_alerts(&self) -> Result<AlertScan, DomainError> {
        self.alerts_uc.scan()
    }

    pub fn dashboard(&self, selected: Option<&str>) -> Result<Dashboard, DomainError> {
        self.dashboard_uc.snapshot(selected)
    }

    /// The loaded dataset in the JSON format `FUNNELKPI_DATA` accepts.
    pub fn export(&self) -> Result<String, DomainError> {
        let funnels: Vec<Funnel> = self.repo.list();
        to_json(&funnels)
    }
}
