use crate::domain::entities::funnel::{Funnel, FunnelMetrics};
use crate::domain::error::DomainError;
use crate::domain::ports::funnel_repository::FunnelRepository;
use std::collections::HashSet;

/// Immutable funnel table built once at startup.
pub struct InMemoryFunnelRepo {
    funnels: Vec<Funnel>,
}

impl InMemoryFunnelRepo {
    /// Builds a repository from funnels in display order. Names must be
    /// non-empty and unique, and every record must pass validation.
    pub fn from_funnels(funnels: Vec<Funnel>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for funnel in &funnels {
            if funnel.name.trim().is_empty() {
                return Err(DomainError::InvalidInput(
                    "Funnel name must not be empty".into(),
                ));
            }
            if !seen.insert(funnel.name.as_str()) {
                return Err(DomainError::InvalidInput(format!(
                    "Duplicate funnel name: {}",
                    funnel.name
                )));
            }
            funnel.metrics.validate().map_err(|e| match e {
                DomainError::InvalidInput(msg) => {
                    DomainError::InvalidInput(format!("{}: {msg}", funnel.name))
                }
                other => other,
            })?;
        }
        tracing::debug!(count = funnels.len(), "funnel repository built");
        Ok(Self { funnels })
    }

    /// The four campaign funnels the dashboard ships with.
    pub fn reference() -> Self {
        Self {
            funnels: reference_funnels(),
        }
    }

    pub fn len(&self) -> usize {
        self.funnels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funnels.is_empty()
    }
}

impl FunnelRepository for InMemoryFunnelRepo {
    fn names(&self) -> Vec<String> {
        self.funnels.iter().map(|f| f.name.clone()).collect()
    }

    fn get(&self, name: &str) -> Result<FunnelMetrics, DomainError> {
        self.funnels
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.metrics)
            .ok_or_else(|| DomainError::NotFound(format!("funnel '{name}'")))
    }

    fn list(&self) -> Vec<Funnel> {
        self.funnels.clone()
    }
}

pub fn reference_funnels() -> Vec<Funnel> {
    vec![
        Funnel::new(
            "Lançamento",
            FunnelMetrics {
                traffic_spend: 5000.0,
                leads_generated: 250.0,
                customers_generated: 25.0,
                gross_revenue: 12500.0,
                net_revenue: 10000.0,
                fixed_costs: 2000.0,
                variable_costs: 1500.0,
                clicks: 1250.0,
                impressions: 25000.0,
                visits: 500.0,
            },
        ),
        Funnel::new(
            "Sala-Reunião Secreta",
            FunnelMetrics {
                traffic_spend: 3000.0,
                leads_generated: 150.0,
                customers_generated: 30.0,
                gross_revenue: 15000.0,
                net_revenue: 12000.0,
                fixed_costs: 1500.0,
                variable_costs: 1000.0,
                clicks: 900.0,
                impressions: 18000.0,
                visits: 300.0,
            },
        ),
        Funnel::new(
            "VSL",
            FunnelMetrics {
                traffic_spend: 4000.0,
                leads_generated: 200.0,
                customers_generated: 20.0,
                gross_revenue: 10000.0,
                net_revenue: 8000.0,
                fixed_costs: 1800.0,
                variable_costs: 1200.0,
                clicks: 1000.0,
                impressions: 20000.0,
                visits: 400.0,
            },
        ),
        Funnel::new(
            "Low Ticket",
            FunnelMetrics {
                traffic_spend: 2000.0,
                leads_generated: 400.0,
                customers_generated: 80.0,
                gross_revenue: 8000.0,
                net_revenue: 6400.0,
                fixed_costs: 1000.0,
                variable_costs: 800.0,
                clicks: 2000.0,
                impressions: 40000.0,
                visits: 800.0,
            },
        ),
    ]
}
