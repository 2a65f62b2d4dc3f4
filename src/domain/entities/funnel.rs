use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// Raw performance measurements for one funnel over a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunnelMetrics {
    pub traffic_spend: f64,
    pub leads_generated: f64,
    pub customers_generated: f64,
    pub gross_revenue: f64,
    /// Revenue after delivery/variable costs other than traffic.
    pub net_revenue: f64,
    pub fixed_costs: f64,
    pub variable_costs: f64,
    pub clicks: f64,
    pub impressions: f64,
    pub visits: f64,
}

impl FunnelMetrics {
    /// Traffic spend plus fixed and variable costs.
    pub fn total_cost(&self) -> f64 {
        self.traffic_spend + self.fixed_costs + self.variable_costs
    }

    /// Net revenue left after every cost. Negative when the funnel runs at a loss.
    pub fn net_profit(&self) -> f64 {
        self.net_revenue - self.total_cost()
    }

    fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("traffic_spend", self.traffic_spend),
            ("leads_generated", self.leads_generated),
            ("customers_generated", self.customers_generated),
            ("gross_revenue", self.gross_revenue),
            ("net_revenue", self.net_revenue),
            ("fixed_costs", self.fixed_costs),
            ("variable_costs", self.variable_costs),
            ("clicks", self.clicks),
            ("impressions", self.impressions),
            ("visits", self.visits),
        ]
    }

    /// Rejects negative or non-finite measurements.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "{field} must be a finite number, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(DomainError::InvalidInput(format!(
                    "{field} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funnel {
    pub name: String,
    pub metrics: FunnelMetrics,
}

impl Funnel {
    pub fn new(name: impl Into<String>, metrics: FunnelMetrics) -> Self {
        Self {
            name: name.into(),
            metrics,
        }
    }
}
