//! Shared test helpers.

#![allow(dead_code)]

use funnelkpi::domain::entities::funnel::{Funnel, FunnelMetrics};
use funnelkpi::infrastructure::memory::funnel_repo::InMemoryFunnelRepo;
use funnelkpi::FunnelKpi;
use std::sync::Arc;

pub fn setup() -> FunnelKpi {
    FunnelKpi::with_repository(Arc::new(InMemoryFunnelRepo::reference()))
}

pub fn setup_with(funnels: Vec<Funnel>) -> FunnelKpi {
    FunnelKpi::with_repository(Arc::new(InMemoryFunnelRepo::from_funnels(funnels).unwrap()))
}

pub fn launch_metrics() -> FunnelMetrics {
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
    }
}

pub fn secret_room_metrics() -> FunnelMetrics {
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
    }
}
