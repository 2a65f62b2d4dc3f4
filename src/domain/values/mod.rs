pub mod cost_breakdown;
pub mod kpis;
pub mod ratio;
pub mod status;
