//! Derived funnel KPIs.
//!
//! All nine KPIs are rounded to two decimals (half away from zero) so that the
//! numbers compared against thresholds are the numbers that get displayed.
//! Rates and margins are percentages; ROAS is a plain multiplier.

use crate::domain::entities::funnel::FunnelMetrics;
use crate::domain::values::ratio::Ratio;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedKpis {
    /// CPL: traffic spend per lead.
    pub cost_per_lead: Ratio,
    /// CAC: total cost per customer.
    pub acquisition_cost: Ratio,
    /// CTR, percent.
    pub click_through_rate: Ratio,
    /// Leads per visit, percent.
    pub capture_conversion_rate: Ratio,
    /// Customers per lead, percent.
    pub final_conversion_rate: Ratio,
    pub average_ticket: Ratio,
    /// ROAS, multiplier.
    pub return_on_ad_spend: Ratio,
    /// ROI, percent of total cost.
    pub return_on_investment: Ratio,
    /// Percent of net revenue left after variable costs.
    pub contribution_margin: Ratio,
}

impl DerivedKpis {
    /// Names of the KPIs that could not be computed.
    pub fn undefined_kpis(&self) -> Vec<&'static str> {
        [
            ("cost_per_lead", self.cost_per_lead),
            ("acquisition_cost", self.acquisition_cost),
            ("click_through_rate", self.click_through_rate),
            ("capture_conversion_rate", self.capture_conversion_rate),
            ("final_conversion_rate", self.final_conversion_rate),
            ("average_ticket", self.average_ticket),
            ("return_on_ad_spend", self.return_on_ad_spend),
            ("return_on_investment", self.return_on_investment),
            ("contribution_margin", self.contribution_margin),
        ]
        .into_iter()
        .filter(|(_, r)| !r.is_defined())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Computes every KPI for one funnel. Total: a zero denominator yields
/// [`Ratio::Undefined`] for the KPIs that divide by it and nothing else.
pub fn compute_kpis(raw: &FunnelMetrics) -> DerivedKpis {
    let total_cost = raw.total_cost();

    DerivedKpis {
        cost_per_lead: Ratio::divide(raw.traffic_spend, raw.leads_generated).rounded(),
        acquisition_cost: Ratio::divide(total_cost, raw.customers_generated).rounded(),
        click_through_rate: Ratio::percent(raw.clicks, raw.impressions).rounded(),
        capture_conversion_rate: Ratio::percent(raw.leads_generated, raw.visits).rounded(),
        final_conversion_rate: Ratio::percent(raw.customers_generated, raw.leads_generated)
            .rounded(),
        average_ticket: Ratio::divide(raw.gross_revenue, raw.customers_generated).rounded(),
        return_on_ad_spend: Ratio::divide(raw.gross_revenue, raw.traffic_spend).rounded(),
        return_on_investment: Ratio::percent(raw.net_profit(), total_cost).rounded(),
        contribution_margin: Ratio::percent(raw.net_revenue - raw.variable_costs, raw.net_revenue)
            .rounded(),
    }
}
