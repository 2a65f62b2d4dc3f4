//! Part-whole split of where a funnel's net revenue went.

use crate::domain::entities::funnel::FunnelMetrics;
use crate::domain::values::ratio::Ratio;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSegmentKind {
    TrafficSpend,
    FixedCosts,
    VariableCosts,
    NetProfit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSegment {
    pub kind: CostSegmentKind,
    pub value: f64,
    /// Percent of the breakdown total. Undefined for a negative segment.
    pub share: Ratio,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub total: f64,
    pub segments: Vec<CostSegment>,
}

impl CostBreakdown {
    /// The total only counts non-negative segments, so a loss-making funnel
    /// still gets a proportional split of its costs.
    pub fn from_metrics(raw: &FunnelMetrics) -> Self {
        let parts = [
            (CostSegmentKind::TrafficSpend, raw.traffic_spend),
            (CostSegmentKind::FixedCosts, raw.fixed_costs),
            (CostSegmentKind::VariableCosts, raw.variable_costs),
            (CostSegmentKind::NetProfit, raw.net_profit()),
        ];
        let total: f64 = parts.iter().map(|(_, v)| v.max(0.0)).sum();

        let segments = parts
            .into_iter()
            .map(|(kind, value)| CostSegment {
                kind,
                value,
                share: if value < 0.0 {
                    Ratio::Undefined
                } else {
                    Ratio::percent(value, total).rounded()
                },
            })
            .collect();

        Self { total, segments }
    }

    pub fn segment(&self, kind: CostSegmentKind) -> Option<&CostSegment> {
        self.segments.iter().find(|s| s.kind == kind)
    }
}
