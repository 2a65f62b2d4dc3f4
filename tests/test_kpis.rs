mod common;

use funnelkpi::domain::error::DomainError;
use funnelkpi::domain::values::kpis::{compute_kpis, DerivedKpis};
use funnelkpi::domain::values::ratio::Ratio;
use funnelkpi::domain::values::status::Status;

fn all_values(k: &DerivedKpis) -> Vec<Ratio> {
    vec![
        k.cost_per_lead,
        k.acquisition_cost,
        k.click_through_rate,
        k.capture_conversion_rate,
        k.final_conversion_rate,
        k.average_ticket,
        k.return_on_ad_spend,
        k.return_on_investment,
        k.contribution_margin,
    ]
}

#[test]
fn test_launch_reference_values() {
    let k = compute_kpis(&common::launch_metrics());
    assert_eq!(k.cost_per_lead, Ratio::Defined(20.0));
    // (5000 + 2000 + 1500) / 25
    assert_eq!(k.acquisition_cost, Ratio::Defined(340.0));
    assert_eq!(k.click_through_rate, Ratio::Defined(5.0));
    assert_eq!(k.capture_conversion_rate, Ratio::Defined(50.0));
    assert_eq!(k.final_conversion_rate, Ratio::Defined(10.0));
    assert_eq!(k.average_ticket, Ratio::Defined(500.0));
    assert_eq!(k.return_on_ad_spend, Ratio::Defined(2.5));
    assert_eq!(k.return_on_investment, Ratio::Defined(17.65));
    assert_eq!(k.contribution_margin, Ratio::Defined(85.0));
}

#[test]
fn test_secret_room_reference_values() {
    let k = compute_kpis(&common::secret_room_metrics());
    assert_eq!(k.return_on_investment, Ratio::Defined(118.18));
    assert_eq!(k.return_on_ad_spend, Ratio::Defined(5.0));
    assert_eq!(k.final_conversion_rate, Ratio::Defined(20.0));
    assert_eq!(k.acquisition_cost, Ratio::Defined(183.33));
    assert_eq!(k.contribution_margin, Ratio::Defined(91.67));
}

#[test]
fn test_roas_is_gross_revenue_over_spend() {
    let mut raw = common::launch_metrics();
    raw.gross_revenue = 7300.0;
    raw.traffic_spend = 2000.0;
    assert_eq!(compute_kpis(&raw).return_on_ad_spend, Ratio::Defined(3.65));
}

#[test]
fn test_defined_kpis_have_two_decimals() {
    let oi = common::setup();
    for name in oi.funnels() {
        let report = oi.report(&name).unwrap();
        for value in all_values(&report.kpis) {
            let v = value.value().expect("reference data has no zero denominators");
            assert!(v.is_finite());
            let scaled = v * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{name}: {v}");
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    let raw = common::secret_room_metrics();
    let first = all_values(&compute_kpis(&raw));
    let second = all_values(&compute_kpis(&raw));
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(
            a.value().map(f64::to_bits),
            b.value().map(f64::to_bits)
        );
    }
}

#[test]
fn test_zero_customers_sentinel_is_per_denominator() {
    let mut raw = common::launch_metrics();
    raw.customers_generated = 0.0;
    let k = compute_kpis(&raw);
    assert_eq!(k.acquisition_cost, Ratio::Undefined);
    assert_eq!(k.average_ticket, Ratio::Undefined);
    assert_eq!(k.final_conversion_rate, Ratio::Defined(0.0));
    assert_eq!(k.return_on_investment, Ratio::Defined(17.65));
}

#[test]
fn test_report_statuses() {
    let oi = common::setup();

    let launch = oi.report("Lançamento").unwrap();
    assert_eq!(launch.statuses.roi, Status::Poor);
    assert_eq!(launch.statuses.roas, Status::Medium);
    assert_eq!(launch.statuses.conversion, Status::Medium);

    let room = oi.report("Sala-Reunião Secreta").unwrap();
    assert_eq!(room.statuses.roi, Status::Good);
    assert_eq!(room.statuses.roas, Status::Good);
    assert_eq!(room.statuses.conversion, Status::Good);

    let low = oi.report("Low Ticket").unwrap();
    assert_eq!(low.kpis.return_on_investment, Ratio::Defined(68.42));
    assert_eq!(low.statuses.roi, Status::Medium);
}

#[test]
fn test_report_unknown_funnel() {
    let oi = common::setup();
    let err = oi.report("Webinar").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[test]
fn test_compare_follows_repository_order() {
    let oi = common::setup();
    let rows = oi.compare();
    let names: Vec<&str> = rows.iter().map(|r| r.funnel.as_str()).collect();
    assert_eq!(names, vec!["Lançamento", "Sala-Reunião Secreta", "VSL", "Low Ticket"]);
    assert_eq!(rows[2].roi, Ratio::Defined(14.29));
    assert_eq!(rows[2].net_revenue, 8000.0);
    assert_eq!(rows[3].roas, Ratio::Defined(4.0));
}

#[test]
fn test_costs_for_selected_funnel() {
    let oi = common::setup();
    let costs = oi.costs("VSL").unwrap();
    assert_eq!(costs.total, 8000.0);
    let values: Vec<f64> = costs.segments.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![4000.0, 1800.0, 1200.0, 1000.0]);
    assert_eq!(costs.segments[0].share, Ratio::Defined(50.0));
    assert_eq!(costs.segments[3].share, Ratio::Defined(12.5));
}
