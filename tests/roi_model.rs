//! 절감 분해(운영/컴플라이언스/침해 위험)와 토글, 회수 기간 검증.

use nac_tco_analyzer::industry_db::IndustryProfile;
use nac_tco_analyzer::tco::{
    adjust_for_toggles, payback_years, vendor_cost_schedule, vendor_roi,
    weighted_risk_reduction_pct, BASELINE_ADMIN_HOURS_PER_1K,
};
use nac_tco_analyzer::vendor_db::{ComplianceCoverage, RiskReduction, VendorRecord};

const EPS: f64 = 1e-6;

fn sample_vendor() -> VendorRecord {
    VendorRecord {
        id: "sample",
        name: "Sample NAC",
        per_device_monthly_usd: 5.0,
        implementation_cost_factor: 0.30,
        admin_hours_per_week_per_1k: 10.0,
        automation_level_pct: 80.0,
        zero_trust_score: 90.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 80.0,
            lateral_movement_pct: 70.0,
            data_breach_pct: 60.0,
            insider_threat_pct: 50.0,
            compliance_violation_pct: 40.0,
        },
        compliance: &[
            ComplianceCoverage {
                framework: "ISO 27001",
                coverage_pct: 80.0,
            },
            ComplianceCoverage {
                framework: "SOC 2",
                coverage_pct: 90.0,
            },
        ],
        deployment_days: 30,
    }
}

fn sample_industry() -> IndustryProfile {
    IndustryProfile {
        key: "test",
        name: "Test Industry",
        avg_breach_cost_usd: 1_000_000.0,
        breach_probability: 0.25,
        compliance_cost_multiplier: 2.0,
        required_frameworks: &["ISO 27001"],
    }
}

#[test]
fn operational_savings_combine_labor_delta_and_automation() {
    let v = sample_vendor();
    let industry = sample_industry();
    let cost = vendor_cost_schedule(&v, 500, false);
    let roi = vendor_roi(&v, &cost, 500, &industry);
    // 기준 78,000 - 벤더 19,500 = 58,500, 자동화 500 × 2 × 0.8 = 800
    assert!(
        (roi.operational_savings_usd - 59_300.0).abs() < EPS,
        "expected 59300, got {}",
        roi.operational_savings_usd
    );
}

#[test]
fn labor_savings_clamp_at_zero_for_heavier_vendors() {
    let mut v = sample_vendor();
    v.admin_hours_per_week_per_1k = BASELINE_ADMIN_HOURS_PER_1K + 10.0;
    v.automation_level_pct = 20.0;
    let industry = sample_industry();
    let cost = vendor_cost_schedule(&v, 500, false);
    let roi = vendor_roi(&v, &cost, 500, &industry);
    // 기준보다 손이 많이 가는 벤더라도 음수 절감은 없다. 자동화 몫 200만 남는다.
    assert!(
        (roi.operational_savings_usd - 200.0).abs() < EPS,
        "expected 200, got {}",
        roi.operational_savings_usd
    );
}

#[test]
fn compliance_savings_scale_with_industry_multiplier() {
    let v = sample_vendor();
    let cost = vendor_cost_schedule(&v, 500, false);
    let doubled = sample_industry();
    let mut flat = sample_industry();
    flat.compliance_cost_multiplier = 1.0;
    let roi_doubled = vendor_roi(&v, &cost, 500, &doubled);
    let roi_flat = vendor_roi(&v, &cost, 500, &flat);
    // 평균 커버리지 85점 × 2,000 USD/점 × 가중치
    assert!(
        (roi_doubled.compliance_savings_usd - 340_000.0).abs() < EPS,
        "expected 340000, got {}",
        roi_doubled.compliance_savings_usd
    );
    assert!(
        (roi_doubled.compliance_savings_usd - 2.0 * roi_flat.compliance_savings_usd).abs() < EPS
    );
}

#[test]
fn breach_savings_follow_cost_probability_and_weighted_reduction() {
    let v = sample_vendor();
    let industry = sample_industry();
    let cost = vendor_cost_schedule(&v, 500, false);
    let roi = vendor_roi(&v, &cost, 500, &industry);
    // 1,000,000 × 0.25 × 63.5%
    assert!(
        (roi.breach_risk_savings_usd - 158_750.0).abs() < EPS,
        "expected 158750, got {}",
        roi.breach_risk_savings_usd
    );
    let total = roi.operational_savings_usd + roi.compliance_savings_usd + roi.breach_risk_savings_usd;
    assert!((roi.total_annual_savings_usd - total).abs() < EPS);
}

#[test]
fn weighted_reduction_is_category_weighted_mean() {
    let v = sample_vendor();
    let weighted = weighted_risk_reduction_pct(&v.risk_reduction);
    assert!((weighted - 63.5).abs() < EPS, "expected 63.5, got {weighted}");
    let full = RiskReduction {
        unauthorized_access_pct: 100.0,
        lateral_movement_pct: 100.0,
        data_breach_pct: 100.0,
        insider_threat_pct: 100.0,
        compliance_violation_pct: 100.0,
    };
    assert!((weighted_risk_reduction_pct(&full) - 100.0).abs() < EPS);
}

#[test]
fn payback_requires_positive_cost_and_savings() {
    assert_eq!(payback_years(0.0, 100.0), None);
    assert_eq!(payback_years(-1.0, 100.0), None);
    assert_eq!(payback_years(100.0, 0.0), None);
    assert_eq!(payback_years(100.0, -5.0), None);
    let p = payback_years(120.0, 60.0).expect("payback");
    assert!((p - 2.0).abs() < EPS, "expected 2.0, got {p}");
}

#[test]
fn toggles_zero_categories_and_recompute_totals() {
    let v = sample_vendor();
    let industry = sample_industry();
    let cost = vendor_cost_schedule(&v, 500, false);
    let roi = vendor_roi(&v, &cost, 500, &industry);

    let no_compliance = adjust_for_toggles(&roi, false, true, cost.year1_usd);
    assert_eq!(no_compliance.compliance_savings_usd, 0.0);
    assert!(
        (no_compliance.total_annual_savings_usd
            - (roi.operational_savings_usd + roi.breach_risk_savings_usd))
            .abs()
            < EPS
    );
    let p = no_compliance.payback_years.expect("payback");
    assert!(
        (p - cost.year1_usd / no_compliance.total_annual_savings_usd).abs() < EPS,
        "payback must be recomputed from the reduced total, got {p}"
    );

    let neither = adjust_for_toggles(&roi, false, false, cost.year1_usd);
    assert_eq!(neither.compliance_savings_usd, 0.0);
    assert_eq!(neither.breach_risk_savings_usd, 0.0);
    assert!(
        (neither.total_annual_savings_usd - roi.operational_savings_usd).abs() < EPS,
        "운영 절감은 토글과 무관하게 남아야 한다"
    );
}

#[test]
fn toggles_can_flip_payback_to_none() {
    // 운영 절감이 0인 벤더: 관리 공수가 기준과 같고 자동화도 0.
    let mut v = sample_vendor();
    v.admin_hours_per_week_per_1k = BASELINE_ADMIN_HOURS_PER_1K;
    v.automation_level_pct = 0.0;
    let industry = sample_industry();
    let cost = vendor_cost_schedule(&v, 500, false);
    let roi = vendor_roi(&v, &cost, 500, &industry);
    assert!(roi.payback_years.is_some(), "컴플라이언스/위험 절감만으로도 회수는 가능");

    let neither = adjust_for_toggles(&roi, false, false, cost.year1_usd);
    assert_eq!(neither.total_annual_savings_usd, 0.0);
    assert_eq!(neither.payback_years, None);
}
