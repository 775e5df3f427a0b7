use serde::Serialize;

use crate::industry_db::IndustryProfile;
use crate::tco::cost::{annual_operations_usd, CostSchedule, ADMIN_HOURLY_RATE_USD, WEEKS_PER_YEAR};
use crate::vendor_db::{RiskReduction, VendorRecord};

/// 전통적 NAC 운영의 기준 관리 공수 [h/주, 장치 1,000대당].
pub const BASELINE_ADMIN_HOURS_PER_1K: f64 = 40.0;
/// 자동화 절감 환산 단가 [USD/대/년, 자동화 100% 기준].
pub const AUTOMATION_SAVING_USD_PER_DEVICE: f64 = 2.0;
/// 컴플라이언스 커버리지 1점당 환산 절감액 [USD/년].
pub const COMPLIANCE_USD_PER_POINT: f64 = 2000.0;

// 위험 감소 카테고리 가중치. 합계 1.0 유지.
const RISK_WEIGHT_UNAUTHORIZED: f64 = 0.25;
const RISK_WEIGHT_LATERAL: f64 = 0.20;
const RISK_WEIGHT_DATA_BREACH: f64 = 0.30;
const RISK_WEIGHT_INSIDER: f64 = 0.15;
const RISK_WEIGHT_COMPLIANCE: f64 = 0.10;

/// 연간 절감 분해와 회수 기간.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiBreakdown {
    /// 운영 절감 [USD/년]. 토글과 무관하게 항상 포함된다.
    pub operational_savings_usd: f64,
    /// 컴플라이언스 절감 [USD/년]
    pub compliance_savings_usd: f64,
    /// 침해 위험 절감 [USD/년]
    pub breach_risk_savings_usd: f64,
    /// 절감 합계 [USD/년]
    pub total_annual_savings_usd: f64,
    /// 회수 기간 [년]. None이면 계산 불가(절감 합계가 0 이하이거나 1년차 비용이 0).
    pub payback_years: Option<f64>,
}

/// 카테고리 가중 평균 위험 감소율 [%].
pub fn weighted_risk_reduction_pct(rr: &RiskReduction) -> f64 {
    rr.unauthorized_access_pct * RISK_WEIGHT_UNAUTHORIZED
        + rr.lateral_movement_pct * RISK_WEIGHT_LATERAL
        + rr.data_breach_pct * RISK_WEIGHT_DATA_BREACH
        + rr.insider_threat_pct * RISK_WEIGHT_INSIDER
        + rr.compliance_violation_pct * RISK_WEIGHT_COMPLIANCE
}

/// 회수 기간 [년]. 1년차 비용과 절감이 모두 양수일 때만 값을 돌려준다.
/// 0 나눗셈이나 NaN을 밖으로 내보내지 않는다.
pub fn payback_years(year1_cost_usd: f64, annual_savings_usd: f64) -> Option<f64> {
    if year1_cost_usd > 0.0 && annual_savings_usd > 0.0 {
        Some(year1_cost_usd / annual_savings_usd)
    } else {
        None
    }
}

/// 세 절감 범주를 모두 무조건 계산한다.
/// 토글 반영은 adjust_for_toggles가 맡는다 (계산 후 0 처리 계약).
pub fn vendor_roi(
    vendor: &VendorRecord,
    cost: &CostSchedule,
    devices: i64,
    industry: &IndustryProfile,
) -> RoiBreakdown {
    let baseline_ops = BASELINE_ADMIN_HOURS_PER_1K * (devices as f64 / 1000.0)
        * WEEKS_PER_YEAR
        * ADMIN_HOURLY_RATE_USD;
    let labor_savings = (baseline_ops - annual_operations_usd(vendor, devices)).max(0.0);
    let automation_savings =
        devices as f64 * AUTOMATION_SAVING_USD_PER_DEVICE * vendor.automation_level_pct / 100.0;
    let operational = labor_savings + automation_savings;

    let compliance = vendor.aggregate_compliance_pct()
        * COMPLIANCE_USD_PER_POINT
        * industry.compliance_cost_multiplier;

    let breach = industry.avg_breach_cost_usd
        * industry.breach_probability
        * weighted_risk_reduction_pct(&vendor.risk_reduction)
        / 100.0;

    let total = operational + compliance + breach;
    RoiBreakdown {
        operational_savings_usd: operational,
        compliance_savings_usd: compliance,
        breach_risk_savings_usd: breach,
        total_annual_savings_usd: total,
        payback_years: payback_years(cost.year1_usd, total),
    }
}

/// 토글을 반영한 절감 분해를 만든다. 끈 범주는 0으로 바꾸고 합계와 회수 기간을 다시 계산한다.
pub fn adjust_for_toggles(
    roi: &RoiBreakdown,
    include_compliance: bool,
    include_risk_reduction: bool,
    year1_cost_usd: f64,
) -> RoiBreakdown {
    let compliance = if include_compliance {
        roi.compliance_savings_usd
    } else {
        0.0
    };
    let breach = if include_risk_reduction {
        roi.breach_risk_savings_usd
    } else {
        0.0
    };
    let total = roi.operational_savings_usd + compliance + breach;
    RoiBreakdown {
        operational_savings_usd: roi.operational_savings_usd,
        compliance_savings_usd: compliance,
        breach_risk_savings_usd: breach,
        total_annual_savings_usd: total,
        payback_years: payback_years(year1_cost_usd, total),
    }
}
