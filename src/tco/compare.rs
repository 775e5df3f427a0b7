use log::debug;
use serde::Serialize;

use crate::industry_db;
use crate::scenario::{ProjectionYears, Scenario};
use crate::tco::cost::{vendor_cost_schedule, CostSchedule};
use crate::tco::roi::{adjust_for_toggles, vendor_roi, RoiBreakdown};
use crate::vendor_db::{self, DATASET_VERSION};

// 종합 점수 가중치: 총비용 30%, 회수 기간 25%, 제로 트러스트 25%, 구축 속도 20%.
const WEIGHT_COST: f64 = 0.30;
const WEIGHT_PAYBACK: f64 = 0.25;
const WEIGHT_SECURITY: f64 = 0.25;
const WEIGHT_DEPLOYMENT: f64 = 0.20;

/// 비교 목록의 벤더 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub vendor_id: &'static str,
    pub vendor_name: &'static str,
    pub cost: CostSchedule,
    /// 토글 반영이 끝난 절감 분해
    pub roi: RoiBreakdown,
}

/// 선택한 벤더들을 입력 순서대로 계산한다.
/// 모르는 id는 건너뛰고 배치 전체를 실패시키지 않는다. 같은 입력이면 항상 같은 출력.
pub fn compare(vendor_ids: &[&str], scenario: &Scenario) -> Vec<ComparisonEntry> {
    let industry = industry_db::industry_or_general(&scenario.industry);
    let mut out = Vec::with_capacity(vendor_ids.len());
    for id in vendor_ids {
        let Some(vendor) = vendor_db::find_vendor(id) else {
            debug!("skipping unknown vendor id: {id}");
            continue;
        };
        let cost = vendor_cost_schedule(vendor, scenario.devices, scenario.has_existing_nac);
        let raw = vendor_roi(vendor, &cost, scenario.devices, industry);
        let roi = adjust_for_toggles(
            &raw,
            scenario.include_compliance,
            scenario.include_risk_reduction,
            cost.year1_usd,
        );
        out.push(ComparisonEntry {
            vendor_id: vendor.id,
            vendor_name: vendor.name,
            cost,
            roi,
        });
    }
    out
}

/// 경쟁 벤더 한 곳과의 차액.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RivalDelta {
    pub vendor_id: &'static str,
    pub vendor_name: &'static str,
    /// 선택한 기간의 누적 TCO [USD]
    pub tco_usd: f64,
    /// 기준 벤더 채택 시 절감액 [USD]. 음수면 기준 벤더가 더 비싸다.
    pub savings_usd: f64,
    /// 경쟁 벤더 TCO 대비 절감률 [%]
    pub savings_pct: f64,
}

/// 기준(홍보) 벤더 대비 절감 요약.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub reference_id: &'static str,
    pub reference_name: &'static str,
    pub reference_tco_usd: f64,
    pub reference_payback_years: Option<f64>,
    pub rivals: Vec<RivalDelta>,
}

/// 기준 벤더가 비교 목록에 없으면 None.
pub fn executive_summary(
    entries: &[ComparisonEntry],
    reference_id: &str,
    horizon: ProjectionYears,
) -> Option<ExecutiveSummary> {
    let reference = entries
        .iter()
        .find(|e| e.vendor_id.eq_ignore_ascii_case(reference_id))?;
    let reference_tco = reference.cost.at(horizon);
    let rivals = entries
        .iter()
        .filter(|e| e.vendor_id != reference.vendor_id)
        .map(|e| {
            let tco = e.cost.at(horizon);
            let savings = tco - reference_tco;
            let pct = if tco > 0.0 { savings / tco * 100.0 } else { 0.0 };
            RivalDelta {
                vendor_id: e.vendor_id,
                vendor_name: e.vendor_name,
                tco_usd: tco,
                savings_usd: savings,
                savings_pct: pct,
            }
        })
        .collect();
    Some(ExecutiveSummary {
        reference_id: reference.vendor_id,
        reference_name: reference.vendor_name,
        reference_tco_usd: reference_tco,
        reference_payback_years: reference.roi.payback_years,
        rivals,
    })
}

/// 벤더 종합 점수. 세부 점수는 모두 0~1 상대값이고 종합 점수만 0~100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorScore {
    pub vendor_id: &'static str,
    pub vendor_name: &'static str,
    /// 가중 종합 점수 (0~100)
    pub score: f64,
    pub cost_score: f64,
    pub payback_score: f64,
    pub security_score: f64,
    pub deployment_score: f64,
}

/// 비교 결과를 가중 점수로 줄 세운다. 점수 내림차순, 동점은 입력 순서 유지.
pub fn rank_vendors(entries: &[ComparisonEntry], horizon: ProjectionYears) -> Vec<VendorScore> {
    if entries.is_empty() {
        return Vec::new();
    }
    let min_cost = entries
        .iter()
        .map(|e| e.cost.at(horizon))
        .fold(f64::INFINITY, f64::min);
    let min_payback = entries
        .iter()
        .filter_map(|e| e.roi.payback_years)
        .fold(f64::INFINITY, f64::min);
    let min_deploy = entries
        .iter()
        .filter_map(|e| vendor_db::find_vendor(e.vendor_id))
        .map(|v| v.deployment_days)
        .min()
        .unwrap_or(0);

    let mut out = Vec::with_capacity(entries.len());
    for e in entries {
        let Some(vendor) = vendor_db::find_vendor(e.vendor_id) else {
            continue;
        };
        let tco = e.cost.at(horizon);
        let cost_score = if tco > 0.0 { min_cost / tco } else { 1.0 };
        let payback_score = match e.roi.payback_years {
            Some(p) => min_payback / p,
            None => 0.0,
        };
        let security_score = vendor.zero_trust_score / 100.0;
        let deployment_score = if vendor.deployment_days > 0 {
            min_deploy as f64 / vendor.deployment_days as f64
        } else {
            1.0
        };
        let score = (cost_score * WEIGHT_COST
            + payback_score * WEIGHT_PAYBACK
            + security_score * WEIGHT_SECURITY
            + deployment_score * WEIGHT_DEPLOYMENT)
            * 100.0;
        out.push(VendorScore {
            vendor_id: e.vendor_id,
            vendor_name: e.vendor_name,
            score,
            cost_score,
            payback_score,
            security_score,
            deployment_score,
        });
    }
    out.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

/// CLI 표 출력과 --json 출력이 함께 쓰는 보고서 문서.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub dataset_version: &'static str,
    pub scenario: Scenario,
    pub entries: Vec<ComparisonEntry>,
    pub summary: Option<ExecutiveSummary>,
    pub ranking: Vec<VendorScore>,
}

/// 비교 실행 + 요약 + 순위를 한 문서로 묶는다.
pub fn build_report(vendor_ids: &[&str], scenario: &Scenario, reference_id: &str) -> ComparisonReport {
    let entries = compare(vendor_ids, scenario);
    let summary = executive_summary(&entries, reference_id, scenario.years);
    let ranking = rank_vendors(&entries, scenario.years);
    ComparisonReport {
        dataset_version: DATASET_VERSION,
        scenario: scenario.clone(),
        entries,
        summary,
        ranking,
    }
}
