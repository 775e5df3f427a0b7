use serde::Serialize;

use crate::scenario::ProjectionYears;
use crate::vendor_db::VendorRecord;

/// 관리 공수 환산 단가 [USD/h].
pub const ADMIN_HOURLY_RATE_USD: f64 = 75.0;
/// 연간 운영 주 수.
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// 기존 NAC 교체 시 구축비에 가산되는 이전 프리미엄 (비율).
pub const MIGRATION_PREMIUM: f64 = 0.25;

/// 연차별 누적 비용 체크포인트 [USD].
/// 요청한 분석 기간과 무관하게 항상 네 지점을 모두 계산하고, 호출자가 at()으로 고른다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostSchedule {
    /// 1년 누적 총비용 [USD]
    pub year1_usd: f64,
    /// 2년 누적 총비용 [USD]
    pub year2_usd: f64,
    /// 3년 누적 총비용 [USD]
    pub year3_usd: f64,
    /// 5년 누적 총비용 [USD]
    pub year5_usd: f64,
}

impl CostSchedule {
    /// 분석 기간에 해당하는 체크포인트 값을 돌려준다.
    pub fn at(&self, horizon: ProjectionYears) -> f64 {
        match horizon {
            ProjectionYears::One => self.year1_usd,
            ProjectionYears::Two => self.year2_usd,
            ProjectionYears::Three => self.year3_usd,
            ProjectionYears::Five => self.year5_usd,
        }
    }
}

/// 연간 라이선스 비용 [USD/년].
pub fn annual_license_usd(vendor: &VendorRecord, devices: i64) -> f64 {
    vendor.per_device_annual_usd() * devices as f64
}

/// 연간 운영 공수 비용 [USD/년]. 관리 공수가 낮을수록(자동화 수준이 높을수록) 작아진다.
pub fn annual_operations_usd(vendor: &VendorRecord, devices: i64) -> f64 {
    vendor.admin_hours_per_week_per_1k * (devices as f64 / 1000.0)
        * WEEKS_PER_YEAR
        * ADMIN_HOURLY_RATE_USD
}

/// 1회성 구축비 [USD]. 첫해 라이선스 × 벤더 계수. 기존 NAC 교체면 이전 프리미엄이 붙는다.
pub fn implementation_cost_usd(vendor: &VendorRecord, devices: i64, has_existing_nac: bool) -> f64 {
    let base = annual_license_usd(vendor, devices) * vendor.implementation_cost_factor;
    if has_existing_nac {
        base * (1.0 + MIGRATION_PREMIUM)
    } else {
        base
    }
}

/// 벤더의 누적 비용 스케줄을 계산한다.
/// 장치 수가 0 이하여도 오류 없이 산술 그대로 계산한다. 범위 검증은 호출 경계의 몫이다.
pub fn vendor_cost_schedule(
    vendor: &VendorRecord,
    devices: i64,
    has_existing_nac: bool,
) -> CostSchedule {
    let license = annual_license_usd(vendor, devices);
    let ops = annual_operations_usd(vendor, devices);
    let implementation = implementation_cost_usd(vendor, devices, has_existing_nac);
    let annual_run = license + ops;
    CostSchedule {
        year1_usd: implementation + annual_run,
        year2_usd: implementation + annual_run * 2.0,
        year3_usd: implementation + annual_run * 3.0,
        year5_usd: implementation + annual_run * 5.0,
    }
}
