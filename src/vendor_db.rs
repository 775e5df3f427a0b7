//! NAC 벤더 정적 참조 테이블과 조회 함수를 제공한다.
//! 가격/점수는 공개 자료 기반 참고치이며 실제 견적은 벤더 확인이 필요하다.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskReduction {
    /// 비인가 접근 차단 효과 [%]
    pub unauthorized_access_pct: f64,
    /// 측면 이동 차단 효과 [%]
    pub lateral_movement_pct: f64,
    /// 데이터 유출 방지 효과 [%]
    pub data_breach_pct: f64,
    /// 내부자 위협 완화 효과 [%]
    pub insider_threat_pct: f64,
    /// 컴플라이언스 위반 방지 효과 [%]
    pub compliance_violation_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceCoverage {
    pub framework: &'static str,
    /// 프레임워크 통제 항목 커버리지 [%]
    pub coverage_pct: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct VendorRecord {
    pub id: &'static str,
    pub name: &'static str,
    /// 장치당 월 라이선스 단가 [USD/대/월]
    pub per_device_monthly_usd: f64,
    /// 1회성 구축비 계수 (첫해 라이선스 대비 비율, 0~1)
    pub implementation_cost_factor: f64,
    /// 장치 1,000대 기준 주당 관리 공수 [h/주]
    pub admin_hours_per_week_per_1k: f64,
    /// 정책/온보딩 자동화 수준 [%]
    pub automation_level_pct: f64,
    /// 제로 트러스트 성숙도 점수 (0~100)
    pub zero_trust_score: f64,
    pub risk_reduction: RiskReduction,
    pub compliance: &'static [ComplianceCoverage],
    /// 표준 구축 소요 기간 [일]
    pub deployment_days: u32,
}

impl VendorRecord {
    /// 장치당 연간 라이선스 단가 [USD/대/년].
    pub fn per_device_annual_usd(&self) -> f64 {
        self.per_device_monthly_usd * 12.0
    }

    /// 컴플라이언스 커버리지 평균 점수. 목록이 비어 있으면 0.
    pub fn aggregate_compliance_pct(&self) -> f64 {
        if self.compliance.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.compliance.iter().map(|c| c.coverage_pct).sum();
        sum / self.compliance.len() as f64
    }

    /// 특정 프레임워크의 커버리지를 조회한다 (대소문자 무시).
    pub fn framework_coverage(&self, framework: &str) -> Option<f64> {
        self.compliance
            .iter()
            .find(|c| c.framework.eq_ignore_ascii_case(framework))
            .map(|c| c.coverage_pct)
    }
}

/// 참조 데이터 스냅샷 버전. 테이블을 갱신하면 함께 올린다.
pub const DATASET_VERSION: &str = "2025.08";

pub fn vendors() -> &'static [VendorRecord] {
    VENDORS
}

pub fn find_vendor(id: &str) -> Option<&'static VendorRecord> {
    VENDORS
        .iter()
        .find(|v| v.id.eq_ignore_ascii_case(id) || v.name.eq_ignore_ascii_case(id))
}

const VENDORS: &[VendorRecord] = &[
    VendorRecord {
        id: "portnox",
        name: "Portnox CLEAR",
        per_device_monthly_usd: 4.0,
        implementation_cost_factor: 0.15,
        admin_hours_per_week_per_1k: 5.0,
        automation_level_pct: 90.0,
        zero_trust_score: 95.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 92.0,
            lateral_movement_pct: 89.0,
            data_breach_pct: 87.0,
            insider_threat_pct: 85.0,
            compliance_violation_pct: 90.0,
        },
        compliance: &[
            cc("NIST 800-53", 92.0),
            cc("ISO 27001", 88.0),
            cc("PCI-DSS", 90.0),
            cc("HIPAA", 91.0),
            cc("SOC 2", 93.0),
            cc("GDPR", 89.0),
        ],
        deployment_days: 7,
    },
    VendorRecord {
        id: "cisco",
        name: "Cisco ISE",
        per_device_monthly_usd: 12.0,
        implementation_cost_factor: 0.50,
        admin_hours_per_week_per_1k: 25.0,
        automation_level_pct: 55.0,
        zero_trust_score: 85.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 88.0,
            lateral_movement_pct: 85.0,
            data_breach_pct: 82.0,
            insider_threat_pct: 78.0,
            compliance_violation_pct: 84.0,
        },
        compliance: &[
            cc("NIST 800-53", 90.0),
            cc("ISO 27001", 85.0),
            cc("PCI-DSS", 88.0),
            cc("HIPAA", 84.0),
            cc("SOC 2", 80.0),
        ],
        deployment_days: 180,
    },
    VendorRecord {
        id: "aruba",
        name: "Aruba ClearPass",
        per_device_monthly_usd: 8.5,
        implementation_cost_factor: 0.40,
        admin_hours_per_week_per_1k: 20.0,
        automation_level_pct: 60.0,
        zero_trust_score: 82.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 85.0,
            lateral_movement_pct: 80.0,
            data_breach_pct: 78.0,
            insider_threat_pct: 75.0,
            compliance_violation_pct: 80.0,
        },
        compliance: &[
            cc("NIST 800-53", 86.0),
            cc("ISO 27001", 84.0),
            cc("PCI-DSS", 85.0),
            cc("HIPAA", 82.0),
        ],
        deployment_days: 90,
    },
    VendorRecord {
        id: "forescout",
        name: "Forescout eyeSight",
        per_device_monthly_usd: 3.5,
        implementation_cost_factor: 0.45,
        admin_hours_per_week_per_1k: 22.0,
        automation_level_pct: 48.0,
        zero_trust_score: 80.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 84.0,
            lateral_movement_pct: 82.0,
            data_breach_pct: 76.0,
            insider_threat_pct: 72.0,
            compliance_violation_pct: 75.0,
        },
        compliance: &[
            cc("NIST 800-53", 82.0),
            cc("ISO 27001", 80.0),
            cc("PCI-DSS", 81.0),
        ],
        deployment_days: 120,
    },
    VendorRecord {
        id: "juniper",
        name: "Juniper Mist Access Assurance",
        per_device_monthly_usd: 6.0,
        implementation_cost_factor: 0.30,
        admin_hours_per_week_per_1k: 12.0,
        automation_level_pct: 75.0,
        zero_trust_score: 88.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 86.0,
            lateral_movement_pct: 83.0,
            data_breach_pct: 80.0,
            insider_threat_pct: 77.0,
            compliance_violation_pct: 81.0,
        },
        compliance: &[
            cc("NIST 800-53", 84.0),
            cc("ISO 27001", 83.0),
            cc("SOC 2", 82.0),
        ],
        deployment_days: 45,
    },
    VendorRecord {
        id: "extreme",
        name: "ExtremeControl",
        per_device_monthly_usd: 1.0,
        implementation_cost_factor: 0.35,
        admin_hours_per_week_per_1k: 18.0,
        automation_level_pct: 50.0,
        zero_trust_score: 70.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 75.0,
            lateral_movement_pct: 70.0,
            data_breach_pct: 68.0,
            insider_threat_pct: 64.0,
            compliance_violation_pct: 69.0,
        },
        compliance: &[cc("NIST 800-53", 74.0), cc("ISO 27001", 72.0)],
        deployment_days: 60,
    },
    VendorRecord {
        id: "fortinet",
        name: "FortiNAC",
        per_device_monthly_usd: 2.5,
        implementation_cost_factor: 0.40,
        admin_hours_per_week_per_1k: 20.0,
        automation_level_pct: 52.0,
        zero_trust_score: 75.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 80.0,
            lateral_movement_pct: 76.0,
            data_breach_pct: 72.0,
            insider_threat_pct: 70.0,
            compliance_violation_pct: 74.0,
        },
        compliance: &[
            cc("NIST 800-53", 78.0),
            cc("ISO 27001", 76.0),
            cc("PCI-DSS", 79.0),
        ],
        deployment_days: 75,
    },
    VendorRecord {
        id: "microsoft",
        name: "Microsoft NPS",
        per_device_monthly_usd: 0.0,
        implementation_cost_factor: 0.25,
        admin_hours_per_week_per_1k: 35.0,
        automation_level_pct: 20.0,
        zero_trust_score: 65.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 60.0,
            lateral_movement_pct: 50.0,
            data_breach_pct: 45.0,
            insider_threat_pct: 48.0,
            compliance_violation_pct: 52.0,
        },
        compliance: &[cc("NIST 800-53", 60.0)],
        deployment_days: 30,
    },
    VendorRecord {
        id: "foxpass",
        name: "Foxpass",
        per_device_monthly_usd: 3.0,
        implementation_cost_factor: 0.10,
        admin_hours_per_week_per_1k: 4.0,
        automation_level_pct: 70.0,
        zero_trust_score: 72.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 70.0,
            lateral_movement_pct: 62.0,
            data_breach_pct: 60.0,
            insider_threat_pct: 58.0,
            compliance_violation_pct: 61.0,
        },
        compliance: &[cc("SOC 2", 75.0), cc("ISO 27001", 70.0)],
        deployment_days: 14,
    },
    VendorRecord {
        id: "securew2",
        name: "SecureW2",
        per_device_monthly_usd: 15.0,
        implementation_cost_factor: 0.20,
        admin_hours_per_week_per_1k: 6.0,
        automation_level_pct: 72.0,
        zero_trust_score: 78.0,
        risk_reduction: RiskReduction {
            unauthorized_access_pct: 78.0,
            lateral_movement_pct: 70.0,
            data_breach_pct: 72.0,
            insider_threat_pct: 66.0,
            compliance_violation_pct: 71.0,
        },
        compliance: &[
            cc("SOC 2", 80.0),
            cc("ISO 27001", 76.0),
            cc("HIPAA", 74.0),
        ],
        deployment_days: 21,
    },
];

const fn cc(framework: &'static str, coverage_pct: f64) -> ComplianceCoverage {
    ComplianceCoverage {
        framework,
        coverage_pct,
    }
}

// NOTE:
// - List prices and deployment durations follow published 2024-2025 vendor materials; negotiated quotes differ.
// - Risk-reduction and zero-trust figures are analyst-style composites kept on a common 0-100 scale for comparison only.
// - Microsoft NPS carries no per-device list price; its cost shows up through the operational-effort term instead.
