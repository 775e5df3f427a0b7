//! 산업별 침해 비용/발생 확률 테이블과 조회 함수를 제공한다.
//! 컴플라이언스 절감 계산의 산업 가중치도 여기서 온다.

use crate::vendor_db::VendorRecord;

#[derive(Debug, Clone, Copy)]
pub struct IndustryProfile {
    pub key: &'static str,
    pub name: &'static str,
    /// 평균 침해 사고 비용 [USD]
    pub avg_breach_cost_usd: f64,
    /// 연간 침해 발생 확률 (0~1)
    pub breach_probability: f64,
    /// 컴플라이언스 절감 산업 가중치 (1.0 = 기준)
    pub compliance_cost_multiplier: f64,
    /// 해당 산업에서 통상 요구되는 프레임워크
    pub required_frameworks: &'static [&'static str],
}

/// 알 수 없는 산업 키가 계산 단계까지 내려왔을 때 쓰는 폴백 프로파일.
pub const GENERAL: IndustryProfile = IndustryProfile {
    key: "general",
    name: "General / Cross-industry",
    avg_breach_cost_usd: 4_500_000.0,
    breach_probability: 0.20,
    compliance_cost_multiplier: 1.0,
    required_frameworks: &["ISO 27001"],
};

pub fn industries() -> &'static [IndustryProfile] {
    INDUSTRIES
}

pub fn find_industry(key: &str) -> Option<&'static IndustryProfile> {
    INDUSTRIES
        .iter()
        .find(|i| i.key.eq_ignore_ascii_case(key) || i.name.eq_ignore_ascii_case(key))
}

/// 키가 테이블에 없으면 GENERAL을 돌려준다. 경계 검증과 별개로 계산 계층을 전함수로 유지한다.
pub fn industry_or_general(key: &str) -> &'static IndustryProfile {
    find_industry(key).unwrap_or(&GENERAL)
}

/// 산업 필수 프레임워크별 벤더 커버리지 목록. 벤더가 다루지 않는 항목은 None.
pub fn framework_alignment(
    vendor: &VendorRecord,
    industry: &IndustryProfile,
) -> Vec<(&'static str, Option<f64>)> {
    industry
        .required_frameworks
        .iter()
        .map(|fw| (*fw, vendor.framework_coverage(fw)))
        .collect()
}

const INDUSTRIES: &[IndustryProfile] = &[
    IndustryProfile {
        key: "healthcare",
        name: "Healthcare",
        avg_breach_cost_usd: 10_930_000.0,
        breach_probability: 0.28,
        compliance_cost_multiplier: 1.4,
        required_frameworks: &["HIPAA", "NIST 800-53", "ISO 27001"],
    },
    IndustryProfile {
        key: "financial_services",
        name: "Financial Services",
        avg_breach_cost_usd: 5_970_000.0,
        breach_probability: 0.24,
        compliance_cost_multiplier: 1.5,
        required_frameworks: &["PCI-DSS", "SOX", "ISO 27001"],
    },
    IndustryProfile {
        key: "retail",
        name: "Retail",
        avg_breach_cost_usd: 3_620_000.0,
        breach_probability: 0.20,
        compliance_cost_multiplier: 1.1,
        required_frameworks: &["PCI-DSS", "SOC 2"],
    },
    IndustryProfile {
        key: "manufacturing",
        name: "Manufacturing",
        avg_breach_cost_usd: 4_990_000.0,
        breach_probability: 0.22,
        compliance_cost_multiplier: 0.9,
        required_frameworks: &["ISO 27001", "NIST 800-53"],
    },
    IndustryProfile {
        key: "education",
        name: "Education",
        avg_breach_cost_usd: 3_790_000.0,
        breach_probability: 0.26,
        compliance_cost_multiplier: 0.8,
        required_frameworks: &["NIST 800-53", "ISO 27001"],
    },
    IndustryProfile {
        key: "government",
        name: "Government",
        avg_breach_cost_usd: 4_910_000.0,
        breach_probability: 0.21,
        compliance_cost_multiplier: 1.6,
        required_frameworks: &["NIST 800-53", "ISO 27001"],
    },
    IndustryProfile {
        key: "technology",
        name: "Technology",
        avg_breach_cost_usd: 5_040_000.0,
        breach_probability: 0.23,
        compliance_cost_multiplier: 1.0,
        required_frameworks: &["SOC 2", "ISO 27001"],
    },
    IndustryProfile {
        key: "energy_utilities",
        name: "Energy & Utilities",
        avg_breach_cost_usd: 6_720_000.0,
        breach_probability: 0.25,
        compliance_cost_multiplier: 1.3,
        required_frameworks: &["NIST 800-53", "ISO 27001"],
    },
];

// NOTE:
// - Average breach costs track publicly reported industry figures (circa 2023-2024); probabilities and
//   compliance multipliers are composites on a common scale, tuned for relative comparison.
// - Required-framework lists name the frameworks a NAC rollout is usually asked about in that industry;
//   they are not a legal checklist.
