use serde::{Deserialize, Serialize};

use crate::industry_db;

/// 분석에서 허용하는 장치 수 상한.
pub const MAX_DEVICES: i64 = 10_000_000;
/// 분석에서 허용하는 사용자 수 상한.
pub const MAX_USERS: i64 = 1_000_000;

/// 허용되는 분석 기간 집합 {1, 2, 3, 5}년을 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ProjectionYears {
    One,
    Two,
    Three,
    Five,
}

impl ProjectionYears {
    pub const fn as_years(&self) -> u32 {
        match self {
            ProjectionYears::One => 1,
            ProjectionYears::Two => 2,
            ProjectionYears::Three => 3,
            ProjectionYears::Five => 5,
        }
    }

    pub fn from_years(years: u32) -> Option<Self> {
        match years {
            1 => Some(ProjectionYears::One),
            2 => Some(ProjectionYears::Two),
            3 => Some(ProjectionYears::Three),
            5 => Some(ProjectionYears::Five),
            _ => None,
        }
    }
}

impl TryFrom<u32> for ProjectionYears {
    type Error = ScenarioError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        ProjectionYears::from_years(value).ok_or(ScenarioError::UnsupportedHorizon(value))
    }
}

impl From<ProjectionYears> for u32 {
    fn from(value: ProjectionYears) -> Self {
        value.as_years()
    }
}

/// 시나리오 경계 검증에서 발생하는 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// 장치 수가 0 이하
    DevicesNotPositive(i64),
    /// 장치 수 상한 초과
    DevicesAboveLimit(i64),
    /// 사용자 수가 0 이하
    UsersNotPositive(i64),
    /// 사용자 수 상한 초과
    UsersAboveLimit(i64),
    /// 산업 키가 빈 문자열
    EmptyIndustry,
    /// 산업 테이블에 없는 키
    UnknownIndustry(String),
    /// 1/2/3/5 외의 분석 기간
    UnsupportedHorizon(u32),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::DevicesNotPositive(n) => {
                write!(f, "장치 수는 1 이상이어야 합니다 (입력값: {n})")
            }
            ScenarioError::DevicesAboveLimit(n) => {
                write!(f, "장치 수가 한도 {MAX_DEVICES}을 초과했습니다 (입력값: {n})")
            }
            ScenarioError::UsersNotPositive(n) => {
                write!(f, "사용자 수는 1 이상이어야 합니다 (입력값: {n})")
            }
            ScenarioError::UsersAboveLimit(n) => {
                write!(f, "사용자 수가 한도 {MAX_USERS}을 초과했습니다 (입력값: {n})")
            }
            ScenarioError::EmptyIndustry => write!(f, "산업 키가 비어 있습니다."),
            ScenarioError::UnknownIndustry(k) => write!(f, "알 수 없는 산업 키: {k}"),
            ScenarioError::UnsupportedHorizon(y) => {
                write!(f, "지원하지 않는 분석 기간: {y}년 (1/2/3/5만 가능)")
            }
        }
    }
}

impl std::error::Error for ScenarioError {}

/// 한 번의 비교 계산을 정의하는 입력 값 묶음.
/// 계산 모듈은 이 값을 검증 없이 산술 그대로 소비하고, 검증은 호출 경계에서 수행한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub devices: i64,
    pub users: i64,
    /// industry_db 테이블의 키 (예: healthcare)
    pub industry: String,
    pub years: ProjectionYears,
    /// false면 집계 단계에서 컴플라이언스 절감을 0으로 만든다.
    pub include_compliance: bool,
    /// false면 집계 단계에서 침해 위험 절감을 0으로 만든다.
    pub include_risk_reduction: bool,
    /// 기존 NAC 교체 여부. 구축비에 이전 프리미엄이 붙는다.
    pub has_existing_nac: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_vendor_id: Option<String>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            devices: 500,
            users: 1000,
            industry: "healthcare".to_string(),
            years: ProjectionYears::Three,
            include_compliance: true,
            include_risk_reduction: true,
            has_existing_nac: false,
            existing_vendor_id: None,
        }
    }
}

impl Scenario {
    /// 모든 검증 위반을 필드 순서대로 수집한다. 비어 있으면 유효한 시나리오다.
    pub fn issues(&self) -> Vec<ScenarioError> {
        let mut out = Vec::new();
        if self.devices <= 0 {
            out.push(ScenarioError::DevicesNotPositive(self.devices));
        } else if self.devices > MAX_DEVICES {
            out.push(ScenarioError::DevicesAboveLimit(self.devices));
        }
        if self.users <= 0 {
            out.push(ScenarioError::UsersNotPositive(self.users));
        } else if self.users > MAX_USERS {
            out.push(ScenarioError::UsersAboveLimit(self.users));
        }
        let industry = self.industry.trim();
        if industry.is_empty() {
            out.push(ScenarioError::EmptyIndustry);
        } else if industry_db::find_industry(industry).is_none() {
            out.push(ScenarioError::UnknownIndustry(industry.to_string()));
        }
        out
    }

    /// 첫 번째 위반을 오류로 돌려준다.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        match self.issues().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// 벤더 id 목록을 정리한다: 앞뒤 공백 제거, 소문자화, 빈 항목 제거, 순서 유지 중복 제거.
pub fn normalize_vendor_ids(ids: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for raw in ids {
        let id = raw.trim().to_lowercase();
        if id.is_empty() || out.contains(&id) {
            continue;
        }
        out.push(id);
    }
    out
}
