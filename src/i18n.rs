use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPARISON: &str = "main_menu.comparison";
    pub const MAIN_MENU_VENDORS: &str = "main_menu.vendors";
    pub const MAIN_MENU_INDUSTRIES: &str = "main_menu.industries";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const COMPARISON_HEADING: &str = "comparison.heading";
    pub const PROMPT_DEVICES: &str = "prompt.devices";
    pub const PROMPT_USERS: &str = "prompt.users";
    pub const PROMPT_INDUSTRY: &str = "prompt.industry";
    pub const PROMPT_YEARS: &str = "prompt.years";
    pub const PROMPT_INCLUDE_COMPLIANCE: &str = "prompt.include_compliance";
    pub const PROMPT_INCLUDE_RISK: &str = "prompt.include_risk";
    pub const PROMPT_HAS_EXISTING: &str = "prompt.has_existing";
    pub const PROMPT_EXISTING_VENDOR: &str = "prompt.existing_vendor";
    pub const PROMPT_VENDOR_IDS: &str = "prompt.vendor_ids";
    pub const PROMPT_DEFAULT_HINT: &str = "prompt.default_hint";
    pub const INDUSTRY_KEY_LIST: &str = "comparison.industry_key_list";
    pub const VENDOR_ID_LIST: &str = "comparison.vendor_id_list";
    pub const VALIDATION_FAILED: &str = "comparison.validation_failed";
    pub const NO_VENDORS_RESOLVED: &str = "comparison.no_vendors_resolved";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_TCO_AT: &str = "result.tco_at";
    pub const RESULT_YEAR1: &str = "result.year1";
    pub const RESULT_YEAR2: &str = "result.year2";
    pub const RESULT_YEAR3: &str = "result.year3";
    pub const RESULT_YEAR5: &str = "result.year5";
    pub const RESULT_OPERATIONAL: &str = "result.operational";
    pub const RESULT_COMPLIANCE: &str = "result.compliance";
    pub const RESULT_BREACH: &str = "result.breach";
    pub const RESULT_TOTAL_SAVINGS: &str = "result.total_savings";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const PAYBACK_NOT_REACHABLE: &str = "result.payback_not_reachable";
    pub const YEARS_SUFFIX: &str = "unit.years";
    pub const DAYS_SUFFIX: &str = "unit.days";
    pub const SCORE_SUFFIX: &str = "unit.score";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_REFERENCE: &str = "summary.reference";
    pub const SUMMARY_REFERENCE_MISSING: &str = "summary.reference_missing";
    pub const SUMMARY_SAVINGS: &str = "summary.savings";

    pub const RANKING_HEADING: &str = "ranking.heading";

    pub const VENDOR_CATALOG_HEADING: &str = "vendor_catalog.heading";
    pub const PROMPT_VENDOR_DETAIL: &str = "vendor_catalog.prompt_detail";
    pub const VENDOR_NOT_FOUND: &str = "vendor_catalog.not_found";
    pub const VENDOR_PRICE: &str = "vendor_catalog.price";
    pub const VENDOR_IMPL_FACTOR: &str = "vendor_catalog.impl_factor";
    pub const VENDOR_ADMIN_HOURS: &str = "vendor_catalog.admin_hours";
    pub const VENDOR_AUTOMATION: &str = "vendor_catalog.automation";
    pub const VENDOR_ZERO_TRUST: &str = "vendor_catalog.zero_trust";
    pub const VENDOR_DEPLOYMENT: &str = "vendor_catalog.deployment";
    pub const VENDOR_RISK_HEADING: &str = "vendor_catalog.risk_heading";
    pub const RISK_UNAUTHORIZED: &str = "vendor_catalog.risk_unauthorized";
    pub const RISK_LATERAL: &str = "vendor_catalog.risk_lateral";
    pub const RISK_DATA_BREACH: &str = "vendor_catalog.risk_data_breach";
    pub const RISK_INSIDER: &str = "vendor_catalog.risk_insider";
    pub const RISK_COMPLIANCE: &str = "vendor_catalog.risk_compliance";
    pub const VENDOR_COMPLIANCE_HEADING: &str = "vendor_catalog.compliance_heading";
    pub const PROMPT_ALIGN_INDUSTRY: &str = "vendor_catalog.prompt_align_industry";
    pub const ALIGNMENT_HEADING: &str = "vendor_catalog.alignment_heading";
    pub const ALIGNMENT_MISSING: &str = "vendor_catalog.alignment_missing";

    pub const INDUSTRY_CATALOG_HEADING: &str = "industry_catalog.heading";
    pub const INDUSTRY_BREACH_COST: &str = "industry_catalog.breach_cost";
    pub const INDUSTRY_PROBABILITY: &str = "industry_catalog.probability";
    pub const INDUSTRY_MULTIPLIER: &str = "industry_catalog.multiplier";
    pub const INDUSTRY_FRAMEWORKS: &str = "industry_catalog.frameworks";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_PROMOTED: &str = "settings.current_promoted";
    pub const SETTINGS_CURRENT_VENDORS: &str = "settings.current_vendors";
    pub const SETTINGS_CURRENT_SCENARIO: &str = "settings.current_scenario";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const PROMPT_PROMOTED: &str = "settings.prompt_promoted";

    pub const HELP_COMPARISON: &str = "help.comparison";
    pub const HELP_VENDOR_CATALOG: &str = "help.vendor_catalog";
    pub const HELP_INDUSTRY_CATALOG: &str = "help.industry_catalog";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        MAIN_MENU_TITLE => "\n=== NAC TCO/ROI Analyzer ===",
        MAIN_MENU_COMPARISON => "1) TCO/ROI 비교 실행",
        MAIN_MENU_VENDORS => "2) 벤더 카탈로그",
        MAIN_MENU_INDUSTRIES => "3) 산업 프로파일",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        COMPARISON_HEADING => "\n-- TCO/ROI 비교 --",
        PROMPT_DEVICES => "장치 수 [대]",
        PROMPT_USERS => "사용자 수 [명]",
        PROMPT_INDUSTRY => "산업 키",
        PROMPT_YEARS => "분석 기간 [년] (1/2/3/5)",
        PROMPT_INCLUDE_COMPLIANCE => "컴플라이언스 절감 포함? (y/n)",
        PROMPT_INCLUDE_RISK => "침해 위험 절감 포함? (y/n)",
        PROMPT_HAS_EXISTING => "기존 NAC 교체? (y/n)",
        PROMPT_EXISTING_VENDOR => "기존 NAC 벤더 id (없으면 엔터)",
        PROMPT_VENDOR_IDS => "비교할 벤더 id (쉼표 구분)",
        PROMPT_DEFAULT_HINT => "엔터 = ",
        INDUSTRY_KEY_LIST => "사용 가능한 산업 키:",
        VENDOR_ID_LIST => "사용 가능한 벤더 id:",
        VALIDATION_FAILED => "시나리오 검증 실패:",
        NO_VENDORS_RESOLVED => "비교할 수 있는 벤더가 없습니다.",
        RESULT_HEADING => "\n-- 비교 결과 --",
        RESULT_TCO_AT => "선택 기간 누적 TCO:",
        RESULT_YEAR1 => "1년 누적:",
        RESULT_YEAR2 => "2년 누적:",
        RESULT_YEAR3 => "3년 누적:",
        RESULT_YEAR5 => "5년 누적:",
        RESULT_OPERATIONAL => "운영 절감(연):",
        RESULT_COMPLIANCE => "컴플라이언스 절감(연):",
        RESULT_BREACH => "침해 위험 절감(연):",
        RESULT_TOTAL_SAVINGS => "절감 합계(연):",
        RESULT_PAYBACK => "회수 기간:",
        PAYBACK_NOT_REACHABLE => "계산 불가 (절감이 비용에 도달하지 못함)",
        YEARS_SUFFIX => "년",
        DAYS_SUFFIX => "일",
        SCORE_SUFFIX => "점",
        SUMMARY_HEADING => "\n-- 기준 벤더 대비 요약 --",
        SUMMARY_REFERENCE => "기준 벤더:",
        SUMMARY_REFERENCE_MISSING => "기준 벤더가 비교 목록에 없어 요약을 건너뜁니다.",
        SUMMARY_SAVINGS => "절감",
        RANKING_HEADING => "\n-- 종합 순위 --",
        VENDOR_CATALOG_HEADING => "\n-- 벤더 카탈로그 --",
        PROMPT_VENDOR_DETAIL => "상세히 볼 벤더 id (엔터 = 목록만): ",
        VENDOR_NOT_FOUND => "해당 id의 벤더가 없습니다.",
        VENDOR_PRICE => "장치당 월 단가:",
        VENDOR_IMPL_FACTOR => "구축비 계수(첫해 라이선스 대비):",
        VENDOR_ADMIN_HOURS => "주당 관리 공수(1,000대 기준):",
        VENDOR_AUTOMATION => "자동화 수준:",
        VENDOR_ZERO_TRUST => "제로 트러스트 점수:",
        VENDOR_DEPLOYMENT => "구축 기간:",
        VENDOR_RISK_HEADING => "위험 감소율:",
        RISK_UNAUTHORIZED => "비인가 접근:",
        RISK_LATERAL => "측면 이동:",
        RISK_DATA_BREACH => "데이터 유출:",
        RISK_INSIDER => "내부자 위협:",
        RISK_COMPLIANCE => "컴플라이언스 위반:",
        VENDOR_COMPLIANCE_HEADING => "컴플라이언스 커버리지:",
        PROMPT_ALIGN_INDUSTRY => "정렬을 확인할 산업 키 (엔터 = 건너뜀): ",
        ALIGNMENT_HEADING => "산업 필수 프레임워크 커버리지:",
        ALIGNMENT_MISSING => "미지원",
        INDUSTRY_CATALOG_HEADING => "\n-- 산업 프로파일 --",
        INDUSTRY_BREACH_COST => "평균 침해 비용:",
        INDUSTRY_PROBABILITY => "연간 침해 확률:",
        INDUSTRY_MULTIPLIER => "컴플라이언스 가중치:",
        INDUSTRY_FRAMEWORKS => "필수 프레임워크:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_PROMOTED => "기준(홍보) 벤더:",
        SETTINGS_CURRENT_VENDORS => "기본 벤더 목록:",
        SETTINGS_CURRENT_SCENARIO => "기본 시나리오:",
        SETTINGS_OPTIONS => "1) 언어  2) 기본 시나리오  3) 기본 벤더 목록  4) 기준 벤더  0) 뒤로",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        PROMPT_LANGUAGE => "언어 코드 (ko/en): ",
        PROMPT_PROMOTED => "기준 벤더 id: ",
        HELP_COMPARISON => "도움말: 장치/사용자 수, 산업 키, 기간(1/2/3/5), 토글 3종을 입력하면 벤더별 누적 TCO와 연간 절감, 회수 기간을 계산합니다.",
        HELP_VENDOR_CATALOG => "도움말: 벤더 id를 입력하면 가격/점수/프레임워크 커버리지와 산업 정렬을 보여줍니다.",
        HELP_INDUSTRY_CATALOG => "도움말: 산업 키별 평균 침해 비용, 발생 확률, 필수 프레임워크를 보여줍니다.",
        HELP_SETTINGS => "도움말: 언어, 기본 시나리오, 기본 벤더 목록, 기준 벤더를 바꾸고 config.toml에 저장합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        MAIN_MENU_TITLE => "\n=== NAC TCO/ROI Analyzer ===",
        MAIN_MENU_COMPARISON => "1) Run TCO/ROI comparison",
        MAIN_MENU_VENDORS => "2) Vendor catalog",
        MAIN_MENU_INDUSTRIES => "3) Industry profiles",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        COMPARISON_HEADING => "\n-- TCO/ROI Comparison --",
        PROMPT_DEVICES => "Device count",
        PROMPT_USERS => "User count",
        PROMPT_INDUSTRY => "Industry key",
        PROMPT_YEARS => "Projection years (1/2/3/5)",
        PROMPT_INCLUDE_COMPLIANCE => "Include compliance savings? (y/n)",
        PROMPT_INCLUDE_RISK => "Include breach-risk savings? (y/n)",
        PROMPT_HAS_EXISTING => "Replacing an existing NAC? (y/n)",
        PROMPT_EXISTING_VENDOR => "Existing NAC vendor id (enter to skip)",
        PROMPT_VENDOR_IDS => "Vendor ids to compare (comma separated)",
        PROMPT_DEFAULT_HINT => "enter = ",
        INDUSTRY_KEY_LIST => "Available industry keys:",
        VENDOR_ID_LIST => "Available vendor ids:",
        VALIDATION_FAILED => "Scenario validation failed:",
        NO_VENDORS_RESOLVED => "No vendors could be resolved for comparison.",
        RESULT_HEADING => "\n-- Comparison Results --",
        RESULT_TCO_AT => "Cumulative TCO at horizon:",
        RESULT_YEAR1 => "Year 1 cumulative:",
        RESULT_YEAR2 => "Year 2 cumulative:",
        RESULT_YEAR3 => "Year 3 cumulative:",
        RESULT_YEAR5 => "Year 5 cumulative:",
        RESULT_OPERATIONAL => "Operational savings (annual):",
        RESULT_COMPLIANCE => "Compliance savings (annual):",
        RESULT_BREACH => "Breach-risk savings (annual):",
        RESULT_TOTAL_SAVINGS => "Total savings (annual):",
        RESULT_PAYBACK => "Payback period:",
        PAYBACK_NOT_REACHABLE => "not reachable (savings never cover cost)",
        YEARS_SUFFIX => "years",
        DAYS_SUFFIX => "days",
        SCORE_SUFFIX => "pts",
        SUMMARY_HEADING => "\n-- Savings vs. Reference Vendor --",
        SUMMARY_REFERENCE => "Reference vendor:",
        SUMMARY_REFERENCE_MISSING => "Reference vendor not in the comparison; skipping summary.",
        SUMMARY_SAVINGS => "savings",
        RANKING_HEADING => "\n-- Overall Ranking --",
        VENDOR_CATALOG_HEADING => "\n-- Vendor Catalog --",
        PROMPT_VENDOR_DETAIL => "Vendor id for details (enter = list only): ",
        VENDOR_NOT_FOUND => "No vendor with that id.",
        VENDOR_PRICE => "Per-device monthly price:",
        VENDOR_IMPL_FACTOR => "Implementation factor (of first-year license):",
        VENDOR_ADMIN_HOURS => "Admin hours/week (per 1,000 devices):",
        VENDOR_AUTOMATION => "Automation level:",
        VENDOR_ZERO_TRUST => "Zero-trust score:",
        VENDOR_DEPLOYMENT => "Deployment time:",
        VENDOR_RISK_HEADING => "Risk reduction:",
        RISK_UNAUTHORIZED => "Unauthorized access:",
        RISK_LATERAL => "Lateral movement:",
        RISK_DATA_BREACH => "Data breach:",
        RISK_INSIDER => "Insider threat:",
        RISK_COMPLIANCE => "Compliance violation:",
        VENDOR_COMPLIANCE_HEADING => "Compliance coverage:",
        PROMPT_ALIGN_INDUSTRY => "Industry key for alignment check (enter to skip): ",
        ALIGNMENT_HEADING => "Coverage of industry-required frameworks:",
        ALIGNMENT_MISSING => "not covered",
        INDUSTRY_CATALOG_HEADING => "\n-- Industry Profiles --",
        INDUSTRY_BREACH_COST => "Average breach cost:",
        INDUSTRY_PROBABILITY => "Annual breach probability:",
        INDUSTRY_MULTIPLIER => "Compliance multiplier:",
        INDUSTRY_FRAMEWORKS => "Required frameworks:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_PROMOTED => "Reference (promoted) vendor:",
        SETTINGS_CURRENT_VENDORS => "Default vendor list:",
        SETTINGS_CURRENT_SCENARIO => "Default scenario:",
        SETTINGS_OPTIONS => {
            "1) Language  2) Default scenario  3) Default vendors  4) Reference vendor  0) Back"
        }
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        PROMPT_LANGUAGE => "Language code (ko/en): ",
        PROMPT_PROMOTED => "Reference vendor id: ",
        HELP_COMPARISON => "Help: enter device/user counts, industry key, horizon (1/2/3/5) and the three toggles to get cumulative TCO, annual savings and payback per vendor.",
        HELP_VENDOR_CATALOG => "Help: enter a vendor id to see pricing, scores, framework coverage and industry alignment.",
        HELP_INDUSTRY_CATALOG => "Help: shows average breach cost, probability and required frameworks per industry key.",
        HELP_SETTINGS => "Help: change language, default scenario, default vendor list and reference vendor; saved to config.toml.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_cli_then_config() {
        assert_eq!(resolve_language("ko", Some("en-us")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
        assert_eq!(resolve_language("en-uk", None), "en-us");
    }

    #[test]
    fn built_in_packs_share_the_same_key_set() {
        let ko_pack = built_in_pack("ko").expect("ko pack");
        let en_pack = built_in_pack("en").expect("en pack");
        let mut ko_keys: Vec<&String> = ko_pack.keys().collect();
        let mut en_keys: Vec<&String> = en_pack.keys().collect();
        ko_keys.sort();
        en_keys.sort();
        assert_eq!(ko_keys, en_keys);
        for key in ko_pack.keys() {
            assert_ne!(ko(key), "[missing translation]", "코드 테이블에 없는 키: {key}");
        }
    }

    #[test]
    fn translator_without_pack_uses_code_tables() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t(keys::YEARS_SUFFIX), "년");
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
        // 알 수 없는 언어 코드는 한국어로 폴백한다.
        let tr = Translator::new("xx");
        assert_eq!(tr.language(), Language::Ko);
    }

    #[test]
    fn pack_values_override_code_tables() {
        let tr = Translator::new_with_pack("en-us", None);
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting.");
        assert_eq!(tr.lookup(keys::APP_EXIT), Some("Exiting.".to_string()));
        assert_eq!(tr.lookup("no.such.key"), None);
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[a]\nb = \"c\"").expect("map");
        assert_eq!(map.get("a.b").map(String::as_str), Some("c"));
    }
}
