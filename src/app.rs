use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::scenario::{self, Scenario};
use crate::tco;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 시나리오 경계 검증 오류
    Scenario(scenario::ScenarioError),
    /// 보고서 JSON 직렬화 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Scenario(e) => write!(f, "시나리오 오류: {e}"),
            AppError::Json(e) => write!(f, "JSON 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<scenario::ScenarioError> for AppError {
    fn from(value: scenario::ScenarioError) -> Self {
        AppError::Scenario(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Comparison => ui_cli::handle_comparison(tr, config)?,
            MenuChoice::VendorCatalog => ui_cli::handle_vendor_catalog(tr)?,
            MenuChoice::IndustryCatalog => ui_cli::handle_industry_catalog(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 대화형 메뉴 없이 비교 보고서 한 건을 출력한다. 시나리오는 출력 전에 검증한다.
pub fn run_report(
    config: &Config,
    tr: &Translator,
    scenario: &Scenario,
    vendor_ids: &[String],
    json: bool,
) -> Result<(), AppError> {
    scenario.validate()?;
    let requested = scenario::normalize_vendor_ids(vendor_ids);
    let id_refs: Vec<&str> = requested.iter().map(String::as_str).collect();
    let report = tco::build_report(&id_refs, scenario, &config.promoted_vendor);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if report.entries.is_empty() {
        println!("{}", tr.t(i18n::keys::NO_VENDORS_RESOLVED));
        return Ok(());
    }
    ui_cli::print_report(tr, &report);
    Ok(())
}
