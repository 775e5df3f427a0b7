use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::industry_db::{self, IndustryProfile};
use crate::scenario::{normalize_vendor_ids, ProjectionYears, Scenario};
use crate::tco::{self, ComparisonReport};
use crate::vendor_db::{self, VendorRecord};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Comparison,
    VendorCatalog,
    IndustryCatalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPARISON));
    println!("{}", tr.t(keys::MAIN_MENU_VENDORS));
    println!("{}", tr.t(keys::MAIN_MENU_INDUSTRIES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Comparison),
            "2" => return Ok(MenuChoice::VendorCatalog),
            "3" => return Ok(MenuChoice::IndustryCatalog),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// TCO/ROI 비교 메뉴를 처리한다.
pub fn handle_comparison(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPARISON_HEADING));
    println!("{}", tr.t(keys::HELP_COMPARISON));
    let scenario = prompt_scenario(tr, &cfg.scenario)?;
    let issues = scenario.issues();
    if !issues.is_empty() {
        println!("{}", tr.t(keys::VALIDATION_FAILED));
        for issue in &issues {
            println!("  - {issue}");
        }
        return Ok(());
    }
    println!("{}", tr.t(keys::VENDOR_ID_LIST));
    println!("  {}", vendor_id_line());
    let raw = read_line(&format!(
        "{} ({}{}): ",
        tr.t(keys::PROMPT_VENDOR_IDS),
        tr.t(keys::PROMPT_DEFAULT_HINT),
        cfg.vendors.join(",")
    ))?;
    let requested: Vec<String> = if raw.trim().is_empty() {
        cfg.vendors.clone()
    } else {
        raw.split(',').map(str::to_string).collect()
    };
    let requested = normalize_vendor_ids(&requested);
    let id_refs: Vec<&str> = requested.iter().map(String::as_str).collect();
    let report = tco::build_report(&id_refs, &scenario, &cfg.promoted_vendor);
    if report.entries.is_empty() {
        println!("{}", tr.t(keys::NO_VENDORS_RESOLVED));
        return Ok(());
    }
    print_report(tr, &report);
    Ok(())
}

/// 시나리오 입력을 기본값과 함께 받는다. 범위 검증은 호출 측에서 수행한다.
fn prompt_scenario(tr: &Translator, seed: &Scenario) -> Result<Scenario, AppError> {
    let devices = read_i64_or_default(tr, tr.t(keys::PROMPT_DEVICES), seed.devices)?;
    let users = read_i64_or_default(tr, tr.t(keys::PROMPT_USERS), seed.users)?;
    println!("{}", tr.t(keys::INDUSTRY_KEY_LIST));
    println!("  {}", industry_key_line());
    let industry = read_string_or_default(tr, tr.t(keys::PROMPT_INDUSTRY), &seed.industry)?;
    let years = read_years_or_default(tr, seed.years)?;
    let include_compliance =
        read_bool_or_default(tr, tr.t(keys::PROMPT_INCLUDE_COMPLIANCE), seed.include_compliance)?;
    let include_risk_reduction =
        read_bool_or_default(tr, tr.t(keys::PROMPT_INCLUDE_RISK), seed.include_risk_reduction)?;
    let has_existing_nac =
        read_bool_or_default(tr, tr.t(keys::PROMPT_HAS_EXISTING), seed.has_existing_nac)?;
    let existing_vendor_id = if has_existing_nac {
        let raw = read_line(&format!("{}: ", tr.t(keys::PROMPT_EXISTING_VENDOR)))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            seed.existing_vendor_id.clone()
        } else {
            Some(trimmed.to_lowercase())
        }
    } else {
        None
    };
    Ok(Scenario {
        devices,
        users,
        industry,
        years,
        include_compliance,
        include_risk_reduction,
        has_existing_nac,
        existing_vendor_id,
    })
}

/// 비교 보고서를 표 형태로 출력한다. 대화형 메뉴와 단발 실행이 공유한다.
pub fn print_report(tr: &Translator, report: &ComparisonReport) {
    let horizon = report.scenario.years;
    println!("{}", tr.t(keys::RESULT_HEADING));
    for entry in &report.entries {
        println!("\n[{}] {}", entry.vendor_id, entry.vendor_name);
        println!("{} {}", tr.t(keys::RESULT_TCO_AT), format_usd(entry.cost.at(horizon)));
        println!("{} {}", tr.t(keys::RESULT_YEAR1), format_usd(entry.cost.year1_usd));
        println!("{} {}", tr.t(keys::RESULT_YEAR2), format_usd(entry.cost.year2_usd));
        println!("{} {}", tr.t(keys::RESULT_YEAR3), format_usd(entry.cost.year3_usd));
        println!("{} {}", tr.t(keys::RESULT_YEAR5), format_usd(entry.cost.year5_usd));
        println!(
            "{} {}",
            tr.t(keys::RESULT_OPERATIONAL),
            format_usd(entry.roi.operational_savings_usd)
        );
        println!(
            "{} {}",
            tr.t(keys::RESULT_COMPLIANCE),
            format_usd(entry.roi.compliance_savings_usd)
        );
        println!(
            "{} {}",
            tr.t(keys::RESULT_BREACH),
            format_usd(entry.roi.breach_risk_savings_usd)
        );
        println!(
            "{} {}",
            tr.t(keys::RESULT_TOTAL_SAVINGS),
            format_usd(entry.roi.total_annual_savings_usd)
        );
        match entry.roi.payback_years {
            Some(years) => println!(
                "{} {:.1} {}",
                tr.t(keys::RESULT_PAYBACK),
                years,
                tr.t(keys::YEARS_SUFFIX)
            ),
            None => println!(
                "{} {}",
                tr.t(keys::RESULT_PAYBACK),
                tr.t(keys::PAYBACK_NOT_REACHABLE)
            ),
        }
    }
    match &report.summary {
        Some(summary) => {
            println!("{}", tr.t(keys::SUMMARY_HEADING));
            println!(
                "{} {} (TCO {})",
                tr.t(keys::SUMMARY_REFERENCE),
                summary.reference_name,
                format_usd(summary.reference_tco_usd)
            );
            for rival in &summary.rivals {
                println!(
                    "  vs {}: TCO {}, {} {} ({:.1}%)",
                    rival.vendor_name,
                    format_usd(rival.tco_usd),
                    tr.t(keys::SUMMARY_SAVINGS),
                    format_usd(rival.savings_usd),
                    rival.savings_pct
                );
            }
        }
        None => println!("{}", tr.t(keys::SUMMARY_REFERENCE_MISSING)),
    }
    println!("{}", tr.t(keys::RANKING_HEADING));
    for (rank, score) in report.ranking.iter().enumerate() {
        println!(
            "{}. {}: {:.1} {}",
            rank + 1,
            score.vendor_name,
            score.score,
            tr.t(keys::SCORE_SUFFIX)
        );
    }
}

/// 벤더 카탈로그 메뉴를 처리한다.
pub fn handle_vendor_catalog(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::VENDOR_CATALOG_HEADING));
    println!("{}", tr.t(keys::HELP_VENDOR_CATALOG));
    for vendor in vendor_db::vendors() {
        println!("  {:<16} {}", vendor.id, vendor.name);
    }
    let raw = read_line(tr.t(keys::PROMPT_VENDOR_DETAIL))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let Some(vendor) = vendor_db::find_vendor(trimmed) else {
        println!("{}", tr.t(keys::VENDOR_NOT_FOUND));
        return Ok(());
    };
    print_vendor_detail(tr, vendor);
    let raw = read_line(tr.t(keys::PROMPT_ALIGN_INDUSTRY))?;
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        let industry = industry_db::industry_or_general(trimmed);
        println!("{} [{}]", tr.t(keys::ALIGNMENT_HEADING), industry.name);
        for (framework, coverage) in industry_db::framework_alignment(vendor, industry) {
            match coverage {
                Some(pct) => println!("  {framework}: {pct:.0}%"),
                None => println!("  {framework}: {}", tr.t(keys::ALIGNMENT_MISSING)),
            }
        }
    }
    Ok(())
}

fn print_vendor_detail(tr: &Translator, vendor: &VendorRecord) {
    println!("\n[{}] {}", vendor.id, vendor.name);
    println!(
        "{} ${:.2}",
        tr.t(keys::VENDOR_PRICE),
        vendor.per_device_monthly_usd
    );
    println!(
        "{} {:.0}%",
        tr.t(keys::VENDOR_IMPL_FACTOR),
        vendor.implementation_cost_factor * 100.0
    );
    println!(
        "{} {:.1} h",
        tr.t(keys::VENDOR_ADMIN_HOURS),
        vendor.admin_hours_per_week_per_1k
    );
    println!("{} {:.0}%", tr.t(keys::VENDOR_AUTOMATION), vendor.automation_level_pct);
    println!(
        "{} {:.0} {}",
        tr.t(keys::VENDOR_ZERO_TRUST),
        vendor.zero_trust_score,
        tr.t(keys::SCORE_SUFFIX)
    );
    println!(
        "{} {} {}",
        tr.t(keys::VENDOR_DEPLOYMENT),
        vendor.deployment_days,
        tr.t(keys::DAYS_SUFFIX)
    );
    println!("{}", tr.t(keys::VENDOR_RISK_HEADING));
    println!(
        "  {} {:.0}%",
        tr.t(keys::RISK_UNAUTHORIZED),
        vendor.risk_reduction.unauthorized_access_pct
    );
    println!(
        "  {} {:.0}%",
        tr.t(keys::RISK_LATERAL),
        vendor.risk_reduction.lateral_movement_pct
    );
    println!(
        "  {} {:.0}%",
        tr.t(keys::RISK_DATA_BREACH),
        vendor.risk_reduction.data_breach_pct
    );
    println!(
        "  {} {:.0}%",
        tr.t(keys::RISK_INSIDER),
        vendor.risk_reduction.insider_threat_pct
    );
    println!(
        "  {} {:.0}%",
        tr.t(keys::RISK_COMPLIANCE),
        vendor.risk_reduction.compliance_violation_pct
    );
    println!("{}", tr.t(keys::VENDOR_COMPLIANCE_HEADING));
    for coverage in vendor.compliance {
        println!("  {}: {:.0}%", coverage.framework, coverage.coverage_pct);
    }
}

/// 산업 프로파일 메뉴를 처리한다.
pub fn handle_industry_catalog(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INDUSTRY_CATALOG_HEADING));
    println!("{}", tr.t(keys::HELP_INDUSTRY_CATALOG));
    for industry in industry_db::industries() {
        print_industry(tr, industry);
    }
    Ok(())
}

fn print_industry(tr: &Translator, industry: &IndustryProfile) {
    println!("\n[{}] {}", industry.key, industry.name);
    println!(
        "{} {}",
        tr.t(keys::INDUSTRY_BREACH_COST),
        format_usd(industry.avg_breach_cost_usd)
    );
    println!(
        "{} {:.0}%",
        tr.t(keys::INDUSTRY_PROBABILITY),
        industry.breach_probability * 100.0
    );
    println!(
        "{} x{:.1}",
        tr.t(keys::INDUSTRY_MULTIPLIER),
        industry.compliance_cost_multiplier
    );
    println!(
        "{} {}",
        tr.t(keys::INDUSTRY_FRAMEWORKS),
        industry.required_frameworks.join(", ")
    );
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or("auto")
    );
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_PROMOTED), cfg.promoted_vendor);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_VENDORS), cfg.vendors.join(", "));
    println!(
        "{} devices={}, users={}, industry={}, years={}",
        tr.t(keys::SETTINGS_CURRENT_SCENARIO),
        cfg.scenario.devices,
        cfg.scenario.users,
        cfg.scenario.industry,
        cfg.scenario.years.as_years()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" | "0" => return Ok(()),
        "1" => {
            let raw = read_line(tr.t(keys::PROMPT_LANGUAGE))?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.language = Some(trimmed.to_lowercase());
        }
        "2" => {
            cfg.scenario = prompt_scenario(tr, &cfg.scenario)?;
        }
        "3" => {
            println!("{}", tr.t(keys::VENDOR_ID_LIST));
            println!("  {}", vendor_id_line());
            let raw = read_line(&format!("{}: ", tr.t(keys::PROMPT_VENDOR_IDS)))?;
            let requested: Vec<String> = raw.split(',').map(str::to_string).collect();
            let requested = normalize_vendor_ids(&requested);
            if requested.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.vendors = requested;
        }
        "4" => {
            let raw = read_line(tr.t(keys::PROMPT_PROMOTED))?;
            let Some(vendor) = vendor_db::find_vendor(raw.trim()) else {
                println!("{}", tr.t(keys::VENDOR_NOT_FOUND));
                return Ok(());
            };
            cfg.promoted_vendor = vendor.id.to_string();
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn vendor_id_line() -> String {
    let ids: Vec<&str> = vendor_db::vendors().iter().map(|v| v.id).collect();
    ids.join(", ")
}

fn industry_key_line() -> String {
    let keys: Vec<&str> = industry_db::industries().iter().map(|i| i.key).collect();
    keys.join(", ")
}

/// USD 금액을 천 단위 구분 기호와 함께 정수로 표기한다.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

fn group_thousands(mut value: u64) -> String {
    let mut groups: Vec<u64> = Vec::new();
    loop {
        groups.push(value % 1000);
        value /= 1000;
        if value == 0 {
            break;
        }
    }
    let mut out = groups
        .pop()
        .map(|g| g.to_string())
        .unwrap_or_else(|| "0".to_string());
    while let Some(group) = groups.pop() {
        out.push_str(&format!(",{group:03}"));
    }
    out
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_string_or_default(tr: &Translator, prompt: &str, default: &str) -> Result<String, AppError> {
    let raw = read_line(&format!(
        "{prompt} ({}{default}): ",
        tr.t(keys::PROMPT_DEFAULT_HINT)
    ))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn read_i64_or_default(tr: &Translator, prompt: &str, default: i64) -> Result<i64, AppError> {
    loop {
        let raw = read_line(&format!(
            "{prompt} ({}{default}): ",
            tr.t(keys::PROMPT_DEFAULT_HINT)
        ))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_bool_or_default(tr: &Translator, prompt: &str, default: bool) -> Result<bool, AppError> {
    let hint = if default { "y" } else { "n" };
    loop {
        let raw = read_line(&format!(
            "{prompt} ({}{hint}): ",
            tr.t(keys::PROMPT_DEFAULT_HINT)
        ))?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_years_or_default(
    tr: &Translator,
    default: ProjectionYears,
) -> Result<ProjectionYears, AppError> {
    loop {
        let raw = read_line(&format!(
            "{} ({}{}): ",
            tr.t(keys::PROMPT_YEARS),
            tr.t(keys::PROMPT_DEFAULT_HINT),
            default.as_years()
        ))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<u32>() {
            Ok(n) => match ProjectionYears::try_from(n) {
                Ok(years) => return Ok(years),
                Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
            },
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
