use clap::Parser;

use nac_tco_analyzer::scenario::{ProjectionYears, Scenario};
use nac_tco_analyzer::{app, config, i18n};

/// NAC 도입 TCO/ROI 비교 도구.
#[derive(Parser, Debug)]
#[command(name = "nac_tco_analyzer", version, about = "NAC TCO/ROI Analyzer")]
struct CliArgs {
    /// 언어 코드 (auto/ko-kr/ko/en-us/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,

    /// 장치 수
    #[arg(long)]
    devices: Option<i64>,

    /// 사용자 수
    #[arg(long)]
    users: Option<i64>,

    /// 산업 키 (예: healthcare)
    #[arg(long)]
    industry: Option<String>,

    /// 분석 기간 [년] (1/2/3/5)
    #[arg(long)]
    years: Option<u32>,

    /// 비교할 벤더 id 목록 (쉼표 구분). 지정하면 메뉴 없이 보고서를 한 번 출력한다.
    #[arg(long)]
    vendors: Option<String>,

    /// 컴플라이언스 절감 제외
    #[arg(long)]
    no_compliance: bool,

    /// 침해 위험 절감 제외
    #[arg(long)]
    no_risk_reduction: bool,

    /// 기존 NAC 교체 시나리오로 계산
    #[arg(long)]
    has_existing_nac: bool,

    /// 기존 NAC 벤더 id (지정 시 교체 시나리오로 간주)
    #[arg(long)]
    existing_vendor: Option<String>,

    /// 보고서를 JSON으로 출력
    #[arg(long)]
    json: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&args.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, None);
    log::debug!("language resolved to {}", tr.language_code());
    if let Some(ref vendors) = args.vendors {
        let scenario = merge_scenario(&cfg, &args)?;
        let vendor_ids: Vec<String> = vendors.split(',').map(str::to_string).collect();
        app::run_report(&cfg, &tr, &scenario, &vendor_ids, args.json)?;
        return Ok(());
    }
    app::run(&mut cfg, &tr)?;
    Ok(())
}

/// 설정의 기본 시나리오 위에 CLI 플래그를 덮어쓴다.
fn merge_scenario(
    cfg: &config::Config,
    args: &CliArgs,
) -> Result<Scenario, Box<dyn std::error::Error>> {
    let mut scenario = cfg.scenario.clone();
    if let Some(devices) = args.devices {
        scenario.devices = devices;
    }
    if let Some(users) = args.users {
        scenario.users = users;
    }
    if let Some(ref industry) = args.industry {
        scenario.industry = industry.clone();
    }
    if let Some(years) = args.years {
        scenario.years = ProjectionYears::try_from(years)?;
    }
    if args.no_compliance {
        scenario.include_compliance = false;
    }
    if args.no_risk_reduction {
        scenario.include_risk_reduction = false;
    }
    if args.has_existing_nac {
        scenario.has_existing_nac = true;
    }
    if let Some(ref existing) = args.existing_vendor {
        scenario.has_existing_nac = true;
        scenario.existing_vendor_id = Some(existing.to_lowercase());
    }
    Ok(scenario)
}
