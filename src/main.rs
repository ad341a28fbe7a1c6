use std::path::PathBuf;

use clap::Parser;

use building_energy_simulator::climate::ClimateTable;
use building_energy_simulator::{app, config, i18n};

/// 한국형 건물 에너지 시뮬레이터 CLI.
#[derive(Debug, Parser)]
#[command(name = "building_energy_simulator")]
struct Args {
    /// 언어 코드 (ko/en/auto)
    #[arg(long)]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// 시나리오 TOML 파일 (지정 시 대화형 메뉴 없이 바로 실행)
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// 시나리오 실행 결과 보고서 저장 경로
    #[arg(long)]
    report: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut cfg = config::load_or_default(&args.config)?;
    let lang = i18n::resolve_language(args.lang.as_deref(), &cfg.language);
    let tr = i18n::Translator::new(&lang);
    let table = ClimateTable::korea();

    if let Some(scenario_path) = args.scenario.as_deref() {
        app::run_scenario(&tr, &table, scenario_path, args.report.as_deref())?;
        return Ok(());
    }
    app::run(&mut cfg, &args.config, &tr, &table)?;
    Ok(())
}
