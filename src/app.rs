use std::path::Path;

use crate::climate::{ClimateError, ClimateTable};
use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::report::{self, ReportContext};
use crate::scenario::{self, ScenarioError};
use crate::sim::{self, SimulationError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 지역 기온 조회 오류
    Climate(ClimateError),
    /// 시뮬레이션 입력 검증 오류
    Simulation(SimulationError),
    /// 시나리오 파일 오류
    Scenario(ScenarioError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Climate(e) => write!(f, "기온 자료 오류: {e}"),
            AppError::Simulation(e) => write!(f, "시뮬레이션 입력 오류: {e}"),
            AppError::Scenario(e) => write!(f, "시나리오 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ClimateError> for AppError {
    fn from(value: ClimateError) -> Self {
        AppError::Climate(value)
    }
}

impl From<SimulationError> for AppError {
    fn from(value: SimulationError) -> Self {
        AppError::Simulation(value)
    }
}

impl From<ScenarioError> for AppError {
    fn from(value: ScenarioError) -> Self {
        AppError::Scenario(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    cfg: &mut Config,
    config_path: &Path,
    tr: &Translator,
    table: &ClimateTable,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::RunSimulation => ui_cli::handle_run_simulation(tr, cfg, table)?,
            MenuChoice::ListRegions => ui_cli::handle_list_regions(tr, table),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, cfg)?;
                cfg.save(config_path)?;
            }
            MenuChoice::Exit => {
                cfg.save(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 시나리오 파일 기반 일괄 실행. 결과를 출력하고 요청 시 보고서를 저장한다.
pub fn run_scenario(
    tr: &Translator,
    table: &ClimateTable,
    scenario_path: &Path,
    report_path: Option<&Path>,
) -> Result<(), AppError> {
    let file = scenario::load(scenario_path)?;
    let input = file.to_input(table)?;
    let result = sim::run_simulation(&input)?;

    ui_cli::print_result(tr, &input.cost, &result);

    if let Some(path) = report_path {
        let ctx = ReportContext {
            region: &input.profile.region,
            usage: file.usage,
            floor_area_m2: input.geometry.footprint.floor_area_m2(),
            average_gain_w_per_m2: input.schedule.average_density_w_per_m2(),
            profile_code: file.calibration.profile.code(),
            cost: &input.cost,
            result: &result,
        };
        report::save(path, &report::render(tr, &ctx))?;
        println!("{} {}", tr.t(keys::REPORT_SAVED), path.display());
    }
    Ok(())
}
