use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::climate::ClimateTable;
use crate::config::{self, Config};
use crate::i18n::{keys, Translator};
use crate::report::{self, BuildingUse, ReportContext};
use crate::sim::calibration::CalibrationProfile;
use crate::sim::cost::CostModel;
use crate::sim::geometry::{BuildingGeometry, Footprint, GlazingModel};
use crate::sim::schedule::{InternalGainSchedule, SliceGain, SliceMode};
use crate::sim::setpoint::ComfortSetpointPolicy;
use crate::sim::temperature::SeasonalExtremes;
use crate::sim::{self, EnvelopePerformance, SimulationInput, SimulationResult};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RunSimulation,
    ListRegions,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_RUN));
    println!("{}", tr.t(keys::MAIN_MENU_REGIONS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::RunSimulation),
            "2" => return Ok(MenuChoice::ListRegions),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 대화형으로 입력을 수집해 시뮬레이션 한 건을 실행한다.
pub fn handle_run_simulation(
    tr: &Translator,
    cfg: &Config,
    table: &ClimateTable,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::RUN_HEADING));

    let defaults = &cfg.defaults;
    let region = select_region(tr, table, &defaults.region)?;
    let usage = select_usage(tr)?;

    let floor_area_m2 = read_f64_default(tr, keys::PROMPT_FLOOR_AREA, defaults.floor_area_m2)?;
    let height_m = read_f64_default(tr, keys::PROMPT_HEIGHT, defaults.height_m)?;

    let glazing = select_glazing(tr, defaults.wwr)?;
    let glazing_u = read_f64_default(tr, keys::PROMPT_GLAZING_U, defaults.glazing_u_w_per_m2k)?;
    let shgc = read_ratio_default(tr, keys::PROMPT_SHGC, defaults.shgc)?;
    let wall_u = read_f64_default(tr, keys::PROMPT_WALL_U, defaults.wall_u_w_per_m2k)?;

    println!("{}", tr.t(keys::GAIN_HEADING));
    let gains = vec![
        SliceGain::Lumped(read_f64_default(
            tr,
            keys::PROMPT_GAIN_DAY,
            defaults.gain_day_w_per_m2,
        )?),
        SliceGain::Lumped(read_f64_default(
            tr,
            keys::PROMPT_GAIN_EVENING,
            defaults.gain_evening_w_per_m2,
        )?),
        SliceGain::Lumped(read_f64_default(
            tr,
            keys::PROMPT_GAIN_NIGHT,
            defaults.gain_night_w_per_m2,
        )?),
    ];

    let cooling_c = read_f64_in_range(
        tr,
        keys::PROMPT_COOLING_SETPOINT,
        defaults.cooling_setpoint_c,
        config::COOLING_SETPOINT_RANGE,
    )?;
    let heating_c = read_f64_in_range(
        tr,
        keys::PROMPT_HEATING_SETPOINT,
        defaults.heating_setpoint_c,
        config::HEATING_SETPOINT_RANGE,
    )?;

    let slice_mode = select_slice_mode(tr)?;
    let extremes = if slice_mode == SliceMode::ThreeSlice {
        read_extremes(tr)?
    } else {
        None
    };
    let profile_choice = select_profile(tr, cfg.calibration)?;

    let schedule = InternalGainSchedule::new(gains);
    let average_gain_w_per_m2 = schedule.average_density_w_per_m2();
    let outdoor = table.profile(&region, extremes)?;

    let input = SimulationInput {
        geometry: BuildingGeometry {
            footprint: Footprint::Square { floor_area_m2 },
            height_m,
        },
        envelope: EnvelopePerformance {
            glazing_u_w_per_m2k: glazing_u,
            shgc,
            visible_transmittance: None,
            reflectance: None,
            wall_u_w_per_m2k: wall_u,
        },
        glazing,
        schedule,
        profile: outdoor,
        setpoints: ComfortSetpointPolicy {
            cooling_c,
            heating_c,
            neutral_c: defaults.neutral_setpoint_c,
        },
        slice_mode,
        calibration: profile_choice.params(),
        cost: cfg.cost,
    };
    let result = sim::run_simulation(&input)?;

    print_result(tr, &input.cost, &result);

    let save_path = read_line(tr.t(keys::PROMPT_SAVE_REPORT))?;
    let save_path = save_path.trim();
    if !save_path.is_empty() {
        let ctx = ReportContext {
            region: &region,
            usage,
            floor_area_m2,
            average_gain_w_per_m2,
            profile_code: profile_choice.code(),
            cost: &input.cost,
            result: &result,
        };
        report::save(Path::new(save_path), &report::render(tr, &ctx))?;
        println!("{} {}", tr.t(keys::REPORT_SAVED), save_path);
    }
    Ok(())
}

/// 지역별 월평균 기온 목록을 표시한다.
pub fn handle_list_regions(tr: &Translator, table: &ClimateTable) {
    println!("{}", tr.t(keys::REGIONS_HEADING));
    println!("{}", tr.t(keys::REGIONS_COLUMNS));
    for region in table.regions() {
        if region.monthly_mean_c.len() == 12 {
            println!(
                "{}: {:.1} / {:.1}",
                region.name, region.monthly_mean_c[0], region.monthly_mean_c[7]
            );
        } else {
            println!("{}: -", region.name);
        }
    }
}

/// 설정 메뉴를 처리한다. 변경 사항 저장은 호출자가 담당한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line(tr.t(keys::PROMPT_LANGUAGE))?;
            let lang = lang.trim();
            if !lang.is_empty() {
                cfg.language = lang.to_string();
            }
        }
        "2" => {
            cfg.calibration = select_profile(tr, cfg.calibration)?;
        }
        "3" => {
            cfg.cost = CostModel {
                cooling_cop: read_f64_default(tr, keys::PROMPT_COP, cfg.cost.cooling_cop)?,
                heating_efficiency: read_f64_default(
                    tr,
                    keys::PROMPT_EFFICIENCY,
                    cfg.cost.heating_efficiency,
                )?,
                electricity_price_per_kwh: read_f64_default(
                    tr,
                    keys::PROMPT_ELEC_PRICE,
                    cfg.cost.electricity_price_per_kwh,
                )?,
                gas_price_per_kwh: read_f64_default(
                    tr,
                    keys::PROMPT_GAS_PRICE,
                    cfg.cost.gas_price_per_kwh,
                )?,
            };
        }
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 결과 요약과 월별 부하를 출력한다.
pub fn print_result(tr: &Translator, cost: &CostModel, result: &SimulationResult) {
    let currency = tr.t(keys::CURRENCY_UNIT);
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} {} {} (COP {})",
        tr.t(keys::RESULT_COOLING_COST),
        report::format_number(result.cooling_cost, 0),
        currency,
        cost.cooling_cop
    );
    println!(
        "{} {} {} ({} {})",
        tr.t(keys::RESULT_HEATING_COST),
        report::format_number(result.heating_cost, 0),
        currency,
        tr.t(keys::EFFICIENCY_LABEL),
        cost.heating_efficiency
    );
    println!(
        "{} {} kWh",
        tr.t(keys::RESULT_COOLING_ENERGY),
        report::format_number(result.annual_cooling_kwh, 1)
    );
    println!(
        "{} {} kWh",
        tr.t(keys::RESULT_HEATING_ENERGY),
        report::format_number(result.annual_heating_kwh, 1)
    );
    println!("{}", tr.t(keys::RESULT_MONTHLY_HEADING));
    println!("{}", tr.t(keys::RESULT_MONTHLY_COLUMNS));
    for (month, load) in result.monthly_loads().iter().enumerate() {
        println!(
            "{:>3}  {:>12.1}  {:>12.1}",
            month + 1,
            load.heating_kwh,
            load.cooling_kwh
        );
    }
}

fn select_region(
    tr: &Translator,
    table: &ClimateTable,
    default: &str,
) -> Result<String, AppError> {
    println!("{}", tr.t(keys::PROMPT_REGION));
    let names = table.region_names();
    for (index, name) in names.iter().enumerate() {
        println!("{}) {}", index + 1, name);
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default.to_string());
        }
        if let Ok(number) = sel.parse::<usize>() {
            if number >= 1 && number <= names.len() {
                return Ok(names[number - 1].to_string());
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn select_usage(tr: &Translator) -> Result<BuildingUse, AppError> {
    loop {
        let sel = read_line(tr.t(keys::PROMPT_USAGE))?;
        match sel.trim() {
            "" | "1" => return Ok(BuildingUse::Residential),
            "2" => return Ok(BuildingUse::Commercial),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn select_glazing(tr: &Translator, default_wwr: f64) -> Result<GlazingModel, AppError> {
    loop {
        let sel = read_line(tr.t(keys::PROMPT_GLAZING_MODE))?;
        match sel.trim() {
            "" | "1" => {
                let wwr = read_ratio_default(tr, keys::PROMPT_WWR, default_wwr)?;
                return Ok(GlazingModel::Uniform { wwr });
            }
            "2" => {
                return Ok(GlazingModel::PerOrientation {
                    north: read_ratio_default(tr, keys::PROMPT_WWR_NORTH, default_wwr)?,
                    south: read_ratio_default(tr, keys::PROMPT_WWR_SOUTH, default_wwr)?,
                    east: read_ratio_default(tr, keys::PROMPT_WWR_EAST, default_wwr)?,
                    west: read_ratio_default(tr, keys::PROMPT_WWR_WEST, default_wwr)?,
                });
            }
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn select_slice_mode(tr: &Translator) -> Result<SliceMode, AppError> {
    loop {
        let sel = read_line(tr.t(keys::PROMPT_SLICE_MODE))?;
        match sel.trim() {
            "" | "1" => return Ok(SliceMode::Single),
            "2" => return Ok(SliceMode::ThreeSlice),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_extremes(tr: &Translator) -> Result<Option<SeasonalExtremes>, AppError> {
    let answer = read_line(tr.t(keys::PROMPT_USE_EXTREMES))?;
    if !matches!(answer.trim(), "y" | "Y") {
        return Ok(None);
    }
    Ok(Some(SeasonalExtremes {
        summer_max_c: read_f64(tr, keys::PROMPT_SUMMER_MAX)?,
        summer_min_c: read_f64(tr, keys::PROMPT_SUMMER_MIN)?,
        winter_max_c: read_f64(tr, keys::PROMPT_WINTER_MAX)?,
        winter_min_c: read_f64(tr, keys::PROMPT_WINTER_MIN)?,
    }))
}

fn select_profile(
    tr: &Translator,
    default: CalibrationProfile,
) -> Result<CalibrationProfile, AppError> {
    println!("{}", tr.t(keys::PROMPT_PROFILE));
    for (index, profile) in CalibrationProfile::ALL.iter().enumerate() {
        let marker = if *profile == default { "*" } else { " " };
        println!("{}) {}{}", index + 1, profile.code(), marker);
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default);
        }
        if let Ok(number) = sel.parse::<usize>() {
            if number >= 1 && number <= CalibrationProfile::ALL.len() {
                return Ok(CalibrationProfile::ALL[number - 1]);
            }
        }
        if let Some(profile) = CalibrationProfile::from_code(sel) {
            return Ok(profile);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{}: ", tr.t(key)))?;
        match s.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_default(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{}]: ", tr.t(key), default))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_ratio_default(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let value = read_f64_default(tr, key, default)?;
        if (0.0..=1.0).contains(&value) {
            return Ok(value);
        }
        println!("{}", tr.t(keys::ERROR_OUT_OF_RANGE));
    }
}

fn read_f64_in_range(
    tr: &Translator,
    key: &str,
    default: f64,
    range: (f64, f64),
) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} ({}~{}) [{}]: ", tr.t(key), range.0, range.1, default))?;
        let s = s.trim();
        let value = if s.is_empty() {
            default
        } else {
            match s.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
                    continue;
                }
            }
        };
        if (range.0..=range.1).contains(&value) {
            return Ok(value);
        }
        println!("{}", tr.t(keys::ERROR_OUT_OF_RANGE));
    }
}
