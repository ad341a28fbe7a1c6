//! 한국어/영어 UI 문자열. CLI 플래그 → 설정 → 시스템 로케일 순으로 언어를 정한다.

use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RUN: &str = "main_menu.run";
    pub const MAIN_MENU_REGIONS: &str = "main_menu.regions";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";

    pub const RUN_HEADING: &str = "run.heading";
    pub const PROMPT_REGION: &str = "run.prompt_region";
    pub const PROMPT_USAGE: &str = "run.prompt_usage";
    pub const USAGE_RESIDENTIAL: &str = "run.usage_residential";
    pub const USAGE_COMMERCIAL: &str = "run.usage_commercial";
    pub const PROMPT_FLOOR_AREA: &str = "run.prompt_floor_area";
    pub const PROMPT_HEIGHT: &str = "run.prompt_height";
    pub const PROMPT_GLAZING_MODE: &str = "run.prompt_glazing_mode";
    pub const PROMPT_WWR: &str = "run.prompt_wwr";
    pub const PROMPT_WWR_NORTH: &str = "run.prompt_wwr_north";
    pub const PROMPT_WWR_SOUTH: &str = "run.prompt_wwr_south";
    pub const PROMPT_WWR_EAST: &str = "run.prompt_wwr_east";
    pub const PROMPT_WWR_WEST: &str = "run.prompt_wwr_west";
    pub const PROMPT_GLAZING_U: &str = "run.prompt_glazing_u";
    pub const PROMPT_SHGC: &str = "run.prompt_shgc";
    pub const PROMPT_WALL_U: &str = "run.prompt_wall_u";
    pub const GAIN_HEADING: &str = "run.gain_heading";
    pub const PROMPT_GAIN_DAY: &str = "run.prompt_gain_day";
    pub const PROMPT_GAIN_EVENING: &str = "run.prompt_gain_evening";
    pub const PROMPT_GAIN_NIGHT: &str = "run.prompt_gain_night";
    pub const PROMPT_COOLING_SETPOINT: &str = "run.prompt_cooling_setpoint";
    pub const PROMPT_HEATING_SETPOINT: &str = "run.prompt_heating_setpoint";
    pub const PROMPT_SLICE_MODE: &str = "run.prompt_slice_mode";
    pub const PROMPT_USE_EXTREMES: &str = "run.prompt_use_extremes";
    pub const PROMPT_SUMMER_MAX: &str = "run.prompt_summer_max";
    pub const PROMPT_SUMMER_MIN: &str = "run.prompt_summer_min";
    pub const PROMPT_WINTER_MAX: &str = "run.prompt_winter_max";
    pub const PROMPT_WINTER_MIN: &str = "run.prompt_winter_min";
    pub const PROMPT_PROFILE: &str = "run.prompt_profile";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_COOLING_COST: &str = "result.cooling_cost";
    pub const RESULT_HEATING_COST: &str = "result.heating_cost";
    pub const RESULT_COOLING_ENERGY: &str = "result.cooling_energy";
    pub const RESULT_HEATING_ENERGY: &str = "result.heating_energy";
    pub const RESULT_MONTHLY_HEADING: &str = "result.monthly_heading";
    pub const RESULT_MONTHLY_COLUMNS: &str = "result.monthly_columns";
    pub const CURRENCY_UNIT: &str = "result.currency_unit";
    pub const EFFICIENCY_LABEL: &str = "result.efficiency_label";

    pub const PROMPT_SAVE_REPORT: &str = "report.prompt_save";
    pub const REPORT_SAVED: &str = "report.saved";
    pub const REPORT_REGION: &str = "report.region";
    pub const REPORT_COOLING_ENERGY: &str = "report.cooling_energy";
    pub const REPORT_HEATING_ENERGY: &str = "report.heating_energy";
    pub const REPORT_AVG_GAIN: &str = "report.avg_gain";
    pub const REPORT_FLOOR_AREA: &str = "report.floor_area";
    pub const REPORT_COOLING_COST: &str = "report.cooling_cost";
    pub const REPORT_HEATING_COST: &str = "report.heating_cost";
    pub const REPORT_PROFILE: &str = "report.profile";
    pub const METHOD_HEADING: &str = "report.method_heading";
    pub const METHOD_CONDUCTION: &str = "report.method_conduction";
    pub const METHOD_SOLAR: &str = "report.method_solar";
    pub const METHOD_INTERNAL: &str = "report.method_internal";
    pub const METHOD_NET: &str = "report.method_net";
    pub const METHOD_COST: &str = "report.method_cost";
    pub const METHOD_DISCLAIMER: &str = "report.method_disclaimer";

    pub const REGIONS_HEADING: &str = "regions.heading";
    pub const REGIONS_COLUMNS: &str = "regions.columns";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const PROMPT_COP: &str = "settings.prompt_cop";
    pub const PROMPT_EFFICIENCY: &str = "settings.prompt_efficiency";
    pub const PROMPT_ELEC_PRICE: &str = "settings.prompt_elec_price";
    pub const PROMPT_GAS_PRICE: &str = "settings.prompt_gas_price";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let code = code.to_lowercase();
        if code.starts_with("en") {
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
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let code = code.trim().to_lowercase();
    match code.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(locale: &str) -> Option<String> {
    let lang = locale
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
    if let Some(locale) = get_locale() {
        if let Some(lang) = normalize_locale_string(&locale) {
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

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 한국형 건물 에너지 시뮬레이터 ===",
        MAIN_MENU_RUN => "1) 시뮬레이션 실행",
        MAIN_MENU_REGIONS => "2) 지역별 기온 보기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_OUT_OF_RANGE => "허용 범위를 벗어났습니다.",
        RUN_HEADING => "\n-- 시뮬레이션 입력 --",
        PROMPT_REGION => "대상 지역을 선택하세요 (엔터 시 기본값).",
        PROMPT_USAGE => "건물 용도 (1=주택, 2=상업용 건물) [1]: ",
        USAGE_RESIDENTIAL => "주택",
        USAGE_COMMERCIAL => "상업용 건물",
        PROMPT_FLOOR_AREA => "건물 바닥 면적 [m²]",
        PROMPT_HEIGHT => "층 높이 [m]",
        PROMPT_GLAZING_MODE => "창면적비 입력 방식 (1=단일, 2=방위별) [1]: ",
        PROMPT_WWR => "창면적비(WWR, 0~1)",
        PROMPT_WWR_NORTH => "북측 WWR (0~1)",
        PROMPT_WWR_SOUTH => "남측 WWR (0~1)",
        PROMPT_WWR_EAST => "동측 WWR (0~1)",
        PROMPT_WWR_WEST => "서측 WWR (0~1)",
        PROMPT_GLAZING_U => "유리 열관류율 [W/m²K]",
        PROMPT_SHGC => "열취득계수(SHGC, 0~1)",
        PROMPT_WALL_U => "외벽 열관류율 [W/m²K]",
        GAIN_HEADING => "시간대별 내부 발열 [W/m²]",
        PROMPT_GAIN_DAY => "08:00~16:00 발열 [W/m²]",
        PROMPT_GAIN_EVENING => "16:00~24:00 발열 [W/m²]",
        PROMPT_GAIN_NIGHT => "00:00~08:00 발열 [W/m²]",
        PROMPT_COOLING_SETPOINT => "여름 냉방 온도 [°C]",
        PROMPT_HEATING_SETPOINT => "겨울 난방 온도 [°C]",
        PROMPT_SLICE_MODE => "시간대 분할 (1=24시간 평균, 2=3구간) [1]: ",
        PROMPT_USE_EXTREMES => "계절 극값 온도를 입력하시겠습니까? (y/N): ",
        PROMPT_SUMMER_MAX => "여름 최고 기온 [°C]",
        PROMPT_SUMMER_MIN => "여름 최저 기온 [°C]",
        PROMPT_WINTER_MAX => "겨울 최고 기온 [°C]",
        PROMPT_WINTER_MIN => "겨울 최저 기온 [°C]",
        PROMPT_PROFILE => "보정 프로파일을 선택하세요 (엔터 시 기본값).",
        RESULT_HEADING => "\n=== 시뮬레이션 결과 ===",
        RESULT_COOLING_COST => "연간 냉방비:",
        RESULT_HEATING_COST => "연간 난방비:",
        RESULT_COOLING_ENERGY => "연간 냉방 에너지:",
        RESULT_HEATING_ENERGY => "연간 난방 에너지:",
        RESULT_MONTHLY_HEADING => "\n월별 부하 [kWh]",
        RESULT_MONTHLY_COLUMNS => "  월          난방          냉방",
        CURRENCY_UNIT => "원",
        EFFICIENCY_LABEL => "효율",
        PROMPT_SAVE_REPORT => "보고서 저장 경로 (건너뛰려면 엔터): ",
        REPORT_SAVED => "보고서를 저장했습니다:",
        REPORT_REGION => "지역",
        REPORT_COOLING_ENERGY => "연간 냉방 에너지",
        REPORT_HEATING_ENERGY => "연간 난방 에너지",
        REPORT_AVG_GAIN => "평균 내부 발열",
        REPORT_FLOOR_AREA => "적용 유효 면적",
        REPORT_COOLING_COST => "연간 냉방비",
        REPORT_HEATING_COST => "연간 난방비",
        REPORT_PROFILE => "보정 프로파일",
        METHOD_HEADING => "[에너지 산출 근거]",
        METHOD_CONDUCTION => "전도 열손실: Q = (U_유리 × A_유리 + U_외벽 × A_외벽) × ΔT",
        METHOD_SOLAR => "일사 열취득: Q = A_유리 × SHGC × 일사 강도 × 방위 가중치",
        METHOD_INTERNAL => "내부 발열: Q = (재실 + 조명 + 장비) × 바닥 면적",
        METHOD_NET => "순부하: Q_전도 − Q_일사 − Q_내부 (양수면 난방, 음수면 냉방)",
        METHOD_COST => "냉방비 = (냉방부하 / COP) × 전기단가, 난방비 = (난방부하 / 효율) × 가스단가",
        METHOD_DISCLAIMER => {
            "※ 정적 모델이므로 기밀도, 환기량, 설비 제어 방식에 따라 실제와 오차가 있을 수 있습니다."
        }
        REGIONS_HEADING => "\n-- 지역별 월평균 기온 --",
        REGIONS_COLUMNS => "지역 (1월 / 8월 [°C])",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_OPTIONS => "1) 언어  2) 기본 보정 프로파일  3) 요금/효율",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        PROMPT_LANGUAGE => "언어 코드 입력 (ko/en/auto): ",
        PROMPT_COP => "냉방 COP",
        PROMPT_EFFICIENCY => "난방 효율 (0~1)",
        PROMPT_ELEC_PRICE => "전기 단가 [원/kWh]",
        PROMPT_GAS_PRICE => "가스 단가 [원/kWh]",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let text = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Korean Building Energy Simulator ===",
        MAIN_MENU_RUN => "1) Run simulation",
        MAIN_MENU_REGIONS => "2) Show regional temperatures",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Try again.",
        ERROR_INVALID_NUMBER => "Enter a number.",
        ERROR_OUT_OF_RANGE => "Value is out of the allowed range.",
        RUN_HEADING => "\n-- Simulation input --",
        PROMPT_REGION => "Select a target region (Enter for default).",
        PROMPT_USAGE => "Building use (1=residential, 2=commercial) [1]: ",
        USAGE_RESIDENTIAL => "Residential",
        USAGE_COMMERCIAL => "Commercial building",
        PROMPT_FLOOR_AREA => "Floor area [m²]",
        PROMPT_HEIGHT => "Storey height [m]",
        PROMPT_GLAZING_MODE => "Window-to-wall ratio mode (1=uniform, 2=per orientation) [1]: ",
        PROMPT_WWR => "Window-to-wall ratio (0-1)",
        PROMPT_WWR_NORTH => "North WWR (0-1)",
        PROMPT_WWR_SOUTH => "South WWR (0-1)",
        PROMPT_WWR_EAST => "East WWR (0-1)",
        PROMPT_WWR_WEST => "West WWR (0-1)",
        PROMPT_GLAZING_U => "Glazing U-value [W/m²K]",
        PROMPT_SHGC => "Solar heat gain coefficient (0-1)",
        PROMPT_WALL_U => "Opaque wall U-value [W/m²K]",
        GAIN_HEADING => "Internal gains by time slice [W/m²]",
        PROMPT_GAIN_DAY => "Gain 08:00-16:00 [W/m²]",
        PROMPT_GAIN_EVENING => "Gain 16:00-24:00 [W/m²]",
        PROMPT_GAIN_NIGHT => "Gain 00:00-08:00 [W/m²]",
        PROMPT_COOLING_SETPOINT => "Summer cooling setpoint [°C]",
        PROMPT_HEATING_SETPOINT => "Winter heating setpoint [°C]",
        PROMPT_SLICE_MODE => "Time slicing (1=24h average, 2=three slices) [1]: ",
        PROMPT_USE_EXTREMES => "Enter seasonal extreme temperatures? (y/N): ",
        PROMPT_SUMMER_MAX => "Summer maximum [°C]",
        PROMPT_SUMMER_MIN => "Summer minimum [°C]",
        PROMPT_WINTER_MAX => "Winter maximum [°C]",
        PROMPT_WINTER_MIN => "Winter minimum [°C]",
        PROMPT_PROFILE => "Select a calibration profile (Enter for default).",
        RESULT_HEADING => "\n=== Simulation result ===",
        RESULT_COOLING_COST => "Annual cooling cost:",
        RESULT_HEATING_COST => "Annual heating cost:",
        RESULT_COOLING_ENERGY => "Annual cooling energy:",
        RESULT_HEATING_ENERGY => "Annual heating energy:",
        RESULT_MONTHLY_HEADING => "\nMonthly loads [kWh]",
        RESULT_MONTHLY_COLUMNS => "  M       heating       cooling",
        CURRENCY_UNIT => "KRW",
        EFFICIENCY_LABEL => "efficiency",
        PROMPT_SAVE_REPORT => "Report file path (Enter to skip): ",
        REPORT_SAVED => "Report saved:",
        REPORT_REGION => "Region",
        REPORT_COOLING_ENERGY => "Annual cooling energy",
        REPORT_HEATING_ENERGY => "Annual heating energy",
        REPORT_AVG_GAIN => "Average internal gain",
        REPORT_FLOOR_AREA => "Effective floor area",
        REPORT_COOLING_COST => "Annual cooling cost",
        REPORT_HEATING_COST => "Annual heating cost",
        REPORT_PROFILE => "Calibration profile",
        METHOD_HEADING => "[Calculation basis]",
        METHOD_CONDUCTION => "Conduction loss: Q = (U_glass × A_glass + U_wall × A_wall) × ΔT",
        METHOD_SOLAR => "Solar gain: Q = A_glass × SHGC × solar intensity × orientation weight",
        METHOD_INTERNAL => "Internal gain: Q = (occupants + lighting + equipment) × floor area",
        METHOD_NET => "Net load: Q_cond − Q_sol − Q_int (positive=heating, negative=cooling)",
        METHOD_COST => {
            "Cooling cost = (cooling load / COP) × electricity price, heating cost = (heating load / efficiency) × gas price"
        }
        METHOD_DISCLAIMER => {
            "Note: this is a static model; airtightness, ventilation and HVAC control cause deviations from reality."
        }
        REGIONS_HEADING => "\n-- Monthly mean temperatures by region --",
        REGIONS_COLUMNS => "Region (Jan / Aug [°C])",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_OPTIONS => "1) Language  2) Default calibration profile  3) Prices/efficiency",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_SAVED => "Settings saved.",
        PROMPT_LANGUAGE => "Language code (ko/en/auto): ",
        PROMPT_COP => "Cooling COP",
        PROMPT_EFFICIENCY => "Heating efficiency (0-1)",
        PROMPT_ELEC_PRICE => "Electricity price [KRW/kWh]",
        PROMPT_GAS_PRICE => "Gas price [KRW/kWh]",
        _ => return None,
    };
    Some(text)
}
